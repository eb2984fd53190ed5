use serde::Serialize;

use crate::modules::blog::application::ports::outgoing::BlogPostResult;
use crate::modules::content::application::domain::document::ContentDocument;
use crate::modules::content::application::domain::entities::{
    About, CertificationList, ExperienceList, Profile, SkillCategories,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;

/// Everything the public site renders. Sections without content are left
/// out of the JSON entirely so the site can hide them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicPortfolio {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<About>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<ExperienceList>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<SkillCategories>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<CertificationList>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<ProjectResult>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blog_posts: Option<Vec<BlogPostResult>>,
}

pub(crate) fn document_section<T: ContentDocument>(document: T) -> Option<T> {
    (!document.is_empty()).then_some(document)
}

pub(crate) fn list_section<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}
