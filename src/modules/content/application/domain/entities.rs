use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::content::application::domain::document::{ContentDocument, ContentKey};
use crate::shared::validation::{max_chars, optional_url, required, url, FieldError};

fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn trim_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub icon: String,
    pub url: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    pub company: String,
    pub titles: Vec<String>,
    pub social_links: Vec<SocialLink>,
}

impl ContentDocument for Profile {
    const KEY: ContentKey = ContentKey::Profile;

    fn validate(self) -> Result<Self, FieldError> {
        let name = required("name", &self.name)?;
        max_chars("name", &name, 100)?;

        let social_links = self
            .social_links
            .into_iter()
            .map(|link| {
                Ok(SocialLink {
                    icon: required("socialLinks.icon", &link.icon)?,
                    url: url("socialLinks.url", &link.url)?,
                    color: link.color.trim().to_string(),
                })
            })
            .collect::<Result<Vec<_>, FieldError>>()?;

        Ok(Profile {
            name,
            image_url: optional_url("imageUrl", self.image_url.as_deref())?,
            resume_url: optional_url("resumeUrl", self.resume_url.as_deref())?,
            company: self.company.trim().to_string(),
            titles: trim_list(self.titles),
            social_links,
        })
    }

    fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
    }
}

//
// ──────────────────────────────────────────────────────────
// About
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutWidget {
    pub id: String,
    pub icon: String,
    pub icon_color: String,
    pub heading: String,
    pub subheading: String,
    pub additional_fields: Vec<AdditionalField>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct About {
    /// Rendered as HTML by the public site.
    pub bio: String,
    pub widgets: Vec<AboutWidget>,
}

impl ContentDocument for About {
    const KEY: ContentKey = ContentKey::About;

    fn validate(self) -> Result<Self, FieldError> {
        let widgets = self
            .widgets
            .into_iter()
            .map(|widget| {
                let id = match widget.id.trim() {
                    "" => Uuid::new_v4().to_string(),
                    id => id.to_string(),
                };

                Ok(AboutWidget {
                    id,
                    heading: required("widgets.heading", &widget.heading)?,
                    icon: widget.icon.trim().to_string(),
                    icon_color: widget.icon_color.trim().to_string(),
                    subheading: widget.subheading.trim().to_string(),
                    additional_fields: widget
                        .additional_fields
                        .into_iter()
                        .filter(|f| !f.name.trim().is_empty())
                        .collect(),
                })
            })
            .collect::<Result<Vec<_>, FieldError>>()?;

        Ok(About {
            bio: self.bio.trim().to_string(),
            widgets,
        })
    }

    fn is_empty(&self) -> bool {
        self.bio.trim().is_empty() && self.widgets.is_empty()
    }
}

//
// ──────────────────────────────────────────────────────────
// Experience
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    /// HTML
    pub description: String,
    pub period: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
}

impl ExperienceEntry {
    pub fn validate(self) -> Result<Self, FieldError> {
        Ok(ExperienceEntry {
            title: required("title", &self.title)?,
            company: required("company", &self.company)?,
            description: self.description.trim().to_string(),
            period: self.period.trim().to_string(),
            start_date: self.start_date.trim().to_string(),
            // a current position has no end yet
            end_date: if self.current {
                String::new()
            } else {
                self.end_date.trim().to_string()
            },
            current: self.current,
        })
    }
}

/// Ordered as entered by the admin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExperienceList(pub Vec<ExperienceEntry>);

impl ContentDocument for ExperienceList {
    const KEY: ContentKey = ContentKey::Experience;

    fn validate(self) -> Result<Self, FieldError> {
        self.0
            .into_iter()
            .map(ExperienceEntry::validate)
            .collect::<Result<Vec<_>, _>>()
            .map(ExperienceList)
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

//
// ──────────────────────────────────────────────────────────
// Skills
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Basic,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillCategories(pub Vec<SkillCategory>);

impl ContentDocument for SkillCategories {
    const KEY: ContentKey = ContentKey::Skills;

    fn validate(self) -> Result<Self, FieldError> {
        let categories = self
            .0
            .into_iter()
            .map(|category| {
                let skills = category
                    .skills
                    .into_iter()
                    .map(|skill| {
                        Ok(Skill {
                            name: required("skills.name", &skill.name)?,
                            level: skill.level,
                            icon: skill.icon.trim().to_string(),
                            color: skill.color.trim().to_string(),
                        })
                    })
                    .collect::<Result<Vec<_>, FieldError>>()?;

                Ok(SkillCategory {
                    name: required("name", &category.name)?,
                    skills,
                })
            })
            .collect::<Result<Vec<_>, FieldError>>()?;

        Ok(SkillCategories(categories))
    }

    fn is_empty(&self) -> bool {
        self.0.iter().all(|c| c.skills.is_empty())
    }
}

//
// ──────────────────────────────────────────────────────────
// Certifications
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificationFileType {
    #[default]
    Image,
    Pdf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationFile {
    #[serde(rename = "type")]
    pub file_type: CertificationFileType,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub id: String,
    pub title: String,
    pub organization: String,
    pub issue_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification_skills: Option<Vec<String>>,
    pub files: Vec<CertificationFile>,
}

impl Certification {
    /// Validated copy carrying `id`.
    pub fn validate_with_id(self, id: String) -> Result<Self, FieldError> {
        let files = self
            .files
            .into_iter()
            .map(|file| {
                Ok(CertificationFile {
                    file_type: file.file_type,
                    url: url("files.url", &file.url)?,
                })
            })
            .collect::<Result<Vec<_>, FieldError>>()?;

        Ok(Certification {
            id,
            title: required("title", &self.title)?,
            organization: required("organization", &self.organization)?,
            issue_date: required("issueDate", &self.issue_date)?,
            expiry_date: trim_optional(self.expiry_date),
            credential_id: trim_optional(self.credential_id),
            credential_url: optional_url("credentialUrl", self.credential_url.as_deref())?,
            certification_skills: self
                .certification_skills
                .map(trim_list)
                .filter(|skills| !skills.is_empty()),
            files,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CertificationList(pub Vec<Certification>);

impl CertificationList {
    pub fn position(&self, id: &str) -> Option<usize> {
        self.0.iter().position(|c| c.id == id)
    }
}

impl ContentDocument for CertificationList {
    const KEY: ContentKey = ContentKey::Certifications;

    fn validate(self) -> Result<Self, FieldError> {
        self.0
            .into_iter()
            .map(|cert| {
                let id = match cert.id.trim() {
                    "" => Uuid::new_v4().to_string(),
                    id => id.to_string(),
                };
                cert.validate_with_id(id)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(CertificationList)
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
