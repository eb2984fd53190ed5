use async_trait::async_trait;
use futures::TryFutureExt;
use std::future::Future;
use std::sync::Arc;
use tracing::error;

use crate::modules::blog::application::ports::incoming::use_cases::GetBlogPostsUseCase;
use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::portfolio::application::domain::public_portfolio::{
    document_section, list_section,
};
use crate::modules::portfolio::application::domain::PublicPortfolio;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPublicPortfolioError, GetPublicPortfolioUseCase,
};
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsUseCase;

/// Tags a section's failure with the section name.
fn section<T, E, F>(
    name: &'static str,
    fetch: F,
) -> impl Future<Output = Result<T, GetPublicPortfolioError>>
where
    E: std::fmt::Display,
    F: Future<Output = Result<T, E>>,
{
    fetch.map_err(move |e| GetPublicPortfolioError::SectionUnavailable {
        section: name,
        message: e.to_string(),
    })
}

/// Read-only view over the same documents the dashboard edits.
pub struct PublicPortfolioService {
    content: ContentUseCases,
    projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
    blog_posts: Arc<dyn GetBlogPostsUseCase + Send + Sync>,
}

impl PublicPortfolioService {
    pub fn new(
        content: ContentUseCases,
        projects: Arc<dyn GetProjectsUseCase + Send + Sync>,
        blog_posts: Arc<dyn GetBlogPostsUseCase + Send + Sync>,
    ) -> Self {
        Self {
            content,
            projects,
            blog_posts,
        }
    }
}

#[async_trait]
impl GetPublicPortfolioUseCase for PublicPortfolioService {
    async fn execute(&self) -> Result<PublicPortfolio, GetPublicPortfolioError> {
        // Sections are independent, so they are fetched concurrently.
        let (profile, about, experience, skills, certifications, projects, blog_posts) =
            futures::try_join!(
                section("profile", self.content.get_profile.execute()),
                section("about", self.content.get_about.execute()),
                section("experience", self.content.get_experience.execute()),
                section("skills", self.content.get_skills.execute()),
                section("certifications", self.content.get_certifications.execute()),
                section("projects", self.projects.execute()),
                section("blog", self.blog_posts.execute()),
            )
            .inspect_err(|e| error!(error = %e, "Failed to assemble public portfolio"))?;

        Ok(PublicPortfolio {
            profile: document_section(profile),
            about: document_section(about),
            experience: document_section(experience),
            skills: document_section(skills),
            certifications: document_section(certifications),
            projects: list_section(projects),
            blog_posts: list_section(blog_posts),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::modules::blog::application::ports::incoming::use_cases::GetBlogPostsError;
    use crate::modules::blog::application::ports::outgoing::BlogPostResult;
    use crate::modules::content::application::domain::document::ContentKey;
    use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
    use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;
    use crate::modules::project::application::service::test_support::sample_project;
    use crate::tests::support::fake_content_repository::FakeContentRepository;

    struct Projects(Result<Vec<ProjectResult>, GetProjectsError>);

    #[async_trait]
    impl GetProjectsUseCase for Projects {
        async fn execute(&self) -> Result<Vec<ProjectResult>, GetProjectsError> {
            self.0.clone()
        }
    }

    struct Posts(Result<Vec<BlogPostResult>, GetBlogPostsError>);

    #[async_trait]
    impl GetBlogPostsUseCase for Posts {
        async fn execute(&self) -> Result<Vec<BlogPostResult>, GetBlogPostsError> {
            self.0.clone()
        }
    }

    fn service(
        content: FakeContentRepository,
        projects: Result<Vec<ProjectResult>, GetProjectsError>,
    ) -> PublicPortfolioService {
        PublicPortfolioService::new(
            ContentUseCases::from_repository(content),
            Arc::new(Projects(projects)),
            Arc::new(Posts(Ok(Vec::new()))),
        )
    }

    #[tokio::test]
    async fn empty_sections_are_omitted() {
        let content = FakeContentRepository::default()
            .with_document(ContentKey::Profile, json!({ "name": "Ada", "titles": ["Engineer"] }))
            .with_document(ContentKey::Skills, json!([{ "name": "Languages", "skills": [] }]));

        let portfolio = service(content, Ok(vec![sample_project("Compiler")]))
            .execute()
            .await
            .unwrap();

        assert_eq!(portfolio.profile.as_ref().unwrap().name, "Ada");
        assert!(portfolio.about.is_none());
        assert!(portfolio.skills.is_none());
        assert!(portfolio.blog_posts.is_none());
        assert_eq!(portfolio.projects.as_ref().unwrap().len(), 1);

        let json = serde_json::to_value(&portfolio).unwrap();
        assert!(json.get("experience").is_none());
        assert!(json.get("blogPosts").is_none());
        assert_eq!(json["projects"][0]["title"], "Compiler");
    }

    #[tokio::test]
    async fn failing_section_fails_the_view() {
        let err = service(
            FakeContentRepository::default(),
            Err(GetProjectsError::RepositoryError("db down".to_string())),
        )
        .execute()
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            GetPublicPortfolioError::SectionUnavailable {
                section: "projects",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn content_failure_is_reported() {
        assert!(service(FakeContentRepository::failing(), Ok(Vec::new()))
            .execute()
            .await
            .is_err());
    }
}
