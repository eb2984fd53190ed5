use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::modules::content::application::domain::entities::{Certification, CertificationList};
use crate::modules::content::application::ports::incoming::use_cases::{
    CertificationsError, CertificationsUseCase,
};
use crate::modules::content::application::ports::outgoing::content_repository::{
    load_document, store_document, ContentRepository, ContentRepositoryError,
};

/// Item-level edits of `content/certifications`, addressed by id.
pub struct CertificationsService<R>
where
    R: ContentRepository,
{
    repository: R,
    write_guard: Mutex<()>,
}

impl<R> CertificationsService<R>
where
    R: ContentRepository,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            write_guard: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<CertificationList, CertificationsError> {
        load_document(&self.repository).await.map_err(map_repo_err)
    }

    async fn store(&self, list: &CertificationList) -> Result<(), CertificationsError> {
        store_document(&self.repository, list)
            .await
            .map_err(map_repo_err)
    }
}

fn map_repo_err(e: ContentRepositoryError) -> CertificationsError {
    CertificationsError::RepositoryError(e.to_string())
}

#[async_trait]
impl<R> CertificationsUseCase for CertificationsService<R>
where
    R: ContentRepository + Send + Sync,
{
    async fn add(
        &self,
        certification: Certification,
    ) -> Result<Certification, CertificationsError> {
        let certification = certification.validate_with_id(Uuid::new_v4().to_string())?;

        let _guard = self.write_guard.lock().await;
        let mut list = self.load().await?;
        list.0.push(certification.clone());
        self.store(&list).await?;

        Ok(certification)
    }

    async fn update(
        &self,
        id: &str,
        certification: Certification,
    ) -> Result<Certification, CertificationsError> {
        let certification = certification.validate_with_id(id.to_string())?;

        let _guard = self.write_guard.lock().await;
        let mut list = self.load().await?;
        let index = list.position(id).ok_or(CertificationsError::NotFound)?;
        list.0[index] = certification.clone();
        self.store(&list).await?;

        Ok(certification)
    }

    async fn remove(&self, id: &str) -> Result<(), CertificationsError> {
        let _guard = self.write_guard.lock().await;
        let mut list = self.load().await?;
        let index = list.position(id).ok_or(CertificationsError::NotFound)?;
        list.0.remove(index);
        self.store(&list).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::modules::content::application::domain::document::ContentKey;
    use crate::modules::content::application::domain::entities::CertificationFile;
    use crate::tests::support::fake_content_repository::FakeContentRepository;

    fn cert(title: &str) -> Certification {
        Certification {
            title: title.to_string(),
            organization: "CNCF".to_string(),
            issue_date: "2024-03".to_string(),
            ..Default::default()
        }
    }

    fn seeded() -> FakeContentRepository {
        FakeContentRepository::default().with_document(
            ContentKey::Certifications,
            json!([
                { "id": "c1", "title": "CKA", "organization": "CNCF", "issueDate": "2023-01" },
                { "id": "c2", "title": "CKAD", "organization": "CNCF", "issueDate": "2023-06" }
            ]),
        )
    }

    #[tokio::test]
    async fn add_generates_an_id_ignoring_the_submitted_one() {
        let repo = seeded();
        let service = CertificationsService::new(repo.clone());

        let mut input = cert("CKS");
        input.id = "c1".to_string();
        let created = service.add(input).await.unwrap();

        assert_ne!(created.id, "c1");
        let stored = repo.document(ContentKey::Certifications).unwrap();
        assert_eq!(stored.as_array().unwrap().len(), 3);
        assert_eq!(stored[2]["id"], created.id.as_str());
    }

    #[tokio::test]
    async fn update_keeps_id_and_position() {
        let repo = seeded();
        let service = CertificationsService::new(repo.clone());

        let updated = service.update("c1", cert("CKA renewed")).await.unwrap();

        assert_eq!(updated.id, "c1");
        let stored = repo.document(ContentKey::Certifications).unwrap();
        assert_eq!(stored[0]["title"], "CKA renewed");
        assert_eq!(stored[1]["title"], "CKAD");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repo = seeded();
        let service = CertificationsService::new(repo.clone());

        let err = service.update("nope", cert("x")).await.unwrap_err();

        assert!(matches!(err, CertificationsError::NotFound));
        assert_eq!(repo.writes(), 0);
    }

    #[tokio::test]
    async fn remove_deletes_only_the_matching_certification() {
        let repo = seeded();
        let service = CertificationsService::new(repo.clone());

        service.remove("c2").await.unwrap();

        let stored = repo.document(ContentKey::Certifications).unwrap();
        assert_eq!(stored.as_array().unwrap().len(), 1);
        assert_eq!(stored[0]["id"], "c1");
    }

    #[tokio::test]
    async fn remove_unknown_id_is_not_found() {
        let service = CertificationsService::new(seeded());

        assert!(matches!(
            service.remove("c9").await,
            Err(CertificationsError::NotFound)
        ));
    }

    #[tokio::test]
    async fn invalid_file_url_is_rejected() {
        let service = CertificationsService::new(seeded());

        let mut input = cert("CKS");
        input.files = vec![CertificationFile {
            file_type: Default::default(),
            url: "file:///etc/passwd".to_string(),
        }];

        assert!(matches!(
            service.add(input).await,
            Err(CertificationsError::Validation(_))
        ));
    }
}
