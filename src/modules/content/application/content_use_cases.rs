use std::sync::Arc;

use crate::modules::content::application::domain::entities::{
    About, CertificationList, ExperienceList, Profile, SkillCategories,
};
use crate::modules::content::application::ports::incoming::use_cases::{
    CertificationsUseCase, ExperienceEntriesUseCase, GetContentUseCase, SaveContentUseCase,
};
use crate::modules::content::application::ports::outgoing::ContentRepository;
use crate::modules::content::application::services::{
    CertificationsService, ContentDocumentService, ExperienceEntriesService,
};

#[derive(Clone)]
pub struct ContentUseCases {
    pub get_profile: Arc<dyn GetContentUseCase<Profile> + Send + Sync>,
    pub save_profile: Arc<dyn SaveContentUseCase<Profile> + Send + Sync>,
    pub get_about: Arc<dyn GetContentUseCase<About> + Send + Sync>,
    pub save_about: Arc<dyn SaveContentUseCase<About> + Send + Sync>,
    pub get_experience: Arc<dyn GetContentUseCase<ExperienceList> + Send + Sync>,
    pub save_experience: Arc<dyn SaveContentUseCase<ExperienceList> + Send + Sync>,
    pub experience_entries: Arc<dyn ExperienceEntriesUseCase + Send + Sync>,
    pub get_skills: Arc<dyn GetContentUseCase<SkillCategories> + Send + Sync>,
    pub save_skills: Arc<dyn SaveContentUseCase<SkillCategories> + Send + Sync>,
    pub get_certifications: Arc<dyn GetContentUseCase<CertificationList> + Send + Sync>,
    pub certifications: Arc<dyn CertificationsUseCase + Send + Sync>,
}

impl ContentUseCases {
    /// Wire every content use case to one repository.
    pub fn from_repository<R>(repository: R) -> Self
    where
        R: ContentRepository + Clone + 'static,
    {
        let profile = Arc::new(ContentDocumentService::<R, Profile>::new(repository.clone()));
        let about = Arc::new(ContentDocumentService::<R, About>::new(repository.clone()));
        let experience = Arc::new(ContentDocumentService::<R, ExperienceList>::new(
            repository.clone(),
        ));
        let skills = Arc::new(ContentDocumentService::<R, SkillCategories>::new(
            repository.clone(),
        ));
        let certifications = Arc::new(ContentDocumentService::<R, CertificationList>::new(
            repository.clone(),
        ));

        Self {
            get_profile: profile.clone(),
            save_profile: profile,
            get_about: about.clone(),
            save_about: about,
            get_experience: experience.clone(),
            save_experience: experience,
            experience_entries: Arc::new(ExperienceEntriesService::new(repository.clone())),
            get_skills: skills.clone(),
            save_skills: skills,
            get_certifications: certifications,
            certifications: Arc::new(CertificationsService::new(repository)),
        }
    }
}
