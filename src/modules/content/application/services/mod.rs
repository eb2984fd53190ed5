mod certifications_service;
mod content_document_service;
mod experience_entries_service;

pub use certifications_service::CertificationsService;
pub use content_document_service::ContentDocumentService;
pub use experience_entries_service::ExperienceEntriesService;
