mod get_content;
mod manage_certifications;
mod manage_experience;
mod save_content;

pub use get_content::{GetContentError, GetContentUseCase};
pub use manage_certifications::{CertificationsError, CertificationsUseCase};
pub use manage_experience::{ExperienceEntriesError, ExperienceEntriesUseCase};
pub use save_content::{SaveContentError, SaveContentUseCase};
