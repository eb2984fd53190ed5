use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

use crate::shared::validation::FieldError;

/// Singleton documents under `content/*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKey {
    Profile,
    About,
    Experience,
    Skills,
    Certifications,
}

impl ContentKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKey::Profile => "profile",
            ContentKey::About => "about",
            ContentKey::Experience => "experience",
            ContentKey::Skills => "skills",
            ContentKey::Certifications => "certifications",
        }
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "content/{}", self.as_str())
    }
}

/// A document stored whole under one [`ContentKey`].
///
/// A missing document reads as `Default::default()`.
pub trait ContentDocument:
    Serialize + DeserializeOwned + Default + Clone + Send + Sync + 'static
{
    const KEY: ContentKey;

    /// Normalise the document (trim, drop blanks, assign ids) or reject it.
    fn validate(self) -> Result<Self, FieldError>;

    /// Nothing worth showing on the public site.
    fn is_empty(&self) -> bool;
}
