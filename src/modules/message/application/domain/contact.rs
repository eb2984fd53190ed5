use email_address::EmailAddress;
use serde::Deserialize;

use super::rate_limit::RateLimited;
use super::spam::{detect_spam, SpamSignal};

pub const MIN_MESSAGE_CHARS: usize = 10;
pub const MAX_MESSAGE_CHARS: usize = 1000;
pub const MAX_NAME_CHARS: usize = 100;

/// Raw contact form body. Missing fields deserialize as empty strings so the
/// caller gets a field-specific error instead of a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A contact form that passed every content check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactRejection {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Name must not exceed 100 characters")]
    NameTooLong,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,

    #[error("Message must not exceed 1000 characters")]
    MessageTooLong,

    #[error("Message looks like spam")]
    Spam(SpamSignal),

    #[error("Too many messages. Please wait before sending another")]
    RateLimited(RateLimited),
}

impl ContactRejection {
    pub fn code(&self) -> &'static str {
        match self {
            ContactRejection::MissingField(_) => "MISSING_FIELD",
            ContactRejection::InvalidEmail => "INVALID_EMAIL",
            ContactRejection::NameTooLong => "FIELD_TOO_LONG",
            ContactRejection::MessageTooShort => "MESSAGE_TOO_SHORT",
            ContactRejection::MessageTooLong => "MESSAGE_TOO_LONG",
            ContactRejection::Spam(_) => "SPAM_DETECTED",
            ContactRejection::RateLimited(_) => "RATE_LIMITED",
        }
    }
}

impl ContactForm {
    /// Content checks in order: required fields, email, lengths, spam.
    ///
    /// The rate limit is checked afterwards by the caller since it needs the
    /// client's submission log.
    pub fn validate(self) -> Result<ValidContact, ContactRejection> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        for (field, value) in [("name", name), ("email", email), ("message", message)] {
            if value.is_empty() {
                return Err(ContactRejection::MissingField(field));
            }
        }

        if !EmailAddress::is_valid(email) {
            return Err(ContactRejection::InvalidEmail);
        }

        if name.chars().count() > MAX_NAME_CHARS {
            return Err(ContactRejection::NameTooLong);
        }

        let length = message.chars().count();
        if length < MIN_MESSAGE_CHARS {
            return Err(ContactRejection::MessageTooShort);
        }
        if length > MAX_MESSAGE_CHARS {
            return Err(ContactRejection::MessageTooLong);
        }

        if let Some(signal) = detect_spam(message) {
            return Err(ContactRejection::Spam(signal));
        }

        Ok(ValidContact {
            name: name.to_string(),
            email: email.to_lowercase(),
            message: message.to_string(),
        })
    }
}
