//! Field-level checks shared by the admin content commands.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} must not exceed {max} characters")]
    TooLong {
        field: &'static str,
        max: usize,
    },

    #[error("{0} must be an http(s) URL")]
    InvalidUrl(&'static str),
}

impl FieldError {
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::Missing(_) => "MISSING_FIELD",
            FieldError::TooLong { .. } => "FIELD_TOO_LONG",
            FieldError::InvalidUrl(_) => "INVALID_URL",
        }
    }
}

/// Trim `value` and reject it when empty.
pub fn required(field: &'static str, value: &str) -> Result<String, FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Missing(field));
    }
    Ok(value.to_string())
}

pub fn max_chars(field: &'static str, value: &str, max: usize) -> Result<(), FieldError> {
    if value.chars().count() > max {
        return Err(FieldError::TooLong { field, max });
    }
    Ok(())
}

/// Blank strings collapse to `None`; anything else must look like an http(s) URL.
pub fn optional_url(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<String>, FieldError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(url) if is_http_url(url) => Ok(Some(url.to_string())),
        Some(_) => Err(FieldError::InvalidUrl(field)),
    }
}

pub fn url(field: &'static str, value: &str) -> Result<String, FieldError> {
    optional_url(field, Some(value))?.ok_or(FieldError::Missing(field))
}

fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));

    matches!(rest, Some(host) if !host.is_empty() && !host.contains(char::is_whitespace))
}
