//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`SiteError`]
//! via `#[from]`.

/// Top-level error for domain operations.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("validation error")]
    Validation(#[from] ValidationError),
}

/// A domain invariant was violated.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("phone number `{0}` must contain 8 to 15 digits and nothing else")]
    InvalidPhoneNumber(String),

    #[error("threshold {0} is outside the range 0.0..=1.0")]
    ThresholdOutOfRange(f64),

    #[error("contact url could not be built: {0}")]
    InvalidContactUrl(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_validation_error_via_from() {
        let err: SiteError = ValidationError::EmptyField("title").into();
        assert!(matches!(
            err,
            SiteError::Validation(ValidationError::EmptyField("title"))
        ));
    }

    #[test]
    fn should_render_human_readable_messages() {
        assert_eq!(
            ValidationError::ThresholdOutOfRange(1.5).to_string(),
            "threshold 1.5 is outside the range 0.0..=1.0"
        );
        assert_eq!(
            ValidationError::InvalidPhoneNumber("12ab".to_string()).to_string(),
            "phone number `12ab` must contain 8 to 15 digits and nothing else"
        );
    }
}
