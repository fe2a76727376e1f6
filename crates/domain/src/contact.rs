//! Contact link — the floating "message us" call to action.
//!
//! The link never performs a network call; it only resolves a URL the
//! browser opens in a new tab.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{SiteError, ValidationError};

/// Endpoint that opens a WhatsApp conversation in the browser.
pub const WHATSAPP_SEND_URL: &str = "https://web.whatsapp.com/send";

/// Number the business answers on, in international format without `+`.
pub const DEFAULT_PHONE: &str = "5493758457171";

/// Accessible label announced for the floating link.
pub const ARIA_LABEL: &str = "Contáctanos por WhatsApp";

/// International phone number made of digits only (E.164 without the `+`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse and validate a phone number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPhoneNumber`] unless the value is
    /// 8 to 15 ASCII digits.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let valid = (8..=15).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit());
        if valid {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidPhoneNumber(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PhoneNumber {
    fn default() -> Self {
        Self(DEFAULT_PHONE.to_string())
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the floating button sends visitors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactLink {
    pub phone: PhoneNumber,
    /// Text prefilled in the chat box. Empty by default.
    pub message: String,
}

impl ContactLink {
    #[must_use]
    pub fn new(phone: PhoneNumber, message: impl Into<String>) -> Self {
        Self {
            phone,
            message: message.into(),
        }
    }

    /// Resolve the navigable URL.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Validation`] if the URL cannot be assembled.
    pub fn url(&self) -> Result<Url, SiteError> {
        let url = Url::parse_with_params(
            WHATSAPP_SEND_URL,
            &[("phone", self.phone.as_str()), ("text", self.message.as_str())],
        )
        .map_err(ValidationError::from)?;
        Ok(url)
    }

    /// Resolve the URL as a string for an `href` attribute.
    ///
    /// # Errors
    ///
    /// Same as [`ContactLink::url`].
    pub fn href(&self) -> Result<String, SiteError> {
        self.url().map(String::from)
    }
}
