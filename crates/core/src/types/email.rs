//! Email address type.
//!
//! Emails identify users. Any non-empty text is accepted and compared exactly
//! as entered: no case folding, trimming, or format check is applied, so
//! `Reader@example.com` and `reader@example.com` are distinct accounts.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
}

/// A user's login email, as entered.
///
/// ## Examples
///
/// ```
/// use bookshelf_core::Email;
///
/// assert!(Email::parse("reader@example.com").is_ok());
/// assert!(Email::parse("reader").is_ok());
/// assert!(Email::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parse an `Email` from a string.
    ///
    /// # Errors
    ///
    /// Returns `EmailError::Empty` if the input is empty.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(EmailError::Empty);
        }
        Ok(Self(value))
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_any_non_empty_text() {
        assert!(Email::parse("reader@example.com").is_ok());
        assert_eq!(Email::parse("bob").unwrap().as_str(), "bob");
        assert_eq!(Email::parse(" spaced ").unwrap().as_str(), " spaced ");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
    }

    #[test]
    fn test_case_is_preserved() {
        let upper = Email::parse("Reader@Example.com").unwrap();
        let lower = Email::parse("reader@example.com").unwrap();
        assert_ne!(upper, lower);
        assert_eq!(upper.as_str(), "Reader@Example.com");
    }

    #[test]
    fn test_deserialize() {
        let parsed: Email = serde_json::from_str("\"bob\"").unwrap();
        assert_eq!(parsed.to_string(), "bob");
        assert!(serde_json::from_str::<Email>("\"\"").is_err());
    }
}
