//! Email address validation.
//!
//! Mirrors the "valid e-mail address" rule browsers apply to
//! `<input type="email" required>`, so the desktop form and the CLI accept
//! and reject exactly what a browser would.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{LandingError, LandingResult};

/// Longest allowed domain label.
const MAX_LABEL_LEN: usize = 63;

/// Punctuation allowed in the local part besides ASCII alphanumerics.
const LOCAL_PUNCT: &str = ".!#$%&'*+/=?^_`{|}~-";

/// An address that passed browser-equivalent validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate raw input the way an email input field does.
    ///
    /// Newlines are removed and surrounding ASCII whitespace is trimmed
    /// before validation, matching the field's value sanitization.
    pub fn parse(raw: &str) -> LandingResult<Self> {
        let value = sanitize(raw);
        if value.is_empty() {
            return Err(LandingError::EmailRequired);
        }

        let (local, domain) = value
            .split_once('@')
            .ok_or_else(|| invalid(format!("'{}' is missing an '@'", value)))?;

        if local.is_empty() {
            return Err(invalid(format!("'{}' is missing the part before '@'", value)));
        }
        if domain.is_empty() {
            return Err(invalid(format!("'{}' is missing the part after '@'", value)));
        }
        if let Some(c) = local.chars().find(|c| !is_local_char(*c)) {
            return Err(invalid(format!("the part before '@' contains '{}'", c)));
        }

        for label in domain.split('.') {
            validate_label(label)?;
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EmailAddress {
    type Err = LandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect::<String>()
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .to_string()
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || LOCAL_PUNCT.contains(c)
}

fn validate_label(label: &str) -> LandingResult<()> {
    if label.is_empty() {
        return Err(invalid("'.' is used at a wrong position".to_string()));
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(invalid(format!(
            "domain label '{}' is longer than {} characters",
            label, MAX_LABEL_LEN
        )));
    }
    if let Some(c) = label.chars().find(|c| !c.is_ascii_alphanumeric() && *c != '-') {
        return Err(invalid(format!("the part after '@' contains '{}'", c)));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(invalid(format!(
            "domain label '{}' cannot start or end with '-'",
            label
        )));
    }
    Ok(())
}

fn invalid(reason: String) -> LandingError {
    LandingError::InvalidEmail(reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for addr in [
            "bidder@example.com",
            "first.last@auctions.example.org",
            "a+tag@sub.domain.io",
            "x@localhost",
            "o'neil@example.ie",
        ] {
            assert!(EmailAddress::parse(addr).is_ok(), "{addr} should be valid");
        }
    }

    #[test]
    fn empty_is_required_error() {
        assert!(matches!(EmailAddress::parse(""), Err(LandingError::EmailRequired)));
        assert!(matches!(EmailAddress::parse("   \n"), Err(LandingError::EmailRequired)));
    }

    #[test]
    fn rejects_malformed() {
        for addr in [
            "plainaddress",
            "@example.com",
            "bidder@",
            "bid der@example.com",
            "bidder@exa mple.com",
            "bidder@example..com",
            "bidder@.example.com",
            "bidder@example.com.",
            "bidder@-example.com",
            "bidder@example-.com",
            "a@b@c.com",
            "bidder@exam_ple.com",
        ] {
            let err = EmailAddress::parse(addr).unwrap_err();
            assert!(matches!(err, LandingError::InvalidEmail(_)), "{addr}: {err}");
        }
    }

    #[test]
    fn label_length_limit() {
        let ok = format!("a@{}.com", "b".repeat(63));
        let too_long = format!("a@{}.com", "b".repeat(64));
        assert!(EmailAddress::parse(&ok).is_ok());
        assert!(EmailAddress::parse(&too_long).is_err());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let addr = EmailAddress::parse("  bidder@example.com\t").unwrap();
        assert_eq!(addr.as_str(), "bidder@example.com");
    }

    #[test]
    fn from_str_and_display() {
        let addr: EmailAddress = "bidder@example.com".parse().unwrap();
        assert_eq!(addr.to_string(), "bidder@example.com");
    }
}
