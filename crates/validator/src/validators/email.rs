//! Email address format check
//!
//! The address is split on its last `@`. The local part must be a dot-atom
//! or a quoted string (RFC 5322). The domain must be `localhost`, a dotted
//! hostname with a TLD of two or more characters, or a bracketed IPv4
//! literal. Domains that fail as written are retried in their IDN (punycode)
//! form.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};
use crate::validators::idn;

static USER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        // dot-atom
        r"(?i)^(?:[-!#$%&'*+/=?^_`{}|~0-9A-Z]+(?:\.[-!#$%&'*+/=?^_`{}|~0-9A-Z]+)*",
        // quoted-string
        r#"|"(?:[\x01-\x08\x0B\x0C\x0E-\x1F!#-\[\]-\x7F]|\\[\x01-\x09\x0B\x0C\x0E-\x7F])*")$"#,
    ))
    .unwrap()
});

static DOMAIN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}|[A-Z0-9-]+[A-Z0-9])",
        // literal form, ipv4 address (SMTP 4.1.3)
        r"|\[(?:25[0-5]|2[0-4][0-9]|[0-1]?[0-9]?[0-9])(?:\.(?:25[0-5]|2[0-4][0-9]|[0-1]?[0-9]?[0-9])){3}\])$",
    ))
    .unwrap()
});

const DOMAIN_WHITELIST: &[&str] = &["localhost"];

/// Validates email address format.
///
/// # Examples
///
/// ```
/// use warden_validator::foundation::Validate;
/// use warden_validator::validators::email;
///
/// assert!(email().validate("user@staff.qq.com.cn").is_ok());
/// assert!(email().validate("admin@localhost").is_ok());
/// assert!(email().validate("123#qq.com").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Email;

impl Email {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Validate for Email {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let Some((user_part, domain_part)) = input.rsplit_once('@') else {
            return Err(not_correct());
        };

        if !USER_REGEX.is_match(user_part) {
            return Err(not_correct());
        }

        if DOMAIN_WHITELIST.contains(&domain_part) || DOMAIN_REGEX.is_match(domain_part) {
            return Ok(());
        }

        // Possible IDN domain part
        match idn::domain_to_ascii(domain_part) {
            Ok(ascii) if DOMAIN_REGEX.is_match(&ascii) => Ok(()),
            Ok(_) => Err(not_correct()),
            Err(_) => Err(ValidationError::invalid_format(
                "Invalid Email format",
                "email",
            )),
        }
    }
}

fn not_correct() -> ValidationError {
    ValidationError::invalid_format("Email format is not correct", "email")
}

/// Creates a new [`Email`] check.
#[must_use]
pub const fn email() -> Email {
    Email
}

// ============================================================================
// TESTS
// ============================================================================
