//! Internationalized domain names.
//!
//! Hosts are converted to their ASCII-compatible (punycode) form before the
//! email and URL grammars are applied. ASCII input passes through unchanged
//! apart from a label length check:
//! - every label except the last must be 1..=63 characters
//! - the last label may be empty (trailing dot) but not longer than 63

use std::borrow::Cow;

use crate::foundation::ValidationError;

const MAX_LABEL_LEN: usize = 63;

/// Converts a domain to its ASCII-compatible encoding.
///
/// # Examples
///
/// ```
/// use warden_validator::validators::idn::domain_to_ascii;
///
/// assert_eq!(domain_to_ascii("example.com").unwrap(), "example.com");
/// assert_eq!(domain_to_ascii("例え.jp").unwrap(), "xn--r8jz45g.jp");
/// assert!(domain_to_ascii("a..b").is_err());
/// ```
pub fn domain_to_ascii(domain: &str) -> Result<Cow<'_, str>, ValidationError> {
    if domain.is_ascii() {
        check_labels(domain)?;
        return Ok(Cow::Borrowed(domain));
    }

    let ascii = idna::domain_to_ascii(domain).map_err(|_| {
        ValidationError::invalid_format("Domain cannot be encoded to ASCII", "idn")
    })?;
    check_labels(&ascii)?;
    Ok(Cow::Owned(ascii))
}

/// Converts the network location of a URL (`host[:port]`) to ASCII.
///
/// The port, if any, is split off before encoding and re-attached after.
pub fn netloc_to_ascii(netloc: &str) -> Result<Cow<'_, str>, ValidationError> {
    if netloc.is_ascii() {
        return domain_to_ascii(netloc);
    }

    match netloc.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            let host = domain_to_ascii(host)?;
            Ok(Cow::Owned(format!("{host}:{port}")))
        }
        _ => domain_to_ascii(netloc),
    }
}

fn check_labels(domain: &str) -> Result<(), ValidationError> {
    let mut labels = domain.split('.').peekable();
    while let Some(label) = labels.next() {
        let is_last = labels.peek().is_none();
        let len = label.chars().count();
        if len > MAX_LABEL_LEN || (len == 0 && !is_last) {
            return Err(ValidationError::invalid_format(
                "Domain label is empty or too long",
                "idn",
            )
            .with_param("label", label.to_owned()));
        }
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
