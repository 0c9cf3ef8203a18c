//! URL format check
//!
//! The URL is split into scheme, network location, path, query and
//! fragment. The network location is converted to its IDN (punycode) form,
//! the URL is put back together and the result must match:
//! - scheme `http`, `https`, `ftp` or `ftps`
//! - host: dotted hostname, `localhost`, dotted-quad IPv4 or bracketed IPv6
//! - optional `:port`
//! - nothing, `/`, or `/` / `?` followed by non-whitespace
//!
//! The encoded form is only used for matching; callers keep their input.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};
use crate::validators::idn;

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:http|ftp)s?://",
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]+[A-Z0-9]\.?)|", // domain
        r"localhost|",
        r"\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}|", // ipv4
        r"\[?[A-F0-9]*:[A-F0-9:]+\]?)",         // ipv6
        r"(?::\d+)?",                           // port
        r"(?:/?|[/?]\S+)$",
    ))
    .unwrap()
});

/// Schemes whose URLs carry a `//netloc` part when reassembled.
const USES_NETLOC: &[&str] = &[
    "ftp", "http", "gopher", "nntp", "telnet", "imap", "wais", "file", "mms", "https", "shttp",
    "snews", "prospero", "rtsp", "rtspu", "rsync", "svn", "svn+ssh", "sftp", "nfs", "git",
    "git+ssh", "ws", "wss",
];

/// Validates URL format.
///
/// # Examples
///
/// ```
/// use warden_validator::foundation::Validate;
/// use warden_validator::validators::url;
///
/// assert!(url().validate("https://example.com/path?q=1").is_ok());
/// assert!(url().validate("http://8.8.8.8:8080").is_ok());
/// assert!(url().validate("htt://example.com").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Url;

impl Url {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Validate for Url {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let cleaned = strip_unsafe(input);
        let parts = UrlParts::split(&cleaned)?;
        let netloc = idn::netloc_to_ascii(parts.netloc).map_err(|_| invalid())?;

        if URL_REGEX.is_match(&parts.join(&netloc)) {
            Ok(())
        } else {
            Err(invalid())
        }
    }
}

/// Creates a new [`Url`] check.
#[must_use]
pub const fn url() -> Url {
    Url
}

fn invalid() -> ValidationError {
    ValidationError::invalid_format("URL format invalid", "url")
}

/// Drops leading control characters and spaces, and any tab or line break.
fn strip_unsafe(input: &str) -> Cow<'_, str> {
    let trimmed = input.trim_start_matches(|c: char| c <= ' ');
    if trimmed.contains(['\t', '\r', '\n']) {
        Cow::Owned(trimmed.replace(['\t', '\r', '\n'], ""))
    } else {
        Cow::Borrowed(trimmed)
    }
}

/// The five components of a URL.
#[derive(Debug, PartialEq, Eq)]
struct UrlParts<'a> {
    scheme: String,
    netloc: &'a str,
    path: &'a str,
    query: &'a str,
    fragment: &'a str,
}

impl<'a> UrlParts<'a> {
    fn split(url: &'a str) -> Result<Self, ValidationError> {
        let mut rest = url;
        let mut scheme = String::new();

        if let Some(i) = rest.find(':') {
            let candidate = &rest[..i];
            let is_scheme = candidate.starts_with(|c: char| c.is_ascii_alphabetic())
                && candidate
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
            if is_scheme {
                scheme = candidate.to_ascii_lowercase();
                rest = &rest[i + 1..];
            }
        }

        let mut netloc = "";
        if let Some(after) = rest.strip_prefix("//") {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            netloc = &after[..end];
            rest = &after[end..];

            if netloc.contains('[') != netloc.contains(']') {
                return Err(invalid().with_param("reason", "unbalanced IPv6 brackets"));
            }
        }

        let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

        Ok(Self {
            scheme,
            netloc,
            path,
            query,
            fragment,
        })
    }

    /// Reassembles the URL around a (possibly re-encoded) network location.
    fn join(&self, netloc: &str) -> String {
        let mut url = String::with_capacity(
            self.scheme.len() + netloc.len() + self.path.len() + self.query.len() + 8,
        );

        if !self.scheme.is_empty() {
            url.push_str(&self.scheme);
            url.push(':');
        }

        let wants_netloc = USES_NETLOC.contains(&self.scheme.as_str())
            && !self.path.starts_with("//");
        if !netloc.is_empty() || wants_netloc {
            url.push_str("//");
            url.push_str(netloc);
            if !self.path.is_empty() && !self.path.starts_with('/') {
                url.push('/');
            }
        }
        url.push_str(self.path);

        if !self.query.is_empty() {
            url.push('?');
            url.push_str(self.query);
        }
        if !self.fragment.is_empty() {
            url.push('#');
            url.push_str(self.fragment);
        }
        url
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_components() {
        let parts = UrlParts::split("HTTPS://user@example.com:8443/a/b?x=1#top").unwrap();
        assert_eq!(
            parts,
            UrlParts {
                scheme: "https".into(),
                netloc: "user@example.com:8443",
                path: "/a/b",
                query: "x=1",
                fragment: "top",
            }
        );
    }

    #[test]
    fn split_without_scheme() {
        let parts = UrlParts::split("https//baidu.com").unwrap();
        assert_eq!(parts.scheme, "");
        assert_eq!(parts.netloc, "");
        assert_eq!(parts.path, "https//baidu.com");
    }

    #[test]
    fn join_round_trips() {
        for raw in [
            "http://baidu.com",
            "https://example.com/path?q=1#frag",
            "ftp://files.example.com/pub/",
        ] {
            let parts = UrlParts::split(raw).unwrap();
            assert_eq!(parts.join(parts.netloc), raw);
        }
    }

    #[test]
    fn unbalanced_brackets_rejected() {
        assert!(UrlParts::split("http://[::1/").is_err());
        assert!(url().validate("http://::1]/").is_err());
    }

    #[test]
    fn valid_urls() {
        let v = url();
        assert!(v.validate("http://baidu.com").is_ok());
        assert!(v.validate("https://baidu.com").is_ok());
        assert!(v.validate("ftp://baidu.com").is_ok());
        assert!(v.validate("ftps://baidu.com/").is_ok());
        assert!(v.validate("http://8.8.8.8:8080").is_ok());
        assert!(v.validate("http://localhost:8000/admin").is_ok());
        assert!(v.validate("http://[::1]:8080/x").is_ok());
        assert!(v.validate("https://example.com.?q").is_ok());
        assert!(v.validate("http://例え.jp/path").is_ok());
        assert!(v.validate("  https://example.com").is_ok());
    }

    #[test]
    fn invalid_urls() {
        let v = url();
        assert!(v.validate("baidu.com").is_err());
        assert!(v.validate("htt://baidu.com").is_err());
        assert!(v.validate("https//baidu.com").is_err());
        assert!(v.validate("http://").is_err());
        assert!(v.validate("http://-bad.com").is_err());
        assert!(v.validate("http://example.com/a b").is_err());
        assert!(v.validate("http://a..b.com").is_err());
    }
}
