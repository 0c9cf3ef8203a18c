//! Built-in checks
//!
//! The building blocks field rules are assembled from:
//!
//! - **Length**: [`MinLength`], [`MaxLength`] (counted in chars)
//! - **Range**: [`Min`], [`Max`] (inclusive)
//! - **Format**: [`Email`], [`Url`]
//! - **IDN**: [`idn::domain_to_ascii`] for hosts outside ASCII
//!
//! # Examples
//!
//! ```
//! use warden_validator::foundation::Validate;
//! use warden_validator::validators::{email, max_length, min};
//!
//! assert!(max_length(20).validate("virusdefender").is_ok());
//! assert!(min(18_i64).validate(&10).is_err());
//! assert!(email().validate("xxxx@qq.com").is_ok());
//! ```

pub mod email;
pub mod idn;
pub mod length;
pub mod range;
pub mod url;

pub use email::{Email, email};
pub use length::{MaxLength, MinLength, max_length, min_length};
pub use range::{Max, Min, max, min};
pub use url::{Url, url};
