//! # warden-validator
//!
//! Declarative record validation: a schema of typed fields is evaluated
//! against a map of raw values, producing either a cleaned, typed record or
//! the full list of per-field errors.
//!
//! ## Quick Start
//!
//! ```
//! use warden_validator::prelude::*;
//!
//! warden_validator::schema! {
//!     pub struct SignUp {
//!         username: TextField::new().max_length(20).min_length(10),
//!         age: IntegerField::new().range(18, 100),
//!         email: EmailField::new(),
//!         website: UrlField::new().optional(),
//!     }
//! }
//!
//! let mut engine = SignUp::validator(warden_validator::record! {
//!     "username" => "virusdefender",
//!     "age" => 18,
//!     "email" => "virusdefender@qq.com",
//!     "website" => "https://example.com",
//! });
//! assert!(engine.is_valid());
//! assert_eq!(engine.data().unwrap()["age"], Value::Integer(18));
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait and
//!   [`ValidationError`](foundation::ValidationError)
//! - [`validators`]: single-value checks (length, bounds, email, URL)
//! - [`field`]: field kinds and the required/optional policy
//! - [`schema`]: ordered registries, builders and schema documents
//! - [`engine`]: runs a registry against a record
//!
//! ## Creating Checks
//!
//! Use the [`validator!`] macro for zero-boilerplate checks,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.

pub mod engine;
pub mod field;
pub mod foundation;
pub mod json;
mod macros;
pub mod prelude;
pub mod schema;
pub mod validators;
pub mod value;
