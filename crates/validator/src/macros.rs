//! Macros for declaring checks, schemas and records with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`]: Create a check (struct + `Validate` impl + factory fn)
//! - [`schema!`]: Declare a schema type backed by a static [`SchemaRegistry`](crate::schema::SchemaRegistry)
//! - [`record!`]: Build a [`RawInput`](crate::value::RawInput) from literal pairs

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete check: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MinLength { min: usize } for str;
///     rule(self, input) { input.chars().count() >= self.min }
///     error(self, input) { ValidationError::too_short(self.min, input.chars().count()) }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Generic check**:
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq)]
///     pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
///     rule(self, input) { *input >= self.min }
///     error(self, input) { ValidationError::too_small(self.min, *input) }
///     fn min(value: T);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Shared `Validate` impl ─────────────────────────────────────────
    (@impl [$($bounds:tt)*] $ty:ty, $input:ty, $self_:ident, $inp:ident, $rule:block, $einp:ident, $err:block) => {
        impl<$($bounds)*> $crate::foundation::Validate for $ty {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    return Ok(());
                }
                let $einp = $inp;
                Err($err)
            }
        }
    };

    // ── Plain struct ────────────────────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        $(fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub const fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator!(@impl [] $name, $input, $self_, $inp, $rule, $einp, $err);

        $(
            #[must_use]
            $vis const fn $factory($($farg: $faty),*) -> $name {
                $name::new($($farg),*)
            }
        )?
    };

    // ── One generic parameter + factory fn ─────────────────────────────
    //
    // Bounds must be simple identifiers (use imports for paths). The factory
    // is emitted outside the struct arm so the bound list stays at one
    // repetition depth.
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name<$gen: $first_bound $(+ $rest_bound)*>
                { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
        }

        #[must_use]
        $vis const fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

    // ── One generic parameter, no factory ───────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub const fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::validator!(
            @impl [$gen: $first_bound $(+ $rest_bound)*] $name<$gen>,
            $input, $self_, $inp, $rule, $einp, $err
        );
    };
}

// ============================================================================
// SCHEMA MACRO
// ============================================================================

/// Declares a schema type whose registry is built once, on first use.
///
/// Fields are registered in declaration order, which is also the order in
/// which errors are reported. Each rule expression may be a field kind
/// (`TextField`, `IntegerField`, ...) or a fully configured
/// [`FieldRule`](crate::field::FieldRule).
///
/// # Panics
///
/// The first call to `registry()` panics if the declaration is invalid
/// (for example `min_length` greater than `max_length`).
///
/// # Examples
///
/// ```
/// use warden_validator::prelude::*;
///
/// warden_validator::schema! {
///     /// Sign-up form.
///     pub struct SignUp {
///         username: TextField::new().max_length(20).min_length(3),
///         age: IntegerField::new().range(18, 100),
///         website: UrlField::new().optional(),
///     }
/// }
///
/// let mut engine = SignUp::validator(warden_validator::record! {
///     "username" => "alice",
///     "age" => 30,
/// });
/// assert!(engine.is_valid());
/// ```
#[macro_export]
macro_rules! schema {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($field:ident : $rule:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $name;

        impl $crate::schema::Schema for $name {
            fn registry() -> &'static $crate::schema::SchemaRegistry {
                static REGISTRY: ::std::sync::LazyLock<$crate::schema::SchemaRegistry> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::schema::SchemaRegistry::builder()
                            $(.field(stringify!($field), $rule))+
                            .build()
                            .unwrap_or_else(|e| panic!("invalid schema `{}`: {e}", stringify!($name)))
                    });
                &REGISTRY
            }
        }
    };
}

// ============================================================================
// RECORD MACRO
// ============================================================================

/// Builds a [`RawInput`](crate::value::RawInput) from `key => value` pairs.
///
/// Values go through `Value::from`, so literals keep their Rust type:
/// `30` is an integer, `30.0` a float, `"30"` text.
///
/// ```
/// use warden_validator::value::Value;
///
/// let input = warden_validator::record! { "age" => 30, "name" => "alice" };
/// assert_eq!(input["age"], Value::Integer(30));
/// assert_eq!(input["name"], Value::Text("alice".into()));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::value::RawInput::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut input = $crate::value::RawInput::new();
        $(input.insert(::std::string::String::from($key), $crate::value::Value::from($value));)+
        input
    }};
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use std::fmt::Display;

    use crate::foundation::{ErrorKind, Validate, ValidationError};

    crate::validator! {
        #[derive(Copy, PartialEq, Eq)]
        Exactly { len: usize } for str;
        rule(self, input) { input.chars().count() == self.len }
        error(self, input) { ValidationError::too_long(self.len, input.chars().count()) }
    }

    crate::validator! {
        NotEqual<T: PartialEq + Display + Copy> { forbidden: T } for T;
        rule(self, input) { *input != self.forbidden }
        error(self, input) {
            ValidationError::new(ErrorKind::InvalidFormat, "Value is forbidden")
                .with_param("forbidden", self.forbidden.to_string())
        }
    }

    crate::validator! {
        AtMost<T: PartialOrd + Display + Copy> { limit: T } for T;
        rule(self, input) { *input <= self.limit }
        error(self, input) { ValidationError::too_large(self.limit, *input) }
        fn at_most(limit: T);
    }

    #[test]
    fn plain_struct_without_factory() {
        assert!(Exactly::new(3).validate("abc").is_ok());
        assert!(Exactly::new(3).validate("ab").is_err());
    }

    #[test]
    fn generic_struct_with_several_bounds() {
        let check = NotEqual::new(0_i64);
        assert!(check.validate(&1).is_ok());
        assert_eq!(check.validate(&0).unwrap_err().param("forbidden"), Some("0"));
    }

    #[test]
    fn generic_factory() {
        assert!(at_most(1.5_f64).validate(&1.5).is_ok());
        assert_eq!(
            at_most(10_i64).validate(&11).unwrap_err().kind,
            ErrorKind::OutOfRange
        );
    }
}
