//! Numeric bound checks
//!
//! Both bounds are inclusive. A value that does not compare at all
//! (a NaN float) is not considered out of range.

use std::cmp::Ordering;
use std::fmt::Display;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is at least a minimum.
    #[derive(Copy, PartialEq)]
    pub Min<T: PartialOrd + Display + Copy> { min: T } for T;
    rule(self, input) { input.partial_cmp(&self.min) != Some(Ordering::Less) }
    error(self, input) { ValidationError::too_small(self.min, *input) }
    fn min(value: T);
}

crate::validator! {
    /// Validates that a value does not exceed a maximum.
    #[derive(Copy, PartialEq)]
    pub Max<T: PartialOrd + Display + Copy> { max: T } for T;
    rule(self, input) { input.partial_cmp(&self.max) != Some(Ordering::Greater) }
    error(self, input) { ValidationError::too_large(self.max, *input) }
    fn max(value: T);
}

// ============================================================================
// TESTS
// ============================================================================
