//! Numeric validators over `f64`.
//!
//! Numbers in the dynamic model are `f64`; integrality is checked here, not
//! in the representation. Non-finite inputs (NaN, infinities) fail every
//! bound check because all comparisons with NaN are false.

use crate::foundation::ValidationError;

crate::validator! {
    /// Requires `input >= min`.
    pub Min { min: f64 } for f64;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min", format!("Must be at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(min: f64);
}

crate::validator! {
    /// Requires `input <= max`.
    pub Max { max: f64 } for f64;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max", format!("Must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(max: f64);
}

crate::validator! {
    /// Requires `min <= input <= max`.
    pub Range { min: f64, max: f64 } for f64;
    rule(self, input) { *input >= self.min && *input <= self.max }
    error(self, input) { ValidationError::out_of_range(self.min, self.max, *input) }
    fn range(min: f64, max: f64);
}

crate::validator! {
    /// Greater than zero. Zero itself only passes when `allow_zero` is set.
    pub Positive { allow_zero: bool } for f64;
    rule(self, input) { *input > 0.0 || (self.allow_zero && *input == 0.0) }
    error(self, input) { ValidationError::new("positive", "Must be positive") }
    new() { Self { allow_zero: false } }
    fn positive();
}

impl Positive {
    /// Positive-or-zero variant.
    #[must_use]
    pub const fn or_zero() -> Self {
        Self { allow_zero: true }
    }
}

crate::validator! {
    /// Less than zero. Zero itself only passes when `allow_zero` is set.
    pub Negative { allow_zero: bool } for f64;
    rule(self, input) { *input < 0.0 || (self.allow_zero && *input == 0.0) }
    error(self, input) { ValidationError::new("negative", "Must be negative") }
    new() { Self { allow_zero: false } }
    fn negative();
}

impl Negative {
    /// Negative-or-zero variant.
    #[must_use]
    pub const fn or_zero() -> Self {
        Self { allow_zero: true }
    }
}

crate::validator! {
    /// Finite and mathematically integral (`fract() == 0`).
    pub Integer for f64;
    rule(input) { input.is_finite() && input.fract() == 0.0 }
    error(input) { ValidationError::new("integer", "Must be an integer") }
    fn integer();
}

crate::validator! {
    /// An even integer. Non-integral and non-finite inputs fail.
    pub Even for f64;
    rule(input) { input.is_finite() && input.fract() == 0.0 && input.rem_euclid(2.0) == 0.0 }
    error(input) { ValidationError::new("even", "Must be an even number") }
    fn even();
}

crate::validator! {
    /// An odd integer. Non-integral and non-finite inputs fail.
    pub Odd for f64;
    rule(input) { input.is_finite() && input.fract() == 0.0 && input.rem_euclid(2.0) == 1.0 }
    error(input) { ValidationError::new("odd", "Must be an odd number") }
    fn odd();
}

crate::validator! {
    /// Divisible by `divisor` with zero remainder. Both operands must be
    /// integral.
    ///
    /// Division by zero is a soft failure, not a panic: `x % 0.0` is NaN,
    /// which never equals zero, so every input is rejected when the divisor
    /// is zero. Zero itself is divisible by any non-zero divisor.
    pub DivisibleBy { divisor: f64 } for f64;
    rule(self, input) {
        input.fract() == 0.0 && self.divisor.fract() == 0.0 && *input % self.divisor == 0.0
    }
    error(self, input) {
        ValidationError::new(
            "divisible_by",
            format!("Must be divisible by {}", self.divisor),
        )
        .with_param("divisor", self.divisor.to_string())
        .with_param("actual", input.to_string())
    }
    fn divisible_by(divisor: f64);
}

/// Alias for [`divisible_by`].
#[must_use]
pub fn multiple_of(divisor: f64) -> DivisibleBy {
    DivisibleBy::new(divisor)
}
