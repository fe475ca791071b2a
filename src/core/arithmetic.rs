//! Core arithmetic operations.

/// Add two numbers.
///
/// Plain IEEE-754 addition: NaN and infinities propagate, nothing is
/// rejected.
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Simple calculator.
///
/// Holds no state, so a single value can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    /// Return the product of `x` and `y`.
    pub fn multiply(&self, x: f64, y: f64) -> f64 {
        x * y
    }
}
