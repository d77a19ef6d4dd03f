use log::trace;

use crate::error::CalculatorError;

/// Arithmetic engine holding a running result.
///
/// Each mutating operation applies one binary arithmetic step to the
/// accumulator and returns the new value. The accumulator is always
/// initialized; there is no unset state.
pub struct Calculator {
    value: f64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with the accumulator at zero.
    pub fn new() -> Self {
        Self { value: 0.0 }
    }

    /// Creates a calculator with the accumulator at `initial`.
    pub fn with_value(initial: f64) -> Self {
        Self { value: initial }
    }

    /// Adds `operand` to the accumulator and returns the new value.
    pub fn add(&mut self, operand: f64) -> f64 {
        self.value += operand;
        trace!("add {} -> {}", operand, self.value);
        self.value
    }

    /// Subtracts `operand` from the accumulator and returns the new value.
    pub fn subtract(&mut self, operand: f64) -> f64 {
        self.value -= operand;
        trace!("subtract {} -> {}", operand, self.value);
        self.value
    }

    /// Multiplies the accumulator by `operand` and returns the new value.
    pub fn multiply(&mut self, operand: f64) -> f64 {
        self.value *= operand;
        trace!("multiply {} -> {}", operand, self.value);
        self.value
    }

    /// Divides the accumulator by `operand` and returns the new value.
    ///
    /// Fails with [`CalculatorError::DivisionByZero`] when `operand` is zero
    /// (either sign), leaving the accumulator unchanged.
    pub fn divide(&mut self, operand: f64) -> Result<f64, CalculatorError> {
        if operand == 0.0 {
            return Err(CalculatorError::DivisionByZero);
        }
        self.value /= operand;
        trace!("divide {} -> {}", operand, self.value);
        Ok(self.value)
    }

    /// Returns the current accumulator value.
    pub fn get_value(&self) -> f64 {
        self.value
    }
}
