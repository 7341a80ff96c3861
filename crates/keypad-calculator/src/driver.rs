//! Unified Calculator Driver
//!
//! Scenarios are written once against [`CalculatorDriver`] and run against
//! every frontend: the bare state machine ([`HeadlessDriver`]) and the page
//! wiring over a mock DOM ([`crate::wasm::WasmDriver`]).

use crate::core::{Calculator, DisplaySnapshot};
use crate::keypad::KeypadAction;

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use keypad_calculator::driver::{CalculatorDriver, HeadlessDriver};
///
/// let mut driver = HeadlessDriver::new();
/// driver.press_labels(&["1", "2", "*", "3", "="]);
/// assert_eq!(driver.current_display(), "36");
/// ```
pub trait CalculatorDriver {
    /// Presses one keypad button and re-renders
    fn press(&mut self, action: KeypadAction);

    /// Text of the pending-expression display
    fn previous_display(&self) -> String;

    /// Text of the live-value display
    fn current_display(&self) -> String;

    /// Presses buttons by their keypad labels; unknown labels are skipped
    fn press_labels(&mut self, labels: &[&str]) {
        for label in labels {
            if let Ok(action) = KeypadAction::from_label(label) {
                self.press(action);
            }
        }
    }

    /// Both displays as a snapshot
    fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            previous: self.previous_display(),
            current: self.current_display(),
        }
    }
}

/// Driver over the state machine alone, rendering into a snapshot
#[derive(Debug, Default)]
pub struct HeadlessDriver {
    calculator: Calculator,
    display: DisplaySnapshot,
}

impl HeadlessDriver {
    /// Creates a new headless driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press(&mut self, action: KeypadAction) {
        action.apply(&mut self.calculator);
        self.display = self.calculator.render();
    }

    fn previous_display(&self) -> String {
        self.display.previous.clone()
    }

    fn current_display(&self) -> String {
        self.display.current.clone()
    }
}

// ===== Unified Test Scenarios =====
// These run against ANY CalculatorDriver implementation

/// Verifies the four operators
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["AC", "2", "+", "3", "="]);
    assert_eq!(driver.current_display(), "5");

    driver.press_labels(&["AC", "1", "0", "-", "4", "="]);
    assert_eq!(driver.current_display(), "6");

    driver.press_labels(&["AC", "1", "2", "*", "3", "="]);
    assert_eq!(driver.current_display(), "36");

    driver.press_labels(&["AC", "6", "/", "2", "="]);
    assert_eq!(driver.current_display(), "3");
    assert_eq!(driver.previous_display(), "");
}

/// Verifies the pending-expression display
pub fn verify_pending_display<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["AC", "1", "2", "."]);
    assert_eq!(driver.previous_display(), "");
    assert_eq!(driver.current_display(), "12.");

    driver.press_labels(&["5", "*"]);
    assert_eq!(driver.previous_display(), "12.5 *");
    assert_eq!(driver.current_display(), "");

    driver.press_labels(&["2"]);
    assert_eq!(driver.previous_display(), "12.5 *");
    assert_eq!(driver.current_display(), "2");
}

/// Verifies left-to-right chaining of operators
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["AC", "3", "+", "4", "-"]);
    assert_eq!(driver.previous_display(), "7 -");
    assert_eq!(driver.current_display(), "");

    driver.press_labels(&["2", "="]);
    assert_eq!(driver.current_display(), "5");
}

/// Verifies that inapplicable presses change nothing
pub fn verify_declined_presses<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["AC", "+"]);
    assert_eq!(driver.snapshot(), DisplaySnapshot::default());

    driver.press_labels(&["DEL"]);
    assert_eq!(driver.snapshot(), DisplaySnapshot::default());

    driver.press_labels(&["1", ".", "5", "."]);
    assert_eq!(driver.current_display(), "1.5");

    driver.press_labels(&["="]);
    assert_eq!(driver.current_display(), "1.5");

    driver.press_labels(&["+", "="]);
    assert_eq!(driver.previous_display(), "1.5 +");
    assert_eq!(driver.current_display(), "");
}

/// Verifies editing and clearing
pub fn verify_editing<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["AC", "9", "8", "7", "DEL"]);
    assert_eq!(driver.current_display(), "98");

    driver.press_labels(&["/", "2", "AC"]);
    assert_eq!(driver.snapshot(), DisplaySnapshot::default());
}

/// Verifies IEEE special values reach the display
pub fn verify_special_values<D: CalculatorDriver>(driver: &mut D) {
    driver.press_labels(&["AC", "5", "/", "0", "="]);
    assert_eq!(driver.current_display(), "Infinity");

    driver.press_labels(&["AC", "0", "/", "0", "="]);
    assert_eq!(driver.current_display(), "NaN");

    driver.press_labels(&["AC", ".", "1", "+", ".", "2", "="]);
    assert_eq!(driver.current_display(), "0.30000000000000004");
}

/// Complete verification suite - runs every scenario
pub fn run_full_suite<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_pending_display(driver);
    verify_chaining(driver);
    verify_declined_presses(driver);
    verify_editing(driver);
    verify_special_values(driver);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    #[test]
    fn test_headless_driver_new() {
        let driver = HeadlessDriver::new();
        assert_eq!(driver.snapshot(), DisplaySnapshot::default());
        assert_eq!(driver.calculator(), &Calculator::new());
    }

    #[test]
    fn test_headless_driver_press_renders() {
        let mut driver = HeadlessDriver::new();
        driver.press(KeypadAction::Digit(4));
        driver.press(KeypadAction::Operator(Operation::Add));
        assert_eq!(driver.previous_display(), "4 +");
        assert_eq!(driver.current_display(), "");
    }

    #[test]
    fn test_press_labels_skips_unknown() {
        let mut driver = HeadlessDriver::new();
        driver.press_labels(&["1", "%", "2"]);
        assert_eq!(driver.current_display(), "12");
    }

    #[test]
    fn test_headless_basic_arithmetic() {
        verify_basic_arithmetic(&mut HeadlessDriver::new());
    }

    #[test]
    fn test_headless_pending_display() {
        verify_pending_display(&mut HeadlessDriver::new());
    }

    #[test]
    fn test_headless_chaining() {
        verify_chaining(&mut HeadlessDriver::new());
    }

    #[test]
    fn test_headless_declined_presses() {
        verify_declined_presses(&mut HeadlessDriver::new());
    }

    #[test]
    fn test_headless_editing() {
        verify_editing(&mut HeadlessDriver::new());
    }

    #[test]
    fn test_headless_special_values() {
        verify_special_values(&mut HeadlessDriver::new());
    }

    #[test]
    fn test_headless_full_suite() {
        run_full_suite(&mut HeadlessDriver::new());
    }
}
