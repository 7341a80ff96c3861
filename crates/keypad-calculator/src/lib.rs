//! Keypad Calculator
//!
//! A four-function calculator driven by button presses, with a WASM
//! frontend that binds to a page by data attributes.
//!
//! The core is a small state machine: the operand being typed, and once an
//! operator is chosen, the pending left-hand operand with that operator.
//! Every press maps to one transition followed by a render into two display
//! strings.
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.append_digit('1');
//! calc.append_digit('2');
//! calc.choose_operation(Operation::Multiply);
//! calc.append_digit('3');
//! assert_eq!(calc.render().previous, "12 *");
//!
//! calc.compute();
//! assert_eq!(calc.current_operand(), "36");
//!
//! // Division by zero shows the IEEE result
//! calc.choose_operation(Operation::Divide);
//! calc.append_digit('0');
//! calc.compute();
//! assert_eq!(calc.current_operand(), "Infinity");
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod keypad;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

/// WASM module - mock DOM and driver always available,
/// browser bindings behind the `wasm` feature
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::BindingConfig;
    pub use crate::core::{Calculator, DisplaySnapshot, Operation, PendingOperation};
    pub use crate::driver::{CalculatorDriver, HeadlessDriver};
    pub use crate::error::{CalcError, CalcResult};
    pub use crate::keypad::{ButtonCategory, Keypad, KeypadAction};

    #[cfg(feature = "wasm")]
    pub use crate::wasm::BrowserCalculator;
    pub use crate::wasm::{DomElement, DomEvent, MockDom, WasmDriver};
}
