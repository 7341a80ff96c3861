//! Calculator core: operators, operand text and the state machine

mod operand;
mod operations;
mod state;

pub use operand::{format_operand, parse_operand};
pub use operations::Operation;
pub use state::{Calculator, DisplaySnapshot, PendingOperation};
