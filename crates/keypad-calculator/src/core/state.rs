//! Calculator state machine
//!
//! Holds the operand being typed and, once an operator is chosen, the
//! pending left-hand operand together with that operator. Every transition
//! either applies fully or leaves the state untouched; nothing here renders.

use std::mem;

use super::operand::{format_operand, parse_operand};
use super::operations::Operation;

/// Left-hand operand waiting for the right-hand side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation {
    /// Operand captured when the operator was chosen
    pub operand: String,
    /// Chosen operator
    pub operation: Operation,
}

/// Text for the two display regions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySnapshot {
    /// Pending expression, `"{previous} {op}"` or empty
    pub previous: String,
    /// Live value, the current operand verbatim
    pub current: String,
}

/// Four-function calculator driven by keypad presses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    current: String,
    pending: Option<PendingOperation>,
}

impl Calculator {
    /// Creates a calculator with empty operands and no operator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Operand typed since the last operator or clear
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current
    }

    /// Operand captured before the chosen operator, empty when none
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        self.pending.as_ref().map_or("", |p| p.operand.as_str())
    }

    /// Chosen operator, if any
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        self.pending.as_ref().map(|p| p.operation)
    }

    /// Pending left-hand side, if any
    #[must_use]
    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// Resets both operands and the operator
    pub fn clear(&mut self) {
        self.current.clear();
        self.pending = None;
    }

    /// Removes the last character of the current operand
    pub fn delete_last(&mut self) {
        self.current.pop();
    }

    /// Appends a digit or decimal point to the current operand.
    ///
    /// A second decimal point is ignored.
    pub fn append_digit(&mut self, token: char) {
        if token == '.' && self.current.contains('.') {
            return;
        }
        self.current.push(token);
    }

    /// Selects the operator for the next computation.
    ///
    /// Ignored while nothing has been typed. With an operation already
    /// pending, that one is computed first so presses chain left to right.
    pub fn choose_operation(&mut self, operation: Operation) {
        if self.current.is_empty() {
            return;
        }
        if self.pending.is_some() {
            self.compute();
        }

        self.pending = Some(PendingOperation {
            operand: mem::take(&mut self.current),
            operation,
        });
    }

    /// Computes the pending operation against the current operand.
    ///
    /// Leaves the state untouched when either operand does not parse or no
    /// operator is pending.
    pub fn compute(&mut self) {
        let Some(pending) = &self.pending else {
            return;
        };
        let (Some(lhs), Some(rhs)) = (
            parse_operand(&pending.operand),
            parse_operand(&self.current),
        ) else {
            return;
        };

        let result = pending.operation.apply(lhs, rhs);
        self.current = format_operand(result);
        self.pending = None;
    }

    /// Text for the pending-expression and live-value displays
    #[must_use]
    pub fn render(&self) -> DisplaySnapshot {
        let previous = self
            .pending
            .as_ref()
            .map(|p| format!("{} {}", p.operand, p.operation))
            .unwrap_or_default();

        DisplaySnapshot {
            previous,
            current: self.current.clone(),
        }
    }
}
