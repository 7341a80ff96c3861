//! Keypad model shared by every frontend
//!
//! Maps the five button categories of the page onto calculator operations
//! and describes the standard button grid.

use crate::core::{Calculator, Operation};
use crate::error::{CalcError, CalcResult};

/// Button categories, each bound to one calculator operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonCategory {
    /// Digits and the decimal point
    Number,
    /// `+ - * /`
    Operation,
    /// `=`
    Equals,
    /// Delete last character
    Delete,
    /// Clear everything
    AllClear,
}

impl ButtonCategory {
    /// All categories
    pub const ALL: [Self; 5] = [
        Self::Number,
        Self::Operation,
        Self::Equals,
        Self::Delete,
        Self::AllClear,
    ];

    /// Data attribute marking this category in the default markup
    #[must_use]
    pub const fn default_attr(&self) -> &'static str {
        match self {
            Self::Number => "data-number",
            Self::Operation => "data-operation",
            Self::Equals => "data-equals",
            Self::Delete => "data-delete",
            Self::AllClear => "data-all-clear",
        }
    }
}

/// Actions that keypad buttons perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    /// Append a digit (0-9)
    Digit(u8),
    /// Append a decimal point
    Decimal,
    /// Choose an operator
    Operator(Operation),
    /// Compute the pending operation
    Equals,
    /// Delete the last character
    Delete,
    /// Clear all state
    AllClear,
}

impl KeypadAction {
    /// Resolves a clicked button from its category and visible text.
    ///
    /// Number and operator buttons carry their token as text; the other
    /// categories ignore it.
    pub fn from_button(category: ButtonCategory, text: &str) -> CalcResult<Self> {
        let text = text.trim();
        match category {
            ButtonCategory::Number => Self::from_number_text(text),
            ButtonCategory::Operation => Operation::from_symbol(text).map(Self::Operator),
            ButtonCategory::Equals => Ok(Self::Equals),
            ButtonCategory::Delete => Ok(Self::Delete),
            ButtonCategory::AllClear => Ok(Self::AllClear),
        }
    }

    fn from_number_text(text: &str) -> CalcResult<Self> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some('.'), None) => Ok(Self::Decimal),
            (Some(ch), None) => ch
                .to_digit(10)
                .map(|d| Self::Digit(d as u8))
                .ok_or_else(|| CalcError::InvalidDigit(text.to_string())),
            _ => Err(CalcError::InvalidDigit(text.to_string())),
        }
    }

    /// Resolves a button by its label, as shown on the standard keypad
    pub fn from_label(label: &str) -> CalcResult<Self> {
        match label.trim() {
            "=" => Ok(Self::Equals),
            "DEL" => Ok(Self::Delete),
            "AC" => Ok(Self::AllClear),
            other if Operation::from_symbol(other).is_ok() => {
                Self::from_button(ButtonCategory::Operation, other)
            }
            other => Self::from_button(ButtonCategory::Number, other),
        }
    }

    /// Returns the category of button that triggers this action
    #[must_use]
    pub const fn category(&self) -> ButtonCategory {
        match self {
            Self::Digit(_) | Self::Decimal => ButtonCategory::Number,
            Self::Operator(_) => ButtonCategory::Operation,
            Self::Equals => ButtonCategory::Equals,
            Self::Delete => ButtonCategory::Delete,
            Self::AllClear => ButtonCategory::AllClear,
        }
    }

    /// Returns the character appended to the operand, if any
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            Self::Operator(_) | Self::Equals | Self::Delete | Self::AllClear => None,
        }
    }

    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::AllClear => "AC".to_string(),
        }
    }

    /// Applies the action to the calculator
    pub fn apply(&self, calculator: &mut Calculator) {
        match self {
            Self::Digit(_) | Self::Decimal => {
                if let Some(ch) = self.to_char() {
                    calculator.append_digit(ch);
                }
            }
            Self::Operator(op) => calculator.choose_operation(*op),
            Self::Equals => calculator.compute(),
            Self::Delete => calculator.delete_last(),
            Self::AllClear => calculator.clear(),
        }
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
}

impl KeypadButtonDef {
    /// Creates a single-column button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self::spanning(action, row, col, 1)
    }

    /// Creates a button covering `span` columns
    #[must_use]
    pub fn spanning(action: KeypadAction, row: usize, col: usize, span: usize) -> Self {
        let id = match action {
            KeypadAction::Digit(d) => format!("btn-{d}"),
            KeypadAction::Decimal => "btn-decimal".to_string(),
            KeypadAction::Operator(op) => format!("btn-{}", op_name(op)),
            KeypadAction::Equals => "btn-equals".to_string(),
            KeypadAction::Delete => "btn-delete".to_string(),
            KeypadAction::AllClear => "btn-all-clear".to_string(),
        };
        Self {
            action,
            id,
            row,
            col,
            span,
        }
    }

    /// Returns true if the button covers the given cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

/// Returns a name for an operator (for element IDs)
const fn op_name(op: Operation) -> &'static str {
    match op {
        Operation::Add => "plus",
        Operation::Subtract => "minus",
        Operation::Multiply => "times",
        Operation::Divide => "divide",
    }
}

/// Keypad layout definition
/// Layout:
/// ```text
/// [    AC    ] [DEL] [ / ]
/// [ 1 ] [ 2 ] [ 3 ] [ * ]
/// [ 4 ] [ 5 ] [ 6 ] [ + ]
/// [ 7 ] [ 8 ] [ 9 ] [ - ]
/// [ . ] [ 0 ] [    =    ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn standard() -> Self {
        use KeypadAction::{AllClear, Decimal, Delete, Digit, Equals, Operator};

        let buttons = vec![
            // Row 0: AC DEL /
            KeypadButtonDef::spanning(AllClear, 0, 0, 2),
            KeypadButtonDef::new(Delete, 0, 2),
            KeypadButtonDef::new(Operator(Operation::Divide), 0, 3),
            // Row 1: 1 2 3 *
            KeypadButtonDef::new(Digit(1), 1, 0),
            KeypadButtonDef::new(Digit(2), 1, 1),
            KeypadButtonDef::new(Digit(3), 1, 2),
            KeypadButtonDef::new(Operator(Operation::Multiply), 1, 3),
            // Row 2: 4 5 6 +
            KeypadButtonDef::new(Digit(4), 2, 0),
            KeypadButtonDef::new(Digit(5), 2, 1),
            KeypadButtonDef::new(Digit(6), 2, 2),
            KeypadButtonDef::new(Operator(Operation::Add), 2, 3),
            // Row 3: 7 8 9 -
            KeypadButtonDef::new(Digit(7), 3, 0),
            KeypadButtonDef::new(Digit(8), 3, 1),
            KeypadButtonDef::new(Digit(9), 3, 2),
            KeypadButtonDef::new(Operator(Operation::Subtract), 3, 3),
            // Row 4: . 0 =
            KeypadButtonDef::new(Decimal, 4, 0),
            KeypadButtonDef::new(Digit(0), 4, 1),
            KeypadButtonDef::spanning(Equals, 4, 2, 2),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action.label() == label)
    }

    /// Processes a button click and returns the action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_button_by_id(element_id).map(|btn| btn.action)
    }
}
