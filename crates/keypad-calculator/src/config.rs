//! Page binding configuration
//!
//! Names the data attributes that mark the display regions and each button
//! category in the page markup. Defaults match `www/index.html`.

use serde::{Deserialize, Serialize};

use crate::error::CalcResult;
use crate::keypad::ButtonCategory;

/// Data attributes the frontend looks for in the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    /// Attribute on the pending-expression display
    pub previous_operand_attr: String,
    /// Attribute on the live-value display
    pub current_operand_attr: String,
    /// Attribute on digit and decimal point buttons
    pub number_attr: String,
    /// Attribute on operator buttons
    pub operation_attr: String,
    /// Attribute on the equals button
    pub equals_attr: String,
    /// Attribute on the delete button
    pub delete_attr: String,
    /// Attribute on the all-clear button
    pub all_clear_attr: String,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            previous_operand_attr: "data-previous-operand".to_string(),
            current_operand_attr: "data-current-operand".to_string(),
            number_attr: ButtonCategory::Number.default_attr().to_string(),
            operation_attr: ButtonCategory::Operation.default_attr().to_string(),
            equals_attr: ButtonCategory::Equals.default_attr().to_string(),
            delete_attr: ButtonCategory::Delete.default_attr().to_string(),
            all_clear_attr: ButtonCategory::AllClear.default_attr().to_string(),
        }
    }
}

impl BindingConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the configuration to JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the pending-expression display attribute
    #[must_use]
    pub fn with_previous_operand_attr(mut self, attr: impl Into<String>) -> Self {
        self.previous_operand_attr = attr.into();
        self
    }

    /// Set the live-value display attribute
    #[must_use]
    pub fn with_current_operand_attr(mut self, attr: impl Into<String>) -> Self {
        self.current_operand_attr = attr.into();
        self
    }

    /// Set the attribute for one button category
    #[must_use]
    pub fn with_button_attr(mut self, category: ButtonCategory, attr: impl Into<String>) -> Self {
        *self.button_attr_mut(category) = attr.into();
        self
    }

    /// Attribute marking buttons of the given category
    #[must_use]
    pub fn button_attr(&self, category: ButtonCategory) -> &str {
        match category {
            ButtonCategory::Number => &self.number_attr,
            ButtonCategory::Operation => &self.operation_attr,
            ButtonCategory::Equals => &self.equals_attr,
            ButtonCategory::Delete => &self.delete_attr,
            ButtonCategory::AllClear => &self.all_clear_attr,
        }
    }

    fn button_attr_mut(&mut self, category: ButtonCategory) -> &mut String {
        match category {
            ButtonCategory::Number => &mut self.number_attr,
            ButtonCategory::Operation => &mut self.operation_attr,
            ButtonCategory::Equals => &mut self.equals_attr,
            ButtonCategory::Delete => &mut self.delete_attr,
            ButtonCategory::AllClear => &mut self.all_clear_attr,
        }
    }

    /// Category whose attribute is `attr`, if any
    #[must_use]
    pub fn category_for_attr(&self, attr: &str) -> Option<ButtonCategory> {
        ButtonCategory::ALL
            .into_iter()
            .find(|&category| self.button_attr(category) == attr)
    }

    /// CSS attribute selector, e.g. `[data-number]`
    #[must_use]
    pub fn selector(attr: &str) -> String {
        format!("[{attr}]")
    }
}
