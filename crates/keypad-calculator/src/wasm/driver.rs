//! WASM Driver - page wiring over the mock DOM
//!
//! Mirrors what the browser binding does on every click: read the button's
//! category attribute and text, apply the resulting action, then copy the
//! state into the two display elements.

use tracing::debug;

use super::dom::MockDom;
use crate::config::BindingConfig;
use crate::core::Calculator;
use crate::driver::CalculatorDriver;
use crate::error::{CalcError, CalcResult};
use crate::keypad::{Keypad, KeypadAction};

/// WASM Driver wrapping calculator and mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    calculator: Calculator,
    dom: MockDom,
    config: BindingConfig,
    keypad: Keypad,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver over the default page markup
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BindingConfig::default())
    }

    /// Creates a driver whose page uses the given attributes
    #[must_use]
    pub fn with_config(config: BindingConfig) -> Self {
        let keypad = Keypad::standard();
        let dom = MockDom::calculator(&config, &keypad);
        Self {
            calculator: Calculator::new(),
            dom,
            config,
            keypad,
        }
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns a mutable reference to the DOM
    pub fn dom_mut(&mut self) -> &mut MockDom {
        &mut self.dom
    }

    /// Returns the binding configuration
    #[must_use]
    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    /// Simulates a click on an element.
    ///
    /// Clicks on elements that are not calculator buttons, or whose text is
    /// not a valid token, are ignored.
    pub fn click(&mut self, element_id: &str) {
        self.dom.dispatch_click(element_id);
        match self.resolve(element_id) {
            Ok(action) => {
                debug!(element_id, label = %action.label(), "button pressed");
                action.apply(&mut self.calculator);
                self.sync_dom();
            }
            Err(err) => debug!(element_id, %err, "click ignored"),
        }
    }

    /// Simulates a click on the standard keypad button with this label
    pub fn click_label(&mut self, label: &str) {
        let id = self.keypad.find_button_by_label(label).map(|b| b.id.clone());
        match id {
            Some(id) => self.click(&id),
            None => debug!(label, "no button with this label"),
        }
    }

    /// Resolves a clicked element to the action its markup describes
    fn resolve(&self, element_id: &str) -> CalcResult<KeypadAction> {
        let category = self
            .dom
            .button_category(element_id, &self.config)
            .ok_or_else(|| CalcError::missing_element(element_id))?;
        let text = self
            .dom
            .get_element_text(element_id)
            .ok_or_else(|| CalcError::missing_element(element_id))?;
        KeypadAction::from_button(category, text)
    }

    /// Synchronizes DOM state with calculator state
    fn sync_dom(&mut self) {
        let snapshot = self.calculator.render();
        self.dom
            .set_element_text(MockDom::CURRENT_OPERAND_ID, &snapshot.current);
        self.dom
            .set_element_text(MockDom::PREVIOUS_OPERAND_ID, &snapshot.previous);
    }

    /// Gets the pending-expression element's text
    #[must_use]
    pub fn previous_element_text(&self) -> Option<&str> {
        self.dom.get_element_text(MockDom::PREVIOUS_OPERAND_ID)
    }

    /// Gets the live-value element's text
    #[must_use]
    pub fn current_element_text(&self) -> Option<&str> {
        self.dom.get_element_text(MockDom::CURRENT_OPERAND_ID)
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, action: KeypadAction) {
        self.click_label(&action.label());
    }

    fn previous_display(&self) -> String {
        self.previous_element_text().unwrap_or_default().to_string()
    }

    fn current_display(&self) -> String {
        self.current_element_text().unwrap_or_default().to_string()
    }
}
