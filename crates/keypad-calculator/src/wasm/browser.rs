//! Browser WASM bindings for Calculator
//!
//! Finds the display regions and buttons by data attribute, attaches one
//! click listener per button and renders after every press.

// Note: This module is already conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element};

use crate::config::BindingConfig;
use crate::core::Calculator;
use crate::error::{CalcError, CalcResult};
use crate::keypad::{ButtonCategory, KeypadAction};

type ClickListener = Closure<dyn FnMut(web_sys::Event)>;

/// The two display regions of the page
#[derive(Debug, Clone)]
struct Displays {
    previous: Element,
    current: Element,
}

impl Displays {
    fn find(document: &Document, config: &BindingConfig) -> CalcResult<Self> {
        Ok(Self {
            previous: query_one(document, &config.previous_operand_attr)?,
            current: query_one(document, &config.current_operand_attr)?,
        })
    }

    fn render(&self, calculator: &Calculator) {
        let snapshot = calculator.render();
        self.current.set_text_content(Some(&snapshot.current));
        self.previous.set_text_content(Some(&snapshot.previous));
    }
}

/// Browser Calculator - the main WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    state: Rc<RefCell<Calculator>>,
    config: BindingConfig,
    displays: Option<Displays>,
    listeners: Vec<ClickListener>,
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a calculator bound to the default page attributes
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_binding(BindingConfig::default())
    }

    /// Create a calculator from a JSON binding configuration
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(json: &str) -> Result<BrowserCalculator, JsValue> {
        let config = BindingConfig::from_json(json).map_err(to_js)?;
        Ok(Self::with_binding(config))
    }

    /// Attach click listeners to every button in the document and render
    pub fn mount(&mut self) -> Result<(), JsValue> {
        self.try_mount().map_err(to_js)
    }

    /// Text of the pending-expression display
    #[wasm_bindgen(getter, js_name = previousDisplay)]
    pub fn previous_display(&self) -> String {
        self.state.borrow().render().previous
    }

    /// Text of the live-value display
    #[wasm_bindgen(getter, js_name = currentDisplay)]
    pub fn current_display(&self) -> String {
        self.state.borrow().render().current
    }

    /// Press a button by its keypad label, e.g. `"7"`, `"*"`, `"AC"`
    pub fn press(&mut self, label: &str) -> Result<(), JsValue> {
        let action = KeypadAction::from_label(label).map_err(to_js)?;
        let mut calculator = self.state.borrow_mut();
        action.apply(&mut calculator);
        if let Some(displays) = &self.displays {
            displays.render(&calculator);
        }
        Ok(())
    }

    /// Clear state and displays
    pub fn clear(&mut self) {
        let mut calculator = self.state.borrow_mut();
        calculator.clear();
        if let Some(displays) = &self.displays {
            displays.render(&calculator);
        }
    }
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserCalculator {
    fn with_binding(config: BindingConfig) -> Self {
        Self {
            state: Rc::new(RefCell::new(Calculator::new())),
            config,
            displays: None,
            listeners: Vec::new(),
        }
    }

    fn try_mount(&mut self) -> CalcResult<()> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| CalcError::dom("no document available"))?;

        let displays = Displays::find(&document, &self.config)?;
        // remounting drops the old listeners with their closures
        self.listeners.clear();

        for category in ButtonCategory::ALL {
            let attr = self.config.button_attr(category);
            let buttons = document
                .query_selector_all(&BindingConfig::selector(attr))
                .map_err(|_| CalcError::dom(format!("invalid selector for {attr}")))?;

            for index in 0..buttons.length() {
                let Some(button) = buttons.get(index).and_then(|n| n.dyn_into::<Element>().ok())
                else {
                    continue;
                };
                let listener = click_listener(category, &button, &self.state, &displays);
                button
                    .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                    .map_err(|_| CalcError::dom("failed to attach click listener"))?;
                self.listeners.push(listener);
            }
        }

        debug!(buttons = self.listeners.len(), "calculator mounted");
        displays.render(&self.state.borrow());
        self.displays = Some(displays);
        Ok(())
    }
}

/// Builds the handler for one button: the token is read from the button's
/// text at click time
fn click_listener(
    category: ButtonCategory,
    button: &Element,
    state: &Rc<RefCell<Calculator>>,
    displays: &Displays,
) -> ClickListener {
    let button = button.clone();
    let state = Rc::clone(state);
    let displays = displays.clone();

    let on_click = move |_event: web_sys::Event| {
        let text = button.text_content().unwrap_or_default();
        match KeypadAction::from_button(category, &text) {
            Ok(action) => {
                debug!(label = %action.label(), "button pressed");
                let mut calculator = state.borrow_mut();
                action.apply(&mut calculator);
                displays.render(&calculator);
            }
            Err(err) => debug!(%err, "click ignored"),
        }
    };

    Closure::wrap(Box::new(on_click) as Box<dyn FnMut(web_sys::Event)>)
}

fn query_one(document: &Document, attr: &str) -> CalcResult<Element> {
    let selector = BindingConfig::selector(attr);
    document
        .query_selector(&selector)
        .ok()
        .flatten()
        .ok_or(CalcError::MissingElement(selector))
}

fn to_js(err: CalcError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console::log_1(&"Calculator WASM initialized".into());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_calculator_new() {
        let calc = BrowserCalculator::new();
        assert!(calc.displays.is_none());
        assert!(calc.listeners.is_empty());
        assert_eq!(calc.config, BindingConfig::default());
    }

    #[test]
    fn test_press_without_mount() {
        let mut calc = BrowserCalculator::new();
        for label in ["1", "2", "*", "3"] {
            assert!(calc.press(label).is_ok());
        }
        assert_eq!(calc.previous_display(), "12 *");
        assert_eq!(calc.current_display(), "3");
        calc.press("=").unwrap();
        assert_eq!(calc.current_display(), "36");
    }

    #[test]
    fn test_clear_without_mount() {
        let mut calc = BrowserCalculator::new();
        calc.press("9").unwrap();
        calc.clear();
        assert_eq!(calc.current_display(), "");
    }

    #[test]
    fn test_with_config_bindings() {
        let calc = BrowserCalculator::with_binding(
            BindingConfig::from_json(r#"{"number_attr": "data-digit"}"#).unwrap(),
        );
        assert_eq!(calc.config.number_attr, "data-digit");
    }
}
