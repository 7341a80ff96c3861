//! Mock DOM for WASM Testing
//!
//! This module provides DOM abstractions that let the browser wiring be
//! exercised on the host, without web-sys.

use std::collections::HashMap;

use crate::config::BindingConfig;
use crate::keypad::{ButtonCategory, Keypad};

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Checks if element carries an attribute
    #[must_use]
    pub fn has_attr(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events recorded by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Text content of an element was replaced
    TextChanged {
        /// The ID of the updated element
        element_id: String,
        /// The new text
        text: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a text change event
    #[must_use]
    pub fn text_changed(element_id: &str, text: &str) -> Self {
        Self::TextChanged {
            element_id: element_id.to_string(),
            text: text.to_string(),
        }
    }
}

/// Mock DOM for testing the calculator page without a browser
#[derive(Debug)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    /// Elements by ID for quick lookup
    elements: HashMap<String, DomElement>,
    /// Registration order, standing in for document order
    order: Vec<String>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// ID of the pending-expression display
    pub const PREVIOUS_OPERAND_ID: &'static str = "previous-operand";
    /// ID of the live-value display
    pub const CURRENT_OPERAND_ID: &'static str = "current-operand";

    /// Creates a new mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            order: Vec::new(),
            event_history: Vec::new(),
        }
    }

    /// Creates the calculator page: two display regions and one button per
    /// keypad entry, each marked with its category attribute
    #[must_use]
    pub fn calculator(config: &BindingConfig, keypad: &Keypad) -> Self {
        let mut dom = Self::new();

        let previous = DomElement::new("div")
            .with_id(Self::PREVIOUS_OPERAND_ID)
            .with_class("previous-operand")
            .with_attr(&config.previous_operand_attr, "");
        let current = DomElement::new("div")
            .with_id(Self::CURRENT_OPERAND_ID)
            .with_class("current-operand")
            .with_attr(&config.current_operand_attr, "");
        let output = DomElement::new("div")
            .with_id("output")
            .with_class("output")
            .with_child(previous.clone())
            .with_child(current.clone());

        let mut grid = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator-grid")
            .with_child(output.clone());

        dom.register_element(output);
        dom.register_element(previous);
        dom.register_element(current);

        for btn in keypad.buttons() {
            let attr = config.button_attr(btn.action.category());
            let mut elem = DomElement::new("button")
                .with_id(&btn.id)
                .with_text(&btn.action.label())
                .with_attr(attr, "");
            if btn.span == 2 {
                elem = elem.with_class("span-two");
            }
            grid = grid.with_child(elem.clone());
            dom.register_element(elem);
        }

        dom.root = grid;
        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if element.id.is_empty() {
            return;
        }
        if !self.elements.contains_key(&element.id) {
            self.order.push(element.id.clone());
        }
        self.elements.insert(element.id.clone(), element);
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// All registered elements carrying `attr`, in document order
    #[must_use]
    pub fn query_by_attr(&self, attr: &str) -> Vec<&DomElement> {
        self.order
            .iter()
            .filter_map(|id| self.elements.get(id))
            .filter(|elem| elem.has_attr(attr))
            .collect()
    }

    /// First registered element carrying `attr`
    #[must_use]
    pub fn query_first_by_attr(&self, attr: &str) -> Option<&DomElement> {
        self.order
            .iter()
            .filter_map(|id| self.elements.get(id))
            .find(|elem| elem.has_attr(attr))
    }

    /// Button category of an element, read from its data attributes
    #[must_use]
    pub fn button_category(&self, id: &str, config: &BindingConfig) -> Option<ButtonCategory> {
        let elem = self.elements.get(id)?;
        ButtonCategory::ALL
            .into_iter()
            .find(|&category| elem.has_attr(config.button_attr(category)))
    }

    /// Records a click on an element
    pub fn dispatch_click(&mut self, element_id: &str) {
        self.event_history.push(DomEvent::click(element_id));
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
            self.event_history.push(DomEvent::text_changed(id, text));
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }
}
