//! Page wiring tests: clicks on the mock page, end-to-end scenarios and the
//! debug events emitted per click

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use keypad_calculator::config::BindingConfig;
use keypad_calculator::driver::{run_full_suite, CalculatorDriver};
use keypad_calculator::keypad::ButtonCategory;
use keypad_calculator::wasm::{DomEvent, MockDom, WasmDriver};
use tracing_subscriber::layer::SubscriberExt;

// ============================================================================
// Event capture
// ============================================================================

#[derive(Clone, Default)]
struct EventCapture {
    messages: Arc<Mutex<Vec<String>>>,
}

struct MessageVisitor(Option<String>);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = MessageVisitor(None);
        event.record(&mut visitor);
        if let Some(message) = visitor.0 {
            self.messages.lock().unwrap().push(message);
        }
    }
}

fn capture_messages<F: FnOnce()>(f: F) -> Vec<String> {
    let capture = EventCapture::default();
    let subscriber = tracing_subscriber::registry().with(capture.clone());
    tracing::subscriber::with_default(subscriber, f);
    let messages = capture.messages.lock().unwrap().clone();
    messages
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn end_to_end_multiplication_by_clicks() {
    let mut driver = WasmDriver::new();
    for id in ["btn-all-clear", "btn-1", "btn-2", "btn-times", "btn-3"] {
        driver.click(id);
    }
    assert_eq!(driver.previous_element_text(), Some("12 *"));
    assert_eq!(driver.current_element_text(), Some("3"));

    driver.click("btn-equals");
    assert_eq!(driver.previous_element_text(), Some(""));
    assert_eq!(driver.current_element_text(), Some("36"));
}

#[test]
fn division_by_zero_shows_infinity() {
    let mut driver = WasmDriver::new();
    for id in ["btn-5", "btn-divide", "btn-0", "btn-equals"] {
        driver.click(id);
    }
    assert_eq!(driver.current_element_text(), Some("Infinity"));
}

#[test]
fn every_click_renders_both_displays() {
    let mut driver = WasmDriver::new();
    for id in ["btn-4", "btn-plus", "btn-delete"] {
        driver.click(id);
    }
    let renders = driver
        .dom()
        .event_history()
        .iter()
        .filter(|e| matches!(e, DomEvent::TextChanged { .. }))
        .count();
    assert_eq!(renders, 6);
}

#[test]
fn full_suite_with_custom_attributes() {
    let config = BindingConfig::from_json(
        r#"{
            "number_attr": "data-digit",
            "operation_attr": "data-op",
            "current_operand_attr": "data-value"
        }"#,
    )
    .unwrap();
    let mut driver = WasmDriver::with_config(config);

    assert_eq!(driver.dom().query_by_attr("data-digit").len(), 11);
    assert!(driver.dom().query_by_attr("data-number").is_empty());
    let value = driver.dom().query_first_by_attr("data-value").unwrap();
    assert_eq!(value.id, MockDom::CURRENT_OPERAND_ID);

    run_full_suite(&mut driver);
}

#[test]
fn category_resolution_follows_config() {
    let config = BindingConfig::default().with_button_attr(ButtonCategory::Delete, "data-back");
    let driver = WasmDriver::with_config(config.clone());
    assert_eq!(
        driver.dom().button_category("btn-delete", &config),
        Some(ButtonCategory::Delete)
    );
    assert_eq!(
        driver
            .dom()
            .button_category("btn-delete", &BindingConfig::default()),
        None
    );
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn click_emits_button_pressed_event() {
    let messages = capture_messages(|| {
        let mut driver = WasmDriver::new();
        driver.click("btn-7");
    });
    assert_eq!(messages, vec!["button pressed".to_string()]);
}

#[test]
fn ignored_click_emits_event_without_state_change() {
    let mut driver = WasmDriver::new();
    let messages = capture_messages(|| {
        driver.click(MockDom::PREVIOUS_OPERAND_ID);
    });
    assert_eq!(messages, vec!["click ignored".to_string()]);
    assert_eq!(driver.current_display(), "");
}

#[test]
fn declined_transition_is_silent_in_state_machine() {
    // the click itself is logged, the declined operator choice adds nothing
    let messages = capture_messages(|| {
        let mut driver = WasmDriver::new();
        driver.click("btn-plus");
        assert_eq!(driver.previous_display(), "");
    });
    assert_eq!(messages, vec!["button pressed".to_string()]);
}
