//! Property-based tests for the keypad and state machine

#![allow(clippy::unwrap_used)]

use keypad_calculator::core::{Calculator, Operation};
use keypad_calculator::driver::{CalculatorDriver, HeadlessDriver};
use keypad_calculator::keypad::{ButtonCategory, Keypad, KeypadAction};
use keypad_calculator::wasm::WasmDriver;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Generate any valid digit (0-9)
fn digit_strategy() -> impl Strategy<Value = u8> {
    0u8..=9u8
}

/// Generate any operator
fn operator_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Add),
        Just(Operation::Subtract),
        Just(Operation::Multiply),
        Just(Operation::Divide),
    ]
}

/// Generate any keypad action
fn keypad_action_strategy() -> impl Strategy<Value = KeypadAction> {
    prop_oneof![
        4 => digit_strategy().prop_map(KeypadAction::Digit),
        1 => Just(KeypadAction::Decimal),
        2 => operator_strategy().prop_map(KeypadAction::Operator),
        1 => Just(KeypadAction::Equals),
        1 => Just(KeypadAction::Delete),
        1 => Just(KeypadAction::AllClear),
    ]
}

// ===== KeypadAction properties =====

proptest! {
    /// Every action's label resolves back to the same action
    #[test]
    fn prop_label_resolves_to_action(action in keypad_action_strategy()) {
        prop_assert_eq!(KeypadAction::from_label(&action.label()).unwrap(), action);
    }

    /// Every action has a button on the standard keypad
    #[test]
    fn prop_action_on_standard_keypad(action in keypad_action_strategy()) {
        let keypad = Keypad::standard();
        let btn = keypad.find_button_by_label(&action.label());
        prop_assert!(btn.is_some());
        prop_assert_eq!(btn.unwrap().action, action);
    }

    /// Resolving a button from its category and label gives the action back
    #[test]
    fn prop_from_button_matches_category(action in keypad_action_strategy()) {
        let resolved = KeypadAction::from_button(action.category(), &action.label()).unwrap();
        prop_assert_eq!(resolved, action);
    }

    /// Number buttons reject anything longer than one character
    #[test]
    fn prop_number_rejects_multichar(text in "[0-9.]{2,5}") {
        prop_assert!(KeypadAction::from_button(ButtonCategory::Number, &text).is_err());
    }
}

// ===== State machine properties =====

proptest! {
    /// The pending operand and operator are always present together
    #[test]
    fn prop_pending_invariant(actions in proptest::collection::vec(keypad_action_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        for action in actions {
            action.apply(&mut calc);
            prop_assert_eq!(calc.operation().is_some(), !calc.previous_operand().is_empty());
        }
    }

    /// Typed input never holds two decimal points
    #[test]
    fn prop_single_decimal_point(actions in proptest::collection::vec(keypad_action_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        for action in actions {
            action.apply(&mut calc);
            prop_assert!(calc.current_operand().matches('.').count() <= 1);
        }
    }

    /// The rendered pending expression follows "{previous} {op}"
    #[test]
    fn prop_render_format(actions in proptest::collection::vec(keypad_action_strategy(), 0..40)) {
        let mut calc = Calculator::new();
        for action in actions {
            action.apply(&mut calc);
        }
        let snapshot = calc.render();
        match calc.operation() {
            Some(op) => prop_assert_eq!(snapshot.previous, format!("{} {}", calc.previous_operand(), op)),
            None => prop_assert_eq!(snapshot.previous, ""),
        }
        prop_assert_eq!(snapshot.current, calc.current_operand());
    }

    /// Compute with an operator applies it to the parsed operands
    #[test]
    fn prop_compute_matches_f64(a in 0u32..100_000, b in 1u32..100_000, op in operator_strategy()) {
        let mut calc = Calculator::new();
        for ch in a.to_string().chars() {
            calc.append_digit(ch);
        }
        calc.choose_operation(op);
        for ch in b.to_string().chars() {
            calc.append_digit(ch);
        }
        calc.compute();
        let expected = op.apply(f64::from(a), f64::from(b));
        prop_assert_eq!(calc.current_operand().parse::<f64>().unwrap(), expected);
        prop_assert!(calc.operation().is_none());
    }
}

// ===== Driver parity =====

proptest! {
    /// The page wiring and the bare state machine always show the same text
    #[test]
    fn prop_drivers_agree(actions in proptest::collection::vec(keypad_action_strategy(), 0..30)) {
        let mut headless = HeadlessDriver::new();
        let mut wasm = WasmDriver::new();
        for action in actions {
            headless.press(action);
            wasm.press(action);
            prop_assert_eq!(headless.snapshot(), wasm.snapshot());
        }
    }
}
