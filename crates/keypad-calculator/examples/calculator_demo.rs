//! Calculator Demo
//!
//! Replays keypad presses through the mock page and prints both displays
//! after every press.
//!
//! Run with: cargo run --example calculator_demo -- 1 2 "*" 3 =
//! Set RUST_LOG=debug to see each dispatched click.

use keypad_calculator::driver::CalculatorDriver;
use keypad_calculator::keypad::KeypadAction;
use keypad_calculator::logging;
use keypad_calculator::wasm::WasmDriver;

fn main() {
    logging::init();

    let mut labels: Vec<String> = std::env::args().skip(1).collect();
    if labels.is_empty() {
        labels = ["3", "+", "4", "-", "2", "=", "*", "1", "2", "=", "/", "0", "="]
            .iter()
            .map(ToString::to_string)
            .collect();
    }

    println!("╔══════════════════════════════════════════════╗");
    println!("║        Keypad Calculator - Press Replay      ║");
    println!("╚══════════════════════════════════════════════╝");
    println!();
    println!("  {:<6} {:>20} {:>20}", "press", "pending", "value");
    println!("  {}", "─".repeat(48));

    let mut driver = WasmDriver::new();
    for label in &labels {
        match KeypadAction::from_label(label) {
            Ok(action) => driver.press(action),
            Err(err) => {
                println!("  {label:<6} skipped: {err}");
                continue;
            }
        }
        println!(
            "  {:<6} {:>20} {:>20}",
            label,
            driver.previous_display(),
            driver.current_display()
        );
    }

    println!();
    println!("DOM events recorded: {}", driver.dom().event_history().len());
}
