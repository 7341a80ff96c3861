//! WASM Frontend for Calculator
//!
//! The browser binding lives behind the `wasm` feature; the mock DOM and
//! its driver are always available so the page wiring can be tested on the
//! host.

#[cfg(feature = "wasm")]
mod browser;
mod dom;
mod driver;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom};
pub use driver::WasmDriver;
