//! Asset Picker Library
//!
//! Selection and dialog-stack engine for browsing media assets, plus a
//! headless NDJSON driver. State logic lives in `picker-app`; this crate wires
//! it to stdin/stdout.

pub mod headless;

pub use headless::{load_items, run_headless};
