//! picker-app - Selection, dialog stack and orchestration for the asset picker
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: `Message`s are applied to `AppState` by `handler::update`, and
//! the `Engine` owns the state, serializes every mutation through one channel
//! and broadcasts `EngineEvent`s.

pub mod config;
pub mod dialog;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_click;
pub mod message;
pub mod selection;
pub mod state;
pub mod store;

// Re-export primary types
pub use dialog::{ActionSink, DialogDescriptor, DialogId, DialogKind, DialogStack, Tone};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{handle_click, update, UpdateAction, UpdateResult};
pub use input_click::{ClickEvent, ClickTarget};
pub use message::{ExternalAction, Message};
pub use selection::{RangeMode, Selection};
pub use state::{AppState, DocumentContext};
pub use store::AssetStore;
