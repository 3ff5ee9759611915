//! Headless mode - NDJSON in, NDJSON out
//!
//! Commands are read from stdin (see [`command::Command`]) and every engine
//! event is written to stdout as one JSON object per line. This lets scripts
//! and E2E tests drive the picker without any rendering layer.
//!
//! # Example Output
//!
//! ```json
//! {"event":"ready","item_count":5,"timestamp":1704700001000}
//! {"event":"selection_changed","picked":["c"],"last_picked":"c","timestamp":1704700002000}
//! {"event":"dialog_opened","id":"edit","timestamp":1704700003000}
//! ```

pub mod command;
pub mod runner;

pub use command::Command;
pub use runner::{load_items, run_headless, run_headless_with, EventOutput};

use chrono::Utc;
use serde::Serialize;
use std::io::Write;
use tracing::error;

use picker_app::EngineEvent;
use picker_core::{AssetId, AssetSelection};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Engine initialized with the supplied item list
    Ready { item_count: usize, timestamp: i64 },

    SelectionChanged {
        picked: Vec<AssetId>,
        last_picked: Option<AssetId>,
        timestamp: i64,
    },

    DialogOpened { id: String, timestamp: i64 },

    DialogClosed { id: String, timestamp: i64 },

    ItemsChanged { count: usize, timestamp: i64 },

    /// An action handed to the external layer
    ActionForwarded {
        kind: String,
        payload: serde_json::Value,
        timestamp: i64,
    },

    /// Selection reported to the host document
    AssetsSelected {
        selection: Vec<AssetSelection>,
        timestamp: i64,
    },

    /// Input line could not be understood
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one JSON line and flush
    pub fn write_to(&self, out: &mut dyn Write) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(out, "{}", json) {
            error!("Failed to write headless event: {}", e);
            return;
        }

        if let Err(e) = out.flush() {
            error!("Failed to flush headless output: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn ready(item_count: usize) -> Self {
        Self::Ready {
            item_count,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}

impl From<EngineEvent> for HeadlessEvent {
    fn from(event: EngineEvent) -> Self {
        let timestamp = Self::now();
        match event {
            EngineEvent::SelectionChanged {
                picked,
                last_picked,
            } => Self::SelectionChanged {
                picked,
                last_picked,
                timestamp,
            },
            EngineEvent::DialogOpened { id } => Self::DialogOpened {
                id: id.to_string(),
                timestamp,
            },
            EngineEvent::DialogClosed { id } => Self::DialogClosed {
                id: id.to_string(),
                timestamp,
            },
            EngineEvent::ItemsChanged { count } => Self::ItemsChanged { count, timestamp },
            EngineEvent::ActionForwarded(action) => Self::ActionForwarded {
                kind: action.kind,
                payload: action.payload,
                timestamp,
            },
            EngineEvent::AssetsSelected(selection) => Self::AssetsSelected {
                selection,
                timestamp,
            },
        }
    }
}
