//! Domain events emitted by the Engine for external consumers
//!
//! Rendering layers, the headless runner and the mutation layer subscribe via
//! `Engine::subscribe()`. Change events are broadcast after each message has
//! been processed to completion, so subscribers see a consistent view.

use picker_core::{AssetId, AssetSelection};

use crate::dialog::DialogId;
use crate::message::ExternalAction;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The set of picked items or the anchor changed
    SelectionChanged {
        picked: Vec<AssetId>,
        last_picked: Option<AssetId>,
    },

    /// A dialog was opened
    DialogOpened { id: DialogId },

    /// A dialog was closed (cancel, confirm or cascade)
    DialogClosed { id: DialogId },

    /// Items were added/removed or their updating/error flags changed
    ItemsChanged { count: usize },

    /// An action for the external layer was handed off
    ActionForwarded(ExternalAction),

    /// A selection was reported for the host document
    AssetsSelected(Vec<AssetSelection>),
}

impl EngineEvent {
    /// Short event name used in log lines and headless output
    pub fn name(&self) -> &'static str {
        match self {
            EngineEvent::SelectionChanged { .. } => "selection_changed",
            EngineEvent::DialogOpened { .. } => "dialog_opened",
            EngineEvent::DialogClosed { .. } => "dialog_closed",
            EngineEvent::ItemsChanged { .. } => "items_changed",
            EngineEvent::ActionForwarded(_) => "action_forwarded",
            EngineEvent::AssetsSelected(_) => "assets_selected",
        }
    }
}
