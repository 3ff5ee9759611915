//! Message types for the application (TEA pattern)

use serde::{Deserialize, Serialize};

use picker_core::{AssetId, AssetItem, AssetSelection, ItemError};

use crate::dialog::{DialogDescriptor, DialogId};
use crate::input_click::ClickEvent;
use crate::state::DocumentContext;

/// An action meant for a layer outside the core (mutation API, router, ...).
///
/// The core hands these off as-is; `kind` and `payload` are never inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalAction {
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl ExternalAction {
    pub fn new(kind: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Request to the mutation layer to delete the given assets
    pub fn delete_assets(ids: &[AssetId]) -> Self {
        Self::new("assets/delete", serde_json::json!({ "ids": ids }))
    }
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Item List (from the data source / mutation layer)
    // ─────────────────────────────────────────────────────────
    /// Replace the whole item list
    SetItems(Vec<AssetItem>),
    /// Append a page of items
    AppendItems(Vec<AssetItem>),
    /// Items left the list (e.g. deleted)
    RemoveItems(Vec<AssetId>),
    /// Async mutation started or finished for an item
    SetUpdating { id: AssetId, updating: bool },
    /// Set or clear the error marker of an item
    SetError {
        id: AssetId,
        error: Option<ItemError>,
    },

    // ─────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────
    /// Pick or unpick a single item
    Pick { id: AssetId, picked: bool },
    /// Pick everything between `start` (or the anchor) and `end`
    PickRange { start: Option<AssetId>, end: AssetId },
    /// Pick every item
    PickAll,
    /// Unpick every item and reset the anchor
    PickClear,

    // ─────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────
    /// Open a dialog or update an open one with the same id
    ShowDialog(Box<DialogDescriptor>),
    /// Remove a dialog (no-op if not open)
    RemoveDialog { id: DialogId },
    /// Cancel a dialog: remove with no cascade
    CloseDialog { id: DialogId },
    /// Confirm a dialog and run its cascade
    ConfirmDialog { id: DialogId },
    /// Close every open dialog
    ClearDialogs,

    // ─────────────────────────────────────────────────────────
    // Interaction
    // ─────────────────────────────────────────────────────────
    /// Pointer click on a row or its context action
    Click(ClickEvent),
    /// Enter or leave single-document mode
    SetDocumentContext(Option<DocumentContext>),
    /// Report a selection to the host document
    AssetsSelected(Vec<AssetSelection>),

    // ─────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────
    /// Ask for confirmation before deleting all picked items
    DeletePicked,
    /// Start deleting assets: mark them updating and forward the request
    DeleteAssets { ids: Vec<AssetId> },
    /// Hand an action to the external layer untouched
    External(ExternalAction),

    /// Stop the engine loop
    Quit,
}

impl Message {
    pub fn pick(id: impl Into<AssetId>, picked: bool) -> Self {
        Self::Pick {
            id: id.into(),
            picked,
        }
    }

    pub fn pick_range(start: Option<AssetId>, end: impl Into<AssetId>) -> Self {
        Self::PickRange {
            start,
            end: end.into(),
        }
    }

    pub fn show_dialog(descriptor: DialogDescriptor) -> Self {
        Self::ShowDialog(Box::new(descriptor))
    }

    pub fn confirm_dialog(id: impl Into<DialogId>) -> Self {
        Self::ConfirmDialog { id: id.into() }
    }

    pub fn close_dialog(id: impl Into<DialogId>) -> Self {
        Self::CloseDialog { id: id.into() }
    }
}
