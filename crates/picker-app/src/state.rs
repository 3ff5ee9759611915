//! Application state (Model in TEA pattern)

use std::collections::HashSet;

use picker_core::{AssetId, AssetItem};

use crate::config::Settings;
use crate::dialog::{DialogDescriptor, DialogId, DialogStack, Tone};
use crate::selection::Selection;
use crate::store::AssetStore;

/// Single-document embedding: the picker was opened from a document field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentContext {
    pub document_id: String,
    /// Assets the document already references; their rows ignore clicks
    pub selected_asset_ids: HashSet<AssetId>,
}

impl DocumentContext {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            selected_asset_ids: HashSet::new(),
        }
    }

    pub fn with_selected(mut self, ids: impl IntoIterator<Item = AssetId>) -> Self {
        self.selected_asset_ids.extend(ids);
        self
    }

    pub fn is_selected(&self, id: &AssetId) -> bool {
        self.selected_asset_ids.contains(id)
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: AssetStore,
    pub selection: Selection,
    pub dialogs: DialogStack,
    /// `Some` while embedded in a document
    pub document: Option<DocumentContext>,
    pub settings: Settings,
    quitting: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create state honoring the range mode and startup document from settings
    pub fn with_settings(settings: Settings) -> Self {
        let selection = Selection::with_range_mode(settings.selection.range_mode);
        let document = settings
            .behavior
            .document_id
            .as_ref()
            .map(DocumentContext::new);

        Self {
            store: AssetStore::new(),
            selection,
            dialogs: DialogStack::new(),
            document,
            settings,
            quitting: false,
        }
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = AssetItem>) -> Self {
        self.replace_items(items);
        self
    }

    /// Replace the list and drop selection state for ids that disappeared
    pub fn replace_items(&mut self, items: impl IntoIterator<Item = AssetItem>) -> Vec<AssetId> {
        let gone = self.store.replace_items(items);
        self.selection.retain(&self.store);
        gone
    }

    pub fn remove_items(&mut self, ids: &[AssetId]) -> Vec<AssetId> {
        let removed = self.store.remove_items(ids);
        self.selection.retain(&self.store);
        removed
    }

    pub fn is_document_context(&self) -> bool {
        self.document.is_some()
    }

    pub fn picked_ids(&self) -> Vec<AssetId> {
        self.store.picked_ids()
    }

    pub fn last_picked(&self) -> Option<&AssetId> {
        self.selection.last_picked()
    }

    pub fn edit_dialog_id(&self) -> DialogId {
        DialogId::from(self.settings.dialogs.edit_dialog_id.as_str())
    }

    pub fn confirm_dialog_id(&self) -> DialogId {
        DialogId::from(self.settings.dialogs.confirm_dialog_id.as_str())
    }

    /// Descriptor for the asset edit dialog
    pub fn edit_dialog(&self, asset_id: &AssetId) -> DialogDescriptor {
        DialogDescriptor::edit(self.edit_dialog_id(), asset_id.clone()).header_title("Asset details")
    }

    /// Descriptor asking to delete `ids`; confirming closes the edit dialog
    pub fn delete_confirmation(&self, ids: Vec<AssetId>) -> DialogDescriptor {
        let title = if ids.len() == 1 {
            "Permanently delete 1 asset?".to_string()
        } else {
            format!("Permanently delete {} assets?", ids.len())
        };

        DialogDescriptor::confirm(self.confirm_dialog_id())
            .closing(self.edit_dialog_id())
            .on_confirm(crate::message::Message::DeleteAssets { ids })
            .header_title("Confirm deletion")
            .title(title)
            .description("This operation cannot be reversed. Are you sure you want to continue?")
            .confirm_text("Yes, delete")
            .tone(Tone::Critical)
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }
}
