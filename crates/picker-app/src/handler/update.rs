//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;
use picker_core::prelude::*;

use super::{click::handle_click, dialogs, items, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Item List
        // ─────────────────────────────────────────────────────────
        Message::SetItems(list) => items::handle_set_items(state, list),
        Message::AppendItems(list) => {
            state.store.append_items(list);
            UpdateResult::none()
        }
        Message::RemoveItems(ids) => items::handle_remove_items(state, ids),
        Message::SetUpdating { id, updating } => items::handle_set_updating(state, id, updating),
        Message::SetError { id, error } => items::handle_set_error(state, id, error),

        // ─────────────────────────────────────────────────────────
        // Selection
        // ─────────────────────────────────────────────────────────
        Message::Pick { id, picked } => {
            match state.selection.pick(&mut state.store, &id, picked) {
                Err(e) if e.is_not_found() => debug!("Pick ignored: {}", e),
                Err(e) => warn!("Pick failed: {}", e),
                Ok(()) => {}
            }
            UpdateResult::none()
        }

        Message::PickRange { start, end } => {
            state
                .selection
                .pick_range(&mut state.store, start.as_ref(), &end);
            UpdateResult::none()
        }

        Message::PickAll => {
            state.selection.pick_all(&mut state.store);
            UpdateResult::none()
        }

        Message::PickClear => {
            state.selection.pick_clear(&mut state.store);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Dialogs
        // ─────────────────────────────────────────────────────────
        Message::ShowDialog(descriptor) => {
            state.dialogs.show(*descriptor);
            UpdateResult::none()
        }

        Message::RemoveDialog { id } | Message::CloseDialog { id } => {
            state.dialogs.close(&id);
            UpdateResult::none()
        }

        Message::ConfirmDialog { id } => dialogs::handle_confirm(state, &id),

        Message::ClearDialogs => {
            state.dialogs.clear();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Interaction
        // ─────────────────────────────────────────────────────────
        Message::Click(click) => match handle_click(state, &click) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::SetDocumentContext(document) => {
            match &document {
                Some(doc) => info!("Entering document context {}", doc.document_id),
                None => info!("Leaving document context"),
            }
            state.document = document;
            UpdateResult::none()
        }

        Message::AssetsSelected(selection) => {
            UpdateResult::action(UpdateAction::NotifySelection(selection))
        }

        // ─────────────────────────────────────────────────────────
        // Mutations
        // ─────────────────────────────────────────────────────────
        Message::DeletePicked => dialogs::handle_delete_picked(state),
        Message::DeleteAssets { ids } => items::handle_delete_assets(state, ids),
        Message::External(action) => UpdateResult::action(UpdateAction::Forward(action)),
    }
}
