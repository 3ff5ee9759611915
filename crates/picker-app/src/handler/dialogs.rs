//! Dialog stack handlers

use picker_core::prelude::*;

use crate::dialog::DialogId;
use crate::message::Message;
use crate::state::AppState;

use super::UpdateResult;

/// Confirm a dialog; its follow-up action becomes the next message
pub fn handle_confirm(state: &mut AppState, id: &DialogId) -> UpdateResult {
    let mut dispatched: Vec<Message> = Vec::new();
    state.dialogs.confirm(id, &mut dispatched);

    match dispatched.pop() {
        Some(follow_up) => UpdateResult::message(follow_up),
        None => UpdateResult::none(),
    }
}

/// Open the delete confirmation for every picked item
pub fn handle_delete_picked(state: &mut AppState) -> UpdateResult {
    let picked = state.picked_ids();
    if picked.is_empty() {
        debug!("DeletePicked ignored, nothing picked");
        return UpdateResult::none();
    }

    let dialog = state.delete_confirmation(picked);
    state.dialogs.show(dialog);
    UpdateResult::none()
}
