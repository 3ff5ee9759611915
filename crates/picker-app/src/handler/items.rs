//! Item list and async-result handlers
//!
//! Completion callbacks may arrive after their item left the list; those are
//! dropped with a debug log.

use picker_core::prelude::*;
use picker_core::{AssetId, AssetItem, ItemError};

use crate::message::ExternalAction;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_set_items(state: &mut AppState, items: Vec<AssetItem>) -> UpdateResult {
    let gone = state.replace_items(items);
    debug!(
        "Item list replaced: {} items, {} removed",
        state.store.len(),
        gone.len()
    );
    UpdateResult::none()
}

pub fn handle_remove_items(state: &mut AppState, ids: Vec<AssetId>) -> UpdateResult {
    let removed = state.remove_items(&ids);
    debug!("Removed {} of {} requested items", removed.len(), ids.len());
    UpdateResult::none()
}

pub fn handle_set_updating(state: &mut AppState, id: AssetId, updating: bool) -> UpdateResult {
    if let Err(e) = state.store.set_updating(&id, updating) {
        debug!("Late updating={} callback dropped: {}", updating, e);
    }
    UpdateResult::none()
}

pub fn handle_set_error(
    state: &mut AppState,
    id: AssetId,
    error: Option<ItemError>,
) -> UpdateResult {
    if let Err(e) = state.store.set_error(&id, error) {
        debug!("Late error callback dropped: {}", e);
    }
    UpdateResult::none()
}

/// Mark the items as updating and forward the delete request.
///
/// Items already updating or no longer in the list are skipped.
pub fn handle_delete_assets(state: &mut AppState, ids: Vec<AssetId>) -> UpdateResult {
    let mut pending = Vec::with_capacity(ids.len());

    for id in ids {
        match state.store.get(&id) {
            Ok(item) if item.updating => {
                debug!("Delete of {} skipped, already updating", id);
            }
            Ok(_) => {
                match state
                    .store
                    .set_updating(&id, true)
                    .and_then(|()| state.store.set_error(&id, None))
                {
                    Ok(()) => pending.push(id),
                    Err(e) => debug!("Delete skipped: {}", e),
                }
            }
            Err(e) => debug!("Delete skipped: {}", e),
        }
    }

    if pending.is_empty() {
        return UpdateResult::none();
    }

    info!("Deleting {} assets", pending.len());
    UpdateResult::action(UpdateAction::Forward(ExternalAction::delete_assets(&pending)))
}
