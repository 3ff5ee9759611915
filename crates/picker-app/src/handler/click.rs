//! Interaction binding: turns row clicks into messages
//!
//! Browse mode:
//! - row, no shift: picked item is unpicked, otherwise the edit dialog opens
//! - row, shift: picked item is unpicked, otherwise range-pick from the anchor
//! - context action: toggles the pick (shift on an unpicked item range-picks)
//!
//! Document mode: a row click reports the asset to the host document, the
//! context action opens the edit dialog. No pick state is touched.

use picker_core::prelude::*;
use picker_core::{AssetItem, AssetSelection};

use crate::input_click::{ClickEvent, ClickTarget};
use crate::message::Message;
use crate::state::AppState;

/// Map a click to the message it should produce, if any
pub fn handle_click(state: &AppState, click: &ClickEvent) -> Option<Message> {
    let item = match state.store.get(&click.asset_id) {
        Ok(item) => item,
        Err(e) => {
            debug!("Click ignored: {}", e);
            return None;
        }
    };

    if !item.is_interactive() {
        trace!("Click on updating item {} ignored", item.id);
        return None;
    }

    if let Some(document) = &state.document {
        return match click.target {
            ClickTarget::Row if document.is_selected(&item.id) => None,
            ClickTarget::Row => Some(Message::AssetsSelected(vec![
                AssetSelection::asset_document_id(item.id.clone()),
            ])),
            ClickTarget::ContextAction => Some(open_edit(state, item)),
        };
    }

    if click.shift_held {
        return Some(if item.picked {
            Message::pick(item.id.clone(), false)
        } else {
            range_from_anchor(state, item)
        });
    }

    Some(match click.target {
        ClickTarget::Row if item.picked => Message::pick(item.id.clone(), false),
        ClickTarget::Row => open_edit(state, item),
        ClickTarget::ContextAction => Message::pick(item.id.clone(), !item.picked),
    })
}

fn open_edit(state: &AppState, item: &AssetItem) -> Message {
    Message::show_dialog(state.edit_dialog(&item.id))
}

/// Range-pick from the current anchor, or from the item itself without one
fn range_from_anchor(state: &AppState, item: &AssetItem) -> Message {
    let start = state
        .last_picked()
        .cloned()
        .unwrap_or_else(|| item.id.clone());
    Message::pick_range(Some(start), item.id.clone())
}
