//! Pointer click events on asset rows
//!
//! Framework-neutral description of a click: which item, which part of the
//! row, and whether shift was held.

use serde::{Deserialize, Serialize};

use picker_core::AssetId;

/// Part of a row that received the click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    /// The row body
    #[default]
    Row,
    /// The dedicated checkbox / edit affordance at the start of the row
    ContextAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub asset_id: AssetId,
    pub target: ClickTarget,
    pub shift_held: bool,
}

impl ClickEvent {
    pub fn row(asset_id: impl Into<AssetId>) -> Self {
        Self {
            asset_id: asset_id.into(),
            target: ClickTarget::Row,
            shift_held: false,
        }
    }

    pub fn context_action(asset_id: impl Into<AssetId>) -> Self {
        Self {
            asset_id: asset_id.into(),
            target: ClickTarget::ContextAction,
            shift_held: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift_held = true;
        self
    }
}
