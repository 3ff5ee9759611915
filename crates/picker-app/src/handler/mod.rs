//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `click`: Interaction binding from row clicks to messages
//! - `items`: Item list and async-result handlers
//! - `dialogs`: Dialog stack and delete-flow handlers

pub(crate) mod click;
pub(crate) mod dialogs;
pub(crate) mod items;
pub(crate) mod update;


use picker_core::AssetSelection;

use crate::message::{ExternalAction, Message};

pub use click::handle_click;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Hand an action to the layer outside the core
    Forward(ExternalAction),

    /// Report a selection to the host document's selection consumer
    NotifySelection(Vec<AssetSelection>),
}

/// Result of processing a message
#[derive(Debug, Default, PartialEq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
