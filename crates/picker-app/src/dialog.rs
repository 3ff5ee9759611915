//! Dialog stack: open dialog descriptors and the confirm cascade
//!
//! Dialogs are kept in the order they were opened; the last one is on top.
//! Every operation is safe to repeat: removing a missing id is a no-op, and
//! confirming a dialog that is already gone does nothing.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use picker_core::prelude::*;
use picker_core::AssetId;

use crate::message::Message;

/// Identifier of an open dialog instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DialogId(String);

impl DialogId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DialogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DialogId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DialogId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Visual emphasis of the confirm button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Default,
    Primary,
    Positive,
    Caution,
    Critical,
}

/// What a dialog is for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogKind {
    /// Yes/no confirmation with an optional cascade on confirm
    Confirm,
    /// Asset details editor
    Edit { asset_id: AssetId },
}

/// An open dialog.
///
/// Presentation fields are carried for the rendering layer and never read by
/// the stack itself.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogDescriptor {
    pub id: DialogId,
    pub kind: DialogKind,
    /// Another dialog to close when this one is confirmed
    pub close_dialog_id: Option<DialogId>,
    /// Follow-up handed to the action sink on confirm, uninterpreted
    pub confirm_callback_action: Option<Box<Message>>,
    pub header_title: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub confirm_text: Option<String>,
    pub tone: Tone,
}

impl DialogDescriptor {
    fn with_kind(id: impl Into<DialogId>, kind: DialogKind) -> Self {
        Self {
            id: id.into(),
            kind,
            close_dialog_id: None,
            confirm_callback_action: None,
            header_title: None,
            title: None,
            description: None,
            confirm_text: None,
            tone: Tone::Default,
        }
    }

    pub fn confirm(id: impl Into<DialogId>) -> Self {
        Self::with_kind(id, DialogKind::Confirm)
    }

    pub fn edit(id: impl Into<DialogId>, asset_id: impl Into<AssetId>) -> Self {
        Self::with_kind(
            id,
            DialogKind::Edit {
                asset_id: asset_id.into(),
            },
        )
    }

    pub fn closing(mut self, dialog_id: impl Into<DialogId>) -> Self {
        self.close_dialog_id = Some(dialog_id.into());
        self
    }

    pub fn on_confirm(mut self, action: Message) -> Self {
        self.confirm_callback_action = Some(Box::new(action));
        self
    }

    pub fn header_title(mut self, text: impl Into<String>) -> Self {
        self.header_title = Some(text.into());
        self
    }

    pub fn title(mut self, text: impl Into<String>) -> Self {
        self.title = Some(text.into());
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = Some(text.into());
        self
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

/// Receives follow-up actions handed off by a confirmed dialog
#[cfg_attr(test, mockall::automock)]
pub trait ActionSink {
    fn dispatch(&mut self, action: Message);
}

impl ActionSink for Vec<Message> {
    fn dispatch(&mut self, action: Message) {
        self.push(action);
    }
}

impl ActionSink for VecDeque<Message> {
    fn dispatch(&mut self, action: Message) {
        self.push_back(action);
    }
}

/// Open dialogs, most recent last
#[derive(Debug, Clone, Default)]
pub struct DialogStack {
    dialogs: Vec<DialogDescriptor>,
}

impl DialogStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a dialog, or update it in place if one with the same id is open.
    ///
    /// Returns `true` when the dialog was newly opened.
    pub fn show(&mut self, descriptor: DialogDescriptor) -> bool {
        match self.dialogs.iter_mut().find(|d| d.id == descriptor.id) {
            Some(existing) => {
                debug!("Dialog {} re-shown, updating content", descriptor.id);
                *existing = descriptor;
                false
            }
            None => {
                debug!("Dialog {} opened", descriptor.id);
                self.dialogs.push(descriptor);
                true
            }
        }
    }

    /// Remove a dialog by id; returns whether it was open
    pub fn remove(&mut self, id: &DialogId) -> bool {
        let before = self.dialogs.len();
        self.dialogs.retain(|d| &d.id != id);
        let removed = self.dialogs.len() != before;
        if !removed {
            trace!("remove({}) ignored, dialog not open", id);
        }
        removed
    }

    /// Cancel path: close without cascade or dispatch
    pub fn close(&mut self, id: &DialogId) -> bool {
        self.remove(id)
    }

    /// Confirm a dialog.
    ///
    /// In order: close `close_dialog_id`, hand `confirm_callback_action` to
    /// `sink`, then close the dialog itself. Returns `false` and does nothing
    /// when `id` is not open. Dialogs other than [`DialogKind::Confirm`] are
    /// only closed.
    pub fn confirm<S>(&mut self, id: &DialogId, sink: &mut S) -> bool
    where
        S: ActionSink + ?Sized,
    {
        let Some(descriptor) = self.get(id) else {
            debug!("confirm({}) ignored, dialog not open", id);
            return false;
        };
        if descriptor.kind != DialogKind::Confirm {
            debug!("confirm({}) on a non-confirm dialog, closing", id);
            return self.close(id);
        }
        let close_target = descriptor.close_dialog_id.clone();
        let follow_up = descriptor.confirm_callback_action.clone();

        if let Some(target) = close_target {
            self.remove(&target);
        }
        if let Some(action) = follow_up {
            sink.dispatch(*action);
        }
        self.remove(id);
        true
    }

    pub fn get(&self, id: &DialogId) -> Option<&DialogDescriptor> {
        self.dialogs.iter().find(|d| &d.id == id)
    }

    pub fn contains(&self, id: &DialogId) -> bool {
        self.get(id).is_some()
    }

    /// The dialog currently on top, if any
    pub fn top(&self) -> Option<&DialogDescriptor> {
        self.dialogs.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DialogDescriptor> {
        self.dialogs.iter()
    }

    pub fn ids(&self) -> Vec<DialogId> {
        self.dialogs.iter().map(|d| d.id.clone()).collect()
    }

    /// Close everything, returning the ids that were open
    pub fn clear(&mut self) -> Vec<DialogId> {
        self.dialogs.drain(..).map(|d| d.id).collect()
    }

    pub fn len(&self) -> usize {
        self.dialogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }
}
