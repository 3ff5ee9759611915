//! NDJSON commands accepted on stdin in headless mode
//!
//! One JSON object per line, tagged by `"command"`:
//!
//! ```json
//! {"command":"click","asset_id":"img-2","target":"row","shift":true}
//! {"command":"show_confirm","id":"confirm","close_dialog_id":"edit","then":{"command":"pick_clear"}}
//! {"command":"confirm_dialog","id":"confirm"}
//! ```

use serde::Deserialize;

use picker_app::{
    ClickEvent, ClickTarget, DialogDescriptor, DocumentContext, ExternalAction, Message, Tone,
};
use picker_core::prelude::*;
use picker_core::{AssetId, AssetItem, ItemError};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Click {
        asset_id: AssetId,
        #[serde(default)]
        target: ClickTarget,
        #[serde(default)]
        shift: bool,
    },
    Pick {
        asset_id: AssetId,
        #[serde(default = "default_true")]
        picked: bool,
    },
    PickRange {
        #[serde(default)]
        start: Option<AssetId>,
        end: AssetId,
    },
    PickAll,
    PickClear,
    SetItems {
        items: Vec<AssetItem>,
    },
    AppendItems {
        items: Vec<AssetItem>,
    },
    RemoveItems {
        ids: Vec<AssetId>,
    },
    SetUpdating {
        asset_id: AssetId,
        updating: bool,
    },
    SetError {
        asset_id: AssetId,
        #[serde(default)]
        error: Option<ItemError>,
    },
    ShowConfirm {
        id: String,
        #[serde(default)]
        close_dialog_id: Option<String>,
        #[serde(default)]
        header_title: Option<String>,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        confirm_text: Option<String>,
        #[serde(default)]
        tone: Tone,
        /// Command to run when the dialog is confirmed
        #[serde(default)]
        then: Option<Box<Command>>,
    },
    ShowEdit {
        #[serde(default)]
        id: Option<String>,
        asset_id: AssetId,
    },
    RemoveDialog {
        id: String,
    },
    CloseDialog {
        id: String,
    },
    ConfirmDialog {
        id: String,
    },
    ClearDialogs,
    DeletePicked,
    SetDocument {
        #[serde(default)]
        document_id: Option<String>,
        #[serde(default)]
        selected: Vec<AssetId>,
    },
    Forward {
        kind: String,
        #[serde(default)]
        payload: serde_json::Value,
    },
    Quit,
}

fn default_true() -> bool {
    true
}

impl Command {
    /// Parse one input line
    pub fn parse(line: &str) -> Result<Self> {
        serde_json::from_str(line).map_err(|e| Error::command(format!("{e}: {line}")))
    }

    /// Translate into the engine message.
    ///
    /// `edit_dialog_id` is used for `show_edit` commands without an explicit id.
    pub fn into_message(self, edit_dialog_id: &str) -> Message {
        match self {
            Command::Click {
                asset_id,
                target,
                shift,
            } => Message::Click(ClickEvent {
                asset_id,
                target,
                shift_held: shift,
            }),
            Command::Pick { asset_id, picked } => Message::pick(asset_id, picked),
            Command::PickRange { start, end } => Message::pick_range(start, end),
            Command::PickAll => Message::PickAll,
            Command::PickClear => Message::PickClear,
            Command::SetItems { items } => Message::SetItems(items),
            Command::AppendItems { items } => Message::AppendItems(items),
            Command::RemoveItems { ids } => Message::RemoveItems(ids),
            Command::SetUpdating { asset_id, updating } => Message::SetUpdating {
                id: asset_id,
                updating,
            },
            Command::SetError { asset_id, error } => Message::SetError {
                id: asset_id,
                error,
            },
            Command::ShowConfirm {
                id,
                close_dialog_id,
                header_title,
                title,
                description,
                confirm_text,
                tone,
                then,
            } => {
                let mut dialog = DialogDescriptor::confirm(id).tone(tone);
                dialog.close_dialog_id = close_dialog_id.map(Into::into);
                dialog.header_title = header_title;
                dialog.title = title;
                dialog.description = description;
                dialog.confirm_text = confirm_text;
                if let Some(then) = then {
                    dialog = dialog.on_confirm(then.into_message(edit_dialog_id));
                }
                Message::show_dialog(dialog)
            }
            Command::ShowEdit { id, asset_id } => {
                let id = id.unwrap_or_else(|| edit_dialog_id.to_string());
                Message::show_dialog(DialogDescriptor::edit(id, asset_id))
            }
            Command::RemoveDialog { id } => Message::RemoveDialog { id: id.into() },
            Command::CloseDialog { id } => Message::close_dialog(id),
            Command::ConfirmDialog { id } => Message::confirm_dialog(id),
            Command::ClearDialogs => Message::ClearDialogs,
            Command::DeletePicked => Message::DeletePicked,
            Command::SetDocument {
                document_id,
                selected,
            } => Message::SetDocumentContext(
                document_id.map(|doc| DocumentContext::new(doc).with_selected(selected)),
            ),
            Command::Forward { kind, payload } => {
                Message::External(ExternalAction::new(kind, payload))
            }
            Command::Quit => Message::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use picker_app::DialogId;

    #[test]
    fn test_parse_click_with_defaults() {
        let cmd = Command::parse(r#"{"command":"click","asset_id":"a"}"#).unwrap();
        assert_eq!(
            cmd.into_message("edit"),
            Message::Click(ClickEvent::row("a"))
        );
    }

    #[test]
    fn test_parse_shift_context_click() {
        let cmd = Command::parse(
            r#"{"command":"click","asset_id":"a","target":"context_action","shift":true}"#,
        )
        .unwrap();
        assert_eq!(
            cmd.into_message("edit"),
            Message::Click(ClickEvent::context_action("a").with_shift())
        );
    }

    #[test]
    fn test_show_confirm_with_nested_follow_up() {
        let cmd = Command::parse(
            r#"{"command":"show_confirm","id":"confirm","close_dialog_id":"edit","tone":"critical","then":{"command":"pick_clear"}}"#,
        )
        .unwrap();

        let Message::ShowDialog(dialog) = cmd.into_message("edit") else {
            panic!("expected ShowDialog");
        };
        assert_eq!(dialog.id, DialogId::from("confirm"));
        assert_eq!(dialog.close_dialog_id, Some(DialogId::from("edit")));
        assert_eq!(dialog.tone, Tone::Critical);
        assert_eq!(
            dialog.confirm_callback_action.as_deref(),
            Some(&Message::PickClear)
        );
    }

    #[test]
    fn test_show_edit_uses_configured_id() {
        let cmd = Command::parse(r#"{"command":"show_edit","asset_id":"a"}"#).unwrap();
        let Message::ShowDialog(dialog) = cmd.into_message("asset-edit") else {
            panic!("expected ShowDialog");
        };
        assert_eq!(dialog.id, DialogId::from("asset-edit"));
    }

    #[test]
    fn test_set_document_without_id_leaves_document() {
        let cmd = Command::parse(r#"{"command":"set_document"}"#).unwrap();
        assert_eq!(cmd.into_message("edit"), Message::SetDocumentContext(None));
    }

    #[test]
    fn test_set_error_marker() {
        let cmd = Command::parse(
            r#"{"command":"set_error","asset_id":"a","error":{"kind":"has_references"}}"#,
        )
        .unwrap();
        assert_eq!(
            cmd.into_message("edit"),
            Message::SetError {
                id: AssetId::from("a"),
                error: Some(ItemError::HasReferences),
            }
        );
    }

    #[test]
    fn test_unknown_command_is_error() {
        let err = Command::parse(r#"{"command":"teleport"}"#).unwrap_err();
        assert!(matches!(err, Error::Command { .. }));
    }
}
