//! Engine - owns the state container and serializes every mutation
//!
//! All producers (click sources, the mutation layer, the headless stdin
//! reader) send `Message`s through one channel. The engine applies each
//! message and its follow-ups to completion before taking the next, so no
//! observer ever sees a half-applied transition.

use std::collections::VecDeque;
use std::path::Path;

use tokio::sync::{broadcast, mpsc};

use picker_core::prelude::*;
use picker_core::{AssetId, AssetItem, ItemError};

use crate::config::{self, Settings};
use crate::dialog::DialogId;
use crate::engine_event::EngineEvent;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Capacity of the inbound message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Capacity of the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    picked: Vec<AssetId>,
    last_picked: Option<AssetId>,
    dialogs: Vec<DialogId>,
    items: Vec<(AssetId, bool, Option<ItemError>)>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            picked: state.picked_ids(),
            last_picked: state.last_picked().cloned(),
            dialogs: state.dialogs.ids(),
            items: state
                .store
                .items()
                .map(|item| (item.id.clone(), item.updating, item.error.clone()))
                .collect(),
        }
    }
}

/// Orchestration engine for the asset picker.
///
/// Encapsulates:
/// - TEA state management
/// - Message channel
/// - Event broadcasting for external consumers
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    msg_tx: mpsc::Sender<Message>,
    msg_rx: mpsc::Receiver<Message>,

    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    pub fn new(settings: Settings, items: Vec<AssetItem>) -> Self {
        let state = AppState::with_settings(settings).with_items(items);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        info!(
            "Engine ready: {} items, range mode {:?}",
            state.store.len(),
            state.selection.range_mode()
        );

        Self {
            state,
            msg_tx,
            msg_rx,
            event_tx,
        }
    }

    /// Create an engine with settings loaded from `<workdir>/.picker/config.toml`
    pub fn from_workdir(workdir: &Path, items: Vec<AssetItem>) -> Self {
        Self::new(config::load_settings(workdir), items)
    }

    /// Sender for input sources living on other tasks or threads
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Subscribe to engine events
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Apply a message and all follow-ups it produces, then emit change events
    pub fn process_message(&mut self, message: Message) {
        let before = StateSnapshot::capture(&self.state);

        // Chains terminate: each confirm callback consumes an open dialog
        let mut queue = VecDeque::from([message]);
        while let Some(msg) = queue.pop_front() {
            let result = handler::update(&mut self.state, msg);
            if let Some(action) = result.action {
                self.handle_action(action);
            }
            if let Some(next) = result.message {
                queue.push_back(next);
            }
        }

        let after = StateSnapshot::capture(&self.state);
        self.emit_changes(&before, &after);
    }

    /// Receive and process messages until quit or all senders are gone.
    ///
    /// The engine keeps its own sender, so in practice this runs until a
    /// `Message::Quit` arrives.
    pub async fn run(&mut self) -> Result<()> {
        while !self.should_quit() {
            match self.msg_rx.recv().await {
                Some(msg) => self.process_message(msg),
                None => return Err(Error::ChannelClosed),
            }
        }
        info!("Engine loop finished");
        Ok(())
    }

    /// Wait for the next inbound message
    pub async fn next_message(&mut self) -> Option<Message> {
        self.msg_rx.recv().await
    }

    fn handle_action(&self, action: UpdateAction) {
        match action {
            UpdateAction::Forward(external) => {
                debug!("Forwarding external action {}", external.kind);
                self.emit(EngineEvent::ActionForwarded(external));
            }
            UpdateAction::NotifySelection(selection) => {
                self.emit(EngineEvent::AssetsSelected(selection));
            }
        }
    }

    fn emit_changes(&self, before: &StateSnapshot, after: &StateSnapshot) {
        if before == after {
            return;
        }

        for id in before.dialogs.iter().filter(|id| !after.dialogs.contains(id)) {
            self.emit(EngineEvent::DialogClosed { id: id.clone() });
        }
        for id in after.dialogs.iter().filter(|id| !before.dialogs.contains(id)) {
            self.emit(EngineEvent::DialogOpened { id: id.clone() });
        }

        if before.items != after.items {
            self.emit(EngineEvent::ItemsChanged {
                count: after.items.len(),
            });
        }

        if before.picked != after.picked || before.last_picked != after.last_picked {
            self.emit(EngineEvent::SelectionChanged {
                picked: after.picked.clone(),
                last_picked: after.last_picked.clone(),
            });
        }
    }

    fn emit(&self, event: EngineEvent) {
        trace!("Engine event: {}", event.name());
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::DialogDescriptor;
    use crate::input_click::ClickEvent;
    use crate::message::ExternalAction;

    fn engine(ids: &[&str]) -> Engine {
        Engine::new(
            Settings::default(),
            ids.iter().map(|id| AssetItem::new(*id)).collect(),
        )
    }

    fn drain(rx: &mut broadcast::Receiver<EngineEvent>) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[test]
    fn test_pick_emits_selection_changed() {
        let mut engine = engine(&["a", "b"]);
        let mut rx = engine.subscribe();

        engine.process_message(Message::pick("b", true));

        assert_eq!(
            drain(&mut rx),
            vec![EngineEvent::SelectionChanged {
                picked: vec![AssetId::from("b")],
                last_picked: Some(AssetId::from("b")),
            }]
        );
    }

    #[test]
    fn test_noop_message_emits_nothing() {
        let mut engine = engine(&["a"]);
        let mut rx = engine.subscribe();

        engine.process_message(Message::pick("ghost", true));
        engine.process_message(Message::close_dialog("none"));

        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn test_confirm_cascade_runs_to_completion() {
        let mut engine = engine(&["a"]);
        let action = ExternalAction::new("x", serde_json::json!({ "id": "a" }));
        engine.process_message(Message::show_dialog(
            DialogDescriptor::confirm("confirm")
                .closing("edit")
                .on_confirm(Message::External(action.clone())),
        ));
        engine.process_message(Message::show_dialog(DialogDescriptor::edit("edit", "a")));
        let mut rx = engine.subscribe();

        engine.process_message(Message::confirm_dialog("confirm"));
        engine.process_message(Message::confirm_dialog("confirm"));

        let events = drain(&mut rx);
        assert_eq!(
            events,
            vec![
                EngineEvent::ActionForwarded(action),
                EngineEvent::DialogClosed {
                    id: DialogId::from("confirm")
                },
                EngineEvent::DialogClosed {
                    id: DialogId::from("edit")
                },
            ]
        );
        assert!(engine.state.dialogs.is_empty());
    }

    #[test]
    fn test_deep_confirm_chain_runs_to_completion() {
        // each dialog confirms the one opened before it; the first forwards
        let mut engine = engine(&["a"]);
        let action = ExternalAction::new("x", serde_json::Value::Null);
        let mut chain = Message::External(action.clone());
        for i in 0..100 {
            let id = format!("c{i}");
            engine
                .state
                .dialogs
                .show(DialogDescriptor::confirm(id.as_str()).on_confirm(chain));
            chain = Message::confirm_dialog(id);
        }
        let mut rx = engine.subscribe();

        engine.process_message(chain);

        let events = drain(&mut rx);
        let forwarded: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, EngineEvent::ActionForwarded(_)))
            .collect();
        assert_eq!(forwarded, vec![&EngineEvent::ActionForwarded(action)]);
        assert!(engine.state.dialogs.is_empty());
        let closed = events
            .iter()
            .filter(|e| matches!(e, EngineEvent::DialogClosed { .. }))
            .count();
        assert_eq!(closed, 100);
    }

    #[tokio::test]
    async fn test_run_processes_channel_until_quit() {
        let mut engine = engine(&["a", "b", "c"]);
        let tx = engine.msg_sender();
        let mut rx = engine.subscribe();

        tx.send(Message::pick("a", true)).await.unwrap();
        tx.send(Message::Click(ClickEvent::row("c").with_shift()))
            .await
            .unwrap();
        tx.send(Message::Quit).await.unwrap();

        engine.run().await.unwrap();

        assert_eq!(
            engine.state.picked_ids(),
            vec![AssetId::from("a"), AssetId::from("b"), AssetId::from("c")]
        );
        let events = drain(&mut rx);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_items_changed_on_updating_flag() {
        let mut engine = engine(&["a"]);
        let mut rx = engine.subscribe();

        engine.process_message(Message::SetUpdating {
            id: AssetId::from("a"),
            updating: true,
        });

        assert_eq!(
            drain(&mut rx),
            vec![EngineEvent::ItemsChanged { count: 1 }]
        );
    }
}
