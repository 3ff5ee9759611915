//! Headless mode runner - main event loop without a rendering layer

use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{broadcast, mpsc};

use picker_app::{config, Engine, EngineEvent, Message};
use picker_core::prelude::*;
use picker_core::AssetItem;

use super::{Command, HeadlessEvent};

/// Shared NDJSON sink written by the event loop and the input reader
pub type EventOutput = Arc<Mutex<dyn Write + Send>>;

/// Read the initial item list from a JSON array file
pub fn load_items(path: &Path) -> Result<Vec<AssetItem>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read items file {}", path.display()))?;
    let items: Vec<AssetItem> = serde_json::from_str(&content)
        .with_context(|| format!("Items file {} is not a JSON item array", path.display()))?;
    Ok(items)
}

/// Run in headless mode - commands on stdin, JSON events on stdout
pub async fn run_headless(workdir: &Path, items: Vec<AssetItem>) -> Result<()> {
    let output: EventOutput = Arc::new(Mutex::new(io::stdout()));
    run_headless_with(workdir, items, BufReader::new(io::stdin()), output).await
}

/// Run the headless loop over arbitrary input and output streams
pub async fn run_headless_with<R>(
    workdir: &Path,
    items: Vec<AssetItem>,
    input: R,
    output: EventOutput,
) -> Result<()>
where
    R: BufRead + Send + 'static,
{
    info!("Asset picker starting in HEADLESS mode");
    info!("Working directory: {}", workdir.display());

    let settings = config::load_settings(workdir);
    let mut engine = Engine::new(settings, items);
    let mut events = engine.subscribe();

    // ready goes out before any input can produce an error event
    write_event(&output, &HeadlessEvent::ready(engine.state.store.len()));

    let input_tx = engine.msg_sender();
    let edit_dialog_id = engine.state.settings.dialogs.edit_dialog_id.clone();
    let reader_output = Arc::clone(&output);
    std::thread::spawn(move || {
        spawn_input_reader_blocking(input, input_tx, edit_dialog_id, reader_output);
    });

    let result = headless_event_loop(&mut engine, &mut events, &output).await;

    info!("Asset picker headless mode exiting");
    result
}

/// Main headless event loop
async fn headless_event_loop(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
    output: &EventOutput,
) -> Result<()> {
    while !engine.should_quit() {
        match engine.next_message().await {
            Some(msg) => {
                engine.process_message(msg);
                flush_events(events, output);
            }
            None => {
                let err = Error::ChannelClosed;
                error!("{}", err);
                write_event(output, &HeadlessEvent::error(err.to_string(), err.is_fatal()));
                return Err(err);
            }
        }
    }
    Ok(())
}

fn flush_events(events: &mut broadcast::Receiver<EngineEvent>, output: &EventOutput) {
    loop {
        match events.try_recv() {
            Ok(event) => write_event(output, &HeadlessEvent::from(event)),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output lagged, {} events dropped", skipped);
                write_event(
                    output,
                    &HeadlessEvent::error(format!("{skipped} events dropped"), false),
                );
            }
            Err(_) => break,
        }
    }
}

fn write_event(output: &EventOutput, event: &HeadlessEvent) {
    let mut out = output.lock().unwrap_or_else(PoisonError::into_inner);
    event.write_to(&mut *out);
}

/// Read NDJSON commands until EOF, then request quit
fn spawn_input_reader_blocking<R: BufRead>(
    input: R,
    tx: mpsc::Sender<Message>,
    edit_dialog_id: String,
    output: EventOutput,
) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Failed to read input: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line) {
            Ok(command) => {
                if tx
                    .blocking_send(command.into_message(&edit_dialog_id))
                    .is_err()
                {
                    warn!("{}", Error::channel_send("engine stopped, input reader exiting"));
                    return;
                }
            }
            Err(e) => {
                warn!("{}", e);
                write_event(&output, &HeadlessEvent::error(e.to_string(), !e.is_recoverable()));
            }
        }
    }

    // input closed: stop the engine
    let _ = tx.blocking_send(Message::Quit);
}
