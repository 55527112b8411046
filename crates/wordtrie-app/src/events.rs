use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use wordtrie_types::{AppEvent, Command, Reply};

use crate::state::AppState;

pub mod add_word;
pub mod query;

use add_word::handle_add_word;
use query::{handle_count, handle_dump, handle_find, handle_get};

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    commands_rx: AsyncReceiver<AppEvent>,
    replies_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for commands");
    loop {
        let event = tokio::select! {
            event = commands_rx.recv() => event?,
            _ = cancel.cancelled() => break,
        };

        match event {
            AppEvent::Command(Command::Quit) => {
                tracing::info!("[EVENT_LOOP] Quit requested");
                cancel.cancel();
                break;
            }
            AppEvent::Command(command) => {
                let reply = handle_command(&state, command).await;
                replies_tx.send(AppEvent::Reply(reply)).await?;
            }
            AppEvent::Reply(_) => {
                // Replies only flow towards the output loop
            }
        }
    }

    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}

pub async fn handle_command(state: &AppState, command: Command) -> Reply {
    tracing::debug!("Handling command: {:?}", command);
    match command {
        Command::Add { word, explanation } => handle_add_word(state, word, explanation).await,
        Command::Find(prefix) => handle_find(state, &prefix).await,
        Command::Get(word) => handle_get(state, word).await,
        Command::Count(prefix) => handle_count(state, prefix).await,
        Command::Dump => handle_dump(state).await,
        Command::Help | Command::Quit => Reply::Help,
    }
}
