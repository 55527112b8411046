use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordtrie_types::AppEvent;

use crate::events::event_loop;
use crate::io::{output_loop, spawn_stdin_reader};
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub commands: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub replies: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            commands: kanal::bounded_async(capacity),
            replies: kanal::bounded_async(capacity),
        }
    }
}

/// Task spawning and lifecycle for the REPL
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>, capacity: usize) -> Self {
        Self {
            channels: ChannelSet::new(capacity),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self, prompt: Option<String>) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.commands.1.clone(),
            self.channels.replies.0.clone(),
            self.cancel_token.clone(),
        ));

        tasks.spawn(output_loop(
            self.channels.replies.1.clone(),
            self.cancel_token.child_token(),
            prompt,
            tokio::io::stdout(),
        ));

        // Detached: a thread blocked on stdin must not hold up shutdown
        spawn_stdin_reader(
            self.channels.commands.0.clone(),
            self.cancel_token.child_token(),
        );

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }

    pub async fn cancelled(&self) {
        self.cancel_token.cancelled().await
    }
}
