use std::io::BufRead;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use wordtrie_types::{AppEvent, Command};

/// Read commands from stdin on a dedicated thread
pub fn spawn_stdin_reader(
    commands_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> std::thread::JoinHandle<()> {
    let handle = Handle::current();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        read_commands(stdin.lock(), &commands_tx, &handle, &cancel);
    })
}

/// Parse lines into commands until EOF, then ask the event loop to quit
pub fn read_commands<R: BufRead>(
    reader: R,
    commands_tx: &AsyncSender<AppEvent>,
    handle: &Handle,
    cancel: &CancellationToken,
) {
    for line in reader.lines() {
        if cancel.is_cancelled() {
            return;
        }

        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        };

        let Some(command) = Command::parse(&line) else {
            continue;
        };
        tracing::debug!("Parsed command: {:?}", command);

        let quit = command == Command::Quit;
        if let Err(e) = handle.block_on(commands_tx.send(AppEvent::Command(command))) {
            tracing::error!("Failed to send command to event loop: {}", e);
            return;
        }
        if quit {
            return;
        }
    }

    tracing::info!("Input closed");
    if !cancel.is_cancelled() {
        if let Err(e) = handle.block_on(commands_tx.send(AppEvent::Command(Command::Quit))) {
            tracing::debug!("Event loop already closed at end of input: {}", e);
        }
    }
}

/// Print replies until cancelled; replies already queued are flushed first
pub async fn output_loop<W: AsyncWrite + Unpin>(
    replies_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
    prompt: Option<String>,
    mut writer: W,
) -> anyhow::Result<()> {
    if let Some(prompt) = &prompt {
        writer.write_all(prompt.as_bytes()).await?;
        writer.flush().await?;
    }

    loop {
        let event = tokio::select! {
            biased;
            event = replies_rx.recv() => event?,
            _ = cancel.cancelled() => break,
        };

        let AppEvent::Reply(reply) = event else {
            tracing::warn!("Output loop ignoring non-reply event");
            continue;
        };

        writer.write_all(format!("{reply}\n").as_bytes()).await?;
        if let Some(prompt) = &prompt {
            writer.write_all(prompt.as_bytes()).await?;
        }
        writer.flush().await?;
    }

    Ok(())
}
