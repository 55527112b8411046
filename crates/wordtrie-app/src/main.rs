use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::signal;
use wordtrie_config::Config;
use wordtrie_core::Trie;

pub mod controller;
pub mod dictionary;
pub mod events;
pub mod io;
pub mod logging;
pub mod state;


use self::controller::AppController;
use self::dictionary::load_dictionaries;
use self::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "wordtrie")]
#[command(about = "Prefix completion over a dictionary of lowercase English words.", long_about = None)]
struct Cli {
    /// JSON config file. Without it, WORDTRIE_* variables and defaults are used.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Dictionary file to load (.tsv, .txt or .json). Repeatable.
    #[arg(long = "dict")]
    dicts: Vec<PathBuf>,
    /// Emit logs as JSON lines.
    #[arg(long)]
    json_logs: bool,
    #[command(subcommand)]
    cmd: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Print up to 15 completions of a prefix and exit.
    Search {
        /// Prefix to complete; empty lists from the start of the dictionary.
        #[arg(default_value = "")]
        prefix: String,
    },
    /// Print the whole tree as JSON and exit.
    Dump,
    /// Interactive session reading commands from stdin (default).
    Repl,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::new(),
    };
    config
        .dictionary
        .paths
        .extend(cli.dicts.iter().map(|p| p.display().to_string()));
    if cli.json_logs {
        config.log.json = true;
    }

    logging::init_tracing(&config.log);

    let trie = load_dictionaries(&config.dictionary)?;

    match cli.cmd.unwrap_or(CliCommand::Repl) {
        CliCommand::Search { prefix } => {
            for entry in trie.search_prefix(&prefix) {
                println!("{entry}");
            }
        }
        CliCommand::Dump => println!("{}", trie.to_json()?),
        CliCommand::Repl => run_repl(config, trie).await,
    }

    Ok(())
}

async fn run_repl(config: Config, trie: Trie) {
    let state = Arc::new(AppState::new(config, trie));

    let (capacity, prompt) = {
        let config = state.config.read().await;
        (config.channel_capacity, config.prompt.clone())
    };
    let prompt = atty::is(atty::Stream::Stdin).then_some(prompt);

    let controller = AppController::new(state, capacity);
    let mut tasks = controller.spawn_tasks(prompt);

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        _ = controller.cancelled() => {}
        Some(result) = tasks.join_next() => {
            tracing::warn!("task exited before shutdown");
            log_task_result(result);
        }
    }
    controller.shutdown();

    while let Some(result) = tasks.join_next().await {
        log_task_result(result);
    }
}

fn log_task_result(result: Result<anyhow::Result<()>, tokio::task::JoinError>) {
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!("task exited with error: {e}"),
        Err(e) => tracing::error!("task panicked: {e}"),
    }
}
