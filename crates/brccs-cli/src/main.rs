use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use brccs_cli::commands::{parse_chat_line, ChatCommand, HELP};
use brccs_cli::input::load_conversations;
use brccs_core::config::BrccsConfig;
use brccs_core::constants::VERSION;
use brccs_engine::{BrccsEngine, RespondOptions, SnapshotOptions, TracingObserver};

#[derive(Parser)]
#[command(name = "brccs")]
#[command(about = "Bayes-Rehermann conversational response system")]
#[command(version = VERSION)]
struct Cli {
    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database (overrides storage.db_path)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Train a snapshot from a JSON file of conversations
    Train {
        /// Snapshot name
        name: String,
        /// JSON file: an array of conversations, each an array of sentences
        file: PathBuf,
    },
    /// Respond once to a sentence
    Respond {
        snapshot: String,
        sentence: String,
        #[arg(short, long)]
        speaker: Option<String>,
        /// Maximum response words
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Interactive chat against a snapshot
    Chat {
        snapshot: String,
        #[arg(short, long, default_value = "user")]
        speaker: String,
    },
    /// List snapshots and their training status
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => BrccsConfig::load(path)?,
        None => BrccsConfig::default(),
    };
    if let Some(db) = &cli.db {
        config.storage.db_path = Some(db.display().to_string());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(&config.observability.log_level)
            }),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let engine = BrccsEngine::open(config).context("failed to start engine")?;

    match cli.command {
        Command::Train { name, file } => {
            let conversations = load_conversations(&file)?;
            for conversation in conversations {
                engine.add_conversation(conversation)?;
            }
            let report = engine
                .create_snapshot(&name, SnapshotOptions::blocking(), Arc::new(TracingObserver))?
                .wait()?;
            println!(
                "trained '{}': {} examples, {} labels in {:.2?}",
                report.snapshot, report.examples, report.labels, report.elapsed
            );
        }
        Command::Respond {
            snapshot,
            sentence,
            speaker,
            limit,
        } => {
            let mut options = RespondOptions::from_config(&engine.config().generation);
            options.speaker = speaker;
            if let Some(limit) = limit {
                options.limit = limit;
            }
            println!("{}", engine.respond(&snapshot, &sentence, &options)?);
        }
        Command::Chat { snapshot, speaker } => chat(&engine, snapshot, speaker)?,
        Command::List => {
            for name in engine.snapshot_names() {
                let status = engine
                    .training_status(&name)
                    .map(|s| format!("{s:?}"))
                    .unwrap_or_default();
                println!("{name}\t{status}");
            }
        }
    }

    Ok(())
}

fn chat(engine: &BrccsEngine, mut snapshot: String, speaker: String) -> Result<()> {
    let options =
        RespondOptions::from_config(&engine.config().generation).for_speaker(speaker.clone());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("chatting with '{snapshot}' as '{speaker}' (/help for commands)");
    loop {
        print!("> ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        match parse_chat_line(&line) {
            ChatCommand::Quit => break,
            ChatCommand::Empty => {}
            ChatCommand::Help => println!("{HELP}"),
            ChatCommand::History => {
                for entry in engine.history(&speaker)? {
                    println!("  {entry}");
                }
            }
            ChatCommand::Switch(name) => {
                if engine.is_ready(&name) {
                    snapshot = name;
                } else {
                    println!("no trained snapshot '{name}'");
                }
            }
            ChatCommand::Unknown(command) => println!("unknown command {command}"),
            ChatCommand::Say(sentence) => match engine.respond(&snapshot, &sentence, &options) {
                Ok(response) => println!("{response}"),
                Err(e) => println!("error: {e}"),
            },
        }
    }
    Ok(())
}
