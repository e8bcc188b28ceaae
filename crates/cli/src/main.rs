use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use wanderpeak_assistant::TravelAssistant;
use wanderpeak_core::{ChatInput, KnowledgeBase};
use wanderpeak_observability::{init_tracing, AppMetrics};

#[derive(Debug, Parser)]
#[command(name = "wanderpeak")]
#[command(about = "WanderPeak travel assistant CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive chat session.
    Chat,
    /// One-shot question.
    Ask { message: String },
    /// Dump destination summaries.
    Destinations,
    /// Dump tour packages, optionally filtered by destination key.
    Packages {
        #[arg(long)]
        destination: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing("wanderpeak_cli");
    let cli = Cli::parse();

    let knowledge = Arc::new(KnowledgeBase::builtin());
    let assistant = TravelAssistant::new(knowledge.clone(), AppMetrics::shared());

    match cli.command {
        Command::Chat => run_chat(&assistant)?,
        Command::Ask { message } => {
            let outcome = assistant.handle_chat(&ChatInput {
                message,
                history: Vec::new(),
            });
            println!("{}", outcome.response);
        }
        Command::Destinations => {
            println!("{}", serde_json::to_string_pretty(&knowledge.summaries())?);
        }
        Command::Packages { destination } => {
            let name = match destination.as_deref() {
                Some(key) => Some(
                    knowledge
                        .find(key)
                        .ok_or_else(|| anyhow!("unknown destination key: {key}"))?
                        .name
                        .clone(),
                ),
                None => None,
            };
            let packages = knowledge.packages_for(name.as_deref());
            println!("{}", serde_json::to_string_pretty(&packages)?);
        }
    }

    Ok(())
}

fn run_chat(assistant: &TravelAssistant) -> Result<()> {
    println!("WanderPeak chat mode. type 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        let outcome = assistant.handle_chat(&ChatInput {
            message: message.to_string(),
            history: Vec::new(),
        });

        println!("\n{}\n", outcome.response);
    }

    Ok(())
}
