//! Interactive terminal chat with the debate bot.
//!
//! Run with `cargo run --bin chat`. Set OPENAI_API_KEY (or USE_MOCK_OPENAI)
//! in the environment or a .env file.

use anyhow::Result;
use dotenvy::dotenv;
use log::{info, warn};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use stubborn::core::Config;
use stubborn::features::debate::DebateOrchestrator;
use stubborn::llm::LlmBackend;
use stubborn::storage::{
    ConversationRepository, MemoryConversationRepository, SqliteConversationRepository,
};

const BANNER: &str = "\
=====================================
  Stubborn Debate Bot
=====================================
Say something you have an opinion on and I'll take the other side.
Commands: 'new' restarts the debate, 'help' shows this text,
'quit' exits.
=====================================";

fn print_help() {
    println!("Commands:");
    println!("  new, restart   start a fresh debate");
    println!("  help, h        show this help");
    println!("  quit, exit, q  leave");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    // The openai crate reads the key from env vars, not from our config.
    // Set both OPENAI_API_KEY and OPENAI_KEY for compatibility.
    if let Some(key) = &config.openai_api_key {
        std::env::set_var("OPENAI_API_KEY", key);
        std::env::set_var("OPENAI_KEY", key);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let backend = LlmBackend::from_config(&config);
    info!("Starting debate chat with backend: {backend:?}");

    if let Some(service) = backend.service() {
        if !service.health_check().await {
            warn!("AI service health check failed, replies will use fallbacks");
        }
    }

    let repository: Arc<dyn ConversationRepository> = match &config.database_path {
        Some(path) => {
            info!("Persisting conversations to {path}");
            Arc::new(SqliteConversationRepository::open(path)?)
        }
        None => Arc::new(MemoryConversationRepository::new()),
    };

    let orchestrator = DebateOrchestrator::new(repository, backend);

    println!("{BANNER}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut conversation_id: Option<String> = None;
    let mut turn = 1usize;

    loop {
        stdout.write_all(format!("\n[{turn}] You: ").as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" | "h" => {
                print_help();
                continue;
            }
            "new" | "restart" => {
                conversation_id = None;
                turn = 1;
                println!("Fresh start. What do you want to argue about?");
                continue;
            }
            _ => {}
        }

        let result = match &conversation_id {
            None => orchestrator.start_conversation(input).await,
            Some(id) => orchestrator.continue_conversation(id, input).await,
        };

        match result {
            Ok(conversation) => {
                info!("Turn complete: {}", conversation.summary());
                conversation_id = Some(conversation.id().to_string());
                if let Some(reply) = conversation.last_message() {
                    println!("Bot: {}", reply.content);
                }
                turn += 1;
            }
            Err(e) => {
                println!("Something went wrong: {e}");
            }
        }
    }

    println!("Fine, have it your way. Goodbye!");
    Ok(())
}
