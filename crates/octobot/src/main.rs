//! Octogram - Telegram inline bot that summarizes GitHub repositories
//!
//! Mention the bot with a repository URL in any chat and it answers with
//! the repository's description, stars, language, file tree and README.

mod cli;
mod telegram;

use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;
use teloxide::update_listeners::Polling;

use cli::{Cli, Commands};
use octocore::config::limits;
use octocore::{config, logging, parse_repo_url, render, summarize, GithubClient};
use telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Load environment variables from .env if present, before any Lazy
    // config static is read
    let _ = dotenv();

    // Initialize logger (console + file)
    logging::init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::Info { url, json }) => run_cli_info(url, json).await,
        Some(Commands::Run) | None => run_bot().await,
    }
}

/// Run the Telegram bot in long polling mode
async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");

    let bot = create_bot()?;

    // Get bot information for logging and /start usage text
    let me = bot.get_me().await?;
    log::info!("Bot username: @{}, Bot ID: {}", me.username(), me.id);

    // Set up bot commands in the Telegram UI
    setup_bot_commands(&bot).await?;

    // GitHub API client, shared by all handlers
    logging::log_github_configuration();
    let github = Arc::new(GithubClient::from_env()?);

    // Create the dispatcher handler tree
    let deps = HandlerDeps::new(github, Some(me.username().to_string()));
    let handler = schema(deps);

    log::info!("Starting bot in long polling mode");
    log::info!("Ready to receive inline queries");

    // Create polling listener that drops pending updates on start
    let listener = Polling::builder(bot.clone()).drop_pending_updates().build();

    Dispatcher::builder(bot, handler)
        .dependencies(DependencyMap::new())
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}

/// Run CLI info command: summarize a repository to stdout
async fn run_cli_info(url: String, json: bool) -> Result<()> {
    let repo = parse_repo_url(&url)?;
    let github = GithubClient::from_env()?;
    let summary = summarize(&github, &repo).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("📦 Repository: {}", summary.repo);
    println!("========================");
    println!("⭐ Stars: {}", summary.stars);
    println!("💻 Language: {}", summary.language.as_deref().unwrap_or("not specified"));
    println!("🍴 Forks: {}", summary.forks);
    println!("🚨 Issues: {}", summary.open_issues);
    println!("🌿 Default branch: {}", summary.default_branch);
    println!("📝 Description: {}", summary.description.as_deref().unwrap_or("no description"));

    match &summary.file_tree {
        Some(paths) => {
            println!();
            println!("📂 File Structure ({} files):", paths.len());
            println!("{}", render::render_file_tree(paths, limits::TREE_DISPLAY_LIMIT));
            if paths.len() > limits::TREE_DISPLAY_LIMIT {
                println!("...and {} more files", paths.len() - limits::TREE_DISPLAY_LIMIT);
            }
        }
        None => println!("📂 File structure unavailable"),
    }

    match &summary.readme {
        Some(text) => {
            println!();
            println!("📖 README:");
            println!("{}", text.trim());
        }
        None => println!("📖 README not found"),
    }

    Ok(())
}
