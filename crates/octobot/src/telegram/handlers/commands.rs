//! Command and message handler implementations (/start, /help, URL messages)

use teloxide::prelude::*;
use teloxide::types::{Message, ParseMode};

use octocore::render::render_summary;
use octocore::{parse_repo_url, summarize, AppError, AppResult};

use super::types::HandlerDeps;

/// Handle /start and /help: explain inline usage.
pub(super) async fn handle_help_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> AppResult<()> {
    let text = usage_text(deps.bot_username.as_deref());
    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

fn usage_text(bot_username: Option<&str>) -> String {
    let mention = bot_username.map(|u| format!("@{}", u)).unwrap_or_else(|| "the bot".to_string());
    format!(
        "👋 I summarize GitHub repositories.\n\n\
         Inline mode: type {mention} followed by a repository URL in any chat, e.g.\n\
         {mention} https://github.com/rust-lang/rust\n\n\
         Or send me a repository URL right here and I'll reply with its \
         description, stars, file tree and README."
    )
}

/// Handle a direct message containing a GitHub URL: reply with the same
/// summary an inline query would produce.
pub(super) async fn handle_url_message(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> AppResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let repo = match parse_repo_url(text) {
        Ok(repo) => repo,
        Err(_) => {
            bot.send_message(
                msg.chat.id,
                "❌ Could not parse the GitHub repository URL. Send a link like https://github.com/owner/repo",
            )
            .await?;
            return Ok(());
        }
    };

    log::info!("Processing message query from chat {}: {}", msg.chat.id, repo);

    match summarize(&deps.github, &repo).await {
        Ok(summary) => {
            bot.send_message(msg.chat.id, render_summary(&summary))
                .parse_mode(ParseMode::Html)
                .await?;
        }
        Err(AppError::RepoNotFound { owner, name }) => {
            bot.send_message(msg.chat.id, format!("❌ Repository {}/{} was not found.", owner, name))
                .await?;
        }
        Err(e) => {
            log::error!("Failed to summarize {}: {}", repo, e);
            bot.send_message(
                msg.chat.id,
                "❌ Failed to fetch repository information. Please try again later.",
            )
            .await?;
        }
    }

    Ok(())
}
