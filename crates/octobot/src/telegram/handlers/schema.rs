//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{InlineQuery, Message};

use super::commands::{handle_help_command, handle_url_message};
use super::inline::handle_inline_query;
use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::Command;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// This function returns a handler tree that can be used with teloxide's
/// Dispatcher. The same schema is used in production and in tests.
///
/// # Arguments
/// * `deps` - Handler dependencies (GitHub client, bot identity)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_inline = deps.clone();
    let deps_messages = deps;

    dptree::entry()
        // Command handler
        .branch(command_handler(deps_commands))
        // Inline query handler (the bot's main mode)
        .branch(inline_query_handler(deps_inline))
        // Message handler for GitHub URLs sent directly to the bot
        .branch(message_handler(deps_messages))
}

/// Handler for /start and /help commands
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter_command::<Command>()
        .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                match cmd {
                    Command::Start | Command::Help => handle_help_command(&bot, &msg, &deps).await?,
                }
                Ok(())
            }
        })
}

/// Handler for inline queries
fn inline_query_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_inline_query().endpoint(move |bot: Bot, query: InlineQuery| {
        let deps = deps.clone();
        async move {
            if let Err(e) = handle_inline_query(&bot, &query, &deps).await {
                log::error!("Inline query handler failed for {:?}: {}", query.query, e);
            }
            Ok(())
        }
    })
}

/// Handler for direct messages containing a GitHub URL
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(|text| text.contains("github.com")).unwrap_or(false))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                if let Err(e) = handle_url_message(&bot, &msg, &deps).await {
                    log::error!("Message handler failed for chat {}: {}", msg.chat.id, e);
                }
                Ok(())
            }
        })
}
