//! Inline query handling
//!
//! Parse the query text, summarize the repository, answer with a single
//! article result. Successful answers carry the long Telegram-side cache
//! time; error answers the short one, so a transient failure does not
//! stick for five minutes.

use teloxide::prelude::*;
use teloxide::types::{
    InlineQuery, InlineQueryResult, InlineQueryResultArticle, InputMessageContent, InputMessageContentText, ParseMode,
};
use url::Url;

use octocore::config::limits;
use octocore::render::render_summary;
use octocore::{parse_repo_url, summarize, AppError, AppResult};

use super::types::HandlerDeps;

const RESULT_TITLE: &str = "GitHub Repository Analysis";
const RESULT_DESCRIPTION: &str = "Show repository information";
const THUMBNAIL_URL: &str = "https://github.com/favicon.ico";

/// Handle one inline query end to end.
pub(super) async fn handle_inline_query(bot: &Bot, query: &InlineQuery, deps: &HandlerDeps) -> AppResult<()> {
    let text = query.query.trim();

    // Non-GitHub text is ignored without an answer: in inline mode the
    // user is likely still typing.
    let Ok(repo) = parse_repo_url(text) else {
        return Ok(());
    };

    log::info!("Processing inline query: {}", text);

    match summarize(&deps.github, &repo).await {
        Ok(summary) => {
            let message = render_summary(&summary);
            bot.answer_inline_query(query.id.clone(), vec![summary_article(&message)])
                .cache_time(limits::ANSWER_CACHE_SECS)
                .await?;
            log::info!("Inline query answered: {}", repo);
        }
        Err(e) => {
            log::warn!("Failed to summarize {}: {}", repo, e);
            bot.answer_inline_query(query.id.clone(), vec![error_article(&e)])
                .cache_time(limits::ERROR_CACHE_SECS)
                .await?;
        }
    }

    Ok(())
}

/// The single success result: an article that sends the rendered summary.
fn summary_article(message: &str) -> InlineQueryResult {
    let content = InputMessageContentText::new(message.to_string()).parse_mode(ParseMode::Html);

    let mut article = InlineQueryResultArticle::new("1", RESULT_TITLE, InputMessageContent::Text(content))
        .description(RESULT_DESCRIPTION);

    if let Ok(thumbnail) = Url::parse(THUMBNAIL_URL) {
        article = article.thumbnail_url(thumbnail).thumbnail_width(64).thumbnail_height(64);
    }

    InlineQueryResult::Article(article)
}

/// The single error result shown when summarization fails.
fn error_article(error: &AppError) -> InlineQueryResult {
    let text = user_error_message(error);
    let content = InputMessageContentText::new(format!("❌ {}", text));

    InlineQueryResult::Article(
        InlineQueryResultArticle::new("error", "Error", InputMessageContent::Text(content)).description(text),
    )
}

/// Map the error taxonomy to a user-visible message.
fn user_error_message(error: &AppError) -> String {
    match error {
        AppError::InvalidUrl(_) => "Could not parse the GitHub repository URL.".to_string(),
        AppError::RepoNotFound { owner, name } => format!("Repository {}/{} was not found.", owner, name),
        _ => "Failed to fetch repository information. Please check the URL and try again.".to_string(),
    }
}
