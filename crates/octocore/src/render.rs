//! Rendering of repository summaries into Telegram HTML.
//!
//! Pure functions only; everything here is deterministic for a given
//! summary. Telegram's HTML parse mode supports a small tag set, so all
//! interpolated values go through [`escape_html`].

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

use crate::config::limits;
use crate::summary::RepoSummary;

/// `<img ...>` tags, which Telegram HTML does not support.
static IMG_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<img[^>]*>").unwrap());

/// Markdown image syntax `![alt](url)`.
static MD_IMAGE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").unwrap());

/// Runs of three or more newlines.
static BLANK_RUN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Escape a string for Telegram HTML parse mode.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }

    result
}

/// Clean README text for embedding in a message.
///
/// Strips image tags and markdown images (badges mostly), escapes the
/// remainder for HTML mode, and collapses runs of blank lines left
/// behind by the stripping.
pub fn clean_readme(text: &str) -> String {
    let text = IMG_TAG_REGEX.replace_all(text, "");
    let text = MD_IMAGE_REGEX.replace_all(&text, "");
    let text = escape_html(&text);
    let text = BLANK_RUN_REGEX.replace_all(&text, "\n\n");
    text.trim().to_string()
}

#[derive(Default)]
struct TreeNode(BTreeMap<String, TreeNode>);

/// Render a visual file tree from slash-separated paths.
///
/// Only the first `limit` paths are included. Siblings are sorted by
/// name; nesting follows the path segments.
pub fn render_file_tree(paths: &[String], limit: usize) -> String {
    let mut root = TreeNode::default();

    for path in paths.iter().take(limit) {
        let mut node = &mut root;
        for part in path.split('/') {
            node = node.0.entry(part.to_string()).or_default();
        }
    }

    let mut lines = String::new();
    walk(&root, "", &mut lines);
    lines.trim_end().to_string()
}

fn walk(node: &TreeNode, prefix: &str, out: &mut String) {
    let total = node.0.len();
    for (i, (name, child)) in node.0.iter().enumerate() {
        let last = i + 1 == total;
        out.push_str(prefix);
        out.push_str(if last { "└─ " } else { "├─ " });
        out.push_str(name);
        out.push('\n');
        if !child.0.is_empty() {
            let extension = if last { "   " } else { "│  " };
            walk(child, &format!("{}{}", prefix, extension), out);
        }
    }
}

/// Truncate to at most `max_chars` characters, ellipsis included.
pub fn truncate_message(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut result: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    result.push_str("...");
    result
}

/// Render the full summary message in Telegram HTML.
///
/// Sections: repository header with owner/repo links, counters,
/// description, file tree (or a fetch-failure line), README (or a
/// not-found line). The result fits Telegram's message size limit.
pub fn render_summary(summary: &RepoSummary) -> String {
    let owner = escape_html(&summary.repo.owner);
    let name = escape_html(&summary.repo.name);
    let language = summary.language.as_deref().unwrap_or("not specified");
    let description = summary.description.as_deref().unwrap_or("no description");

    let header = format!(
        "<b>📦 Repository: <a href='{owner_url}'>{owner}</a>/<a href='{repo_url}'>{name}</a></b>\n\
         ⭐ <b>Stars:</b> <code>{stars}</code>\n\
         💻 <b>Language:</b> <code>{language}</code>\n\
         🍴 <b>Forks:</b> <code>{forks}</code>\n\
         🚨 <b>Issues:</b> <code>{issues}</code>\n\
         📝 <b>Description:</b> <code>{description}</code>\n",
        owner_url = summary.repo.owner_url(),
        repo_url = summary.repo.html_url(),
        owner = owner,
        name = name,
        stars = summary.stars,
        language = escape_html(language),
        forks = summary.forks,
        issues = summary.open_issues,
        description = escape_html(description),
    );

    let tree_text = match &summary.file_tree {
        Some(paths) => {
            let mut text = escape_html(&render_file_tree(paths, limits::TREE_DISPLAY_LIMIT));
            if paths.len() > limits::TREE_DISPLAY_LIMIT {
                text.push_str(&format!("\n...and {} more files", paths.len() - limits::TREE_DISPLAY_LIMIT));
            }
            text
        }
        None => "Failed to fetch file structure".to_string(),
    };

    let readme_text = match &summary.readme {
        Some(text) => {
            let cleaned = clean_readme(text);
            if cleaned.chars().count() > limits::README_DISPLAY_CHARS {
                let truncated: String = cleaned.chars().take(limits::README_DISPLAY_CHARS).collect();
                format!("{}\n... (truncated)", truncated)
            } else {
                cleaned
            }
        }
        None => "README not found".to_string(),
    };

    let message = format!(
        "{header}\n\
         <b>📂 File Structure:</b>\n<code>{tree_text}</code>\n\n\
         <b>───────────────────────</b>\n\n\
         <b>📖 README:</b>\n<code>{readme_text}</code>",
    );

    truncate_message(&message, limits::MESSAGE_BUDGET_CHARS)
}
