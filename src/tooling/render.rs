//! Format the file tree and file details as terminal text or JSON.

use crate::browser::{
    FileTreeView, ViewState, EMPTY_CALL_TO_ACTION, EMPTY_TITLE, LOADING_MESSAGE,
};
use crate::error::ApiError;
use crate::format::{format_size, language_for};
use crate::types::FileRecord;
use crate::views::{TreeView, ViewRow};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Text for whatever state the view is in.
pub fn format_view_text(view: &FileTreeView, tree: Option<&TreeView<'_>>) -> String {
    match view.state() {
        ViewState::Idle => String::new(),
        ViewState::Loading => format!("{}\n", LOADING_MESSAGE.dimmed()),
        ViewState::Error { message } => format!("{}\n", message.red()),
        ViewState::Empty => format!("{}\n{}\n", EMPTY_TITLE.bold(), EMPTY_CALL_TO_ACTION),
        ViewState::Ready { .. } => match tree {
            Some(tree) => format_tree_text(tree),
            None => String::new(),
        },
    }
}

/// Indented tree listing under a file-count header.
pub fn format_tree_text(tree: &TreeView<'_>) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", format_section_heading(&tree.header())));
    for row in &tree.rows {
        let indent = "  ".repeat(row.depth());
        match row {
            ViewRow::Directory { name, icon, .. } => {
                out.push_str(&format!("{}{} {}/\n", indent, icon, name.blue().bold()));
            }
            ViewRow::File {
                name, icon, size, ..
            } => {
                out.push_str(&format!("{}{} {} {}\n", indent, icon, name, size.dimmed()));
            }
        }
    }
    out
}

pub fn format_tree_json(view: &FileTreeView, tree: Option<&TreeView<'_>>) -> Result<String, ApiError> {
    let value = match view.state() {
        ViewState::Ready { loaded_at, .. } => json!({
            "repository": view.repository(),
            "state": "ready",
            "loaded_at": loaded_at.to_rfc3339(),
            "tree": tree,
        }),
        ViewState::Error { message } => json!({
            "repository": view.repository(),
            "state": "error",
            "message": message,
        }),
        ViewState::Empty => json!({
            "repository": view.repository(),
            "state": "empty",
            "message": EMPTY_TITLE,
        }),
        ViewState::Loading | ViewState::Idle => json!({
            "repository": view.repository(),
            "state": "loading",
        }),
    };
    serde_json::to_string_pretty(&value)
        .map_err(|e| ApiError::InvalidInput(format!("Failed to serialize view: {}", e)))
}

/// Metadata table followed by line-numbered content.
pub fn format_file_text(record: &FileRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading(&record.name)));

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Path", "Size", "Language"]);
    table.add_row(vec![
        record.path.clone(),
        format_size(record.size),
        language_for(&record.name).to_string(),
    ]);
    out.push_str(&format!("{}\n\n", table));

    let lines: Vec<&str> = record.content.lines().collect();
    let width = lines.len().to_string().len();
    for (i, line) in lines.iter().enumerate() {
        let number = format!("{:>width$}", i + 1, width = width);
        out.push_str(&format!("{} {}\n", number.dimmed(), line));
    }
    out
}
