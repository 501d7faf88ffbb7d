//! # Rendering
//!
//! Styled terminal output through the `outstanding` crate. Every `render_*`
//! function takes an explicit `use_color`; the caller decides it once from
//! `--no-color` and terminal detection.
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they
//! need Unicode-aware processing. Templates choose styles and arrange the
//! pre-computed pieces.

use super::styles::{names, MUGMARK_THEME};
use super::templates::{
    LIST_TEMPLATE, MESSAGES_TEMPLATE, RECORD_TEMPLATE, STATUS_TEMPLATE, TEXT_LIST_TEMPLATE,
};
use mugmarkapp::api::StatusReport;
use mugmarkapp::commands::{CmdMessage, MessageLevel};
use mugmarkapp::index::DisplayRecord;
use outstanding::{render_with_color, ThemeChoice};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

pub const TITLE_WIDTH: usize = 48;
pub const SELECTED_MARKER: &str = "▸";
pub const MAX_TAGS: usize = 3;

#[derive(Serialize)]
struct RowData {
    marker: String,
    index: String,
    title: String,
    title_style: &'static str,
    padding: String,
    id: String,
    tags: String,
}

#[derive(Serialize)]
struct ListData {
    rows: Vec<RowData>,
    empty: bool,
    empty_message: String,
}

#[derive(Serialize)]
struct RecordData {
    index: String,
    title: String,
    title_style: &'static str,
    selected: bool,
    body: String,
}

#[derive(Serialize)]
struct StatusData {
    kind: String,
    export_filename: String,
    source: String,
    total: usize,
    selected: String,
    draft: &'static str,
    draft_style: &'static str,
    issues: usize,
    issues_style: &'static str,
    slot: String,
    hint: String,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: bool) -> String {
    let mut out = render_with_color(template, data, ThemeChoice::from(&*MUGMARK_THEME), use_color)
        .unwrap_or_else(|e| format!("Render error: {}", e));
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn title_style(record: &DisplayRecord) -> &'static str {
    if record.record.title().is_empty() {
        names::UNTITLED
    } else {
        names::LIST_TITLE
    }
}

/// Renders list rows: marker, canonical position, title, id, first tags.
pub fn render_record_list(records: &[DisplayRecord], use_color: bool) -> String {
    let index_width = records
        .iter()
        .map(|dr| format!("{}. ", dr.position).width())
        .max()
        .unwrap_or(0);

    let rows = records
        .iter()
        .map(|dr| {
            let title = truncate_to_width(dr.record.display_title(), TITLE_WIDTH);
            let padding = " ".repeat(TITLE_WIDTH.saturating_sub(title.width()));
            let id = if dr.record.id().is_empty() {
                "(no id)".to_string()
            } else {
                dr.record.id().to_string()
            };
            RowData {
                marker: if dr.selected { SELECTED_MARKER } else { " " }.to_string(),
                index: format!("{:<width$}", format!("{}. ", dr.position), width = index_width),
                title,
                title_style: title_style(dr),
                padding,
                id,
                tags: tags_summary(dr.record.tags()),
            }
        })
        .collect::<Vec<_>>();

    let data = ListData {
        empty: rows.is_empty(),
        rows,
        empty_message: "No records. Import a file or run `mugmark new`.".to_string(),
    };
    render_template(LIST_TEMPLATE, &data, use_color)
}

/// Renders one record: a header line, then the record as pretty JSON.
pub fn render_record(record: &DisplayRecord, use_color: bool) -> String {
    let body = serde_json::to_string_pretty(&record.record)
        .unwrap_or_else(|e| format!("(could not render record: {})", e));
    let data = RecordData {
        index: format!("{}. ", record.position),
        title: record.record.display_title().to_string(),
        title_style: if record.record.title().is_empty() {
            names::UNTITLED
        } else {
            names::TITLE
        },
        selected: record.selected,
        body,
    };
    render_template(RECORD_TEMPLATE, &data, use_color)
}

pub fn render_status(report: &StatusReport, use_color: bool) -> String {
    let data = StatusData {
        kind: report.kind.to_string(),
        export_filename: report.export_filename.to_string(),
        source: report
            .source_filename
            .clone()
            .unwrap_or_else(|| "(none)".to_string()),
        total: report.total,
        selected: report
            .selected_id
            .clone()
            .unwrap_or_else(|| "(none)".to_string()),
        draft: if report.dirty {
            "unsaved changes"
        } else {
            "clean"
        },
        draft_style: if report.dirty {
            names::DRAFT_DIRTY
        } else {
            names::DRAFT_CLEAN
        },
        issues: report.issues,
        issues_style: if report.issues == 0 {
            names::SUCCESS
        } else {
            names::WARNING
        },
        slot: report.slot.clone(),
        hint: report.hint.to_string(),
    };
    render_template(STATUS_TEMPLATE, &data, use_color)
}

pub fn render_text_list(lines: &[String], empty_message: &str, use_color: bool) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };
    render_template(TEXT_LIST_TEMPLATE, &data, use_color)
}

/// Renders command messages with a style per level.
pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }
    let messages = messages
        .iter()
        .map(|msg| MessageData {
            content: msg.content.clone(),
            style: match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            },
        })
        .collect();
    render_template(MESSAGES_TEMPLATE, &MessagesData { messages }, use_color)
}

pub fn print_messages(messages: &[CmdMessage], use_color: bool) {
    print!("{}", render_messages(messages, use_color));
}

/// Up to [`MAX_TAGS`] tags, comma-joined, with `…` when more exist.
fn tags_summary(tags: &[String]) -> String {
    let mut summary = tags
        .iter()
        .take(MAX_TAGS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if tags.len() > MAX_TAGS {
        summary.push_str(", …");
    }
    summary
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
