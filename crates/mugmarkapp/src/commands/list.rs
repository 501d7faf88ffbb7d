//! Filtered list view.
//!
//! A query matches a record when it is a case-insensitive substring of
//! `"<id> <title> <tags joined by spaces>"`. The query is trimmed first; an
//! empty query matches everything. Filtering never touches the store.

use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{index_records, DisplayRecord};
use crate::model::Record;
use crate::store::{DocumentStore, SnapshotSlot};

pub fn run<S: SnapshotSlot>(store: &DocumentStore<S>, query: &str) -> Result<CmdResult> {
    let listed = filter(index_records(store.items(), store.selected_id()), query);
    let line = status_line(store.source_filename(), listed.len(), store.items().len());

    let mut result = CmdResult::default().with_listed_records(listed);
    result.add_message(CmdMessage::info(line));
    Ok(result)
}

/// Keeps the records matching `query`, preserving canonical positions.
pub fn filter(records: Vec<DisplayRecord>, query: &str) -> Vec<DisplayRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return records;
    }
    records
        .into_iter()
        .filter(|dr| matches(&dr.record, &query))
        .collect()
}

/// `query` must already be lowercased.
pub fn matches(record: &Record, query: &str) -> bool {
    let blob = format!("{} {} {}", record.id(), record.title(), record.tags().join(" "));
    blob.to_lowercase().contains(query)
}

pub fn status_line(source_filename: Option<&str>, shown: usize, total: usize) -> String {
    match source_filename {
        Some(name) => format!("Loaded: {} • Showing {}/{}", name, shown, total),
        None => format!("Showing {}/{}", shown, total),
    }
}
