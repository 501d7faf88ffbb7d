use super::{CmdMessage, CmdResult};
use crate::error::{MugmarkError, Result};
use crate::index::index_records;
use crate::model::Kind;
use crate::store::{DocumentStore, SnapshotSlot};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Imports a JSON file, replacing the current list.
///
/// The kind is `kind` when given, else inferred from a canonical file name
/// (`recipes.json`), else the store's active kind. On any error the store is
/// left untouched.
pub fn run<S: SnapshotSlot>(
    store: &mut DocumentStore<S>,
    path: &Path,
    kind: Option<Kind>,
) -> Result<CmdResult> {
    let text = fs::read_to_string(path).map_err(MugmarkError::Io)?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string());

    let kind = kind
        .or_else(|| file_name.as_deref().and_then(Kind::from_filename))
        .unwrap_or_else(|| store.kind());

    load_text(store, &text, kind, file_name.as_deref())
}

/// Imports already-read file text. See [`run`].
pub fn load_text<S: SnapshotSlot>(
    store: &mut DocumentStore<S>,
    text: &str,
    kind: Kind,
    source: Option<&str>,
) -> Result<CmdResult> {
    let raw = parse(text)?;

    let mut result = CmdResult::default();
    if store.is_dirty() && !store.items().is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Replaced an unsaved {} draft ({} records)",
            store.kind(),
            store.items().len()
        )));
    }

    store.load(kind, &raw, source);
    tracing::info!(kind = %kind, count = raw.len(), source = ?source, "imported records");

    result.add_message(CmdMessage::success(format!(
        "Imported {} {}{}",
        raw.len(),
        kind,
        source.map(|s| format!(" from {}", s)).unwrap_or_default()
    )));
    Ok(result.with_affected_records(index_records(store.items(), store.selected_id())))
}

/// Parses import text. The top level must be a JSON array.
pub fn parse(text: &str) -> Result<Vec<Value>> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| MugmarkError::Parse(e.to_string()))?;
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(MugmarkError::Parse(
            "Loaded JSON must be an array of items. Example: [ { ... }, { ... } ]".to_string(),
        )),
    }
}
