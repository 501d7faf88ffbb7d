use super::get::resolve_index;
use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayRecord;
use crate::store::{DocumentStore, SnapshotSlot};

/// Removes the record `selector` names, or the selection.
///
/// Irreversible. The caller is expected to have confirmed with the operator.
pub fn run<S: SnapshotSlot>(
    store: &mut DocumentStore<S>,
    selector: Option<&str>,
) -> Result<CmdResult> {
    let index = resolve_index(store, selector)?;
    let removed = store.remove_at(index)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted {}",
        label(&removed, index)
    )));
    match store.selected() {
        Some(record) => result.add_message(CmdMessage::info(format!("Selected {}", record.id()))),
        None => result.add_message(CmdMessage::info("Nothing selected")),
    }
    Ok(result.with_affected_records(vec![DisplayRecord {
        position: index + 1,
        record: removed,
        selected: false,
    }]))
}

/// `"<title>"`, falling back to the id, then the position.
pub fn label(record: &crate::model::Record, index: usize) -> String {
    if !record.title().is_empty() {
        format!("\"{}\"", record.title())
    } else if !record.id().is_empty() {
        format!("\"{}\"", record.id())
    } else {
        format!("#{}", index + 1)
    }
}
