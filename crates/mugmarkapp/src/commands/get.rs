use super::CmdResult;
use crate::error::{MugmarkError, Result};
use crate::index::{index_records, RecordSelector};
use crate::store::{DocumentStore, SnapshotSlot};

/// Shows one record: the one `selector` resolves to, or the selection.
pub fn run<S: SnapshotSlot>(store: &DocumentStore<S>, selector: Option<&str>) -> Result<CmdResult> {
    let index = resolve_index(store, selector)?;
    let record = index_records(store.items(), store.selected_id())
        .into_iter()
        .nth(index)
        .ok_or_else(|| MugmarkError::NotFound(format!("#{}", index + 1)))?;
    Ok(CmdResult::default().with_listed_records(vec![record]))
}

/// Resolves `selector` (or the current selection) to a 0-based index.
pub(crate) fn resolve_index<S: SnapshotSlot>(
    store: &DocumentStore<S>,
    selector: Option<&str>,
) -> Result<usize> {
    match selector {
        Some(input) => RecordSelector::resolve(input, store.items()).map(|(_, index)| index),
        None => store
            .selected_id()
            .and_then(|id| store.position_of(id))
            .ok_or(MugmarkError::NoSelection),
    }
}
