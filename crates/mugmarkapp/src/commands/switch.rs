use super::{CmdMessage, CmdResult};
use crate::error::{MugmarkError, Result};
use crate::index::index_records;
use crate::model::Kind;
use crate::store::{DocumentStore, SnapshotSlot};

/// Makes `kind` the active kind and persists that choice.
///
/// The slot only holds one kind, so persisting replaces the current draft.
/// A dirty draft of another kind is only discarded when `force` is set.
pub fn run<S: SnapshotSlot>(
    store: &mut DocumentStore<S>,
    kind: Kind,
    force: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if kind == store.kind() {
        result.add_message(CmdMessage::info(format!("Already editing {}", kind)));
        return Ok(result);
    }

    let previous = store.kind();
    let discarded = check_discard(store, kind, force)?;

    store.switch_kind(kind);
    store.persist();

    if discarded > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Discarded the {} draft ({} records)",
            previous, discarded
        )));
    }
    result.add_message(CmdMessage::success(format!("Switched to {}", kind)));
    if store.items().is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No {} loaded. Import {} or create a record with `new`.",
            kind,
            kind.schema().filename()
        )));
    }
    Ok(result.with_listed_records(index_records(store.items(), store.selected_id())))
}

/// Number of draft records that moving to `kind` would drop.
///
/// Fails when that number is non-zero and `force` is unset.
pub fn check_discard<S: SnapshotSlot>(
    store: &DocumentStore<S>,
    kind: Kind,
    force: bool,
) -> Result<usize> {
    if kind == store.kind() || !store.is_dirty() {
        return Ok(0);
    }
    let discarded = store.items().len();
    if discarded > 0 && !force {
        return Err(MugmarkError::Api(format!(
            "The {} draft has unsaved edits ({} records). Switching to {} would discard it; pass --yes to switch anyway.",
            store.kind(),
            discarded,
            kind
        )));
    }
    Ok(discarded)
}
