use super::get::resolve_index;
use super::{selected_display, CmdMessage, CmdResult};
use crate::error::{MugmarkError, Result};
use crate::store::{DocumentStore, SnapshotSlot};

/// Duplicates the record `selector` names, or the selection.
pub fn run<S: SnapshotSlot>(
    store: &mut DocumentStore<S>,
    selector: Option<&str>,
) -> Result<CmdResult> {
    let index = resolve_index(store, selector)?;
    let source_id = store.items()[index].id().to_string();
    if source_id.is_empty() {
        return Err(MugmarkError::Api(format!(
            "Record #{} has no id; give it one before duplicating",
            index + 1
        )));
    }

    let new_id = store.duplicate(&source_id)?;
    let mut result = CmdResult::default().with_affected_records(selected_display(store));
    result.add_message(CmdMessage::success(format!(
        "Duplicated {} as {}",
        source_id, new_id
    )));
    Ok(result)
}
