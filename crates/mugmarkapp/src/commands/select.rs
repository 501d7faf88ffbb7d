use super::{selected_display, CmdMessage, CmdResult};
use crate::error::{MugmarkError, Result};
use crate::index::RecordSelector;
use crate::store::{DocumentStore, SnapshotSlot};

pub fn run<S: SnapshotSlot>(store: &mut DocumentStore<S>, selector: &str) -> Result<CmdResult> {
    let (_, index) = RecordSelector::resolve(selector, store.items())?;
    let id = store.items()[index].id().to_string();
    if id.is_empty() {
        return Err(MugmarkError::Api(format!(
            "Record #{} has no id and cannot be selected; set one after importing or delete it",
            index + 1
        )));
    }
    store.select(&id);

    let mut result = CmdResult::default().with_affected_records(selected_display(store));
    result.add_message(CmdMessage::info(format!("Selected {}", id)));
    Ok(result)
}
