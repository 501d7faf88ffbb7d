use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DocumentStore, SnapshotSlot};

/// Runs export validation without writing anything.
///
/// Each problem becomes one error message; a clean list gets a single
/// success message.
pub fn run<S: SnapshotSlot>(store: &DocumentStore<S>) -> Result<CmdResult> {
    let errors = store.kind().schema().validate(store.items());

    let mut result = CmdResult::default();
    if errors.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "No issues found in {} {}",
            store.items().len(),
            store.kind()
        )));
    } else {
        for error in errors {
            result.add_message(CmdMessage::error(error));
        }
    }
    Ok(result)
}
