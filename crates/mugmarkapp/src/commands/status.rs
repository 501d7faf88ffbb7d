use crate::error::Result;
use crate::model::Kind;
use crate::store::{DocumentStore, SnapshotSlot};
use serde::Serialize;

/// Summary of the working document.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub kind: Kind,
    pub export_filename: &'static str,
    pub hint: &'static str,
    pub source_filename: Option<String>,
    pub total: usize,
    /// Selected id, only when it still resolves.
    pub selected_id: Option<String>,
    pub dirty: bool,
    /// Number of problems that would block export.
    pub issues: usize,
    pub slot: String,
}

pub fn run<S: SnapshotSlot>(store: &DocumentStore<S>) -> Result<StatusReport> {
    let schema = store.kind().schema();
    Ok(StatusReport {
        kind: store.kind(),
        export_filename: schema.filename(),
        hint: schema.hint(),
        source_filename: store.source_filename().map(str::to_string),
        total: store.items().len(),
        selected_id: store.selected().map(|r| r.id().to_string()),
        dirty: store.is_dirty(),
        issues: schema.validate(store.items()).len(),
        slot: store.slot().describe(),
    })
}
