use super::{CmdMessage, CmdResult};
use crate::error::{MugmarkError, Result};
use crate::model::{Kind, Record};
use crate::store::fs_slot::write_atomic;
use crate::store::{DocumentStore, SnapshotSlot};
use std::path::Path;

/// Validates the current list and writes `<out_dir>/<kind filename>`.
///
/// All-or-nothing: any validation error aborts before a file is created.
pub fn run<S: SnapshotSlot>(store: &DocumentStore<S>, out_dir: &Path) -> Result<CmdResult> {
    let kind = store.kind();
    let json = render(kind, store.items())?;

    let filename = kind.schema().filename();
    let target = out_dir.join(filename);
    write_atomic(out_dir, &target, "export", &json)?;
    tracing::info!(path = %target.display(), count = store.items().len(), "exported records");

    let mut result = CmdResult::default().with_written_paths(vec![target.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Exported {} ({} records) to {}",
        filename,
        store.items().len(),
        target.display()
    )));
    Ok(result)
}

/// Canonical export text: validated, re-normalized, pretty-printed with
/// two-space indentation.
pub fn render(kind: Kind, items: &[Record]) -> Result<String> {
    let schema = kind.schema();
    let errors = schema.validate(items);
    if !errors.is_empty() {
        return Err(MugmarkError::Validation(errors));
    }
    let out = items
        .iter()
        .map(|record| schema.renormalize(record))
        .collect::<Result<Vec<_>>>()?;
    Ok(serde_json::to_string_pretty(&out)?)
}
