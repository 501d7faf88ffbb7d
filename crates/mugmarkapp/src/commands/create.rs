use super::{selected_display, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DocumentStore, SnapshotSlot};

pub fn run<S: SnapshotSlot>(store: &mut DocumentStore<S>) -> Result<CmdResult> {
    let id = store.create_blank();
    let mut result = CmdResult::default().with_affected_records(selected_display(store));
    result.add_message(CmdMessage::success(format!("Created {}", id)));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Kind;
    use crate::store::MemSlot;

    #[test]
    fn new_record_is_first_and_selected() {
        let mut store = DocumentStore::init(MemSlot::new(), Kind::Comics);
        run(&mut store).unwrap();
        let result = run(&mut store).unwrap();
        let created = &result.affected_records[0];
        assert_eq!(created.record.id(), "c-002");
        assert_eq!(created.position, 1);
        assert!(created.selected);
        assert_eq!(result.messages[0].content, "Created c-002");
    }
}
