//! The working document: one kind's record list plus selection state.
//!
//! ## Lifecycle
//!
//! 1. [`DocumentStore::init`] restores the slot snapshot (or starts empty).
//! 2. Operations mutate the list. Every record mutation marks the store dirty
//!    and persists immediately; there is no batching.
//! 3. [`DocumentStore::teardown`] ends the session and hands the slot back.
//!
//! ## Selection
//!
//! `selected_id` is a weak reference: it may name an id that no longer
//! resolves (e.g. after the record's id was blanked). [`DocumentStore::selected`]
//! returns `None` in that case and callers treat it as "nothing selected".

use super::{SnapshotRef, SnapshotSlot, StoredSnapshot};
use crate::error::{MugmarkError, Result};
use crate::model::{Kind, Record};
use serde_json::Value;

pub struct DocumentStore<S: SnapshotSlot> {
    slot: S,
    kind: Kind,
    items: Vec<Record>,
    selected_id: Option<String>,
    source_filename: Option<String>,
    dirty: bool,
}

impl<S: SnapshotSlot> DocumentStore<S> {
    /// Opens the store over `slot`.
    ///
    /// A readable snapshot decides the active kind. Without one the store
    /// starts empty on `default_kind`. Unreadable snapshots are logged and
    /// ignored.
    pub fn init(slot: S, default_kind: Kind) -> Self {
        let mut store = Self {
            slot,
            kind: default_kind,
            items: Vec::new(),
            selected_id: None,
            source_filename: None,
            dirty: false,
        };
        if let Some(snapshot) = store.read_snapshot() {
            store.kind = snapshot.kind;
            store.apply_snapshot(snapshot);
        }
        store
    }

    /// Ends the session and returns the slot.
    ///
    /// Every mutation has already been persisted, so nothing is written here.
    /// State that was never persisted (a kind picked with
    /// [`DocumentStore::switch_kind`] and not followed by a mutation) is dropped.
    pub fn teardown(self) -> S {
        tracing::debug!(kind = %self.kind, dirty = self.dirty, "closing document");
        self.slot
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn items(&self) -> &[Record] {
        &self.items
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn source_filename(&self) -> Option<&str> {
        self.source_filename.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|r| r.id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&Record> {
        self.items.iter().find(|r| r.id() == id)
    }

    pub fn selected(&self) -> Option<&Record> {
        let id = self.selected_id.as_deref()?;
        self.get(id)
    }

    /// Replaces the whole list with normalized `raw` entries of `kind`.
    ///
    /// The first record becomes selected and the dirty flag is cleared.
    pub fn load(&mut self, kind: Kind, raw: &[Value], source_filename: Option<&str>) {
        let schema = kind.schema();
        self.kind = kind;
        self.items = raw.iter().map(|item| schema.normalize(item)).collect();
        self.selected_id = self.first_id();
        self.source_filename = source_filename.map(str::to_string);
        self.dirty = false;
        tracing::debug!(kind = %kind, count = self.items.len(), "loaded records");
        self.persist();
    }

    /// Changes the active kind.
    ///
    /// The slot draft is restored when it belongs to `kind`; otherwise the
    /// list starts empty. Nothing is persisted here.
    pub fn switch_kind(&mut self, kind: Kind) {
        if kind == self.kind {
            return;
        }
        self.kind = kind;
        self.items.clear();
        self.selected_id = None;
        self.source_filename = None;
        self.dirty = false;

        if let Some(snapshot) = self.read_snapshot() {
            if snapshot.kind == kind {
                self.apply_snapshot(snapshot);
            }
        }
    }

    /// Points the selection at `id` without checking that it resolves.
    pub fn select(&mut self, id: &str) {
        self.selected_id = non_empty(id);
        self.persist();
    }

    /// `<prefix>-NNN` numbered from the current list length.
    pub fn next_sequential_id(&self) -> String {
        format!(
            "{}-{:03}",
            self.kind.schema().id_prefix(),
            self.items.len() + 1
        )
    }

    /// Returns `base` (or the next sequential id when `base` is blank),
    /// suffixed with `-2`, `-3`, ... until it collides with no existing id.
    pub fn unique_id(&self, base: &str) -> String {
        let base = match base.trim() {
            "" => self.next_sequential_id(),
            trimmed => trimmed.to_string(),
        };
        if self.get(&base).is_none() {
            return base;
        }
        let mut n = 2;
        while self.get(&format!("{}-{}", base, n)).is_some() {
            n += 1;
        }
        format!("{}-{}", base, n)
    }

    /// Prepends a blank record with a fresh id and selects it.
    pub fn create_blank(&mut self) -> String {
        let id = self.unique_id(&self.next_sequential_id());
        let blank = self.kind.schema().blank(&id);
        self.items.insert(0, blank);
        self.selected_id = Some(id.clone());
        self.mark_dirty();
        id
    }

    /// Prepends a deep copy of `id` under a derived id and selects it.
    pub fn duplicate(&mut self, id: &str) -> Result<String> {
        let mut copy = self
            .get(id)
            .cloned()
            .ok_or_else(|| MugmarkError::NotFound(id.to_string()))?;

        let new_id = self.unique_id(&format!("{}-copy", copy.id()));
        *copy.id_mut() = new_id.clone();
        let title = copy.title_mut();
        *title = if title.is_empty() {
            "(copy)".to_string()
        } else {
            format!("{} (copy)", title)
        };

        self.items.insert(0, copy);
        self.selected_id = Some(new_id.clone());
        self.mark_dirty();
        Ok(new_id)
    }

    pub fn remove(&mut self, id: &str) -> Result<Record> {
        let index = self
            .position_of(id)
            .ok_or_else(|| MugmarkError::NotFound(id.to_string()))?;
        self.remove_at(index)
    }

    /// Removes by list position (0-based). Reaches records whose id is blank.
    ///
    /// If the removed record was selected, selection falls back to the new
    /// first record.
    pub fn remove_at(&mut self, index: usize) -> Result<Record> {
        if index >= self.items.len() {
            return Err(MugmarkError::NotFound(format!("#{}", index + 1)));
        }
        let removed = self.items.remove(index);
        let was_selected =
            !removed.id().is_empty() && self.selected_id.as_deref() == Some(removed.id());
        if was_selected || self.selected().is_none() {
            self.selected_id = self.first_id();
        }
        self.mark_dirty();
        Ok(removed)
    }

    /// Runs `edit` against the selected record, then marks dirty.
    ///
    /// If the edit changed the record's id, the selection follows it. An id
    /// already used by another record is rejected and the old id restored.
    /// When `edit` fails nothing is persisted; edits must check their input
    /// before touching the record.
    pub fn edit_selected<T>(
        &mut self,
        edit: impl FnOnce(&mut Record) -> Result<T>,
    ) -> Result<T> {
        let index = self
            .selected_id
            .as_deref()
            .and_then(|id| self.position_of(id))
            .ok_or(MugmarkError::NoSelection)?;
        let old_id = self.items[index].id().to_string();

        let out = edit(&mut self.items[index])?;

        let new_id = self.items[index].id().to_string();
        if new_id != old_id && !new_id.is_empty() {
            let taken = self
                .items
                .iter()
                .enumerate()
                .any(|(i, r)| i != index && r.id() == new_id);
            if taken {
                *self.items[index].id_mut() = old_id;
                return Err(MugmarkError::Field(format!(
                    "Another record already has id '{}'",
                    new_id
                )));
            }
        }
        if !new_id.is_empty() {
            self.selected_id = Some(new_id);
        }
        self.mark_dirty();
        Ok(out)
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
        self.persist();
    }

    /// Best-effort write of the current state to the slot.
    ///
    /// Failures are logged and swallowed; memory stays authoritative.
    pub fn persist(&self) {
        let snapshot = SnapshotRef {
            kind: self.kind,
            selected_id: self.selected_id.as_deref(),
            items: &self.items,
            source_filename: self.source_filename.as_deref(),
            dirty: self.dirty,
        };
        let payload = match serde_json::to_string(&snapshot) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "could not serialize snapshot");
                return;
            }
        };
        if let Err(e) = self.slot.write(&payload) {
            tracing::warn!(
                error = %e,
                slot = %self.slot.describe(),
                "could not persist draft; edits are kept in memory only"
            );
        }
    }

    fn first_id(&self) -> Option<String> {
        self.items.first().and_then(|r| non_empty(r.id()))
    }

    fn read_snapshot(&self) -> Option<StoredSnapshot> {
        let raw = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, slot = %self.slot.describe(), "could not read saved draft");
                return None;
            }
        };
        match serde_json::from_str::<StoredSnapshot>(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!(error = %e, slot = %self.slot.describe(), "ignoring unreadable draft");
                None
            }
        }
    }

    fn apply_snapshot(&mut self, snapshot: StoredSnapshot) {
        let schema = snapshot.kind.schema();
        self.items = snapshot
            .items
            .into_iter()
            .map(|raw| schema.restore(raw))
            .collect();
        self.selected_id = snapshot.selected_id.as_deref().and_then(non_empty);
        self.source_filename = snapshot.source_filename;
        self.dirty = snapshot.dirty;
        tracing::debug!(kind = %snapshot.kind, count = self.items.len(), "restored draft");
    }
}

fn non_empty(id: &str) -> Option<String> {
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
