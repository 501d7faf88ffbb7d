//! # Storage Layer
//!
//! The tool edits one dataset at a time. That working set lives in a
//! [`DocumentStore`], which is mirrored after every change into a single durable
//! slot (the [`SnapshotSlot`] trait).
//!
//! ## Source of Truth
//!
//! - **In memory**: the `DocumentStore` is authoritative for the session.
//! - **Slot**: a crash/reload recovery aid. Writes are best-effort; a failed
//!   write is logged and otherwise ignored, and never rolls back memory.
//!
//! ## Snapshot Format
//!
//! The slot holds one JSON object for the *currently active kind only*:
//!
//! ```json
//! {
//!   "kind": "worksheets",
//!   "selectedId": "w-001",
//!   "items": [ ... ],
//!   "sourceFilename": "worksheets.json",
//!   "dirty": true
//! }
//! ```
//!
//! Switching kind and persisting replaces it, so drafts for two kinds never
//! coexist.
//!
//! ## Implementations
//!
//! - [`fs_slot::FsSlot`]: a JSON file in the data directory, written atomically.
//! - [`mem_slot::MemSlot`]: in-memory, for tests; can simulate write failures.

use crate::error::Result;
use crate::model::{Kind, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod document;
pub mod fs_slot;
pub mod mem_slot;

pub use document::DocumentStore;
pub use fs_slot::FsSlot;
pub use mem_slot::MemSlot;

/// Fixed key of the durable slot. [`FsSlot`] uses it as the file stem.
pub const SLOT_KEY: &str = "mm_admin_tool_v1";

/// Raw I/O for the durable snapshot slot.
///
/// Implementations only move text. Parsing and restore rules belong to
/// [`DocumentStore`].
pub trait SnapshotSlot {
    /// Returns `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replaces the slot contents. Must never leave a partial write behind.
    fn write(&self, payload: &str) -> Result<()>;

    /// Human-readable location, for diagnostics.
    fn describe(&self) -> String;
}

/// Snapshot as read back from the slot.
///
/// Items stay raw here so each one can be restored independently.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredSnapshot {
    pub kind: Kind,
    #[serde(default)]
    pub selected_id: Option<String>,
    #[serde(default)]
    pub items: Vec<Value>,
    #[serde(default)]
    pub source_filename: Option<String>,
    #[serde(default)]
    pub dirty: bool,
}

/// Snapshot as written to the slot.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SnapshotRef<'a> {
    pub kind: Kind,
    pub selected_id: Option<&'a str>,
    pub items: &'a [Record],
    pub source_filename: Option<&'a str>,
    pub dirty: bool,
}
