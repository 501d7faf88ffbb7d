//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the matching command function
//! - **Resolves inputs** (record selectors, config-derived options)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Terminal I/O**: No stdout, stderr, or formatting
//! - **Confirmation**: Destructive calls run when called. Use [`MugmarkApi::resolve`]
//!   to show the operator what a selector points at first.
//!
//! ## Selectors
//!
//! Methods taking `selector: Option<&str>` accept an exact id or a 1-based
//! position (see [`crate::index`]). `None` means the current selection.
//!
//! ## Generic Over SnapshotSlot
//!
//! `MugmarkApi<S: SnapshotSlot>` is generic over where drafts are kept:
//! - Production: `MugmarkApi<FsSlot>`
//! - Testing: `MugmarkApi<MemSlot>`

use crate::commands::{self, CmdResult, MugmarkPaths};
use crate::config::MugmarkConfig;
use crate::error::Result;
use crate::index::{index_records, DisplayRecord};
use crate::model::Kind;
use crate::store::{DocumentStore, SnapshotSlot};
use chrono::Utc;
use std::path::Path;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::edit::{Field, FieldEdit, RowList};
pub use crate::commands::status::StatusReport;

pub struct MugmarkApi<S: SnapshotSlot> {
    store: DocumentStore<S>,
    config: MugmarkConfig,
    paths: MugmarkPaths,
}

impl<S: SnapshotSlot> MugmarkApi<S> {
    pub fn new(store: DocumentStore<S>, config: MugmarkConfig, paths: MugmarkPaths) -> Self {
        Self {
            store,
            config,
            paths,
        }
    }

    pub fn store(&self) -> &DocumentStore<S> {
        &self.store
    }

    pub fn config(&self) -> &MugmarkConfig {
        &self.config
    }

    pub fn paths(&self) -> &MugmarkPaths {
        &self.paths
    }

    pub fn kind(&self) -> Kind {
        self.store.kind()
    }

    /// Works on `kind` for this session without persisting the switch.
    /// A later mutation persists it like any other state, so a dirty draft of
    /// another kind is refused unless `force` is set. Callers that never
    /// persist can pass `force`.
    pub fn use_kind(&mut self, kind: Kind, force: bool) -> Result<()> {
        commands::switch::check_discard(&self.store, kind, force)?;
        self.store.switch_kind(kind);
        Ok(())
    }

    pub fn list(&self, query: &str) -> Result<CmdResult> {
        commands::list::run(&self.store, query)
    }

    pub fn status(&self) -> Result<StatusReport> {
        commands::status::run(&self.store)
    }

    pub fn switch_kind(&mut self, kind: Kind, force: bool) -> Result<CmdResult> {
        commands::switch::run(&mut self.store, kind, force)
    }

    pub fn import_file(&mut self, path: &Path, kind: Option<Kind>) -> Result<CmdResult> {
        commands::import::run(&mut self.store, path, kind)
    }

    pub fn import_text(
        &mut self,
        text: &str,
        kind: Kind,
        source: Option<&str>,
    ) -> Result<CmdResult> {
        commands::import::load_text(&mut self.store, text, kind, source)
    }

    pub fn export(&self, out_dir: &Path) -> Result<CmdResult> {
        commands::export::run(&self.store, out_dir)
    }

    pub fn export_manifest(&self, out_dir: &Path) -> Result<CmdResult> {
        commands::manifest::run(
            &self.store,
            out_dir,
            &self.config.manifest_options(),
            Utc::now(),
        )
    }

    pub fn validate(&self) -> Result<CmdResult> {
        commands::validate::run(&self.store)
    }

    pub fn show(&self, selector: Option<&str>) -> Result<CmdResult> {
        commands::get::run(&self.store, selector)
    }

    /// The record `selector` (or the selection) points at, without acting on it.
    pub fn resolve(&self, selector: Option<&str>) -> Result<DisplayRecord> {
        let index = commands::get::resolve_index(&self.store, selector)?;
        let mut indexed = index_records(self.store.items(), self.store.selected_id());
        Ok(indexed.swap_remove(index))
    }

    pub fn select(&mut self, selector: &str) -> Result<CmdResult> {
        commands::select::run(&mut self.store, selector)
    }

    pub fn create(&mut self) -> Result<CmdResult> {
        commands::create::run(&mut self.store)
    }

    pub fn duplicate(&mut self, selector: Option<&str>) -> Result<CmdResult> {
        commands::duplicate::run(&mut self.store, selector)
    }

    pub fn delete(&mut self, selector: Option<&str>) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, selector)
    }

    pub fn edit(&mut self, edit: FieldEdit) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, edit)
    }

    pub fn config_action(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config, &self.paths, action)
    }

    /// Ends the session and returns the slot.
    pub fn teardown(self) -> S {
        self.store.teardown()
    }
}
