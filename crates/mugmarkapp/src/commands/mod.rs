//! # Command Layer
//!
//! This module contains the **core business logic** of mugmark. Each command
//! lives in its own submodule as plain functions over a [`DocumentStore`].
//!
//! ## Role and Responsibilities
//!
//! - Implement the actual logic for each operation
//! - Operate on [`Record`](crate::model::Record) and the document store
//! - Return structured [`CmdResult`] values with affected records and messages
//! - Stay UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: No stdout, stderr or formatting. (Import and export do
//!   read and write the files they are asked to.)
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//! - **User interaction**: No prompts or confirmations. Delete returns the
//!   record it would remove via [`crate::api::MugmarkApi::resolve`]; the UI
//!   asks.
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries:
//! - `affected_records`: records created or modified, with canonical positions
//! - `listed_records`: records to display
//! - `written_paths`: files written (export, manifest)
//! - `messages`: leveled messages (info, success, warning, error)
//! - `config`: resolved configuration (for `config`)
//!
//! ## Testing Strategy
//!
//! Command tests use [`MemSlot`](crate::store::MemSlot) and check `CmdResult`
//! contents and store state. Commands that write files use a temp directory.
//!
//! ## Command Modules
//!
//! - [`list`]: filtered list view
//! - [`status`]: document summary
//! - [`switch`]: change the active kind
//! - [`import`]: load a JSON array into the store
//! - [`export`]: validate and write the canonical JSON file
//! - [`manifest`]: write the upload manifest
//! - [`validate`]: report validation problems without exporting
//! - [`get`]: show one record
//! - [`select`]: move the selection
//! - [`create`]: new blank record
//! - [`duplicate`]: copy a record
//! - [`delete`]: remove a record
//! - [`edit`]: field and row mutations on the selection
//! - [`config`]: inspect configuration

use crate::config::MugmarkConfig;
use crate::index::{index_records, DisplayRecord};
use crate::store::{DocumentStore, SnapshotSlot};
use serde::Serialize;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod duplicate;
pub mod edit;
pub mod export;
pub mod get;
pub mod import;
pub mod list;
pub mod manifest;
pub mod select;
pub mod status;
pub mod switch;
pub mod validate;

/// Filesystem locations the tool works with.
#[derive(Debug, Clone)]
pub struct MugmarkPaths {
    /// Directory holding the durable draft slot.
    pub data: PathBuf,
    /// Config files consulted, highest priority first. Missing files are skipped.
    pub config_files: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<DisplayRecord>,
    pub listed_records: Vec<DisplayRecord>,
    pub written_paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
    pub config: Option<MugmarkConfig>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_written_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.written_paths = paths;
        self
    }

    pub fn with_config(mut self, config: MugmarkConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// The selected record with its canonical position, if the selection resolves.
pub(crate) fn selected_display<S: SnapshotSlot>(store: &DocumentStore<S>) -> Vec<DisplayRecord> {
    index_records(store.items(), store.selected_id())
        .into_iter()
        .filter(|dr| dr.selected)
        .collect()
}
