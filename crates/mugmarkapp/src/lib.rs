//! # Mug & Marker Admin Architecture
//!
//! `mugmarkapp` is a **UI-agnostic content library** for the Mug & Marker site
//! datasets (worksheets, recipes, comics). The `mugmark` binary is one client of
//! it; nothing in here knows about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the `mugmark` CLI)                                 │
//! │  - Parses arguments, renders output, owns stdout/stderr     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves selectors (id or position) and config options   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Document Layer (store/) + Schemas (schema/)                │
//! │  - DocumentStore over a SnapshotSlot (FsSlot, MemSlot)      │
//! │  - Per-kind normalize / validate / asset paths              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Records Are Always Normalized
//!
//! Anything entering the store (import, snapshot fallback) goes through the
//! kind's [`schema::Schema::normalize`], which never fails: wrong types degrade
//! to empty values. Problems surface later, as validation errors at export.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust values and returns `Result<CmdResult>`.
//! It never prints and never exits. The only files it touches are the draft
//! slot and the export targets it is asked to write.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`schema`]: Per-kind normalization, validation and asset listing
//! - [`store`]: Document store and draft slot implementations
//! - [`model`]: `Kind`, `Record` and the per-kind record structs
//! - [`index`]: Id/position selectors
//! - [`tags`]: Tag parsing
//! - [`config`]: Settings
//! - [`init`]: Data directory and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod schema;
pub mod store;
pub mod tags;

#[cfg(test)]
mod test_utils;
