//! # CLI Layer
//!
//! This module is **one possible client** for mugmarkapp. It is the only place
//! that:
//! - Parses arguments
//! - Prompts the operator (delete confirmation)
//! - Writes to stdout/stderr
//! - Decides exit status
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions and grouped help
//! - `commands.rs`: `run()`, context setup and one `handle_*` per command
//! - `render.rs` / `templates.rs` / `styles.rs`: outstanding-based output

mod commands;
mod render;
mod setup;
mod styles;
mod templates;

pub use commands::run;
