//! # Mug & Marker CLI
//!
//! The binary is thin: the client lives in `src/cli/`, and this file only calls
//! `cli::run()` and maps failure to an exit status.
//!
//! ## One Invocation, One Event
//!
//! Every invocation restores the draft from the data directory, applies at
//! most one operation, and leaves the draft autosaved for the next run. There
//! is no long-running process and no explicit "save" command; `export` is how
//! work leaves the tool.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/cli/)                                       │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Dispatch, logging, confirmation prompts (commands.rs)    │
//! │  - Terminal rendering via outstanding templates (render.rs) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  mugmarkapp::api::MugmarkApi                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rendering
//!
//! Output goes through the `outstanding` crate. Templates live in
//! `src/cli/templates/` and are embedded with `include_str!()`; styles are
//! named in `styles.rs`. `--no-color` forces plain text.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
