//! # Locating Data and Settings
//!
//! The tool keeps one draft slot per operator, not per site checkout. The data
//! directory is resolved in this order:
//!
//! 1. An explicit override (the CLI's `--data`).
//! 2. The `MUGMARK_DATA` environment variable. Tests use this to isolate state.
//! 3. The OS data directory (via the `directories` crate), e.g.
//!    `~/.local/share/mugmark` on Linux.
//!
//! Settings come from [`MugmarkConfig::load`] over two files, highest priority
//! first: `./mugmark.toml` in the working directory, then `mugmark.toml` in the
//! OS config directory. Environment variables beat both.
//!
//! The active kind on startup is whatever the slot snapshot says. Only when no
//! snapshot exists does `default_kind` apply.

use crate::api::MugmarkApi;
use crate::commands::MugmarkPaths;
use crate::config::{MugmarkConfig, CONFIG_FILE_NAME};
use crate::error::{MugmarkError, Result};
use crate::store::{DocumentStore, FsSlot};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DATA_ENV: &str = "MUGMARK_DATA";

pub struct MugmarkContext {
    pub api: MugmarkApi<FsSlot>,
    pub config: MugmarkConfig,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "mugandmarker", "mugmark")
}

/// Resolves the data directory. See the module docs for precedence.
pub fn data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            MugmarkError::Config(format!(
                "Could not determine a data directory; pass --data or set {}",
                DATA_ENV
            ))
        })
}

/// Config files to consult, highest priority first.
pub fn config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut files = vec![cwd.join(CONFIG_FILE_NAME)];
    if let Some(dirs) = project_dirs() {
        files.push(dirs.config_dir().join(CONFIG_FILE_NAME));
    }
    files
}

/// Loads settings and restores the document store from the data directory.
pub fn initialize(cwd: &Path, data_override: Option<PathBuf>) -> Result<MugmarkContext> {
    let data = data_dir(data_override)?;
    let files = config_files(cwd);
    let config = MugmarkConfig::load(&files)?;
    let default_kind = config.default_kind()?;

    tracing::debug!(data = %data.display(), kind = %default_kind, "initializing");

    let store = DocumentStore::init(FsSlot::new(data.clone()), default_kind);
    let paths = MugmarkPaths {
        data,
        config_files: files,
    };
    let api = MugmarkApi::new(store, config.clone(), paths);

    Ok(MugmarkContext { api, config })
}
