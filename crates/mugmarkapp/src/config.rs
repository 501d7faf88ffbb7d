//! # Configuration
//!
//! Settings are declared with [`confique`] and loaded in layers, highest
//! priority first:
//!
//! 1. **Environment variables**: `MUGMARK_SITE_NAME`, `MUGMARK_SITE_DATA_PATH`,
//!    `MUGMARK_DEFAULT_KIND`, `MUGMARK_CONFIRM_DELETE`.
//! 2. **Working directory**: `./mugmark.toml`, next to the site checkout.
//! 3. **User config**: `mugmark.toml` in the OS config directory (via
//!    `directories`).
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! Missing files are skipped.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `site_name` | `Mug & Marker` | Name in the upload manifest header |
//! | `site_data_path` | `/data/` | Site folder the manifest says to replace JSON in |
//! | `default_kind` | `worksheets` | Kind to start on when no draft exists |
//! | `confirm_delete` | `true` | Ask before `delete` (the CLI's `--yes` skips it) |

use crate::commands::manifest::ManifestOptions;
use crate::error::{MugmarkError, Result};
use crate::model::Kind;
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MugmarkConfig {
    /// Site name shown in the upload manifest header.
    #[config(default = "Mug & Marker", env = "MUGMARK_SITE_NAME")]
    pub site_name: String,

    /// Folder on the website holding the dataset JSON files.
    #[config(default = "/data/", env = "MUGMARK_SITE_DATA_PATH")]
    pub site_data_path: String,

    /// Kind to edit when no draft exists: worksheets, recipes or comics.
    #[config(default = "worksheets", env = "MUGMARK_DEFAULT_KIND")]
    pub default_kind: String,

    /// Ask for confirmation before deleting a record.
    #[config(default = true, env = "MUGMARK_CONFIRM_DELETE")]
    pub confirm_delete: bool,
}

impl Default for MugmarkConfig {
    fn default() -> Self {
        Self {
            site_name: "Mug & Marker".to_string(),
            site_data_path: "/data/".to_string(),
            default_kind: "worksheets".to_string(),
            confirm_delete: true,
        }
    }
}

pub const CONFIG_FILE_NAME: &str = "mugmark.toml";

pub const CONFIG_KEYS: [&str; 4] = [
    "site_name",
    "site_data_path",
    "default_kind",
    "confirm_delete",
];

impl MugmarkConfig {
    /// Loads env > `files` (in order) > defaults.
    pub fn load(files: &[PathBuf]) -> Result<Self> {
        let mut builder = Self::builder().env();
        for file in files {
            builder = builder.file(file.clone());
        }
        builder
            .load()
            .map_err(|e| MugmarkError::Config(e.to_string()))
    }

    pub fn default_kind(&self) -> Result<Kind> {
        self.default_kind
            .parse()
            .map_err(|e: MugmarkError| MugmarkError::Config(format!("default_kind: {}", e)))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "site_name" => Some(self.site_name.clone()),
            "site_data_path" => Some(self.site_data_path.clone()),
            "default_kind" => Some(self.default_kind.clone()),
            "confirm_delete" => Some(self.confirm_delete.to_string()),
            _ => None,
        }
    }

    pub fn manifest_options(&self) -> ManifestOptions<'_> {
        ManifestOptions {
            site_name: &self.site_name,
            site_data_path: &self.site_data_path,
        }
    }

    /// Commented TOML template listing every setting and its default.
    pub fn template() -> String {
        confique::toml::template::<MugmarkConfig>(confique::toml::FormatOptions::default())
    }
}
