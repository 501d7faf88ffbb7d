//! Upload manifest: a plain-text checklist of every asset the current records
//! reference, for the operator to upload by hand.
//!
//! ```text
//! Mug & Marker Upload Manifest
//! Dataset: worksheets
//! Generated: 2024-05-01T09:30:00.000Z
//!
//! WARNINGS:
//! - URL contains spaces: /assets/a b.pdf
//!
//! UPLOAD THESE FILES (grouped by folder):
//!
//! /assets/
//!   - a b.pdf
//!
//! Then replace the JSON on your website:
//!   /data/worksheets.json
//!
//! Note: This admin tool cannot upload or modify your server. ...
//! ```
//!
//! Warnings are emitted per path occurrence. The file list is deduplicated,
//! sorted, and grouped by everything up to and including the last `/`.

use super::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Kind, Record};
use crate::store::fs_slot::write_atomic;
use crate::store::{DocumentStore, SnapshotSlot};
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

pub struct ManifestOptions<'a> {
    pub site_name: &'a str,
    /// Site folder holding the dataset JSON files, e.g. `/data/`.
    pub site_data_path: &'a str,
}

impl Default for ManifestOptions<'_> {
    fn default() -> Self {
        Self {
            site_name: "Mug & Marker",
            site_data_path: "/data/",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub text: String,
    pub warnings: Vec<String>,
}

pub fn filename(kind: Kind) -> String {
    format!("upload-manifest-{}.txt", kind)
}

pub fn run<S: SnapshotSlot>(
    store: &DocumentStore<S>,
    out_dir: &Path,
    options: &ManifestOptions<'_>,
    generated_at: DateTime<Utc>,
) -> Result<CmdResult> {
    let kind = store.kind();
    let manifest = render(kind, store.items(), options, generated_at);

    let target = out_dir.join(filename(kind));
    write_atomic(out_dir, &target, "manifest", &manifest.text)?;
    tracing::info!(path = %target.display(), warnings = manifest.warnings.len(), "wrote upload manifest");

    let mut result = CmdResult::default().with_written_paths(vec![target.clone()]);
    for warning in &manifest.warnings {
        result.add_message(CmdMessage::warning(warning.clone()));
    }
    result.add_message(CmdMessage::success(format!(
        "Exported upload manifest to {}",
        target.display()
    )));
    Ok(result)
}

pub fn render(
    kind: Kind,
    items: &[Record],
    options: &ManifestOptions<'_>,
    generated_at: DateTime<Utc>,
) -> Manifest {
    let schema = kind.schema();
    let mut warnings = Vec::new();
    let mut unique = BTreeSet::new();

    for record in items {
        for path in schema.asset_paths(record) {
            if path.contains(' ') {
                warnings.push(format!("URL contains spaces: {}", path));
            }
            unique.insert(path);
        }
    }

    let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for path in &unique {
        let (folder, base) = split_folder(path);
        groups.entry(folder).or_default().push(base);
    }

    let mut lines = vec![
        format!("{} Upload Manifest", options.site_name),
        format!("Dataset: {}", kind),
        format!(
            "Generated: {}",
            generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        ),
        String::new(),
    ];

    if !warnings.is_empty() {
        lines.push("WARNINGS:".to_string());
        lines.extend(warnings.iter().map(|w| format!("- {}", w)));
        lines.push(String::new());
    }

    lines.push("UPLOAD THESE FILES (grouped by folder):".to_string());
    lines.push(String::new());
    for (folder, files) in &groups {
        lines.push(if folder.is_empty() {
            "(no folder)".to_string()
        } else {
            folder.to_string()
        });
        lines.extend(files.iter().map(|f| format!("  - {}", f)));
        lines.push(String::new());
    }

    let data_path = if options.site_data_path.ends_with('/') {
        options.site_data_path.to_string()
    } else {
        format!("{}/", options.site_data_path)
    };
    lines.push("Then replace the JSON on your website:".to_string());
    lines.push(format!("  {}{}", data_path, schema.filename()));
    lines.push(String::new());
    lines.push(
        "Note: This admin tool cannot upload or modify your server. It only exports files for you to upload."
            .to_string(),
    );

    Manifest {
        text: lines.join("\n"),
        warnings,
    }
}

/// Splits at the last `/`; the folder keeps its trailing slash.
fn split_folder(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(i) => (&path[..=i], &path[i + 1..]),
        None => ("", path),
    }
}
