//! # Schema Registry
//!
//! Each [`Kind`] has a [`Schema`]: a stateless strategy object with three pure
//! operations plus some metadata.
//!
//! - [`Schema::normalize`]: coerce arbitrary JSON into a well-formed [`Record`].
//!   Never fails. Unknown fields are dropped, missing strings become `""`,
//!   missing lists become `[]`. Idempotent.
//! - [`Schema::validate`]: check a whole record list for export-blocking
//!   problems. Returns every message, never stops at the first one, never
//!   mutates.
//! - [`Schema::asset_paths`]: every image/file path a record references, blanks
//!   removed, duplicates kept.
//!
//! Validation is deliberately the strict minimum (the fields whose absence
//! visibly breaks the public site) and separate from normalization, so a record
//! can sit half-finished in the store while being edited and only gets rejected
//! at export time.
//!
//! ## Scalar Coercion
//!
//! | JSON | Result |
//! |------|--------|
//! | string | trimmed |
//! | number, bool | stringified |
//! | null, missing, array, object | `""` |
//!
//! ## Dispatch
//!
//! [`Kind::schema`] returns the `'static` implementation for a kind. Nothing
//! looks fields up by name at runtime.

use crate::error::Result;
use crate::model::{Kind, Record};
use serde_json::Value;
use std::collections::HashSet;

pub mod comic;
pub mod recipe;
pub mod worksheet;

pub use comic::ComicSchema;
pub use recipe::RecipeSchema;
pub use worksheet::WorksheetSchema;

static WORKSHEETS: WorksheetSchema = WorksheetSchema;
static RECIPES: RecipeSchema = RecipeSchema;
static COMICS: ComicSchema = ComicSchema;

impl Kind {
    pub fn schema(&self) -> &'static dyn Schema {
        match self {
            Kind::Worksheets => &WORKSHEETS,
            Kind::Recipes => &RECIPES,
            Kind::Comics => &COMICS,
        }
    }
}

pub trait Schema: Sync {
    fn kind(&self) -> Kind;

    /// Singular label used in validation messages ("Worksheet").
    fn label(&self) -> &'static str;

    /// Canonical export filename ("worksheets.json").
    fn filename(&self) -> &'static str;

    /// One-line field summary shown to the operator.
    fn hint(&self) -> &'static str;

    /// Prefix for generated ids ("w").
    fn id_prefix(&self) -> &'static str;

    fn normalize(&self, raw: &Value) -> Record;

    /// Restores a record written by this crate without normalizing it, so
    /// in-progress edits (blank rows, untrimmed text) survive a reload.
    /// Falls back to [`Schema::normalize`] for anything that does not fit.
    fn restore(&self, raw: Value) -> Record;

    /// Kind-specific required-field checks for one record.
    ///
    /// `who` is the record's reference in messages: its id, or `#<position>`.
    fn check_required(&self, record: &Record, who: &str) -> Vec<String>;

    fn asset_paths(&self, record: &Record) -> Vec<String>;

    fn validate(&self, records: &[Record]) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for (i, record) in records.iter().enumerate() {
            let id = record.id().trim();
            let position = format!("#{}", i + 1);
            if id.is_empty() {
                errors.push(format!("{} {}: missing id", self.label(), position));
            } else if seen.contains(id) {
                errors.push(format!("Duplicate id: {}", id));
            }
            seen.insert(id);

            let who = if id.is_empty() { position.as_str() } else { id };
            if record.title().trim().is_empty() {
                errors.push(format!("{} {}: missing title", self.label(), who));
            }
            errors.extend(self.check_required(record, who));
        }

        errors
    }

    /// Normalizes a blank record carrying only `id`.
    fn blank(&self, id: &str) -> Record {
        self.normalize(&serde_json::json!({ "id": id }))
    }

    /// Re-runs [`Schema::normalize`] over an already typed record.
    fn renormalize(&self, record: &Record) -> Result<Record> {
        let value = serde_json::to_value(record)?;
        Ok(self.normalize(&value))
    }
}

/// Coerces one JSON value into a trimmed string. See the module table.
pub fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

/// Coerces a JSON value into a list of trimmed, non-blank strings.
pub fn coerce_string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| coerce_string(Some(item)))
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// Field lookup that tolerates non-object input.
pub(crate) fn field<'a>(raw: &'a Value, key: &str) -> Option<&'a Value> {
    raw.as_object().and_then(|obj| obj.get(key))
}

pub(crate) fn non_blank(paths: impl IntoIterator<Item = String>) -> Vec<String> {
    paths.into_iter().filter(|p| !p.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerce_string_table() {
        assert_eq!(coerce_string(Some(&json!("  hi  "))), "hi");
        assert_eq!(coerce_string(Some(&json!(42))), "42");
        assert_eq!(coerce_string(Some(&json!(1.5))), "1.5");
        assert_eq!(coerce_string(Some(&json!(true))), "true");
        assert_eq!(coerce_string(Some(&json!(null))), "");
        assert_eq!(coerce_string(Some(&json!([1, 2]))), "");
        assert_eq!(coerce_string(Some(&json!({"a": 1}))), "");
        assert_eq!(coerce_string(None), "");
    }

    #[test]
    fn coerce_string_list_drops_blanks() {
        assert_eq!(
            coerce_string_list(Some(&json!([" a ", "", null, 7]))),
            vec!["a", "7"]
        );
        assert!(coerce_string_list(Some(&json!("a"))).is_empty());
    }

    #[test]
    fn every_kind_normalizes_garbage_without_panicking() {
        let inputs = [
            json!(null),
            json!(17),
            json!("text"),
            json!([1, 2, 3]),
            json!({}),
            json!({"id": {"nested": true}, "tags": 5, "images": "x", "files": [1, null, {"url": 3}]}),
            json!({"dictionary": [], "ingredients": {"a": 1}}),
        ];
        for kind in Kind::ALL {
            for input in &inputs {
                let record = kind.schema().normalize(input);
                assert_eq!(record.kind(), kind);
            }
        }
    }

    #[test]
    fn normalize_is_idempotent_for_every_kind() {
        let raw = json!({
            "id": "  x-1 ",
            "title": " Title ",
            "image": " /a.png ",
            "thumbnail": "/legacy.png",
            "images": ["/b.png", "", "  "],
            "files": [{"label": " PDF ", "url": " /f.pdf "}, "junk"],
            "tags": "a, b,,c",
            "alt": 3,
            "ingredients": [" salt ", "", "pepper"],
            "instructions": " stir ",
            "dictionary": {"term": " t ", "definitions": [" d1 ", ""]},
            "unknown": "dropped"
        });
        for kind in Kind::ALL {
            let schema = kind.schema();
            let once = schema.normalize(&raw);
            let twice = schema.renormalize(&once).unwrap();
            assert_eq!(once, twice, "normalize not idempotent for {}", kind);
        }
    }

    #[test]
    fn validate_empty_list_has_no_errors() {
        for kind in Kind::ALL {
            assert!(kind.schema().validate(&[]).is_empty());
        }
    }

    #[test]
    fn validate_reports_each_duplicate_occurrence() {
        let schema = Kind::Comics.schema();
        let records: Vec<Record> = (0..3)
            .map(|_| schema.normalize(&json!({"id": "c-1", "title": "T", "image": "/c.png"})))
            .collect();
        let errors = schema.validate(&records);
        assert_eq!(
            errors,
            vec!["Duplicate id: c-1".to_string(), "Duplicate id: c-1".to_string()]
        );
    }

    #[test]
    fn validate_missing_id_references_position() {
        let schema = Kind::Comics.schema();
        let records = vec![
            schema.normalize(&json!({"id": "c-1", "title": "T", "image": "/c.png"})),
            schema.normalize(&json!({"title": "T", "image": "/c.png"})),
        ];
        let errors = schema.validate(&records);
        assert_eq!(errors, vec!["Comic #2: missing id".to_string()]);
    }

    #[test]
    fn validate_uses_position_for_anonymous_records() {
        let schema = Kind::Comics.schema();
        let records = vec![schema.normalize(&json!({}))];
        let errors = schema.validate(&records);
        assert_eq!(
            errors,
            vec![
                "Comic #1: missing id".to_string(),
                "Comic #1: missing title".to_string(),
                "Comic #1: missing image".to_string(),
            ]
        );
    }

    #[test]
    fn validate_does_not_mutate_input() {
        let schema = Kind::Recipes.schema();
        let records = vec![schema.normalize(&json!({"id": " r-1 "}))];
        let before = records.clone();
        let _ = schema.validate(&records);
        assert_eq!(records, before);
    }

    #[test]
    fn whitespace_title_counts_as_missing() {
        let schema = Kind::Comics.schema();
        let mut record = schema.normalize(&json!({"id": "c-1", "image": "/c.png"}));
        *record.title_mut() = "   ".into();
        let errors = schema.validate(&[record]);
        assert_eq!(errors, vec!["Comic c-1: missing title".to_string()]);
    }
}
