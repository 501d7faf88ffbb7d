//! Tag handling.
//!
//! Tags are free-form labels. The public listing pages accept them either as an
//! array or as a comma-separated string, so both shapes are accepted here too.
//!
//! ## Rules
//!
//! - Each tag is trimmed; empty tags are dropped.
//! - Order is preserved.
//! - Duplicates are **not** removed (the site treats tags as an ordered list).

use serde_json::Value;

/// Operator-supplied tag input: a comma-separated string or an explicit list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagInput {
    Text(String),
    List(Vec<String>),
}

impl TagInput {
    pub fn into_tags(self) -> Vec<String> {
        match self {
            TagInput::Text(text) => split_tags(&text),
            TagInput::List(list) => clean_tags(list.iter().map(String::as_str)),
        }
    }
}

impl From<&str> for TagInput {
    fn from(text: &str) -> Self {
        TagInput::Text(text.to_string())
    }
}

impl From<Vec<String>> for TagInput {
    fn from(list: Vec<String>) -> Self {
        TagInput::List(list)
    }
}

/// Splits a comma-separated tag string.
pub fn split_tags(text: &str) -> Vec<String> {
    clean_tags(text.split(','))
}

fn clean_tags<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    raw.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Coerces an arbitrary JSON value into a tag list.
///
/// Arrays have each element stringified; strings are split on commas; anything
/// else yields no tags.
pub fn tags_from_value(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| crate::schema::coerce_string(Some(item)))
            .filter(|t| !t.is_empty())
            .collect(),
        Some(Value::String(text)) => split_tags(text),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn splits_and_trims_comma_text() {
        assert_eq!(split_tags(" colors, , shapes ,kids"), vec!["colors", "shapes", "kids"]);
    }

    #[test]
    fn blank_text_yields_no_tags() {
        assert!(split_tags("   ").is_empty());
        assert!(split_tags(",,,").is_empty());
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        assert_eq!(split_tags("a,b,a"), vec!["a", "b", "a"]);
    }

    #[test]
    fn list_input_is_cleaned() {
        let input = TagInput::List(vec![" fall ".into(), "".into(), "soup".into()]);
        assert_eq!(input.into_tags(), vec!["fall", "soup"]);
    }

    #[test]
    fn value_coercion_handles_every_shape() {
        assert_eq!(tags_from_value(Some(&json!(["a", 3, " b ", null]))), vec!["a", "3", "b"]);
        assert_eq!(tags_from_value(Some(&json!("x, y"))), vec!["x", "y"]);
        assert!(tags_from_value(Some(&json!({"a": 1}))).is_empty());
        assert!(tags_from_value(None).is_empty());
    }
}
