//! # Record References: Ids and Positions
//!
//! Operators refer to records either by id (`w-001`) or by their 1-based
//! position in the list (`3`). Ids are what the site uses, but they can be long
//! or, before validation, blank or duplicated. Positions are always available.
//!
//! ## Canonical Positions
//!
//! A record's position is its place in the *unfiltered* list. Filtering keeps
//! each record's canonical position, so `mugmark delete 2` always targets the
//! same record regardless of the current search.
//!
//! ## Resolution Order
//!
//! An input is first matched as an exact id. Only when no record has that id
//! is it read as a position. An id that looks like a number (`"2"`) therefore
//! wins over position 2.

use crate::error::{MugmarkError, Result};
use crate::model::Record;

/// A record paired with its canonical 1-based position.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecord {
    pub position: usize,
    pub record: Record,
    pub selected: bool,
}

/// Assigns canonical positions to the whole list and marks the selection.
pub fn index_records(items: &[Record], selected_id: Option<&str>) -> Vec<DisplayRecord> {
    items
        .iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            position: i + 1,
            record: record.clone(),
            selected: !record.id().is_empty() && Some(record.id()) == selected_id,
        })
        .collect()
}

/// How an operator input resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSelector {
    Id(String),
    Position(usize),
}

impl RecordSelector {
    /// Resolves `input` against `items`, returning a 0-based index.
    pub fn resolve(input: &str, items: &[Record]) -> Result<(RecordSelector, usize)> {
        let input = input.trim();
        if let Some(index) = items.iter().position(|r| !input.is_empty() && r.id() == input) {
            return Ok((RecordSelector::Id(input.to_string()), index));
        }
        match input.parse::<usize>() {
            Ok(position) if position >= 1 && position <= items.len() => {
                Ok((RecordSelector::Position(position), position - 1))
            }
            _ => Err(MugmarkError::NotFound(input.to_string())),
        }
    }
}

/// Converts a 1-based row position into an index for a list of `len` rows.
pub fn row_index(position: usize, len: usize, list: &str) -> Result<usize> {
    if position == 0 || position > len {
        return Err(MugmarkError::Field(format!(
            "{} has no row {} ({} row{})",
            list,
            position,
            len,
            if len == 1 { "" } else { "s" }
        )));
    }
    Ok(position - 1)
}
