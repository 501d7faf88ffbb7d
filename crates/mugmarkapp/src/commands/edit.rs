//! Field and row edits on the selected record.
//!
//! Edits accept any text. Nothing is validated here beyond "does this kind
//! have that field"; completeness is checked at export time. Values are stored
//! as typed, untrimmed, except where noted:
//!
//! - `tags`: comma-separated, trimmed, blanks dropped.
//! - `ingredients`, `definitions` (whole-field set): one entry per line,
//!   trimmed, blanks dropped.
//!
//! ## Rows
//!
//! List fields (`images`, `files`, `ingredients`, `definitions`) also support
//! row edits by 1-based position. Adding appends a blank row. Removing shifts
//! every later row up by one, so positions are re-read from the list after
//! each removal.
//!
//! ## Comic Dictionary
//!
//! Any dictionary edit first materializes an empty dictionary if the comic has
//! none, applies the change, then collapses the dictionary back to `None` if
//! it ended up empty (see [`Dictionary::is_empty`]).

use super::{selected_display, CmdMessage, CmdResult};
use crate::error::{MugmarkError, Result};
use crate::index::row_index;
use crate::model::{Comic, Dictionary, FileLink, Kind, Record};
use crate::store::{DocumentStore, SnapshotSlot};
use crate::tags::TagInput;
use std::fmt;
use std::str::FromStr;

/// A scalar or whole-list field that `set` can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    Title,
    Description,
    Tags,
    Image,
    Alt,
    Instructions,
    Ingredients,
    Term,
    Phonetic,
    Pos,
    Definitions,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Title => "title",
            Field::Description => "description",
            Field::Tags => "tags",
            Field::Image => "image",
            Field::Alt => "alt",
            Field::Instructions => "instructions",
            Field::Ingredients => "ingredients",
            Field::Term => "term",
            Field::Phonetic => "phonetic",
            Field::Pos => "pos",
            Field::Definitions => "definitions",
        }
    }

    /// Fields editable for `kind`, in form order.
    pub fn for_kind(kind: Kind) -> &'static [Field] {
        match kind {
            Kind::Worksheets => &[
                Field::Id,
                Field::Title,
                Field::Image,
                Field::Description,
                Field::Tags,
            ],
            Kind::Recipes => &[
                Field::Id,
                Field::Title,
                Field::Image,
                Field::Alt,
                Field::Description,
                Field::Tags,
                Field::Ingredients,
                Field::Instructions,
            ],
            Kind::Comics => &[
                Field::Id,
                Field::Title,
                Field::Image,
                Field::Alt,
                Field::Description,
                Field::Tags,
                Field::Term,
                Field::Phonetic,
                Field::Pos,
                Field::Definitions,
            ],
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = MugmarkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(Field::Id),
            "title" => Ok(Field::Title),
            "description" => Ok(Field::Description),
            "tags" => Ok(Field::Tags),
            "image" | "thumbnail" => Ok(Field::Image),
            "alt" => Ok(Field::Alt),
            "instructions" => Ok(Field::Instructions),
            "ingredients" => Ok(Field::Ingredients),
            "term" => Ok(Field::Term),
            "phonetic" => Ok(Field::Phonetic),
            "pos" => Ok(Field::Pos),
            "definitions" => Ok(Field::Definitions),
            other => Err(MugmarkError::Field(format!("Unknown field: {}", other))),
        }
    }
}

/// A list field with row-level editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowList {
    Images,
    Files,
    Ingredients,
    Definitions,
}

impl RowList {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowList::Images => "images",
            RowList::Files => "files",
            RowList::Ingredients => "ingredients",
            RowList::Definitions => "definitions",
        }
    }

    pub fn for_kind(kind: Kind) -> &'static [RowList] {
        match kind {
            Kind::Worksheets => &[RowList::Images, RowList::Files],
            Kind::Recipes => &[RowList::Ingredients],
            Kind::Comics => &[RowList::Definitions],
        }
    }
}

impl fmt::Display for RowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowList {
    type Err = MugmarkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "images" | "image" => Ok(RowList::Images),
            "files" | "file" => Ok(RowList::Files),
            "ingredients" | "ingredient" => Ok(RowList::Ingredients),
            "definitions" | "definition" => Ok(RowList::Definitions),
            other => Err(MugmarkError::Field(format!("Unknown list: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Set { field: Field, value: String },
    Tags(TagInput),
    AddRow(RowList),
    RemoveRow { list: RowList, position: usize },
    SetRow { list: RowList, position: usize, value: String },
    /// Updates one `files` row; `None` leaves that half untouched.
    SetFile {
        position: usize,
        label: Option<String>,
        url: Option<String>,
    },
}

pub fn run<S: SnapshotSlot>(store: &mut DocumentStore<S>, edit: FieldEdit) -> Result<CmdResult> {
    let description = store.edit_selected(|record| apply(record, &edit))?;

    let mut result = CmdResult::default().with_affected_records(selected_display(store));
    result.add_message(CmdMessage::success(description));
    if store.selected().is_none() {
        result.add_message(CmdMessage::warning(
            "The record now has no id and can no longer be selected. Use its position to reach it.",
        ));
    }
    Ok(result)
}

/// Applies `edit` to `record`, returning a short description of the change.
///
/// Input is checked before anything is written, so a failed edit leaves the
/// record untouched.
pub fn apply(record: &mut Record, edit: &FieldEdit) -> Result<String> {
    match edit {
        FieldEdit::Set { field, value } => set_field(record, *field, value),
        FieldEdit::Tags(input) => {
            *record.tags_mut() = input.clone().into_tags();
            Ok("Updated tags".to_string())
        }
        FieldEdit::AddRow(list) => add_row(record, *list),
        FieldEdit::RemoveRow { list, position } => remove_row(record, *list, *position),
        FieldEdit::SetRow {
            list,
            position,
            value,
        } => set_row(record, *list, *position, value),
        FieldEdit::SetFile {
            position,
            label,
            url,
        } => set_file(record, *position, label.as_deref(), url.as_deref()),
    }
}

fn no_field(kind: Kind, name: &str) -> MugmarkError {
    let known: Vec<&str> = Field::for_kind(kind).iter().map(Field::as_str).collect();
    MugmarkError::Field(format!(
        "{} have no field '{}' (fields: {})",
        kind,
        name,
        known.join(", ")
    ))
}

fn no_list(kind: Kind, name: &str) -> MugmarkError {
    let known: Vec<&str> = RowList::for_kind(kind).iter().map(RowList::as_str).collect();
    MugmarkError::Field(format!(
        "{} have no list '{}' (lists: {})",
        kind,
        name,
        known.join(", ")
    ))
}

/// Splits textarea-style input: one entry per line, trimmed, blanks dropped.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn set_field(record: &mut Record, field: Field, value: &str) -> Result<String> {
    let kind = record.kind();
    let value = value.to_string();
    match (record, field) {
        (record, Field::Id) => *record.id_mut() = value,
        (record, Field::Title) => *record.title_mut() = value,
        (record, Field::Description) => *record.description_mut() = value,
        (record, Field::Image) => *record.image_mut() = value,
        (record, Field::Tags) => *record.tags_mut() = TagInput::Text(value).into_tags(),
        (Record::Recipe(r), Field::Alt) => r.alt = value,
        (Record::Comic(c), Field::Alt) => c.alt = value,
        (Record::Recipe(r), Field::Instructions) => r.instructions = value,
        (Record::Recipe(r), Field::Ingredients) => r.ingredients = split_lines(&value),
        (Record::Comic(c), Field::Term) => edit_dictionary(c, |d| d.term = value),
        (Record::Comic(c), Field::Phonetic) => edit_dictionary(c, |d| d.phonetic = value),
        (Record::Comic(c), Field::Pos) => edit_dictionary(c, |d| d.pos = value),
        (Record::Comic(c), Field::Definitions) => {
            edit_dictionary(c, |d| d.definitions = split_lines(&value))
        }
        (_, field) => return Err(no_field(kind, field.as_str())),
    }
    Ok(format!("Updated {}", field))
}

fn add_row(record: &mut Record, list: RowList) -> Result<String> {
    let kind = record.kind();
    let len = match (record, list) {
        (Record::Worksheet(w), RowList::Images) => {
            w.images.push(String::new());
            w.images.len()
        }
        (Record::Worksheet(w), RowList::Files) => {
            w.files.push(FileLink::default());
            w.files.len()
        }
        (Record::Recipe(r), RowList::Ingredients) => {
            r.ingredients.push(String::new());
            r.ingredients.len()
        }
        (Record::Comic(c), RowList::Definitions) => {
            let mut len = 0;
            edit_dictionary(c, |d| {
                d.definitions.push(String::new());
                len = d.definitions.len();
            });
            len
        }
        (_, list) => return Err(no_list(kind, list.as_str())),
    };
    Ok(format!("Added {} row {}", list, len))
}

fn remove_row(record: &mut Record, list: RowList, position: usize) -> Result<String> {
    let kind = record.kind();
    match (record, list) {
        (Record::Worksheet(w), RowList::Images) => {
            let i = row_index(position, w.images.len(), list.as_str())?;
            w.images.remove(i);
        }
        (Record::Worksheet(w), RowList::Files) => {
            let i = row_index(position, w.files.len(), list.as_str())?;
            w.files.remove(i);
        }
        (Record::Recipe(r), RowList::Ingredients) => {
            let i = row_index(position, r.ingredients.len(), list.as_str())?;
            r.ingredients.remove(i);
        }
        (Record::Comic(c), RowList::Definitions) => {
            let len = definitions_len(c);
            let i = row_index(position, len, list.as_str())?;
            edit_dictionary(c, |d| {
                d.definitions.remove(i);
            });
        }
        (_, list) => return Err(no_list(kind, list.as_str())),
    }
    Ok(format!("Removed {} row {}", list, position))
}

fn set_row(record: &mut Record, list: RowList, position: usize, value: &str) -> Result<String> {
    let kind = record.kind();
    let value = value.to_string();
    match (record, list) {
        (Record::Worksheet(w), RowList::Images) => {
            let i = row_index(position, w.images.len(), list.as_str())?;
            w.images[i] = value;
        }
        (Record::Worksheet(w), RowList::Files) => {
            let i = row_index(position, w.files.len(), list.as_str())?;
            w.files[i].url = value;
        }
        (Record::Recipe(r), RowList::Ingredients) => {
            let i = row_index(position, r.ingredients.len(), list.as_str())?;
            r.ingredients[i] = value;
        }
        (Record::Comic(c), RowList::Definitions) => {
            let i = row_index(position, definitions_len(c), list.as_str())?;
            edit_dictionary(c, |d| d.definitions[i] = value);
        }
        (_, list) => return Err(no_list(kind, list.as_str())),
    }
    Ok(format!("Updated {} row {}", list, position))
}

fn set_file(
    record: &mut Record,
    position: usize,
    label: Option<&str>,
    url: Option<&str>,
) -> Result<String> {
    let kind = record.kind();
    let Record::Worksheet(w) = record else {
        return Err(no_list(kind, "files"));
    };
    let i = row_index(position, w.files.len(), "files")?;
    let file = &mut w.files[i];
    if let Some(label) = label {
        file.label = label.to_string();
    }
    if let Some(url) = url {
        file.url = url.to_string();
    }
    Ok(format!("Updated files row {}", position))
}

fn definitions_len(comic: &Comic) -> usize {
    comic
        .dictionary
        .as_ref()
        .map(|d| d.definitions.len())
        .unwrap_or(0)
}

/// Materializes the dictionary, applies `change`, then collapses it if empty.
pub fn edit_dictionary(comic: &mut Comic, change: impl FnOnce(&mut Dictionary)) {
    let dictionary = comic.dictionary.get_or_insert_with(Dictionary::default);
    change(dictionary);
    if dictionary.is_empty() {
        comic.dictionary = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemSlot;
    use serde_json::json;

    fn store_with(kind: Kind, raw: serde_json::Value) -> DocumentStore<MemSlot> {
        let mut store = DocumentStore::init(MemSlot::new(), kind);
        store.load(kind, &[raw], None);
        store
    }

    fn set(field: Field, value: &str) -> FieldEdit {
        FieldEdit::Set {
            field,
            value: value.to_string(),
        }
    }

    fn selected_comic(store: &DocumentStore<MemSlot>) -> Comic {
        match store.selected() {
            Some(Record::Comic(c)) => c.clone(),
            other => panic!("expected comic, got {:?}", other),
        }
    }

    #[test]
    fn set_title_writes_through_and_marks_dirty() {
        let mut store = store_with(Kind::Worksheets, json!({"id": "w-1"}));
        let result = run(&mut store, set(Field::Title, "Colors ")).unwrap();
        assert_eq!(store.selected().unwrap().title(), "Colors ");
        assert!(store.is_dirty());
        assert_eq!(result.affected_records.len(), 1);
        assert_eq!(result.messages[0].content, "Updated title");
    }

    #[test]
    fn tags_accept_text_and_lists() {
        let mut store = store_with(Kind::Recipes, json!({"id": "r-1"}));
        run(&mut store, set(Field::Tags, " soup, ,winter ")).unwrap();
        assert_eq!(store.selected().unwrap().tags(), ["soup", "winter"]);

        run(
            &mut store,
            FieldEdit::Tags(TagInput::List(vec![" a ".into(), "".into()])),
        )
        .unwrap();
        assert_eq!(store.selected().unwrap().tags(), ["a"]);
    }

    #[test]
    fn ingredients_text_is_split_per_line() {
        let mut store = store_with(Kind::Recipes, json!({"id": "r-1"}));
        run(&mut store, set(Field::Ingredients, "salt\r\n\n  pepper \n")).unwrap();
        let Some(Record::Recipe(r)) = store.selected() else {
            panic!("expected recipe");
        };
        assert_eq!(r.ingredients, vec!["salt", "pepper"]);
    }

    #[test]
    fn field_not_on_kind_is_rejected_without_change() {
        let mut store = store_with(Kind::Worksheets, json!({"id": "w-1"}));
        let err = run(&mut store, set(Field::Alt, "x")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Field error: worksheets have no field 'alt' (fields: id, title, image, description, tags)"
        );
        assert!(!store.is_dirty());
    }

    #[test]
    fn edit_without_selection_fails() {
        let mut store = DocumentStore::init(MemSlot::new(), Kind::Comics);
        assert!(matches!(
            run(&mut store, set(Field::Title, "x")),
            Err(MugmarkError::NoSelection)
        ));
    }

    #[test]
    fn removing_middle_row_shifts_later_rows() {
        let mut store = store_with(
            Kind::Worksheets,
            json!({"id": "w-1", "images": ["/a.png", "/b.png", "/c.png"]}),
        );
        run(
            &mut store,
            FieldEdit::RemoveRow {
                list: RowList::Images,
                position: 2,
            },
        )
        .unwrap();
        run(
            &mut store,
            FieldEdit::SetRow {
                list: RowList::Images,
                position: 2,
                value: "/c2.png".into(),
            },
        )
        .unwrap();
        let Some(Record::Worksheet(w)) = store.selected() else {
            panic!("expected worksheet");
        };
        assert_eq!(w.images, vec!["/a.png", "/c2.png"]);
    }

    #[test]
    fn row_out_of_range_is_rejected() {
        let mut store = store_with(Kind::Worksheets, json!({"id": "w-1"}));
        let err = run(
            &mut store,
            FieldEdit::RemoveRow {
                list: RowList::Files,
                position: 1,
            },
        )
        .unwrap_err();
        assert!(matches!(err, MugmarkError::Field(_)));
    }

    #[test]
    fn file_rows_edit_label_and_url_independently() {
        let mut store = store_with(Kind::Worksheets, json!({"id": "w-1"}));
        run(&mut store, FieldEdit::AddRow(RowList::Files)).unwrap();
        run(
            &mut store,
            FieldEdit::SetFile {
                position: 1,
                label: Some("PDF".into()),
                url: None,
            },
        )
        .unwrap();
        run(
            &mut store,
            FieldEdit::SetFile {
                position: 1,
                label: None,
                url: Some("/files/a.pdf".into()),
            },
        )
        .unwrap();
        let Some(Record::Worksheet(w)) = store.selected() else {
            panic!("expected worksheet");
        };
        assert_eq!(
            w.files,
            vec![FileLink {
                label: "PDF".into(),
                url: "/files/a.pdf".into()
            }]
        );
    }

    #[test]
    fn dictionary_materializes_then_collapses() {
        let mut store = store_with(Kind::Comics, json!({"id": "c-1"}));
        assert!(selected_comic(&store).dictionary.is_none());

        run(&mut store, set(Field::Term, "mug")).unwrap();
        assert_eq!(selected_comic(&store).dictionary.unwrap().term, "mug");

        run(&mut store, set(Field::Term, "")).unwrap();
        assert!(selected_comic(&store).dictionary.is_none());
    }

    #[test]
    fn whitespace_only_dictionary_collapses() {
        let mut store = store_with(Kind::Comics, json!({"id": "c-1"}));
        run(&mut store, set(Field::Pos, "   ")).unwrap();
        assert!(selected_comic(&store).dictionary.is_none());
    }

    #[test]
    fn blank_definition_row_keeps_dictionary() {
        let mut store = store_with(Kind::Comics, json!({"id": "c-1"}));
        run(&mut store, FieldEdit::AddRow(RowList::Definitions)).unwrap();
        let dict = selected_comic(&store).dictionary.unwrap();
        assert_eq!(dict.definitions, vec![""]);

        run(
            &mut store,
            FieldEdit::RemoveRow {
                list: RowList::Definitions,
                position: 1,
            },
        )
        .unwrap();
        assert!(selected_comic(&store).dictionary.is_none());
    }

    #[test]
    fn definitions_text_replaces_rows() {
        let mut store = store_with(
            Kind::Comics,
            json!({"id": "c-1", "dictionary": {"term": "mug", "definitions": ["old"]}}),
        );
        run(&mut store, set(Field::Definitions, "a cup\n\nfor coffee")).unwrap();
        assert_eq!(
            selected_comic(&store).dictionary.unwrap().definitions,
            vec!["a cup", "for coffee"]
        );
    }

    #[test]
    fn changing_id_keeps_selection() {
        let mut store = store_with(Kind::Comics, json!({"id": "c-1"}));
        run(&mut store, set(Field::Id, "c-new")).unwrap();
        assert_eq!(store.selected_id(), Some("c-new"));
    }

    #[test]
    fn taken_id_is_rejected_and_later_edits_hit_the_same_record() {
        let mut store = DocumentStore::init(MemSlot::new(), Kind::Recipes);
        store.load(
            Kind::Recipes,
            &[json!({"id": "a", "title": "A"}), json!({"id": "b", "title": "B"})],
            None,
        );
        store.select("b");

        let err = run(&mut store, set(Field::Id, "a")).unwrap_err();
        assert_eq!(err.to_string(), "Field error: Another record already has id 'a'");

        run(&mut store, set(Field::Title, "EDITED")).unwrap();
        let titles: Vec<&str> = store.items().iter().map(|r| r.title()).collect();
        assert_eq!(titles, vec!["A", "EDITED"]);
        assert_eq!(store.selected_id(), Some("b"));
    }

    #[test]
    fn blanking_id_warns() {
        let mut store = store_with(Kind::Comics, json!({"id": "c-1"}));
        let result = run(&mut store, set(Field::Id, "")).unwrap();
        assert!(store.selected().is_none());
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == crate::commands::MessageLevel::Warning));
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("thumbnail".parse::<Field>().unwrap(), Field::Image);
        assert_eq!("Definition".parse::<RowList>().unwrap(), RowList::Definitions);
        assert!("colour".parse::<Field>().is_err());
    }
}
