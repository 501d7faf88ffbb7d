//! # Domain Model: Kinds and Records
//!
//! The site publishes three datasets, one JSON array per [`Kind`]:
//!
//! | Kind | Export file | Record |
//! |------|-------------|--------|
//! | `worksheets` | `worksheets.json` | [`Worksheet`] |
//! | `recipes` | `recipes.json` | [`Recipe`] |
//! | `comics` | `comics.json` | [`Comic`] |
//!
//! Every record carries `id`, `title` and `tags`. The remaining fields are
//! kind-specific. [`Record`] wraps the three shapes so the store can hold a
//! list of "whatever the active kind is" without dynamic field lookup.
//!
//! ## Serialization
//!
//! `Record` serializes untagged: the JSON written for a worksheet is exactly the
//! worksheet object, with fields in declaration order. That order is the
//! canonical export shape consumed by the public site, so field order in these
//! structs is part of the external contract.
//!
//! Deserialization goes through the per-kind structs (never through `Record`),
//! because the kind is always known from context. All structs use
//! `#[serde(default)]` so a partially written snapshot still restores.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MugmarkError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Worksheets,
    Recipes,
    Comics,
}

impl Kind {
    pub const ALL: [Kind; 3] = [Kind::Worksheets, Kind::Recipes, Kind::Comics];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Worksheets => "worksheets",
            Kind::Recipes => "recipes",
            Kind::Comics => "comics",
        }
    }

    /// Infers the kind from a canonical export filename (`recipes.json` → recipes).
    pub fn from_filename(name: &str) -> Option<Kind> {
        let lower = name.to_lowercase();
        Kind::ALL
            .into_iter()
            .find(|kind| lower == kind.schema().filename())
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = MugmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "worksheets" | "worksheet" | "w" => Ok(Kind::Worksheets),
            "recipes" | "recipe" | "r" => Ok(Kind::Recipes),
            "comics" | "comic" | "c" => Ok(Kind::Comics),
            other => Err(MugmarkError::Api(format!(
                "Unknown kind: {} (expected worksheets, recipes or comics)",
                other
            ))),
        }
    }
}

/// A downloadable attachment on a worksheet. `url` is used verbatim as a link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Worksheet {
    pub id: String,
    pub title: String,
    /// Thumbnail shown on listing pages.
    pub image: String,
    /// Gallery images. Blank rows may exist while editing.
    pub images: Vec<String>,
    pub description: String,
    pub tags: Vec<String>,
    pub files: Vec<FileLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub image: String,
    pub alt: String,
    pub description: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

/// Dictionary-style caption shown under a comic.
///
/// Never persisted in an all-empty state: see [`Dictionary::is_empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dictionary {
    pub term: String,
    pub phonetic: String,
    pub pos: String,
    pub definitions: Vec<String>,
}

impl Dictionary {
    /// True when every text field is blank and there are no definition rows.
    ///
    /// A blank definition row counts as content: it is an editing placeholder.
    pub fn is_empty(&self) -> bool {
        self.term.trim().is_empty()
            && self.phonetic.trim().is_empty()
            && self.pos.trim().is_empty()
            && self.definitions.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comic {
    pub id: String,
    pub title: String,
    pub image: String,
    pub alt: String,
    pub description: String,
    pub tags: Vec<String>,
    pub dictionary: Option<Dictionary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Worksheet(Worksheet),
    Recipe(Recipe),
    Comic(Comic),
}

macro_rules! common_field {
    ($self:ident, $field:ident) => {
        match $self {
            Record::Worksheet(r) => &r.$field,
            Record::Recipe(r) => &r.$field,
            Record::Comic(r) => &r.$field,
        }
    };
    (mut $self:ident, $field:ident) => {
        match $self {
            Record::Worksheet(r) => &mut r.$field,
            Record::Recipe(r) => &mut r.$field,
            Record::Comic(r) => &mut r.$field,
        }
    };
}

impl Record {
    pub fn kind(&self) -> Kind {
        match self {
            Record::Worksheet(_) => Kind::Worksheets,
            Record::Recipe(_) => Kind::Recipes,
            Record::Comic(_) => Kind::Comics,
        }
    }

    pub fn id(&self) -> &str {
        common_field!(self, id)
    }

    pub fn title(&self) -> &str {
        common_field!(self, title)
    }

    pub fn tags(&self) -> &[String] {
        common_field!(self, tags)
    }

    pub fn description(&self) -> &str {
        common_field!(self, description)
    }

    pub fn image(&self) -> &str {
        common_field!(self, image)
    }

    pub fn id_mut(&mut self) -> &mut String {
        common_field!(mut self, id)
    }

    pub fn title_mut(&mut self) -> &mut String {
        common_field!(mut self, title)
    }

    pub fn tags_mut(&mut self) -> &mut Vec<String> {
        common_field!(mut self, tags)
    }

    pub fn description_mut(&mut self) -> &mut String {
        common_field!(mut self, description)
    }

    pub fn image_mut(&mut self) -> &mut String {
        common_field!(mut self, image)
    }

    /// Title for display; empty titles render as `(untitled)`.
    pub fn display_title(&self) -> &str {
        if self.title().is_empty() {
            "(untitled)"
        } else {
            self.title()
        }
    }
}
