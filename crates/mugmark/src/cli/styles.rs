//! Styles for the mugmark CLI.
//!
//! Templates only ever name a style by what the text *is* (`list-id`,
//! `draft-dirty`); the palette behind those names lives here. The theme is
//! adaptive: `outstanding` picks the light or dark palette from the terminal.
//!
//! Every name a template can reference must be registered in both palettes.

use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, AdaptiveTheme, Theme};

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const TITLE: &str = "title";
    pub const LABEL: &str = "label";
    // List rows
    pub const SELECTED: &str = "selected";
    pub const LIST_INDEX: &str = "list-index";
    pub const LIST_TITLE: &str = "list-title";
    pub const UNTITLED: &str = "untitled";
    pub const LIST_ID: &str = "list-id";
    pub const LIST_TAGS: &str = "list-tags";
    // Status
    pub const DRAFT_CLEAN: &str = "draft-clean";
    pub const DRAFT_DIRTY: &str = "draft-dirty";
}

pub static MUGMARK_THEME: Lazy<AdaptiveTheme> =
    Lazy::new(|| AdaptiveTheme::new(build_light_theme(), build_dark_theme()));

struct Palette {
    regular: Style,
    muted: Style,
    faint: Style,
    accent: Style,
}

fn build_theme(p: Palette) -> Theme {
    Theme::new()
        .add(names::MUTED, p.muted.clone())
        .add(names::FAINT, p.faint.clone())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, p.muted.clone())
        .add(names::TITLE, p.regular.clone().bold())
        .add(names::LABEL, p.muted.clone().bold())
        .add(names::SELECTED, p.accent.clone().bold())
        .add(names::LIST_INDEX, p.accent)
        .add(names::LIST_TITLE, p.regular)
        .add(names::UNTITLED, p.muted.clone().italic())
        .add(names::LIST_ID, p.muted)
        .add(names::LIST_TAGS, p.faint)
        .add(names::DRAFT_CLEAN, Style::new().green())
        .add(names::DRAFT_DIRTY, Style::new().yellow())
}

fn build_light_theme() -> Theme {
    build_theme(Palette {
        regular: Style::new().black(),
        muted: Style::new().color256(rgb_to_ansi256((115, 115, 115))),
        faint: Style::new().color256(rgb_to_ansi256((173, 173, 173))),
        accent: Style::new().color256(rgb_to_ansi256((176, 92, 36))),
    })
}

fn build_dark_theme() -> Theme {
    build_theme(Palette {
        regular: Style::new().white(),
        muted: Style::new().color256(rgb_to_ansi256((180, 180, 180))),
        faint: Style::new().color256(rgb_to_ansi256((110, 110, 110))),
        accent: Style::new().color256(rgb_to_ansi256((240, 160, 90))),
    })
}
