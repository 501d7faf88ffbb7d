//! Output templates.
//!
//! Templates are minijinja files in `templates/`, embedded at compile time.
//! Line breaks are written explicitly inside loop bodies; the final newline
//! of each file is dropped by the engine.
//!
//! Layout math (widths, truncation, padding) happens in `render.rs`. Templates
//! only pick styles and arrange pre-computed strings.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const RECORD_TEMPLATE: &str = include_str!("templates/record.tmp");
pub const STATUS_TEMPLATE: &str = include_str!("templates/status.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
