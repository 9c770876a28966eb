//! Input component - a labelled single-line text field.
//!
//! Supports helper and error messages, filled/outlined/ghost variants,
//! three sizes, password masking with a reveal toggle, and an optional clear
//! affordance. Every value change is reported through a plain
//! `on_change(&str)` callback.

mod events;
mod render;
mod state;

pub use render::{CLEAR_GLYPH, HIDE_LABEL, InputLayout, REVEAL_LABEL};
pub use state::{ChangeHandler, Input, InputKind, InputMessage, InputSize, InputVariant};
