//! Terminal data-grid components.
//!
//! `datagrid` provides a generic sortable/selectable [`Table`](components::Table),
//! a styled text [`Input`](components::Input), a small synchronous form
//! [`validation`] layer, and the cell buffer and terminal plumbing they draw
//! through.

pub mod buffer;
pub mod color;
pub mod components;
pub mod event;
pub mod layout;
pub mod style;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod validation;

pub use buffer::{Buffer, Cell};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use layout::Rect;
pub use terminal::Terminal;

pub mod prelude {
    pub use crate::buffer::Buffer;
    pub use crate::color::{Color, Rgb};
    pub use crate::components::{
        Alignment, CellValue, Column, ComponentEvents, EventResult, Input, InputKind, InputMessage,
        InputSize, InputVariant, Selection, SortDirection, SortState, Table, TableRow, TableView,
    };
    pub use crate::event::{Event, Key, Modifiers, MouseButton};
    pub use crate::layout::Rect;
    pub use crate::style::{Style, TextStyle};
    pub use crate::theme::{Theme, ThemeMode};
    pub use crate::validation::{FieldError, Validatable, ValidationResult, Validator};
}
