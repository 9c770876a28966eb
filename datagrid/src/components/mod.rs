//! UI components with self-managed state.
//!
//! Each component lives in its own module with:
//! - `state.rs` - the component state type
//! - `events.rs` - keyboard and mouse handling
//! - `render.rs` - layout and drawing into a [`Buffer`](crate::Buffer)
//! - `mod.rs` - public exports

pub mod events;
pub mod input;
pub mod selection;
pub mod table;

pub use events::{ComponentEvents, EventResult};
pub use input::{ChangeHandler, Input, InputKind, InputMessage, InputSize, InputVariant};
pub use selection::Selection;
pub use table::{
    Alignment, CellValue, Column, EMPTY_TEXT, LOADING_TEXT, MISSING_CELL_TEXT, RowSelectHandler,
    SortDirection, SortState, Table, TableRow, TableView,
};
