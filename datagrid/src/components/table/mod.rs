//! Table component - columns, sortable headers and id-based row selection.
//!
//! The Table component provides:
//! - Loading and empty placeholders that replace the whole table
//! - Sortable columns (click or `Enter` on a header toggles ascending/descending)
//! - Multi-row selection with a checkbox column, tracked by row id
//! - An `on_row_select` callback receiving the complete selection
//!
//! # Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use datagrid::components::{CellValue, Column, Table, TableRow};
//!
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! impl TableRow for User {
//!     type Id = u32;
//!     fn id(&self) -> u32 {
//!         self.id
//!     }
//!     fn field(&self, name: &str) -> Option<CellValue> {
//!         match name {
//!             "name" => Some(self.name.clone().into()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let picked = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&picked);
//!
//! let mut table = Table::new(vec![Column::new("name", "Name", "name").sortable()])
//!     .with_rows(vec![
//!         User { id: 1, name: "B".into() },
//!         User { id: 2, name: "A".into() },
//!     ])
//!     .selectable(true)
//!     .on_row_select(move |rows: &[&User]| {
//!         *sink.borrow_mut() = rows.iter().map(|u| u.id).collect();
//!     });
//!
//! table.toggle_row(&2);
//! assert_eq!(*picked.borrow(), vec![2]);
//! ```

mod events;
mod item;
mod render;
mod sort;
mod state;

pub use item::{Alignment, CellValue, Column, MISSING_CELL_TEXT, TableRow};
pub use render::{ColumnSpan, EMPTY_TEXT, LOADING_TEXT, TableLayout};
pub use sort::{SortDirection, SortState, compare_cells, compare_values, sorted_indices};
pub use state::{RowSelectHandler, Table, TableView};
