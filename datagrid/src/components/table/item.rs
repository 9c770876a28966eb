//! TableRow trait, cell values and column descriptors.

use std::fmt;
use std::hash::Hash;

/// Text drawn for a column whose field is missing from a row.
pub const MISSING_CELL_TEXT: &str = "undefined";

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A raw field value as exposed by a row.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Column descriptor.
///
/// `key` identifies the column within one table and is what sorting refers
/// to; `data_index` names the row field the column displays.
///
/// # Examples
///
/// ```
/// use datagrid::components::Column;
///
/// let columns = vec![
///     Column::new("name", "Name", "name").sortable(),
///     Column::new("phone", "Phone", "phone").width(12),
/// ];
/// assert!(columns[0].sortable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: String,
    pub title: String,
    pub data_index: String,
    pub sortable: bool,
    /// Fixed width in terminal columns; `None` sizes to content.
    pub width: Option<u16>,
    pub align: Alignment,
}

impl Column {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        data_index: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            data_index: data_index.into(),
            sortable: false,
            width: None,
            align: Alignment::Left,
        }
    }

    /// Make the column sortable.
    ///
    /// Sortable headers are underlined, show the sort indicator when active
    /// and toggle the sort when clicked.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}

/// Trait for records that can be displayed as rows in a [`Table`](super::Table).
///
/// The only structural requirement is a unique id; every other field is
/// reached by name through [`field`](TableRow::field).
///
/// ```
/// use datagrid::components::{CellValue, TableRow};
///
/// struct User {
///     id: u32,
///     name: String,
/// }
///
/// impl TableRow for User {
///     type Id = u32;
///
///     fn id(&self) -> u32 {
///         self.id
///     }
///
///     fn field(&self, name: &str) -> Option<CellValue> {
///         match name {
///             "id" => Some(self.id.into()),
///             "name" => Some(self.name.as_str().into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow {
    /// Identifier used for selection membership. Must be unique per table.
    type Id: Clone + Eq + Hash + fmt::Debug;

    fn id(&self) -> Self::Id;

    /// Value of the field called `name`, or `None` if the row has no such field.
    fn field(&self, name: &str) -> Option<CellValue>;

    /// Text drawn for this row under `column`.
    fn cell_text(&self, column: &Column) -> String {
        self.field(&column.data_index)
            .map(|value| value.to_string())
            .unwrap_or_else(|| MISSING_CELL_TEXT.to_string())
    }
}
