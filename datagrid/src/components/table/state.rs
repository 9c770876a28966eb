//! Table component state.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::components::selection::Selection;

use super::item::{Column, TableRow};
use super::sort::{SortDirection, SortState, sorted_indices};

/// Callback receiving the full selection, in selection order.
pub type RowSelectHandler<T> = Box<dyn FnMut(&[&T])>;

/// What a table shows for its current inputs.
///
/// Exactly one applies, in priority order loading > empty > populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableView {
    Loading,
    Empty,
    Populated,
}

/// A sortable, selectable table over rows of type `T`.
///
/// The table never reorders the caller's rows; sorting produces a
/// permutation used for display. Sort and selection state live as long as
/// the `Table` value and are never reset in place.
///
/// # Example
///
/// ```
/// use datagrid::components::{CellValue, Column, Table, TableRow};
///
/// #[derive(Debug)]
/// struct Item {
///     id: u32,
///     name: &'static str,
/// }
///
/// impl TableRow for Item {
///     type Id = u32;
///     fn id(&self) -> u32 {
///         self.id
///     }
///     fn field(&self, name: &str) -> Option<CellValue> {
///         (name == "name").then(|| self.name.into())
///     }
/// }
///
/// let mut table = Table::new(vec![Column::new("name", "Name", "name").sortable()])
///     .with_rows(vec![Item { id: 1, name: "B" }, Item { id: 2, name: "A" }])
///     .selectable(true);
///
/// table.toggle_sort("name");
/// let names: Vec<_> = table.rows_in_display_order().iter().map(|r| r.name).collect();
/// assert_eq!(names, ["A", "B"]);
/// ```
pub struct Table<T: TableRow> {
    pub(super) columns: Vec<Column>,
    pub(super) rows: Vec<T>,
    pub(super) loading: bool,
    pub(super) selectable: bool,
    pub(super) sort: SortState,
    pub(super) selection: Selection<T::Id>,
    pub(super) on_row_select: Option<RowSelectHandler<T>>,
    /// Display position of the keyboard cursor.
    pub(super) cursor: Option<usize>,
    /// Column index of the header cursor.
    pub(super) header_cursor: usize,
}

impl<T: TableRow> fmt::Debug for Table<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("loading", &self.loading)
            .field("selectable", &self.selectable)
            .field("sort", &self.sort)
            .field("selection", &self.selection)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl<T: TableRow> Table<T> {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            loading: false,
            selectable: false,
            sort: SortState::default(),
            selection: Selection::new(),
            on_row_select: None,
            cursor: None,
            header_cursor: 0,
        }
    }

    pub fn with_rows(mut self, rows: Vec<T>) -> Self {
        self.set_rows(rows);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Register the selection callback. It runs synchronously after every
    /// toggle with the complete selection.
    pub fn on_row_select(mut self, handler: impl FnMut(&[&T]) + 'static) -> Self {
        self.on_row_select = Some(Box::new(handler));
        self
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// Replace the rows.
    ///
    /// Selected ids that no longer appear in `rows` are dropped; the rest keep
    /// their selection order. When anything was dropped, `on_row_select` is
    /// called with the remaining selection. Sort state is kept.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        self.rows = rows;

        let ids: HashSet<T::Id> = self.rows.iter().map(TableRow::id).collect();
        let dropped = self.selection.retain(|id| ids.contains(id));
        if dropped > 0 {
            log::debug!("dropped {dropped} selected ids no longer present in rows");
            self.notify_selection();
        }

        self.cursor = match self.rows.len() {
            0 => None,
            len => Some(self.cursor.unwrap_or(0).min(len - 1)),
        };
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Rows in the order the caller supplied them.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn view(&self) -> TableView {
        if self.loading {
            TableView::Loading
        } else if self.rows.is_empty() {
            TableView::Empty
        } else {
            TableView::Populated
        }
    }

    /// Whether sort and selection interactions are currently available.
    pub fn is_interactive(&self) -> bool {
        self.view() == TableView::Populated
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Toggle sorting on the column with `key`.
    ///
    /// Unknown and non-sortable columns are a no-op and return `None`.
    pub fn toggle_sort(&mut self, key: &str) -> Option<SortDirection> {
        let column = self.columns.iter().find(|c| c.key == key)?;
        if !column.sortable {
            return None;
        }

        let direction = self.sort.toggle(key);
        log::debug!("table sorted by {key} {direction:?}");
        Some(direction)
    }

    /// Row indices in display order.
    pub fn display_order(&self) -> Vec<usize> {
        let active = self
            .sort
            .column
            .as_deref()
            .and_then(|key| self.columns.iter().find(|c| c.key == key));

        match active {
            Some(column) => sorted_indices(&self.rows, &column.data_index, self.sort.direction),
            None => (0..self.rows.len()).collect(),
        }
    }

    /// Rows in display order. The caller's rows are left untouched.
    pub fn rows_in_display_order(&self) -> Vec<&T> {
        self.display_order()
            .into_iter()
            .map(|idx| &self.rows[idx])
            .collect()
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn is_selected(&self, id: &T::Id) -> bool {
        self.selection.contains(id)
    }

    pub fn selected_ids(&self) -> &[T::Id] {
        self.selection.ids()
    }

    /// Selected rows in selection order.
    pub fn selected_rows(&self) -> Vec<&T> {
        resolve_selected(&self.rows, &self.selection)
    }

    /// Toggle selection of the row with `id` and notify `on_row_select`.
    ///
    /// Returns `false` without notifying when the table is not selectable,
    /// not populated, or has no row with `id`.
    pub fn toggle_row(&mut self, id: &T::Id) -> bool {
        if !self.selectable || !self.is_interactive() {
            return false;
        }
        if !self.rows.iter().any(|row| &row.id() == id) {
            return false;
        }

        let selected = self.selection.toggle(id);
        log::debug!(
            "row {id:?} {}, {} selected",
            if selected { "selected" } else { "deselected" },
            self.selection.len()
        );

        self.notify_selection();
        true
    }

    fn notify_selection(&mut self) {
        if let Some(handler) = self.on_row_select.as_mut() {
            let rows = resolve_selected(&self.rows, &self.selection);
            handler(&rows);
        }
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    /// Display position of the row cursor.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Column index of the header cursor.
    pub fn header_cursor(&self) -> usize {
        self.header_cursor
    }
}

/// Map selected ids to rows, in selection order. Duplicate ids resolve to
/// their first row.
fn resolve_selected<'a, T: TableRow>(rows: &'a [T], selection: &Selection<T::Id>) -> Vec<&'a T> {
    let mut by_id: HashMap<T::Id, &'a T> = HashMap::with_capacity(rows.len());
    for row in rows {
        by_id.entry(row.id()).or_insert(row);
    }
    selection
        .ids()
        .iter()
        .filter_map(|id| by_id.get(id).copied())
        .collect()
}
