//! Sort state and the row comparison used for column sorting.

use std::cmp::Ordering;

use super::item::{CellValue, TableRow};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header indicator drawn after the active column's title.
    pub fn indicator(self) -> char {
        match self {
            Self::Ascending => '▲',
            Self::Descending => '▼',
        }
    }
}

/// Which column (by key) orders the rows, and in which direction.
///
/// `direction` only means something while `column` is set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn is_active(&self, key: &str) -> bool {
        self.column.as_deref() == Some(key)
    }

    /// Activate `key` ascending, or flip the direction if it is already active.
    pub fn toggle(&mut self, key: &str) -> SortDirection {
        if self.is_active(key) {
            self.direction = self.direction.flipped();
        } else {
            self.column = Some(key.to_string());
            self.direction = SortDirection::Ascending;
        }
        self.direction
    }
}

/// Rank used to order values of different kinds against each other.
fn kind_rank(value: &CellValue) -> u8 {
    match value {
        CellValue::Int(_) | CellValue::Float(_) => 0,
        CellValue::Text(_) => 1,
        CellValue::Bool(_) => 2,
    }
}

fn as_f64(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Int(n) => Some(*n as f64),
        CellValue::Float(n) => Some(*n),
        _ => None,
    }
}

/// Ascending comparison of two present values.
///
/// Same-kind values compare naturally and numbers compare numerically across
/// `Int`/`Float`. Values of different kinds order by kind so the result is
/// always a total order.
pub fn compare_values(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Int(x), CellValue::Int(y)) => x.cmp(y),
        (CellValue::Text(x), CellValue::Text(y)) => x.cmp(y),
        (CellValue::Bool(x), CellValue::Bool(y)) => x.cmp(y),
        _ => match (as_f64(a), as_f64(b)) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => kind_rank(a).cmp(&kind_rank(b)),
        },
    }
}

/// Compare two possibly-missing cells for `direction`.
///
/// Missing values sort after present ones in both directions.
pub fn compare_cells(
    a: Option<&CellValue>,
    b: Option<&CellValue>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Ascending => compare_values(a, b),
            SortDirection::Descending => compare_values(b, a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Indices of `rows` ordered by the `data_index` field.
///
/// The sort is stable: rows with equal values keep their input order.
pub fn sorted_indices<T: TableRow>(
    rows: &[T],
    data_index: &str,
    direction: SortDirection,
) -> Vec<usize> {
    let keys: Vec<Option<CellValue>> = rows.iter().map(|row| row.field(data_index)).collect();
    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| compare_cells(keys[a].as_ref(), keys[b].as_ref(), direction));
    order
}
