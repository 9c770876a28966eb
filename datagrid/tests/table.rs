//! Tests for Table sorting and selection.

use std::cell::RefCell;
use std::rc::Rc;

use datagrid::components::{
    CellValue, Column, ComponentEvents, EventResult, SortDirection, Table, TableRow, TableView,
};
use datagrid::{Key, Modifiers, Rect};

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: u32,
    name: &'static str,
    age: Option<i64>,
}

impl TableRow for Row {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "name" => Some(self.name.into()),
            "age" => self.age.map(CellValue::Int),
            _ => None,
        }
    }
}

fn row(id: u32, name: &'static str) -> Row {
    Row {
        id,
        name,
        age: None,
    }
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name", "name").sortable(),
        Column::new("age", "Age", "age").sortable(),
        Column::new("note", "Note", "note"),
    ]
}

fn names(table: &Table<Row>) -> Vec<&'static str> {
    table.rows_in_display_order().iter().map(|r| r.name).collect()
}

/// Ids passed to each `on_row_select` call.
type SelectCalls = Rc<RefCell<Vec<Vec<u32>>>>;

/// Table that records every `on_row_select` call as a list of ids.
fn recording_table(rows: Vec<Row>) -> (Table<Row>, SelectCalls) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let table = Table::new(columns())
        .with_rows(rows)
        .selectable(true)
        .on_row_select(move |rows: &[&Row]| {
            sink.borrow_mut().push(rows.iter().map(|r| r.id).collect());
        });
    (table, calls)
}

#[test]
fn test_sort_scenario() {
    let mut table = Table::new(columns()).with_rows(vec![row(1, "B"), row(2, "A")]);
    assert_eq!(names(&table), ["B", "A"]);

    assert_eq!(table.toggle_sort("name"), Some(SortDirection::Ascending));
    assert_eq!(names(&table), ["A", "B"]);

    assert_eq!(table.toggle_sort("name"), Some(SortDirection::Descending));
    assert_eq!(names(&table), ["B", "A"]);
}

#[test]
fn test_sort_toggle_cycle() {
    let mut table = Table::new(columns()).with_rows(vec![row(1, "B"), row(2, "A")]);
    let directions: Vec<_> = (0..3).filter_map(|_| table.toggle_sort("name")).collect();
    assert_eq!(
        directions,
        [SortDirection::Ascending, SortDirection::Descending, SortDirection::Ascending]
    );
}

#[test]
fn test_sort_other_column_starts_ascending() {
    let mut table = Table::new(columns()).with_rows(vec![row(1, "B"), row(2, "A")]);
    table.toggle_sort("name");
    table.toggle_sort("name");
    assert_eq!(table.toggle_sort("age"), Some(SortDirection::Ascending));
    assert_eq!(table.sort().column.as_deref(), Some("age"));
}

#[test]
fn test_sort_non_sortable_or_unknown_column_is_noop() {
    let mut table = Table::new(columns()).with_rows(vec![row(1, "B"), row(2, "A")]);
    assert_eq!(table.toggle_sort("note"), None);
    assert_eq!(table.toggle_sort("missing"), None);
    assert_eq!(table.sort().column, None);
    assert_eq!(names(&table), ["B", "A"]);
}

#[test]
fn test_sort_preserves_membership() {
    let rows = vec![row(1, "c"), row(2, "a"), row(3, "b"), row(4, "a")];
    let mut table = Table::new(columns()).with_rows(rows.clone());

    for _ in 0..2 {
        table.toggle_sort("name");
        let mut ids: Vec<u32> = table.rows_in_display_order().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), rows.len());
        ids.sort();
        assert_eq!(ids, [1, 2, 3, 4]);
    }
    // The caller's order is untouched
    assert_eq!(table.rows(), rows.as_slice());
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let mut table = Table::new(columns()).with_rows(vec![row(1, "a"), row(2, "b"), row(3, "a")]);
    table.toggle_sort("name");
    let ids: Vec<u32> = table.rows_in_display_order().iter().map(|r| r.id).collect();
    assert_eq!(ids, [1, 3, 2]);
}

#[test]
fn test_missing_values_sort_last_both_ways() {
    let rows = vec![
        Row {
            id: 1,
            name: "x",
            age: None,
        },
        Row {
            id: 2,
            name: "y",
            age: Some(30),
        },
        Row {
            id: 3,
            name: "z",
            age: Some(20),
        },
    ];
    let mut table = Table::new(columns()).with_rows(rows);

    table.toggle_sort("age");
    assert_eq!(names(&table), ["z", "y", "x"]);
    table.toggle_sort("age");
    assert_eq!(names(&table), ["y", "z", "x"]);
}

#[test]
fn test_selection_scenario() {
    let (mut table, calls) = recording_table(vec![row(1, "B"), row(2, "A")]);

    assert!(table.toggle_row(&1));
    assert!(table.toggle_row(&2));
    assert!(table.toggle_row(&1));

    assert_eq!(*calls.borrow(), vec![vec![1], vec![1, 2], vec![2]]);
    assert_eq!(table.selected_ids(), [2]);
}

#[test]
fn test_double_toggle_restores_selection() {
    let (mut table, calls) = recording_table(vec![row(1, "a"), row(2, "b"), row(3, "c")]);
    table.toggle_row(&3);
    table.toggle_row(&1);
    let before = table.selected_ids().to_vec();

    table.toggle_row(&2);
    table.toggle_row(&2);
    assert_eq!(table.selected_ids(), before.as_slice());

    // One call per toggle, each differing in length by one
    let calls = calls.borrow();
    assert_eq!(calls.len(), 4);
    let lengths: Vec<usize> = calls.iter().map(Vec::len).collect();
    assert_eq!(lengths, [1, 2, 3, 2]);
}

#[test]
fn test_toggle_ignored_when_not_selectable() {
    let mut table = Table::new(columns()).with_rows(vec![row(1, "a")]);
    assert!(!table.toggle_row(&1));
    assert!(table.selected_ids().is_empty());
}

#[test]
fn test_toggle_unknown_id_does_not_notify() {
    let (mut table, calls) = recording_table(vec![row(1, "a")]);
    assert!(!table.toggle_row(&9));
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_selection_survives_resort() {
    let (mut table, _) = recording_table(vec![row(1, "B"), row(2, "A")]);
    table.toggle_row(&1);
    table.toggle_sort("name");
    table.toggle_sort("name");
    assert!(table.is_selected(&1));
    assert!(!table.is_selected(&2));
}

#[test]
fn test_selection_survives_fresh_rows_with_same_ids() {
    let (mut table, _) = recording_table(vec![row(1, "B"), row(2, "A")]);
    table.toggle_row(&2);

    table.set_rows(vec![row(1, "B"), row(2, "A renamed"), row(3, "C")]);
    assert!(table.is_selected(&2));
    let selected: Vec<&str> = table.selected_rows().iter().map(|r| r.name).collect();
    assert_eq!(selected, ["A renamed"]);
}

#[test]
fn test_set_rows_drops_missing_ids() {
    let (mut table, calls) = recording_table(vec![row(1, "a"), row(2, "b")]);
    table.toggle_row(&1);
    table.toggle_row(&2);

    table.set_rows(vec![row(2, "b")]);
    assert_eq!(table.selected_ids(), [2]);
    assert_eq!(calls.borrow().last(), Some(&vec![2]));
}

#[test]
fn test_set_rows_reports_pruned_selection() {
    let (mut table, calls) = recording_table(vec![row(1, "a"), row(2, "b"), row(3, "c")]);
    for id in [1, 2, 3] {
        table.toggle_row(&id);
    }

    table.set_rows(vec![row(4, "d")]);
    table.toggle_row(&4);

    assert_eq!(*calls.borrow(), vec![vec![1], vec![1, 2], vec![1, 2, 3], vec![], vec![4]]);

    // Every reported selection is reachable from the previous one
    let lengths: Vec<usize> = calls.borrow().iter().map(Vec::len).collect();
    assert_eq!(lengths, [1, 2, 3, 0, 1]);
}

#[test]
fn test_set_rows_without_pruning_does_not_notify() {
    let (mut table, calls) = recording_table(vec![row(1, "a"), row(2, "b")]);
    table.toggle_row(&1);

    table.set_rows(vec![row(1, "a"), row(2, "b"), row(3, "c")]);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn test_cursor_scrolls_rows_into_view() {
    let rows = (1..=6).map(|id| row(id, "r")).collect();
    let (mut table, calls) = recording_table(rows);
    let area = Rect::new(0, 0, 30, 4);

    for _ in 0..5 {
        table.on_key(Key::Down, Modifiers::new());
    }
    assert_eq!(table.cursor(), Some(5));

    // Three body rows: display positions 3..=5 are drawn
    let layout = table.layout(area);
    assert_eq!(layout.scroll, 3);

    // Clicking the top body row hits display position 3
    table.on_click(area, 0, layout.body.y);
    assert_eq!(table.cursor(), Some(3));
    assert_eq!(*calls.borrow(), vec![vec![4]]);
}

#[test]
fn test_view_priority() {
    let mut table = Table::new(columns()).loading(true);
    assert_eq!(table.view(), TableView::Loading);

    table.set_rows(vec![row(1, "a")]);
    assert_eq!(table.view(), TableView::Loading);

    table.set_loading(false);
    assert_eq!(table.view(), TableView::Populated);

    table.set_rows(Vec::new());
    assert_eq!(table.view(), TableView::Empty);
}

#[test]
fn test_interactions_ignored_while_loading() {
    let (table, calls) = recording_table(vec![row(1, "a")]);
    let mut table = table.loading(true);

    assert!(!table.toggle_row(&1));
    assert_eq!(
        table.on_key(Key::Char(' '), Modifiers::new()),
        EventResult::Ignored
    );
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_keyboard_selection_follows_display_order() {
    let (mut table, calls) = recording_table(vec![row(1, "B"), row(2, "A")]);
    table.toggle_sort("name");

    // Cursor is on display position 0, which is "A" after sorting
    let result = table.on_key(Key::Char(' '), Modifiers::new());
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(*calls.borrow(), vec![vec![2]]);

    table.on_key(Key::Down, Modifiers::new());
    table.on_key(Key::Char(' '), Modifiers::new());
    assert_eq!(table.selected_ids(), [2, 1]);
}

#[test]
fn test_enter_sorts_header_cursor_column() {
    let mut table = Table::new(columns()).with_rows(vec![row(1, "B"), row(2, "A")]);
    assert_eq!(table.on_key(Key::Enter, Modifiers::new()), EventResult::Consumed);
    assert_eq!(names(&table), ["A", "B"]);

    // Header cursor on the non-sortable column
    table.on_key(Key::Right, Modifiers::new());
    table.on_key(Key::Right, Modifiers::new());
    assert_eq!(table.header_cursor(), 2);
    assert_eq!(table.on_key(Key::Enter, Modifiers::new()), EventResult::Ignored);
}

#[test]
fn test_click_header_and_rows() {
    let (mut table, calls) = recording_table(vec![row(1, "B"), row(2, "A")]);
    let area = Rect::new(0, 0, 40, 5);
    let layout = table.layout(area);
    let name = layout.columns[0];

    table.on_click(area, name.x, layout.header.y);
    assert_eq!(names(&table), ["A", "B"]);
    table.on_click(area, name.x, layout.header.y);
    assert_eq!(names(&table), ["B", "A"]);

    // Second display row is "A" (id 2)
    table.on_click(area, name.x, layout.body.y + 1);
    assert_eq!(*calls.borrow(), vec![vec![2]]);

    // Below the last row
    assert_eq!(
        table.on_click(area, name.x, layout.body.y + 2),
        EventResult::Ignored
    );
}

#[test]
fn test_duplicate_ids_toggle_together() {
    let (mut table, calls) = recording_table(vec![row(1, "a"), row(1, "b"), row(2, "c")]);
    table.toggle_row(&1);
    assert_eq!(table.selected_ids(), [1]);
    // Resolved rows use the first match
    assert_eq!(*calls.borrow(), vec![vec![1]]);
    let selected: Vec<&str> = table.selected_rows().iter().map(|r| r.name).collect();
    assert_eq!(selected, ["a"]);
}
