//! Rendering tests: draw into an in-memory buffer and inspect the lines.

use datagrid::components::{
    CellValue, Column, EMPTY_TEXT, Input, InputVariant, LOADING_TEXT, MISSING_CELL_TEXT, Table,
    TableRow,
};
use datagrid::theme::Theme;
use datagrid::{Buffer, Rect};

struct Fruit {
    id: u8,
    name: &'static str,
    count: Option<i64>,
}

impl TableRow for Fruit {
    type Id = u8;

    fn id(&self) -> u8 {
        self.id
    }

    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "name" => Some(self.name.into()),
            "count" => self.count.map(CellValue::Int),
            _ => None,
        }
    }
}

fn fruit_table() -> Table<Fruit> {
    Table::new(vec![
        Column::new("name", "Name", "name").sortable(),
        Column::new("count", "Count", "count").sortable(),
    ])
    .with_rows(vec![
        Fruit {
            id: 1,
            name: "pear",
            count: Some(3),
        },
        Fruit {
            id: 2,
            name: "apple",
            count: None,
        },
    ])
}

fn draw_table(table: &Table<Fruit>) -> Buffer {
    let mut buf = Buffer::new(40, 6);
    table.render(&mut buf, Rect::from_size(40, 6), &Theme::light());
    buf
}

fn draw_input(input: &Input) -> Buffer {
    let mut buf = Buffer::new(40, 6);
    input.render(&mut buf, Rect::from_size(40, 6), &Theme::light());
    buf
}

#[test]
fn test_loading_replaces_table() {
    let table = fruit_table().loading(true);
    let buf = draw_table(&table);
    assert!(buf.line(0).starts_with(LOADING_TEXT));
    assert!(!buf.line(0).contains("Name"));
    assert_eq!(buf.line(1).trim(), "");
}

#[test]
fn test_loading_wins_over_empty() {
    let table = Table::<Fruit>::new(vec![Column::new("name", "Name", "name")]).loading(true);
    let buf = draw_table(&table);
    assert!(buf.line(0).starts_with(LOADING_TEXT));
}

#[test]
fn test_empty_shows_placeholder_only() {
    let table = Table::<Fruit>::new(vec![Column::new("name", "Name", "name")]);
    let buf = draw_table(&table);
    assert!(buf.line(0).starts_with(EMPTY_TEXT));
    assert!(!buf.line(0).contains("Name"));
    assert_eq!(buf.line(1).trim(), "");
}

#[test]
fn test_header_and_rows() {
    let buf = draw_table(&fruit_table());
    let header = buf.line(0);
    assert!(header.starts_with("Name"));
    assert!(header.contains("Count"));
    assert!(buf.line(1).starts_with("pear"));
    assert!(buf.line(1).contains('3'));
    assert!(buf.line(2).starts_with("apple"));
    assert!(buf.line(2).contains(MISSING_CELL_TEXT));
}

#[test]
fn test_sort_indicator_follows_direction() {
    let mut table = fruit_table();
    table.toggle_sort("name");
    let buf = draw_table(&table);
    assert!(buf.line(0).contains("Name ▲"));
    assert!(buf.line(1).starts_with("apple"));

    table.toggle_sort("name");
    let buf = draw_table(&table);
    assert!(buf.line(0).contains("Name ▼"));
    assert!(buf.line(1).starts_with("pear"));
}

#[test]
fn test_indicator_only_on_active_column() {
    let mut table = fruit_table();
    table.toggle_sort("name");
    let header = draw_table(&table).line(0);
    assert!(header.contains("Name ▲"));
    assert!(header.contains("Count"));
    assert_eq!(header.matches(['▲', '▼']).count(), 1);

    table.toggle_sort("count");
    let buf = draw_table(&table);
    let header = buf.line(0);
    assert!(header.contains("Count ▲"));
    assert!(!header.contains("Name ▲"));
    assert!(!header.contains("Name ▼"));
    assert_eq!(header.matches(['▲', '▼']).count(), 1);
    // Missing counts sort last
    assert!(buf.line(1).starts_with("pear"));
}

#[test]
fn test_checkbox_column_marks_selection() {
    let mut table = fruit_table().selectable(true);
    table.toggle_row(&2);
    let buf = draw_table(&table);

    assert!(buf.line(1).starts_with("[ ]"));
    assert!(buf.line(2).starts_with("[x]"));

    // Selected row that is not under the cursor gets the selection background
    let theme = Theme::light();
    let cell = buf.get(10, 2).map(|c| c.bg);
    assert_eq!(cell, Some(theme.selection));
}

#[test]
fn test_outlined_input_box_and_label() {
    let input = Input::new()
        .label("Username")
        .placeholder("Enter username")
        .helper_text("This will be public");
    let buf = draw_input(&input);

    assert_eq!(buf.line(0).trim_end(), "Username");
    assert!(buf.line(1).starts_with('┌'));
    assert!(buf.line(2).contains("Enter username"));
    assert!(buf.line(3).starts_with('└'));
    assert_eq!(buf.line(4).trim_end(), "This will be public");
}

#[test]
fn test_error_replaces_helper_in_error_color() {
    let input = Input::new()
        .label("Email")
        .helper_text("We never share it")
        .error_message("Enter a valid email");
    let buf = draw_input(&input);
    let theme = Theme::light();

    assert_eq!(buf.line(4).trim_end(), "Enter a valid email");
    assert!(!(0..6).any(|y| buf.line(y).contains("We never share it")));
    assert_eq!(buf.get(0, 4).map(|c| c.fg), Some(theme.error));
    assert_eq!(buf.get(0, 1).map(|c| c.fg), Some(theme.error));
}

#[test]
fn test_password_is_masked_until_revealed() {
    let mut input = Input::new().password().with_value("hunter2");
    let buf = draw_input(&input);
    assert!(buf.line(1).contains("•••••••"));
    assert!(!buf.line(1).contains("hunter2"));
    assert!(buf.line(1).contains("show"));

    input.toggle_reveal();
    let buf = draw_input(&input);
    assert!(buf.line(1).contains("hunter2"));
    assert!(buf.line(1).contains("hide"));
}

#[test]
fn test_filled_input_is_one_row() {
    let input = Input::new()
        .variant(InputVariant::Filled)
        .with_value("value")
        .clearable(true);
    let buf = draw_input(&input);
    assert!(buf.line(0).contains("value"));
    assert!(buf.line(0).contains('✕'));
    assert_eq!(buf.line(1).trim(), "");
}
