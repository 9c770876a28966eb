//! Data table demo page.

use std::cell::RefCell;
use std::rc::Rc;

use datagrid::prelude::*;

const TITLE: &str = "Data Table Demo";
const NO_SELECTION: &str = "No rows selected";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl TableRow for User {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn field(&self, name: &str) -> Option<CellValue> {
        match name {
            "name" => Some(self.name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "phone" => Some(self.phone.as_str().into()),
            _ => None,
        }
    }
}

/// Sample users numbered from 1.
pub fn generate_users(count: u32) -> Vec<User> {
    (1..=count)
        .map(|n| User {
            id: n,
            name: format!("User {n}"),
            email: format!("user{n}@mail.com"),
            phone: format!("985634452{n}"),
        })
        .collect()
}

pub struct TablePage {
    table: Table<User>,
    /// Names last reported by `on_row_select`.
    selected: Rc<RefCell<Vec<String>>>,
    /// Where the table was last drawn, for click routing.
    table_area: Rect,
}

impl Default for TablePage {
    fn default() -> Self {
        Self::new()
    }
}

impl TablePage {
    pub fn new() -> Self {
        let selected = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&selected);

        let columns = vec![
            Column::new("name", "Name", "name").sortable(),
            Column::new("email", "Email", "email").sortable(),
            Column::new("phone", "Phone", "phone").sortable(),
        ];
        let table = Table::new(columns)
            .with_rows(generate_users(8))
            .selectable(true)
            .on_row_select(move |rows: &[&User]| {
                *sink.borrow_mut() = rows.iter().map(|user| user.name.clone()).collect();
                log::info!("{} users selected", rows.len());
            });

        Self {
            table,
            selected,
            table_area: Rect::default(),
        }
    }

    pub fn status(&self) -> String {
        let names = self.selected.borrow();
        if names.is_empty() {
            NO_SELECTION.to_string()
        } else {
            format!("Selected: {}", names.join(", "))
        }
    }

    pub fn render(&mut self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        let (title, rest) = area.split_top(2);
        buf.put_str(
            title.x,
            title.y,
            TITLE,
            Style::new().fg(theme.primary).bold(),
            title.width,
        );

        let table_height = self.table.rows().len() as u16 + 1;
        let (table_area, rest) = rest.split_top(table_height);
        self.table.render(buf, table_area, theme);
        self.table_area = table_area;

        if let Some(status) = rest.row(1) {
            let style = Style::new().fg(theme.muted);
            buf.put_str(status.x, status.y, &self.status(), style, status.width);
        }
    }
}

impl ComponentEvents for TablePage {
    fn on_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        self.table.on_key(key, modifiers)
    }

    fn on_click(&mut self, _area: Rect, x: u16, y: u16) -> EventResult {
        self.table.on_click(self.table_area, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered() -> (TablePage, Buffer) {
        let mut page = TablePage::new();
        let mut buf = Buffer::new(80, 16);
        page.render(&mut buf, Rect::from_size(80, 16), &Theme::light());
        (page, buf)
    }

    #[test]
    fn test_generate_users() {
        let users = generate_users(8);
        assert_eq!(users.len(), 8);
        assert_eq!(users[0].name, "User 1");
        assert_eq!(users[7].email, "user8@mail.com");
        assert_eq!(users[2].phone, "9856344523");
    }

    #[test]
    fn test_selection_updates_status() {
        let mut page = TablePage::new();
        assert_eq!(page.status(), NO_SELECTION);

        // Cursor starts on the first row
        page.on_key(Key::Char(' '), Modifiers::new());
        page.on_key(Key::Down, Modifiers::new());
        page.on_key(Key::Down, Modifiers::new());
        page.on_key(Key::Char(' '), Modifiers::new());

        assert_eq!(*page.selected.borrow(), ["User 1", "User 3"]);
        assert_eq!(page.status(), "Selected: User 1, User 3");
    }

    #[test]
    fn test_render_title_and_header() {
        let (_, buf) = rendered();
        assert!(buf.line(0).starts_with(TITLE));
        let header = buf.line(2);
        assert!(header.contains("Name"));
        assert!(header.contains("Email"));
        assert!(header.contains("Phone"));
        assert!(buf.line(3).contains("User 1"));
        assert!(buf.line(12).contains(NO_SELECTION));
    }

    #[test]
    fn test_click_header_sorts_descending_on_second_click() {
        let (mut page, _) = rendered();
        let layout = page.table.layout(page.table_area);
        let name = layout.columns[0];

        page.on_click(Rect::default(), name.x, layout.header.y);
        page.on_click(Rect::default(), name.x, layout.header.y);

        let first = page.table.rows_in_display_order()[0].name.clone();
        assert_eq!(first, "User 8");
    }
}
