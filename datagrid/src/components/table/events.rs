//! Event handling for the Table component.

use crate::components::events::{ComponentEvents, EventResult};
use crate::event::{Key, Modifiers};
use crate::layout::Rect;

use super::item::TableRow;
use super::render::TableHit;
use super::state::Table;

impl<T: TableRow> Table<T> {
    /// Move the row cursor, clamped to the last row. Drawing scrolls the body
    /// so the cursor row stays visible.
    fn move_cursor(&mut self, pos: usize) {
        if self.rows.is_empty() {
            self.cursor = None;
        } else {
            self.cursor = Some(pos.min(self.rows.len() - 1));
        }
    }

    fn move_cursor_by(&mut self, delta: isize) {
        let pos = self.cursor.unwrap_or(0).saturating_add_signed(delta);
        self.move_cursor(pos);
    }

    fn move_header_cursor_by(&mut self, delta: isize) {
        if self.columns.is_empty() {
            return;
        }
        let last = self.columns.len() - 1;
        self.header_cursor = self.header_cursor.saturating_add_signed(delta).min(last);
    }

    /// Toggle selection of the row at display position `pos`.
    fn toggle_at(&mut self, pos: usize) -> bool {
        let Some(id) = self
            .display_order()
            .get(pos)
            .map(|&idx| self.rows[idx].id())
        else {
            return false;
        };
        self.toggle_row(&id)
    }

    fn sort_column_at(&mut self, col_idx: usize) -> EventResult {
        let Some(key) = self.columns.get(col_idx).map(|c| c.key.clone()) else {
            return EventResult::Ignored;
        };
        self.header_cursor = col_idx;
        match self.toggle_sort(&key) {
            Some(_) => EventResult::Consumed,
            None => EventResult::Ignored,
        }
    }
}

impl<T: TableRow> ComponentEvents for Table<T> {
    fn on_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        if !self.is_interactive() || modifiers.ctrl || modifiers.alt {
            return EventResult::Ignored;
        }

        match key {
            Key::Up => self.move_cursor_by(-1),
            Key::Down => self.move_cursor_by(1),
            Key::Home => self.move_cursor(0),
            Key::End => self.move_cursor(usize::MAX),
            Key::Left => self.move_header_cursor_by(-1),
            Key::Right => self.move_header_cursor_by(1),
            Key::Enter => return self.sort_column_at(self.header_cursor),
            Key::Char(' ') => {
                let pos = self.cursor.unwrap_or(0);
                return if self.toggle_at(pos) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                };
            }
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn on_click(&mut self, area: Rect, x: u16, y: u16) -> EventResult {
        if !self.is_interactive() {
            return EventResult::Ignored;
        }

        match self.hit_test(area, x, y) {
            Some(TableHit::Header(col_idx)) => self.sort_column_at(col_idx),
            Some(TableHit::Row(pos)) => {
                self.move_cursor(pos);
                if self.selectable {
                    self.toggle_at(pos);
                }
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }
}
