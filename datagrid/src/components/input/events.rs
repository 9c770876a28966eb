//! Event handling for the Input component.

use crate::components::events::{ComponentEvents, EventResult};
use crate::event::{Key, Modifiers};
use crate::layout::Rect;

use super::Input;

impl ComponentEvents for Input {
    fn on_key(&mut self, key: Key, modifiers: Modifiers) -> EventResult {
        if self.is_disabled() || modifiers.alt {
            return EventResult::Ignored;
        }

        if modifiers.ctrl {
            let handled = match key {
                Key::Char('u') => self.clear(),
                Key::Char('r') => self.toggle_reveal(),
                _ => false,
            };
            return if handled {
                EventResult::Consumed
            } else {
                EventResult::Ignored
            };
        }

        match key {
            Key::Backspace => {
                self.delete_char_before();
            }
            Key::Delete => {
                self.delete_char_at();
            }
            Key::Left => self.cursor_left(),
            Key::Right => self.cursor_right(),
            Key::Home => self.cursor_home(),
            Key::End => self.cursor_end(),
            Key::Char(c) => self.insert_char(c),
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn on_click(&mut self, area: Rect, x: u16, y: u16) -> EventResult {
        if self.is_disabled() || !area.contains(x, y) {
            return EventResult::Ignored;
        }

        let layout = self.layout(area);
        if layout.clear_button.is_some_and(|r| r.contains(x, y)) {
            self.clear();
        } else if layout.reveal_button.is_some_and(|r| r.contains(x, y)) {
            self.toggle_reveal();
        }
        self.set_focused(true);
        EventResult::Consumed
    }
}
