//! Input layout and drawing.

use crate::buffer::Buffer;
use crate::layout::Rect;
use crate::style::Style;
use crate::text::{display_width, tail_to_width, truncate_to_width};
use crate::theme::Theme;

use super::state::{Input, InputMessage, InputVariant};

pub const CLEAR_GLYPH: &str = "✕";
pub const REVEAL_LABEL: &str = "show";
pub const HIDE_LABEL: &str = "hide";

/// Geometry of an input drawn into some area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLayout {
    pub label: Option<Rect>,
    /// The whole field, borders included.
    pub field: Rect,
    /// Where the value (or placeholder) is drawn.
    pub text: Rect,
    pub clear_button: Option<Rect>,
    pub reveal_button: Option<Rect>,
    pub message: Option<Rect>,
}

impl Input {
    fn field_height(&self) -> u16 {
        match self.get_variant() {
            InputVariant::Outlined => 3,
            InputVariant::Filled | InputVariant::Ghost => 1,
        }
    }

    /// Rows needed to draw the label, field and message line.
    pub fn height(&self) -> u16 {
        let label = u16::from(self.get_label().is_some());
        let message = u16::from(self.message().is_some());
        label + self.field_height() + message
    }

    pub fn layout(&self, area: Rect) -> InputLayout {
        let width = self.get_size().width().min(area.width);
        let area = Rect::new(area.x, area.y, width, area.height);

        let (label, rest) = if self.get_label().is_some() {
            let (label, rest) = area.split_top(1);
            (Some(label), rest)
        } else {
            (None, area)
        };

        let (field, rest) = rest.split_top(self.field_height());
        let message = self.message().and(rest.row(0));

        let mut text = match self.get_variant() {
            InputVariant::Outlined => field.shrink(1, 2, 1, 2),
            InputVariant::Filled | InputVariant::Ghost => field.shrink(0, 1, 0, 1),
        };

        // Affordances sit at the right edge of the text area, one blank apart
        let mut reveal_button = None;
        if self.shows_reveal_button() {
            let w = display_width(REVEAL_LABEL) as u16;
            if text.width > w {
                reveal_button = Some(Rect::new(text.right() - w, text.y, w, 1));
                text.width -= w + 1;
            }
        }

        let mut clear_button = None;
        if self.shows_clear_button() && text.width > 2 {
            clear_button = Some(Rect::new(text.right() - 1, text.y, 1, 1));
            text.width -= 2;
        }

        InputLayout {
            label,
            field,
            text,
            clear_button,
            reveal_button,
            message,
        }
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        if area.is_empty() {
            return;
        }
        let layout = self.layout(area);

        let accent = if self.is_disabled() {
            theme.muted
        } else if self.is_invalid() {
            theme.error
        } else if self.is_focused() {
            theme.primary
        } else {
            theme.border
        };

        if let (Some(rect), Some(label)) = (layout.label, self.get_label()) {
            let mut style = Style::new().fg(theme.foreground).bold();
            if self.is_disabled() {
                style = Style::new().fg(theme.muted);
            }
            buf.put_str(rect.x, rect.y, label, style, rect.width);
        }

        match self.get_variant() {
            InputVariant::Outlined => draw_box(buf, layout.field, Style::new().fg(accent)),
            InputVariant::Filled => buf.fill(layout.field, Style::new().bg(theme.surface)),
            InputVariant::Ghost => {}
        }

        self.render_text(buf, layout.text, theme);

        if let Some(rect) = layout.clear_button {
            let style = Style::new().fg(theme.muted);
            buf.put_str(rect.x, rect.y, CLEAR_GLYPH, style, rect.width);
        }
        if let Some(rect) = layout.reveal_button {
            let label = if self.is_revealed() {
                HIDE_LABEL
            } else {
                REVEAL_LABEL
            };
            let style = Style::new().fg(theme.primary).underline();
            buf.put_str(rect.x, rect.y, label, style, rect.width);
        }

        if let (Some(rect), Some(message)) = (layout.message, self.message()) {
            let (text, style) = match message {
                InputMessage::Error(text) => (text, Style::new().fg(theme.error)),
                InputMessage::Helper(text) => (text, Style::new().fg(theme.muted)),
            };
            let text = truncate_to_width(text, rect.width as usize);
            buf.put_str(rect.x, rect.y, &text, style, rect.width);
        }
    }

    fn render_text(&self, buf: &mut Buffer, text: Rect, theme: &Theme) {
        if text.is_empty() {
            return;
        }
        let avail = text.width as usize;
        let mut cursor_col = 0;

        if self.value().is_empty() {
            let placeholder = truncate_to_width(self.get_placeholder(), avail);
            let style = Style::new().fg(theme.muted);
            buf.put_str(text.x, text.y, &placeholder, style, text.width);
        } else {
            let display = self.display_value();
            let split = if self.is_masked() {
                // One bullet per char
                display
                    .char_indices()
                    .nth(self.value()[..self.cursor()].chars().count())
                    .map_or(display.len(), |(idx, _)| idx)
            } else {
                self.cursor()
            };
            let (before, after) = display.split_at(split);

            // Keep the cursor in view by scrolling the text left
            let shown = if display_width(before) < avail {
                before
            } else {
                tail_to_width(before, avail.saturating_sub(1))
            };

            let mut style = Style::new().fg(theme.foreground);
            if self.is_disabled() {
                style = Style::new().fg(theme.muted).dim();
            }
            cursor_col = buf.put_str(text.x, text.y, shown, style, text.width);
            let rest = text.width - cursor_col;
            buf.put_str(text.x + cursor_col, text.y, after, style, rest);
        }

        if self.is_focused() && !self.is_disabled() {
            let col = cursor_col.min(text.width - 1);
            if let Some(cell) = buf.get_mut(text.x + col, text.y) {
                cell.fg = theme.background;
                cell.bg = theme.foreground;
            }
        }
    }
}

/// Draw a single-line box border around `area`.
fn draw_box(buf: &mut Buffer, area: Rect, style: Style) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let right = area.right() - 1;
    let bottom = area.bottom() - 1;
    let inner = (area.width - 2) as usize;
    let horizontal = "─".repeat(inner);

    let top_edge = format!("┌{horizontal}┐");
    let bottom_edge = format!("└{horizontal}┘");
    buf.put_str(area.x, area.y, &top_edge, style, area.width);
    buf.put_str(area.x, bottom, &bottom_edge, style, area.width);
    for y in area.y + 1..bottom {
        buf.put_str(area.x, y, "│", style, 1);
        buf.put_str(right, y, "│", style, 1);
    }
}
