//! Table layout, hit testing and drawing.

use std::collections::HashSet;

use crate::buffer::Buffer;
use crate::layout::Rect;
use crate::style::Style;
use crate::text::{display_width, fit_to_width};
use crate::theme::Theme;

use super::item::TableRow;
use super::state::{Table, TableView};

pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No data available";

/// Blank columns between adjacent table columns.
const COLUMN_GAP: u16 = 2;
const CHECKBOX_WIDTH: u16 = 3;
const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

/// Horizontal extent of one drawn column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub x: u16,
    pub width: u16,
}

impl ColumnSpan {
    fn contains(&self, x: u16) -> bool {
        x >= self.x && x < self.x.saturating_add(self.width)
    }

    /// Width actually drawable inside `area`.
    fn clipped_width(&self, area: Rect) -> u16 {
        self.width.min(area.right().saturating_sub(self.x))
    }
}

/// Geometry of a populated table drawn into some area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    pub header: Rect,
    /// Rows below the header; display position `scroll + n` is at `body.y + n`.
    pub body: Rect,
    /// Display position of the first drawn row.
    pub scroll: usize,
    pub checkbox: Option<ColumnSpan>,
    pub columns: Vec<ColumnSpan>,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TableHit {
    /// Header cell of the column at this index.
    Header(usize),
    /// Data row at this display position.
    Row(usize),
}

impl<T: TableRow> Table<T> {
    /// Column widths: the fixed width if set, otherwise the widest of the
    /// title (plus room for the sort indicator) and every cell.
    fn column_widths(&self) -> Vec<u16> {
        self.columns
            .iter()
            .map(|column| {
                if let Some(width) = column.width {
                    return width;
                }
                let indicator = if column.sortable { 2 } else { 0 };
                let title = display_width(&column.title) + indicator;
                let widest_cell = self
                    .rows
                    .iter()
                    .map(|row| display_width(&row.cell_text(column)))
                    .max()
                    .unwrap_or(0);
                title.max(widest_cell).min(u16::MAX as usize) as u16
            })
            .collect()
    }

    pub fn layout(&self, area: Rect) -> TableLayout {
        let (header, body) = area.split_top(1);
        let mut x = area.x;

        let checkbox = self.selectable.then(|| {
            let span = ColumnSpan {
                x,
                width: CHECKBOX_WIDTH,
            };
            x = x.saturating_add(CHECKBOX_WIDTH + COLUMN_GAP);
            span
        });

        let columns = self
            .column_widths()
            .into_iter()
            .map(|width| {
                let span = ColumnSpan { x, width };
                x = x.saturating_add(width).saturating_add(COLUMN_GAP);
                span
            })
            .collect();

        TableLayout {
            header,
            body,
            scroll: self.scroll_offset(body.height),
            checkbox,
            columns,
        }
    }

    /// First display position to draw so the cursor row stays inside a body
    /// of `height` rows.
    fn scroll_offset(&self, height: u16) -> usize {
        match (self.cursor, height) {
            (Some(cursor), 1..) => cursor.saturating_sub(height as usize - 1),
            _ => 0,
        }
    }

    pub(super) fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<TableHit> {
        if !area.contains(x, y) {
            return None;
        }

        let layout = self.layout(area);
        if layout.header.contains(x, y) {
            return layout
                .columns
                .iter()
                .position(|span| span.contains(x))
                .map(TableHit::Header);
        }

        let pos = layout.scroll + (y - layout.body.y) as usize;
        (pos < self.rows.len()).then_some(TableHit::Row(pos))
    }

    /// Draw the table, or its loading or empty placeholder, into `area`.
    pub fn render(&self, buf: &mut Buffer, area: Rect, theme: &Theme) {
        if area.is_empty() {
            return;
        }

        match self.view() {
            TableView::Loading => {
                let style = Style::new().fg(theme.muted).italic();
                buf.put_str(area.x, area.y, LOADING_TEXT, style, area.width);
            }
            TableView::Empty => {
                let style = Style::new().fg(theme.muted);
                buf.put_str(area.x, area.y, EMPTY_TEXT, style, area.width);
            }
            TableView::Populated => {
                let layout = self.layout(area);
                self.render_header(buf, &layout, theme);
                self.render_rows(buf, &layout, theme);
            }
        }
    }

    fn render_header(&self, buf: &mut Buffer, layout: &TableLayout, theme: &Theme) {
        let header = layout.header;
        buf.fill(header, Style::new().bg(theme.surface));

        for (col_idx, (column, span)) in self.columns.iter().zip(&layout.columns).enumerate() {
            let width = span.clipped_width(header);
            if width == 0 {
                break;
            }

            let mut title = column.title.clone();
            if self.sort.is_active(&column.key) {
                title.push(' ');
                title.push(self.sort.direction.indicator());
            }

            let mut style = Style::new().fg(theme.foreground).bold();
            if column.sortable {
                style = style.underline();
            }
            if self.sort.is_active(&column.key) {
                style = style.fg(theme.primary);
            }
            if col_idx == self.header_cursor {
                style = style.bg(theme.cursor);
            }

            let text = fit_to_width(&title, width as usize, column.align);
            buf.put_str(span.x, header.y, &text, style, width);
        }
    }

    fn render_rows(&self, buf: &mut Buffer, layout: &TableLayout, theme: &Theme) {
        let selected_ids: HashSet<&T::Id> = self.selection.ids().iter().collect();
        let visible = self.display_order().into_iter().enumerate().skip(layout.scroll);

        for (line_idx, (pos, idx)) in visible.enumerate() {
            let Some(line) = layout.body.row(line_idx as u16) else {
                break;
            };
            let row = &self.rows[idx];
            let selected = self.selectable && selected_ids.contains(&row.id());

            let mut base = Style::new().fg(theme.foreground);
            if self.cursor == Some(pos) {
                base = base.bg(theme.cursor);
            } else if selected {
                base = base.bg(theme.selection);
            }
            buf.fill(line, base);

            if let Some(span) = layout.checkbox {
                let mark = if selected { CHECKED } else { UNCHECKED };
                let style = if selected {
                    base.fg(theme.primary).bold()
                } else {
                    base
                };
                buf.put_str(span.x, line.y, mark, style, span.clipped_width(line));
            }

            for (column, span) in self.columns.iter().zip(&layout.columns) {
                let width = span.clipped_width(line);
                if width == 0 {
                    break;
                }
                let text = fit_to_width(&row.cell_text(column), width as usize, column.align);
                buf.put_str(span.x, line.y, &text, base, width);
            }
        }
    }
}
