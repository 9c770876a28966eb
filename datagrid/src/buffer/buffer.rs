use crate::layout::Rect;
use crate::style::Style;
use crate::text::char_width;

use super::Cell;

/// A grid of cells that components draw into.
///
/// Writes outside the buffer are clipped silently.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.get_mut(x, y) {
            *slot = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Blank every cell in `area` and apply `style` to it.
    pub fn fill(&mut self, area: Rect, style: Style) {
        for y in area.y..area.bottom().min(self.height) {
            for x in area.x..area.right().min(self.width) {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.char = ' ';
                    cell.wide_continuation = false;
                    cell.apply(style);
                }
            }
        }
    }

    /// Write `text` starting at `(x, y)`, using at most `max_width` columns.
    ///
    /// Returns the number of columns written. A double-width character that
    /// would straddle the limit is not drawn.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: Style, max_width: u16) -> u16 {
        let mut written: u16 = 0;

        for ch in text.chars() {
            let width = char_width(ch) as u16;
            if width == 0 {
                continue;
            }
            if written + width > max_width {
                break;
            }

            let cx = x.saturating_add(written);
            if cx.saturating_add(width) > self.width || y >= self.height {
                break;
            }

            if let Some(cell) = self.get_mut(cx, y) {
                cell.char = ch;
                cell.wide_continuation = false;
                cell.apply(style);
            }
            if width == 2
                && let Some(cell) = self.get_mut(cx + 1, y)
            {
                cell.char = ' ';
                cell.wide_continuation = true;
                cell.apply(style);
            }

            written += width;
        }

        written
    }

    /// The characters of row `y` as a string, one entry per visible glyph.
    pub fn line(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_put_str_clips_to_max_width() {
        let mut buf = Buffer::new(10, 1);
        let written = buf.put_str(2, 0, "abcdef", Style::new(), 3);
        assert_eq!(written, 3);
        assert_eq!(buf.line(0), "  abc     ");
    }

    #[test]
    fn test_put_str_clips_to_buffer() {
        let mut buf = Buffer::new(4, 1);
        let written = buf.put_str(2, 0, "abcdef", Style::new(), 10);
        assert_eq!(written, 2);
        assert_eq!(buf.line(0), "  ab");
        assert_eq!(buf.put_str(0, 5, "x", Style::new(), 10), 0);
    }

    #[test]
    fn test_wide_char_marks_continuation() {
        let mut buf = Buffer::new(4, 1);
        buf.put_str(0, 0, "日x", Style::new(), 4);
        assert!(buf.get(1, 0).is_some_and(|c| c.wide_continuation));
        assert_eq!(buf.line(0), "日x ");
    }

    #[test]
    fn test_fill_keeps_fg_when_unset() {
        let red = Rgb::new(255, 0, 0);
        let mut buf = Buffer::new(2, 2);
        buf.fill(buf.area(), Style::new().bg(red));
        let cell = buf.get(1, 1).copied().unwrap_or_default();
        assert_eq!(cell.bg, red);
        assert_eq!(cell.fg, Cell::default().fg);
    }

    #[test]
    fn test_diff_reports_changed_cells() {
        let mut a = Buffer::new(3, 2);
        let b = Buffer::new(3, 2);
        a.set(2, 1, Cell::new('z'));
        let changed: Vec<_> = a.diff(&b).map(|(x, y, c)| (x, y, c.char)).collect();
        assert_eq!(changed, vec![(2, 1, 'z')]);
    }
}
