use crate::color::Rgb;

/// Text attributes applied to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            dim: false,
            italic: false,
            underline: false,
        }
    }
}

/// Style used when writing into a [`Buffer`](crate::Buffer).
///
/// `None` colors leave the cell's existing color untouched, so text can be
/// drawn over a previously filled background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
    pub text: TextStyle,
}

impl Style {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            text: TextStyle::new(),
        }
    }

    pub fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.text.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.text.dim = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.text.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.text.underline = true;
        self
    }
}
