/// A rectangular region of the terminal, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn shrink(self, top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            x: self.x.saturating_add(left),
            y: self.y.saturating_add(top),
            width: self.width.saturating_sub(left.saturating_add(right)),
            height: self.height.saturating_sub(top.saturating_add(bottom)),
        }
    }

    /// Split off the top `height` rows. Returns `(top, rest)`.
    pub fn split_top(self, height: u16) -> (Self, Self) {
        let height = height.min(self.height);
        let top = Self::new(self.x, self.y, self.width, height);
        let rest = Self::new(self.x, self.y + height, self.width, self.height - height);
        (top, rest)
    }

    /// The single row at offset `dy`, if it lies inside this rect.
    pub fn row(&self, dy: u16) -> Option<Self> {
        (dy < self.height).then(|| Self::new(self.x, self.y + dy, self.width, 1))
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}
