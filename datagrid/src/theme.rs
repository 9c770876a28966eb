//! Light and dark palettes.

use crate::color::{Color, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Resolved colors every component draws with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Rgb,
    pub foreground: Rgb,
    /// Header rows, filled inputs, the navbar.
    pub surface: Rgb,
    pub border: Rgb,
    pub primary: Rgb,
    /// Placeholders, helper text, inactive affordances.
    pub muted: Rgb,
    pub error: Rgb,
    pub success: Rgb,
    /// Background of selected rows.
    pub selection: Rgb,
    /// Background of the row or header under the keyboard cursor.
    pub cursor: Rgb,
}

const PRIMARY_HUE: f32 = 295.0;
const ERROR_HUE: f32 = 25.0;
const SUCCESS_HUE: f32 = 150.0;

impl Theme {
    pub fn light() -> Self {
        let primary = Color::oklch(0.55, 0.18, PRIMARY_HUE);
        Self {
            mode: ThemeMode::Light,
            background: Color::oklch(0.99, 0.0, 0.0).to_rgb(),
            foreground: Color::oklch(0.22, 0.0, 0.0).to_rgb(),
            surface: Color::oklch(0.94, 0.01, PRIMARY_HUE).to_rgb(),
            border: Color::oklch(0.78, 0.0, 0.0).to_rgb(),
            primary: primary.to_rgb(),
            muted: Color::oklch(0.55, 0.0, 0.0).to_rgb(),
            error: Color::oklch(0.55, 0.2, ERROR_HUE).to_rgb(),
            success: Color::oklch(0.55, 0.15, SUCCESS_HUE).to_rgb(),
            selection: primary.with_lightness(0.88).to_rgb(),
            cursor: primary.with_lightness(0.80).to_rgb(),
        }
    }

    pub fn dark() -> Self {
        let primary = Color::oklch(0.72, 0.16, PRIMARY_HUE);
        Self {
            mode: ThemeMode::Dark,
            background: Color::oklch(0.18, 0.0, 0.0).to_rgb(),
            foreground: Color::oklch(0.93, 0.0, 0.0).to_rgb(),
            surface: Color::oklch(0.25, 0.01, PRIMARY_HUE).to_rgb(),
            border: Color::oklch(0.42, 0.0, 0.0).to_rgb(),
            primary: primary.to_rgb(),
            muted: Color::oklch(0.65, 0.0, 0.0).to_rgb(),
            error: Color::oklch(0.68, 0.19, ERROR_HUE).to_rgb(),
            success: Color::oklch(0.72, 0.15, SUCCESS_HUE).to_rgb(),
            selection: primary.with_lightness(0.35).to_rgb(),
            cursor: primary.with_lightness(0.45).to_rgb(),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
