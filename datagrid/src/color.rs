//! Color definitions.
//!
//! Theme colors are authored in OKLCH so light and dark palettes can share
//! hues, then resolved to the sRGB triples the terminal understands.

use palette::{IntoColor, Oklch, Srgb};

/// A concrete terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb(Rgb),
}

impl Color {
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(Rgb::new(r, g, b))
    }

    /// Adjust lightness, clamped to `0.0..=1.0`. RGB colors are returned as-is.
    pub fn with_lightness(self, l: f32) -> Self {
        match self {
            Self::Oklch { c, h, .. } => Self::Oklch {
                l: l.clamp(0.0, 1.0),
                c,
                h,
            },
            other => other,
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb(rgb) => *rgb,
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex() {
        assert_eq!(Rgb::hex(0xA277FF), Rgb::new(0xA2, 0x77, 0xFF));
    }

    #[test]
    fn test_oklch_extremes() {
        assert_eq!(Color::oklch(0.0, 0.0, 0.0).to_rgb(), Rgb::new(0, 0, 0));
        let white = Color::oklch(1.0, 0.0, 0.0).to_rgb();
        assert!(white.r >= 254 && white.g >= 254 && white.b >= 254);
    }

    #[test]
    fn test_with_lightness_clamps() {
        let color = Color::oklch(0.5, 0.1, 200.0).with_lightness(1.5);
        assert_eq!(color, Color::oklch(1.0, 0.1, 200.0));
    }
}
