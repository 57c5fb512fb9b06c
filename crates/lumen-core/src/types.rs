// File: crates/lumen-core/src/types.rs
// Summary: Shared types and constants (colors, paddings, viewport).

use crate::error::ColorParseError;

/// Opaque 32-bit ARGB color token supplied by the caller.
///
/// The engine never looks at the channels except to carry gradient stops
/// through to the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const BLUE: Argb = Argb(0xFF00_00FF);
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);
    pub const GRAY: Argb = Argb(0xFF88_8888);
    pub const LIGHT_GRAY: Argb = Argb(0xFFCC_CCCC);
    pub const DARK_GRAY: Argb = Argb(0xFF44_4444);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn alpha(self) -> u8 { (self.0 >> 24) as u8 }
    pub const fn red(self) -> u8 { (self.0 >> 16) as u8 }
    pub const fn green(self) -> u8 { (self.0 >> 8) as u8 }
    pub const fn blue(self) -> u8 { self.0 as u8 }

    /// Parse `#RRGGBB` (opaque) or `#AARRGGBB`.
    pub fn parse_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigits(s.to_string()));
        }
        let opaque = match digits.len() {
            6 => true,
            8 => false,
            n => return Err(ColorParseError::InvalidLength(n)),
        };
        let raw = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidDigits(s.to_string()))?;
        Ok(if opaque { Self(0xFF00_0000 | raw) } else { Self(raw) })
    }
}

impl std::str::FromStr for Argb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Paddings used by line charts.
    pub const fn line_default() -> Self { Self::new(80.0, 40.0, 40.0, 60.0) }
    /// Bar charts reserve a taller bottom band for the category labels.
    pub const fn bar_default() -> Self { Self::new(80.0, 40.0, 40.0, 80.0) }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::line_default()
    }
}

/// Canvas size plus paddings. The plot area is what remains inside the insets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub insets: Insets,
}

impl Viewport {
    pub const fn new(width: f32, height: f32, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    pub fn usable_width(&self) -> f32 { self.width - self.insets.hsum() }
    pub fn usable_height(&self) -> f32 { self.height - self.insets.vsum() }

    /// Y pixel of the value-zero line (bottom edge of the plot area).
    pub fn baseline(&self) -> f32 { self.insets.top + self.usable_height() }

    /// False when the insets leave no room to plot; such a viewport yields empty geometry.
    pub fn has_plot_area(&self) -> bool {
        let (w, h) = (self.usable_width(), self.usable_height());
        w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0
    }
}
