//! RGB colors used for path drawing.
//!
//! Ozobots read sequences of short colored line pieces as commands, so the
//! exact channel values matter: pure red, green, blue and black.

use std::fmt;

/// An opaque 8-bit RGB color.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE:   Rgb = Rgb::new(255, 255, 255);
    pub const BLACK:   Rgb = Rgb::new(0, 0, 0);
    pub const GREY:    Rgb = Rgb::new(150, 150, 150);
    pub const RED:     Rgb = Rgb::new(255, 0, 0);
    pub const GREEN:   Rgb = Rgb::new(0, 255, 0);
    pub const BLUE:    Rgb = Rgb::new(0, 0, 255);
    pub const CYAN:    Rgb = Rgb::new(0, 255, 255);
    pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);
    pub const YELLOW:  Rgb = Rgb::new(255, 255, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form, used by the CSV writer.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
