//! Series colors: the fixed palette, cyclic assignment, and shade/alpha
//! variants derived from a base color.

use serde::{Serialize, Serializer};
use std::fmt;

/// Opaque color, written as a `#rrggbb` CSS string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Color with an alpha channel, written as a CSS `rgba(r, g, b, a)` string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f64,
}

/// Series palette, assigned to projects in order and reused cyclically once
/// more than 18 series are on screen.
pub const PALETTE: [Rgb; 18] = [
    Rgb::new(13, 110, 253),  // blue        (#0d6efd)
    Rgb::new(25, 135, 84),   // green       (#198754)
    Rgb::new(102, 16, 242),  // indigo      (#6610f2)
    Rgb::new(253, 126, 20),  // orange      (#fd7e14)
    Rgb::new(220, 53, 69),   // red         (#dc3545)
    Rgb::new(248, 249, 250), // light gray  (#f8f9fa)
    Rgb::new(32, 201, 151),  // teal        (#20c997)
    Rgb::new(13, 202, 240),  // cyan        (#0dcaf0)
    Rgb::new(123, 97, 255),  // violet      (#7b61ff)
    Rgb::new(255, 87, 34),   // deep orange (#ff5722)
    Rgb::new(235, 47, 150),  // magenta     (#eb2f96)
    Rgb::new(0, 180, 42),    // bright green(#00b42a)
    Rgb::new(139, 69, 19),   // brown       (#8b4513)
    Rgb::new(32, 178, 170),  // sea green   (#20b2aa)
    Rgb::new(255, 99, 71),   // tomato      (#ff6347)
    Rgb::new(70, 130, 180),  // steel blue  (#4682b4)
    Rgb::new(186, 85, 211),  // orchid      (#ba55d3)
    Rgb::new(240, 230, 140), // khaki       (#f0e68c)
];

/// Highlight color shared by every reference-price dataset, in both modes.
pub const REFERENCE_LINE: Rgb = Rgb::new(255, 77, 79); // #ff4d4f

/// Get a palette color by series index, wrapping past the end.
#[inline]
pub fn series_color(idx: usize) -> Rgb {
    PALETTE[idx % PALETTE.len()]
}

/// A color per series, in assignment order. Past 18 series the palette
/// repeats, so `out[i] == out[i + 18]`.
pub fn distinct_colors(n: usize) -> Vec<Rgb> {
    (0..n).map(series_color).collect()
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lighten (`percent > 0`) or darken (`percent < 0`) every channel and
    /// attach an alpha.
    ///
    /// Each channel is scaled by `(100 + percent) / 100`, truncated toward
    /// zero, then clamped to `0..=255`. With `percent == 0` the channels come
    /// through bit-identical, so `adjust(0.0, a)` only sets the alpha.
    pub fn adjust(self, percent: f64, alpha: f64) -> Rgba {
        let scale = |channel: u8| -> u8 {
            let scaled = (f64::from(channel) * (100.0 + percent) / 100.0).trunc();
            scaled.clamp(0.0, 255.0) as u8
        };
        Rgba {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
            alpha,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    /// `rgba(r, g, b, a)` with the alpha printed the shortest way (`1`, not
    /// `1.0`), which is what CSS consumers expect.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.alpha)
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl Serialize for Rgba {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
