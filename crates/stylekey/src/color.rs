//! Color codec: HSLA tuples to hexadecimal CSS colors.
//!
//! Design tokens author colors as `[hue, saturation, lightness, alpha]` with
//! hue in degrees (0–360), saturation and lightness in percent (0–100) and
//! alpha in 0–1. CSS output uses hex:
//!
//! - opaque colors produce 6 digits, translucent ones 8 (alpha appended)
//! - when every channel pair repeats one digit the shorthand form is used
//!
//! ```rust
//! use stylekey::color::Hsla;
//!
//! assert_eq!(Hsla::new(0.0, 100.0, 50.0, 1.0).to_hex(), "#f00");
//! assert_eq!(Hsla::new(0.0, 100.0, 50.0, 0.5).to_hex(), "#ff000080");
//! assert_eq!(Hsla::new(0.0, 0.0, 0.0, 1.0).to_hex(), "#000");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, StyleKeyError};
use crate::value::{format_number, number_list_text};

/// A color in hue/saturation/lightness/alpha form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    /// Hue in degrees; wrapped into 0–360.
    pub h: f64,
    /// Saturation in percent.
    pub s: f64,
    /// Lightness in percent.
    pub l: f64,
    /// Alpha in 0–1.
    pub a: f64,
}

/// Opaque black, the fallback color for shadows.
pub const OPAQUE_BLACK: Hsla = Hsla {
    h: 0.0,
    s: 0.0,
    l: 0.0,
    a: 1.0,
};

impl Hsla {
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    /// Builds an HSLA color from a `[h, s, l, a]` slice.
    ///
    /// Anything other than exactly four finite numbers is an
    /// [`InvalidHexFormat`](StyleKeyError::InvalidHexFormat) error.
    pub fn from_components(components: &[f64]) -> Result<Self> {
        match components {
            [h, s, l, a] if components.iter().all(|c| c.is_finite()) => {
                Ok(Self::new(*h, *s, *l, *a))
            }
            _ => Err(StyleKeyError::invalid_color(format!(
                "expected an [h, s, l, a] tuple, got {:?}",
                components
            ))),
        }
    }

    /// Returns the `[h, s, l, a]` components.
    pub fn components(&self) -> [f64; 4] {
        [self.h, self.s, self.l, self.a]
    }

    /// The same color with hue wrapped into `[0, 360)` and saturation,
    /// lightness and alpha clamped to their ranges.
    pub fn normalized(&self) -> Self {
        let h = self.h.rem_euclid(360.0);
        Self {
            // rem_euclid can round up to the divisor for tiny negative hues.
            h: if h >= 360.0 { 0.0 } else { h },
            s: self.s.clamp(0.0, 100.0),
            l: self.l.clamp(0.0, 100.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Whether every component is already in range.
    pub fn is_normalized(&self) -> bool {
        *self == self.normalized()
    }

    /// Key text of the normalized color, e.g. `[0,100,50,1]`.
    pub fn key_text(&self, property: &str) -> Result<String> {
        number_list_text(&self.normalized().components(), property)
    }

    /// Converts to 8-bit RGBA using the chroma / secondary / match method.
    pub fn to_rgba(&self) -> Rgba {
        let Hsla { h, s, l, a } = self.normalized();
        let s = s / 100.0;
        let l = l / 100.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let sector = h / 60.0;
        let secondary = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let offset = l - chroma / 2.0;

        let (r, g, b) = match sector as u32 {
            0 => (chroma, secondary, 0.0),
            1 => (secondary, chroma, 0.0),
            2 => (0.0, chroma, secondary),
            3 => (0.0, secondary, chroma),
            4 => (secondary, 0.0, chroma),
            _ => (chroma, 0.0, secondary),
        };

        Rgba {
            r: channel(r + offset),
            g: channel(g + offset),
            b: channel(b + offset),
            a: channel(a),
        }
    }

    /// Hex string, minimized to shorthand when possible.
    pub fn to_hex(&self) -> String {
        self.to_rgba().to_hex()
    }
}

fn channel(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Full-length hex: 6 digits when opaque, 8 otherwise.
    pub fn to_full_hex(&self) -> String {
        if self.a == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Hex string collapsed to 3/4-digit shorthand when every pair repeats.
    pub fn to_hex(&self) -> String {
        let full = self.to_full_hex();
        shorten(&full[1..]).unwrap_or(full)
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| StyleKeyError::invalid_color(format!("missing '#' prefix: {}", hex)))?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(StyleKeyError::invalid_color(format!(
                "invalid hex digits: {}",
                hex
            )));
        }

        let expanded: String = match digits.len() {
            3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_string(),
            _ => {
                return Err(StyleKeyError::invalid_color(format!(
                    "{} (must be 3, 4, 6 or 8 digits)",
                    hex
                )))
            }
        };

        let pair = |i: usize| {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .map_err(|_| StyleKeyError::invalid_color(format!("invalid hex: {}", hex)))
        };
        let a = if expanded.len() == 8 { pair(6)? } else { u8::MAX };
        Ok(Rgba {
            r: pair(0)?,
            g: pair(2)?,
            b: pair(4)?,
            a,
        })
    }
}

/// Collapses a full-length hex color to shorthand if every channel pair is
/// made of two identical digits; otherwise returns it unchanged.
///
/// Input must be `#` followed by 6 or 8 hex digits.
pub fn minify_hex(hex: &str) -> Result<String> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| StyleKeyError::invalid_color(format!("missing '#' prefix: {}", hex)))?;
    if !matches!(digits.len(), 6 | 8) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StyleKeyError::invalid_color(format!(
            "{} (must be 6 or 8 hex digits)",
            hex
        )));
    }
    Ok(shorten(digits).unwrap_or_else(|| hex.to_string()))
}

fn shorten(digits: &str) -> Option<String> {
    let bytes = digits.as_bytes();
    if bytes.chunks(2).all(|pair| pair[0] == pair[1]) {
        let short: String = bytes.chunks(2).map(|pair| pair[0] as char).collect();
        Some(format!("#{}", short))
    } else {
        None
    }
}

/// One stop of a linear gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// `[h, s, l, a]` tuple.
    pub color: Vec<f64>,
    /// Position in percent.
    pub at: f64,
}

/// A color token value: a solid HSLA tuple or a linear gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Solid(Vec<f64>),
    Gradient { angle: f64, stops: Vec<GradientStop> },
}

impl ColorValue {
    /// Key payload text: `[h,s,l,a]` or `["linear",angle,[[h,s,l,a],pos],…]`.
    pub fn key_text(&self, property: &str) -> Result<String> {
        match self {
            ColorValue::Solid(components) => Hsla::from_components(components)?.key_text(property),
            ColorValue::Gradient { angle, stops } => {
                if stops.len() < 2 {
                    return Err(StyleKeyError::unsupported_value(
                        property,
                        &format!("gradient with {} stop(s)", stops.len()),
                        property,
                    ));
                }
                let mut out = format!("[\"linear\",{}", number_text(*angle, property)?);
                for stop in stops {
                    let color = Hsla::from_components(&stop.color)?;
                    out.push_str(&format!(
                        ",[{},{}]",
                        color.key_text(property)?,
                        number_text(stop.at, property)?
                    ));
                }
                out.push(']');
                Ok(out)
            }
        }
    }
}

fn number_text(n: f64, property: &str) -> Result<String> {
    format_number(n)
        .ok_or_else(|| StyleKeyError::unsupported_value(property, &n.to_string(), property))
}
