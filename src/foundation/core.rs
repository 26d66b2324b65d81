use crate::foundation::error::{CageError, CageResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Final output of a draw call: opaque 8-bit RGB pixels.
pub type Raster = image::RgbImage;

/// Straight (non-premultiplied) RGBA8 colour.
///
/// Serializes as `#rrggbb` when opaque and `#rrggbbaa` otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    pub fn to_premul(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn parse_hex(s: &str) -> CageResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let nibble = |c: u8| -> CageResult<u8> {
            (c as char)
                .to_digit(16)
                .map(|v| v as u8)
                .ok_or_else(|| CageError::invalid_argument(format!("invalid hex colour '{s}'")))
        };
        let bytes = hex.as_bytes();
        let byte = |i: usize| -> CageResult<u8> {
            Ok(nibble(bytes[i])? << 4 | nibble(bytes[i + 1])?)
        };

        match bytes.len() {
            3 => {
                let r = nibble(bytes[0])?;
                let g = nibble(bytes[1])?;
                let b = nibble(bytes[2])?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(CageError::invalid_argument(format!("invalid hex colour '{s}'"))),
        }
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Rgba8 {
    type Error = CageError;

    fn try_from(value: String) -> CageResult<Self> {
        Self::parse_hex(&value)
    }
}

impl From<Rgba8> for String {
    fn from(value: Rgba8) -> Self {
        value.to_hex()
    }
}

impl std::str::FromStr for Rgba8 {
    type Err = CageError;

    fn from_str(s: &str) -> CageResult<Self> {
        Self::parse_hex(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
