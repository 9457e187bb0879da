//! Visual theming shared by the canvas effects.
//!
//! Colors are parsed from `#rrggbb` / `#rrggbbaa` strings so they can be set
//! from the JSON site configuration.

use serde::Deserialize;
use thiserror::Error;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

/// Rejected color literal.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid color `{0}`: expected #rrggbb or #rrggbbaa")]
pub struct ColorParseError(String);

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Lighten the color by a factor (0.0 = unchanged, 1.0 = white)
	pub fn lighten(self, factor: f64) -> Self {
		let f = factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 + (255.0 - self.r as f64) * f) as u8,
			g: (self.g as f64 + (255.0 - self.g as f64) * f) as u8,
			b: (self.b as f64 + (255.0 - self.b as f64) * f) as u8,
			a: self.a,
		}
	}

	/// Darken the color by a factor (0.0 = unchanged, 1.0 = black)
	pub fn darken(self, factor: f64) -> Self {
		let f = 1.0 - factor.clamp(0.0, 1.0);
		Self {
			r: (self.r as f64 * f) as u8,
			g: (self.g as f64 * f) as u8,
			b: (self.b as f64 * f) as u8,
			a: self.a,
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}

	/// Parse `#rrggbb` or `#rrggbbaa`.
	pub fn parse_hex(s: &str) -> Result<Self, ColorParseError> {
		let err = || ColorParseError(s.to_string());
		let hex = s.trim().strip_prefix('#').ok_or_else(err)?;
		if !hex.is_ascii() || !(hex.len() == 6 || hex.len() == 8) {
			return Err(err());
		}
		let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
		let a = if hex.len() == 8 {
			channel(6)? as f64 / 255.0
		} else {
			1.0
		};
		Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
	}
}

impl TryFrom<String> for Color {
	type Error = ColorParseError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse_hex(&value)
	}
}

/// Colors used by the canvas effects.
#[derive(Clone, Debug)]
pub struct Theme {
	pub orbit_line: Color,
	pub starlight: Color,
	/// Large blurred glows behind the bubble field.
	pub ambient_glows: [Color; 2],
}

impl Theme {
	/// Dark neon theme (default)
	pub fn neon() -> Self {
		Self {
			orbit_line: Color::rgba(0, 212, 255, 0.15),
			starlight: Color::rgb(230, 240, 255),
			ambient_glows: [
				Color::rgba(59, 130, 246, 0.08),
				Color::rgba(147, 51, 234, 0.08),
			],
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::neon()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_hex_with_and_without_alpha() {
		assert_eq!(Color::parse_hex("#a855f7"), Ok(Color::rgb(0xa8, 0x55, 0xf7)));
		let c = Color::parse_hex("#00d4ff80").unwrap();
		assert_eq!((c.r, c.g, c.b), (0, 0xd4, 0xff));
		assert!((c.a - 128.0 / 255.0).abs() < 1e-9);
	}

	#[test]
	fn rejects_malformed_hex() {
		for bad in ["a855f7", "#a855f", "#zzzzzz", "#é55f7a"] {
			assert!(Color::parse_hex(bad).is_err(), "{bad} should be rejected");
		}
	}

	#[test]
	fn css_output_drops_opaque_alpha() {
		assert_eq!(Color::rgb(255, 0, 16).to_css(), "#ff0010");
		assert_eq!(Color::rgba(1, 2, 3, 0.5).to_css(), "rgba(1, 2, 3, 0.5)");
	}

	#[test]
	fn deserializes_from_json_string() {
		let c: Color = serde_json::from_str("\"#10b981\"").unwrap();
		assert_eq!(c, Color::rgb(0x10, 0xb9, 0x81));
	}
}
