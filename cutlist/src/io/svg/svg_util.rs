use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use svg::node::element::Path;
use svg::node::element::path::Data;

use crate::entities::Segment;
use crate::geometry::Rect;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the skyline of the sheet on top
    #[serde(default)]
    pub skyline: bool,
    ///Print the id of each part inside its rectangle
    #[serde(default)]
    pub labels: bool,
    ///Fill parts with the color of their material instead of the theme's part fill
    #[serde(default)]
    pub material_colors: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            skyline: false,
            labels: true,
            material_colors: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub sheet_fill: Color,
    pub part_fill: Color,
    pub margin_fill: Color,
    pub skyline_color: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        sheet_fill: Color(0xCC, 0x82, 0x4A),
        part_fill: Color(0xFF, 0xC8, 0x79),
        margin_fill: Color(0x8C, 0x5A, 0x33),
        skyline_color: Color(0xD0, 0x00, 0x00),
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        sheet_fill: Color(0xD3, 0xD3, 0xD3),
        part_fill: Color(0x7A, 0x7A, 0x7A),
        margin_fill: Color(0xA0, 0xA0, 0xA0),
        skyline_color: Color(0x00, 0x00, 0x00),
    };
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Parses a `#RRGGBB` (or `RRGGBB`) hex string
    pub fn parse(s: &str) -> Option<Color> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Color(r, g, b))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {s}")))
    }
}

pub fn rect_data(rect: &Rect) -> Data {
    Data::new()
        .move_to((rect.x_min, rect.y_min))
        .line_to((rect.x_max, rect.y_min))
        .line_to((rect.x_max, rect.y_max))
        .line_to((rect.x_min, rect.y_max))
        .close()
}

/// Outline of the skyline: a staircase running over the tops of all segments
pub fn skyline_data(segments: &[Segment]) -> Data {
    let mut data = Data::new();
    for (i, seg) in segments.iter().enumerate() {
        data = match i {
            0 => data.move_to((seg.x, seg.y)),
            _ => data.line_to((seg.x, seg.y)),
        };
        data = data.line_to((seg.x_max(), seg.y));
    }
    data
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_parse_with_or_without_hash() {
        assert_eq!(Color::parse("#FFC879"), Some(Color(0xFF, 0xC8, 0x79)));
        assert_eq!(Color::parse("00ff00"), Some(Color(0x00, 0xFF, 0x00)));
        assert_eq!(Color::parse("walnut"), None);
        assert_eq!(Color::parse("#FFF"), None);
        assert_eq!(format!("{}", Color(0x0A, 0xB0, 0xFF)), "#0AB0FF");
    }
}
