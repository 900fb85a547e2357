use std::str::FromStr;

use colors_transform::Color;
use colors_transform::{AlphaColor, Hsl, Rgb};
use lazy_static::lazy_static;

/// A named CSS color and its hex value
pub struct CssColorEntry {
    pub name: &'static str,
    pub value: &'static str,
}

/// A RGB color with alpha channel. Components are in the 0..=255 range;
/// alpha 0 is fully transparent, 255 fully solid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RgbColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl RgbColor {
    /// Create a new color with r, g, b and alpha values
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        RgbColor { r, g, b, a }
    }

    /// Build a color from `rgb()` / `rgba()` components. Out-of-range
    /// components are clipped, so `rgb(300, 0, -10)` becomes `rgb(255, 0, 0)`.
    pub fn from_rgb(r: f32, g: f32, b: f32, a: f32) -> Self {
        RgbColor {
            r: r.clamp(0.0, 255.0),
            g: g.clamp(0.0, 255.0),
            b: b.clamp(0.0, 255.0),
            a: a.clamp(0.0, 255.0),
        }
    }

    /// Build a color from `hsl()` / `hsla()` components: hue in degrees,
    /// saturation and lightness as percentages.
    pub fn from_hsl(h: f32, s: f32, l: f32, a: f32) -> Self {
        let hue = ((h % 360.0) + 360.0) % 360.0;
        let hsl = Hsl::from(hue, s.clamp(0.0, 100.0), l.clamp(0.0, 100.0));
        let rgb = hsl.to_rgb();

        RgbColor::from_rgb(rgb.get_red(), rgb.get_green(), rgb.get_blue(), a)
    }

    /// True when the color is fully transparent, a favourite of text hiders.
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }
}

impl Default for RgbColor {
    fn default() -> Self {
        // Solid black
        RgbColor {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 255.0,
        }
    }
}

impl From<&str> for RgbColor {
    fn from(value: &str) -> Self {
        match value {
            value if value.is_empty() => RgbColor::default(),
            value if value.starts_with('#') => parse_hex(value),
            value if value.starts_with("rgb(") || value.starts_with("rgba(") => {
                match Rgb::from_str(value) {
                    Ok(rgb) => RgbColor::from_rgb(
                        rgb.get_red(),
                        rgb.get_green(),
                        rgb.get_blue(),
                        rgb.get_alpha() * 255.0,
                    ),
                    Err(_) => RgbColor::default(),
                }
            }
            value if value.starts_with("hsl(") || value.starts_with("hsla(") => {
                match Hsl::from_str(value) {
                    Ok(hsl) => {
                        let rgb = hsl.to_rgb();
                        RgbColor::from_rgb(
                            rgb.get_red(),
                            rgb.get_green(),
                            rgb.get_blue(),
                            rgb.get_alpha() * 255.0,
                        )
                    }
                    Err(_) => RgbColor::default(),
                }
            }
            _ => name_to_color(value).unwrap_or_default(),
        }
    }
}

/// Look up a named color, case-insensitively. Returns `None` for names that
/// are not in the table, so the caller can tell "black" apart from garbage.
pub fn name_to_color(color_name: &str) -> Option<RgbColor> {
    let name = color_name.to_ascii_lowercase();
    CSS_COLORNAMES
        .iter()
        .find(|entry| entry.name == name)
        .map(|entry| parse_hex(entry.value))
}

fn is_hex(value: &str) -> bool {
    if !value.starts_with('#') {
        return false;
    }

    value.chars().skip(1).all(|c| c.is_ascii_hexdigit())
}

fn parse_hex(value: &str) -> RgbColor {
    if !is_hex(value) {
        return RgbColor::default();
    }

    let component = |from: usize, to: usize| -> f32 {
        i32::from_str_radix(&value[from..to], 16).unwrap_or(0) as f32
    };
    let short_component = |at: usize| -> f32 {
        let c = i32::from_str_radix(&value[at..at + 1], 16).unwrap_or(0);
        (c * 16 + c) as f32
    };

    match value.len() {
        // #rgb
        4 => RgbColor::new(
            short_component(1),
            short_component(2),
            short_component(3),
            255.0,
        ),
        // #rgba
        5 => RgbColor::new(
            short_component(1),
            short_component(2),
            short_component(3),
            short_component(4),
        ),
        // #rrggbb
        7 => RgbColor::new(component(1, 3), component(3, 5), component(5, 7), 255.0),
        // #rrggbbaa
        9 => RgbColor::new(
            component(1, 3),
            component(3, 5),
            component(5, 7),
            component(7, 9),
        ),
        _ => RgbColor::default(),
    }
}

lazy_static! {
    // The CSS2.1 named colors plus the extended names that keep showing up in
    // mail bodies. Not the complete CSS4 list.
    pub static ref CSS_COLORNAMES: Vec<CssColorEntry> = vec![
        CssColorEntry { name: "aqua", value: "#00ffff" },
        CssColorEntry { name: "azure", value: "#f0ffff" },
        CssColorEntry { name: "beige", value: "#f5f5dc" },
        CssColorEntry { name: "black", value: "#000000" },
        CssColorEntry { name: "blue", value: "#0000ff" },
        CssColorEntry { name: "brown", value: "#a52a2a" },
        CssColorEntry { name: "crimson", value: "#dc143c" },
        CssColorEntry { name: "cyan", value: "#00ffff" },
        CssColorEntry { name: "darkblue", value: "#00008b" },
        CssColorEntry { name: "darkgray", value: "#a9a9a9" },
        CssColorEntry { name: "darkgreen", value: "#006400" },
        CssColorEntry { name: "darkred", value: "#8b0000" },
        CssColorEntry { name: "fuchsia", value: "#ff00ff" },
        CssColorEntry { name: "ghostwhite", value: "#f8f8ff" },
        CssColorEntry { name: "gold", value: "#ffd700" },
        CssColorEntry { name: "gray", value: "#808080" },
        CssColorEntry { name: "green", value: "#008000" },
        CssColorEntry { name: "grey", value: "#808080" },
        CssColorEntry { name: "hotpink", value: "#ff69b4" },
        CssColorEntry { name: "indigo", value: "#4b0082" },
        CssColorEntry { name: "ivory", value: "#fffff0" },
        CssColorEntry { name: "lavender", value: "#e6e6fa" },
        CssColorEntry { name: "lightblue", value: "#add8e6" },
        CssColorEntry { name: "lightgray", value: "#d3d3d3" },
        CssColorEntry { name: "lightgreen", value: "#90ee90" },
        CssColorEntry { name: "lightgrey", value: "#d3d3d3" },
        CssColorEntry { name: "lightyellow", value: "#ffffe0" },
        CssColorEntry { name: "lime", value: "#00ff00" },
        CssColorEntry { name: "magenta", value: "#ff00ff" },
        CssColorEntry { name: "maroon", value: "#800000" },
        CssColorEntry { name: "navy", value: "#000080" },
        CssColorEntry { name: "olive", value: "#808000" },
        CssColorEntry { name: "orange", value: "#ffa500" },
        CssColorEntry { name: "pink", value: "#ffc0cb" },
        CssColorEntry { name: "purple", value: "#800080" },
        CssColorEntry { name: "red", value: "#ff0000" },
        CssColorEntry { name: "silver", value: "#c0c0c0" },
        CssColorEntry { name: "skyblue", value: "#87ceeb" },
        CssColorEntry { name: "snow", value: "#fffafa" },
        CssColorEntry { name: "teal", value: "#008080" },
        CssColorEntry { name: "transparent", value: "#00000000" },
        CssColorEntry { name: "violet", value: "#ee82ee" },
        CssColorEntry { name: "white", value: "#ffffff" },
        CssColorEntry { name: "whitesmoke", value: "#f5f5f5" },
        CssColorEntry { name: "yellow", value: "#ffff00" },
    ];
}
