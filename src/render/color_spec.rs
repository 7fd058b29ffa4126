use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Default property cycle (`C0`..`C9`).
pub const COLOR_CYCLE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

const NAMED_COLORS: &[(&str, &str)] = &[
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("red", "#ff0000"),
    ("green", "#008000"),
    ("blue", "#0000ff"),
    ("cyan", "#00ffff"),
    ("magenta", "#ff00ff"),
    ("yellow", "#ffff00"),
    ("orange", "#ffa500"),
    ("purple", "#800080"),
    ("brown", "#a52a2a"),
    ("pink", "#ffc0cb"),
    ("gray", "#808080"),
    ("grey", "#808080"),
    ("olive", "#808000"),
    ("navy", "#000080"),
    ("teal", "#008080"),
    ("gold", "#ffd700"),
    ("tab:blue", "#1f77b4"),
    ("tab:orange", "#ff7f0e"),
    ("tab:green", "#2ca02c"),
    ("tab:red", "#d62728"),
    ("tab:purple", "#9467bd"),
    ("tab:brown", "#8c564b"),
    ("tab:pink", "#e377c2"),
    ("tab:gray", "#7f7f7f"),
    ("tab:olive", "#bcbd22"),
    ("tab:cyan", "#17becf"),
];

/// User-facing color specification.
///
/// Text specs accept single-letter base colors (`"r"`, `"k"`), named colors,
/// cycle references (`"C3"`), hex strings (`"#rgb"`, `"#rrggbb"`,
/// `"#rrggbbaa"`) and gray levels (`"0.25"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Rgba(Color),
    Text(String),
}

impl ColorSpec {
    /// Resolves the spec into the normalized color that is actually drawn.
    pub fn resolve(&self) -> PlotResult<Color> {
        match self {
            Self::Rgba(color) => {
                color.validate()?;
                Ok(*color)
            }
            Self::Text(text) => parse_color_text(text),
        }
    }

    /// Color of the `index`-th entry of the default cycle.
    #[must_use]
    pub fn cycle(index: usize) -> Self {
        Self::Text(format!("C{}", index % COLOR_CYCLE.len()))
    }
}

impl From<Color> for ColorSpec {
    fn from(value: Color) -> Self {
        Self::Rgba(value)
    }
}

impl From<(f64, f64, f64)> for ColorSpec {
    fn from((red, green, blue): (f64, f64, f64)) -> Self {
        Self::Rgba(Color::rgb(red, green, blue))
    }
}

impl From<&str> for ColorSpec {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ColorSpec {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl FromStr for ColorSpec {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color_text(s)?;
        Ok(Self::Text(s.to_owned()))
    }
}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgba(color) => write!(
                f,
                "({}, {}, {}, {})",
                color.red, color.green, color.blue, color.alpha
            ),
            Self::Text(text) => f.write_str(text),
        }
    }
}

fn parse_color_text(text: &str) -> PlotResult<Color> {
    let normalized = text.trim().to_ascii_lowercase();

    if let Some(hex) = normalized.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| PlotError::InvalidColor(text.to_owned()));
    }

    if let Some(color) = base_color(&normalized) {
        return Ok(color);
    }

    if let Some(index) = normalized
        .strip_prefix('c')
        .and_then(|index| index.parse::<usize>().ok())
    {
        let hex = COLOR_CYCLE[index % COLOR_CYCLE.len()];
        return parse_hex(&hex[1..]).ok_or_else(|| PlotError::InvalidColor(text.to_owned()));
    }

    if let Some((_, hex)) = NAMED_COLORS.iter().find(|(name, _)| *name == normalized) {
        return parse_hex(&hex[1..]).ok_or_else(|| PlotError::InvalidColor(text.to_owned()));
    }

    match normalized.parse::<f64>() {
        Ok(level) if (0.0..=1.0).contains(&level) => Ok(Color::rgb(level, level, level)),
        _ => Err(PlotError::InvalidColor(text.to_owned())),
    }
}

fn base_color(name: &str) -> Option<Color> {
    let color = match name {
        "b" => Color::rgb(0.0, 0.0, 1.0),
        "g" => Color::rgb(0.0, 0.5, 0.0),
        "r" => Color::rgb(1.0, 0.0, 0.0),
        "c" => Color::rgb(0.0, 0.75, 0.75),
        "m" => Color::rgb(0.75, 0.0, 0.75),
        "y" => Color::rgb(0.75, 0.75, 0.0),
        "k" => Color::BLACK,
        "w" => Color::WHITE,
        _ => return None,
    };
    Some(color)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    let short = |index: usize| channel(index..index + 1).map(|value| value * 17);

    match hex.len() {
        3 => Some(Color::rgba8(short(0)?, short(1)?, short(2)?, 255)),
        6 => Some(Color::rgba8(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
        8 => Some(Color::rgba8(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => None,
    }
}
