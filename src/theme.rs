use std::fs;
use std::path::Path;

use ratatui::style::Color;
use serde::Deserialize;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::config::CELL_WIDTH;
use crate::error::AssetError;
use crate::input::Direction;

const BUILTIN_THEME: &str = include_str!("../assets/theme.json");

/// Glyphs for one per-direction sprite set.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DirectionalGlyphs {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
}

impl DirectionalGlyphs {
    #[must_use]
    pub fn for_direction(&self, direction: Direction) -> &str {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }
}

/// Colors and glyphs used to draw a frame.
///
/// Every glyph covers exactly one grid cell, i.e. [`CELL_WIDTH`] terminal
/// columns.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub grid: Color,
    pub border: Color,
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub text: Color,
    pub muted: Color,
    pub empty_glyph: String,
    pub food_glyph: String,
    pub head_glyphs: DirectionalGlyphs,
    pub body_glyphs: DirectionalGlyphs,
}

impl Theme {
    /// Parses the theme compiled into the binary.
    pub fn builtin() -> Result<Self, AssetError> {
        parse_theme(BUILTIN_THEME)
    }

    /// Loads a theme file from disk.
    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let raw = fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let theme = parse_theme(&raw)?;
        info!(path = %path.display(), name = %theme.name, "loaded theme");
        Ok(theme)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    name: String,
    colors: ColorsFile,
    glyphs: GlyphsFile,
}

#[derive(Debug, Deserialize)]
struct ColorsFile {
    background: String,
    grid: String,
    border: String,
    snake_head: String,
    snake_body: String,
    food: String,
    text: String,
    muted: String,
}

#[derive(Debug, Deserialize)]
struct GlyphsFile {
    empty: String,
    food: String,
    head: DirectionalFile,
    body: DirectionalFile,
}

#[derive(Debug, Deserialize)]
struct DirectionalFile {
    up: String,
    down: String,
    left: String,
    right: String,
}

fn parse_theme(raw: &str) -> Result<Theme, AssetError> {
    let file = serde_json::from_str::<ThemeFile>(raw)?;
    let colors = &file.colors;
    let glyphs = file.glyphs;

    Ok(Theme {
        name: file.name,
        background: color("background", &colors.background)?,
        grid: color("grid", &colors.grid)?,
        border: color("border", &colors.border)?,
        snake_head: color("snake_head", &colors.snake_head)?,
        snake_body: color("snake_body", &colors.snake_body)?,
        food: color("food", &colors.food)?,
        text: color("text", &colors.text)?,
        muted: color("muted", &colors.muted)?,
        empty_glyph: cell_glyph("empty", glyphs.empty)?,
        food_glyph: cell_glyph("food", glyphs.food)?,
        head_glyphs: directional("head", glyphs.head)?,
        body_glyphs: directional("body", glyphs.body)?,
    })
}

fn directional(token: &'static str, file: DirectionalFile) -> Result<DirectionalGlyphs, AssetError> {
    Ok(DirectionalGlyphs {
        up: cell_glyph(token, file.up)?,
        down: cell_glyph(token, file.down)?,
        left: cell_glyph(token, file.left)?,
        right: cell_glyph(token, file.right)?,
    })
}

fn cell_glyph(token: &'static str, glyph: String) -> Result<String, AssetError> {
    let width = glyph.width();
    if width != CELL_WIDTH {
        return Err(AssetError::GlyphWidth {
            token,
            glyph,
            width,
            expected: CELL_WIDTH,
        });
    }

    Ok(glyph)
}

fn color(token: &'static str, value: &str) -> Result<Color, AssetError> {
    parse_hex_color(value)
        .or_else(|| parse_named_color(value))
        .ok_or_else(|| AssetError::Color {
            token,
            value: value.to_owned(),
        })
}

fn parse_named_color(value: &str) -> Option<Color> {
    let normalized = value.to_ascii_lowercase().replace(['-', '_'], "");
    match normalized.as_str() {
        "none" | "reset" => Some(Color::Reset),
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "white" => Some(Color::White),
        _ => None,
    }
}

fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some(Color::Rgb(red, green, blue))
}
