//! Strip: a horizontal line of styled terminal cells.
//!
//! Widgets produce `Vec<Strip>` from their `render()` method; the compositor
//! places them into its cell buffer.

use crossterm::style::Color;

use crate::css::styles::Style;
use crate::css::theme::Theme;

use super::color::resolve_color;

// ---------------------------------------------------------------------------
// CellStyle
// ---------------------------------------------------------------------------

/// Visual style for a single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub reverse: bool,
}

impl CellStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a [`Style`]'s colors through `theme` and read its font flags.
    pub fn from_style(style: &Style, theme: &Theme) -> Self {
        let mut cell = CellStyle {
            fg: style.foreground.as_deref().and_then(|v| resolve_color(theme, v)),
            bg: style.background.as_deref().and_then(|v| resolve_color(theme, v)),
            ..CellStyle::default()
        };
        if let Some(font) = style.font.as_deref() {
            cell.apply_font(font);
        }
        cell
    }

    /// Turn on the attributes named in a font value such as `"bold italic"`.
    /// `normal` and unknown words are ignored.
    pub fn apply_font(&mut self, font: &str) {
        for word in font.split(|c: char| c.is_whitespace() || c == ',') {
            match word.to_ascii_lowercase().as_str() {
                "bold" => self.bold = true,
                "dim" => self.dim = true,
                "italic" => self.italic = true,
                "underline" => self.underline = true,
                "strikethrough" | "strike" => self.strikethrough = true,
                "reverse" => self.reverse = true,
                "" | "normal" => {}
                other => log::debug!("ignoring font attribute {other:?}"),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// StyledCell
// ---------------------------------------------------------------------------

/// One character with its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledCell {
    pub ch: char,
    pub style: CellStyle,
}

impl StyledCell {
    pub fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }

    /// A space with default style.
    pub fn blank() -> Self {
        Self::blank_styled(CellStyle::default())
    }

    /// A space with the given style.
    pub fn blank_styled(style: CellStyle) -> Self {
        Self { ch: ' ', style }
    }
}

impl Default for StyledCell {
    fn default() -> Self {
        Self::blank()
    }
}

// ---------------------------------------------------------------------------
// Strip
// ---------------------------------------------------------------------------

/// A run of cells on row `y` starting at column `x_offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    pub y: i32,
    pub x_offset: i32,
    pub cells: Vec<StyledCell>,
}

impl Strip {
    pub fn new(y: i32, x_offset: i32) -> Self {
        Self {
            y,
            x_offset,
            cells: Vec::new(),
        }
    }

    /// A strip of `width` copies of `ch`.
    pub fn repeat(y: i32, x_offset: i32, ch: char, width: i32, style: CellStyle) -> Self {
        Self {
            y,
            x_offset,
            cells: vec![StyledCell::new(ch, style); width.max(0) as usize],
        }
    }

    pub fn push(&mut self, ch: char, style: CellStyle) {
        self.cells.push(StyledCell::new(ch, style));
    }

    pub fn push_str(&mut self, text: &str, style: CellStyle) {
        self.cells
            .extend(text.chars().map(|ch| StyledCell::new(ch, style)));
    }

    /// Width in cells.
    pub fn width(&self) -> i32 {
        self.cells.len() as i32
    }

    /// Pad with styled spaces, or truncate, to exactly `width` cells.
    pub fn fill(&mut self, width: i32, style: CellStyle) {
        self.cells
            .resize(width.max(0) as usize, StyledCell::blank_styled(style));
    }

    /// Rightmost x position, exclusive.
    pub fn right(&self) -> i32 {
        self.x_offset + self.width()
    }

    /// The characters as a string.
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_style_resolves_variables() {
        let mut theme = Theme::new("t");
        theme.set_colors([("$accent", "#ff0000")]);
        let style = Style::new()
            .with_foreground("$accent")
            .with_background("blue")
            .with_font("bold underline");
        let cell = CellStyle::from_style(&style, &theme);
        assert_eq!(cell.fg, Some(Color::Rgb { r: 255, g: 0, b: 0 }));
        assert_eq!(cell.bg, Some(Color::Blue));
        assert!(cell.bold && cell.underline);
        assert!(!cell.italic);
    }

    #[test]
    fn unparseable_color_falls_back_to_default() {
        let theme = Theme::new("t");
        let style = Style::new().with_foreground("$missing").with_background("nonsense");
        assert_eq!(CellStyle::from_style(&style, &theme), CellStyle::default());
    }

    #[test]
    fn font_words_are_flexible() {
        let mut cell = CellStyle::new();
        cell.apply_font("Italic, reverse normal");
        assert!(cell.italic && cell.reverse && !cell.bold);
    }

    #[test]
    fn strip_building() {
        let mut strip = Strip::new(2, 3);
        strip.push('a', CellStyle::default());
        strip.push_str("bc", CellStyle::default());
        assert_eq!(strip.width(), 3);
        assert_eq!(strip.right(), 6);
        strip.fill(5, CellStyle::default());
        assert_eq!(strip.text(), "abc  ");
        strip.fill(2, CellStyle::default());
        assert_eq!(strip.text(), "ab");
        assert_eq!(Strip::repeat(0, 0, '─', 3, CellStyle::default()).text(), "───");
        assert!(Strip::repeat(0, 0, '─', -1, CellStyle::default()).cells.is_empty());
    }
}
