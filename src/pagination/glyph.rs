//! Single styled characters used for separator lines and navigation buttons.

use ratatui::{
    style::{Color, Style},
    text::Span,
};
use unicode_width::UnicodeWidthChar;

/// Default width of a rendered page, in terminal cells
pub const WIDTH: usize = 55;

/// Default number of items shown per page
pub const RESULTS_PER_PAGE: usize = 6;

pub const LINE_CHARACTER: char = '-';
pub const LINE_COLOR: Color = Color::DarkGray;

pub const PREVIOUS_PAGE_BUTTON_CHARACTER: char = '\u{00AB}';
pub const PREVIOUS_PAGE_BUTTON_COLOR: Color = Color::Red;

pub const NEXT_PAGE_BUTTON_CHARACTER: char = '\u{00BB}';
pub const NEXT_PAGE_BUTTON_COLOR: Color = Color::Green;

/// A character paired with the style it is drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub character: char,
    pub style: Style,
}

impl Glyph {
    pub fn new(character: char, style: Style) -> Self {
        Self { character, style }
    }

    /// Default decorative line glyph: a dark gray dash
    pub fn line() -> Self {
        Self::new(LINE_CHARACTER, Style::default().fg(LINE_COLOR))
    }

    /// Default previous-page button glyph
    pub fn previous_button() -> Self {
        Self::new(
            PREVIOUS_PAGE_BUTTON_CHARACTER,
            Style::default().fg(PREVIOUS_PAGE_BUTTON_COLOR),
        )
    }

    /// Default next-page button glyph
    pub fn next_button() -> Self {
        Self::new(
            NEXT_PAGE_BUTTON_CHARACTER,
            Style::default().fg(NEXT_PAGE_BUTTON_COLOR),
        )
    }

    /// Replace the character, keeping the style
    pub fn character(mut self, character: char) -> Self {
        self.character = character;
        self
    }

    /// Replace the style, keeping the character
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Number of terminal cells the character occupies. Control characters report 0.
    pub fn cell_width(&self) -> usize {
        self.character.width().unwrap_or(0)
    }

    /// The glyph as a one-character span
    pub fn span(&self) -> Span<'static> {
        Span::styled(self.character.to_string(), self.style)
    }

    /// Spans covering exactly `cells` terminal cells with this glyph.
    ///
    /// Wide glyphs that do not divide `cells` evenly leave a remainder, which is padded
    /// with spaces in the glyph's style. Returns no spans for zero cells.
    pub fn fill(&self, cells: usize) -> Vec<Span<'static>> {
        let glyph_width = self.cell_width().max(1);
        let count = cells / glyph_width;
        let remainder = cells % glyph_width;

        let mut spans = Vec::with_capacity(2);
        if count > 0 {
            spans.push(Span::styled(
                self.character.to_string().repeat(count),
                self.style,
            ));
        }
        if remainder > 0 {
            spans.push(Span::styled(" ".repeat(remainder), self.style));
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Modifier;

    fn total_width(spans: &[Span<'_>]) -> usize {
        spans.iter().map(Span::width).sum()
    }

    #[test]
    fn test_defaults() {
        let line = Glyph::line();
        assert_eq!(line.character, '-');
        assert_eq!(line.style.fg, Some(Color::DarkGray));
        assert_eq!(Glyph::previous_button().character, '«');
        assert_eq!(Glyph::previous_button().style.fg, Some(Color::Red));
        assert_eq!(Glyph::next_button().character, '»');
        assert_eq!(Glyph::next_button().style.fg, Some(Color::Green));
    }

    #[test]
    fn test_setters_keep_other_half() {
        let glyph = Glyph::line().character('=');
        assert_eq!(glyph.character, '=');
        assert_eq!(glyph.style.fg, Some(Color::DarkGray));

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let glyph = glyph.style(bold);
        assert_eq!(glyph.character, '=');
        assert_eq!(glyph.style, bold);
    }

    #[test]
    fn test_fill_narrow() {
        let spans = Glyph::line().fill(7);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "-------");
        assert!(Glyph::line().fill(0).is_empty());
    }

    #[test]
    fn test_fill_wide_glyph_pads_remainder() {
        let wide = Glyph::new('界', Style::default());
        assert_eq!(wide.cell_width(), 2);

        let spans = wide.fill(5);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "界界");
        assert_eq!(spans[1].content, " ");
        assert_eq!(total_width(&spans), 5);
    }

    #[test]
    fn test_control_character_has_no_width() {
        assert_eq!(Glyph::new('\u{7}', Style::default()).cell_width(), 0);
    }
}
