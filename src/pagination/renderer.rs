//! Rendering strategy: how the structural pieces of a page look.
//!
//! The engine owns layout (centering, fill lines, slicing); a [`Renderer`] only decides the
//! text and styling of the header, the navigation buttons and the two notices. Every method
//! has a default, so a custom renderer overrides just the pieces it cares about.

use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use super::{glyph::Glyph, page::PageLine};

fn gray() -> Style {
    Style::default().fg(Color::Gray)
}

fn white() -> Style {
    Style::default().fg(Color::White)
}

pub trait Renderer {
    /// Notice shown instead of a page when the collection is empty
    fn render_empty(&self) -> Line<'static> {
        Line::from(Span::styled("No results match.", gray()))
    }

    /// Notice shown instead of a page when `page` is outside `1..=total_pages`
    fn render_unknown_page(&self, _page: usize, total_pages: usize) -> Line<'static> {
        Line::from(Span::styled(
            format!("Unknown page selected. {} total pages.", total_pages),
            gray(),
        ))
    }

    /// Header text, centered by the engine between two fill lines
    fn render_header(&self, title: &Line<'static>, page: usize, total_pages: usize) -> Line<'static> {
        let mut spans = title.spans.clone();
        spans.push(Span::raw(" "));
        spans.push(Span::styled("(", gray()));
        spans.push(Span::styled(page.to_string(), white()));
        spans.push(Span::styled("/", gray()));
        spans.push(Span::styled(total_pages.to_string(), white()));
        spans.push(Span::styled(")", gray()));
        Line::from(spans)
    }

    fn render_previous_page_button(&self, glyph: &Glyph, command: &str) -> PageLine {
        bracketed_button(glyph, command, "Previous Page")
    }

    fn render_next_page_button(&self, glyph: &Glyph, command: &str) -> PageLine {
        bracketed_button(glyph, command, "Next Page")
    }
}

/// `" [x] "` with the glyph cell bound to `command`
fn bracketed_button(glyph: &Glyph, command: &str, hover: &str) -> PageLine {
    let mut button = PageLine::from_spans(vec![Span::raw(" "), Span::styled("[", gray())]);
    button.push_link(glyph.span(), command, Some(hover.to_string()));
    button.push_span(Span::styled("]", gray()));
    button.push_span(Span::raw(" "));
    button
}

/// The renderer used unless the builder is given another one
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRenderer;

impl Renderer for DefaultRenderer {}
