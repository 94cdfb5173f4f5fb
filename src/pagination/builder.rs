//! Builder for [`Pagination`]: the only way to construct one.

use std::{fmt, num::NonZeroUsize, sync::Arc};

use ratatui::text::Line;

use super::{
    command::PageCommand,
    glyph::{Glyph, RESULTS_PER_PAGE, WIDTH},
    renderer::{DefaultRenderer, Renderer},
    row::RowRenderer,
    Pagination,
};
use crate::error::{PaginationError, PaginationResult};

/// Collects rendering parameters; [`PaginationBuilder::build`] freezes them into a
/// [`Pagination`].
#[derive(Clone)]
pub struct PaginationBuilder {
    width: usize,
    results_per_page: usize,
    line: Glyph,
    previous_button: Glyph,
    next_button: Glyph,
    renderer: Arc<dyn Renderer + Send + Sync>,
    truncate: bool,
}

impl Default for PaginationBuilder {
    fn default() -> Self {
        Self {
            width: WIDTH,
            results_per_page: RESULTS_PER_PAGE,
            line: Glyph::line(),
            previous_button: Glyph::previous_button(),
            next_button: Glyph::next_button(),
            renderer: Arc::new(DefaultRenderer),
            truncate: false,
        }
    }
}

impl fmt::Debug for PaginationBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginationBuilder")
            .field("width", &self.width)
            .field("results_per_page", &self.results_per_page)
            .field("line", &self.line)
            .field("previous_button", &self.previous_button)
            .field("next_button", &self.next_button)
            .field("truncate", &self.truncate)
            .finish_non_exhaustive()
    }
}

impl PaginationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of every rendered line, in terminal cells
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn results_per_page(mut self, results_per_page: usize) -> Self {
        self.results_per_page = results_per_page;
        self
    }

    pub fn renderer<R>(mut self, renderer: R) -> Self
    where
        R: Renderer + Send + Sync + 'static,
    {
        self.renderer = Arc::new(renderer);
        self
    }

    /// Use a renderer that is already shared with other paginations
    pub fn shared_renderer(mut self, renderer: Arc<dyn Renderer + Send + Sync>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Glyph repeated to fill the title bar, the footer and separator lines
    pub fn line(mut self, line: Glyph) -> Self {
        self.line = line;
        self
    }

    pub fn previous_button(mut self, previous_button: Glyph) -> Self {
        self.previous_button = previous_button;
        self
    }

    pub fn next_button(mut self, next_button: Glyph) -> Self {
        self.next_button = next_button;
        self
    }

    /// Clip lines wider than the configured width. Off by default.
    pub fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    fn validate(&self) -> PaginationResult<NonZeroUsize> {
        if self.width == 0 {
            return Err(PaginationError::InvalidConfig(
                "width must be greater than 0".to_string(),
            ));
        }

        let results_per_page = NonZeroUsize::new(self.results_per_page).ok_or_else(|| {
            PaginationError::InvalidConfig("results per page must be greater than 0".to_string())
        })?;

        for (name, glyph) in [
            ("line", &self.line),
            ("previous button", &self.previous_button),
            ("next button", &self.next_button),
        ] {
            if glyph.cell_width() == 0 {
                return Err(PaginationError::InvalidConfig(format!(
                    "{} character {:?} does not occupy a terminal cell",
                    name, glyph.character
                )));
            }
        }

        Ok(results_per_page)
    }

    /// Validate the configuration and create the pagination.
    ///
    /// Fails with [`PaginationError::InvalidConfig`] for a zero width, zero results per page
    /// or a glyph that takes no space on screen.
    pub fn build<T, R, C>(
        self,
        title: impl Into<Line<'static>>,
        row_renderer: R,
        page_command: C,
    ) -> PaginationResult<Pagination<T>>
    where
        R: RowRenderer<T> + Send + Sync + 'static,
        C: PageCommand + Send + Sync + 'static,
    {
        let results_per_page = self.validate()?;

        Ok(Pagination {
            width: self.width,
            results_per_page,
            line: self.line,
            previous_button: self.previous_button,
            next_button: self.next_button,
            renderer: self.renderer,
            truncate: self.truncate,
            title: title.into(),
            row_renderer: Box::new(row_renderer),
            page_command: Box::new(page_command),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::{command::CommandTemplate, row::infallible};
    use ratatui::style::{Color, Style};

    fn rows() -> impl RowRenderer<String> + Send + Sync + 'static {
        infallible(|item: &String, _| vec![Line::from(item.clone())])
    }

    #[test]
    fn test_defaults() {
        let pagination = PaginationBuilder::new()
            .build("Title", rows(), CommandTemplate::new("/p {page}"))
            .expect("default configuration is valid");
        assert_eq!(pagination.width(), 55);
        assert_eq!(pagination.results_per_page(), 6);
        assert_eq!(pagination.line(), &Glyph::line());
        assert_eq!(pagination.previous_button(), &Glyph::previous_button());
        assert_eq!(pagination.next_button(), &Glyph::next_button());
        assert!(!pagination.truncates());
    }

    #[test]
    fn test_setters() {
        let line = Glyph::new('=', Style::default().fg(Color::Blue));
        let pagination = PaginationBuilder::new()
            .width(30)
            .results_per_page(3)
            .line(line)
            .previous_button(Glyph::previous_button().character('<'))
            .next_button(Glyph::next_button().character('>'))
            .truncate(true)
            .build("Title", rows(), CommandTemplate::new("/p {page}"))
            .expect("valid configuration");
        assert_eq!(pagination.width(), 30);
        assert_eq!(pagination.results_per_page(), 3);
        assert_eq!(pagination.line(), &line);
        assert_eq!(pagination.previous_button().character, '<');
        assert_eq!(pagination.next_button().character, '>');
        assert!(pagination.truncates());
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = PaginationBuilder::new()
            .width(0)
            .build("Title", rows(), CommandTemplate::new(""))
            .expect_err("zero width is invalid");
        assert!(matches!(err, PaginationError::InvalidConfig(ref msg) if msg.contains("width")));
    }

    #[test]
    fn test_zero_results_per_page_rejected() {
        let err = PaginationBuilder::new()
            .results_per_page(0)
            .build("Title", rows(), CommandTemplate::new(""))
            .expect_err("zero results per page is invalid");
        assert!(
            matches!(err, PaginationError::InvalidConfig(ref msg) if msg.contains("results per page"))
        );
    }

    #[test]
    fn test_zero_width_glyph_rejected() {
        let err = PaginationBuilder::new()
            .line(Glyph::line().character('\u{0301}'))
            .build("Title", rows(), CommandTemplate::new(""))
            .expect_err("zero width glyph is invalid");
        assert!(matches!(err, PaginationError::InvalidConfig(ref msg) if msg.contains("line")));
    }

    #[test]
    fn test_builder_is_reusable() {
        let builder = PaginationBuilder::new().width(20);
        let first = builder
            .clone()
            .build("One", rows(), CommandTemplate::new(""))
            .expect("valid");
        let second = builder
            .results_per_page(2)
            .build("Two", rows(), CommandTemplate::new(""))
            .expect("valid");
        assert_eq!(first.results_per_page(), 6);
        assert_eq!(second.results_per_page(), 2);
        assert_eq!(second.width(), 20);
    }
}
