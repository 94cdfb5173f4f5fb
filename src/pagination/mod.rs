//! Fixed-width pagination of item collections.
//!
//! A [`Pagination`] is built once through [`PaginationBuilder`] and then renders any number
//! of collections, one page per call. Each page is a title bar, the rows produced by the
//! row renderer for the items on that page, and a footer holding the navigation buttons:
//!
//! ```text
//! ---------------------Results (2/3)---------------------
//! row for item 7
//! row for item 8
//! ---------------------- [«]  [»] -----------------------
//! ```
//!
//! Rendering is stateless: a pagination holds no per-render state and can be shared across
//! threads.

pub mod builder;
pub mod command;
pub mod glyph;
pub mod page;
pub mod renderer;
pub mod row;

pub use builder::*;
pub use command::*;
pub use glyph::*;
pub use page::*;
pub use renderer::*;
pub use row::{infallible, Infallible, RowRenderer};

use std::{fmt, num::NonZeroUsize, ops::Range, sync::Arc};

use ratatui::text::Line;

use crate::error::{PaginationError, PaginationResult};

/// Start a new [`PaginationBuilder`] with the default settings
pub fn builder() -> PaginationBuilder {
    PaginationBuilder::new()
}

/// Number of pages needed for `item_count` items. An empty collection still has one page.
pub fn total_pages(item_count: usize, results_per_page: NonZeroUsize) -> usize {
    item_count.div_ceil(results_per_page.get()).max(1)
}

/// Indices of the items shown on `page` (1-based).
///
/// Pages past the end give an empty range at `item_count`.
pub fn page_range(item_count: usize, results_per_page: NonZeroUsize, page: usize) -> Range<usize> {
    let per_page = results_per_page.get();
    let start = page
        .saturating_sub(1)
        .saturating_mul(per_page)
        .min(item_count);
    let end = start.saturating_add(per_page).min(item_count);
    start..end
}

/// Renders pages of `T` items with a fixed configuration
pub struct Pagination<T> {
    pub(crate) width: usize,
    pub(crate) results_per_page: NonZeroUsize,
    pub(crate) line: Glyph,
    pub(crate) previous_button: Glyph,
    pub(crate) next_button: Glyph,
    pub(crate) renderer: Arc<dyn Renderer + Send + Sync>,
    pub(crate) truncate: bool,
    pub(crate) title: Line<'static>,
    pub(crate) row_renderer: Box<dyn RowRenderer<T> + Send + Sync>,
    pub(crate) page_command: Box<dyn PageCommand + Send + Sync>,
}

impl<T> fmt::Debug for Pagination<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pagination")
            .field("width", &self.width)
            .field("results_per_page", &self.results_per_page)
            .field("line", &self.line)
            .field("previous_button", &self.previous_button)
            .field("next_button", &self.next_button)
            .field("truncate", &self.truncate)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl<T> Pagination<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn results_per_page(&self) -> usize {
        self.results_per_page.get()
    }

    pub fn title(&self) -> &Line<'static> {
        &self.title
    }

    pub fn line(&self) -> &Glyph {
        &self.line
    }

    pub fn previous_button(&self) -> &Glyph {
        &self.previous_button
    }

    pub fn next_button(&self) -> &Glyph {
        &self.next_button
    }

    /// Whether lines wider than [`Pagination::width`] are clipped
    pub fn truncates(&self) -> bool {
        self.truncate
    }

    /// Number of pages a collection of `item_count` items spans
    pub fn total_pages(&self, item_count: usize) -> usize {
        total_pages(item_count, self.results_per_page)
    }

    /// Indices of the items shown on `page`
    pub fn page_range(&self, item_count: usize, page: usize) -> Range<usize> {
        page_range(item_count, self.results_per_page, page)
    }

    /// Render `page` (1-based) of `items`.
    ///
    /// The collection is iterated at most once. An empty collection renders as page 1 of 1
    /// with no content rows.
    ///
    /// # Errors
    ///
    /// - [`PaginationError::InvalidPage`] if `page` is outside `1..=total_pages`
    /// - [`PaginationError::RowRender`] if the row renderer fails for any item on the page
    pub fn render<'a, I>(&self, items: I, page: usize) -> PaginationResult<RenderedPage>
    where
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: ExactSizeIterator,
        T: 'a,
    {
        let items = items.into_iter();
        let item_count = items.len();
        let total_pages = self.total_pages(item_count);

        if page < 1 || page > total_pages {
            return Err(PaginationError::InvalidPage { page, total_pages });
        }

        let range = self.page_range(item_count, page);

        let mut lines = Vec::with_capacity(range.len() + 2);
        lines.push(self.render_header(page, total_pages));

        for (index, item) in items.enumerate().skip(range.start).take(range.len()) {
            let rows = self
                .row_renderer
                .render_row(item, index)
                .map_err(|source| PaginationError::RowRender { index, source })?;
            lines.extend(rows.into_iter().map(PageLine::new));
        }

        lines.push(self.render_footer(page, total_pages));

        Ok(self.finish(PageKind::Full, page, total_pages, lines))
    }

    /// Like [`Pagination::render`], but answers an empty collection or an out-of-range page
    /// with the renderer's notice line instead of a page or an error.
    ///
    /// Row renderer failures are still returned as errors.
    pub fn render_or_notice<'a, I>(&self, items: I, page: usize) -> PaginationResult<RenderedPage>
    where
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: ExactSizeIterator,
        T: 'a,
    {
        let items = items.into_iter();
        if items.len() == 0 {
            let notice = PageLine::new(self.renderer.render_empty());
            return Ok(self.finish(PageKind::Empty, page, 1, vec![notice]));
        }

        match self.render(items, page) {
            Err(PaginationError::InvalidPage { page, total_pages }) => {
                let notice = PageLine::new(self.renderer.render_unknown_page(page, total_pages));
                Ok(self.finish(PageKind::UnknownPage, page, total_pages, vec![notice]))
            }
            result => result,
        }
    }

    fn finish(
        &self,
        kind: PageKind,
        page: usize,
        total_pages: usize,
        mut lines: Vec<PageLine>,
    ) -> RenderedPage {
        if self.truncate {
            for line in &mut lines {
                line.truncate(self.width);
            }
        }

        RenderedPage {
            kind,
            page,
            total_pages,
            lines,
        }
    }

    fn render_header(&self, page: usize, total_pages: usize) -> PageLine {
        let header = self.renderer.render_header(&self.title, page, total_pages);
        self.centered(PageLine::new(header))
    }

    fn render_footer(&self, page: usize, total_pages: usize) -> PageLine {
        let mut buttons = PageLine::default();
        let mut has_buttons = false;

        if page > 1 {
            if let Some(command) = self.page_command.page_command(page - 1) {
                buttons.append(
                    self.renderer
                        .render_previous_page_button(&self.previous_button, &command),
                );
                has_buttons = true;
            }
        }

        if page < total_pages {
            if let Some(command) = self.page_command.page_command(page + 1) {
                buttons.append(self.renderer.render_next_page_button(&self.next_button, &command));
                has_buttons = true;
            }
        }

        if has_buttons {
            self.centered(buttons)
        } else {
            self.separator()
        }
    }

    /// `content` between two fill lines; an odd leftover cell goes to the right side
    fn centered(&self, content: PageLine) -> PageLine {
        let fill = self.width.saturating_sub(content.width());
        let left = fill / 2;

        let mut line = PageLine::from_spans(self.line.fill(left));
        line.append(content);
        line.extend_spans(self.line.fill(fill - left));
        line
    }

    /// A full-width line of the line glyph
    fn separator(&self) -> PageLine {
        PageLine::from_spans(self.line.fill(self.width))
    }
}
