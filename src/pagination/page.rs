//! Output types of a render: styled lines with clickable regions.

use ratatui::text::{Line, Span};
use serde::Serialize;
use unicode_width::UnicodeWidthChar;

/// A clickable region of a [`PageLine`], bound to a command string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// First cell of the region, counted from the start of the line
    pub start: usize,
    /// Width of the region in cells
    pub width: usize,
    pub command: String,
    /// Text shown when hovering the region, if any
    pub hover: Option<String>,
}

impl PageLink {
    pub fn end(&self) -> usize {
        self.start + self.width
    }

    /// Whether `column` falls inside the region
    pub fn contains(&self, column: usize) -> bool {
        column >= self.start && column < self.end()
    }
}

/// One rendered line: styled text plus the links attached to it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLine {
    pub line: Line<'static>,
    pub links: Vec<PageLink>,
}

impl PageLine {
    pub fn new(line: Line<'static>) -> Self {
        Self {
            line,
            links: Vec::new(),
        }
    }

    pub fn from_spans(spans: Vec<Span<'static>>) -> Self {
        Self::new(Line::from(spans))
    }

    /// Width of the line in terminal cells
    pub fn width(&self) -> usize {
        self.line.width()
    }

    pub fn push_span(&mut self, span: Span<'static>) {
        self.line.spans.push(span);
    }

    pub fn extend_spans(&mut self, spans: impl IntoIterator<Item = Span<'static>>) {
        self.line.spans.extend(spans);
    }

    /// Append a span that runs `command` when clicked
    pub fn push_link(&mut self, span: Span<'static>, command: impl Into<String>, hover: Option<String>) {
        let link = PageLink {
            start: self.width(),
            width: span.width(),
            command: command.into(),
            hover,
        };
        self.line.spans.push(span);
        self.links.push(link);
    }

    /// Append another line, shifting its links past the current content
    pub fn append(&mut self, other: PageLine) {
        let offset = self.width();
        self.line.spans.extend(other.line.spans);
        self.links.extend(other.links.into_iter().map(|mut link| {
            link.start += offset;
            link
        }));
    }

    /// The text of the line without any styling
    pub fn plain_text(&self) -> String {
        self.line
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    /// Link covering `column`, if any
    pub fn link_at(&self, column: usize) -> Option<&PageLink> {
        self.links.iter().find(|link| link.contains(column))
    }

    /// Clip the line to at most `width` cells.
    ///
    /// A wide character straddling the limit is dropped whole. Links are shortened to the
    /// visible cells, and links that start past the limit are removed.
    pub fn truncate(&mut self, width: usize) {
        if self.width() <= width {
            return;
        }

        let mut used = 0;
        let mut kept = Vec::with_capacity(self.line.spans.len());
        for span in self.line.spans.drain(..) {
            if used >= width {
                break;
            }
            let span_width = span.width();
            if used + span_width <= width {
                used += span_width;
                kept.push(span);
                continue;
            }

            let mut content = String::new();
            for ch in span.content.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if used + ch_width > width {
                    break;
                }
                used += ch_width;
                content.push(ch);
            }
            if !content.is_empty() {
                kept.push(Span::styled(content, span.style));
            }
            break;
        }
        self.line.spans = kept;

        self.links.retain(|link| link.start < used);
        for link in &mut self.links {
            link.width = link.width.min(used - link.start);
        }
        self.links.retain(|link| link.width > 0);
    }
}

impl From<Line<'static>> for PageLine {
    fn from(line: Line<'static>) -> Self {
        Self::new(line)
    }
}

/// What a [`RenderedPage`] holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// Title bar, content rows and footer
    Full,
    /// The single "no results" notice for an empty collection
    Empty,
    /// The single notice for a page outside the valid range
    UnknownPage,
}

/// The finished output of one render call
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub kind: PageKind,
    /// Requested page, 1-based
    pub page: usize,
    pub total_pages: usize,
    pub lines: Vec<PageLine>,
}

impl RenderedPage {
    pub fn is_notice(&self) -> bool {
        self.kind != PageKind::Full
    }

    /// Title bar of a full page
    pub fn header(&self) -> Option<&PageLine> {
        match self.kind {
            PageKind::Full => self.lines.first(),
            _ => None,
        }
    }

    /// Navigation footer of a full page
    pub fn footer(&self) -> Option<&PageLine> {
        match self.kind {
            PageKind::Full => self.lines.last(),
            _ => None,
        }
    }

    /// Content rows between the title bar and the footer
    pub fn body(&self) -> &[PageLine] {
        match self.kind {
            PageKind::Full if self.lines.len() >= 2 => &self.lines[1..self.lines.len() - 1],
            _ => &[],
        }
    }

    /// Every link on the page with the index of the line holding it
    pub fn links(&self) -> impl Iterator<Item = (usize, &PageLink)> {
        self.lines
            .iter()
            .enumerate()
            .flat_map(|(row, line)| line.links.iter().map(move |link| (row, link)))
    }

    /// The unstyled text of every line
    pub fn plain_text(&self) -> Vec<String> {
        self.lines.iter().map(PageLine::plain_text).collect()
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.lines.into_iter().map(|line| line.line).collect()
    }
}
