use anyhow::Result;
use clap::ValueEnum;
use crossterm::{
    queue,
    style::{Attribute, Color as TermColor, ContentStyle, PrintStyledContent, StyledContent},
};
use paginator::{PageKind, PageLink, RenderedPage};
use ratatui::style::{Color, Modifier, Style};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Styled text with ANSI escape sequences
    Ansi,
    /// Unstyled text
    Plain,
    /// The page as JSON, including link regions
    Json,
}

pub fn write_page<W: Write>(out: &mut W, page: &RenderedPage, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Ansi => write_ansi(out, page),
        OutputFormat::Plain => write_plain(out, page),
        OutputFormat::Json => write_json(out, page),
    }
}

fn write_ansi<W: Write>(out: &mut W, page: &RenderedPage) -> Result<()> {
    for line in &page.lines {
        for span in &line.line.spans {
            let styled = StyledContent::new(content_style(span.style), span.content.as_ref());
            queue!(out, PrintStyledContent(styled))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_plain<W: Write>(out: &mut W, page: &RenderedPage) -> Result<()> {
    for text in page.plain_text() {
        writeln!(out, "{}", text)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct PageDocument<'a> {
    kind: PageKind,
    page: usize,
    total_pages: usize,
    lines: Vec<LineDocument<'a>>,
}

#[derive(Serialize)]
struct LineDocument<'a> {
    text: String,
    links: &'a [PageLink],
}

fn write_json<W: Write>(out: &mut W, page: &RenderedPage) -> Result<()> {
    let document = PageDocument {
        kind: page.kind,
        page: page.page,
        total_pages: page.total_pages,
        lines: page
            .lines
            .iter()
            .map(|line| LineDocument {
                text: line.plain_text(),
                links: &line.links,
            })
            .collect(),
    };

    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)?;
    Ok(())
}

fn content_style(style: Style) -> ContentStyle {
    let mut content = ContentStyle::new();
    content.foreground_color = style.fg.map(term_color);
    content.background_color = style.bg.map(term_color);

    for (modifier, attribute) in [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::SLOW_BLINK, Attribute::SlowBlink),
        (Modifier::RAPID_BLINK, Attribute::RapidBlink),
        (Modifier::REVERSED, Attribute::Reverse),
        (Modifier::HIDDEN, Attribute::Hidden),
        (Modifier::CROSSED_OUT, Attribute::CrossedOut),
    ] {
        if style.add_modifier.contains(modifier) {
            content.attributes.set(attribute);
        }
    }

    content
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paginator::{infallible, CommandTemplate, Pagination};
    use ratatui::text::Line;

    fn page() -> RenderedPage {
        let pagination: Pagination<&str> = paginator::builder()
            .width(20)
            .results_per_page(1)
            .build(
                "Results",
                infallible(|item: &&str, _| vec![Line::from(item.to_string())]),
                CommandTemplate::new("/r {page}"),
            )
            .unwrap();
        pagination.render(&["one", "two"], 1).unwrap()
    }

    fn render(format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_page(&mut out, &page(), format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_output() {
        let text = render(OutputFormat::Plain);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "---Results (1/2)----");
        assert_eq!(lines[1], "one");
    }

    #[test]
    fn test_ansi_output_carries_styles() {
        let text = render(OutputFormat::Ansi);
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("Results"));
        assert!(text.contains('\u{00BB}'));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_json_output() {
        let text = render(OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["kind"], "full");
        assert_eq!(value["page"], 1);
        assert_eq!(value["total_pages"], 2);
        assert_eq!(value["lines"][0]["text"], "---Results (1/2)----");

        let links = value["lines"][2]["links"].as_array().unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0]["command"], "/r 2");
        assert_eq!(links[0]["hover"], "Next Page");
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(term_color(Color::DarkGray), TermColor::DarkGrey);
        assert_eq!(term_color(Color::LightRed), TermColor::Red);
        assert_eq!(term_color(Color::Rgb(1, 2, 3)), TermColor::Rgb { r: 1, g: 2, b: 3 });

        let style = content_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD));
        assert_eq!(style.foreground_color, Some(TermColor::DarkGreen));
        assert!(style.attributes.has(Attribute::Bold));
    }
}
