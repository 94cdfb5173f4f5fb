use anyhow::{Context, Result};
use clap::Parser;
use paginator::{config::PaginationConfig, infallible, Pagination, RenderedPage};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use std::{
    io::{self, BufRead, BufReader, Write},
    path::PathBuf,
};
use tracing::{debug, info};

use super::output::{write_page, OutputFormat};

/// Render one page of a line-oriented list with a title bar and navigation footer
#[derive(Parser, Debug)]
#[command(
    name = "paginator",
    version,
    about = "Render one page of a list with a title bar and navigation buttons",
    long_about = r#"Reads items (one per line) from a file or standard input and prints a single
page of them between a title bar and a footer holding previous/next buttons.

Settings are read from ./.paginator.json, ./paginator.json or the user config
directory, then from PAGINATOR_* environment variables, then from the flags below.

Examples:
  paginator items.txt --page 2
  ls | paginator --per-page 10 --title Files
  paginator items.txt --format json --command-template "/items {page}""#
)]
pub struct Cli {
    /// File holding one item per line; standard input when omitted
    pub file: Option<PathBuf>,

    /// Page to render, starting at 1
    #[arg(short = 'p', long = "page", default_value_t = 1)]
    pub page: usize,

    /// Items per page
    #[arg(short = 'n', long = "per-page")]
    pub per_page: Option<usize>,

    /// Width of every line, in terminal cells
    #[arg(short = 'w', long = "width")]
    pub width: Option<usize>,

    /// Title shown in the title bar
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,

    /// Command bound to the navigation buttons; {page} is replaced by the target page
    #[arg(long = "command-template")]
    pub command_template: Option<String>,

    /// Configuration file to load instead of the default search paths
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Clip lines wider than the configured width
    #[arg(long = "truncate")]
    pub truncate: bool,

    /// Print a notice instead of failing on an empty list or an unknown page
    #[arg(short = 'l', long = "lenient")]
    pub lenient: bool,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Ansi)]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        if self.debug {
            debug!("Debug logging enabled");
        }

        let config = self.resolve_config()?;
        let items = self.read_items()?;
        info!(items = items.len(), page = self.page, "Rendering page");

        let page = render(&config, &items, self.page, self.lenient)?;

        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_page(&mut out, &page, self.format)?;
        out.flush()?;

        Ok(())
    }

    /// Configuration file and environment, overridden by command line flags
    fn resolve_config(&self) -> Result<PaginationConfig> {
        let mut config = PaginationConfig::load(self.config.as_deref())?;

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(per_page) = self.per_page {
            config.results_per_page = per_page;
        }
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(template) = &self.command_template {
            config.command_template = template.clone();
        }
        if self.truncate {
            config.truncate = true;
        }

        config.validate()?;
        debug!(?config, "Resolved configuration");
        Ok(config)
    }

    fn read_items(&self) -> Result<Vec<String>> {
        match &self.file {
            Some(path) => {
                let file = std::fs::File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                read_lines(BufReader::new(file))
            }
            None => read_lines(io::stdin().lock()),
        }
    }
}

fn read_lines(reader: impl BufRead) -> Result<Vec<String>> {
    reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("Failed to read items")
}

/// Numbered row: a gray ordinal followed by the item text
fn numbered_row(item: &String, index: usize) -> Vec<Line<'static>> {
    vec![Line::from(vec![
        Span::styled(
            format!("{:>3}. ", index + 1),
            Style::default().fg(Color::Gray),
        ),
        Span::raw(item.clone()),
    ])]
}

pub(crate) fn render(
    config: &PaginationConfig,
    items: &[String],
    page: usize,
    lenient: bool,
) -> Result<RenderedPage> {
    let pagination: Pagination<String> = config.builder()?.build(
        config.title.clone(),
        infallible(numbered_row),
        config.page_command(),
    )?;

    let page = if lenient {
        pagination.render_or_notice(items, page)?
    } else {
        pagination.render(items, page)?
    };

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paginator::{PageKind, PaginationError};

    fn items(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("item {}", i)).collect()
    }

    fn config() -> PaginationConfig {
        PaginationConfig {
            width: 30,
            results_per_page: 2,
            command_template: "/items {page}".to_string(),
            ..PaginationConfig::default()
        }
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from([
            "paginator",
            "items.txt",
            "--page",
            "3",
            "-n",
            "4",
            "--width",
            "40",
            "--format",
            "json",
            "--lenient",
        ])
        .unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("items.txt")));
        assert_eq!(cli.page, 3);
        assert_eq!(cli.per_page, Some(4));
        assert_eq!(cli.width, Some(40));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.lenient);
        assert!(!cli.truncate);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["paginator"]).unwrap();
        assert_eq!(cli.file, None);
        assert_eq!(cli.page, 1);
        assert_eq!(cli.format, OutputFormat::Ansi);
    }

    #[test]
    fn test_read_lines() {
        let lines = read_lines("alpha\nbeta\n".as_bytes()).unwrap();
        assert_eq!(lines, vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn test_render_numbers_rows_by_absolute_index() {
        let page = render(&config(), &items(5), 2, false).unwrap();
        let text = page.plain_text();

        assert_eq!(text.len(), 4);
        assert_eq!(text[1], "  3. item 3");
        assert_eq!(text[2], "  4. item 4");

        let commands: Vec<_> = page.links().map(|(_, link)| link.command.as_str()).collect();
        assert_eq!(commands, vec!["/items 1", "/items 3"]);
    }

    #[test]
    fn test_render_strict_rejects_unknown_page() {
        let err = render(&config(), &items(3), 9, false).unwrap_err();
        let err = err.downcast::<PaginationError>().unwrap();
        assert_eq!(err.total_pages(), Some(2));
    }

    #[test]
    fn test_render_lenient_notices() {
        let page = render(&config(), &items(3), 9, true).unwrap();
        assert_eq!(page.kind, PageKind::UnknownPage);

        let page = render(&config(), &[], 1, true).unwrap();
        assert_eq!(page.kind, PageKind::Empty);
    }
}
