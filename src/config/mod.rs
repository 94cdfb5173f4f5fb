use anyhow::{Context, Result};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::debug;

use crate::pagination::{
    CommandTemplate, Glyph, PaginationBuilder, LINE_CHARACTER, NEXT_PAGE_BUTTON_CHARACTER,
    PREVIOUS_PAGE_BUTTON_CHARACTER, RESULTS_PER_PAGE, WIDTH,
};

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "PAGINATOR_";

/// Character and style of a glyph, as written in a configuration file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphConfig {
    /// The character drawn
    pub character: char,

    /// Foreground color: a name ("red", "darkgray"), `#rrggbb` or a 0-255 palette index
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Text modifiers such as "bold" or "underlined"
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<String>,
}

impl GlyphConfig {
    pub fn new(character: char, color: &str) -> Self {
        Self {
            character,
            color: Some(color.to_string()),
            modifiers: Vec::new(),
        }
    }

    /// Resolve the configured color and modifiers into a [`Glyph`]
    pub fn to_glyph(&self) -> Result<Glyph> {
        let mut style = Style::default();

        if let Some(color) = &self.color {
            let color = Color::from_str(color)
                .map_err(|_| anyhow::anyhow!("Invalid color: {}", color))?;
            style = style.fg(color);
        }

        for name in &self.modifiers {
            style = style.add_modifier(parse_modifier(name)?);
        }

        Ok(Glyph::new(self.character, style))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn parse_modifier(name: &str) -> Result<Modifier> {
    let modifier = match name.to_lowercase().replace(['-', ' '], "_").as_str() {
        "bold" => Modifier::BOLD,
        "dim" => Modifier::DIM,
        "italic" => Modifier::ITALIC,
        "underlined" | "underline" => Modifier::UNDERLINED,
        "slow_blink" => Modifier::SLOW_BLINK,
        "rapid_blink" => Modifier::RAPID_BLINK,
        "reversed" => Modifier::REVERSED,
        "hidden" => Modifier::HIDDEN,
        "crossed_out" | "strikethrough" => Modifier::CROSSED_OUT,
        _ => return Err(anyhow::anyhow!("Invalid modifier: {}", name)),
    };
    Ok(modifier)
}

/// Pagination settings loaded from files and the environment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Width of every rendered line, in terminal cells
    pub width: usize,

    /// Number of items per page
    pub results_per_page: usize,

    /// Glyph filling the title bar and footer
    pub line: GlyphConfig,

    /// Glyph of the previous-page button
    pub previous_button: GlyphConfig,

    /// Glyph of the next-page button
    pub next_button: GlyphConfig,

    /// Title shown in the title bar
    pub title: String,

    /// Command bound to navigation buttons; `{page}` is replaced by the target page
    pub command_template: String,

    /// Clip lines wider than `width`
    pub truncate: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            results_per_page: RESULTS_PER_PAGE,
            line: GlyphConfig::new(LINE_CHARACTER, "darkgray"),
            previous_button: GlyphConfig::new(PREVIOUS_PAGE_BUTTON_CHARACTER, "red"),
            next_button: GlyphConfig::new(NEXT_PAGE_BUTTON_CHARACTER, "green"),
            title: "Results".to_string(),
            command_template: "/page {page}".to_string(),
            truncate: false,
        }
    }
}

impl PaginationConfig {
    /// Load configuration from defaults, a configuration file and the environment.
    ///
    /// An explicit `path` must exist; otherwise the first file found in
    /// [`PaginationConfig::search_paths`] is used, if any.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_vars(path, std::env::vars_os())
    }

    /// Like [`PaginationConfig::load`], with `vars` standing in for the process environment
    pub fn load_with_vars<I, K, V>(path: Option<&Path>, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        debug!("Loading pagination configuration");

        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => match Self::search_paths().into_iter().find(|p| p.exists()) {
                Some(found) => Self::load_from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_vars(vars)?;
        config.validate()?;

        Ok(config)
    }

    /// Candidate configuration files, highest priority first
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from("./.paginator.json"),
            PathBuf::from("./paginator.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("paginator").join("paginator.json"));
        }

        paths
    }

    /// Read a JSON configuration file. Missing fields keep their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from: {}", path.display());
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Apply `PAGINATOR_*` overrides from `(name, value)` pairs.
    ///
    /// Names that are not UTF-8 or lack the prefix are ignored. A prefixed name with a
    /// value that is not UTF-8 is an error.
    pub fn apply_vars<I, K, V>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        for (key, value) in vars {
            let Some(name) = key
                .as_ref()
                .to_str()
                .and_then(|key| key.strip_prefix(ENV_PREFIX))
            else {
                continue;
            };
            let value = value.as_ref().to_str().ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid {}{}: value is not valid UTF-8: {:?}",
                    ENV_PREFIX,
                    name,
                    value.as_ref()
                )
            })?;

            match name {
                "WIDTH" => {
                    self.width = value
                        .parse()
                        .with_context(|| format!("Invalid {}WIDTH: {}", ENV_PREFIX, value))?;
                }
                "RESULTS_PER_PAGE" => {
                    self.results_per_page = value.parse().with_context(|| {
                        format!("Invalid {}RESULTS_PER_PAGE: {}", ENV_PREFIX, value)
                    })?;
                }
                "TITLE" => self.title = value.to_string(),
                "COMMAND_TEMPLATE" => self.command_template = value.to_string(),
                "TRUNCATE" => {
                    self.truncate = parse_bool(value).ok_or_else(|| {
                        anyhow::anyhow!("Invalid {}TRUNCATE: {}", ENV_PREFIX, value)
                    })?;
                }
                _ => {
                    debug!("Ignoring unknown configuration variable {}{}", ENV_PREFIX, name);
                    continue;
                }
            }
            debug!("Configuration override from {}{}", ENV_PREFIX, name);
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(anyhow::anyhow!("width must be greater than 0"));
        }

        if self.results_per_page == 0 {
            return Err(anyhow::anyhow!("results_per_page must be greater than 0"));
        }

        for (name, glyph) in [
            ("line", &self.line),
            ("previous_button", &self.previous_button),
            ("next_button", &self.next_button),
        ] {
            glyph
                .to_glyph()
                .with_context(|| format!("Invalid {} glyph", name))?;
        }

        Ok(())
    }

    /// A builder carrying every setting except the title and the row renderer
    pub fn builder(&self) -> Result<PaginationBuilder> {
        Ok(PaginationBuilder::new()
            .width(self.width)
            .results_per_page(self.results_per_page)
            .line(self.line.to_glyph()?)
            .previous_button(self.previous_button.to_glyph()?)
            .next_button(self.next_button.to_glyph()?)
            .truncate(self.truncate))
    }

    pub fn page_command(&self) -> CommandTemplate {
        CommandTemplate::new(self.command_template.clone())
    }
}
