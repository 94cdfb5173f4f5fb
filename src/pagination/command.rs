//! Page command functions bind navigation buttons to caller commands.

/// Placeholder replaced by the target page number in a [`CommandTemplate`]
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Produces the command attached to the button leading to `page`.
///
/// Returning `None` means "no control for this page": the button is left out of the footer.
/// `Some(String::new())` is a valid, empty command and still renders the button.
pub trait PageCommand {
    fn page_command(&self, page: usize) -> Option<String>;
}

impl<F> PageCommand for F
where
    F: Fn(usize) -> Option<String>,
{
    fn page_command(&self, page: usize) -> Option<String> {
        self(page)
    }
}

/// A command string with `{page}` substituted for the target page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    template: String,
    max_page: Option<usize>,
}

impl CommandTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            max_page: None,
        }
    }

    /// A template that yields no command for pages above `max_page`
    pub fn bounded(template: impl Into<String>, max_page: usize) -> Self {
        Self {
            template: template.into(),
            max_page: Some(max_page),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl PageCommand for CommandTemplate {
    fn page_command(&self, page: usize) -> Option<String> {
        if self.max_page.is_some_and(|max| page > max) {
            return None;
        }
        Some(self.template.replace(PAGE_PLACEHOLDER, &page.to_string()))
    }
}
