//! Visual theme and styling.

use console::Style;

/// Styles applied to individual cells and words of the report.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Binary names (cyan).
    pub binary_name: Style,
    /// Versions a binary can be upgraded to (green).
    pub latest_version: Style,
    /// "cannot upgrade" status (yellow).
    pub warning: Style,
    /// Failure counts (red bold).
    pub error: Style,
    /// Commands, tags and links (dim).
    pub dim: Style,
    /// Known-problem codes (bold).
    pub highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the colored theme.
    ///
    /// Styles are forced on, so color detection happens once in
    /// [`Theme::detect`] rather than per write.
    pub fn new() -> Self {
        Self {
            binary_name: Style::new().cyan().force_styling(true),
            latest_version: Style::new().green().force_styling(true),
            warning: Style::new().yellow().force_styling(true),
            error: Style::new().red().bold().force_styling(true),
            dim: Style::new().dim().force_styling(true),
            highlight: Style::new().bold().force_styling(true),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            binary_name: Style::new().force_styling(false),
            latest_version: Style::new().force_styling(false),
            warning: Style::new().force_styling(false),
            error: Style::new().force_styling(false),
            dim: Style::new().force_styling(false),
            highlight: Style::new().force_styling(false),
        }
    }

    /// Pick the colored theme when `force_colors` is set or stdout supports it.
    pub fn detect(force_colors: bool) -> Self {
        if force_colors || should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn binary_name(&self, name: &str) -> String {
        self.binary_name.apply_to(name).to_string()
    }

    pub fn latest_version(&self, version: &str) -> String {
        self.latest_version.apply_to(version).to_string()
    }

    pub fn warning(&self, msg: &str) -> String {
        self.warning.apply_to(msg).to_string()
    }

    pub fn error(&self, msg: &str) -> String {
        self.error.apply_to(msg).to_string()
    }

    pub fn dim(&self, msg: &str) -> String {
        self.dim.apply_to(msg).to_string()
    }

    pub fn highlight(&self, msg: &str) -> String {
        self.highlight.apply_to(msg).to_string()
    }
}

/// Check if colors should be used.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
