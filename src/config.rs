//! Render configuration for CLI output.

/// How command output is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One item per line.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Render configuration
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Output format
    pub format: OutputFormat,
    /// Whether `list` shows the aliases of each type (text format only; JSON always includes them)
    pub show_aliases: bool,
}

impl RenderConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Switch to JSON output when `json` is set
    pub fn with_json(self, json: bool) -> Self {
        if json { self.with_format(OutputFormat::Json) } else { self }
    }

    /// Show aliases next to each type
    pub fn with_aliases(mut self, show: bool) -> Self {
        self.show_aliases = show;
        self
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.show_aliases);
    }

    #[test]
    fn test_builder_chain() {
        let config = RenderConfig::new().with_json(true).with_aliases(true);
        assert!(config.is_json());
        assert!(config.show_aliases);
    }

    #[test]
    fn test_with_json_false_keeps_format() {
        let config = RenderConfig::new().with_format(OutputFormat::Json).with_json(false);
        assert!(config.is_json());
    }
}
