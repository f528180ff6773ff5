//! Output configuration for tree dumps and token listings

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Number of spaces per tree depth level
    pub indent_width: usize,
    /// Append source positions (`[line:column]` for tokens, `[line N]` for tree nodes)
    pub show_positions: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_width: 2,
            show_positions: false,
        }
    }
}

impl FormatConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Enable or disable position annotations
    pub fn with_positions(mut self, show: bool) -> Self {
        self.show_positions = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormatConfig::default();
        assert_eq!(config.indent_width, 2);
        assert!(!config.show_positions);
    }

    #[test]
    fn test_new_equals_default() {
        assert_eq!(FormatConfig::new(), FormatConfig::default());
    }

    #[test]
    fn test_builder_chain() {
        let config = FormatConfig::new().with_indent_width(4).with_positions(true);
        assert_eq!(config.indent_width, 4);
        assert!(config.show_positions);
    }
}
