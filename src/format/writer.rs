//! Line buffer for tree dumps and token listings.

use super::config::FormatConfig;

/// Accumulates output lines, padding each new line to the current nesting depth.
///
/// A line is padded lazily on its first non-empty write, so blank lines carry no trailing spaces.
pub struct FormatWriter {
    output: String,
    depth: usize,
    config: FormatConfig,
    /// Set once the current line has received text (and therefore its padding).
    line_open: bool,
}

impl FormatWriter {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            output: String::new(),
            depth: 0,
            config,
            line_open: false,
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    /// Nest lines started after this call one level deeper.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Append `text` to the current line.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.line_open {
            let width = self.depth * self.config.indent_width;
            self.output.extend(std::iter::repeat_n(' ', width));
            self.line_open = true;
        }
        self.output.push_str(text);
    }

    /// End the current line.
    pub fn newline(&mut self) {
        self.output.push('\n');
        self.line_open = false;
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }
}
