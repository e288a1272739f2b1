//! Configuration for text rendering

/// Smallest cell width that still fits `[`, one character and `]`
pub const MIN_CELL_WIDTH: usize = 3;

/// Configuration options for the text map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextConfig {
    /// Characters per grid column
    pub cell_width: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self { cell_width: 10 }
    }
}

impl TextConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the characters per grid column
    pub fn with_cell_width(mut self, cell_width: usize) -> Self {
        self.cell_width = cell_width.max(MIN_CELL_WIDTH);
        self
    }
}
