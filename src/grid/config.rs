//! Configuration for grid layout

use serde::Deserialize;

use crate::matrix::Orientation;

/// Row ceiling applied when `max_rows` is unset
pub const DEFAULT_ROW_LIMIT: i32 = 4096;

/// Configuration options for a layout pass
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Number of columns in the container
    #[serde(rename = "columns")]
    pub column_count: i32,

    /// Fill order of the container
    pub orientation: Orientation,

    /// Upper bound for the vertical row budget and for any single field's
    /// height. When unset, the budget may grow to the total cell count plus
    /// the tallest field, capped at [`DEFAULT_ROW_LIMIT`].
    pub max_rows: Option<i32>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            column_count: 2,
            orientation: Orientation::Vertical,
            max_rows: None,
        }
    }
}

impl GridConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of columns
    pub fn with_column_count(mut self, column_count: i32) -> Self {
        self.column_count = column_count;
        self
    }

    /// Set the fill order
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Cap the vertical row budget
    pub fn with_max_rows(mut self, max_rows: i32) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// Tallest span a single field may request
    pub fn row_limit(&self) -> i32 {
        self.max_rows.unwrap_or(DEFAULT_ROW_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.column_count, 2);
        assert_eq!(config.orientation, Orientation::Vertical);
        assert_eq!(config.max_rows, None);
        assert_eq!(config.row_limit(), DEFAULT_ROW_LIMIT);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GridConfig::new()
            .with_column_count(4)
            .with_orientation(Orientation::Horizontal)
            .with_max_rows(10);

        assert_eq!(config.column_count, 4);
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert_eq!(config.max_rows, Some(10));
        assert_eq!(config.row_limit(), 10);
    }

    #[test]
    fn test_deserialize_partial_table() {
        let config: GridConfig = toml::from_str(r#"orientation = "horizontal""#).unwrap();
        assert_eq!(config.column_count, 2);
        assert_eq!(config.orientation, Orientation::Horizontal);
    }

    #[test]
    fn test_deserialize_rejects_unknown_keys() {
        let result: Result<GridConfig, _> = toml::from_str("colums = 3");
        assert!(result.is_err());
    }
}
