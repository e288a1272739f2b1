//! Logical Grid - placement of form fields in a fixed-column grid
//!
//! This library assigns every field of a form a non-overlapping rectangle in
//! a container with a fixed number of columns. Fields are placed either row
//! by row or column by column; the column-major variant moves earlier fields
//! around so that wide fields line up with them.
//!
//! # Example
//!
//! ```rust
//! use logical_grid::{layout_form, TextConfig};
//!
//! let (form, layout) = layout_form(r#"
//!     [grid]
//!     columns = 2
//!
//!     [[field]]
//!     name = "first"
//!
//!     [[field]]
//!     name = "last"
//!
//!     [[field]]
//!     name = "street"
//!     w = 2
//! "#).unwrap();
//!
//! assert_eq!(layout.rows, 2);
//! let street = form.field("street").and_then(|f| f.grid_data).unwrap();
//! assert_eq!((street.x, street.y, street.w), (0, 1, 2));
//! ```

pub mod error;
pub mod form;
pub mod grid;
pub mod matrix;
pub mod renderer;

pub use error::FormError;
pub use form::{Form, FormField};
pub use grid::{
    layout_fields, layout_fields_with, GridConfig, GridDataBuilder, GridError, GridField,
    GridHints, GridLayout, HintResolver, DEFAULT_ROW_LIMIT, FULL_WIDTH,
};
pub use matrix::{FieldId, GridData, Orientation};
pub use renderer::{render_map, render_table, TextConfig};

use thiserror::Error;

/// Errors that can occur while loading and laying out a form
#[derive(Debug, Error)]
pub enum LayoutFormError {
    /// Error while reading the form description
    #[error("form error: {0}")]
    Form(#[from] FormError),

    /// Error during layout
    #[error("layout error: {0}")]
    Grid(#[from] GridError),
}

/// Parse a TOML form description and lay it out with its own grid settings
pub fn layout_form(source: &str) -> Result<(Form, GridLayout), LayoutFormError> {
    layout_form_with_config(source, None)
}

/// Parse a TOML form description and lay it out
///
/// When `config` is given it replaces the form's `[grid]` table.
///
/// # Example
///
/// ```rust
/// use logical_grid::{layout_form_with_config, GridConfig, Orientation};
///
/// let config = GridConfig::new()
///     .with_column_count(3)
///     .with_orientation(Orientation::Horizontal);
/// let source = "[[field]]\nname = \"a\"\n[[field]]\nname = \"b\"\n";
///
/// let (_, layout) = layout_form_with_config(source, Some(config)).unwrap();
/// assert_eq!(layout.columns, 3);
/// assert_eq!(layout.rows, 1);
/// ```
pub fn layout_form_with_config(
    source: &str,
    config: Option<GridConfig>,
) -> Result<(Form, GridLayout), LayoutFormError> {
    let mut form = Form::from_str(source)?;
    if let Some(config) = config {
        form.grid = config;
    }
    let layout = form.layout()?;
    Ok((form, layout))
}
