//! Form descriptions loaded from TOML
//!
//! A form lists grid settings and the fields to place, in order:
//!
//! ```toml
//! [grid]
//! columns = 2
//! orientation = "vertical"
//!
//! [[field]]
//! name = "street"
//! w = 2
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use toml::Spanned;

use crate::error::FormError;
use crate::grid::{layout_fields, GridConfig, GridError, GridField, GridHints, GridLayout};
use crate::matrix::GridData;

/// A field of a form description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub hints: GridHints,
    pub visible: bool,
    /// Rectangle assigned by the last layout pass
    pub grid_data: Option<GridData>,
}

impl FormField {
    pub fn new(name: impl Into<String>, w: i32, h: i32) -> Self {
        Self {
            name: name.into(),
            hints: GridHints::new(w, h),
            visible: true,
            grid_data: None,
        }
    }

    /// Set visibility
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

impl GridField for FormField {
    fn grid_data_hints(&self) -> GridHints {
        self.hints
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_grid_data(&mut self, data: GridData) {
        self.grid_data = Some(data);
    }
}

/// Grid settings plus the ordered fields to lay out
#[derive(Debug, Clone, Default)]
pub struct Form {
    pub grid: GridConfig,
    pub fields: Vec<FormField>,
}

/// TOML structure for deserializing forms
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlForm {
    #[serde(default)]
    grid: GridConfig,
    #[serde(default, rename = "field")]
    fields: Vec<TomlField>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlField {
    name: Spanned<String>,
    #[serde(default = "default_span")]
    w: i32,
    #[serde(default = "default_span")]
    h: i32,
    #[serde(default = "default_visible")]
    visible: bool,
}

fn default_span() -> i32 {
    1
}

fn default_visible() -> bool {
    true
}

impl Form {
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            fields: Vec::new(),
        }
    }

    /// Append a field
    pub fn with_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    /// Load a form from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, FormError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a form from a TOML string
    pub fn from_str(content: &str) -> Result<Self, FormError> {
        let parsed: TomlForm = toml::from_str(content)?;

        let mut seen: HashSet<String> = HashSet::new();
        let mut fields = Vec::with_capacity(parsed.fields.len());
        for field in parsed.fields {
            let span = field.name.span();
            let name = field.name.into_inner();
            if !seen.insert(name.clone()) {
                return Err(FormError::DuplicateField { name, span });
            }
            fields.push(FormField::new(name, field.w, field.h).with_visible(field.visible));
        }

        Ok(Form {
            grid: parsed.grid,
            fields,
        })
    }

    /// Lay out the fields with the form's grid settings
    pub fn layout(&mut self) -> Result<GridLayout, GridError> {
        layout_fields(&mut self.fields, &self.grid)
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Field names indexed like the fields themselves
    pub fn labels(&self) -> Vec<&str> {
        self.fields.iter().map(|field| field.name.as_str()).collect()
    }
}
