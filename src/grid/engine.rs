//! Layout pass over a sequence of fields
//!
//! Resolves hints, runs the matrix selected by the configuration and writes
//! the assigned rectangles back onto the fields.

use std::collections::HashMap;

use tracing::{debug, debug_span};

use crate::matrix::{
    FieldId, GridData, GridRequest, HorizontalGridMatrix, Orientation, VerticalGridMatrix,
};

use super::config::{GridConfig, DEFAULT_ROW_LIMIT};
use super::error::GridError;
use super::hints::{GridDataBuilder, GridField, HintResolver};

/// Result of a layout pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    /// Column count of the container
    pub columns: i32,
    /// Rows covered by placed fields
    pub rows: i32,
    /// Assigned rectangles of the visible fields, in submission order
    pub placements: Vec<(FieldId, GridData)>,
}

impl GridLayout {
    fn empty(columns: i32) -> Self {
        Self {
            columns,
            rows: 0,
            placements: Vec::new(),
        }
    }

    /// Rectangle assigned to `field`, if it was laid out
    pub fn grid_data(&self, field: FieldId) -> Option<GridData> {
        self.placements
            .iter()
            .find(|(id, _)| *id == field)
            .map(|(_, data)| *data)
    }

    /// Field covering the unit cell at `(x, y)`
    pub fn field_at(&self, x: i32, y: i32) -> Option<FieldId> {
        self.placements
            .iter()
            .find(|(_, data)| x >= data.x && x < data.right() && y >= data.y && y < data.bottom())
            .map(|(id, _)| *id)
    }
}

/// Lay out `fields` using their own hints
pub fn layout_fields<F: GridField>(
    fields: &mut [F],
    config: &GridConfig,
) -> Result<GridLayout, GridError> {
    layout_fields_with(fields, config, &GridDataBuilder)
}

/// Lay out `fields` with a custom hint resolver
///
/// Invisible fields are skipped and left untouched. Every visible field
/// receives its rectangle through [`GridField::set_grid_data`].
pub fn layout_fields_with<F, R>(
    fields: &mut [F],
    config: &GridConfig,
    resolver: &R,
) -> Result<GridLayout, GridError>
where
    F: GridField,
    R: HintResolver<F> + ?Sized,
{
    let columns = config.column_count;
    if columns < 1 {
        return Err(GridError::invalid_columns(columns));
    }

    let _span = debug_span!(
        "grid_layout",
        columns,
        orientation = ?config.orientation,
        fields = fields.len()
    )
    .entered();

    let requests: Vec<GridRequest> = fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.is_visible())
        .map(|(i, field)| {
            let data = resolver.resolve(field, columns);
            GridRequest::new(FieldId(i), data.w, data.h)
        })
        .collect();

    if requests.is_empty() {
        return Ok(GridLayout::empty(columns));
    }

    let row_limit = config.row_limit();
    if let Some(request) = requests.iter().find(|request| request.h > row_limit) {
        return Err(GridError::span_too_tall(request.field, request.h, row_limit));
    }

    let (rows, assignments) = match config.orientation {
        Orientation::Horizontal => layout_horizontal(columns, &requests),
        Orientation::Vertical => layout_vertical(columns, &requests, config.max_rows)?,
    };

    let placements: Vec<(FieldId, GridData)> = requests
        .iter()
        .filter_map(|request| {
            assignments
                .get(&request.field)
                .map(|data| (request.field, *data))
        })
        .collect();

    for (field, data) in &placements {
        fields[field.0].set_grid_data(*data);
    }

    debug!(rows, placed = placements.len(), "grid layout computed");
    Ok(GridLayout {
        columns,
        rows,
        placements,
    })
}

fn layout_horizontal(
    columns: i32,
    requests: &[GridRequest],
) -> (i32, HashMap<FieldId, GridData>) {
    let mut matrix = HorizontalGridMatrix::new(columns);
    matrix.compute_grid_data(requests);
    (matrix.row_count(), matrix.assignments().clone())
}

/// Run the vertical matrix, growing the row budget until every field fits
fn layout_vertical(
    columns: i32,
    requests: &[GridRequest],
    max_rows: Option<i32>,
) -> Result<(i32, HashMap<FieldId, GridData>), GridError> {
    // Summed in i64; every result is clamped back below an i32 limit
    let total_cells: i64 = requests
        .iter()
        .map(|request| i64::from(request.w.clamp(1, columns)) * i64::from(request.h.max(1)))
        .sum();
    let tallest = requests
        .iter()
        .map(|request| request.h.max(1))
        .max()
        .unwrap_or(1);
    let limit = max_rows.unwrap_or_else(|| {
        (total_cells + i64::from(tallest)).min(i64::from(DEFAULT_ROW_LIMIT)) as i32
    });

    let minimal_rows = (total_cells + i64::from(columns) - 1) / i64::from(columns);
    let mut rows = minimal_rows
        .max(i64::from(tallest))
        .min(i64::from(limit))
        .max(1) as i32;
    let mut matrix = VerticalGridMatrix::new(columns, rows);
    loop {
        if matrix.compute_grid_data(requests) {
            return Ok((matrix.used_row_count(), matrix.assignments().clone()));
        }
        if rows >= limit {
            return Err(GridError::row_limit(rows, limit));
        }
        rows += 1;
        debug!(rows, limit, "growing vertical row budget");
        matrix.reset_all(columns, rows);
    }
}
