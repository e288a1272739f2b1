//! Row-major placement without reorganization

use std::collections::HashMap;

use super::cell::GridCell;
use super::cursor::{MatrixCursor, Orientation};
use super::index::GridIndex;
use super::types::{FieldId, GridData, GridRequest};

/// Places fields greedily left to right, wrapping into new rows.
///
/// The row count is unbounded; it only grows as fields are placed.
#[derive(Debug, Clone)]
pub struct HorizontalGridMatrix {
    column_count: i32,
    row_count: i32,
    cursor: MatrixCursor,
    cells: HashMap<GridIndex, GridCell>,
    assigned: HashMap<FieldId, GridData>,
}

impl HorizontalGridMatrix {
    pub fn new(column_count: i32) -> Self {
        debug_assert!(column_count >= 1, "column count must be positive");
        Self {
            column_count,
            row_count: 0,
            cursor: MatrixCursor::new(0, 0, column_count, i32::MAX, Orientation::Horizontal),
            cells: HashMap::new(),
            assigned: HashMap::new(),
        }
    }

    /// Place every request in order. Never fails.
    pub fn compute_grid_data(&mut self, requests: &[GridRequest]) -> bool {
        for request in requests {
            let w = request.w.clamp(1, self.column_count);
            let h = request.h.max(1);
            self.add(request.field, w, h);
        }
        true
    }

    fn add(&mut self, field: FieldId, w: i32, h: i32) {
        self.next_free(w, h);
        let index = self.cursor.current_index();
        let data = GridData::new(index.x, index.y, w, h);
        for x in data.x..data.right() {
            for y in data.y..data.bottom() {
                self.cells
                    .insert(GridIndex::new(x, y), GridCell::occupied(field, data));
            }
        }
        self.row_count = self.row_count.max(data.bottom());
        self.assigned.insert(field, data);
    }

    fn next_free(&mut self, w: i32, h: i32) {
        while self.cursor.increment() {
            let index = self.cursor.current_index();
            if self.is_all_cell_free(index, w, h) {
                return;
            }
            self.cells.entry(index).or_insert_with(GridCell::empty);
        }
    }

    fn is_all_cell_free(&self, index: GridIndex, w: i32, h: i32) -> bool {
        if index.x + w > self.cursor.end_x() {
            return false;
        }
        (index.x..index.x + w).all(|x| {
            (index.y..index.y + h).all(|y| !self.cells.contains_key(&GridIndex::new(x, y)))
        })
    }

    pub fn column_count(&self) -> i32 {
        self.column_count
    }

    /// Number of rows used so far
    pub fn row_count(&self) -> i32 {
        self.row_count
    }

    pub fn cell(&self, index: GridIndex) -> Option<&GridCell> {
        self.cells.get(&index)
    }

    pub fn grid_data(&self, field: FieldId) -> Option<GridData> {
        self.assigned.get(&field).copied()
    }

    pub fn assignments(&self) -> &HashMap<FieldId, GridData> {
        &self.assigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn requests(spans: &[(i32, i32)]) -> Vec<GridRequest> {
        spans
            .iter()
            .enumerate()
            .map(|(i, &(w, h))| GridRequest::new(FieldId(i), w, h))
            .collect()
    }

    fn positions(matrix: &HorizontalGridMatrix, count: usize) -> Vec<(i32, i32)> {
        (0..count)
            .map(|i| {
                let data = matrix.grid_data(FieldId(i)).expect("field placed");
                (data.x, data.y)
            })
            .collect()
    }

    #[test]
    fn test_single_cells_wrap_after_last_column() {
        let mut matrix = HorizontalGridMatrix::new(4);
        assert!(matrix.compute_grid_data(&requests(&[(1, 1); 5])));
        assert_eq!(
            positions(&matrix, 5),
            vec![(0, 0), (1, 0), (2, 0), (3, 0), (0, 1)]
        );
        assert_eq!(matrix.row_count(), 2);
    }

    #[test]
    fn test_wide_field_defers_to_next_row() {
        let mut matrix = HorizontalGridMatrix::new(4);
        matrix.compute_grid_data(&requests(&[(3, 1), (2, 1)]));

        assert_eq!(matrix.grid_data(FieldId(1)), Some(GridData::new(0, 1, 2, 1)));
        let skipped = matrix.cell(GridIndex::new(3, 0)).expect("placeholder");
        assert!(skipped.is_empty());
    }

    #[test]
    fn test_tall_field_blocks_cells_below() {
        let mut matrix = HorizontalGridMatrix::new(2);
        matrix.compute_grid_data(&requests(&[(1, 2), (1, 1), (1, 1)]));
        assert_eq!(positions(&matrix, 3), vec![(0, 0), (1, 0), (1, 1)]);
        assert_eq!(matrix.row_count(), 2);
    }

    #[test]
    fn test_over_wide_request_is_clipped() {
        let mut matrix = HorizontalGridMatrix::new(3);
        matrix.compute_grid_data(&requests(&[(7, 1)]));
        assert_eq!(matrix.grid_data(FieldId(0)), Some(GridData::new(0, 0, 3, 1)));
    }

    #[test]
    fn test_every_cell_of_a_span_references_the_field() {
        let mut matrix = HorizontalGridMatrix::new(3);
        matrix.compute_grid_data(&requests(&[(2, 2)]));
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            let cell = matrix.cell(GridIndex::new(x, y)).expect("occupied");
            assert_eq!(cell.field(), Some(FieldId(0)));
        }
        assert!(matrix.cell(GridIndex::new(2, 0)).is_none());
    }
}
