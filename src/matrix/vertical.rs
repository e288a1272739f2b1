//! Column-major placement with local reorganization
//!
//! Fields fill the first column top to bottom before moving on to the next
//! one, so the matrix needs a fixed row budget. When a field wider than one
//! column arrives, fields already placed above it inside its column span are
//! laid out again in a nested matrix so the wide field can line up with them.
//!
//! ## Reorganization
//!
//! Scanning upward from the current row over the target span `[x, x + w)`,
//! every occupied cell is classified by its field's column span:
//!
//! - **contains** (equal or wider): the scan stops, nothing above it moves
//! - **partial** (sticks out on one side): frozen, it stays where it is
//! - **inside** (strictly narrower): a candidate, it is detached and placed
//!   again in submission order
//!
//! The nested matrix grows one row at a time until the candidates fit. It is
//! never allowed past the parent's bottom row; if they still do not fit, the
//! detached cells are restored unchanged.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use tracing::{trace, warn};

use super::cell::GridCell;
use super::cursor::{MatrixCursor, Orientation};
use super::index::GridIndex;
use super::types::{FieldId, GridData, GridRequest};

/// How a placed field's column span relates to a reorganization target span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpanRelation {
    Contains,
    Partial,
    Inside,
}

fn classify(data: &GridData, x: i32, w: i32) -> SpanRelation {
    if data.x <= x && data.right() >= x + w {
        SpanRelation::Contains
    } else if data.x >= x && data.right() <= x + w {
        SpanRelation::Inside
    } else {
        SpanRelation::Partial
    }
}

/// Column-major placement engine over a bounded region
#[derive(Debug, Clone)]
pub struct VerticalGridMatrix {
    cursor: MatrixCursor,
    cells: HashMap<GridIndex, GridCell>,
    assigned: HashMap<FieldId, GridData>,
    field_order: Rc<HashMap<FieldId, usize>>,
}

impl VerticalGridMatrix {
    pub fn new(column_count: i32, row_count: i32) -> Self {
        Self::with_bounds(0, 0, column_count, row_count, Rc::default())
    }

    fn with_bounds(
        start_x: i32,
        start_y: i32,
        column_count: i32,
        row_count: i32,
        field_order: Rc<HashMap<FieldId, usize>>,
    ) -> Self {
        debug_assert!(column_count >= 1, "column count must be positive");
        Self {
            cursor: MatrixCursor::new(
                start_x,
                start_y,
                column_count,
                row_count,
                Orientation::Vertical,
            ),
            cells: HashMap::new(),
            assigned: HashMap::new(),
            field_order,
        }
    }

    /// Drop all placements and start over with a new budget
    pub fn reset_all(&mut self, column_count: i32, row_count: i32) {
        *self = Self::with_bounds(
            self.cursor.start_x(),
            self.cursor.start_y(),
            column_count,
            row_count,
            Rc::default(),
        );
    }

    /// Place every request in order.
    ///
    /// Returns `false` as soon as a field does not fit in the row budget; the
    /// matrix is then partially filled and should be reset before retrying.
    pub fn compute_grid_data(&mut self, requests: &[GridRequest]) -> bool {
        if self.field_order.is_empty() {
            self.field_order = Rc::new(
                requests
                    .iter()
                    .enumerate()
                    .map(|(i, request)| (request.field, i))
                    .collect(),
            );
        }
        for request in requests {
            let w = request.w.clamp(1, self.cursor.column_count());
            let h = request.h.max(1);
            if !self.add(request.field, w, h) {
                return false;
            }
        }
        true
    }

    fn add(&mut self, field: FieldId, w: i32, h: i32) -> bool {
        if w > 1 {
            let current = self.cursor.current_index();
            let (x, y) = if current.x + w > self.cursor.end_x() {
                (self.cursor.end_x() - w, self.cursor.end_y() - 1)
            } else {
                (current.x, current.y)
            };
            self.reorganize_grid_above(x, y, w);
        }
        if !self.next_free(w, h) {
            return false;
        }
        let index = self.cursor.current_index();
        let data = GridData::new(index.x, index.y, w, h);
        self.occupy(field, data);
        true
    }

    fn occupy(&mut self, field: FieldId, data: GridData) {
        for x in data.x..data.right() {
            for y in data.y..data.bottom() {
                self.cells
                    .insert(GridIndex::new(x, y), GridCell::occupied(field, data));
            }
        }
        self.assigned.insert(field, data);
    }

    fn next_free(&mut self, w: i32, h: i32) -> bool {
        while self.cursor.increment() {
            let index = self.cursor.current_index();
            if self.is_all_cell_free(index, w, h) {
                return true;
            }
            self.cells.entry(index).or_insert_with(GridCell::empty);
        }
        false
    }

    fn is_all_cell_free(&self, index: GridIndex, w: i32, h: i32) -> bool {
        if index.x + w > self.cursor.end_x() || index.y + h > self.cursor.end_y() {
            return false;
        }
        (index.x..index.x + w).all(|x| {
            (index.y..index.y + h).all(|y| !self.cells.contains_key(&GridIndex::new(x, y)))
        })
    }

    fn reorganize_grid_above(&mut self, x: i32, y: i32, w: i32) {
        let mut candidates: Vec<FieldId> = Vec::new();
        let mut frozen: HashSet<FieldId> = HashSet::new();
        let mut placeholders: Vec<GridIndex> = Vec::new();
        let mut min_y = self.cursor.start_y();

        'scan: for row in (self.cursor.start_y()..=y).rev() {
            for col in x..x + w {
                let index = GridIndex::new(col, row);
                let Some(cell) = self.cells.get(&index) else {
                    continue;
                };
                let Some((field, data)) = cell.occupant() else {
                    placeholders.push(index);
                    continue;
                };
                match classify(&data, x, w) {
                    SpanRelation::Contains => {
                        min_y = row + 1;
                        break 'scan;
                    }
                    SpanRelation::Partial => {
                        frozen.insert(field);
                    }
                    SpanRelation::Inside => {
                        if !candidates.contains(&field) {
                            candidates.push(field);
                        }
                    }
                }
            }
        }

        if candidates.is_empty() {
            return;
        }

        let order = Rc::clone(&self.field_order);
        candidates.sort_by_key(|field| order.get(field).copied().unwrap_or(usize::MAX));
        trace!(
            x,
            y,
            w,
            min_y,
            candidates = candidates.len(),
            frozen = frozen.len(),
            "reorganizing fields above wide field"
        );

        // Detach candidates and released placeholders so they can be restored
        let mut detached_cells: Vec<(GridIndex, GridCell)> = Vec::new();
        let mut detached_data: Vec<(FieldId, GridData)> = Vec::new();
        for field in &candidates {
            let Some(data) = self.assigned.remove(field) else {
                continue;
            };
            for cx in data.x..data.right() {
                for cy in data.y..data.bottom() {
                    let index = GridIndex::new(cx, cy);
                    if let Some(cell) = self.cells.remove(&index) {
                        detached_cells.push((index, cell));
                    }
                }
            }
            detached_data.push((*field, data));
        }
        for index in placeholders {
            if let Some(cell) = self.cells.remove(&index) {
                detached_cells.push((index, cell));
            }
        }

        let requests: Vec<GridRequest> = detached_data
            .iter()
            .map(|(field, data)| GridRequest::new(*field, data.w, data.h))
            .collect();
        let candidate_cells: i32 = detached_data.iter().map(|(_, data)| data.area()).sum();
        let kept_cells = (min_y..=y)
            .flat_map(|row| (x..x + w).map(move |col| GridIndex::new(col, row)))
            .filter(|index| self.cells.contains_key(index))
            .count() as i32;

        let max_rows = self.cursor.end_y() - min_y;
        let mut rows = ((kept_cells + candidate_cells + w - 1) / w).clamp(1, max_rows);
        loop {
            let mut nested = Self::with_bounds(x, min_y, w, rows, Rc::clone(&order));
            nested.seed_from(&self.cells);
            if nested.compute_grid_data(&requests) {
                self.cells.extend(nested.cells);
                self.assigned.extend(nested.assigned);
                self.cursor.reset();
                return;
            }
            if rows >= max_rows {
                break;
            }
            rows += 1;
        }

        warn!(
            x,
            y, w, rows, "reorganization does not fit the row budget, keeping previous placement"
        );
        self.cells.extend(detached_cells);
        self.assigned.extend(detached_data);
    }

    /// Copy every parent cell that falls inside this matrix's bounds
    fn seed_from(&mut self, parent: &HashMap<GridIndex, GridCell>) {
        for (index, cell) in parent {
            if self.cursor.is_in_bounds(*index) {
                self.cells.insert(*index, *cell);
            }
        }
    }

    pub fn column_count(&self) -> i32 {
        self.cursor.column_count()
    }

    /// Current row budget
    pub fn row_count(&self) -> i32 {
        self.cursor.row_count()
    }

    /// Rows actually covered by placed fields
    pub fn used_row_count(&self) -> i32 {
        self.assigned
            .values()
            .map(|data| data.bottom() - self.cursor.start_y())
            .max()
            .unwrap_or(0)
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

    fn placed(matrix: &VerticalGridMatrix, count: usize) -> Vec<GridData> {
        (0..count)
            .map(|i| matrix.grid_data(FieldId(i)).expect("field placed"))
            .collect()
    }

    #[test]
    fn test_classify_spans() {
        let target = (1, 2);
        let check = |x, w| classify(&GridData::new(x, 0, w, 1), target.0, target.1);
        assert_eq!(check(1, 2), SpanRelation::Contains);
        assert_eq!(check(0, 3), SpanRelation::Contains);
        assert_eq!(check(1, 1), SpanRelation::Inside);
        assert_eq!(check(2, 1), SpanRelation::Inside);
        assert_eq!(check(0, 2), SpanRelation::Partial);
        assert_eq!(check(2, 2), SpanRelation::Partial);
    }

    #[test]
    fn test_single_cells_fill_columns_first() {
        let mut matrix = VerticalGridMatrix::new(2, 2);
        assert!(matrix.compute_grid_data(&requests(&[(1, 1); 4])));
        let positions: Vec<(i32, i32)> = placed(&matrix, 4).iter().map(|d| (d.x, d.y)).collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_reorganizes_fields_above_wide_field() {
        let mut matrix = VerticalGridMatrix::new(2, 2);
        assert!(matrix.compute_grid_data(&requests(&[(1, 1), (1, 1), (2, 1)])));
        assert_eq!(
            placed(&matrix, 3),
            vec![
                GridData::new(0, 0, 1, 1),
                GridData::new(1, 0, 1, 1),
                GridData::new(0, 1, 2, 1),
            ]
        );
    }

    #[test]
    fn test_fails_when_budget_is_too_small() {
        let mut matrix = VerticalGridMatrix::new(1, 2);
        assert!(!matrix.compute_grid_data(&requests(&[(1, 1), (1, 2)])));
    }

    #[test]
    fn test_tall_field_skips_bottom_slot() {
        let mut matrix = VerticalGridMatrix::new(2, 2);
        assert!(matrix.compute_grid_data(&requests(&[(1, 1), (1, 2)])));
        assert_eq!(matrix.grid_data(FieldId(1)), Some(GridData::new(1, 0, 1, 2)));
        assert!(matrix.cell(GridIndex::new(0, 1)).map_or(false, GridCell::is_empty));
    }

    #[test]
    fn test_wide_field_below_full_width_field_does_not_move_it() {
        let mut matrix = VerticalGridMatrix::new(2, 3);
        assert!(matrix.compute_grid_data(&requests(&[(2, 1), (1, 1), (2, 1)])));
        assert_eq!(
            placed(&matrix, 3),
            vec![
                GridData::new(0, 0, 2, 1),
                GridData::new(0, 1, 1, 1),
                GridData::new(0, 2, 2, 1),
            ]
        );
    }

    #[test]
    fn test_reorganization_restores_cells_when_candidates_do_not_fit() {
        // 3x2 matrix:
        //   row 0: A B .
        //   row 1: A P P
        // B was submitted before A, so re-placing puts B at (0, 0) and leaves
        // no free column for the two-row A next to the frozen P.
        let (a, b, p) = (FieldId(1), FieldId(0), FieldId(2));
        let mut matrix = VerticalGridMatrix::new(3, 2);
        matrix.field_order = Rc::new([(b, 0), (a, 1), (p, 2)].into_iter().collect());
        matrix.occupy(a, GridData::new(0, 0, 1, 2));
        matrix.occupy(b, GridData::new(1, 0, 1, 1));
        matrix.occupy(p, GridData::new(1, 1, 2, 1));
        let cells = matrix.cells.clone();
        let assigned = matrix.assigned.clone();

        matrix.reorganize_grid_above(0, 1, 2);

        assert_eq!(matrix.cells, cells);
        assert_eq!(matrix.assigned, assigned);
        assert_eq!(matrix.grid_data(a), Some(GridData::new(0, 0, 1, 2)));
    }

    #[test]
    fn test_reset_all_clears_placements() {
        let mut matrix = VerticalGridMatrix::new(1, 1);
        assert!(!matrix.compute_grid_data(&requests(&[(1, 1), (1, 1)])));
        matrix.reset_all(1, 2);
        assert!(matrix.compute_grid_data(&requests(&[(1, 1), (1, 1)])));
        assert_eq!(matrix.row_count(), 2);
        assert_eq!(matrix.used_row_count(), 2);
    }
}
