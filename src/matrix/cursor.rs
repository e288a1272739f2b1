//! Scan-order cursor over a rectangular matrix region

use serde::Deserialize;

use super::index::GridIndex;

/// Scan order of a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Row-major: x first, wrapping to the next row
    Horizontal,
    /// Column-major: y first, wrapping to the next column
    #[default]
    Vertical,
}

/// Walks the slots of the region `[start_x, start_x + column_count) ×
/// [start_y, start_y + row_count)` in scan order.
///
/// The cursor starts on a sentinel just before the first slot, so the first
/// `increment` lands on `(start_x, start_y)`. Bounds saturate, which lets the
/// row-major matrix use `i32::MAX` rows.
#[derive(Debug, Clone)]
pub struct MatrixCursor {
    start_x: i32,
    start_y: i32,
    column_count: i32,
    row_count: i32,
    orientation: Orientation,
    current: GridIndex,
}

impl MatrixCursor {
    pub fn new(
        start_x: i32,
        start_y: i32,
        column_count: i32,
        row_count: i32,
        orientation: Orientation,
    ) -> Self {
        let mut cursor = Self {
            start_x,
            start_y,
            column_count,
            row_count,
            orientation,
            current: GridIndex::new(start_x, start_y),
        };
        cursor.reset();
        cursor
    }

    /// Move back to the sentinel before the first slot
    pub fn reset(&mut self) {
        self.current = match self.orientation {
            Orientation::Horizontal => GridIndex::new(self.start_x - 1, self.start_y),
            Orientation::Vertical => GridIndex::new(self.start_x, self.start_y - 1),
        };
    }

    /// Step to the next slot; `false` once the cursor has left the region
    pub fn increment(&mut self) -> bool {
        let GridIndex { mut x, mut y } = self.current;
        match self.orientation {
            Orientation::Horizontal => {
                x += 1;
                if x >= self.end_x() {
                    x = self.start_x;
                    y = y.saturating_add(1);
                }
            }
            Orientation::Vertical => {
                y += 1;
                if y >= self.end_y() {
                    y = self.start_y;
                    x = x.saturating_add(1);
                }
            }
        }
        self.current = GridIndex::new(x, y);
        self.is_in_bounds(self.current)
    }

    /// Step to the previous slot; `false` once the cursor is before the region
    pub fn decrement(&mut self) -> bool {
        let GridIndex { mut x, mut y } = self.current;
        match self.orientation {
            Orientation::Horizontal => {
                x -= 1;
                if x < self.start_x {
                    x = self.end_x() - 1;
                    y = y.saturating_sub(1);
                }
            }
            Orientation::Vertical => {
                y -= 1;
                if y < self.start_y {
                    y = self.end_y() - 1;
                    x = x.saturating_sub(1);
                }
            }
        }
        self.current = GridIndex::new(x, y);
        self.is_in_bounds(self.current)
    }

    /// Copy of the current position
    pub fn current_index(&self) -> GridIndex {
        self.current
    }

    pub fn is_in_bounds(&self, index: GridIndex) -> bool {
        index.x >= self.start_x
            && index.x < self.end_x()
            && index.y >= self.start_y
            && index.y < self.end_y()
    }

    pub fn start_x(&self) -> i32 {
        self.start_x
    }

    pub fn start_y(&self) -> i32 {
        self.start_y
    }

    pub fn column_count(&self) -> i32 {
        self.column_count
    }

    pub fn row_count(&self) -> i32 {
        self.row_count
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// First column past the region
    pub fn end_x(&self) -> i32 {
        self.start_x.saturating_add(self.column_count)
    }

    /// First row past the region
    pub fn end_y(&self) -> i32 {
        self.start_y.saturating_add(self.row_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn walk(cursor: &mut MatrixCursor) -> Vec<(i32, i32)> {
        let mut visited = Vec::new();
        while cursor.increment() {
            let index = cursor.current_index();
            visited.push((index.x, index.y));
        }
        visited
    }

    #[test]
    fn test_horizontal_scan_order() {
        let mut cursor = MatrixCursor::new(0, 0, 3, 2, Orientation::Horizontal);
        assert_eq!(
            walk(&mut cursor),
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn test_vertical_scan_order() {
        let mut cursor = MatrixCursor::new(0, 0, 2, 3, Orientation::Vertical);
        assert_eq!(
            walk(&mut cursor),
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn test_offset_region() {
        let mut cursor = MatrixCursor::new(2, 5, 2, 1, Orientation::Vertical);
        assert_eq!(walk(&mut cursor), vec![(2, 5), (3, 5)]);
    }

    #[test]
    fn test_increment_past_end_stays_out_of_bounds() {
        let mut cursor = MatrixCursor::new(0, 0, 1, 1, Orientation::Horizontal);
        assert!(cursor.increment());
        assert!(!cursor.increment());
        assert!(!cursor.increment());
    }

    #[test]
    fn test_decrement_reverses_increment() {
        let mut cursor = MatrixCursor::new(0, 0, 2, 2, Orientation::Horizontal);
        let forward = walk(&mut cursor);

        let mut backward = Vec::new();
        while cursor.decrement() {
            let index = cursor.current_index();
            backward.push((index.x, index.y));
        }
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_decrement_before_start() {
        let mut cursor = MatrixCursor::new(0, 0, 2, 2, Orientation::Vertical);
        assert!(cursor.increment());
        assert!(!cursor.decrement());
    }

    #[test]
    fn test_current_index_is_a_copy() {
        let mut cursor = MatrixCursor::new(0, 0, 2, 2, Orientation::Horizontal);
        cursor.increment();
        let mut index = cursor.current_index();
        index.x = 99;
        assert_eq!(cursor.current_index(), GridIndex::new(0, 0));
    }

    #[test]
    fn test_unbounded_rows_do_not_overflow() {
        let mut cursor = MatrixCursor::new(0, 0, 1, i32::MAX, Orientation::Horizontal);
        for _ in 0..5 {
            assert!(cursor.increment());
        }
        assert_eq!(cursor.current_index(), GridIndex::new(0, 4));
        assert_eq!(cursor.end_y(), i32::MAX);
    }

    #[test]
    fn test_reset_returns_to_sentinel() {
        let mut cursor = MatrixCursor::new(0, 0, 2, 2, Orientation::Vertical);
        cursor.increment();
        cursor.increment();
        cursor.reset();
        assert!(cursor.increment());
        assert_eq!(cursor.current_index(), GridIndex::new(0, 0));
    }
}
