//! Grid data hints and how they turn into requested spans

use crate::matrix::GridData;

/// Hint width meaning "span every column of the container"
pub const FULL_WIDTH: i32 = 0;

/// Requested size of a field before placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridHints {
    pub w: i32,
    pub h: i32,
}

impl GridHints {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// One row spanning the full container width
    pub fn full_width() -> Self {
        Self::new(FULL_WIDTH, 1)
    }
}

impl Default for GridHints {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// A field that can be laid out in a logical grid
pub trait GridField {
    /// The span this field asks for
    fn grid_data_hints(&self) -> GridHints;

    /// Invisible fields take no space and are not assigned a position
    fn is_visible(&self) -> bool {
        true
    }

    /// Receive the rectangle assigned by the layout pass
    fn set_grid_data(&mut self, data: GridData);
}

/// Maps a field and the container's column count to a requested span
pub trait HintResolver<F: ?Sized> {
    fn resolve(&self, field: &F, column_count: i32) -> GridData;
}

/// Default resolver: reads [`GridField::grid_data_hints`] and clips them
#[derive(Debug, Clone, Copy, Default)]
pub struct GridDataBuilder;

impl GridDataBuilder {
    /// Turn raw hints into an unplaced span that fits `column_count`
    pub fn from_hints(hints: GridHints, column_count: i32) -> GridData {
        let w = if hints.w == FULL_WIDTH {
            column_count
        } else {
            hints.w.clamp(1, column_count.max(1))
        };
        GridData::unplaced(w, hints.h.max(1))
    }
}

impl<F: GridField + ?Sized> HintResolver<F> for GridDataBuilder {
    fn resolve(&self, field: &F, column_count: i32) -> GridData {
        Self::from_hints(field.grid_data_hints(), column_count)
    }
}
