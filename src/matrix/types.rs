//! Core types shared by both matrix variants

use std::fmt;

/// Opaque handle for a caller-owned field
///
/// The matrix never looks inside a field; it only compares handles. The grid
/// engine uses the field's position in the caller's slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub usize);

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A rectangle in grid units
///
/// Before placement only `w` and `h` carry meaning; `x` and `y` are assigned
/// by the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridData {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl GridData {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A span that has not been positioned yet
    pub fn unplaced(w: i32, h: i32) -> Self {
        Self::new(-1, -1, w, h)
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Number of unit cells covered
    pub fn area(&self) -> i32 {
        self.w * self.h
    }

    /// Whether two rectangles share at least one unit cell
    pub fn intersects(&self, other: &GridData) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// A field submitted to a matrix together with its resolved hint span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridRequest {
    pub field: FieldId,
    pub w: i32,
    pub h: i32,
}

impl GridRequest {
    pub fn new(field: FieldId, w: i32, h: i32) -> Self {
        Self { field, w, h }
    }
}
