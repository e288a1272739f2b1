//! Placement matrices
//!
//! A matrix assigns every submitted field a non-overlapping rectangle inside
//! a fixed number of columns. Two variants exist:
//!
//! - [`HorizontalGridMatrix`]: row-major, never fails, rows grow as needed
//! - [`VerticalGridMatrix`]: column-major inside a row budget, reorganizes
//!   earlier fields so wide fields can align with them
//!
//! Matrices are built per layout pass and thrown away once the assignments
//! have been copied out.

pub mod cell;
pub mod cursor;
pub mod horizontal;
pub mod index;
pub mod types;
pub mod vertical;

pub use cell::GridCell;
pub use cursor::{MatrixCursor, Orientation};
pub use horizontal::HorizontalGridMatrix;
pub use index::GridIndex;
pub use types::{FieldId, GridData, GridRequest};
pub use vertical::VerticalGridMatrix;
