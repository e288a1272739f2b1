//! Matrix slots

use super::types::{FieldId, GridData};

/// One unit slot of the matrix
///
/// A cell without a field is a placeholder: the slot is taken, but only so the
/// cursor never offers it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    occupant: Option<(FieldId, GridData)>,
}

impl GridCell {
    /// Placeholder cell
    pub fn empty() -> Self {
        Self { occupant: None }
    }

    /// Cell claimed by `field`, which was assigned `data`
    pub fn occupied(field: FieldId, data: GridData) -> Self {
        Self {
            occupant: Some((field, data)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn field(&self) -> Option<FieldId> {
        self.occupant.map(|(field, _)| field)
    }

    pub fn data(&self) -> Option<&GridData> {
        self.occupant.as_ref().map(|(_, data)| data)
    }

    pub fn occupant(&self) -> Option<(FieldId, GridData)> {
        self.occupant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_empty() {
        let cell = GridCell::empty();
        assert!(cell.is_empty());
        assert_eq!(cell.field(), None);
        assert_eq!(cell.data(), None);
    }

    #[test]
    fn test_occupied_cell() {
        let data = GridData::new(0, 1, 2, 1);
        let cell = GridCell::occupied(FieldId(4), data);
        assert!(!cell.is_empty());
        assert_eq!(cell.field(), Some(FieldId(4)));
        assert_eq!(cell.data(), Some(&data));
    }
}
