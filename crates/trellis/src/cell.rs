//! Per-(line, column) content slots.
//!
//! A [`Cell`] is the addressable unit at a (line, column) intersection and
//! doubles as a column's header storage. The model guarantees slot existence
//! and addressability; what the content *means* (formatting, wrapping,
//! colors) is the renderer's business.

use std::cmp::Ordering;

/// One content slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    data: Option<String>,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Cell::default()
    }

    /// Stores content in the cell, replacing anything previously held.
    pub fn set_data(&mut self, data: impl Into<String>) {
        self.data = Some(data.into());
    }

    /// The cell content, if any was set.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Clears the cell back to its empty state.
    pub fn reset(&mut self) {
        self.data = None;
    }

    /// True if no content has been set.
    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }
}

/// Stock comparator: lexicographic order over cell content, with empty
/// cells sorting first.
///
/// ```rust
/// use std::cmp::Ordering;
/// use trellis::{cmp_str_cells, Cell};
///
/// let mut a = Cell::new();
/// let mut b = Cell::new();
/// a.set_data("alpha");
/// b.set_data("beta");
/// assert_eq!(cmp_str_cells(&a, &b), Ordering::Less);
/// ```
pub fn cmp_str_cells(a: &Cell, b: &Cell) -> Ordering {
    a.data().unwrap_or("").cmp(b.data().unwrap_or(""))
}
