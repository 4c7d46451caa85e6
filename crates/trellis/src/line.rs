//! Line entities and the parent/child forest.
//!
//! A [`Line`] is one row of a table: an array of per-column cell slots plus
//! the tree links that enable hierarchical output. The child list owns its
//! members (strong handles, ordered); the parent link is a non-owning
//! [`Weak`] back-reference, so no reference cycle can form and a line's
//! lifetime is governed by table and child-list membership alone.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::cell::Cell;
use crate::error::{Error, Result};

/// Shared handle to a line.
pub type LineRef = Rc<RefCell<Line>>;

/// One row of a table, optionally part of a parent/child forest.
pub struct Line {
    seqnum: Option<usize>,
    cells: Vec<Cell>,
    parent: Weak<RefCell<Line>>,
    children: Vec<LineRef>,
}

impl Line {
    /// Creates an unbound line handle with no cells allocated.
    pub fn new() -> LineRef {
        Rc::new(RefCell::new(Line {
            seqnum: None,
            cells: Vec::new(),
            parent: Weak::new(),
            children: Vec::new(),
        }))
    }

    /// The line's insertion stamp, or `None` while unbound.
    ///
    /// Stamps are assigned by the table in strict insertion order and are
    /// never reassigned or reused, so they identify a line for the whole
    /// time it stays table-bound.
    pub fn seqnum(&self) -> Option<usize> {
        self.seqnum
    }

    pub(crate) fn set_seqnum(&mut self, seqnum: Option<usize>) {
        self.seqnum = seqnum;
    }

    pub(crate) fn is_bound(&self) -> bool {
        self.seqnum.is_some()
    }

    /// Grows the cell array to hold at least `n` slots.
    ///
    /// Called by the table when the line is added; also usable for explicit
    /// pre-sizing. Never shrinks.
    pub fn alloc_cells(&mut self, n: usize) -> Result<()> {
        if n > self.cells.len() {
            self.cells.try_reserve(n - self.cells.len())?;
            self.cells.resize_with(n, Cell::new);
        }
        Ok(())
    }

    /// Number of allocated cell slots.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Bounds-checked cell access by column sequence number.
    pub fn cell(&self, n: usize) -> Option<&Cell> {
        self.cells.get(n)
    }

    /// Bounds-checked mutable cell access by column sequence number.
    pub fn cell_mut(&mut self, n: usize) -> Option<&mut Cell> {
        self.cells.get_mut(n)
    }

    /// Shorthand for storing content in the cell at column `n`.
    pub fn set_data(&mut self, n: usize, data: impl Into<String>) -> Result<()> {
        let cell = self
            .cells
            .get_mut(n)
            .ok_or(Error::InvalidArgument("cell index out of range"))?;
        cell.set_data(data);
        Ok(())
    }

    /// The parent line, if this line is linked under one.
    pub fn parent(&self) -> Option<LineRef> {
        self.parent.upgrade()
    }

    /// Ordered list of this line's children.
    pub fn children(&self) -> &[LineRef] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<LineRef> {
        &mut self.children
    }

    /// True if the line has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Appends `child` to `parent`'s ordered child list and records the
    /// back-reference. A child already linked under another parent is
    /// detached from it first. The link is structural: table membership and
    /// reference counts are not affected beyond the child-list handle.
    pub fn add_child(parent: &LineRef, child: &LineRef) -> Result<()> {
        if Rc::ptr_eq(parent, child) {
            return Err(Error::InvalidArgument("line cannot be its own child"));
        }
        let previous = child.borrow().parent();
        if let Some(previous) = previous {
            Line::remove_child(&previous, child)?;
        }
        parent.borrow_mut().children.push(Rc::clone(child));
        child.borrow_mut().parent = Rc::downgrade(parent);
        Ok(())
    }

    /// Severs the parent/child link in both directions.
    pub fn remove_child(parent: &LineRef, child: &LineRef) -> Result<()> {
        let pos = {
            let p = parent.borrow();
            p.children
                .iter()
                .position(|c| Rc::ptr_eq(c, child))
                .ok_or(Error::InvalidArgument(
                    "line is not a child of the given parent",
                ))?
        };
        parent.borrow_mut().children.remove(pos);
        child.borrow_mut().parent = Weak::new();
        Ok(())
    }

    /// Creates an unbound deep copy of this line's cell contents. Binding,
    /// parent and children are not copied; the table copy re-establishes
    /// tree edges itself.
    pub fn copy(&self) -> Result<LineRef> {
        let mut cells = Vec::new();
        cells.try_reserve(self.cells.len())?;
        cells.extend(self.cells.iter().cloned());
        Ok(Rc::new(RefCell::new(Line {
            seqnum: None,
            cells,
            parent: Weak::new(),
            children: Vec::new(),
        })))
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Line")
            .field("seqnum", &self.seqnum)
            .field("cells", &self.cells)
            .field("has_parent", &self.parent.upgrade().is_some())
            .field("children", &self.children.len())
            .finish()
    }
}
