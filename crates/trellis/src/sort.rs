//! Comparator-driven ordering of table lines.
//!
//! Sorting reorders list positions only: parent/child edges, sequence
//! stamps and cell content are untouched. The flat line sequence is sorted
//! first; if the table is a tree, every branch's child list is then sorted
//! independently, depth-first, with the same comparator. Both passes use
//! stable sorts, so equal-key lines keep their pre-sort relative order at
//! every depth.

use std::cmp::Ordering;
use std::rc::Rc;

use tracing::debug;

use crate::cell::Cell;
use crate::column::{CmpFn, ColumnRef};
use crate::error::{Error, Result};
use crate::line::LineRef;
use crate::table::Table;

impl Table {
    /// Orders the table by `cl`, using the comparator attached to that
    /// column. See [`crate::Column::set_cmp`].
    ///
    /// Fails with [`Error::InvalidArgument`] if no comparator is attached
    /// or the column is not a member of a table; the table is left
    /// unchanged in either case.
    pub fn sort(&mut self, cl: &ColumnRef) -> Result<()> {
        let (cmp, idx) = {
            let cl = cl.borrow();
            let cmp = cl
                .cmpfunc()
                .ok_or(Error::InvalidArgument("column has no comparator"))?;
            let idx = cl
                .seqnum()
                .ok_or(Error::InvalidArgument("column is not a member of a table"))?;
            (cmp, idx)
        };

        debug!(column = idx, "sorting table");
        self.lines_mut()
            .sort_by(|a, b| cmp_lines(a, b, idx, &cmp));

        if self.is_tree() {
            for ln in self.lines() {
                sort_children(ln, idx, &cmp);
            }
        }
        Ok(())
    }
}

/// Compares two lines by their cell in column `idx`. A line whose cell
/// array is shorter than the column index compares as an empty cell.
fn cmp_lines(a: &LineRef, b: &LineRef, idx: usize, cmp: &Rc<CmpFn>) -> Ordering {
    let empty = Cell::new();
    let a = a.borrow();
    let b = b.borrow();
    let ca = a.cell(idx).unwrap_or(&empty);
    let cb = b.cell(idx).unwrap_or(&empty);
    cmp(ca, cb)
}

/// Depth-first: order the grandchildren before the children, so every
/// sibling group ends up independently sorted.
fn sort_children(ln: &LineRef, idx: usize, cmp: &Rc<CmpFn>) {
    let children: Vec<LineRef> = ln.borrow().children().to_vec();
    if children.is_empty() {
        return;
    }
    for child in &children {
        sort_children(child, idx, cmp);
    }
    ln.borrow_mut()
        .children_mut()
        .sort_by(|a, b| cmp_lines(a, b, idx, cmp));
}
