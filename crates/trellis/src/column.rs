//! Column entities: header, width hint, flags, comparator.
//!
//! A [`Column`] describes one vertical slot of a table. Columns are created
//! standalone as shared handles and bound to at most one table at a time;
//! the table assigns the sequence number that also serves as the cell index
//! for every line.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use bitflags::bitflags;

use crate::cell::Cell;

/// Shared handle to a column.
pub type ColumnRef = Rc<RefCell<Column>>;

/// Total-order comparator over two cells. A Rust closure captures whatever
/// context the comparison needs.
pub type CmpFn = dyn Fn(&Cell, &Cell) -> Ordering;

bitflags! {
    /// Column behavior flags.
    ///
    /// Combine with bitwise OR: `ColumnFlags::TREE | ColumnFlags::TRUNC`.
    /// `TREE` and `STRICT_WIDTH` are read by this model; the remaining
    /// flags are stored for the renderer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ColumnFlags: u32 {
        /// Truncate overlong content in this column.
        const TRUNC = 1 << 0;
        /// This column carries the tree branch glyphs for its row.
        const TREE = 1 << 1;
        /// Right-align content.
        const RIGHT = 1 << 2;
        /// Never shrink the column below its width hint.
        const STRICT_WIDTH = 1 << 3;
        /// Exclude the column from extreme-width calculations.
        const NO_EXTREMES = 1 << 4;
        /// Keep the column but do not render it.
        const HIDDEN = 1 << 5;
        /// Wrap overlong content onto continuation lines.
        const WRAP = 1 << 6;
    }
}

/// Specifies how a column suggests its width to the layout step.
///
/// The model only stores and reports the hint; minimums and truncation
/// policy are the layout component's business.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WidthHint {
    /// Fraction of the available terminal width, in `[0, 1)`.
    Fraction(f64),
    /// Absolute width in character cells.
    Cells(usize),
}

impl Default for WidthHint {
    fn default() -> Self {
        WidthHint::Cells(0)
    }
}

impl WidthHint {
    /// Splits a raw numeric hint using the classic convention: values below
    /// 1 are a fraction of terminal width, values of 1 and above are an
    /// absolute character count.
    pub fn from_hint(hint: f64) -> Self {
        if hint < 1.0 {
            WidthHint::Fraction(hint)
        } else {
            WidthHint::Cells(hint as usize)
        }
    }

    /// True for [`WidthHint::Fraction`].
    pub fn is_relative(&self) -> bool {
        matches!(self, WidthHint::Fraction(_))
    }
}

/// One vertical slot of a table.
pub struct Column {
    seqnum: Option<usize>,
    header: Cell,
    width_hint: WidthHint,
    flags: ColumnFlags,
    cmpfunc: Option<Rc<CmpFn>>,
}

impl Column {
    /// Creates an unbound column handle with an empty header and no
    /// comparator.
    pub fn new() -> ColumnRef {
        Rc::new(RefCell::new(Column {
            seqnum: None,
            header: Cell::new(),
            width_hint: WidthHint::default(),
            flags: ColumnFlags::empty(),
            cmpfunc: None,
        }))
    }

    /// The column's position in its table, or `None` while unbound.
    pub fn seqnum(&self) -> Option<usize> {
        self.seqnum
    }

    pub(crate) fn set_seqnum(&mut self, seqnum: Option<usize>) {
        self.seqnum = seqnum;
    }

    pub(crate) fn is_bound(&self) -> bool {
        self.seqnum.is_some()
    }

    /// The header cell (column name/label).
    pub fn header(&self) -> &Cell {
        &self.header
    }

    /// Mutable access to the header cell.
    pub fn header_mut(&mut self) -> &mut Cell {
        &mut self.header
    }

    /// Shorthand for storing the column name in the header cell.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.header.set_data(name);
    }

    pub fn width_hint(&self) -> WidthHint {
        self.width_hint
    }

    pub fn set_width_hint(&mut self, hint: WidthHint) {
        self.width_hint = hint;
    }

    pub fn flags(&self) -> ColumnFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: ColumnFlags) {
        self.flags = flags;
    }

    /// True if this column carries the tree branch glyphs.
    pub fn is_tree(&self) -> bool {
        self.flags.contains(ColumnFlags::TREE)
    }

    /// Stores the comparator used when sorting a table by this column.
    ///
    /// The closure captures any context the comparison needs:
    ///
    /// ```rust
    /// use trellis::Column;
    ///
    /// let col = Column::new();
    /// let descending = true;
    /// col.borrow_mut().set_cmp(move |a, b| {
    ///     let ord = a.data().unwrap_or("").cmp(b.data().unwrap_or(""));
    ///     if descending { ord.reverse() } else { ord }
    /// });
    /// ```
    pub fn set_cmp(&mut self, cmp: impl Fn(&Cell, &Cell) -> Ordering + 'static) {
        self.cmpfunc = Some(Rc::new(cmp));
    }

    /// Removes the comparator; sorting by this column then fails.
    pub fn unset_cmp(&mut self) {
        self.cmpfunc = None;
    }

    /// True if a comparator is attached.
    pub fn has_cmp(&self) -> bool {
        self.cmpfunc.is_some()
    }

    pub(crate) fn cmpfunc(&self) -> Option<Rc<CmpFn>> {
        self.cmpfunc.clone()
    }

    /// Creates an unbound deep copy of this column. The header and hint are
    /// cloned; the comparator is shared with the original.
    pub fn copy(&self) -> ColumnRef {
        Rc::new(RefCell::new(Column {
            seqnum: None,
            header: self.header.clone(),
            width_hint: self.width_hint,
            flags: self.flags,
            cmpfunc: self.cmpfunc.clone(),
        }))
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("seqnum", &self.seqnum)
            .field("header", &self.header)
            .field("width_hint", &self.width_hint)
            .field("flags", &self.flags)
            .field("has_cmp", &self.cmpfunc.is_some())
            .finish()
    }
}
