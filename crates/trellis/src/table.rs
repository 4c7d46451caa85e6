//! The table aggregate root.
//!
//! A [`Table`] owns an ordered sequence of columns and the flat, ordered
//! sequence of every line added to it (nested lines included); the forest
//! for tree output is realized through each line's child list. The table
//! also carries the output configuration a renderer reads: format selector,
//! boolean flags, separators, terminal width handling, name and title.
//!
//! Structural rules enforced here:
//!
//! - columns may be added or removed only while the table holds zero lines;
//! - a column or line belongs to at most one table at a time;
//! - lines receive stable insertion stamps that are never reassigned or
//!   reused, while columns are densely renumbered by position.

use std::rc::Rc;

use tracing::debug;

use crate::cell::Cell;
use crate::column::{Column, ColumnFlags, ColumnRef, WidthHint};
use crate::debug::padding_debug;
use crate::error::{Error, Result};
use crate::iter::{Cursor, Direction};
use crate::line::{Line, LineRef};
use crate::symbols::{Symbols, SymbolsRef};

const DEFAULT_TERMWIDTH: usize = 80;

/// Output format selector. The parsable formats are mutually exclusive by
/// construction; selecting one replaces whatever was active before.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable columns (the default).
    #[default]
    Columns,
    /// Raw whitespace-separated output.
    Raw,
    /// JSON output.
    Json,
    /// `NAME="value"` export output.
    Export,
}

/// Controls whether the renderer treats the output as a terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TermForce {
    /// Detect automatically (the default).
    #[default]
    Auto,
    /// Never treat the output as a terminal.
    Never,
    /// Always treat the output as a terminal.
    Always,
}

/// Container for rows and columns.
///
/// ```rust
/// use trellis::{ColumnFlags, Table, WidthHint};
///
/// let mut tb = Table::new();
/// tb.new_column("NAME", WidthHint::Cells(10), ColumnFlags::empty()).unwrap();
/// tb.new_column("SIZE", WidthHint::Cells(6), ColumnFlags::RIGHT).unwrap();
///
/// let ln = tb.new_line(None).unwrap();
/// ln.borrow_mut().set_data(0, "foo.txt").unwrap();
/// ln.borrow_mut().set_data(1, "42").unwrap();
///
/// assert_eq!(tb.column_count(), 2);
/// assert_eq!(tb.line_count(), 1);
/// ```
#[derive(Debug)]
pub struct Table {
    columns: Vec<ColumnRef>,
    lines: Vec<LineRef>,
    next_line_seq: usize,
    symbols: Option<SymbolsRef>,
    format: OutputFormat,
    ascii: bool,
    no_headings: bool,
    colors_wanted: bool,
    maxout: bool,
    no_wrap: bool,
    no_linesep: bool,
    colsep: Option<String>,
    linesep: Option<String>,
    termwidth: usize,
    termreduce: usize,
    termforce: TermForce,
    name: Option<String>,
    title: Cell,
    padding_debug: bool,
}

impl Table {
    /// Creates an empty table. Terminal width is detected from the
    /// environment, falling back to 80 characters.
    pub fn new() -> Self {
        let tb = Table {
            columns: Vec::new(),
            lines: Vec::new(),
            next_line_seq: 0,
            symbols: None,
            format: OutputFormat::default(),
            ascii: false,
            no_headings: false,
            colors_wanted: false,
            maxout: false,
            no_wrap: false,
            no_linesep: false,
            colsep: None,
            linesep: None,
            termwidth: detect_termwidth(),
            termreduce: 0,
            termforce: TermForce::default(),
            name: None,
            title: Cell::new(),
            padding_debug: padding_debug(),
        };
        debug!(termwidth = tb.termwidth, "new table");
        tb
    }

    // --- counts and predicates ---

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Flat number of lines, nested lines included.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// True if the table holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True iff at least one column carries [`ColumnFlags::TREE`],
    /// independent of whether any line actually has children.
    pub fn is_tree(&self) -> bool {
        self.columns.iter().any(|cl| cl.borrow().is_tree())
    }

    // --- column management ---

    /// Adds `cl` at the end of the column sequence.
    ///
    /// Fails with [`Error::InvalidArgument`] if the table already holds
    /// lines (per-line cell arrays cannot be reshaped after data exists) or
    /// if the column is already bound to a table.
    pub fn add_column(&mut self, cl: &ColumnRef) -> Result<()> {
        if !self.lines.is_empty() {
            return Err(Error::InvalidArgument("table already holds lines"));
        }
        if cl.borrow().is_bound() {
            return Err(Error::InvalidArgument(
                "column is already a member of a table",
            ));
        }
        let seqnum = self.columns.len();
        cl.borrow_mut().set_seqnum(Some(seqnum));
        self.columns.push(Rc::clone(cl));
        debug!(seqnum, "add column");
        Ok(())
    }

    /// Removes `cl` from the table and renumbers the remaining columns.
    ///
    /// Fails with [`Error::InvalidArgument`] if the table holds lines or if
    /// the column is not a member of this table.
    pub fn remove_column(&mut self, cl: &ColumnRef) -> Result<()> {
        if !self.lines.is_empty() {
            return Err(Error::InvalidArgument("table already holds lines"));
        }
        let pos = self
            .columns
            .iter()
            .position(|c| Rc::ptr_eq(c, cl))
            .ok_or(Error::InvalidArgument(
                "column is not a member of this table",
            ))?;
        self.columns.remove(pos);
        cl.borrow_mut().set_seqnum(None);
        for (i, c) in self.columns.iter().enumerate() {
            c.borrow_mut().set_seqnum(Some(i));
        }
        debug!(pos, "remove column");
        Ok(())
    }

    /// Removes all columns. Fails if the table holds lines.
    pub fn remove_columns(&mut self) -> Result<()> {
        if !self.lines.is_empty() {
            return Err(Error::InvalidArgument("table already holds lines"));
        }
        debug!("remove all columns");
        for cl in self.columns.drain(..) {
            cl.borrow_mut().set_seqnum(None);
        }
        Ok(())
    }

    /// Builds a column, sets its header, hint and flags, and adds it to the
    /// table in one call. On failure nothing is left partially linked.
    pub fn new_column(
        &mut self,
        name: impl Into<String>,
        hint: WidthHint,
        flags: ColumnFlags,
    ) -> Result<ColumnRef> {
        let cl = Column::new();
        {
            let mut c = cl.borrow_mut();
            c.set_name(name);
            c.set_width_hint(hint);
            c.set_flags(flags);
        }
        self.add_column(&cl)?;
        Ok(cl)
    }

    /// Returns the column at position `n` (0-based), or `None` past the end.
    pub fn get_column(&self, n: usize) -> Option<ColumnRef> {
        self.columns.get(n).cloned()
    }

    /// Forward or backward cursor over the column sequence.
    pub fn iter_columns(&self, direction: Direction) -> Cursor<'_, ColumnRef> {
        Cursor::new(&self.columns, direction)
    }

    // --- line management ---

    /// Adds `ln` at the end of the line sequence, growing its cell array to
    /// the table's column count and stamping it with the next sequence
    /// number.
    ///
    /// Fails with [`Error::InvalidArgument`] if the table has zero columns
    /// or the line is already bound to a table.
    pub fn add_line(&mut self, ln: &LineRef) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::InvalidArgument("table has no columns"));
        }
        if ln.borrow().is_bound() {
            return Err(Error::InvalidArgument("line is already a member of a table"));
        }
        ln.borrow_mut().alloc_cells(self.columns.len())?;
        let seqnum = self.next_line_seq;
        self.next_line_seq += 1;
        ln.borrow_mut().set_seqnum(Some(seqnum));
        self.lines.push(Rc::clone(ln));
        debug!(seqnum, "add line");
        Ok(())
    }

    /// Removes `ln` from the flat line sequence.
    ///
    /// Family edges are deliberately left alone: detach the line from its
    /// parent with [`Line::remove_child`] first, or use [`Table::remove_lines`]
    /// which always detaches. Fails if the line is not a member.
    pub fn remove_line(&mut self, ln: &LineRef) -> Result<()> {
        let pos = self
            .lines
            .iter()
            .position(|l| Rc::ptr_eq(l, ln))
            .ok_or(Error::InvalidArgument("line is not a member of this table"))?;
        self.lines.remove(pos);
        ln.borrow_mut().set_seqnum(None);
        debug!(pos, "remove line");
        Ok(())
    }

    /// Empties the table, detaching every line from its parent first so no
    /// dangling family edges remain.
    pub fn remove_lines(&mut self) {
        debug!("remove all lines");
        let lines = std::mem::take(&mut self.lines);
        for ln in &lines {
            let parent = ln.borrow().parent();
            if let Some(parent) = parent {
                // The child is guaranteed present in its parent's list.
                let _ = Line::remove_child(&parent, ln);
            }
            ln.borrow_mut().set_seqnum(None);
        }
    }

    /// Builds a line, adds it to the table, and optionally links it under
    /// `parent`, in one call. On failure nothing is left partially linked.
    pub fn new_line(&mut self, parent: Option<&LineRef>) -> Result<LineRef> {
        let ln = Line::new();
        self.add_line(&ln)?;
        if let Some(parent) = parent {
            if let Err(err) = Line::add_child(parent, &ln) {
                let _ = self.remove_line(&ln);
                return Err(err);
            }
        }
        Ok(ln)
    }

    /// Returns the line whose insertion stamp is `n`, or `None` if no
    /// current member carries that stamp.
    pub fn get_line(&self, n: usize) -> Option<LineRef> {
        self.lines
            .iter()
            .find(|ln| ln.borrow().seqnum() == Some(n))
            .cloned()
    }

    /// Forward or backward cursor over the flat line sequence.
    pub fn iter_lines(&self, direction: Direction) -> Cursor<'_, LineRef> {
        Cursor::new(&self.lines, direction)
    }

    pub(crate) fn lines(&self) -> &[LineRef] {
        &self.lines
    }

    pub(crate) fn lines_mut(&mut self) -> &mut Vec<LineRef> {
        &mut self.lines
    }

    // --- copy ---

    /// Creates a fully independent deep copy of the columns and the line
    /// forest. The [`Symbols`] reference is shared, not copied. Parent/child
    /// edges are re-established by position in the flat sequence. On any
    /// failure the partially built copy is dropped and the error returned.
    pub fn copy(&self) -> Result<Table> {
        debug!("copy table");
        let mut ret = Table::new();

        if let Some(sy) = &self.symbols {
            ret.set_symbols(Some(Rc::clone(sy)));
        }

        for cl in &self.columns {
            let copy = cl.borrow().copy();
            ret.add_column(&copy)?;
        }

        let mut copies: Vec<LineRef> = Vec::new();
        copies.try_reserve(self.lines.len())?;
        for ln in &self.lines {
            let new_ln = ln.borrow().copy()?;
            ret.add_line(&new_ln)?;
            copies.push(new_ln);
        }
        for (i, ln) in self.lines.iter().enumerate() {
            let parent = ln.borrow().parent();
            if let Some(parent) = parent {
                let pos = self
                    .lines
                    .iter()
                    .position(|l| Rc::ptr_eq(l, &parent))
                    .ok_or(Error::InvalidArgument(
                        "parent line is not a member of this table",
                    ))?;
                Line::add_child(&copies[pos], &copies[i])?;
            }
        }

        ret.colsep = self.colsep.clone();
        ret.linesep = self.linesep.clone();
        Ok(ret)
    }

    // --- symbols ---

    /// Attaches a shared glyph set, releasing any previously held reference.
    /// `None` leaves the table symbol-less.
    pub fn set_symbols(&mut self, symbols: Option<SymbolsRef>) {
        debug!(set = symbols.is_some(), "set symbols");
        self.symbols = symbols;
    }

    /// The attached glyph set, if any.
    pub fn symbols(&self) -> Option<&SymbolsRef> {
        self.symbols.as_ref()
    }

    /// Builds and attaches one of the two canonical glyph sets, selected by
    /// the table's ascii flag.
    pub fn set_default_symbols(&mut self) {
        debug!(ascii = self.ascii, "set default symbols");
        let sy = if self.ascii {
            Symbols::ascii()
        } else {
            Symbols::utf8()
        };
        self.set_symbols(Some(sy.into_shared()));
    }

    // --- output configuration ---

    /// Selects the output format. Formats are mutually exclusive; setting
    /// one replaces the previous selection.
    pub fn set_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_raw(&self) -> bool {
        self.format == OutputFormat::Raw
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn is_export(&self) -> bool {
        self.format == OutputFormat::Export
    }

    /// Forces ASCII-only tree glyphs, regardless of terminal capabilities.
    pub fn set_ascii(&mut self, enable: bool) {
        self.ascii = enable;
    }

    pub fn is_ascii(&self) -> bool {
        self.ascii
    }

    /// Suppresses the header line.
    pub fn set_no_headings(&mut self, enable: bool) {
        self.no_headings = enable;
    }

    pub fn no_headings(&self) -> bool {
        self.no_headings
    }

    /// Asks the renderer to emit colors.
    pub fn set_colors_wanted(&mut self, enable: bool) {
        self.colors_wanted = enable;
    }

    pub fn colors_wanted(&self) -> bool {
        self.colors_wanted
    }

    /// Uses the extra space after the last column for all columns.
    pub fn set_maxout(&mut self, enable: bool) {
        self.maxout = enable;
    }

    pub fn maxout(&self) -> bool {
        self.maxout
    }

    /// Never continue on the next line; drop or truncate instead.
    pub fn set_no_wrap(&mut self, enable: bool) {
        self.no_wrap = enable;
    }

    pub fn no_wrap(&self) -> bool {
        self.no_wrap
    }

    /// Suppresses the line separator, for re-printing the same line.
    pub fn set_no_linesep(&mut self, enable: bool) {
        self.no_linesep = enable;
    }

    pub fn no_linesep(&self) -> bool {
        self.no_linesep
    }

    /// Sets the column separator. It should occupy a single cell in the
    /// output.
    pub fn set_column_separator(&mut self, sep: impl Into<String>) {
        self.colsep = Some(sep.into());
    }

    pub fn column_separator(&self) -> Option<&str> {
        self.colsep.as_deref()
    }

    /// Sets the line separator.
    pub fn set_line_separator(&mut self, sep: impl Into<String>) {
        self.linesep = Some(sep.into());
    }

    pub fn line_separator(&self) -> Option<&str> {
        self.linesep.as_deref()
    }

    /// Overrides the detected terminal width.
    pub fn set_termwidth(&mut self, width: usize) {
        self.termwidth = width;
    }

    pub fn termwidth(&self) -> usize {
        self.termwidth
    }

    /// Reserves extra space at the edge of the terminal, e.g. for borders
    /// drawn by the application.
    pub fn reduce_termwidth(&mut self, reduce: usize) {
        debug!(reduce, "reduce terminal width");
        self.termreduce = reduce;
    }

    pub fn termreduce(&self) -> usize {
        self.termreduce
    }

    /// Forces terminal / non-terminal handling instead of detection.
    pub fn set_termforce(&mut self, force: TermForce) {
        self.termforce = force;
    }

    pub fn termforce(&self) -> TermForce {
        self.termforce
    }

    /// Sets the table name, used e.g. as the JSON top-level object name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The title cell printed above the table.
    pub fn title(&self) -> &Cell {
        &self.title
    }

    pub fn title_mut(&mut self) -> &mut Cell {
        &mut self.title
    }

    /// True if `TRELLIS_DEBUG_PADDING` was enabled when this table was
    /// created; renderers use it to visualize padding.
    pub fn padding_debug(&self) -> bool {
        self.padding_debug
    }
}

impl Default for Table {
    fn default() -> Self {
        Table::new()
    }
}

fn detect_termwidth() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_TERMWIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::cmp_str_cells;

    fn two_column_table() -> Table {
        let mut tb = Table::new();
        tb.new_column("NAME", WidthHint::Cells(10), ColumnFlags::empty())
            .unwrap();
        tb.new_column("SIZE", WidthHint::Cells(6), ColumnFlags::empty())
            .unwrap();
        tb
    }

    #[test]
    fn new_table_is_empty() {
        let tb = Table::new();
        assert_eq!(tb.column_count(), 0);
        assert_eq!(tb.line_count(), 0);
        assert!(tb.is_empty());
        assert!(tb.termwidth() > 0);
    }

    #[test]
    fn columns_are_numbered_in_insertion_order() {
        let tb = two_column_table();
        assert_eq!(tb.get_column(0).unwrap().borrow().seqnum(), Some(0));
        assert_eq!(tb.get_column(1).unwrap().borrow().seqnum(), Some(1));
        assert!(tb.get_column(2).is_none());
    }

    #[test]
    fn add_column_rejects_bound_column() {
        let mut a = Table::new();
        let mut b = Table::new();
        let cl = Column::new();
        a.add_column(&cl).unwrap();
        assert!(matches!(
            b.add_column(&cl),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(a.column_count(), 1);
        assert_eq!(b.column_count(), 0);
    }

    #[test]
    fn add_column_fails_once_lines_exist() {
        let mut tb = two_column_table();
        tb.new_line(None).unwrap();
        let cl = Column::new();
        assert!(matches!(
            tb.add_column(&cl),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(tb.column_count(), 2);
        assert!(!cl.borrow().is_bound());
    }

    #[test]
    fn remove_column_renumbers_densely() {
        let mut tb = Table::new();
        let a = tb
            .new_column("A", WidthHint::default(), ColumnFlags::empty())
            .unwrap();
        let b = tb
            .new_column("B", WidthHint::default(), ColumnFlags::empty())
            .unwrap();
        let c = tb
            .new_column("C", WidthHint::default(), ColumnFlags::empty())
            .unwrap();
        tb.remove_column(&b).unwrap();
        assert_eq!(b.borrow().seqnum(), None);
        assert_eq!(a.borrow().seqnum(), Some(0));
        assert_eq!(c.borrow().seqnum(), Some(1));
        assert!(Rc::ptr_eq(&tb.get_column(1).unwrap(), &c));
    }

    #[test]
    fn remove_column_fails_once_lines_exist() {
        let mut tb = two_column_table();
        let cl = tb.get_column(0).unwrap();
        tb.new_line(None).unwrap();
        assert!(matches!(
            tb.remove_column(&cl),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            tb.remove_columns(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn remove_columns_unbinds_all() {
        let mut tb = two_column_table();
        let cl = tb.get_column(0).unwrap();
        tb.remove_columns().unwrap();
        assert_eq!(tb.column_count(), 0);
        assert_eq!(cl.borrow().seqnum(), None);
    }

    #[test]
    fn add_line_requires_columns() {
        let mut tb = Table::new();
        let ln = Line::new();
        assert!(matches!(tb.add_line(&ln), Err(Error::InvalidArgument(_))));
        assert!(matches!(tb.new_line(None), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn add_line_grows_cell_array() {
        let mut tb = two_column_table();
        let ln = Line::new();
        tb.add_line(&ln).unwrap();
        assert_eq!(ln.borrow().cell_count(), 2);
        assert_eq!(ln.borrow().seqnum(), Some(0));
    }

    #[test]
    fn add_line_rejects_bound_line() {
        let mut a = two_column_table();
        let mut b = two_column_table();
        let ln = Line::new();
        a.add_line(&ln).unwrap();
        assert!(matches!(b.add_line(&ln), Err(Error::InvalidArgument(_))));
        assert_eq!(a.line_count(), 1);
        assert_eq!(b.line_count(), 0);
    }

    #[test]
    fn line_stamps_are_never_reused() {
        let mut tb = two_column_table();
        let first = tb.new_line(None).unwrap();
        let second = tb.new_line(None).unwrap();
        assert_eq!(second.borrow().seqnum(), Some(1));
        tb.remove_line(&second).unwrap();
        let third = tb.new_line(None).unwrap();
        assert_eq!(third.borrow().seqnum(), Some(2));
        assert_eq!(first.borrow().seqnum(), Some(0));
        // Stamp 1 left the table with its line.
        assert!(tb.get_line(1).is_none());
        assert!(tb.get_line(2).is_some());
    }

    #[test]
    fn remove_line_keeps_family_edges() {
        let mut tb = two_column_table();
        let parent = tb.new_line(None).unwrap();
        let child = tb.new_line(Some(&parent)).unwrap();
        tb.remove_line(&child).unwrap();
        // Detachment is the caller's job for single-line removal.
        assert!(child.borrow().parent().is_some());
        assert_eq!(parent.borrow().children().len(), 1);
    }

    #[test]
    fn remove_lines_detaches_every_edge() {
        let mut tb = two_column_table();
        let root = tb.new_line(None).unwrap();
        let child = tb.new_line(Some(&root)).unwrap();
        let grandchild = tb.new_line(Some(&child)).unwrap();
        tb.remove_lines();
        assert_eq!(tb.line_count(), 0);
        for ln in [&root, &child, &grandchild] {
            assert!(ln.borrow().parent().is_none());
            assert!(ln.borrow().children().is_empty());
            assert_eq!(ln.borrow().seqnum(), None);
        }
    }

    #[test]
    fn new_line_links_under_parent() {
        let mut tb = two_column_table();
        let parent = tb.new_line(None).unwrap();
        let child = tb.new_line(Some(&parent)).unwrap();
        assert!(Rc::ptr_eq(&child.borrow().parent().unwrap(), &parent));
        assert_eq!(tb.line_count(), 2);
    }

    #[test]
    fn is_tree_follows_column_flags() {
        let mut tb = Table::new();
        tb.new_column("NAME", WidthHint::default(), ColumnFlags::TREE)
            .unwrap();
        // No parent/child edge exists; the flag alone decides.
        assert!(tb.is_tree());

        let mut flat = Table::new();
        flat.new_column("NAME", WidthHint::default(), ColumnFlags::empty())
            .unwrap();
        let parent = flat.new_line(None).unwrap();
        flat.new_line(Some(&parent)).unwrap();
        assert!(!flat.is_tree());
    }

    #[test]
    fn format_selection_is_exclusive() {
        let mut tb = Table::new();
        assert_eq!(tb.format(), OutputFormat::Columns);
        tb.set_format(OutputFormat::Raw);
        assert!(tb.is_raw());
        tb.set_format(OutputFormat::Json);
        assert!(tb.is_json());
        assert!(!tb.is_raw());
        tb.set_format(OutputFormat::Export);
        assert!(tb.is_export());
        assert!(!tb.is_json());
        tb.set_format(OutputFormat::Columns);
        assert!(!tb.is_export());
    }

    #[test]
    fn boolean_flags_round_trip() {
        let mut tb = Table::new();
        tb.set_ascii(true);
        tb.set_no_headings(true);
        tb.set_colors_wanted(true);
        tb.set_maxout(true);
        tb.set_no_wrap(true);
        tb.set_no_linesep(true);
        assert!(tb.is_ascii());
        assert!(tb.no_headings());
        assert!(tb.colors_wanted());
        assert!(tb.maxout());
        assert!(tb.no_wrap());
        assert!(tb.no_linesep());
    }

    #[test]
    fn separators_name_and_title() {
        let mut tb = Table::new();
        assert_eq!(tb.column_separator(), None);
        tb.set_column_separator(" | ");
        tb.set_line_separator("\n");
        tb.set_name("files");
        tb.title_mut().set_data("File listing");
        assert_eq!(tb.column_separator(), Some(" | "));
        assert_eq!(tb.line_separator(), Some("\n"));
        assert_eq!(tb.name(), Some("files"));
        assert_eq!(tb.title().data(), Some("File listing"));
    }

    #[test]
    fn termwidth_override_and_reduce() {
        let mut tb = Table::new();
        tb.set_termwidth(120);
        tb.reduce_termwidth(4);
        tb.set_termforce(TermForce::Always);
        assert_eq!(tb.termwidth(), 120);
        assert_eq!(tb.termreduce(), 4);
        assert_eq!(tb.termforce(), TermForce::Always);
    }

    #[test]
    fn default_symbols_follow_ascii_flag() {
        let mut tb = Table::new();
        tb.set_default_symbols();
        assert_eq!(tb.symbols().unwrap().branch(), "├─");
        tb.set_ascii(true);
        tb.set_default_symbols();
        assert_eq!(tb.symbols().unwrap().branch(), "|-");
        tb.set_symbols(None);
        assert!(tb.symbols().is_none());
    }

    #[test]
    fn iter_lines_walks_both_directions() {
        let mut tb = two_column_table();
        for name in ["a", "b", "c"] {
            let ln = tb.new_line(None).unwrap();
            ln.borrow_mut().set_data(0, name).unwrap();
        }
        let forward: Vec<String> = tb
            .iter_lines(Direction::Forward)
            .map(|ln| ln.borrow().cell(0).unwrap().data().unwrap().to_string())
            .collect();
        let backward: Vec<String> = tb
            .iter_lines(Direction::Backward)
            .map(|ln| ln.borrow().cell(0).unwrap().data().unwrap().to_string())
            .collect();
        assert_eq!(forward, vec!["a", "b", "c"]);
        assert_eq!(backward, vec!["c", "b", "a"]);
    }

    #[test]
    fn copy_reproduces_shape_and_shares_symbols() {
        let mut tb = two_column_table();
        tb.get_column(1).unwrap().borrow_mut().set_cmp(cmp_str_cells);
        tb.set_default_symbols();
        tb.set_column_separator("  ");

        let root = tb.new_line(None).unwrap();
        root.borrow_mut().set_data(0, "root").unwrap();
        let child = tb.new_line(Some(&root)).unwrap();
        child.borrow_mut().set_data(0, "child").unwrap();
        tb.new_line(Some(&child)).unwrap();

        let copy = tb.copy().unwrap();
        assert_eq!(copy.column_count(), 2);
        assert_eq!(copy.line_count(), 3);
        assert_eq!(copy.column_separator(), Some("  "));
        assert!(Rc::ptr_eq(copy.symbols().unwrap(), tb.symbols().unwrap()));

        // Same forest shape by relative position.
        let copied_root = copy.get_line(0).unwrap();
        let copied_child = copy.get_line(1).unwrap();
        let copied_grandchild = copy.get_line(2).unwrap();
        assert!(copied_root.borrow().parent().is_none());
        assert!(Rc::ptr_eq(
            &copied_child.borrow().parent().unwrap(),
            &copied_root
        ));
        assert!(Rc::ptr_eq(
            &copied_grandchild.borrow().parent().unwrap(),
            &copied_child
        ));
        assert_eq!(copied_root.borrow().cell(0).unwrap().data(), Some("root"));

        // Fully independent of the original.
        drop(tb);
        assert_eq!(copy.line_count(), 3);
        assert_eq!(copied_child.borrow().cell(0).unwrap().data(), Some("child"));
    }

    #[test]
    fn copy_does_not_share_line_storage() {
        let mut tb = two_column_table();
        let ln = tb.new_line(None).unwrap();
        ln.borrow_mut().set_data(0, "original").unwrap();
        let copy = tb.copy().unwrap();
        ln.borrow_mut().set_data(0, "mutated").unwrap();
        assert_eq!(
            copy.get_line(0).unwrap().borrow().cell(0).unwrap().data(),
            Some("original")
        );
    }
}
