//! # Trellis - Table Entity Model for Terminal Output
//!
//! `trellis` is the in-memory entity model underlying a tabular-output
//! renderer: assemble a table out of columns and rows, optionally arrange
//! rows into a parent/child forest for tree output, and hand a stably
//! ordered, sortable structure to a downstream formatter.
//!
//! The crate deliberately stops at the entity model. Cell content
//! formatting, wrapping, width measurement, color emission and
//! JSON/export/raw serialization are the consumer's business; they read the
//! model through columns, lines, cells, configuration and symbols.
//!
//! ## Core Concepts
//!
//! - [`Table`]: aggregate root owning ordered columns and a forest of lines
//! - [`Column`]: a named vertical slot with a width hint and optional sort
//!   comparator
//! - [`Line`]: a row; may have a parent line and ordered child lines
//! - [`Cell`]: per-(line, column) content slot
//! - [`Symbols`]: shared glyph set used to draw tree connectors
//! - [`Cursor`]: forward/backward traversal over columns or lines
//!
//! Columns and lines are shared handles ([`ColumnRef`] and [`LineRef`],
//! both `Rc<RefCell<_>>`): the table holds one strong reference to each member,
//! and callers keep their own clones for direct access. Dropping every
//! handle releases the object; parent back-references are weak, so the
//! forest can never leak through a reference cycle.
//!
//! ## Quick Start
//!
//! ```rust
//! use trellis::{cmp_str_cells, ColumnFlags, Table, WidthHint};
//!
//! let mut tb = Table::new();
//! tb.new_column("NAME", WidthHint::Cells(12), ColumnFlags::TREE).unwrap();
//! let size = tb.new_column("SIZE", WidthHint::Cells(6), ColumnFlags::RIGHT).unwrap();
//! size.borrow_mut().set_cmp(cmp_str_cells);
//!
//! let root = tb.new_line(None).unwrap();
//! root.borrow_mut().set_data(0, "etc").unwrap();
//! let child = tb.new_line(Some(&root)).unwrap();
//! child.borrow_mut().set_data(0, "fstab").unwrap();
//!
//! assert!(tb.is_tree());
//! tb.sort(&size).unwrap();
//! ```
//!
//! ## Tree Output
//!
//! A table renders as a tree when at least one column carries
//! [`ColumnFlags::TREE`]; the actual branch glyphs come from the attached
//! [`Symbols`] (see [`Table::set_default_symbols`]). Lines link into the
//! forest with [`Line::add_child`] or [`Table::new_line`].
//!
//! ## Threading
//!
//! The model is single-threaded by design: handles are `Rc`-based and the
//! compiler keeps them on one thread. Serialize access externally if a
//! table must be reached from several logical tasks.

mod cell;
mod column;
mod debug;
mod error;
mod iter;
mod line;
mod sort;
mod symbols;
mod table;

pub use cell::{cmp_str_cells, Cell};
pub use column::{CmpFn, Column, ColumnFlags, ColumnRef, WidthHint};
pub use error::{Error, Result};
pub use iter::{Cursor, Direction};
pub use line::{Line, LineRef};
pub use symbols::{Symbols, SymbolsRef};
pub use table::{OutputFormat, Table, TermForce};
