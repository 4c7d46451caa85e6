//! Tree-drawing glyph sets shared between tables.
//!
//! A [`Symbols`] value holds the strings a renderer uses to draw tree
//! branches and padding. Symbols are shared by reference: a table holds an
//! `Rc<Symbols>`, and the same set may be attached to any number of tables.

use std::rc::Rc;

/// Shared handle to a glyph set.
pub type SymbolsRef = Rc<Symbols>;

/// Glyphs used to draw tree connectors and padding.
///
/// The three connector glyphs render a branch like this:
///
/// ```text
/// parent
/// |-child        <- branch
/// | `-grandchild <- vertical, right
/// `-child        <- right (last sibling)
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Symbols {
    branch: String,
    vertical: String,
    right: String,
    title_padding: String,
    cell_padding: String,
}

impl Symbols {
    /// Creates an empty glyph set. Use the setters, or start from
    /// [`Symbols::utf8`] / [`Symbols::ascii`].
    pub fn new() -> Self {
        Symbols::default()
    }

    /// The canonical rich glyph set (box-drawing characters).
    pub fn utf8() -> Self {
        Symbols {
            branch: "\u{251c}\u{2500}".to_string(),
            vertical: "\u{2502} ".to_string(),
            right: "\u{2514}\u{2500}".to_string(),
            title_padding: " ".to_string(),
            cell_padding: " ".to_string(),
        }
    }

    /// The canonical ASCII fallback glyph set.
    pub fn ascii() -> Self {
        Symbols {
            branch: "|-".to_string(),
            vertical: "| ".to_string(),
            right: "`-".to_string(),
            title_padding: " ".to_string(),
            cell_padding: " ".to_string(),
        }
    }

    /// Wraps this set in a shared handle.
    pub fn into_shared(self) -> SymbolsRef {
        Rc::new(self)
    }

    /// Sets the glyph drawn before a non-last child.
    pub fn set_branch(&mut self, glyph: impl Into<String>) {
        self.branch = glyph.into();
    }

    /// Sets the glyph continuing a branch past deeper siblings.
    pub fn set_vertical(&mut self, glyph: impl Into<String>) {
        self.vertical = glyph.into();
    }

    /// Sets the glyph drawn before the last child of a branch.
    pub fn set_right(&mut self, glyph: impl Into<String>) {
        self.right = glyph.into();
    }

    /// Sets the padding string used around the table title.
    pub fn set_title_padding(&mut self, padding: impl Into<String>) {
        self.title_padding = padding.into();
    }

    /// Sets the padding string used inside cells.
    pub fn set_cell_padding(&mut self, padding: impl Into<String>) {
        self.cell_padding = padding.into();
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn vertical(&self) -> &str {
        &self.vertical
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn title_padding(&self) -> &str {
        &self.title_padding
    }

    pub fn cell_padding(&self) -> &str {
        &self.cell_padding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_set_uses_plain_connectors() {
        let sy = Symbols::ascii();
        assert_eq!(sy.branch(), "|-");
        assert_eq!(sy.vertical(), "| ");
        assert_eq!(sy.right(), "`-");
        assert_eq!(sy.cell_padding(), " ");
    }

    #[test]
    fn utf8_set_uses_box_drawing() {
        let sy = Symbols::utf8();
        assert_eq!(sy.branch(), "├─");
        assert_eq!(sy.vertical(), "│ ");
        assert_eq!(sy.right(), "└─");
        assert_eq!(sy.title_padding(), " ");
    }

    #[test]
    fn setters_replace_glyphs() {
        let mut sy = Symbols::new();
        sy.set_branch(">>");
        sy.set_vertical("..");
        sy.set_right("->");
        assert_eq!(sy.branch(), ">>");
        assert_eq!(sy.vertical(), "..");
        assert_eq!(sy.right(), "->");
    }

    #[test]
    fn shared_handle_compares_by_identity() {
        let a = Symbols::ascii().into_shared();
        let b = Rc::clone(&a);
        assert!(Rc::ptr_eq(&a, &b));
        assert!(!Rc::ptr_eq(&a, &Symbols::ascii().into_shared()));
    }
}
