//! Editor surface consumed by the kill/yank commands.
//!
//! The host owns the buffer; commands only see it through `EditorSurface`.
//! Two implementations ship with the crate:
//! - `TextBuffer`: an in-memory multi-cursor buffer
//! - `TextAreaSurface`: an adapter over a `tui_textarea::TextArea`

pub mod buffer;
pub mod text;
pub mod textarea;

pub use buffer::TextBuffer;
pub use textarea::TextAreaSurface;

/// A position in the buffer. Columns count `char`s, not bytes.
///
/// Ordering is by line, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// A selection from `anchor` to `head`. The head is where the cursor sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Position,
    pub head: Position,
}

impl Selection {
    pub fn new(anchor: Position, head: Position) -> Self {
        Self { anchor, head }
    }

    /// An empty selection (plain cursor)
    pub fn cursor(pos: Position) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    pub fn from(&self) -> Position {
        self.anchor.min(self.head)
    }

    pub fn to(&self) -> Position {
        self.anchor.max(self.head)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }
}

/// One replacement inside a batch of edits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
    pub from: Position,
    pub to: Position,
    pub text: String,
}

impl TextChange {
    pub fn new(from: Position, to: Position, text: impl Into<String>) -> Self {
        Self {
            from,
            to,
            text: text.into(),
        }
    }

    pub fn delete(from: Position, to: Position) -> Self {
        Self::new(from, to, "")
    }
}

pub trait EditorSurface {
    /// Head of the primary selection
    fn cursor(&self) -> Position;
    fn set_cursor(&mut self, pos: Position);

    /// Text of a line without its line break; empty past the last line
    fn line(&self, line: usize) -> String;
    fn line_count(&self) -> usize;

    fn range(&self, from: Position, to: Position) -> String;
    fn replace_range(&mut self, text: &str, from: Position, to: Position);

    /// Text covered by the current selection(s)
    fn selection(&self) -> String;
    /// Replace every selection with `text`, leaving cursors after it
    fn replace_selection(&mut self, text: &str);
    fn set_selection(&mut self, anchor: Position, head: Position);

    fn selections(&self) -> Vec<Selection>;
    fn set_selections(&mut self, selections: Vec<Selection>);

    fn pos_to_offset(&self, pos: Position) -> usize;
    fn offset_to_pos(&self, offset: usize) -> Position;

    /// Apply a batch of edits whose positions all refer to the buffer as it
    /// was before the batch. Later positions are edited first.
    fn apply_changes(&mut self, changes: &[TextChange]) {
        let mut ordered: Vec<&TextChange> = changes.iter().collect();
        ordered.sort_by(|a, b| b.from.cmp(&a.from));
        for change in ordered {
            self.replace_range(&change.text, change.from, change.to);
        }
    }

    /// Show the region between `mark` and the cursor
    fn highlight_region(&mut self, _mark: Position) {}

    fn clear_region_highlight(&mut self) {}
}
