//! In-memory multi-cursor buffer.
//!
//! Selections are mapped through every edit the same way a host editor
//! maps them: positions before the edit stay put, positions after it shift
//! by the length change, and positions inside the replaced span land at
//! the end of the inserted text.

use super::text;
use super::{EditorSurface, Position, Selection};

#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    selections: Vec<Selection>,
}

impl TextBuffer {
    pub fn new(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(String::from).collect(),
            selections: vec![Selection::cursor(Position::default())],
        }
    }

    pub fn with_cursor(mut self, pos: Position) -> Self {
        self.set_cursor(pos);
        self
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn map_offset(offset: usize, start: usize, end: usize, inserted: usize) -> usize {
        if offset <= start {
            offset
        } else if offset >= end {
            offset - (end - start) + inserted
        } else {
            start + inserted
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new("")
    }
}

impl EditorSurface for TextBuffer {
    fn cursor(&self) -> Position {
        self.selections
            .first()
            .map(|s| s.head)
            .unwrap_or_default()
    }

    fn set_cursor(&mut self, pos: Position) {
        let pos = text::clamp(&self.lines, pos);
        self.selections = vec![Selection::cursor(pos)];
    }

    fn line(&self, line: usize) -> String {
        self.lines.get(line).cloned().unwrap_or_default()
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn range(&self, from: Position, to: Position) -> String {
        text::slice(&self.lines, from, to)
    }

    fn replace_range(&mut self, replacement: &str, from: Position, to: Position) {
        let start = text::pos_to_offset(&self.lines, from.min(to));
        let end = text::pos_to_offset(&self.lines, from.max(to));
        let inserted = text::char_len(replacement);

        let offsets: Vec<(usize, usize)> = self
            .selections
            .iter()
            .map(|s| {
                (
                    text::pos_to_offset(&self.lines, s.anchor),
                    text::pos_to_offset(&self.lines, s.head),
                )
            })
            .collect();

        self.lines = text::splice(&self.lines, from, to, replacement);

        self.selections = offsets
            .into_iter()
            .map(|(anchor, head)| {
                Selection::new(
                    text::offset_to_pos(&self.lines, Self::map_offset(anchor, start, end, inserted)),
                    text::offset_to_pos(&self.lines, Self::map_offset(head, start, end, inserted)),
                )
            })
            .collect();
    }

    fn selection(&self) -> String {
        self.selections
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| text::slice(&self.lines, s.from(), s.to()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn replace_selection(&mut self, replacement: &str) {
        let mut ranges: Vec<(usize, usize)> = self
            .selections
            .iter()
            .map(|s| {
                (
                    text::pos_to_offset(&self.lines, s.from()),
                    text::pos_to_offset(&self.lines, s.to()),
                )
            })
            .collect();
        ranges.sort();
        ranges.dedup();

        let inserted = text::char_len(replacement);
        for &(start, end) in ranges.iter().rev() {
            let from = text::offset_to_pos(&self.lines, start);
            let to = text::offset_to_pos(&self.lines, end);
            self.lines = text::splice(&self.lines, from, to, replacement);
        }

        let mut shift: isize = 0;
        let mut cursors = Vec::with_capacity(ranges.len());
        for (start, end) in ranges {
            let head = (start as isize + shift) as usize + inserted;
            cursors.push(Selection::cursor(text::offset_to_pos(&self.lines, head)));
            shift += inserted as isize - (end - start) as isize;
        }
        self.selections = cursors;
    }

    fn set_selection(&mut self, anchor: Position, head: Position) {
        self.selections = vec![Selection::new(
            text::clamp(&self.lines, anchor),
            text::clamp(&self.lines, head),
        )];
    }

    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn set_selections(&mut self, selections: Vec<Selection>) {
        if selections.is_empty() {
            return;
        }
        self.selections = selections
            .into_iter()
            .map(|s| {
                Selection::new(
                    text::clamp(&self.lines, s.anchor),
                    text::clamp(&self.lines, s.head),
                )
            })
            .collect();
    }

    fn pos_to_offset(&self, pos: Position) -> usize {
        text::pos_to_offset(&self.lines, pos)
    }

    fn offset_to_pos(&self, offset: usize) -> Position {
        text::offset_to_pos(&self.lines, offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::TextChange;

    #[test]
    fn test_replace_range_maps_cursor_after_edit() {
        let mut buf = TextBuffer::new("hello world").with_cursor(Position::new(0, 11));
        buf.replace_range("", Position::new(0, 0), Position::new(0, 6));
        assert_eq!(buf.text(), "world");
        assert_eq!(buf.cursor(), Position::new(0, 5));
    }

    #[test]
    fn test_replace_range_keeps_cursor_at_insertion_point() {
        let mut buf = TextBuffer::new("ab").with_cursor(Position::new(0, 1));
        buf.replace_range("XY", Position::new(0, 1), Position::new(0, 1));
        assert_eq!(buf.text(), "aXYb");
        assert_eq!(buf.cursor(), Position::new(0, 1));
    }

    #[test]
    fn test_replace_selection_multi_cursor() {
        let mut buf = TextBuffer::new("one\ntwo\nthree");
        buf.set_selections(vec![
            Selection::new(Position::new(0, 0), Position::new(0, 3)),
            Selection::new(Position::new(2, 0), Position::new(2, 5)),
        ]);
        assert_eq!(buf.selection(), "one\nthree");

        buf.replace_selection("X");
        assert_eq!(buf.text(), "X\ntwo\nX");
        assert_eq!(
            buf.selections(),
            vec![
                Selection::cursor(Position::new(0, 1)),
                Selection::cursor(Position::new(2, 1)),
            ]
        );
    }

    #[test]
    fn test_apply_changes_uses_original_positions() {
        let mut buf = TextBuffer::new("aaa\nbbb");
        buf.apply_changes(&[
            TextChange::new(Position::new(0, 0), Position::new(0, 0), "1\n"),
            TextChange::new(Position::new(1, 1), Position::new(1, 2), "2"),
        ]);
        assert_eq!(buf.text(), "1\naaa\nb2b");
    }

    #[test]
    fn test_line_past_end_is_empty() {
        let buf = TextBuffer::new("only");
        assert_eq!(buf.line(3), "");
        assert_eq!(buf.line_count(), 1);
    }
}
