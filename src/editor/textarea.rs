//! `EditorSurface` over a `tui_textarea::TextArea`.
//!
//! The textarea has one cursor and one selection, so only the first of
//! several selections is kept.

use super::text;
use super::{EditorSurface, Position, Selection};
use std::cmp::min;
use tui_textarea::{CursorMove, TextArea};

pub struct TextAreaSurface<'a, 'b> {
    textarea: &'a mut TextArea<'b>,
}

impl<'a, 'b> TextAreaSurface<'a, 'b> {
    pub fn new(textarea: &'a mut TextArea<'b>) -> Self {
        Self { textarea }
    }

    fn jump(&mut self, pos: Position) {
        let row = min(pos.line, u16::MAX as usize) as u16;
        let col = min(pos.ch, u16::MAX as usize) as u16;
        self.textarea.move_cursor(CursorMove::Jump(row, col));
    }

    /// Ordered (start, end) of a non-empty selection
    fn selected_range(&self) -> Option<(Position, Position)> {
        let (start, end) = self.textarea.selection_range()?;
        let start = Position::new(start.0, start.1);
        let end = Position::new(end.0, end.1);
        match start == end {
            true => None,
            false => Some((start.min(end), start.max(end))),
        }
    }
}

impl EditorSurface for TextAreaSurface<'_, '_> {
    fn cursor(&self) -> Position {
        let (row, col) = self.textarea.cursor();
        Position::new(row, col)
    }

    fn set_cursor(&mut self, pos: Position) {
        self.textarea.cancel_selection();
        self.jump(pos);
    }

    fn line(&self, line: usize) -> String {
        self.textarea.lines().get(line).cloned().unwrap_or_default()
    }

    fn line_count(&self) -> usize {
        self.textarea.lines().len()
    }

    fn range(&self, from: Position, to: Position) -> String {
        text::slice(self.textarea.lines(), from, to)
    }

    fn replace_range(&mut self, replacement: &str, from: Position, to: Position) {
        let (from, to) = (from.min(to), from.max(to));
        self.textarea.cancel_selection();
        self.jump(from);
        if from != to {
            self.textarea.start_selection();
            self.jump(to);
            self.textarea.cut();
        }
        if !replacement.is_empty() {
            self.textarea.insert_str(replacement);
        }
    }

    fn selection(&self) -> String {
        match self.selected_range() {
            Some((start, end)) => text::slice(self.textarea.lines(), start, end),
            None => String::new(),
        }
    }

    fn replace_selection(&mut self, replacement: &str) {
        if self.selected_range().is_some() {
            self.textarea.cut();
        } else {
            self.textarea.cancel_selection();
        }
        if !replacement.is_empty() {
            self.textarea.insert_str(replacement);
        }
    }

    fn set_selection(&mut self, anchor: Position, head: Position) {
        self.textarea.cancel_selection();
        self.jump(anchor);
        if anchor != head {
            self.textarea.start_selection();
            self.jump(head);
        }
    }

    fn selections(&self) -> Vec<Selection> {
        let head = self.cursor();
        match self.selected_range() {
            Some((start, end)) => {
                let anchor = if head == start { end } else { start };
                vec![Selection::new(anchor, head)]
            }
            None => vec![Selection::cursor(head)],
        }
    }

    fn set_selections(&mut self, selections: Vec<Selection>) {
        if selections.len() > 1 {
            log::debug!(
                "Textarea supports one selection; dropping {}",
                selections.len() - 1
            );
        }
        if let Some(first) = selections.first() {
            self.set_selection(first.anchor, first.head);
        }
    }

    fn pos_to_offset(&self, pos: Position) -> usize {
        text::pos_to_offset(self.textarea.lines(), pos)
    }

    fn offset_to_pos(&self, offset: usize) -> Position {
        text::offset_to_pos(self.textarea.lines(), offset)
    }

    fn highlight_region(&mut self, mark: Position) {
        let head = self.cursor();
        self.textarea.cancel_selection();
        self.jump(mark);
        self.textarea.start_selection();
        self.jump(head);
    }

    fn clear_region_highlight(&mut self) {
        self.textarea.cancel_selection();
    }
}
