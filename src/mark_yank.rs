//! Mark and yank tracking on top of the kill ring.
//!
//! `KillAndYank` owns the kill ring, the mark, and the anchors of the
//! current yank sequence. Every command runs to completion against the
//! editor surface it is handed; missing preconditions (no mark, nothing
//! selected, nothing to yank) are silent no-ops.

use crate::editor::text::{char_index_to_byte_index, char_len};
use crate::editor::{EditorSurface, Position, Selection, TextChange};
use crate::error::KillRingError;
use crate::kill_ring::KillRing;
use crate::logging::{self, LogCategory};
use crate::status::{self, MarkAction, MarkStatus, StatusBar};

pub struct KillAndYank {
    kill_ring: KillRing,
    mark: Option<Position>,
    /// Start of the text inserted by the last yank, one per cursor,
    /// ascending. Empty when no yank sequence is active.
    yank_positions: Vec<Position>,
    /// Char length of the text inserted by the last yank
    last_yank_len: Option<usize>,
    status: StatusBar,
}

impl KillAndYank {
    pub fn new(kill_ring: KillRing) -> Self {
        Self {
            kill_ring,
            mark: None,
            yank_positions: Vec::new(),
            last_yank_len: None,
            status: StatusBar::new(),
        }
    }

    pub fn kill_ring(&self) -> &KillRing {
        &self.kill_ring
    }

    pub fn set_kill_ring_max_size(&mut self, size: usize) -> Result<(), KillRingError> {
        self.kill_ring.set_max_size(size)
    }

    pub fn mark(&self) -> Option<Position> {
        self.mark
    }

    pub fn yank_positions(&self) -> &[Position] {
        &self.yank_positions
    }

    pub fn is_yanking(&self) -> bool {
        !self.yank_positions.is_empty()
    }

    pub fn status(&self) -> &StatusBar {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut StatusBar {
        &mut self.status
    }

    // ==================== Mark ====================

    /// Set the mark at the cursor, or toggle an existing one depending on
    /// the current status.
    pub fn set_mark(&mut self, editor: &mut dyn EditorSurface) {
        let cursor = editor.cursor();
        let (next, action) = status::on_set_mark(self.status.status(), self.mark.is_some());
        self.status.set_status(next);

        match action {
            MarkAction::Place => {
                self.mark = Some(cursor);
                editor.highlight_region(cursor);
            }
            MarkAction::Keep => {
                if let Some(mark) = self.mark {
                    editor.highlight_region(mark);
                }
            }
            MarkAction::Clear => {
                self.mark = None;
                editor.clear_region_highlight();
            }
        }
        log::debug!("set-mark: {:?} -> {:?}", action, self.mark);
    }

    // ==================== Kill ====================

    /// Kill from every cursor to the end of its line.
    ///
    /// When nothing but whitespace would be killed, only the line breaks
    /// are removed and the ring is left alone.
    pub fn kill_line(&mut self, editor: &mut dyn EditorSurface) {
        let mut heads: Vec<Position> = editor.selections().iter().map(|s| s.head).collect();
        heads.sort();
        // The leftmost cursor on a line already covers the others
        heads.dedup_by_key(|p| p.line);

        let mut spans = Vec::with_capacity(heads.len());
        for head in heads {
            let line = editor.line(head.line);
            let len = char_len(&line);
            let from = Position::new(head.line, head.ch.min(len));
            let tail = line[char_index_to_byte_index(&line, from.ch)..].to_string();
            spans.push((from, len, tail));
        }

        let killed = spans
            .iter()
            .map(|(_, _, tail)| tail.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        if killed.trim().is_empty() {
            let line_count = editor.line_count();
            let changes: Vec<TextChange> = spans
                .iter()
                .map(|(from, len, _)| {
                    let to = match from.line + 1 < line_count {
                        true => Position::new(from.line + 1, 0),
                        false => Position::new(from.line, *len),
                    };
                    TextChange::delete(*from, to)
                })
                .collect();
            editor.apply_changes(&changes);
            return;
        }

        self.kill_ring.add(killed);
        let changes: Vec<TextChange> = spans
            .iter()
            .map(|(from, len, _)| TextChange::delete(*from, Position::new(from.line, *len)))
            .collect();
        editor.apply_changes(&changes);
    }

    /// Kill between mark and cursor, or the selection when no mark is set.
    pub fn kill_region(&mut self, editor: &mut dyn EditorSurface) {
        if let Some((start, end)) = self.region(editor) {
            let text = editor.range(start, end);
            self.kill_ring.add(text);
            editor.replace_range("", start, end);
            self.reset_mark_selection(editor);
            return;
        }

        let selected = editor.selection();
        if selected.is_empty() {
            log::debug!("kill-region: no mark and no selection");
            return;
        }
        self.kill_ring.add(selected);
        editor.replace_selection("");
    }

    /// Like `kill_region` but leaves the buffer untouched.
    pub fn copy_region(&mut self, editor: &mut dyn EditorSurface) {
        if let Some((start, end)) = self.region(editor) {
            let text = editor.range(start, end);
            self.kill_ring.add(text);
            self.reset_mark_selection(editor);
            return;
        }

        let selected = editor.selection();
        if selected.is_empty() {
            log::debug!("copy-region: no mark and no selection");
            return;
        }
        self.kill_ring.add(selected);
    }

    /// Mark and cursor, earlier first
    fn region(&self, editor: &dyn EditorSurface) -> Option<(Position, Position)> {
        let mark = self.mark?;
        let cursor = editor.cursor();
        Some((mark.min(cursor), mark.max(cursor)))
    }

    // ==================== Yank ====================

    /// Start a fresh yank sequence.
    pub fn yank(&mut self, editor: &mut dyn EditorSurface) {
        self.reset_yank();
        self.yank_pop(editor);
    }

    /// Replace the text inserted by the previous yank with the next older
    /// ring entry. Without an active sequence this is a plain yank.
    pub fn yank_pop(&mut self, editor: &mut dyn EditorSurface) {
        if self.kill_ring.current_item().is_none() {
            match self.kill_ring.read_clipboard() {
                Some(text) if !text.is_empty() => self.kill_ring.add(text),
                _ => {
                    log::debug!("yank: kill ring and clipboard are empty");
                    return;
                }
            }
        }

        if self.yank_positions.is_empty() {
            let mut anchors: Vec<Position> =
                editor.selections().iter().map(|s| s.head).collect();
            anchors.sort();
            anchors.dedup();
            self.insert_at_anchors(editor, anchors, 0);
            return;
        }

        let Some(replaced_len) = self.last_yank_len else {
            log::warn!("yank-pop: previous yank length is missing, aborting");
            return;
        };
        self.kill_ring.decrease_current_index();
        let anchors = self.yank_positions.clone();
        self.insert_at_anchors(editor, anchors, replaced_len);
    }

    /// Replace `replaced_len` chars after each anchor with the current ring
    /// item and remember where the new text landed.
    fn insert_at_anchors(
        &mut self,
        editor: &mut dyn EditorSurface,
        anchors: Vec<Position>,
        replaced_len: usize,
    ) {
        let Some(text) = self.kill_ring.current_item().map(str::to_owned) else {
            return;
        };
        let inserted_len = char_len(&text);

        let starts: Vec<usize> = anchors.iter().map(|p| editor.pos_to_offset(*p)).collect();
        let changes: Vec<TextChange> = starts
            .iter()
            .map(|&start| {
                TextChange::new(
                    editor.offset_to_pos(start),
                    editor.offset_to_pos(start + replaced_len),
                    text.clone(),
                )
            })
            .collect();
        editor.apply_changes(&changes);

        // Each earlier span grew or shrank by the same amount
        let delta = inserted_len as isize - replaced_len as isize;
        let mut new_anchors = Vec::with_capacity(starts.len());
        let mut cursors = Vec::with_capacity(starts.len());
        for (i, start) in starts.into_iter().enumerate() {
            let anchor = (start as isize + i as isize * delta).max(0) as usize;
            new_anchors.push(editor.offset_to_pos(anchor));
            cursors.push(Selection::cursor(editor.offset_to_pos(anchor + inserted_len)));
        }
        editor.set_selections(cursors);

        if logging::enabled(LogCategory::Yank) {
            log::debug!(
                "yank: {} anchor(s), replaced {} char(s) with {}",
                new_anchors.len(),
                replaced_len,
                inserted_len
            );
        }
        self.yank_positions = new_anchors;
        self.last_yank_len = Some(inserted_len);
    }

    // ==================== Reset ====================

    /// Forget mark and yank sequence, remove the highlight, clear the status.
    pub fn reset(&mut self, editor: &mut dyn EditorSurface) {
        self.reset_yank();
        self.reset_mark_selection(editor);
    }

    pub fn reset_mark_selection(&mut self, editor: &mut dyn EditorSurface) {
        self.mark = None;
        editor.clear_region_highlight();
        self.status.clear();
    }

    pub fn reset_yank(&mut self) {
        self.yank_positions.clear();
        self.last_yank_len = None;
    }
}
