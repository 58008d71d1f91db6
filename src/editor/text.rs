//! Char-indexed helpers over a buffer stored as lines.
//!
//! A flat offset counts every line break as one char.

use super::Position;

pub fn char_index_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(s.len())
}

pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Clamp a position to an existing line and column
pub fn clamp(lines: &[String], pos: Position) -> Position {
    if lines.is_empty() {
        return Position::default();
    }
    let line = pos.line.min(lines.len() - 1);
    let ch = pos.ch.min(char_len(&lines[line]));
    Position { line, ch }
}

pub fn pos_to_offset(lines: &[String], pos: Position) -> usize {
    let pos = clamp(lines, pos);
    let before: usize = lines[..pos.line].iter().map(|l| char_len(l) + 1).sum();
    before + pos.ch
}

pub fn offset_to_pos(lines: &[String], offset: usize) -> Position {
    let mut current = 0;
    for (line, text) in lines.iter().enumerate() {
        let len = char_len(text);
        if offset <= current + len {
            return Position {
                line,
                ch: offset - current,
            };
        }
        current += len + 1;
    }
    match lines.last() {
        Some(last) => Position {
            line: lines.len() - 1,
            ch: char_len(last),
        },
        None => Position::default(),
    }
}

/// Text between two positions, in either order
pub fn slice(lines: &[String], from: Position, to: Position) -> String {
    let start = pos_to_offset(lines, from.min(to));
    let end = pos_to_offset(lines, from.max(to));
    lines.join("\n").chars().skip(start).take(end - start).collect()
}

/// Replace the text between two positions and return the new lines
pub fn splice(lines: &[String], from: Position, to: Position, text: &str) -> Vec<String> {
    let start = pos_to_offset(lines, from.min(to));
    let end = pos_to_offset(lines, from.max(to));
    let mut joined = lines.join("\n");
    let start_byte = char_index_to_byte_index(&joined, start);
    let end_byte = char_index_to_byte_index(&joined, end);
    joined.replace_range(start_byte..end_byte, text);
    joined.split('\n').map(String::from).collect()
}
