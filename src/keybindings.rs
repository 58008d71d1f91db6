use crate::editor::{EditorSurface, TextAreaSurface};
use crate::logging::{self, LogCategory};
use crate::session::Session;
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{Input, TextArea};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A bound command ran and consumed the key
    Handled,
    /// The host should process the key itself
    PassThrough,
}

/// Route one key event: run the bound command, or end the yank sequence
/// and hand the key back to the host.
pub fn route_key(session: &mut Session, editor: &mut dyn EditorSurface, key: &KeyEvent) -> KeyOutcome {
    if logging::enabled(LogCategory::Keys) {
        log::debug!("Key: {:?} {:?}", key.code, key.modifiers);
    }

    if let Some(id) = session.registry().lookup(key) {
        session.execute(id, editor);
        return KeyOutcome::Handled;
    }

    if !matches!(key.code, KeyCode::Modifier(_)) {
        session.coordinator_mut().reset_yank();
    }
    KeyOutcome::PassThrough
}

/// Handle a key in the terminal host. Returns false when the editor should exit.
pub fn handle_input(session: &mut Session, textarea: &mut TextArea<'static>, key: KeyEvent) -> bool {
    if should_quit(&key) {
        return false;
    }

    let outcome = {
        let mut surface = TextAreaSurface::new(textarea);
        route_key(session, &mut surface, &key)
    };

    match outcome {
        KeyOutcome::Handled => {}
        KeyOutcome::PassThrough => {
            let input: Input = Event::Key(key).into();
            match session.coordinator().mark() {
                // The textarea would drop or act on the highlight; apply the
                // key to a bare cursor and redraw the region afterwards.
                Some(mark) => {
                    textarea.cancel_selection();
                    textarea.input(input);
                    TextAreaSurface::new(textarea).highlight_region(mark);
                }
                None => {
                    textarea.input(input);
                }
            }
        }
    }

    true
}

fn should_quit(key: &KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::Char('q'), KeyModifiers::CONTROL)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::config::Config;
    use crate::editor::{Position, TextBuffer};

    fn session() -> Session {
        Session::new(Config::default(), Box::new(MemoryClipboard::new())).unwrap()
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_key_ends_yank_sequence() {
        let mut s = session();
        let mut buf = TextBuffer::new("ab");
        buf.set_selection(Position::new(0, 0), Position::new(0, 1));
        route_key(&mut s, &mut buf, &key(KeyCode::Char('w'), KeyModifiers::ALT));
        buf.set_cursor(Position::new(0, 2));
        let outcome = route_key(&mut s, &mut buf, &key(KeyCode::Char('y'), KeyModifiers::CONTROL));
        assert_eq!(outcome, KeyOutcome::Handled);
        assert!(s.coordinator().is_yanking());

        let outcome = route_key(&mut s, &mut buf, &key(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(outcome, KeyOutcome::PassThrough);
        assert!(!s.coordinator().is_yanking());
    }

    #[test]
    fn test_yank_pop_key_keeps_sequence() {
        let mut s = session();
        let mut buf = TextBuffer::new("one two");
        buf.set_selection(Position::new(0, 0), Position::new(0, 3));
        route_key(&mut s, &mut buf, &key(KeyCode::Char('w'), KeyModifiers::ALT));
        buf.set_selection(Position::new(0, 4), Position::new(0, 7));
        route_key(&mut s, &mut buf, &key(KeyCode::Char('w'), KeyModifiers::ALT));

        buf.set_cursor(Position::new(0, 7));
        route_key(&mut s, &mut buf, &key(KeyCode::Char('y'), KeyModifiers::CONTROL));
        assert_eq!(buf.text(), "one twotwo");

        route_key(&mut s, &mut buf, &key(KeyCode::Char('y'), KeyModifiers::ALT));
        assert_eq!(buf.text(), "one twoone");
        assert!(s.coordinator().is_yanking());
    }

    #[test]
    fn test_modifier_key_does_not_end_sequence() {
        use ratatui::crossterm::event::ModifierKeyCode;

        let mut s = session();
        let mut buf = TextBuffer::new("ab");
        buf.set_selection(Position::new(0, 0), Position::new(0, 2));
        route_key(&mut s, &mut buf, &key(KeyCode::Char('w'), KeyModifiers::ALT));
        buf.set_cursor(Position::new(0, 2));
        route_key(&mut s, &mut buf, &key(KeyCode::Char('y'), KeyModifiers::CONTROL));

        let outcome = route_key(
            &mut s,
            &mut buf,
            &key(KeyCode::Modifier(ModifierKeyCode::LeftAlt), KeyModifiers::ALT),
        );
        assert_eq!(outcome, KeyOutcome::PassThrough);
        assert!(s.coordinator().is_yanking());
    }

    #[test]
    fn test_keyboard_quit_clears_mark() {
        let mut s = session();
        let mut buf = TextBuffer::new("abc");
        route_key(&mut s, &mut buf, &key(KeyCode::Char(' '), KeyModifiers::CONTROL));
        assert!(s.coordinator().mark().is_some());

        route_key(&mut s, &mut buf, &key(KeyCode::Char('g'), KeyModifiers::CONTROL));
        assert!(s.coordinator().mark().is_none());
        assert!(s.coordinator().status().is_empty());
    }

    #[test]
    fn test_region_highlight_follows_cursor() {
        let mut s = session();
        let mut ta = TextArea::from(["hello world"]);
        handle_input(&mut s, &mut ta, key(KeyCode::Char(' '), KeyModifiers::CONTROL));
        for _ in 0..5 {
            handle_input(&mut s, &mut ta, key(KeyCode::Right, KeyModifiers::NONE));
        }
        assert_eq!(ta.selection_range(), Some(((0, 0), (0, 5))));

        handle_input(&mut s, &mut ta, key(KeyCode::Char('X'), KeyModifiers::NONE));
        assert_eq!(ta.lines(), ["helloX world"]);
        assert_eq!(ta.selection_range(), Some(((0, 0), (0, 6))));

        handle_input(&mut s, &mut ta, key(KeyCode::Char('w'), KeyModifiers::CONTROL));
        assert_eq!(ta.lines(), [" world"]);
        assert_eq!(s.coordinator().kill_ring().current_item(), Some("helloX"));
        assert_eq!(ta.selection_range(), None);
    }

    #[test]
    fn test_ctrl_q_quits() {
        let mut s = session();
        let mut ta = TextArea::default();
        assert!(!handle_input(&mut s, &mut ta, key(KeyCode::Char('q'), KeyModifiers::CONTROL)));
        assert!(handle_input(&mut s, &mut ta, key(KeyCode::Char('a'), KeyModifiers::NONE)));
        assert_eq!(ta.lines(), ["a"]);
    }
}
