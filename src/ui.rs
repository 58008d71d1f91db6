use crate::commands::Category;
use crate::session::Session;
use ratatui::{
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

pub fn draw(frame: &mut Frame, session: &Session, textarea: &TextArea) {
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(2)]).split(frame.area());

    // Text area
    frame.render_widget(textarea, chunks[0]);

    // Status bar
    frame.render_widget(create_status_bar(session), chunks[1]);
}

fn create_status_bar(session: &Session) -> Paragraph<'static> {
    let ky = session.coordinator();

    let mark_status = match ky.status().is_empty() {
        true => Span::raw(""),
        false => Span::styled(
            format!("{} ", ky.status().text()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let yank_indicator = match ky.is_yanking() {
        true => Span::styled(
            "YANK ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        false => Span::raw(""),
    };

    let ring = ky.kill_ring();
    let ring_fill = Span::styled(
        format!("ring {}/{} ", ring.len(), ring.max_size()),
        Style::default().fg(Color::DarkGray),
    );

    let mut help_spans = Vec::new();
    let registry = session.registry();
    for category in [Category::Mark, Category::Kill, Category::Yank, Category::System] {
        if !help_spans.is_empty() {
            help_spans.push(Span::raw(" | "));
        }
        help_spans.push(Span::styled(
            format!("{} ", category.display_name()),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        for (i, command) in registry.by_category(category).into_iter().enumerate() {
            let Some(key) = command.keys.first() else {
                continue;
            };
            if i > 0 {
                help_spans.push(Span::raw(" "));
            }
            help_spans.push(Span::styled(key.display(), Style::default().fg(Color::Cyan)));
            help_spans.push(Span::raw(":"));
            help_spans.push(Span::styled(command.name, Style::default().fg(Color::DarkGray)));
        }
    }
    help_spans.push(Span::raw(" "));
    help_spans.push(Span::styled("C-q", Style::default().fg(Color::Cyan)));
    help_spans.push(Span::raw(":"));
    help_spans.push(Span::styled("quit", Style::default().fg(Color::DarkGray)));

    let mut status_line = vec![mark_status, yank_indicator, ring_fill];
    status_line.extend(help_spans);

    Paragraph::new(vec![Line::from(status_line)]).block(Block::default().borders(Borders::TOP))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::config::Config;
    use crate::editor::TextAreaSurface;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(session: &Session, textarea: &TextArea) -> String {
        let mut terminal = Terminal::new(TestBackend::new(220, 6)).unwrap();
        terminal
            .draw(|frame| draw(frame, session, textarea))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_status_bar_groups_help_by_category() {
        let session = Session::new(Config::default(), Box::new(MemoryClipboard::new())).unwrap();
        let textarea = TextArea::default();

        let screen = rendered(&session, &textarea);

        assert!(screen.contains("ring 0/60"));
        assert!(screen.contains("Mark C-SPC:set-mark"));
        assert!(screen.contains("Kill C-k:kill-line C-w:kill-region M-w:copy-region"));
        assert!(screen.contains("Yank C-y:yank M-y:yank-pop"));
        assert!(!screen.contains("Mark set"));
    }

    #[test]
    fn test_status_bar_shows_mark_status() {
        let mut session =
            Session::new(Config::default(), Box::new(MemoryClipboard::new())).unwrap();
        let mut textarea = TextArea::from(["hello"]);
        {
            let mut surface = TextAreaSurface::new(&mut textarea);
            session.execute(crate::commands::CommandId::SetMark, &mut surface);
        }

        let screen = rendered(&session, &textarea);

        assert!(screen.contains("Mark set"));
    }
}
