use clap::Parser;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use sonkil::clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
use sonkil::config::Config;
use sonkil::keybindings::handle_input;
use sonkil::logging::{self, LogCategory};
use sonkil::session::Session;
use sonkil::ui;
use std::fs;
use std::path::{Path, PathBuf};
use tui_textarea::TextArea;

#[derive(Parser)]
#[command(name = "sonkil")]
#[command(about = "Emacs-style kill ring, mark and yank in a small terminal editor")]
struct Args {
    /// File to copy into a scratch buffer (never written back)
    path: Option<PathBuf>,

    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Kill ring size for this session only
    #[arg(long)]
    max_size: Option<usize>,

    /// Keep kills in memory instead of the system clipboard
    #[arg(long)]
    no_clipboard: bool,

    /// Enable debug logging to sonkil.log
    #[arg(long)]
    log: bool,

    /// Log kill ring mutations (requires --log)
    #[arg(long)]
    ring: bool,

    /// Log yank bookkeeping (requires --log)
    #[arg(long)]
    yank: bool,

    /// Log all key inputs (requires --log)
    #[arg(long)]
    keys: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse arguments BEFORE terminal init
    let args = Args::parse();

    if args.log {
        let categories: Vec<LogCategory> = [
            (args.ring, LogCategory::Ring),
            (args.yank, LogCategory::Yank),
            (args.keys, LogCategory::Keys),
        ]
        .into_iter()
        .filter_map(|(on, category)| on.then_some(category))
        .collect();
        logging::init(Path::new("sonkil.log"), &categories)?;
        log::info!("sonkil starting with logging enabled");
    }

    let config_path = args.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_or_default(&config_path)?;

    let clipboard: Box<dyn Clipboard> = match args.no_clipboard {
        true => Box::new(MemoryClipboard::new()),
        false => Box::new(SystemClipboard::new()),
    };
    let mut session = Session::new(config, clipboard)?.with_config_path(config_path);
    if let Some(path) = session.config_path() {
        log::info!("Config file: {}", path.display());
    }
    if let Some(size) = args.max_size {
        session.override_kill_ring_max_size(size)?;
    }

    let mut textarea = match &args.path {
        Some(path) if path.is_file() => {
            log::info!("Loading scratch buffer from {}", path.display());
            let content = fs::read_to_string(path)?;
            TextArea::new(scratch_lines(&content))
        }
        _ => TextArea::default(),
    };

    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, &mut session, &mut textarea);
    ratatui::restore();
    result
}

/// Split file content into textarea lines, keeping a final empty line for
/// a trailing newline.
fn scratch_lines(content: &str) -> Vec<String> {
    let mut lines: Vec<String> = content.lines().map(String::from).collect();
    if content.ends_with('\n') {
        lines.push(String::new());
    }
    lines
}

fn run_app(
    terminal: &mut Terminal<impl ratatui::backend::Backend>,
    session: &mut Session,
    textarea: &mut TextArea<'static>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| ui::draw(frame, session, textarea))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events (Windows sends both Press and Release)
            if key.kind == KeyEventKind::Press && !handle_input(session, textarea, key) {
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_lines_keep_trailing_newline() {
        assert_eq!(scratch_lines("one\ntwo\n"), ["one", "two", ""]);
        assert_eq!(scratch_lines("one\r\ntwo"), ["one", "two"]);
        assert_eq!(scratch_lines(""), Vec::<String>::new());
    }
}
