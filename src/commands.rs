//! Command table for the kill/yank commands.
//!
//! This module provides:
//! - Named commands with their default key combinations
//! - A key map built once from the table and consulted per key event
//! - Dispatch of a command onto the coordinator

use crate::editor::EditorSurface;
use crate::mark_yank::KillAndYank;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Category for grouping commands in help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Mark,
    Kill,
    Yank,
    System,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Mark => "Mark",
            Category::Kill => "Kill",
            Category::Yank => "Yank",
            Category::System => "System",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    SetMark,
    KillLine,
    KillRegion,
    CopyRegion,
    Yank,
    YankPop,
    KeyboardQuit,
}

/// A single key with modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub fn new(key: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub fn alt(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    pub fn special(key: KeyCode) -> Self {
        Self::new(key, KeyModifiers::NONE)
    }

    /// Format for display (e.g., "C-k", "M-y", "C-SPC")
    pub fn display(&self) -> String {
        let mut parts = Vec::new();

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("C-");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("M-");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("S-");
        }

        let key_str = match self.key {
            KeyCode::Char(' ') => "SPC".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Esc => "ESC".to_string(),
            _ => "?".to_string(),
        };

        format!("{}{}", parts.join(""), key_str)
    }

    /// Normalize an event: letters compare lowercase, shift on a letter is kept
    /// in the modifiers only.
    pub fn from_event(event: &KeyEvent) -> Self {
        let key = match event.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        Self::new(key, event.modifiers)
    }
}

/// A named command that can be executed
#[derive(Debug, Clone)]
pub struct Command {
    pub id: CommandId,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub keys: Vec<KeyCombo>,
}

pub struct CommandRegistry {
    commands: Vec<Command>,
    keymap: HashMap<KeyCombo, CommandId>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
            keymap: HashMap::new(),
        };
        registry.register_all_commands();
        registry
    }

    fn register_all_commands(&mut self) {
        self.register(Command {
            id: CommandId::SetMark,
            name: "set-mark",
            description: "Set mark",
            category: Category::Mark,
            keys: vec![KeyCombo::ctrl(' ')],
        });
        self.register(Command {
            id: CommandId::KillLine,
            name: "kill-line",
            description: "Kill line",
            category: Category::Kill,
            keys: vec![KeyCombo::ctrl('k')],
        });
        self.register(Command {
            id: CommandId::KillRegion,
            name: "kill-region",
            description: "Kill region",
            category: Category::Kill,
            keys: vec![KeyCombo::ctrl('w')],
        });
        self.register(Command {
            id: CommandId::CopyRegion,
            name: "copy-region",
            description: "Copy region",
            category: Category::Kill,
            keys: vec![KeyCombo::alt('w')],
        });
        self.register(Command {
            id: CommandId::Yank,
            name: "yank",
            description: "Yank",
            category: Category::Yank,
            keys: vec![KeyCombo::ctrl('y')],
        });
        self.register(Command {
            id: CommandId::YankPop,
            name: "yank-pop",
            description: "Yank pop",
            category: Category::Yank,
            keys: vec![KeyCombo::alt('y')],
        });
        self.register(Command {
            id: CommandId::KeyboardQuit,
            name: "keyboard-quit",
            description: "Cancel mark and exit yank mode",
            category: Category::System,
            keys: vec![KeyCombo::ctrl('g'), KeyCombo::special(KeyCode::Esc)],
        });
    }

    fn register(&mut self, command: Command) {
        for key in &command.keys {
            if let Some(previous) = self.keymap.insert(*key, command.id) {
                log::warn!("{} rebinds {} (was {:?})", command.name, key.display(), previous);
            }
        }
        self.commands.push(command);
    }

    /// Get a command by name
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Get all commands in registration order
    pub fn all_commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn by_category(&self, category: Category) -> Vec<&Command> {
        self.commands
            .iter()
            .filter(|c| c.category == category)
            .collect()
    }

    /// Resolve a key event to the command bound to it
    pub fn lookup(&self, key: &KeyEvent) -> Option<CommandId> {
        self.keymap.get(&KeyCombo::from_event(key)).copied()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a command. Anything but yank-pop ends the current yank sequence first.
pub fn execute(id: CommandId, ky: &mut KillAndYank, editor: &mut dyn EditorSurface) {
    if id != CommandId::YankPop {
        ky.reset_yank();
    }
    match id {
        CommandId::SetMark => ky.set_mark(editor),
        CommandId::KillLine => ky.kill_line(editor),
        CommandId::KillRegion => ky.kill_region(editor),
        CommandId::CopyRegion => ky.copy_region(editor),
        CommandId::Yank => ky.yank(editor),
        CommandId::YankPop => ky.yank_pop(editor),
        CommandId::KeyboardQuit => ky.reset(editor),
    }
}
