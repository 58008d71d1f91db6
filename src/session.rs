//! Per-session state handed to every command handler.

use crate::clipboard::Clipboard;
use crate::commands::{self, CommandId, CommandRegistry};
use crate::config::Config;
use crate::editor::EditorSurface;
use crate::error::{KillRingError, SessionError};
use crate::kill_ring::KillRing;
use crate::mark_yank::KillAndYank;
use std::path::{Path, PathBuf};

pub struct Session {
    config: Config,
    /// Where size changes are persisted; `None` keeps them in memory
    config_path: Option<PathBuf>,
    coordinator: KillAndYank,
    registry: CommandRegistry,
}

impl Session {
    pub fn new(config: Config, clipboard: Box<dyn Clipboard>) -> Result<Self, SessionError> {
        let ring = KillRing::new(clipboard)
            .with_max_size(config.kill_ring.max_size)?
            .with_dedupe(config.kill_ring.dedupe);
        log::info!(
            "Session started: kill ring max_size={}, dedupe={}",
            ring.max_size(),
            ring.dedupe()
        );
        Ok(Self {
            config,
            config_path: None,
            coordinator: KillAndYank::new(ring),
            registry: CommandRegistry::new(),
        })
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn coordinator(&self) -> &KillAndYank {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut KillAndYank {
        &mut self.coordinator
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn kill_ring_max_size(&self) -> usize {
        self.config.kill_ring.max_size
    }

    /// Resize the ring and persist the new size.
    ///
    /// A rejected size leaves ring and config untouched. A failed save is
    /// reported, but the resized ring stays in effect.
    pub fn set_kill_ring_max_size(&mut self, size: usize) -> Result<(), SessionError> {
        self.coordinator.set_kill_ring_max_size(size)?;
        self.config.kill_ring.max_size = size;
        log::info!("Kill ring max size set to {}", size);

        if let Some(path) = &self.config_path {
            self.config.save_to_path(path)?;
        }
        Ok(())
    }

    /// Resize the ring for this session only.
    pub fn override_kill_ring_max_size(&mut self, size: usize) -> Result<(), KillRingError> {
        self.coordinator.set_kill_ring_max_size(size)
    }

    pub fn execute(&mut self, id: CommandId, editor: &mut dyn EditorSurface) {
        commands::execute(id, &mut self.coordinator, editor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::config::KillRingConfig;
    use crate::editor::{Position, TextBuffer};
    use tempfile::TempDir;

    fn session(config: Config) -> Session {
        Session::new(config, Box::new(MemoryClipboard::new())).unwrap()
    }

    #[test]
    fn test_session_applies_config() {
        let s = session(Config {
            kill_ring: KillRingConfig {
                max_size: 3,
                dedupe: true,
            },
        });
        assert_eq!(s.coordinator().kill_ring().max_size(), 3);
        assert!(s.coordinator().kill_ring().dedupe());
    }

    #[test]
    fn test_session_rejects_zero_size_config() {
        let config = Config {
            kill_ring: KillRingConfig {
                max_size: 0,
                dedupe: false,
            },
        };
        let result = Session::new(config, Box::new(MemoryClipboard::new()));
        assert!(matches!(
            result,
            Err(SessionError::KillRing(KillRingError::InvalidArgument { size: 0 }))
        ));
    }

    #[test]
    fn test_set_max_size_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let mut s = session(Config::default()).with_config_path(&path);

        assert_eq!(s.config_path(), Some(path.as_path()));
        s.set_kill_ring_max_size(5).unwrap();

        assert_eq!(s.kill_ring_max_size(), 5);
        assert_eq!(s.coordinator().kill_ring().max_size(), 5);
        let saved = Config::load_from_path(&path).unwrap().unwrap();
        assert_eq!(saved.kill_ring.max_size, 5);
    }

    #[test]
    fn test_set_max_size_zero_leaves_state() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let mut s = session(Config::default()).with_config_path(&path);

        let err = s.set_kill_ring_max_size(0).unwrap_err();

        assert!(matches!(err, SessionError::KillRing(_)));
        assert_eq!(s.kill_ring_max_size(), Config::default().kill_ring.max_size);
        assert!(!path.exists());
    }

    #[test]
    fn test_execute_routes_to_coordinator() {
        let mut s = session(Config::default());
        assert!(s.config_path().is_none());
        let mut buf = TextBuffer::new("kill me").with_cursor(Position::new(0, 5));

        s.execute(CommandId::KillLine, &mut buf);

        assert_eq!(buf.text(), "kill ");
        assert_eq!(s.coordinator().kill_ring().current_item(), Some("me"));
    }
}
