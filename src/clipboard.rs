//! Clipboard capability used by the kill ring.
//!
//! `SystemClipboard` talks to the OS clipboard via arboard. `MemoryClipboard`
//! keeps the text in-process and is shared between clones, which makes it
//! usable both for headless hosts and for tests that need to look at what
//! the ring wrote.

use crate::error::ClipboardError;
use std::cell::RefCell;
use std::rc::Rc;

/// A single-string clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// `Ok(None)` means the clipboard holds no text.
    fn read_text(&mut self) -> Result<Option<String>, ClipboardError>;
}

pub struct SystemClipboard {
    clipboard: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let clipboard = match arboard::Clipboard::new() {
            Ok(cb) => Some(cb),
            Err(e) => {
                log::warn!("System clipboard unavailable: {}", e);
                None
            }
        };
        Self { clipboard }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let cb = self.clipboard.as_mut().ok_or(ClipboardError::Unavailable)?;
        cb.set_text(text)?;
        Ok(())
    }

    fn read_text(&mut self) -> Result<Option<String>, ClipboardError> {
        let cb = self.clipboard.as_mut().ok_or(ClipboardError::Unavailable)?;
        match cb.get_text() {
            Ok(text) => Ok(Some(text)),
            // arboard reports an empty clipboard as an error
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[derive(Clone, Default)]
pub struct MemoryClipboard {
    text: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let clipboard = Self::new();
        clipboard.set(text);
        clipboard
    }

    /// Current contents without going through the trait
    pub fn contents(&self) -> Option<String> {
        self.text.borrow().clone()
    }

    pub fn set(&self, text: &str) {
        *self.text.borrow_mut() = Some(text.to_string());
    }

    pub fn clear(&self) {
        *self.text.borrow_mut() = None;
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.set(text);
        Ok(())
    }

    fn read_text(&mut self) -> Result<Option<String>, ClipboardError> {
        Ok(self.contents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_with_text() {
        let mut clipboard = MemoryClipboard::with_text("seed");
        assert_eq!(clipboard.read_text().unwrap(), Some("seed".to_string()));
    }

    #[test]
    fn test_memory_clipboard_shared_between_clones() {
        let handle = MemoryClipboard::new();
        let mut boxed: Box<dyn Clipboard> = Box::new(handle.clone());

        boxed.write_text("shared").unwrap();
        assert_eq!(handle.contents(), Some("shared".to_string()));

        handle.clear();
        assert_eq!(boxed.read_text().unwrap(), None);
    }
}
