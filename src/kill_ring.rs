//! Bounded ring of killed text with a rotation cursor.
//!
//! Storage is a plain `Vec` ordered oldest to newest; the rotation cursor
//! does the cycling. Every `add` is mirrored to the clipboard, and a failing
//! clipboard never blocks or undoes the ring mutation.

use crate::clipboard::Clipboard;
use crate::error::KillRingError;
use crate::logging::{self, LogCategory};

pub const DEFAULT_MAX_SIZE: usize = 60;

pub struct KillRing {
    items: Vec<String>,
    current_index: Option<usize>,
    max_size: usize,
    dedupe: bool,
    clipboard: Box<dyn Clipboard>,
}

impl KillRing {
    pub fn new(clipboard: Box<dyn Clipboard>) -> Self {
        Self {
            items: Vec::new(),
            current_index: None,
            max_size: DEFAULT_MAX_SIZE,
            dedupe: false,
            clipboard,
        }
    }

    pub fn with_max_size(mut self, max_size: usize) -> Result<Self, KillRingError> {
        self.set_max_size(max_size)?;
        Ok(self)
    }

    /// Re-adding text already in the ring moves it to the newest slot
    /// instead of storing it twice.
    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    pub fn add(&mut self, text: impl Into<String>) {
        let text = text.into();

        if self.dedupe {
            if let Some(existing) = self.items.iter().position(|item| *item == text) {
                self.items.remove(existing);
            }
        }

        self.items.push(text);
        self.truncate_to(self.max_size);
        self.current_index = Some(self.items.len() - 1);

        if logging::enabled(LogCategory::Ring) {
            log::debug!(
                "Kill ring add: {} item(s), current={:?}",
                self.items.len(),
                self.current_index
            );
        }

        let newest = &self.items[self.items.len() - 1];
        if let Err(e) = self.clipboard.write_text(newest) {
            log::error!("Failed to write to clipboard: {}", e);
        }
    }

    /// Step the cursor one entry older, wrapping from the oldest to the newest.
    pub fn decrease_current_index(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len();
        let current = self.current_index.unwrap_or(len - 1);
        self.current_index = Some((current + len - 1) % len);
    }

    pub fn current_item(&self) -> Option<&str> {
        self.current_index
            .and_then(|i| self.items.get(i))
            .map(String::as_str)
    }

    pub fn set_max_size(&mut self, max_size: usize) -> Result<(), KillRingError> {
        if max_size < 1 {
            return Err(KillRingError::InvalidArgument { size: max_size });
        }
        self.max_size = max_size;
        if self.truncate_to(max_size) {
            let last = self.items.len() - 1;
            self.current_index = self.current_index.map(|i| i.min(last));
        }
        Ok(())
    }

    /// Pull text from the clipboard. Read failures are logged and treated as
    /// an empty clipboard.
    pub fn read_clipboard(&mut self) -> Option<String> {
        match self.clipboard.read_text() {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Failed to read from clipboard: {}", e);
                None
            }
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn dedupe(&self) -> bool {
        self.dedupe
    }

    /// Drop the oldest entries beyond `size`. Returns whether anything was dropped.
    fn truncate_to(&mut self, size: usize) -> bool {
        if self.items.len() <= size {
            return false;
        }
        let excess = self.items.len() - size;
        self.items.drain(..excess);
        true
    }
}
