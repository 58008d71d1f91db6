//! Emacs-style kill ring with mark and yank tracking for host editors.
//!
//! The host hands an [`editor::EditorSurface`] to the commands in
//! [`mark_yank::KillAndYank`]; the coordinator owns the [`kill_ring::KillRing`]
//! and the mark/yank bookkeeping that spans successive commands.

pub mod clipboard;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod keybindings;
pub mod kill_ring;
pub mod logging;
pub mod mark_yank;
pub mod session;
pub mod status;
pub mod ui;
