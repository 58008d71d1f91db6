//! Mark status shown to the user.
//!
//! The status also decides what a repeated set-mark does: toggle the mark
//! off, or keep it and only change what the status line says.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkStatus {
    #[default]
    Empty,
    MarkSet,
    MarkActivated,
    MarkDeactivated,
}

impl MarkStatus {
    pub fn text(&self) -> &'static str {
        match self {
            MarkStatus::Empty => "",
            MarkStatus::MarkSet => "Mark set",
            MarkStatus::MarkActivated => "Mark activated",
            MarkStatus::MarkDeactivated => "Mark deactivated",
        }
    }
}

/// What set-mark should do with the mark after consulting the status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkAction {
    /// Store the cursor as the new mark
    Place,
    /// Leave the existing mark where it is
    Keep,
    /// Drop the existing mark
    Clear,
}

/// Transition taken on set-mark, given the current status and whether a
/// mark already exists.
pub fn on_set_mark(current: MarkStatus, mark_exists: bool) -> (MarkStatus, MarkAction) {
    if mark_exists {
        match current {
            MarkStatus::MarkDeactivated => (MarkStatus::MarkActivated, MarkAction::Keep),
            MarkStatus::Empty => (MarkStatus::MarkSet, MarkAction::Keep),
            MarkStatus::MarkSet | MarkStatus::MarkActivated => {
                (MarkStatus::MarkDeactivated, MarkAction::Clear)
            }
        }
    } else {
        match current {
            MarkStatus::Empty => (MarkStatus::MarkSet, MarkAction::Place),
            _ => (MarkStatus::MarkActivated, MarkAction::Place),
        }
    }
}

/// Single status slot rendered by the host
#[derive(Debug, Default)]
pub struct StatusBar {
    status: MarkStatus,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: MarkStatus) {
        if self.status != status {
            log::debug!("Status {:?} -> {:?}", self.status, status);
        }
        self.status = status;
    }

    pub fn status(&self) -> MarkStatus {
        self.status
    }

    pub fn text(&self) -> &'static str {
        self.status.text()
    }

    pub fn is_empty(&self) -> bool {
        self.status == MarkStatus::Empty
    }

    pub fn clear(&mut self) {
        self.set_status(MarkStatus::Empty);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_mark_transitions() {
        assert_eq!(
            on_set_mark(MarkStatus::MarkDeactivated, true),
            (MarkStatus::MarkActivated, MarkAction::Keep)
        );
        assert_eq!(
            on_set_mark(MarkStatus::Empty, true),
            (MarkStatus::MarkSet, MarkAction::Keep)
        );
        assert_eq!(
            on_set_mark(MarkStatus::MarkSet, true),
            (MarkStatus::MarkDeactivated, MarkAction::Clear)
        );
        assert_eq!(
            on_set_mark(MarkStatus::MarkActivated, true),
            (MarkStatus::MarkDeactivated, MarkAction::Clear)
        );
    }

    #[test]
    fn test_new_mark_transitions() {
        assert_eq!(
            on_set_mark(MarkStatus::Empty, false),
            (MarkStatus::MarkSet, MarkAction::Place)
        );
        for status in [
            MarkStatus::MarkSet,
            MarkStatus::MarkActivated,
            MarkStatus::MarkDeactivated,
        ] {
            assert_eq!(
                on_set_mark(status, false),
                (MarkStatus::MarkActivated, MarkAction::Place)
            );
        }
    }

    #[test]
    fn test_status_bar_text() {
        let mut bar = StatusBar::new();
        assert!(bar.is_empty());
        assert_eq!(bar.text(), "");

        bar.set_status(MarkStatus::MarkSet);
        assert_eq!(bar.text(), "Mark set");
        assert!(!bar.is_empty());

        bar.clear();
        assert_eq!(bar.status(), MarkStatus::Empty);
    }
}
