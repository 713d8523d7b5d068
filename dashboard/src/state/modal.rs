//! Modal controller
//!
//! A single tagged union instead of independent per-modal booleans, so
//! two modals can never be open at the same time. Opening a modal
//! replaces whichever one was open before.

/// Which modal, if any, is open on a screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    None,
    Add,
    Edit(i64),
    View(i64),
    Adjust(i64),
    ConfirmDelete(i64),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::None)
    }

    /// The record the open modal refers to, if any
    pub fn record_id(&self) -> Option<i64> {
        match self {
            ModalState::None | ModalState::Add => None,
            ModalState::Edit(id)
            | ModalState::View(id)
            | ModalState::Adjust(id)
            | ModalState::ConfirmDelete(id) => Some(*id),
        }
    }

    pub fn close(&mut self) {
        *self = ModalState::None;
    }
}
