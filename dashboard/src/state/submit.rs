//! Mutation submission state machine
//!
//! `Idle -> Submitting -> {Idle on success, Failed on error}`. A
//! failed submission keeps the modal open with its field values intact
//! and must be fully retried by the user; there is no partial or
//! resumable submission.

/// State of the current create/update/delete action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Failed(String),
}

impl SubmitState {
    /// Enter `Submitting`; returns false when a submission is already
    /// in flight so double-clicks are ignored
    pub fn begin(&mut self) -> bool {
        if matches!(self, SubmitState::Submitting) {
            return false;
        }
        *self = SubmitState::Submitting;
        true
    }

    pub fn succeed(&mut self) {
        *self = SubmitState::Idle;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = SubmitState::Failed(message.into());
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SubmitState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_lifecycle() {
        let mut submit = SubmitState::default();
        assert!(submit.begin());
        assert!(submit.is_submitting());

        // A second begin while in flight is rejected
        assert!(!submit.begin());

        submit.fail("Request failed. Please try again.");
        assert_eq!(submit.error(), Some("Request failed. Please try again."));

        // A failed submission can be retried
        assert!(submit.begin());
        submit.succeed();
        assert_eq!(submit, SubmitState::Idle);
        assert_eq!(submit.error(), None);
    }
}
