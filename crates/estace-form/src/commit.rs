//! Two-phase commit shared by every form: validate, confirm, then send.

use crate::error::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitState {
    #[default]
    Editing,
    ConfirmPending,
    Submitting,
    Succeeded,
}

/// Guards the confirm step so at most one save is ever in flight.
#[derive(Debug, Clone, Default)]
pub struct CommitGate {
    state: CommitState,
}

impl CommitGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> CommitState {
        self.state
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state == CommitState::Submitting
    }

    /// `Editing -> ConfirmPending`. Re-requesting while pending is a no-op.
    ///
    /// # Errors
    ///
    /// [`FormError::SubmitInProgress`] while submitting,
    /// [`FormError::AlreadySaved`] after success.
    pub fn request_confirmation(&mut self) -> Result<(), FormError> {
        match self.state {
            CommitState::Editing | CommitState::ConfirmPending => {
                self.state = CommitState::ConfirmPending;
                Ok(())
            }
            CommitState::Submitting => Err(FormError::SubmitInProgress),
            CommitState::Succeeded => Err(FormError::AlreadySaved),
        }
    }

    /// `ConfirmPending -> Editing`. Ignored in any other state.
    pub fn cancel(&mut self) {
        if self.state == CommitState::ConfirmPending {
            self.state = CommitState::Editing;
        }
    }

    /// `ConfirmPending -> Submitting`. The caller sends exactly one request
    /// for every `Ok` returned here.
    ///
    /// # Errors
    ///
    /// [`FormError::SubmitInProgress`] while a save is in flight,
    /// [`FormError::NotConfirming`] from `Editing`, and
    /// [`FormError::AlreadySaved`] after success.
    pub fn confirm(&mut self) -> Result<(), FormError> {
        match self.state {
            CommitState::ConfirmPending => {
                self.state = CommitState::Submitting;
                Ok(())
            }
            CommitState::Submitting => Err(FormError::SubmitInProgress),
            CommitState::Editing => Err(FormError::NotConfirming),
            CommitState::Succeeded => Err(FormError::AlreadySaved),
        }
    }

    /// `Submitting -> Succeeded`.
    pub fn succeed(&mut self) {
        if self.state == CommitState::Submitting {
            self.state = CommitState::Succeeded;
        }
    }

    /// `Succeeded -> Editing`, for forms that stay open after saving.
    pub fn reset(&mut self) {
        if self.state == CommitState::Succeeded {
            self.state = CommitState::Editing;
        }
    }

    /// `Submitting -> Editing`; the draft stays as it was.
    pub fn fail(&mut self) {
        if self.state == CommitState::Submitting {
            self.state = CommitState::Editing;
        }
    }
}
