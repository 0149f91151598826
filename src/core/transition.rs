//! Pure transition table for [`SubmissionState`].

use super::state::{State, SubmissionState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Something that happened to a form.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SubmissionEvent {
    /// A submit attempt started; previous errors and banner are cleared.
    BeginSubmit,
    /// Validation produced at least one message.
    Rejected,
    /// Validation passed for every field.
    Accepted,
    /// The one-shot auto-reset timer fired.
    AutoReset,
}

impl fmt::Display for SubmissionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BeginSubmit => "BeginSubmit",
            Self::Rejected => "Rejected",
            Self::Accepted => "Accepted",
            Self::AutoReset => "AutoReset",
        };
        f.write_str(name)
    }
}

/// Which outcomes the auto-reset timer is allowed to clear.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ResetPolicy {
    /// Only a success banner resets itself (reservation form).
    OnSuccess,
    /// Success and error messages both clear themselves (newsletter form).
    Always,
}

/// Errors raised by the transition table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransitionError {
    #[error("No transition from '{from}' on {event}")]
    Invalid {
        from: String,
        event: SubmissionEvent,
    },
}

/// Compute the state reached from `from` on `event`.
///
/// `BeginSubmit` while already `Idle` is a self-loop.
///
/// ```rust
/// use tablefront::core::{next_state, ResetPolicy, SubmissionEvent, SubmissionState};
///
/// let next = next_state(
///     ResetPolicy::OnSuccess,
///     SubmissionState::Idle,
///     SubmissionEvent::Accepted,
/// );
/// assert_eq!(next, Ok(SubmissionState::ShowingSuccess));
///
/// let stale = next_state(
///     ResetPolicy::OnSuccess,
///     SubmissionState::ShowingErrors,
///     SubmissionEvent::AutoReset,
/// );
/// assert!(stale.is_err());
/// ```
pub fn next_state(
    policy: ResetPolicy,
    from: SubmissionState,
    event: SubmissionEvent,
) -> Result<SubmissionState, TransitionError> {
    use SubmissionEvent::*;
    use SubmissionState::*;

    match (from, event) {
        (Idle, BeginSubmit) => Ok(Idle),
        (Idle, Rejected) => Ok(ShowingErrors),
        (Idle, Accepted) => Ok(ShowingSuccess),
        (ShowingErrors, BeginSubmit) => Ok(Idle),
        (ShowingSuccess, BeginSubmit | AutoReset) => Ok(Idle),
        (ShowingErrors, AutoReset) if policy == ResetPolicy::Always => Ok(Idle),
        (from, event) => Err(TransitionError::Invalid {
            from: from.name().to_string(),
            event,
        }),
    }
}
