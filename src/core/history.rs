//! State transition history tracking.
//!
//! Immutable record of how a form moved between display states, kept for
//! diagnostics and tests. Never persisted.

use super::state::State;
use super::transition::SubmissionEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// The event that caused the move
    pub trigger: SubmissionEvent,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// `record` returns a new history with the transition appended; the
/// receiver is left untouched.
///
/// # Example
///
/// ```rust
/// use tablefront::core::{StateHistory, StateTransition, SubmissionEvent, SubmissionState};
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: SubmissionState::Idle,
///     to: SubmissionState::ShowingErrors,
///     trigger: SubmissionEvent::Rejected,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(
///     history.path(),
///     vec![&SubmissionState::Idle, &SubmissionState::ShowingErrors]
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States traversed: the first `from`, then every `to`.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }

    /// Time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SubmissionState;

    fn transition(
        from: SubmissionState,
        to: SubmissionState,
        trigger: SubmissionEvent,
    ) -> StateTransition<SubmissionState> {
        StateTransition {
            from,
            to,
            trigger,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<SubmissionState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(transition(
            SubmissionState::Idle,
            SubmissionState::ShowingSuccess,
            SubmissionEvent::Accepted,
        ));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition(
                SubmissionState::Idle,
                SubmissionState::ShowingSuccess,
                SubmissionEvent::Accepted,
            ))
            .record(transition(
                SubmissionState::ShowingSuccess,
                SubmissionState::Idle,
                SubmissionEvent::AutoReset,
            ));

        assert_eq!(
            history.path(),
            vec![
                &SubmissionState::Idle,
                &SubmissionState::ShowingSuccess,
                &SubmissionState::Idle,
            ]
        );
        assert_eq!(history.transitions()[1].trigger, SubmissionEvent::AutoReset);
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(transition(
            SubmissionState::Idle,
            SubmissionState::ShowingErrors,
            SubmissionEvent::Rejected,
        ));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(transition(
            SubmissionState::Idle,
            SubmissionState::ShowingErrors,
            SubmissionEvent::Rejected,
        ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<SubmissionState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.transitions()[0].trigger, SubmissionEvent::Rejected);
    }
}
