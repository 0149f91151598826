//! Submission state machine: current state plus history.

use super::history::{StateHistory, StateTransition};
use super::state::SubmissionState;
use super::transition::{next_state, ResetPolicy, SubmissionEvent, TransitionError};
use chrono::Utc;
use tracing::debug;

/// Tracks one form's display state.
#[derive(Clone, Debug)]
pub struct SubmissionMachine {
    current: SubmissionState,
    policy: ResetPolicy,
    history: StateHistory<SubmissionState>,
}

impl SubmissionMachine {
    /// Create a machine in `Idle`.
    pub fn new(policy: ResetPolicy) -> Self {
        Self {
            current: SubmissionState::Idle,
            policy,
            history: StateHistory::new(),
        }
    }

    pub fn current_state(&self) -> SubmissionState {
        self.current
    }

    pub fn policy(&self) -> ResetPolicy {
        self.policy
    }

    pub fn history(&self) -> &StateHistory<SubmissionState> {
        &self.history
    }

    /// Apply `event`, recording the move when the state actually changes.
    ///
    /// On error the machine is left untouched.
    pub fn apply(&mut self, event: SubmissionEvent) -> Result<SubmissionState, TransitionError> {
        let next = next_state(self.policy, self.current, event)?;
        if next != self.current {
            debug!(from = ?self.current, to = ?next, %event, "submission state changed");
            self.history = self.history.record(StateTransition {
                from: self.current,
                to: next,
                trigger: event,
                timestamp: Utc::now(),
            });
            self.current = next;
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_empty_history() {
        let machine = SubmissionMachine::new(ResetPolicy::OnSuccess);
        assert_eq!(machine.current_state(), SubmissionState::Idle);
        assert!(machine.history().is_empty());
    }

    #[test]
    fn self_loop_is_not_recorded() {
        let mut machine = SubmissionMachine::new(ResetPolicy::OnSuccess);
        machine.apply(SubmissionEvent::BeginSubmit).unwrap();
        assert!(machine.history().is_empty());
    }

    #[test]
    fn full_cycle_is_recorded() {
        let mut machine = SubmissionMachine::new(ResetPolicy::OnSuccess);
        machine.apply(SubmissionEvent::BeginSubmit).unwrap();
        machine.apply(SubmissionEvent::Rejected).unwrap();
        machine.apply(SubmissionEvent::BeginSubmit).unwrap();
        machine.apply(SubmissionEvent::Accepted).unwrap();
        machine.apply(SubmissionEvent::AutoReset).unwrap();

        assert_eq!(machine.current_state(), SubmissionState::Idle);
        assert_eq!(
            machine.history().path(),
            vec![
                &SubmissionState::Idle,
                &SubmissionState::ShowingErrors,
                &SubmissionState::Idle,
                &SubmissionState::ShowingSuccess,
                &SubmissionState::Idle,
            ]
        );
    }

    #[test]
    fn invalid_event_leaves_state_untouched() {
        let mut machine = SubmissionMachine::new(ResetPolicy::OnSuccess);
        machine.apply(SubmissionEvent::Rejected).unwrap();

        let result = machine.apply(SubmissionEvent::AutoReset);

        assert!(result.is_err());
        assert_eq!(machine.current_state(), SubmissionState::ShowingErrors);
        assert_eq!(machine.history().len(), 1);
    }
}
