//! State trait and the submission state shared by both forms.
//!
//! All methods are pure; states are plain values that describe what a form
//! is currently displaying.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for form display states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: transitions compare states
/// - `Debug`: states show up in logs
/// - `Serialize` + `Deserialize`: states can be dumped for diagnostics
pub trait State: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> {
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Whether this state reports a failure to the user.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

crate::state_enum! {
    /// What a form is currently showing.
    ///
    /// ```rust
    /// use tablefront::core::{State, SubmissionState};
    ///
    /// assert_eq!(SubmissionState::default(), SubmissionState::Idle);
    /// assert!(SubmissionState::ShowingErrors.is_error());
    /// ```
    pub enum SubmissionState {
        /// Nothing reported; fields editable.
        Idle,
        /// Validation failed; field slots and banner show errors.
        ShowingErrors,
        /// Submission accepted; banner shows the confirmation.
        ShowingSuccess,
    }
    error: [ShowingErrors]
}

impl Default for SubmissionState {
    fn default() -> Self {
        Self::Idle
    }
}
