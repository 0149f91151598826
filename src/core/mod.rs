//! Core submission state machine.
//!
//! This module is the pure part of the form flow:
//! - Display states via the `State` trait and [`SubmissionState`]
//! - The transition table, parameterised by [`ResetPolicy`]
//! - Immutable history tracking
//!
//! Nothing here touches the view or the scheduler.

mod history;
mod machine;
mod macros;
mod state;
mod transition;

pub use history::{StateHistory, StateTransition};
pub use machine::SubmissionMachine;
pub use state::{State, SubmissionState};
pub use transition::{next_state, ResetPolicy, SubmissionEvent, TransitionError};
