//! Reservation form controller.

use super::presenter::ErrorPresenter;
use super::sink::{Reservation, SubmissionSink};
use crate::config::FormsConfig;
use crate::core::{
    next_state, ResetPolicy, StateHistory, SubmissionEvent, SubmissionMachine, SubmissionState,
};
use crate::env::{Clock, Env, Scheduler, TimerHandle, TimerTask, Tone, View};
use crate::validation::{aggregate, rules, AggregationPolicy, FieldId, FieldSpec, FormKind};
use chrono::NaiveDate;
use stillwater::validation::Validation;
use tracing::{debug, info, warn};

pub const ERROR_BANNER: &str = "Please correct the errors above and try again.";
pub const SUCCESS_BANNER: &str =
    "Thank you! Your reservation has been received. We will contact you shortly to confirm.";

/// Validator for a reservation field; `None` for the free-text message and
/// for fields of other forms.
pub fn field_spec(field: FieldId, value: String, today: NaiveDate) -> Option<FieldSpec> {
    let spec = match field {
        FieldId::Name => FieldSpec::new(field, value, rules::validate_name),
        FieldId::Email => FieldSpec::new(field, value, rules::validate_email),
        FieldId::Phone => FieldSpec::new(field, value, rules::validate_phone),
        FieldId::Date => FieldSpec::new(field, value, move |v| rules::validate_date(v, today)),
        FieldId::Time => FieldSpec::new(field, value, rules::validate_time),
        FieldId::Guests => FieldSpec::new(field, value, rules::validate_guests),
        FieldId::Message | FieldId::NewsletterEmail => return None,
    };
    Some(spec)
}

/// Fields validated when they lose focus.
fn validates_on_blur(field: FieldId) -> bool {
    matches!(field, FieldId::Name | FieldId::Email | FieldId::Phone)
}

/// Fields validated when their value changes.
fn validates_on_change(field: FieldId) -> bool {
    matches!(field, FieldId::Date | FieldId::Time | FieldId::Guests)
}

/// Collect-all validation of every reservation field, a status banner, and
/// an automatic reset some time after a success.
pub struct ReservationForm {
    machine: SubmissionMachine,
    presenter: ErrorPresenter,
    config: FormsConfig,
    pending_reset: Option<TimerHandle>,
}

impl ReservationForm {
    pub fn new(config: FormsConfig) -> Self {
        Self {
            machine: SubmissionMachine::new(ResetPolicy::OnSuccess),
            presenter: ErrorPresenter::for_form(FormKind::Reservation),
            config,
            pending_reset: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.machine.current_state()
    }

    pub fn history(&self) -> &StateHistory<SubmissionState> {
        self.machine.history()
    }

    pub fn pending_reset(&self) -> Option<TimerHandle> {
        self.pending_reset
    }

    /// Offer no date before today in the date picker.
    pub fn mount<V: View, T, C: Clock>(&self, env: &mut Env<V, T, C>) {
        let today = env.clock.today();
        env.view.set_min_date(FieldId::Date, today);
    }

    /// Validate the whole form and show the outcome.
    pub fn submit<V: View, T: Scheduler, C: Clock, K: SubmissionSink>(
        &mut self,
        env: &mut Env<V, T, C>,
        sink: &mut K,
    ) -> SubmissionState {
        if self.config.cancel_stale_timers {
            if let Some(handle) = self.pending_reset.take() {
                env.timers.cancel(handle);
            }
        }
        self.presenter.clear_all(&mut env.view);
        self.apply(SubmissionEvent::BeginSubmit);

        let today = env.clock.today();
        let specs: Vec<FieldSpec> = FieldId::VALIDATED
            .into_iter()
            .filter_map(|field| field_spec(field, env.view.field_value(field), today))
            .collect();
        let result = aggregate(&specs, AggregationPolicy::CollectAll);

        match result.to_validation() {
            Validation::Failure(errors) => {
                for error in errors.iter() {
                    self.presenter.show_error(&mut env.view, error.field, &error.message);
                }
                self.presenter.show_status(&mut env.view, Tone::Error, ERROR_BANNER);
                debug!(errors = errors.len(), "reservation rejected");
                self.apply(SubmissionEvent::Rejected);
            }
            Validation::Success(_) => {
                self.presenter.show_status(&mut env.view, Tone::Success, SUCCESS_BANNER);
                sink.reservation(&Reservation::read(&env.view));
                info!("reservation accepted");
                self.apply(SubmissionEvent::Accepted);
                self.pending_reset = Some(
                    env.timers
                        .schedule(self.config.reset_delay(), TimerTask::ResetReservation),
                );
            }
        }

        self.state()
    }

    /// Re-check `field` on its own and update its slot.
    fn validate_one<V: View, T, C: Clock>(&self, env: &mut Env<V, T, C>, field: FieldId) {
        let today = env.clock.today();
        if let Some(spec) = field_spec(field, env.view.field_value(field), today) {
            self.presenter.show_error(&mut env.view, field, &spec.run());
        }
    }

    /// Focus left `field`.
    pub fn field_blurred<V: View, T, C: Clock>(&self, env: &mut Env<V, T, C>, field: FieldId) {
        if validates_on_blur(field) {
            self.validate_one(env, field);
        }
    }

    /// The value of `field` changed.
    pub fn field_changed<V: View, T, C: Clock>(&self, env: &mut Env<V, T, C>, field: FieldId) {
        if validates_on_change(field) {
            self.validate_one(env, field);
        }
    }

    /// The reset timer `handle` fired.
    pub fn reset_fired<V: View, T, C>(&mut self, env: &mut Env<V, T, C>, handle: TimerHandle) {
        if self.pending_reset == Some(handle) {
            self.pending_reset = None;
        } else if self.config.cancel_stale_timers {
            debug!(?handle, "stale reservation reset ignored");
            return;
        }
        // The page only resets when the machine can leave its current state.
        let policy = self.machine.policy();
        if let Err(err) = next_state(policy, self.state(), SubmissionEvent::AutoReset) {
            debug!(%err, ?handle, "reservation reset skipped");
            return;
        }
        env.view.reset_form(FormKind::Reservation);
        self.presenter.clear_all(&mut env.view);
        self.apply(SubmissionEvent::AutoReset);
    }

    /// Cancel the pending reset, if any.
    pub fn teardown<T: Scheduler>(&mut self, timers: &mut T) {
        if let Some(handle) = self.pending_reset.take() {
            timers.cancel(handle);
        }
    }

    fn apply(&mut self, event: SubmissionEvent) {
        if let Err(err) = self.machine.apply(event) {
            warn!(%err, "reservation event ignored");
        }
    }
}
