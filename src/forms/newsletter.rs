//! Newsletter signup controller.

use super::presenter::ErrorPresenter;
use super::sink::SubmissionSink;
use crate::config::FormsConfig;
use crate::core::{
    next_state, ResetPolicy, StateHistory, SubmissionEvent, SubmissionMachine, SubmissionState,
};
use crate::env::{Env, Scheduler, TimerHandle, TimerTask, Tone, View};
use crate::validation::{aggregate, rules, AggregationPolicy, FieldId, FieldSpec, FormKind};
use tracing::{debug, info, warn};

pub const SUCCESS_MESSAGE: &str =
    "Thank you for subscribing! You'll receive our latest updates and exclusive offers.";

/// Single-field form: the first failing check wins, and whatever message is
/// shown hides itself after a delay.
pub struct NewsletterForm {
    machine: SubmissionMachine,
    presenter: ErrorPresenter,
    config: FormsConfig,
    pending_clear: Option<TimerHandle>,
}

impl NewsletterForm {
    pub fn new(config: FormsConfig) -> Self {
        Self {
            machine: SubmissionMachine::new(ResetPolicy::Always),
            presenter: ErrorPresenter::for_form(FormKind::Newsletter),
            config,
            pending_clear: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.machine.current_state()
    }

    pub fn history(&self) -> &StateHistory<SubmissionState> {
        self.machine.history()
    }

    /// Check the address and show the outcome. The input is cleared only on
    /// success.
    pub fn submit<V: View, T: Scheduler, C, K: SubmissionSink>(
        &mut self,
        env: &mut Env<V, T, C>,
        sink: &mut K,
    ) -> SubmissionState {
        if self.config.cancel_stale_timers {
            if let Some(handle) = self.pending_clear.take() {
                env.timers.cancel(handle);
            }
        }
        self.apply(SubmissionEvent::BeginSubmit);

        let email = env.view.field_value(FieldId::NewsletterEmail).trim().to_string();
        let specs = [
            FieldSpec::new(FieldId::NewsletterEmail, email.as_str(), rules::check_newsletter_present),
            FieldSpec::new(FieldId::NewsletterEmail, email.as_str(), rules::check_newsletter_pattern),
        ];
        let result = aggregate(&specs, AggregationPolicy::ShortCircuit);

        match result.first_error() {
            Some((_, message)) => {
                self.presenter.show_status(&mut env.view, Tone::Error, message);
                debug!(reason = message, "newsletter signup rejected");
                self.apply(SubmissionEvent::Rejected);
            }
            None => {
                self.presenter.show_status(&mut env.view, Tone::Success, SUCCESS_MESSAGE);
                env.view.set_field_value(FieldId::NewsletterEmail, "");
                sink.subscription(&email);
                info!("newsletter signup accepted");
                self.apply(SubmissionEvent::Accepted);
            }
        }

        self.pending_clear = Some(
            env.timers
                .schedule(self.config.reset_delay(), TimerTask::ClearNewsletter),
        );
        self.state()
    }

    /// The clear timer `handle` fired.
    pub fn clear_fired<V: View, T, C>(&mut self, env: &mut Env<V, T, C>, handle: TimerHandle) {
        if self.pending_clear == Some(handle) {
            self.pending_clear = None;
        } else if self.config.cancel_stale_timers {
            debug!(?handle, "stale newsletter clear ignored");
            return;
        }
        let policy = self.machine.policy();
        if let Err(err) = next_state(policy, self.state(), SubmissionEvent::AutoReset) {
            debug!(%err, ?handle, "newsletter clear skipped");
            return;
        }
        self.presenter.clear_all(&mut env.view);
        self.apply(SubmissionEvent::AutoReset);
    }

    pub fn teardown<T: Scheduler>(&mut self, timers: &mut T) {
        if let Some(handle) = self.pending_clear.take() {
            timers.cancel(handle);
        }
    }

    fn apply(&mut self, event: SubmissionEvent) {
        if let Err(err) = self.machine.apply(event) {
            warn!(%err, "newsletter event ignored");
        }
    }
}
