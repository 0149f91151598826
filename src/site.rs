//! The imperative shell: one [`Site`] per page, fed with [`Event`]s.

use crate::config::SiteConfig;
use crate::core::SubmissionState;
use crate::env::{
    Clock, ElementId, Env, FiredTimer, ManualScheduler, ObserverOptions, RevealGroup, Scheduler,
    TimerTask, View,
};
use crate::forms::{DiscardSink, NewsletterForm, ReservationForm, SubmissionSink};
use crate::interaction::{Counters, FadeIns, NavMenu, ScrollTopButton};
use crate::validation::FieldId;
use std::time::Duration;
use tracing::debug;

/// Something the host observed on the page.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// The page finished loading.
    Loaded,
    Scrolled,
    Resized { width: f64 },
    HamburgerClicked,
    NavLinkClicked { href: String },
    /// A click anywhere; `inside_menu` is true when it hit the hamburger or
    /// the menu itself.
    DocumentClicked { inside_menu: bool },
    ScrollTopClicked,
    FieldBlurred(FieldId),
    FieldChanged(FieldId),
    ReservationSubmitted,
    NewsletterSubmitted,
    VisibilityChanged {
        group: RevealGroup,
        element: ElementId,
        intersecting: bool,
    },
    TimerFired(FiredTimer),
}

/// Every component of the page plus the environment they share.
///
/// Lifecycle: [`Site::new`], [`Site::mount`], any number of
/// [`Site::handle`] calls, then [`Site::teardown`]. Events after teardown
/// are ignored.
pub struct Site<V, T, C, K = DiscardSink> {
    env: Env<V, T, C>,
    sink: K,
    config: SiteConfig,
    reservation: ReservationForm,
    newsletter: NewsletterForm,
    nav: NavMenu,
    fades: FadeIns,
    counters: Counters,
    scroll_top: ScrollTopButton,
    mounted: bool,
}

impl<V: View, T: Scheduler, C: Clock> Site<V, T, C, DiscardSink> {
    pub fn new(env: Env<V, T, C>, config: SiteConfig) -> Self {
        Self::with_sink(env, config, DiscardSink)
    }
}

impl<V: View, T: Scheduler, C: Clock, K: SubmissionSink> Site<V, T, C, K> {
    pub fn with_sink(env: Env<V, T, C>, config: SiteConfig, sink: K) -> Self {
        Self {
            env,
            sink,
            reservation: ReservationForm::new(config.forms.clone()),
            newsletter: NewsletterForm::new(config.forms.clone()),
            nav: NavMenu::new(config.nav.clone()),
            fades: FadeIns::new(),
            counters: Counters::new(config.counter.clone()),
            scroll_top: ScrollTopButton::new(config.scroll_top.clone()),
            config,
            mounted: false,
        }
    }

    pub fn env(&self) -> &Env<V, T, C> {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Env<V, T, C> {
        &mut self.env
    }

    pub fn view(&self) -> &V {
        &self.env.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.env.view
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn reservation_state(&self) -> SubmissionState {
        self.reservation.state()
    }

    pub fn newsletter_state(&self) -> SubmissionState {
        self.newsletter.state()
    }

    pub fn reservation(&self) -> &ReservationForm {
        &self.reservation
    }

    pub fn newsletter(&self) -> &NewsletterForm {
        &self.newsletter
    }

    pub fn nav(&self) -> &NavMenu {
        &self.nav
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Register observers, set the date floor and compute the initial nav
    /// state.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        let reveal = &self.config.reveal;
        self.env.view.observe(
            RevealGroup::FadeIn,
            ObserverOptions {
                threshold: reveal.fade_threshold,
                bottom_margin_px: reveal.fade_bottom_margin_px,
            },
        );
        self.env.view.observe(
            RevealGroup::StatCounter,
            ObserverOptions {
                threshold: reveal.counter_threshold,
                bottom_margin_px: 0.0,
            },
        );
        self.reservation.mount(&mut self.env);
        self.mounted = true;
        debug!("site mounted");
    }

    /// Route one event to the component that owns it.
    pub fn handle(&mut self, event: Event) {
        if !self.mounted {
            debug!(?event, "event before mount or after teardown ignored");
            return;
        }
        let env = &mut self.env;
        match event {
            Event::Loaded => self.nav.highlight(&mut env.view),
            Event::Scrolled => {
                self.nav.highlight(&mut env.view);
                self.scroll_top.scrolled(&mut env.view);
            }
            Event::Resized { width } => self.nav.resized(&mut env.view, width),
            Event::HamburgerClicked => self.nav.hamburger_clicked(&mut env.view),
            Event::NavLinkClicked { href } => self.nav.link_clicked(&mut env.view, &href),
            Event::DocumentClicked { inside_menu } => {
                self.nav.document_clicked(&mut env.view, inside_menu)
            }
            Event::ScrollTopClicked => self.scroll_top.clicked(&mut env.view),
            Event::FieldBlurred(field) => self.reservation.field_blurred(env, field),
            Event::FieldChanged(field) => self.reservation.field_changed(env, field),
            Event::ReservationSubmitted => {
                self.reservation.submit(env, &mut self.sink);
            }
            Event::NewsletterSubmitted => {
                self.newsletter.submit(env, &mut self.sink);
            }
            Event::VisibilityChanged {
                group,
                element,
                intersecting,
            } => match group {
                RevealGroup::FadeIn => {
                    self.fades
                        .visibility_changed(&mut env.view, &element, intersecting)
                }
                RevealGroup::StatCounter => self.counters.visibility_changed(
                    &mut env.view,
                    &mut env.timers,
                    &element,
                    intersecting,
                ),
            },
            Event::TimerFired(FiredTimer { handle, task }) => match task {
                TimerTask::ResetReservation => self.reservation.reset_fired(env, handle),
                TimerTask::ClearNewsletter => self.newsletter.clear_fired(env, handle),
                TimerTask::CounterFrame(element) => {
                    self.counters
                        .frame_fired(&mut env.view, &mut env.timers, &element)
                }
            },
        }
    }

    /// Cancel every pending timer and stop reacting to events.
    pub fn teardown(&mut self) {
        self.reservation.teardown(&mut self.env.timers);
        self.newsletter.teardown(&mut self.env.timers);
        self.counters.teardown(&mut self.env.timers);
        self.mounted = false;
        debug!("site torn down");
    }
}

impl<V: View, C: Clock, K: SubmissionSink> Site<V, ManualScheduler, C, K> {
    /// Move virtual time forward by `by`, handling each timer as it comes due.
    pub fn advance(&mut self, by: Duration) {
        let until = self.env.timers.now() + by;
        while let Some(fired) = self.env.timers.pop_due(until) {
            self.handle(Event::TimerFired(fired));
        }
        self.env.timers.settle(until);
    }
}
