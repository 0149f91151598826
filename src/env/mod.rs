//! Collaborators injected into the site: view, timers, clock.

mod clock;
mod memory;
mod timer;
mod view;

pub use clock::{Clock, FixedClock, SystemClock};
pub use memory::{Banner, MemoryView};
pub use timer::{FiredTimer, ManualScheduler, Scheduler, TimerHandle, TimerTask};
pub use view::{ElementId, ObserverOptions, RevealGroup, SectionBox, Tone, View};

/// Everything a component may touch outside itself.
#[derive(Clone, Debug)]
pub struct Env<V, T, C> {
    pub view: V,
    pub timers: T,
    pub clock: C,
}

impl<V, T, C> Env<V, T, C> {
    pub fn new(view: V, timers: T, clock: C) -> Self {
        Self {
            view,
            timers,
            clock,
        }
    }
}
