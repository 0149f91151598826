//! One-shot timers.
//!
//! Components never hold callbacks. They schedule a [`TimerTask`] and get it
//! back as a fired timer through the site's event entry point.

use super::view::ElementId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Opaque handle returned by [`Scheduler::schedule`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct TimerHandle(pub u64);

/// Deferred work a component asked for.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TimerTask {
    /// Reset the reservation form after a success.
    ResetReservation,
    /// Hide the newsletter message.
    ClearNewsletter,
    /// Advance the counter animation of a stat element by one frame.
    CounterFrame(ElementId),
}

/// A timer whose delay elapsed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FiredTimer {
    pub handle: TimerHandle,
    pub task: TimerTask,
}

/// Timer service.
pub trait Scheduler {
    /// Run `task` once after `delay`.
    fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerHandle;

    /// Drop a pending timer. Unknown or already fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Clone, Debug)]
struct Pending {
    deadline: Duration,
    handle: TimerHandle,
    task: TimerTask,
}

/// Deterministic virtual-time scheduler.
///
/// Time only moves when the owner says so. Timers fire in deadline order,
/// ties broken by scheduling order.
///
/// ```rust
/// use std::time::Duration;
/// use tablefront::env::{ManualScheduler, Scheduler, TimerTask};
///
/// let mut timers = ManualScheduler::new();
/// let handle = timers.schedule(Duration::from_millis(5000), TimerTask::ClearNewsletter);
///
/// assert!(timers.advance(Duration::from_millis(4999)).is_empty());
/// let fired = timers.advance(Duration::from_millis(1));
/// assert_eq!(fired.len(), 1);
/// assert_eq!(fired[0].handle, handle);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    /// Tasks still waiting, in firing order.
    pub fn pending_tasks(&self) -> Vec<&TimerTask> {
        let mut pending: Vec<&Pending> = self.pending.iter().collect();
        pending.sort_by_key(|p| (p.deadline, p.handle));
        pending.into_iter().map(|p| &p.task).collect()
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its deadline. Timers scheduled while handling it are considered by the
    /// next call.
    pub fn pop_due(&mut self, until: Duration) -> Option<FiredTimer> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.deadline <= until)
            .min_by_key(|(_, p)| (p.deadline, p.handle))
            .map(|(i, _)| i)?;

        let Pending {
            deadline,
            handle,
            task,
        } = self.pending.remove(index);
        self.now = self.now.max(deadline);
        Some(FiredTimer { handle, task })
    }

    /// Move the clock forward without firing anything.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Move the clock forward by `by` and return every timer that came due.
    pub fn advance(&mut self, by: Duration) -> Vec<FiredTimer> {
        let until = self.now + by;
        let mut fired = Vec::new();
        while let Some(timer) = self.pop_due(until) {
            fired.push(timer);
        }
        self.settle(until);
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, task: TimerTask) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.pending.push(Pending {
            deadline: self.now + delay,
            handle,
            task,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|p| p.handle != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_in_deadline_then_schedule_order() {
        let mut timers = ManualScheduler::new();
        let late = timers.schedule(ms(20), TimerTask::ResetReservation);
        let first = timers.schedule(ms(10), TimerTask::ClearNewsletter);
        let second = timers.schedule(ms(10), TimerTask::ResetReservation);

        let fired: Vec<TimerHandle> = timers.advance(ms(30)).into_iter().map(|f| f.handle).collect();

        assert_eq!(fired, vec![first, second, late]);
        assert_eq!(timers.now(), ms(30));
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timers = ManualScheduler::new();
        let handle = timers.schedule(ms(5), TimerTask::ClearNewsletter);
        timers.cancel(handle);

        assert!(!timers.is_pending(handle));
        assert!(timers.advance(ms(10)).is_empty());
    }

    #[test]
    fn cancel_unknown_handle_is_ignored() {
        let mut timers = ManualScheduler::new();
        timers.schedule(ms(5), TimerTask::ClearNewsletter);
        timers.cancel(TimerHandle(999));
        assert_eq!(timers.pending_count(), 1);
    }

    #[test]
    fn delays_are_relative_to_virtual_now() {
        let mut timers = ManualScheduler::new();
        timers.advance(ms(100));
        timers.schedule(ms(16), TimerTask::CounterFrame(ElementId::new("guests-served")));

        assert!(timers.advance(ms(15)).is_empty());
        assert_eq!(timers.advance(ms(1)).len(), 1);
    }

    #[test]
    fn pop_due_moves_clock_to_deadline() {
        let mut timers = ManualScheduler::new();
        timers.schedule(ms(16), TimerTask::ClearNewsletter);

        let fired = timers.pop_due(ms(100));

        assert!(fired.is_some());
        assert_eq!(timers.now(), ms(16));
        assert!(timers.pop_due(ms(100)).is_none());
    }
}
