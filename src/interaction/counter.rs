//! Statistics counter animation.

use super::reveal::RevealLatch;
use crate::config::CounterConfig;
use crate::env::{ElementId, Scheduler, TimerHandle, TimerTask, View};
use std::collections::HashMap;
use tracing::warn;

/// Class marking a stat element whose animation has started.
pub const COUNTED_CLASS: &str = "counted";

/// Leading integer of `raw`, the way an HTML attribute is usually read:
/// optional whitespace and sign, then digits; trailing text is ignored.
pub fn parse_target(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Render a counter value; four or more digits get comma grouping.
///
/// ```rust
/// use tablefront::interaction::format_number;
///
/// assert_eq!(format_number(999), "999");
/// assert_eq!(format_number(15000), "15,000");
/// ```
pub fn format_number(value: i64) -> String {
    if value < 1000 {
        return value.to_string();
    }
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// One running count-up.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
}

/// Text for one frame, and whether the animation is over.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub text: String,
    pub done: bool,
}

impl CounterAnimation {
    pub fn new(target: i64, config: &CounterConfig) -> Self {
        let frames = config.duration_ms as f64 / config.frame_ms as f64;
        Self {
            target,
            increment: target as f64 / frames,
            current: 0.0,
        }
    }

    pub fn step(&mut self) -> Frame {
        self.current += self.increment;
        if self.current >= self.target as f64 {
            Frame {
                text: format_number(self.target),
                done: true,
            }
        } else {
            Frame {
                text: format_number(self.current.floor() as i64),
                done: false,
            }
        }
    }
}

/// Count-up animations for every stat element, started the first time each
/// one becomes visible.
#[derive(Debug)]
pub struct Counters {
    config: CounterConfig,
    latch: RevealLatch,
    running: HashMap<ElementId, (CounterAnimation, TimerHandle)>,
}

impl Counters {
    pub fn new(config: CounterConfig) -> Self {
        Self {
            config,
            latch: RevealLatch::new(),
            running: HashMap::new(),
        }
    }

    pub fn is_running(&self, element: &ElementId) -> bool {
        self.running.contains_key(element)
    }

    pub fn visibility_changed<V: View, T: Scheduler>(
        &mut self,
        view: &mut V,
        timers: &mut T,
        element: &ElementId,
        intersecting: bool,
    ) {
        if !self.latch.trigger(element, intersecting) {
            return;
        }
        view.add_class(element, COUNTED_CLASS);

        let raw = view.data_target(element);
        let Some(target) = raw.as_deref().and_then(parse_target) else {
            warn!(%element, ?raw, "stat element has no usable data-target");
            return;
        };
        let handle = timers.schedule(self.config.frame(), TimerTask::CounterFrame(element.clone()));
        self.running
            .insert(element.clone(), (CounterAnimation::new(target, &self.config), handle));
    }

    /// Advance the animation of `element` by one frame.
    pub fn frame_fired<V: View, T: Scheduler>(
        &mut self,
        view: &mut V,
        timers: &mut T,
        element: &ElementId,
    ) {
        let Some((animation, _)) = self.running.get_mut(element) else {
            return;
        };
        let frame = animation.step();
        view.set_text(element, &frame.text);
        if frame.done {
            self.running.remove(element);
        } else {
            let handle =
                timers.schedule(self.config.frame(), TimerTask::CounterFrame(element.clone()));
            if let Some(entry) = self.running.get_mut(element) {
                entry.1 = handle;
            }
        }
    }

    /// Stop every running animation.
    pub fn teardown<T: Scheduler>(&mut self, timers: &mut T) {
        for (_, (_, handle)) in self.running.drain() {
            timers.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ManualScheduler, MemoryView};
    use std::time::Duration;

    #[test]
    fn parse_target_reads_leading_integer() {
        assert_eq!(parse_target("1500"), Some(1500));
        assert_eq!(parse_target("  25+"), Some(25));
        assert_eq!(parse_target("-3"), Some(-3));
        assert_eq!(parse_target("abc"), None);
        assert_eq!(parse_target(""), None);
    }

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn animation_reaches_target_in_expected_frames() {
        let mut animation = CounterAnimation::new(250, &CounterConfig::default());
        let mut frames = Vec::new();
        loop {
            let frame = animation.step();
            let done = frame.done;
            frames.push(frame.text);
            if done {
                break;
            }
        }

        assert_eq!(frames[0], "2");
        assert_eq!(frames.last().map(String::as_str), Some("250"));
        assert_eq!(frames.len(), 125);
    }

    #[test]
    fn zero_target_finishes_on_first_frame() {
        let mut animation = CounterAnimation::new(0, &CounterConfig::default());
        assert_eq!(
            animation.step(),
            Frame {
                text: "0".to_string(),
                done: true
            }
        );
    }

    #[test]
    fn counters_run_once_per_element() {
        let stat = ElementId::new("years");
        let mut view = MemoryView::new().with_data_target(stat.clone(), "25");
        let mut timers = ManualScheduler::new();
        let mut counters = Counters::new(CounterConfig::default());

        counters.visibility_changed(&mut view, &mut timers, &stat, true);
        counters.visibility_changed(&mut view, &mut timers, &stat, true);

        assert!(view.has_class(&stat, COUNTED_CLASS));
        assert_eq!(timers.pending_count(), 1);

        let until = timers.now() + Duration::from_millis(3000);
        while let Some(fired) = timers.pop_due(until) {
            if let TimerTask::CounterFrame(element) = fired.task {
                counters.frame_fired(&mut view, &mut timers, &element);
            }
        }

        assert_eq!(view.text(&stat), Some("25"));
        assert!(!counters.is_running(&stat));
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn missing_target_is_skipped() {
        let stat = ElementId::new("mystery");
        let mut view = MemoryView::new();
        let mut timers = ManualScheduler::new();
        let mut counters = Counters::new(CounterConfig::default());

        counters.visibility_changed(&mut view, &mut timers, &stat, true);

        assert!(view.has_class(&stat, COUNTED_CLASS));
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn teardown_cancels_frames() {
        let stat = ElementId::new("guests");
        let mut view = MemoryView::new().with_data_target(stat.clone(), "5000");
        let mut timers = ManualScheduler::new();
        let mut counters = Counters::new(CounterConfig::default());
        counters.visibility_changed(&mut view, &mut timers, &stat, true);

        counters.teardown(&mut timers);

        assert_eq!(timers.pending_count(), 0);
        assert!(!counters.is_running(&stat));
    }
}
