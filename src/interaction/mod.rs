//! Page interactions outside the forms: navigation, reveal effects, counters
//! and the scroll-to-top button.

mod counter;
mod nav;
mod reveal;
mod scroll_top;

pub use counter::{
    format_number, parse_target, CounterAnimation, Counters, Frame, COUNTED_CLASS,
};
pub use nav::{active_section, scroll_target, NavMenu};
pub use reveal::{FadeIns, RevealLatch, VISIBLE_CLASS};
pub use scroll_top::ScrollTopButton;
