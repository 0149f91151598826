//! Tablefront: form validation and page behaviour for a restaurant site
//!
//! The crate follows a "pure core, imperative shell" split. Validators and
//! the submission state machine are pure functions over plain values; the
//! [`site::Site`] shell owns the components and talks to the page only
//! through the injected [`env::View`], [`env::Scheduler`] and [`env::Clock`].
//!
//! # Core Concepts
//!
//! - **Validators**: `&str -> String` checks, empty string meaning valid
//! - **Aggregation**: explicit `CollectAll` / `ShortCircuit` policies
//! - **Submission state**: `Idle`, `ShowingErrors`, `ShowingSuccess` with a
//!   pure transition table and history
//! - **Events**: the host turns DOM events and fired timers into
//!   [`site::Event`]s
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use std::time::Duration;
//! use tablefront::config::SiteConfig;
//! use tablefront::core::SubmissionState;
//! use tablefront::env::{Env, FixedClock, ManualScheduler, MemoryView, View};
//! use tablefront::site::{Event, Site};
//! use tablefront::validation::FieldId;
//!
//! let clock = FixedClock(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
//! let env = Env::new(MemoryView::new(), ManualScheduler::new(), clock);
//! let mut site = Site::new(env, SiteConfig::default());
//! site.mount();
//!
//! site.view_mut().set_field_value(FieldId::NewsletterEmail, "a@b.com");
//! site.handle(Event::NewsletterSubmitted);
//! assert_eq!(site.newsletter_state(), SubmissionState::ShowingSuccess);
//!
//! site.advance(Duration::from_millis(5000));
//! assert_eq!(site.newsletter_state(), SubmissionState::Idle);
//! ```

pub mod config;
pub mod core;
pub mod env;
pub mod forms;
pub mod interaction;
pub mod site;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{State, SubmissionState};
pub use site::{Event, Site};
pub use validation::{AggregationPolicy, FieldId, ValidationResult};
