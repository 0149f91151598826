//! Form controllers: the side-effecting shell around validation and the
//! submission state machine.
//!
//! - [`ReservationForm`] reports every failing field at once and resets
//!   itself after a success.
//! - [`NewsletterForm`] stops at the first failing check and clears any
//!   message after a delay.
//! - [`ErrorPresenter`] is the only code that writes slots and banners.

mod newsletter;
mod presenter;
mod reservation;
mod sink;

pub use newsletter::{NewsletterForm, SUCCESS_MESSAGE as NEWSLETTER_SUCCESS};
pub use presenter::ErrorPresenter;
pub use reservation::{
    field_spec, ReservationForm, ERROR_BANNER as RESERVATION_ERROR,
    SUCCESS_BANNER as RESERVATION_SUCCESS,
};
pub use sink::{DiscardSink, MemorySink, Reservation, SubmissionSink};
