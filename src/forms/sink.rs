//! Where accepted submissions go.
//!
//! Submissions are simulated: the default sink drops them. A host that wants
//! to post them somewhere supplies its own [`SubmissionSink`].

use crate::env::View;
use crate::validation::FieldId;
use serde::{Deserialize, Serialize};

/// Every reservation control, read at the moment of acceptance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub message: String,
}

impl Reservation {
    pub fn read<V: View>(view: &V) -> Self {
        Self {
            name: view.field_value(FieldId::Name),
            email: view.field_value(FieldId::Email),
            phone: view.field_value(FieldId::Phone),
            date: view.field_value(FieldId::Date),
            time: view.field_value(FieldId::Time),
            guests: view.field_value(FieldId::Guests),
            message: view.field_value(FieldId::Message),
        }
    }
}

/// Receives accepted submissions.
pub trait SubmissionSink {
    fn reservation(&mut self, reservation: &Reservation);

    fn subscription(&mut self, email: &str);
}

/// Drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardSink;

impl SubmissionSink for DiscardSink {
    fn reservation(&mut self, _reservation: &Reservation) {}

    fn subscription(&mut self, _email: &str) {}
}

/// Keeps every accepted submission in memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    pub reservations: Vec<Reservation>,
    pub subscriptions: Vec<String>,
}

impl SubmissionSink for MemorySink {
    fn reservation(&mut self, reservation: &Reservation) {
        self.reservations.push(reservation.clone());
    }

    fn subscription(&mut self, email: &str) {
        self.subscriptions.push(email.to_string());
    }
}
