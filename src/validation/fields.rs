//! Field identifiers for both forms.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which form a field or banner belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum FormKind {
    Reservation,
    Newsletter,
}

impl FormKind {
    /// Element id of the form's status banner.
    pub fn banner_key(&self) -> &'static str {
        match self {
            Self::Reservation => "form-message",
            Self::Newsletter => "newsletter-message",
        }
    }
}

/// Named field controls exposed by the view.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Date,
    Time,
    Guests,
    Message,
    NewsletterEmail,
}

impl FieldId {
    /// Reservation fields that carry a validator, in display order.
    pub const VALIDATED: [FieldId; 6] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Date,
        FieldId::Time,
        FieldId::Guests,
    ];

    /// Every reservation control, including the free-text message.
    pub const RESERVATION: [FieldId; 7] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Date,
        FieldId::Time,
        FieldId::Guests,
        FieldId::Message,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Date => "date",
            Self::Time => "time",
            Self::Guests => "guests",
            Self::Message => "message",
            Self::NewsletterEmail => "newsletter-email",
        }
    }

    /// Element id of the field's error slot, if the page has one.
    pub fn slot_key(&self) -> Option<&'static str> {
        match self {
            Self::Name => Some("name-error"),
            Self::Email => Some("email-error"),
            Self::Phone => Some("phone-error"),
            Self::Date => Some("date-error"),
            Self::Time => Some("time-error"),
            Self::Guests => Some("guests-error"),
            Self::Message | Self::NewsletterEmail => None,
        }
    }

    pub fn form(&self) -> FormKind {
        match self {
            Self::NewsletterEmail => FormKind::Newsletter,
            _ => FormKind::Reservation,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
