//! Per-field validators.
//!
//! Every validator maps a raw control value to a message: an empty string
//! means the value is acceptable, anything else is shown to the user as is.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// `local@domain.tld`: no whitespace, exactly one `@`, a `.` after it.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s+()\-]+$").expect("phone pattern is valid"));

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_INVALID: &str = "Please enter a valid phone number";
pub const DATE_REQUIRED: &str = "Date is required";
pub const DATE_IN_PAST: &str = "Please select a future date";
pub const TIME_REQUIRED: &str = "Time is required";
pub const GUESTS_REQUIRED: &str = "Number of guests is required";
pub const NEWSLETTER_REQUIRED: &str = "Please enter your email address.";
pub const NEWSLETTER_INVALID: &str = "Please enter a valid email address.";

const MIN_NAME_LEN: usize = 2;
const MIN_PHONE_DIGITS: usize = 10;

/// Date controls submit ISO calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn message(ok: bool, text: &str) -> String {
    if ok {
        String::new()
    } else {
        text.to_string()
    }
}

/// Whether `value` looks like `local@domain.tld`.
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Length is counted in UTF-16 code units, as a browser input reports it.
pub fn validate_name(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return NAME_REQUIRED.to_string();
    }
    message(trimmed.encode_utf16().count() >= MIN_NAME_LEN, NAME_TOO_SHORT)
}

/// Emptiness is judged on the trimmed value, the pattern on the raw one, so
/// surrounding whitespace is rejected.
pub fn validate_email(value: &str) -> String {
    if value.trim().is_empty() {
        return EMAIL_REQUIRED.to_string();
    }
    message(is_email(value), EMAIL_INVALID)
}

pub fn validate_phone(value: &str) -> String {
    if value.trim().is_empty() {
        return PHONE_REQUIRED.to_string();
    }
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    message(
        PHONE_PATTERN.is_match(value) && digits >= MIN_PHONE_DIGITS,
        PHONE_INVALID,
    )
}

/// Accepts `today` and later. A value that does not parse as a calendar date
/// is treated like a past one.
pub fn validate_date(value: &str, today: NaiveDate) -> String {
    if value.is_empty() {
        return DATE_REQUIRED.to_string();
    }
    let selected = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT);
    message(matches!(selected, Ok(date) if date >= today), DATE_IN_PAST)
}

pub fn validate_time(value: &str) -> String {
    message(!value.is_empty(), TIME_REQUIRED)
}

/// Any selected option passes, including `"0"`.
pub fn validate_guests(value: &str) -> String {
    message(!value.is_empty(), GUESTS_REQUIRED)
}

/// First newsletter check: something was typed.
pub fn check_newsletter_present(value: &str) -> String {
    message(!value.trim().is_empty(), NEWSLETTER_REQUIRED)
}

/// Second newsletter check: the trimmed value is an address.
pub fn check_newsletter_pattern(value: &str) -> String {
    message(is_email(value.trim()), NEWSLETTER_INVALID)
}
