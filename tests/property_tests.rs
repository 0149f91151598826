//! Property-based tests for validators and the submission state machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use tablefront::core::{
    next_state, ResetPolicy, State, SubmissionEvent, SubmissionMachine, SubmissionState,
};
use tablefront::validation::{aggregate, rules, AggregationPolicy, FieldId, FieldSpec};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

prop_compose! {
    fn arbitrary_state()(variant in 0..3u8) -> SubmissionState {
        match variant {
            0 => SubmissionState::Idle,
            1 => SubmissionState::ShowingErrors,
            _ => SubmissionState::ShowingSuccess,
        }
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..4u8) -> SubmissionEvent {
        match variant {
            0 => SubmissionEvent::BeginSubmit,
            1 => SubmissionEvent::Rejected,
            2 => SubmissionEvent::Accepted,
            _ => SubmissionEvent::AutoReset,
        }
    }
}

fn arbitrary_policy() -> impl Strategy<Value = ResetPolicy> {
    prop_oneof![Just(ResetPolicy::OnSuccess), Just(ResetPolicy::Always)]
}

proptest! {
    #[test]
    fn blank_names_are_rejected(name in "[ \t\n]*") {
        prop_assert_eq!(rules::validate_name(&name), rules::NAME_REQUIRED);
    }

    #[test]
    fn names_with_two_visible_chars_pass(name in " {0,3}[A-Za-z]{2,20} {0,3}") {
        prop_assert_eq!(rules::validate_name(&name), "");
    }

    #[test]
    fn emails_without_at_are_rejected(email in "[a-z.]{1,20}") {
        prop_assert!(!rules::validate_email(&email).is_empty());
    }

    #[test]
    fn emails_with_two_ats_are_rejected(
        a in "[a-z]{1,8}",
        b in "[a-z]{1,8}",
        c in "[a-z]{1,8}",
    ) {
        let email = format!("{a}@{b}@{c}.com");
        prop_assert_eq!(rules::validate_email(&email), rules::EMAIL_INVALID);
    }

    #[test]
    fn well_formed_emails_pass(
        local in "[a-z0-9._%+-]{1,12}",
        domain in "[a-z0-9-]{1,12}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert_eq!(rules::validate_email(&email), "");
    }

    #[test]
    fn short_phone_numbers_are_rejected(digits in "[0-9]{1,9}") {
        prop_assert!(!rules::validate_phone(&digits).is_empty());
    }

    #[test]
    fn ten_digit_phone_numbers_pass(digits in "[0-9]{10,15}") {
        prop_assert_eq!(rules::validate_phone(&digits), "");
    }

    #[test]
    fn past_dates_are_rejected(days_back in 1i64..3650) {
        let date = today() - Duration::days(days_back);
        let value = date.format(rules::DATE_FORMAT).to_string();
        prop_assert_eq!(rules::validate_date(&value, today()), rules::DATE_IN_PAST);
    }

    #[test]
    fn today_and_later_pass(days_ahead in 0i64..3650) {
        let date = today() + Duration::days(days_ahead);
        let value = date.format(rules::DATE_FORMAT).to_string();
        prop_assert_eq!(rules::validate_date(&value, today()), "");
    }

    #[test]
    fn collect_all_reports_every_field(
        name in ".{0,6}",
        email in ".{0,12}",
        time in ".{0,5}",
    ) {
        let specs = vec![
            FieldSpec::new(FieldId::Name, name, rules::validate_name),
            FieldSpec::new(FieldId::Email, email, rules::validate_email),
            FieldSpec::new(FieldId::Time, time, rules::validate_time),
        ];
        let result = aggregate(&specs, AggregationPolicy::CollectAll);
        prop_assert_eq!(result.fields().count(), 3);
    }

    #[test]
    fn short_circuit_reports_at_most_one_error(
        name in ".{0,6}",
        email in ".{0,12}",
        time in ".{0,5}",
    ) {
        let specs = vec![
            FieldSpec::new(FieldId::Name, name, rules::validate_name),
            FieldSpec::new(FieldId::Email, email, rules::validate_email),
            FieldSpec::new(FieldId::Time, time, rules::validate_time),
        ];
        let result = aggregate(&specs, AggregationPolicy::ShortCircuit);
        prop_assert!(result.errors().count() <= 1);
    }

    #[test]
    fn transition_table_is_deterministic(
        policy in arbitrary_policy(),
        state in arbitrary_state(),
        event in arbitrary_event(),
    ) {
        prop_assert_eq!(next_state(policy, state, event), next_state(policy, state, event));
    }

    #[test]
    fn begin_submit_always_reaches_idle(
        policy in arbitrary_policy(),
        state in arbitrary_state(),
    ) {
        prop_assert_eq!(
            next_state(policy, state, SubmissionEvent::BeginSubmit),
            Ok(SubmissionState::Idle)
        );
    }

    #[test]
    fn machine_history_is_a_connected_path(
        policy in arbitrary_policy(),
        events in prop::collection::vec(arbitrary_event(), 0..20),
    ) {
        let mut machine = SubmissionMachine::new(policy);
        for event in events {
            let _ = machine.apply(event);
        }

        let transitions = machine.history().transitions();
        for pair in transitions.windows(2) {
            prop_assert_eq!(&pair[0].to, &pair[1].from);
        }
        for transition in transitions {
            prop_assert_ne!(&transition.from, &transition.to);
        }
        if let Some(last) = transitions.last() {
            prop_assert_eq!(&last.to, &machine.current_state());
        }
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: SubmissionState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state.name(), deserialized.name());
        prop_assert_eq!(state, deserialized);
    }
}
