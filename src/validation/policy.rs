//! Running a set of field validators under an aggregation policy.
//!
//! The reservation form reports every failing field at once
//! ([`AggregationPolicy::CollectAll`]); the newsletter form stops at the first
//! failing check ([`AggregationPolicy::ShortCircuit`]).

use super::fields::FieldId;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A pure `value -> message` check.
pub type Validator = Box<dyn Fn(&str) -> String>;

/// One field value paired with the check to run on it.
pub struct FieldSpec {
    pub field: FieldId,
    pub value: String,
    pub validator: Validator,
}

impl FieldSpec {
    pub fn new<F>(field: FieldId, value: impl Into<String>, validator: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        Self {
            field,
            value: value.into(),
            validator: Box::new(validator),
        }
    }

    pub fn run(&self) -> String {
        (self.validator)(&self.value)
    }
}

/// How failures across specs are combined.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AggregationPolicy {
    /// Evaluate every spec and keep every message.
    CollectAll,
    /// Stop at the first non-empty message.
    ShortCircuit,
}

/// A failed field check.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

/// Messages per field, in evaluation order. Empty message means valid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationResult {
    entries: Vec<(FieldId, String)>,
}

impl ValidationResult {
    /// Store `message` for `field`. A field checked more than once keeps its
    /// first failure.
    fn insert(&mut self, field: FieldId, message: String) {
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some((_, existing)) if existing.is_empty() => *existing = message,
            Some(_) => {}
            None => self.entries.push((field, message)),
        }
    }

    /// Message for `field`; `None` when the field was not evaluated.
    pub fn message(&self, field: FieldId) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.message(field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.entries.iter().map(|(f, _)| *f)
    }

    /// Non-empty messages only.
    pub fn errors(&self) -> impl Iterator<Item = (FieldId, &str)> + '_ {
        self.entries
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(f, m)| (*f, m.as_str()))
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// First non-empty message, if any.
    pub fn first_error(&self) -> Option<(FieldId, &str)> {
        self.errors().next()
    }

    /// Accumulate every failure into a single `Validation`.
    pub fn to_validation(&self) -> Validation<(), NonEmptyVec<FieldError>> {
        let checks: Vec<Validation<(), NonEmptyVec<FieldError>>> = self
            .entries
            .iter()
            .map(|(field, message)| {
                if message.is_empty() {
                    Validation::success(())
                } else {
                    Validation::fail(FieldError {
                        field: *field,
                        message: message.clone(),
                    })
                }
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}

/// Run `specs` in order under `policy`.
///
/// ```rust
/// use tablefront::validation::{aggregate, rules, AggregationPolicy, FieldId, FieldSpec};
///
/// let specs = vec![
///     FieldSpec::new(FieldId::Name, "", rules::validate_name),
///     FieldSpec::new(FieldId::Email, "a@b.com", rules::validate_email),
/// ];
/// let result = aggregate(&specs, AggregationPolicy::CollectAll);
///
/// assert_eq!(result.message(FieldId::Name), Some("Name is required"));
/// assert_eq!(result.message(FieldId::Email), Some(""));
/// ```
pub fn aggregate(specs: &[FieldSpec], policy: AggregationPolicy) -> ValidationResult {
    let mut result = ValidationResult::default();
    for spec in specs {
        let message = spec.run();
        let failed = !message.is_empty();
        result.insert(spec.field, message);
        if failed && policy == AggregationPolicy::ShortCircuit {
            break;
        }
    }
    result
}
