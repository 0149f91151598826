//! Field validation.
//!
//! Validators are pure `&str -> String` functions (empty string = valid).
//! [`aggregate`] runs a batch of them under an explicit
//! [`AggregationPolicy`], and [`ValidationResult::to_validation`] folds the
//! failures into a stillwater `Validation` so callers get every error in a
//! single pass.

pub mod fields;
pub mod policy;
pub mod rules;

pub use fields::{FieldId, FormKind};
pub use policy::{
    aggregate, AggregationPolicy, FieldError, FieldSpec, ValidationResult, Validator,
};
