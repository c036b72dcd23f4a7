//! Field and form evaluation.
//!
//! [`validate_field`] applies the rule table to a single descriptor;
//! [`validate_form`] runs every descriptor in order and aggregates without
//! short-circuiting, so one pass reports every problem in a submission.

use super::israeli_id;
use super::report::{FieldDescriptor, FieldViolation, ValidationReport, ViolationKind};
use super::rules::{FieldKind, Rule};

/// Validate a single submitted field against the rule table.
///
/// Returns `None` when the field passes. The required/absent gate runs
/// before any rule lookup: a required field with no value fails regardless
/// of its name, and an optional field with no value passes without touching
/// the table. Only a present value reaches its rule, and a present value
/// under an unregistered name is reported as
/// [`ViolationKind::InvalidConfiguration`] rather than silently accepted.
pub fn validate_field(field: &FieldDescriptor) -> Option<FieldViolation> {
    tracing::debug!(
        field = %field.name,
        required = field.required,
        has_value = field.value.is_some(),
        "validating field"
    );

    let value = match field.value.as_deref() {
        Some(value) => value,
        None if field.required => {
            return Some(FieldViolation::new(
                ViolationKind::MissingRequiredField,
                &field.name,
            ));
        }
        None => return None,
    };

    let kind = match FieldKind::from_name(&field.name) {
        Some(kind) => kind,
        None => {
            return Some(FieldViolation::new(
                ViolationKind::InvalidConfiguration,
                &field.name,
            ));
        }
    };

    match kind.rule() {
        Rule::Pattern(pattern) if pattern.is_match(value) => None,
        Rule::OneOf(options) if options.contains(&value) => None,
        Rule::Checksum if israeli_id::is_valid(value) => None,
        Rule::Checksum => Some(FieldViolation::new(
            ViolationKind::InvalidChecksum,
            &field.name,
        )),
        Rule::Pattern(_) | Rule::OneOf(_) => Some(FieldViolation::new(
            ViolationKind::PatternMismatch,
            &field.name,
        )),
    }
}

/// Validate a whole form submission.
///
/// Descriptors are evaluated in the order given and every field is always
/// checked, so the report carries one violation per failing field and the
/// caller can surface all of them at once.
pub fn validate_form(fields: &[FieldDescriptor]) -> ValidationReport {
    let mut errors = Vec::new();
    for field in fields {
        if let Some(violation) = validate_field(field) {
            errors.push(violation);
        }
    }

    tracing::debug!(
        fields = fields.len(),
        violations = errors.len(),
        "form validation finished"
    );

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
