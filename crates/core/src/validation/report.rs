//! Descriptor and violation types exchanged with the validation evaluator.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Field descriptor
// ---------------------------------------------------------------------------

/// One submitted form input to be checked.
///
/// Ephemeral: built per submission, usually via [`crate::forms::descriptors`],
/// and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Submitted input name, e.g. `"full_name"`.
    pub name: String,
    /// Raw submitted value. `None` when the input was absent or blank.
    pub value: Option<String>,
    /// Whether the form requires this input.
    pub required: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, value: Option<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            value,
            required,
        }
    }
}

// ---------------------------------------------------------------------------
// Violations
// ---------------------------------------------------------------------------

/// Why a field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required value was absent.
    MissingRequiredField,
    /// A value was present but failed the field's format rule.
    PatternMismatch,
    /// A checksum-class field failed the national-ID check digit.
    InvalidChecksum,
    /// The field name has no rule registered in the table.
    InvalidConfiguration,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingRequiredField => "missing_required_field",
            Self::PatternMismatch => "pattern_mismatch",
            Self::InvalidChecksum => "invalid_checksum",
            Self::InvalidConfiguration => "invalid_configuration",
        }
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Name of the offending field.
    pub field: String,
    /// Failure class.
    pub kind: ViolationKind,
    /// Human-readable message for the form's error list.
    pub message: String,
}

impl FieldViolation {
    /// Build a violation; the message comes from the kind's fixed template.
    pub fn new(kind: ViolationKind, field: impl Into<String>) -> Self {
        let field = field.into();
        let message = match kind {
            ViolationKind::MissingRequiredField => format!("The {field} field is required"),
            ViolationKind::PatternMismatch => format!("Fix the {field} field"),
            // Both checksum-class fields share one message; the violation
            // still records which field it was.
            ViolationKind::InvalidChecksum => "Fix israeli id".to_string(),
            ViolationKind::InvalidConfiguration => {
                format!("No validation rule is registered for the {field} field")
            }
        };
        Self {
            field,
            kind,
            message,
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Aggregated result of validating one form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// `true` when no field produced a violation.
    pub is_valid: bool,
    /// Every violation, in field-evaluation order.
    pub errors: Vec<FieldViolation>,
}

impl ValidationReport {
    /// The human-readable error messages, in evaluation order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|v| v.message.clone()).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
