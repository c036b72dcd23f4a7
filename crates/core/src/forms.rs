//! Form templates for the record types the application collects.
//!
//! Each template lists the validated inputs of one form, in submission
//! order, with their required flags; [`descriptors`] binds a raw submission
//! to a template. Inputs outside the rule table (server-set flags, the
//! volunteer job fields) never become descriptors.

use std::collections::HashMap;

use crate::validation::report::FieldDescriptor;
use crate::validation::rules::FieldKind;

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

/// One entry in a form template.
#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub kind: FieldKind,
    pub required: bool,
}

/// Intake form for a new animal.
pub const ANIMAL_INTAKE: &[FormField] = &[
    FormField { kind: FieldKind::Name, required: true },
    FormField { kind: FieldKind::Gender, required: true },
    FormField { kind: FieldKind::Color, required: true },
    FormField { kind: FieldKind::BirthDate, required: false },
    FormField { kind: FieldKind::Age, required: false },
    FormField { kind: FieldKind::Species, required: true },
    FormField { kind: FieldKind::BreedName, required: false },
    FormField { kind: FieldKind::ChipNumber, required: false },
    FormField { kind: FieldKind::SpayedNeutered, required: false },
    FormField { kind: FieldKind::Arrival, required: true },
    FormField { kind: FieldKind::CurrentOwner, required: false },
    FormField { kind: FieldKind::Vaccines, required: false },
];

/// Application form for a prospective adopter.
pub const ADOPTER_APPLICATION: &[FormField] = &[
    FormField { kind: FieldKind::FullName, required: true },
    FormField { kind: FieldKind::TeudatZehut, required: true },
    FormField { kind: FieldKind::Address, required: false },
    FormField { kind: FieldKind::City, required: false },
    FormField { kind: FieldKind::Mail, required: false },
    FormField { kind: FieldKind::Phone, required: false },
    FormField { kind: FieldKind::OwnerOf, required: false },
];

/// Registration form for a new volunteer.
pub const VOLUNTEER_REGISTRATION: &[FormField] = &[
    FormField { kind: FieldKind::FullName, required: true },
    FormField { kind: FieldKind::TeudatZehut, required: true },
    FormField { kind: FieldKind::Address, required: false },
    FormField { kind: FieldKind::City, required: false },
    FormField { kind: FieldKind::Mail, required: false },
    FormField { kind: FieldKind::Phone, required: false },
];

// ---------------------------------------------------------------------------
// Binding
// ---------------------------------------------------------------------------

/// Bind a raw submission to a form template.
///
/// Each template field is looked up by its submitted name; a missing key or
/// a blank value binds as absent, anything else is carried verbatim. The
/// returned order is template order, which is also the evaluation and
/// error-reporting order of
/// [`validate_form`](crate::validation::evaluator::validate_form). Submitted
/// keys that are not in the template are ignored.
pub fn descriptors(
    template: &[FormField],
    submitted: &HashMap<String, String>,
) -> Vec<FieldDescriptor> {
    template
        .iter()
        .map(|field| {
            let value = submitted
                .get(field.kind.name())
                .filter(|raw| !raw.trim().is_empty())
                .cloned();
            FieldDescriptor::new(field.kind.name(), value, field.required)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
