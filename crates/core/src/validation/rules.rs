//! The rule table: recognized form fields and their validation strategies.
//!
//! Field names form a closed set. Every form input the application checks is
//! listed here and maps to exactly one [`Rule`]; a submitted name outside
//! this set is a configuration problem, reported by the evaluator rather
//! than silently accepted. Patterns and option sets are process-wide
//! constants, built once on first use and never mutated.

use std::sync::LazyLock;

use regex::Regex;

// ---------------------------------------------------------------------------
// Field kinds
// ---------------------------------------------------------------------------

/// A form field recognized by the rule table.
///
/// One variant per submitted input name. [`FieldKind::from_name`] is the
/// only place the stringly-typed form boundary is crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    FullName,
    TeudatZehut,
    CurrentOwner,
    Address,
    City,
    Mail,
    Phone,
    OwnerOf,
    Name,
    Gender,
    Color,
    BirthDate,
    Arrival,
    Age,
    Species,
    BreedName,
    ChipNumber,
    SpayedNeutered,
    Vaccines,
}

/// All recognized fields, in rule-table order.
pub const ALL_FIELDS: &[FieldKind] = &[
    FieldKind::FullName,
    FieldKind::TeudatZehut,
    FieldKind::CurrentOwner,
    FieldKind::Address,
    FieldKind::City,
    FieldKind::Mail,
    FieldKind::Phone,
    FieldKind::OwnerOf,
    FieldKind::Name,
    FieldKind::Gender,
    FieldKind::Color,
    FieldKind::BirthDate,
    FieldKind::Arrival,
    FieldKind::Age,
    FieldKind::Species,
    FieldKind::BreedName,
    FieldKind::ChipNumber,
    FieldKind::SpayedNeutered,
    FieldKind::Vaccines,
];

impl FieldKind {
    /// The field name as submitted by the web layer.
    ///
    /// Names are case-sensitive; `Teudat_Zehut` is capitalized on the forms
    /// while every other input is lowercase.
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullName => "full_name",
            Self::TeudatZehut => "Teudat_Zehut",
            Self::CurrentOwner => "current_owner",
            Self::Address => "address",
            Self::City => "city",
            Self::Mail => "mail",
            Self::Phone => "phone",
            Self::OwnerOf => "owner_of",
            Self::Name => "name",
            Self::Gender => "gender",
            Self::Color => "color",
            Self::BirthDate => "birth_date",
            Self::Arrival => "arrival",
            Self::Age => "age",
            Self::Species => "species",
            Self::BreedName => "breed_name",
            Self::ChipNumber => "chip_number",
            Self::SpayedNeutered => "spayed_neutered",
            Self::Vaccines => "vaccines",
        }
    }

    /// Resolve a submitted field name, or `None` for unregistered names.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_FIELDS.iter().find(|kind| kind.name() == name).copied()
    }

    /// The validation strategy for this field.
    pub fn rule(&self) -> Rule {
        match self {
            Self::TeudatZehut | Self::CurrentOwner => Rule::Checksum,
            Self::FullName
            | Self::City
            | Self::OwnerOf
            | Self::Name
            | Self::Color
            | Self::BreedName => Rule::Pattern(&NAME_RE),
            Self::Address => Rule::Pattern(&ADDRESS_RE),
            Self::Mail => Rule::Pattern(&MAIL_RE),
            Self::Phone => Rule::Pattern(&PHONE_RE),
            Self::BirthDate | Self::Arrival => Rule::Pattern(&DATE_RE),
            Self::Age => Rule::Pattern(&AGE_RE),
            Self::ChipNumber => Rule::Pattern(&CHIP_NUMBER_RE),
            Self::Vaccines => Rule::Pattern(&VACCINES_RE),
            Self::Gender => Rule::OneOf(GENDER_OPTIONS),
            Self::Species => Rule::OneOf(SPECIES_OPTIONS),
            Self::SpayedNeutered => Rule::OneOf(BOOLEAN_OPTIONS),
        }
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// The validation strategy attached to a field.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// The value must match this pattern, anchored at both ends.
    Pattern(&'static Regex),
    /// The value must pass the national-ID check digit.
    Checksum,
    /// The value must equal one of these literals exactly.
    OneOf(&'static [&'static str]),
}

// ---------------------------------------------------------------------------
// Option sets
// ---------------------------------------------------------------------------

/// Accepted `gender` values.
pub const GENDER_OPTIONS: &[&str] = &["Male", "Female"];

/// Accepted `species` values.
///
/// `Reptie` is the spelling the intake form offers; stored records carry it
/// verbatim, so the rule must keep it.
pub const SPECIES_OPTIONS: &[&str] = &["Dog", "Cat", "Fish", "Bird", "Reptie", "Other"];

/// Accepted values for boolean-like inputs such as `spayed_neutered`.
pub const BOOLEAN_OPTIONS: &[&str] = &["True", "False"];

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

// Letter sequences joined by single spaces, hyphens, or apostrophes. Covers
// every name-like field: full_name, city, owner_of, name, color, breed_name.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+(?:[ '-][A-Za-z]+)*$").expect("valid regex"));

// One or more words followed by a trailing street number.
static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Za-z]+ ?)+\d+$").expect("valid regex"));

// local@domain with dot-separated domain labels.
static MAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
        .expect("valid regex")
});

// Leading zero, then 8-9 further digits.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0\d{8,9}$").expect("valid regex"));

// YYYY-MM-DD shape only. Calendar validity is checked when the value is
// converted, see `crate::dates`.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

// Positive number with a non-zero leading digit and at most one decimal
// digit.
static AGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9]\d*(?:\.\d)?$").expect("valid regex"));

// 15 digits starting with 9.
static CHIP_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^9\d{14}$").expect("valid regex"));

// Comma-separated list of non-empty entries.
static VACCINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^,]+(?:,\s*[^,]+)*$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn pattern_for(kind: FieldKind) -> &'static Regex {
        match kind.rule() {
            Rule::Pattern(re) => re,
            other => panic!("{kind:?} should carry a pattern rule, got {other:?}"),
        }
    }

    // -- field kinds ------------------------------------------------------

    #[test]
    fn every_field_name_round_trips() {
        assert_eq!(ALL_FIELDS.len(), 19);
        for &kind in ALL_FIELDS {
            assert_eq!(FieldKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn unregistered_names_resolve_to_none() {
        assert_eq!(FieldKind::from_name("foster"), None);
        assert_eq!(FieldKind::from_name("teudat_zehut"), None); // case-sensitive
        assert_eq!(FieldKind::from_name(""), None);
    }

    #[test]
    fn checksum_rule_covers_both_identity_fields() {
        assert_matches!(FieldKind::TeudatZehut.rule(), Rule::Checksum);
        assert_matches!(FieldKind::CurrentOwner.rule(), Rule::Checksum);
    }

    // -- patterns -----------------------------------------------------------

    #[test]
    fn name_pattern_accepts_separated_words() {
        let re = pattern_for(FieldKind::FullName);
        assert!(re.is_match("Rex"));
        assert!(re.is_match("Dana Levi"));
        assert!(re.is_match("O'Brien"));
        assert!(re.is_match("Jean-Pierre"));
        assert!(!re.is_match("Dana  Levi")); // double space
        assert!(!re.is_match("Dana "));
        assert!(!re.is_match("4ever"));
        assert!(!re.is_match(""));
    }

    #[test]
    fn address_pattern_requires_trailing_number() {
        let re = pattern_for(FieldKind::Address);
        assert!(re.is_match("Herzl 5"));
        assert!(re.is_match("Allenby Street 13"));
        assert!(!re.is_match("Herzl"));
        assert!(!re.is_match("5 Herzl"));
    }

    #[test]
    fn mail_pattern_takes_local_at_domain() {
        let re = pattern_for(FieldKind::Mail);
        assert!(re.is_match("a@b.com"));
        assert!(re.is_match("dana.levi+pets@mail.example.org"));
        assert!(!re.is_match("not-an-email"));
        assert!(!re.is_match("dana@"));
        assert!(!re.is_match("@example.com"));
    }

    #[test]
    fn phone_pattern_requires_leading_zero_and_length() {
        let re = pattern_for(FieldKind::Phone);
        assert!(re.is_match("031234567")); // 9 digits, landline
        assert!(re.is_match("0541234567")); // 10 digits, mobile
        assert!(!re.is_match("31234567"));
        assert!(!re.is_match("05412345678")); // too long
        assert!(!re.is_match("054123456a"));
    }

    #[test]
    fn date_pattern_checks_shape_only() {
        let re = pattern_for(FieldKind::BirthDate);
        assert!(re.is_match("2024-05-08"));
        assert!(re.is_match("2024-13-40")); // shape-valid, calendar-invalid
        assert!(!re.is_match("08-05-2024"));
        assert!(!re.is_match("2024/05/08"));
    }

    #[test]
    fn age_pattern_allows_one_decimal_digit() {
        let re = pattern_for(FieldKind::Age);
        assert!(re.is_match("3"));
        assert!(re.is_match("14"));
        assert!(re.is_match("3.5"));
        assert!(!re.is_match("0"));
        assert!(!re.is_match("0.5"));
        assert!(!re.is_match("3.55"));
        assert!(!re.is_match("3."));
    }

    #[test]
    fn chip_number_pattern_is_fifteen_digits_starting_with_nine() {
        let re = pattern_for(FieldKind::ChipNumber);
        assert!(re.is_match("941000012345678"));
        assert!(!re.is_match("841000012345678"));
        assert!(!re.is_match("94100001234567")); // 14 digits
        assert!(!re.is_match("9410000123456789")); // 16 digits
    }

    #[test]
    fn vaccines_pattern_accepts_comma_separated_lists() {
        let re = pattern_for(FieldKind::Vaccines);
        assert!(re.is_match("rabies"));
        assert!(re.is_match("rabies, parvo, distemper"));
        assert!(re.is_match("rabies,parvo"));
        assert!(!re.is_match("rabies,, parvo"));
        assert!(!re.is_match(",rabies"));
        assert!(!re.is_match(""));
    }

    // -- option sets --------------------------------------------------------

    #[test]
    fn species_options_preserve_the_form_spelling() {
        assert!(SPECIES_OPTIONS.contains(&"Reptie"));
        assert!(!SPECIES_OPTIONS.contains(&"Reptile"));
    }

    #[test]
    fn option_rules_point_at_their_sets() {
        assert_matches!(FieldKind::Gender.rule(), Rule::OneOf(o) if o == GENDER_OPTIONS);
        assert_matches!(FieldKind::Species.rule(), Rule::OneOf(o) if o == SPECIES_OPTIONS);
        assert_matches!(FieldKind::SpayedNeutered.rule(), Rule::OneOf(o) if o == BOOLEAN_OPTIONS);
    }
}
