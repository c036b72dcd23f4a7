//! Form-field validation engine.
//!
//! A fixed rule table over a closed set of recognized field names, a
//! national-ID checksum, and pure field/form evaluators. Nothing in here
//! touches the web or storage layers; callers hand in descriptors and get a
//! report back.

pub mod evaluator;
pub mod israeli_id;
pub mod report;
pub mod rules;
