//! Core domain logic for the 4D Animals shelter records application.
//!
//! Pure form handling for the shelter's record types: the field rule table
//! and national-ID checksum, the form templates each record type submits,
//! and the descriptor/violation types the web layer exchanges with the
//! evaluator. No HTTP, storage, or async dependencies live here.

pub mod dates;
pub mod error;
pub mod forms;
pub mod validation;
