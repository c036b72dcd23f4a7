/// Errors from fallible core operations.
///
/// Field-level validation failures are not errors; they are reported as data
/// in a [`ValidationReport`](crate::validation::report::ValidationReport).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid date format: {0}. Expected format YYYY-MM-DD")]
    InvalidDate(String),
}
