use thiserror::Error;

/// Terminal failures of a submission cycle.
///
/// `Display` is the exact user-facing message shown in the status region.
/// Underlying fault detail (offending field, HTTP status, transport error)
/// stays in the variant fields and is only logged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please enter valid numbers for all fields.")]
    InvalidFeature { field: &'static str },

    #[error("Please select a valid date before submitting.")]
    InvalidDate,

    #[error("Error fetching predictions. Please try again.")]
    Server { status: u16 },

    #[error("Network error. Please check your connection.")]
    Network { detail: String },
}
