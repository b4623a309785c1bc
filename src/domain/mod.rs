// Editable form input state
pub mod form;

// Wire types for the prediction service
pub mod prediction;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
