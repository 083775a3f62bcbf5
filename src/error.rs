//! Error types for switchfleet.

use std::time::Duration;

use thiserror::Error;

/// Main error type for switchfleet operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Session capability errors
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Inventory loading/validation errors
    #[error("Inventory error: {0}")]
    Inventory(#[from] InventoryError),

    /// Batch-level errors
    #[error("Batch error: {0}")]
    Batch(#[from] BatchError),
}

/// Errors raised by the session capability (connecting to a device,
/// exchanging commands). These are always caught and converted to a
/// per-device [`TaskOutcome`](crate::task::TaskOutcome) at the device
/// boundary; they never abort a batch.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Session could not be established
    #[error("Connection failed to {host}: {message}")]
    ConnectionFailed { host: String, message: String },

    /// A command round-trip failed
    #[error("Command failed: {message}")]
    CommandFailed { message: String },

    /// The session was closed unexpectedly
    #[error("Session disconnected")]
    Disconnected,

    /// A protocol step exceeded the configured per-step timeout
    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Inventory loading and validation errors.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// The inventory document could not be parsed
    #[error("Failed to parse inventory: {0}")]
    Parse(#[from] serde_json::Error),

    /// A device record violates an inventory invariant
    #[error("Invalid device '{name}': {message}")]
    InvalidDevice { name: String, message: String },
}

/// Batch-level errors. The only non-per-device failure a run can produce.
#[derive(Error, Debug)]
pub enum BatchError {
    /// Scope resolution produced an empty target set; no session was opened
    #[error("No devices matched the requested scope")]
    NoTargets,
}

/// Result type alias using switchfleet's Error.
pub type Result<T> = std::result::Result<T, Error>;
