//! Error types for the Stay Engine.
//!
//! The pricing and reminder calculations themselves never fail. Errors only
//! arise at the edges: loading configuration, looking up catalogue rooms, and
//! validating records before they reach the calculation core.

use thiserror::Error;

/// The main error type for the Stay Engine.
///
/// # Example
///
/// ```
/// use stay_engine::error::EngineError;
///
/// let error = EngineError::RoomNotFound {
///     room_id: "villa-9".to_string(),
/// };
/// assert_eq!(error.to_string(), "Room not found: villa-9");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Room id was not found in the catalogue.
    #[error("Room not found: {room_id}")]
    RoomNotFound {
        /// The room id that was not found.
        room_id: String,
    },

    /// Room exists but is not open for booking.
    #[error("Room '{room_id}' is not available for booking")]
    RoomUnavailable {
        /// The unavailable room id.
        room_id: String,
    },

    /// A booking request carried an invalid field.
    #[error("Invalid booking field '{field}': {message}")]
    InvalidBooking {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A tracked document was invalid.
    #[error("Invalid document '{document_id}': {message}")]
    InvalidDocument {
        /// The ID of the invalid document.
        document_id: String,
        /// A description of what made the document invalid.
        message: String,
    },

    /// A recurring charge was invalid.
    #[error("Invalid charge '{charge_id}': {message}")]
    InvalidCharge {
        /// The ID of the invalid charge.
        charge_id: String,
        /// A description of what made the charge invalid.
        message: String,
    },

    /// A payment could not be recorded against a charge.
    #[error("Invalid payment for charge '{charge_id}': {message}")]
    InvalidPayment {
        /// The ID of the charge the payment was for.
        charge_id: String,
        /// A description of what made the payment invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
