//! Transit provider error types.

/// Errors a transit provider can report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitError {
    /// The stop name did not match any known stop
    #[error("stop not found: {0}")]
    StopNotFound(String),

    /// No route is known between the two places
    #[error("no route from {origin} to {destination}")]
    NoRoute { origin: String, destination: String },

    /// The provider could not be reached or answered with an error
    #[error("transit provider unavailable: {0}")]
    Unavailable(String),

    /// Fixture data could not be loaded
    #[error("fixture error: {message}")]
    Fixture { message: String },
}
