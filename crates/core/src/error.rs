/// Result alias that carries the custom [`CadenceError`] type.
pub type Result<T> = std::result::Result<T, CadenceError>;

/// Common error type for the core crate.
///
/// Stepping and resetting components never fail; every variant here is raised
/// while constructing a component tree or loading a scenario.
#[derive(Debug, thiserror::Error)]
pub enum CadenceError {
    /// A chain needs at least one child to have a current component.
    #[error("a chain requires at least one component")]
    EmptyChain,
    /// Free-form message for failures that do not warrant their own variant.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
    /// Scenario documents that fail to parse.
    #[error("invalid scenario: {0}")]
    Json(#[from] serde_json::Error),
}

impl CadenceError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}
