/// Convenience result type used across protomix.
pub type ProtomixResult<T> = Result<T, ProtomixError>;

/// Errors raised at the crate's fallible boundaries.
///
/// The numeric helpers and the plain merges never fail. Only member dispatch, the depth-bounded
/// deep merge and option parsing report errors.
#[derive(thiserror::Error, Debug)]
pub enum ProtomixError {
    /// No member with this name exists on the receiver or anywhere along its prototype chain.
    #[error("missing member: {0}")]
    MissingMember(String),

    /// The member exists but holds a plain value, not a method.
    #[error("member is not callable: {0}")]
    NotCallable(String),

    /// A bounded deep merge needed to recurse past its configured limit.
    #[error("merge depth exceeded: limit {limit}")]
    DepthExceeded {
        /// The configured maximum nesting depth.
        limit: usize,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error, typically raised from inside a user-supplied method.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProtomixError {
    /// Build a [`ProtomixError::MissingMember`] value.
    pub fn missing_member(name: impl Into<String>) -> Self {
        Self::MissingMember(name.into())
    }

    /// Build a [`ProtomixError::NotCallable`] value.
    pub fn not_callable(name: impl Into<String>) -> Self {
        Self::NotCallable(name.into())
    }

    /// Build a [`ProtomixError::DepthExceeded`] value.
    pub fn depth_exceeded(limit: usize) -> Self {
        Self::DepthExceeded { limit }
    }

    /// Build a [`ProtomixError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
