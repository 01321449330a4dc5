/// Crate-wide result alias.
pub type BubblecastResult<T> = Result<T, BubblecastError>;

/// Error surface of the planning core.
///
/// Per-dialogue failures are always local: the compositor drops the affected
/// overlay and keeps processing the batch, so none of these abort a plan.
#[derive(thiserror::Error, Debug)]
pub enum BubblecastError {
    /// A timestamp string did not parse as `H:M:S`, `M:S` or `S[.fff]`.
    #[error("timestamp error: {0}")]
    Timestamp(String),

    /// An interval resolved with `end <= start`.
    #[error("interval error: {0}")]
    Interval(String),

    /// A dialogue line was empty or whitespace-only.
    #[error("empty dialogue text")]
    EmptyText,

    /// Invalid plan-level input (canvas, options).
    #[error("validation error: {0}")]
    Validation(String),

    /// Boundary (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped error from a collaborator.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BubblecastError {
    /// Build a [`BubblecastError::Timestamp`].
    pub fn timestamp(msg: impl Into<String>) -> Self {
        Self::Timestamp(msg.into())
    }

    /// Build a [`BubblecastError::Interval`].
    pub fn interval(msg: impl Into<String>) -> Self {
        Self::Interval(msg.into())
    }

    /// Build a [`BubblecastError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BubblecastError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
