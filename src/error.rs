use thiserror::Error;

/// Errors raised while populating or querying an [`AliasSampler`](crate::AliasSampler).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplerError {
    /// A table was requested from an empty set of entries.
    #[error("no weights were supplied")]
    Empty,

    /// Lookup past the end of the weight list.
    #[error("index {index} out of range for {len} weights")]
    IndexOutOfRange { index: usize, len: usize },

    /// Negative weight under [`WeightPolicy::Reject`](crate::WeightPolicy::Reject).
    #[error("weight at index {index} is negative: {value}")]
    NegativeWeight { index: usize, value: f64 },

    /// `NaN` or infinite weight; these can never be normalized.
    #[error("weight at index {index} is not finite: {value}")]
    NonFiniteWeight { index: usize, value: f64 },
}
