use crate::error::SamplerError;

/// How an [`AliasSampler`](crate::AliasSampler) treats negative weights.
///
/// `NaN` and infinities are rejected under every policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WeightPolicy {
    /// Store negative weights as `0.0`: the index exists but is never drawn.
    #[default]
    Clamp,
    /// Fail with [`SamplerError::NegativeWeight`].
    Reject,
}

impl WeightPolicy {
    /// Map a raw weight to the value that will be stored at `index`.
    pub fn admit(self, index: usize, value: f64) -> Result<f64, SamplerError> {
        if !value.is_finite() {
            return Err(SamplerError::NonFiniteWeight { index, value });
        }
        if value > 0.0 {
            return Ok(value);
        }
        match self {
            // also folds -0.0 into +0.0
            WeightPolicy::Clamp => Ok(0.0),
            WeightPolicy::Reject if value < 0.0 => {
                Err(SamplerError::NegativeWeight { index, value })
            }
            WeightPolicy::Reject => Ok(0.0),
        }
    }
}
