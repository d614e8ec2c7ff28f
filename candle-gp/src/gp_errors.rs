/// Failures surfaced by the GP model layer.
///
/// The model layer performs no recovery: anything raised inside a
/// variational strategy propagates through `call` untouched.
#[derive(Debug, thiserror::Error)]
pub enum GpError {
    /// `forward` was invoked on a type that does not supply a prior.
    #[error("forward is not implemented for {0}")]
    Unimplemented(&'static str),

    /// Distribution parameters with inconsistent shapes.
    #[error("shape mismatch: expected {expected}, got {got}")]
    Shape { expected: String, got: String },

    #[error(transparent)]
    Tensor(#[from] candle_core::Error),

    /// Opaque failure raised by a variational strategy.
    #[error(transparent)]
    Strategy(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, GpError>;
