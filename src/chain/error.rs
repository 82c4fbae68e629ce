use derive_more::{Display, Error};

/// Precondition violations reported by [`Chain`](super::Chain) operations.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum ChainError {
    #[display(fmt = "chain used before init")]
    UninitializedChain,
    #[display(fmt = "unrecognized direction {:?}", token)]
    InvalidDirection { token: String },
    #[display(fmt = "time delta must be finite and non-negative, got {}", dt)]
    InvalidTimeDelta { dt: f32 },
}

pub type ChainResult<T> = Result<T, ChainError>;
