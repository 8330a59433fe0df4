use thiserror::Error;

pub type ArborResult<T> = Result<T, ArborError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArborError {
    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: i64,
        len: usize,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
