/// Errors raised while building a subset-sum instance or classifying
/// driver input. The search itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid argument, e.g. a non-positive or too small random instance size
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed or missing problem file content
    #[error("Error while parsing input: {0}")]
    Parse(String),

    /// Input that is neither a size, a file nor a directory
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
