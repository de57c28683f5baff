use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrialRootError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Negative input has no integer square root: {0}")]
    NegativeInput(String),

    #[error("Candidate counter overflow: {0}")]
    Overflow(String),

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
