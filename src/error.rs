use thiserror::Error;

pub type CommandResult<T> = Result<T, ScaffoldError>;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("failed to write output")]
    Output(#[from] std::io::Error),
    #[error("failed to encode greeting report")]
    Encode(#[from] serde_json::Error),
}
