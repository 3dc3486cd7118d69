use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostMapError {
    #[error("Host `{0}` does not exist in the map.")]
    NotFound(String),

    #[error("Host `{0}` already exists in the map.")]
    AlreadyExists(String),

    /// The backing store rejected the operation.
    #[error(transparent)]
    Persistence(#[from] anyhow::Error),
}

pub type Result<T, E = HostMapError> = std::result::Result<T, E>;
