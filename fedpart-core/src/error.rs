use thiserror::Error;

/// Custom error type for the fedpart crates.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum FedError {
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("Unknown client {client_id}: expected an id in [0, {clients_num})")]
    UnknownClient { client_id: usize, clients_num: usize },

    #[error(
        "Partition did not converge after {attempts} attempts: smallest client got {smallest} samples, need at least {min_len}"
    )]
    PartitionNonConvergence {
        attempts: usize,
        min_len: usize,
        smallest: usize,
    },

    #[error("Index out of bounds: index {index} for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Collate error: {0}")]
    CollateError(String),
}

impl FedError {
    /// Shorthand for building an [`FedError::InvalidConfiguration`].
    pub fn invalid_config(message: impl Into<String>) -> Self {
        FedError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FedError>;
