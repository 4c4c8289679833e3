//! Host startup errors.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
