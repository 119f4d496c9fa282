use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid token id '{0}'")]
    InvalidId(String),
    #[error("invalid head '{0}'")]
    InvalidHead(String),
    #[error("invalid enhanced dependency '{0}'")]
    InvalidEnhancedDep(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
