pub mod graph_error;
pub mod store_error;

pub use graph_error::GraphError;
pub use store_error::StoreError;

/// Top-level error for all Causeway operations.
#[derive(Debug, thiserror::Error)]
pub enum RiskError {
    #[error("cause not found: {id}")]
    CauseNotFound { id: String },

    #[error("outcome not found: {id}")]
    OutcomeNotFound { id: String },

    #[error("invalid value for {field}: {value}")]
    Validation { field: String, value: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type RiskResult<T> = Result<T, RiskError>;
