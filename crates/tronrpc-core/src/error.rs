pub use reqwest::{Method, StatusCode};

/// Failure of a single node call, before it is tagged with the endpoint.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    #[error("failed to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("failed to build request: {0}")]
    RequestConstruction(String),

    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read response body: {0}")]
    Read(#[source] reqwest::Error),

    #[error("unexpected HTTP status {status}")]
    HttpStatus { status: StatusCode },

    #[error("node returned error: {message}")]
    Rpc { message: String },

    #[error("node returned a non-string Error field: {value}")]
    MalformedErrorField { value: serde_json::Value },

    #[error("failed to decode response body: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("failed to retrieve block header")]
    MissingBlockHeader,

    #[error("contract call failed: code={code}, message={message}")]
    ContractCall { code: String, message: String },

    #[error("transaction not found: {id}")]
    TransactionNotFound { id: String },

    #[error("account not found: {address}")]
    AccountNotFound { address: String },
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{method} {path}: {source}")]
    Node {
        method: Method,
        path: String,
        #[source]
        source: NodeError,
    },

    #[error("invalid client configuration: {0}")]
    Config(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

impl CoreError {
    pub(crate) fn node(method: &Method, path: &str, source: NodeError) -> Self {
        Self::Node {
            method: method.clone(),
            path: path.to_owned(),
            source,
        }
    }

    /// The underlying call failure, if this error came from a node call.
    pub fn node_error(&self) -> Option<&NodeError> {
        match self {
            Self::Node { source, .. } => Some(source),
            Self::Config(_) | Self::InvalidAddress(_) => None,
        }
    }

    /// HTTP status for `HttpStatus` failures.
    pub fn status(&self) -> Option<StatusCode> {
        match self.node_error() {
            Some(NodeError::HttpStatus { status }) => Some(*status),
            _ => None,
        }
    }
}
