use thiserror::Error;

/// Errors raised at the document store boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never got an answer (connect, timeout, broken body).
    #[error("document store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store refused service without a protocol answer.
    #[error("document store is unavailable: {0}")]
    Unavailable(String),

    /// The store answered with a status this client does not expect.
    #[error("document store answered {status}: {body}")]
    Server { status: u16, body: String },

    /// A conditional write found the document in another state.
    #[error("version conflict writing {index}/{id}")]
    Conflict { index: String, id: String },

    #[error("document {index}/{id} could not be (de)serialized: {source}")]
    Serialization {
        index: String,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid document store url {0:?}")]
    InvalidUrl(String),
}

impl StoreError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, StoreError::Conflict { .. })
    }

    pub(crate) fn serialization(index: &str, id: &str, source: serde_json::Error) -> Self {
        StoreError::Serialization {
            index: index.to_string(),
            id: id.to_string(),
            source,
        }
    }

    pub(crate) fn conflict(index: &str, id: &str) -> Self {
        StoreError::Conflict {
            index: index.to_string(),
            id: id.to_string(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
