use thiserror::Error;

/// Failure reported by the remote store collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("remote store unavailable: {0}")]
    Unavailable(String),
    #[error("remote store rejected the call: {0}")]
    Rejected(String),
    #[error("could not decode remote store payload: {0}")]
    Decode(String),
}

/// A view name outside the closed set.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown view '{0}'")]
pub struct UnknownView(pub String);
