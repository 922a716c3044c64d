use crate::common::*;

#[doc = r#"
    Failure taxonomy for one asset fetch. None of these propagate to the end
    user as process failures: the fetch layer converts them into a `Failed`
    outcome, logs a diagnostic and moves on.
"#]
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("object not found in storage: {0}")]
    NotFound(String),
    #[error("access denied for storage object: {0}")]
    AccessDenied(String),
    #[error("storage transport failure: {0}")]
    Transport(String),
    #[error("failed to decode storage object: {0}")]
    Decode(String),
}
