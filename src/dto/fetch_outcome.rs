use crate::enums::fetch_error::*;

#[doc = r#"
    Result of fetching one asset. A failed fetch keeps its diagnostic instead
    of silently collapsing into an empty value, so the presentation layer can
    tell "city has no data" apart from "fetch failed".
"#]
#[derive(Debug, Clone)]
pub enum FetchOutcome<T> {
    Fetched(T),
    Failed(FetchError),
}

impl<T> FetchOutcome<T> {
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchOutcome::Fetched(_))
    }

    pub fn as_fetched(&self) -> Option<&T> {
        match self {
            FetchOutcome::Fetched(value) => Some(value),
            FetchOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchOutcome::Fetched(_) => None,
            FetchOutcome::Failed(e) => Some(e),
        }
    }
}
