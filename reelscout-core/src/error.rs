use std::path::PathBuf;

use thiserror::Error;

/// Why a catalog or detail request failed.
///
/// Kept `Clone + PartialEq` so it can sit inside a
/// [`RequestState`](crate::request::RequestState) snapshot.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The service answered but reported a business-level failure in-band.
    #[error("catalog reported a failure: {0}")]
    Domain(String),

    /// The service answered with a non-success status.
    #[error("catalog responded with status {status}")]
    Transport { status: u16 },

    /// The request never completed (DNS, refused connection, timeout).
    #[error("could not reach the catalog: {0}")]
    Connectivity(String),

    #[error("unexpected catalog failure: {0}")]
    Unexpected(String),
}

impl FetchError {
    pub fn is_domain(&self) -> bool {
        matches!(self, FetchError::Domain(_))
    }

    /// Message shown to the user in place of the result list.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Domain(message) if message.trim().is_empty() => {
                "Failed to fetch movies".to_string()
            }
            FetchError::Domain(message) => message.clone(),
            FetchError::Transport { status } => {
                format!("API error (status {status}). Please try again later.")
            }
            FetchError::Connectivity(_) => "Unable to connect to movie database. \
                 Please check your internet connection."
                .to_string(),
            FetchError::Unexpected(_) => {
                "Something went wrong. Please try again later.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return FetchError::Transport {
                status: status.as_u16(),
            };
        }
        if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
            return FetchError::Connectivity(err.to_string());
        }
        FetchError::Unexpected(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

#[derive(Error, Debug)]
pub enum TrendingError {
    #[error("trending storage failed: {0}")]
    Storage(#[from] StorageError),

    #[error("trending backend unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_name_the_failure_class() {
        assert_eq!(
            FetchError::Domain("Invalid API key".into()).user_message(),
            "Invalid API key"
        );
        assert_eq!(
            FetchError::Domain("  ".into()).user_message(),
            "Failed to fetch movies"
        );
        assert!(
            FetchError::Connectivity("dns".into())
                .user_message()
                .contains("check your internet connection")
        );
        assert!(
            FetchError::Transport { status: 503 }
                .user_message()
                .contains("503")
        );
        assert_eq!(
            FetchError::Unexpected("eof".into()).user_message(),
            "Something went wrong. Please try again later."
        );
    }

    #[test]
    fn only_domain_errors_are_domain() {
        assert!(FetchError::Domain(String::new()).is_domain());
        assert!(!FetchError::Transport { status: 500 }.is_domain());
    }
}
