//! [`RateError`] type.

use std::path::PathBuf;

pub type Result<T, E = RateError> = std::result::Result<T, E>;

/// Coarse classification of a [`RateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Network,
    Parse,
    Lookup,
}

/// An error from the key store, the HTTP client or the rate document.
#[derive(Debug, thiserror::Error)]
pub enum RateError {
    /// The key store could not be opened or read.
    #[error("couldn't open {}; have you renamed the sample file?", path.display())]
    KeyStoreUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The key store has no entry for the access key.
    #[error("no `{name}` entry in key store {}", path.display())]
    MissingAccessKey { name: String, path: PathBuf },
    /// Connection failure, non-success status or a broken body.
    #[error("http error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("received an empty response")]
    EmptyResponse,
    #[error("failed to parse the response: {0}")]
    MalformedDocument(#[from] serde_json::Error),
    #[error("response has no `rates` object")]
    MissingRates,
    /// The provider answered with its own error object instead of rates.
    #[error("provider rejected the request ({}): {info}", describe_code(code))]
    ProviderRejected { code: Option<i64>, info: String },
    #[error("no rate for currency {0}")]
    UnknownCurrency(String),
}

fn describe_code(code: &Option<i64>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "no code".to_string(),
    }
}

impl RateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RateError::KeyStoreUnavailable { .. } | RateError::MissingAccessKey { .. } => {
                ErrorKind::Configuration
            }
            RateError::Request(_) => ErrorKind::Network,
            RateError::EmptyResponse
            | RateError::MalformedDocument(_)
            | RateError::MissingRates
            | RateError::ProviderRejected { .. } => ErrorKind::Parse,
            RateError::UnknownCurrency(_) => ErrorKind::Lookup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = RateError::KeyStoreUnavailable {
            path: PathBuf::from("etc/access_keys.properties"),
            source: io,
        };
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(
            err.to_string(),
            "couldn't open etc/access_keys.properties; have you renamed the sample file?"
        );

        assert_eq!(RateError::MissingRates.kind(), ErrorKind::Parse);
        assert_eq!(RateError::EmptyResponse.kind(), ErrorKind::Parse);
        assert_eq!(
            RateError::UnknownCurrency("XYZ".into()).kind(),
            ErrorKind::Lookup
        );
    }

    #[test]
    fn test_provider_rejected_message() {
        let err = RateError::ProviderRejected {
            code: Some(101),
            info: "invalid_access_key".into(),
        };
        assert_eq!(
            err.to_string(),
            "provider rejected the request (101): invalid_access_key"
        );

        let err = RateError::ProviderRejected {
            code: None,
            info: "unknown".into(),
        };
        assert_eq!(
            err.to_string(),
            "provider rejected the request (no code): unknown"
        );
    }
}
