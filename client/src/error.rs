use pokedex_catalog::CatalogError;
use reqwest::StatusCode;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure, unexpected status or undecodable body
    #[error("Request to {url} failed: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("Not found: {url}")]
    NotFound { url: String },

    /// A sub-resource the view cannot do without was missing
    #[error("Incomplete data: {0}")]
    PartialData(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    View(#[from] CatalogError),
}

/// Non-success HTTP status other than 404
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unexpected HTTP status {0}")]
pub struct StatusError(pub StatusCode);

impl FetchError {
    pub fn failed(url: &str, source: impl Into<BoxError>) -> Self {
        FetchError::FetchFailed {
            url: url.to_string(),
            source: source.into(),
        }
    }

    /// Worth another attempt: timeouts, connection errors, 429 and 5xx
    pub fn is_retryable(&self) -> bool {
        let FetchError::FetchFailed { source, .. } = self else {
            return false;
        };

        if let Some(StatusError(status)) = source.downcast_ref::<StatusError>() {
            return status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS;
        }
        if let Some(error) = source.downcast_ref::<reqwest::Error>() {
            return error.is_timeout() || error.is_connect();
        }
        false
    }
}

/// Map a response status to a fetch error
pub fn check_status(url: &str, status: StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else if status == StatusCode::NOT_FOUND {
        Err(FetchError::NotFound {
            url: url.to_string(),
        })
    } else {
        Err(FetchError::failed(url, StatusError(status)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_protocol::ParseError;

    const URL: &str = "https://pokeapi.co/api/v2/pokemon/25/";

    #[test]
    fn test_success_passes() {
        assert!(check_status(URL, StatusCode::OK).is_ok());
    }

    #[test]
    fn test_not_found() {
        let error = check_status(URL, StatusCode::NOT_FOUND).unwrap_err();

        assert!(matches!(error, FetchError::NotFound { ref url } if url == URL));
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_server_errors_are_retryable() {
        let error = check_status(URL, StatusCode::BAD_GATEWAY).unwrap_err();
        assert!(error.is_retryable());

        let error = check_status(URL, StatusCode::TOO_MANY_REQUESTS).unwrap_err();
        assert!(error.is_retryable());
    }

    #[test]
    fn test_client_errors_are_not_retryable() {
        let error = check_status(URL, StatusCode::BAD_REQUEST).unwrap_err();

        assert!(!error.is_retryable());
        assert_eq!(
            error.to_string(),
            format!("Request to {URL} failed: unexpected HTTP status 400 Bad Request")
        );
    }

    #[test]
    fn test_decode_errors_are_not_retryable() {
        let error = FetchError::failed(URL, ParseError::InvalidFormat("empty body".to_string()));

        assert!(!error.is_retryable());
    }
}
