use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

// The request URL carries the API key, so it never travels with the error.
impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(e.without_url())
    }
}
