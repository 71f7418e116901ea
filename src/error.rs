use thiserror::Error;

/// Shown when an error carries no text of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Everything that can go wrong between the client and the REST backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("{0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },
    /// The response body could not be read as JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),
    /// The request itself could not be assembled (bad body, bad URL).
    #[error("Invalid request: {0}")]
    Build(String),
}

impl ApiError {
    /// Text for toasts and logs; never empty.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) => ApiError::Network(js.message),
            gloo_net::Error::SerdeError(serde) => ApiError::Decode(serde.to_string()),
            gloo_net::Error::GlooError(message) => ApiError::Network(message),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
