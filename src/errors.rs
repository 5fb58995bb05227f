use thiserror::Error;

/// Scribe Errors
#[derive(Debug, Error)]
pub enum ScribeError {
    #[error("GROQ_API_KEY is not set. Add it to your environment or the .env file.")]
    MissingApiKey,
    #[error("Request to the Groq API failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Groq API returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Malformed response from the Groq API: {0}")]
    Json(#[from] serde_json::Error),
    #[error("The Groq API returned no content.")]
    EmptyResponse,
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    StdioError(#[from] std::io::Error),
}

impl ScribeError {
    /// The raw HTTP response body, if the error came from a non-success response.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            ScribeError::Api { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}
