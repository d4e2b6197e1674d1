//! Unified error types for the relay CLI.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading configuration or resolving the credential.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    /// No credential found in the environment or the config file.
    MissingApiKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::MissingApiKey => write!(
                f,
                "no API key configured; set PARROT_API_KEY or GEMINI_API_KEY, or api_key in parrot.toml"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// Errors from the HTTP exchange layer.
#[derive(Debug)]
pub enum ApiError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the endpoint, with the raw response body.
    Status { code: u16, body: String },
    /// Request payload could not be serialized.
    Json(serde_json::Error),
    /// Response body could not be parsed or navigated.
    InvalidResponse(String),
    /// URL template missing its substitution marker.
    InvalidTemplate(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status { code, body } => write!(f, "status {code}: {body}"),
            Self::Json(e) => write!(f, "json: {e}"),
            Self::InvalidResponse(msg) => write!(f, "invalid response: {msg}"),
            Self::InvalidTemplate(msg) => write!(f, "invalid template: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ---------------------------------------------------------------------------
// PresentError
// ---------------------------------------------------------------------------

/// Errors while displaying the response text.
#[derive(Debug)]
pub enum PresentError {
    Io(std::io::Error),
    /// The tmux window could not be opened.
    Tmux(String),
}

impl fmt::Display for PresentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Tmux(msg) => write!(f, "tmux: {msg}"),
        }
    }
}

impl std::error::Error for PresentError {}

impl From<std::io::Error> for PresentError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// ParrotError — top-level
// ---------------------------------------------------------------------------

/// Top-level error type for one CLI invocation.
#[derive(Debug)]
pub enum ParrotError {
    Config(ConfigError),
    Api(ApiError),
    Present(PresentError),
}

impl fmt::Display for ParrotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Api(e) => write!(f, "api: {e}"),
            Self::Present(e) => write!(f, "display: {e}"),
        }
    }
}

impl std::error::Error for ParrotError {}

impl From<ConfigError> for ParrotError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ApiError> for ParrotError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}

impl From<PresentError> for ParrotError {
    fn from(e: PresentError) -> Self {
        Self::Present(e)
    }
}
