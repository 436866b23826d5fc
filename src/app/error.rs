use thiserror::Error;

/// Reasons the visualizer could not start. Startup is all-or-nothing: any of
/// these leaves the page without interactive behavior.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("missing page element #{0}")]
    MissingElement(&'static str),
    #[error("failed to create window: {0}")]
    Window(String),
    #[error("rendering context unavailable: {0}")]
    Context(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid { field, reason: reason.into() }
    }
}
