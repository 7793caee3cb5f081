//! Error types.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is ever shown to a visitor. Each error is returned to the
//! one call site that owns a fallback (static releases URL, default config,
//! empty dictionary), which logs it and carries on.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of the remote latest-release lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The request never produced a response.
    #[error("release lookup transport error: {0}")]
    Transport(String),
    /// The API answered with a non-success status.
    #[error("release lookup returned status {0}")]
    Status(u16),
    /// The body was not the expected release JSON.
    #[error("release lookup returned malformed JSON: {0}")]
    Decode(String),
}

/// Failure to read the embedded page configuration block.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid landing config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure to load a translation dictionary.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("invalid {lang} dictionary: {source}")]
    Parse {
        lang: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{lang} dictionary must be a JSON object")]
    NotAnObject { lang: &'static str },
}
