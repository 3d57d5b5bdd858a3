//! Error types for the dispatch engine binary.

/// Top-level error for the dispatch engine binary.
///
/// Each variant wraps a specific subsystem error so that `main` can
/// propagate any of them with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: brigada_dispatch::ConfigError,
    },

    /// The dispatch engine could not be built or became unusable.
    #[error("dispatch error: {source}")]
    Dispatch {
        /// The underlying dispatch error.
        #[from]
        source: brigada_dispatch::DispatchError,
    },

    /// Reading the scenario file failed.
    #[error("failed to read scenario file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The scenario file is not valid YAML or has unknown steps.
    #[error("failed to parse scenario: {source}")]
    Scenario {
        /// The underlying YAML error.
        #[from]
        source: serde_yml::Error,
    },

    /// The final snapshot could not be serialized.
    #[error("failed to serialize snapshot: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
