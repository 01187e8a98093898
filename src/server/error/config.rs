use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An OAuth endpoint URL could not be parsed.
    #[error("Invalid URL in {name}: {source}")]
    InvalidUrl {
        /// Name of the environment variable holding the URL
        name: &'static str,
        #[source]
        source: url::ParseError,
    },
}
