use thiserror::Error;

#[derive(Debug, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum ConfigError {
    /// The configured base URL or hostname could not be parsed as a URL, even after adding a
    /// scheme.
    #[error("could not parse `{input}` as an API base URL: {source}")]
    InvalidUrl {
        input: String,
        source: url::ParseError,
    },
    #[error("unknown service `{0}`, expected one of: github, gitlab, bitbucket")]
    UnknownService(String),
    #[error("page size must be between 1 and {max}, got {size}")]
    InvalidPageSize { size: u32, max: u32 },
}
