use crate::{
    builder::ConfigBuilder,
    constants::{DEFAULT_API_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_PORT, MAX_PAGE_SIZE},
    error::ConfigError,
    service::Service,
};
use serde::Serialize;

/// The resolved configuration for a Codecov API client. Build one with [`ConfigBuilder`], or with
/// [`Config::from_env`] if the environment is all you need.
///
/// A `Config` is never changed once it's built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Config {
    api_base_url: String,
    service: Service,
    page_size: u32,
    port: u16,
}

impl Config {
    pub(crate) fn new(api_base_url: String, service: Service, page_size: u32, port: u16) -> Self {
        Self {
            api_base_url,
            service,
            page_size,
            port,
        }
    }

    /// Builds a `Config` from the `CODECOV_API_BASE_URL` and `CODECOV_API_HOSTNAME` environment
    /// variables. Everything else gets its default value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the variable that was used doesn't hold a valid URL
    /// or hostname.
    pub fn from_env() -> Result<Config, ConfigError> {
        ConfigBuilder::new().with_env().build()
    }

    /// Like [`Config::from_env`], but reads the variables through `lookup` instead of from the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the variable that was used doesn't hold a valid URL
    /// or hostname.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        ConfigBuilder::new().with_lookup(lookup).build()
    }

    /// The normalized API base URL. It never has a query, a fragment, or a trailing slash.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    #[must_use]
    pub fn service(&self) -> Service {
        self.service
    }

    /// The default number of items to ask for per page.
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub fn max_page_size(&self) -> u32 {
        MAX_PAGE_SIZE
    }

    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the page size to use for a single request. See [`clamp_page_size`]. When nothing
    /// is requested, this config's page size is used.
    #[must_use]
    pub fn page_size_for(&self, requested: Option<u32>) -> u32 {
        clamp_page_size(requested.or(Some(self.page_size)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(
            DEFAULT_API_BASE_URL.to_string(),
            Service::default(),
            DEFAULT_PAGE_SIZE,
            DEFAULT_PORT,
        )
    }
}

/// Turns a requested page size into one the API will accept. `None` gives
/// [`DEFAULT_PAGE_SIZE`]. Anything else is clamped to the range `1..=MAX_PAGE_SIZE`.
#[must_use]
pub fn clamp_page_size(requested: Option<u32>) -> u32 {
    requested.map_or(DEFAULT_PAGE_SIZE, |size| size.clamp(1, MAX_PAGE_SIZE))
}

pub(crate) fn validate_page_size(size: u32) -> Result<u32, ConfigError> {
    if size == 0 || size > MAX_PAGE_SIZE {
        return Err(ConfigError::InvalidPageSize {
            size,
            max: MAX_PAGE_SIZE,
        });
    }
    Ok(size)
}
