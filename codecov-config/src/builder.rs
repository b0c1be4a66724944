/// The `builder` module contains the `ConfigBuilder` struct which is used to create a `Config`
/// instance.
use crate::{
    base_url::resolve_api_base_url,
    config::{validate_page_size, Config},
    constants::{API_BASE_URL_ENV, API_HOSTNAME_ENV, DEFAULT_PAGE_SIZE, DEFAULT_PORT},
    error::ConfigError,
    service::Service,
};
use log::debug;
use std::env;

/// `ConfigBuilder` is used to create a [`Config`] instance.
#[derive(Debug, Default)]
#[allow(clippy::module_name_repetitions)]
pub struct ConfigBuilder {
    api_base_url: Option<String>,
    api_hostname: Option<String>,
    service: Option<Service>,
    page_size: Option<u32>,
    port: Option<u16>,
}

impl ConfigBuilder {
    /// Returns a new empty `ConfigBuilder`.
    #[must_use]
    pub fn new() -> Self {
        ConfigBuilder::default()
    }

    /// Set the full API base URL, like `https://codecov.example.com/api/v2`. A URL without a
    /// scheme gets `https://`, and a URL without a path gets `/api/v2`. Any other path is kept.
    ///
    /// When this is set to a non-blank value, the hostname is ignored.
    #[must_use]
    pub fn api_base_url(mut self, api_base_url: &str) -> Self {
        self.api_base_url = Some(api_base_url.to_string());
        self
    }

    /// Set the API hostname, like `codecov.example.com`. The API base URL will be this host with
    /// the path `/api/v2`. This is only used when no base URL is set.
    #[must_use]
    pub fn api_hostname(mut self, api_hostname: &str) -> Self {
        self.api_hostname = Some(api_hostname.to_string());
        self
    }

    /// Set the source-control service. Defaults to [`Service::GitHub`].
    #[must_use]
    pub fn service(mut self, service: Service) -> Self {
        self.service = Some(service);
        self
    }

    /// Set the default page size. This must be between 1 and
    /// [`MAX_PAGE_SIZE`](crate::MAX_PAGE_SIZE). Defaults to
    /// [`DEFAULT_PAGE_SIZE`](crate::DEFAULT_PAGE_SIZE).
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Set the port. Defaults to [`DEFAULT_PORT`](crate::DEFAULT_PORT).
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Read the base URL and hostname from the `CODECOV_API_BASE_URL` and `CODECOV_API_HOSTNAME`
    /// environment variables. Variables that are not set, or that are not valid unicode, are
    /// treated as absent. Values read here replace anything set earlier for these two inputs.
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_lookup(|name| env::var(name).ok())
    }

    /// Like [`ConfigBuilder::with_env`], but gets the variables from `lookup`. This lets you
    /// supply configuration from a file, flags, or a test without touching the process
    /// environment.
    #[must_use]
    pub fn with_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        self.api_base_url = lookup(API_BASE_URL_ENV);
        if self.api_base_url.is_some() {
            debug!("Found {API_BASE_URL_ENV}.");
        }
        self.api_hostname = lookup(API_HOSTNAME_ENV);
        if self.api_hostname.is_some() {
            debug!("Found {API_HOSTNAME_ENV}.");
        }
        self
    }

    /// Builds a new [`Config`] instance and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the base URL or hostname that was used can't be
    /// parsed, or [`ConfigError::InvalidPageSize`] if the page size is out of range.
    pub fn build(self) -> Result<Config, ConfigError> {
        let api_base_url =
            resolve_api_base_url(self.api_base_url.as_deref(), self.api_hostname.as_deref())?;
        let page_size = validate_page_size(self.page_size.unwrap_or(DEFAULT_PAGE_SIZE))?;
        let service = self.service.unwrap_or_default();
        debug!("Using the {} service.", service.display_name());

        Ok(Config::new(
            api_base_url,
            service,
            page_size,
            self.port.unwrap_or(DEFAULT_PORT),
        ))
    }
}
