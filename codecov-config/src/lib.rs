//! A library for resolving the configuration of a Codecov API client.
//!
//! The main thing this crate produces is the API base URL: the scheme, host, and path prefix that
//! every outgoing API request is built on. It can come from an explicit URL, from a bare hostname,
//! or from the built-in default of `https://api.codecov.io/api/v2`. Along with that it carries the
//! handful of fixed defaults a client needs: the default source-control service, the set of valid
//! services, pagination limits, and the default port.
//!
//! The main entry point for programmatic use is the [`ConfigBuilder`] struct. Here is an example
//! of its usage:
//!
//! ```ignore
//! use codecov_config::{ConfigBuilder, Service};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigBuilder::new()
//!         .with_env()
//!         .service(Service::GitLab)
//!         .build()?;
//!
//!     println!("talking to {}", config.api_base_url());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## How the API Base URL Is Resolved
//!
//! Two inputs are consulted, normally read from the `CODECOV_API_BASE_URL` and
//! `CODECOV_API_HOSTNAME` environment variables:
//!
//! - If the base URL is non-empty after trimming whitespace, it wins. If it has no scheme,
//!   `https://` is assumed. If its path is empty or just `/`, the path becomes `/api/v2`.
//!   Otherwise the path is kept as given, minus any trailing slashes.
//! - Otherwise, if a hostname is set, it is turned into a URL the same way, except that the path
//!   is always replaced with `/api/v2`.
//! - Otherwise the default `https://api.codecov.io/api/v2` is used.
//!
//! In every case the query string and fragment are dropped and the result never ends with a
//! slash. Input that can't be parsed as a URL is an error. There is no best-guess fallback.
//!
//! ## Features
//!
#![doc = document_features::document_features!()]

mod base_url;
mod builder;
mod config;
mod constants;
mod error;
mod service;

pub use crate::{
    base_url::{normalize_base_url, normalize_hostname, resolve_api_base_url},
    builder::ConfigBuilder,
    config::{clamp_page_size, Config},
    constants::{
        API_BASE_URL_ENV, API_HOSTNAME_ENV, DEFAULT_API_BASE_URL, DEFAULT_API_PATH,
        DEFAULT_PAGE_SIZE, DEFAULT_PORT, DEFAULT_SERVICE, MAX_PAGE_SIZE, VALID_SERVICES,
    },
    error::ConfigError,
    service::{is_valid_service, Service},
};

// The version of the `codecov-config` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(feature = "logging")]
use fern::{
    colors::{Color, ColoredLevelConfig},
    Dispatch,
};

/// This function initializes logging for the application. It's public for the sake of the
/// `codecov-config` binary, but it lives in the library crate so that test code can also enable
/// logging.
///
/// # Errors
///
/// This can return a `log::SetLoggerError` error.
#[cfg(feature = "logging")]
pub fn init_logger(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    let line_colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::BrightBlack)
        .debug(Color::BrightBlack)
        .trace(Color::BrightBlack);
    let level_colors = line_colors.info(Color::Green).debug(Color::Black);

    Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{color_line}[{target}][{level}{color_line}] {message}\x1B[0m",
                color_line = format_args!(
                    "\x1B[{}m",
                    line_colors.get_color(&record.level()).to_fg_str()
                ),
                target = record.target(),
                level = level_colors.color(record.level()),
                message = message,
            ));
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
}
