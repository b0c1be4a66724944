use crate::service::Service;
use strum::VariantNames;

/// The API base URL used when neither a base URL nor a hostname is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://api.codecov.io/api/v2";

/// The path forced onto hostname-style configuration, and onto base URLs given without a path.
pub const DEFAULT_API_PATH: &str = "/api/v2";

/// The environment variable holding a full API base URL. This takes precedence over
/// [`API_HOSTNAME_ENV`].
pub const API_BASE_URL_ENV: &str = "CODECOV_API_BASE_URL";

/// The environment variable holding a bare API hostname, like `codecov.example.com`.
pub const API_HOSTNAME_ENV: &str = "CODECOV_API_HOSTNAME";

/// The service used when none is chosen.
pub const DEFAULT_SERVICE: &str = "github";

/// Every valid service identifier, in declaration order of [`Service`].
pub const VALID_SERVICES: &[&str] = <Service as VariantNames>::VARIANTS;

pub const DEFAULT_PAGE_SIZE: u32 = 25;

pub const MAX_PAGE_SIZE: u32 = 100;

pub const DEFAULT_PORT: u16 = 3000;

const _: () = assert!(DEFAULT_PAGE_SIZE <= MAX_PAGE_SIZE);
