use crate::{constants::VALID_SERVICES, error::ConfigError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A source-control hosting provider that Codecov integrates with.
///
/// The string form of each variant is the identifier used in Codecov API paths, so
/// `Service::GitLab.as_ref()` is `"gitlab"`.
#[derive(
    strum::AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    strum::VariantNames,
)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    #[strum(serialize = "github")]
    #[default]
    GitHub,
    #[strum(serialize = "gitlab")]
    GitLab,
    #[strum(serialize = "bitbucket")]
    Bitbucket,
}

impl Service {
    /// Looks up a service by its identifier. The match is exact, so `"GitHub"` is not accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownService`] if `name` is not one of the valid identifiers.
    pub fn from_name(name: &str) -> Result<Service, ConfigError> {
        Service::from_str(name).map_err(|_| ConfigError::UnknownService(name.to_string()))
    }

    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Service::GitHub => "GitHub",
            Service::GitLab => "GitLab",
            Service::Bitbucket => "Bitbucket",
        }
    }
}

/// Returns true if `name` is one of the valid service identifiers.
#[must_use]
pub fn is_valid_service(name: &str) -> bool {
    VALID_SERVICES.contains(&name)
}
