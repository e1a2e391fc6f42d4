use crate::error::Error;
use std::env;
use std::fmt;
use std::str::FromStr;

/// Build mode selecting which HTML entry template the build consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Derive the mode from the environment: `BUILD_MODE` wins, then Trunk's
    /// `TRUNK_PROFILE` (`release` means production), defaulting to
    /// development so a bare invocation never swaps templates.
    ///
    /// # Errors
    /// Returns [`Error::UnknownMode`] if `BUILD_MODE` is set to a value that
    /// is neither a development nor a production spelling.
    pub fn from_env() -> Result<Self, Error> {
        if let Ok(raw) = env::var("BUILD_MODE") {
            return raw.parse();
        }
        if let Ok(profile) = env::var("TRUNK_PROFILE") {
            if profile.eq_ignore_ascii_case("release") {
                return Ok(Self::Production);
            }
            return Ok(Self::Development);
        }
        Ok(Self::Development)
    }
}

impl FromStr for BuildMode {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "production" | "release" => Ok(Self::Production),
            "development" | "dev" | "debug" => Ok(Self::Development),
            _ => Err(Error::UnknownMode(raw.to_string())),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(formatter, "development"),
            Self::Production => write!(formatter, "production"),
        }
    }
}
