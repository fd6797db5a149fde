//! Network URL constants and environment selection for the Trading 212 SDK.

use std::str::FromStr;

use crate::error::SdkError;

/// Paper-trading (practice account) base URL.
pub const DEMO_API_URL: &str = "https://demo.trading212.com";

/// Live (real money) base URL.
pub const LIVE_API_URL: &str = "https://live.trading212.com";

/// Versioned prefix shared by every REST endpoint.
pub const API_PREFIX: &str = "/api/v0";

/// Trading 212 API environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// Paper trading.
    #[default]
    Demo,
    /// Real money trading.
    Live,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Demo => DEMO_API_URL,
            Self::Live => LIVE_API_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Live => "live",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "demo" | "paper" => Ok(Self::Demo),
            "live" => Ok(Self::Live),
            other => Err(SdkError::Config(format!(
                "unknown environment '{other}' (expected 'demo' or 'live')"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(Environment::Demo.base_url(), "https://demo.trading212.com");
        assert_eq!(Environment::Live.base_url(), "https://live.trading212.com");
        assert_eq!(Environment::default(), Environment::Demo);
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("demo".parse::<Environment>().unwrap(), Environment::Demo);
        assert_eq!("Paper".parse::<Environment>().unwrap(), Environment::Demo);
        assert_eq!(" LIVE ".parse::<Environment>().unwrap(), Environment::Live);
        assert!(matches!(
            "staging".parse::<Environment>(),
            Err(SdkError::Config(_))
        ));
    }
}
