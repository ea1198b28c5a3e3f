//! Configuration types for holiday-export
//!
//! Every field has a default, so an empty TOML file (or no file at all) is a
//! valid configuration. Command line flags are applied on top of the loaded
//! values by the binary.

use serde::{Deserialize, Serialize};
use std::{path::Path, path::PathBuf, time::Duration};
use url::Url;

use crate::error::{Error, Result};
use crate::types::{HolidayKind, RunMode};

/// Remote holiday API settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, endpoints are resolved below it
    /// (default: "https://date.nager.at/api/v3")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout (default: 30 seconds)
    #[serde(default = "default_timeout", with = "duration_serde")]
    pub timeout: Duration,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Parse the base URL, normalized to end with a slash so that endpoint
    /// paths are appended rather than replacing the last segment
    pub fn base_url(&self) -> Result<Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }

        let url = Url::parse(&raw).map_err(|e| Error::Config {
            message: format!("invalid base URL {:?}: {}", self.base_url, e),
            key: Some("api.base_url".to_string()),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config {
                message: format!("unsupported URL scheme {:?}", url.scheme()),
                key: Some("api.base_url".to_string()),
            });
        }

        Ok(url)
    }
}

/// Destinations of the generated artifacts
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Public holidays export (default: "data/holidays_public.txt")
    #[serde(default = "default_public_path")]
    pub public_path: PathBuf,

    /// School holidays export (default: "data/holidays_school.txt")
    #[serde(default = "default_school_path")]
    pub school_path: PathBuf,

    /// Rendered country enumeration (default: "src/country/generated.rs")
    #[serde(default = "default_enum_path")]
    pub enum_path: PathBuf,

    /// Template used for the country enumeration (built-in template if None)
    #[serde(default)]
    pub template_path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            public_path: default_public_path(),
            school_path: default_school_path(),
            enum_path: default_enum_path(),
            template_path: None,
        }
    }
}

impl OutputConfig {
    /// Destination file for the given holiday kind
    pub fn path_for(&self, kind: HolidayKind) -> &Path {
        match kind {
            HolidayKind::Public => &self.public_path,
            HolidayKind::School => &self.school_path,
        }
    }
}

/// Main configuration for a pipeline run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Output destinations
    #[serde(default)]
    pub output: OutputConfig,

    /// Restrict the dates export to these ISO country codes (all countries if None)
    #[serde(default)]
    pub regions: Option<Vec<String>>,

    /// Holiday kinds exported in dates mode (default: public and school)
    #[serde(default = "default_kinds")]
    pub kinds: Vec<HolidayKind>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            output: OutputConfig::default(),
            regions: None,
            kinds: default_kinds(),
        }
    }
}

impl Config {
    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("failed to read {}: {}", path.display(), e),
            key: None,
        })?;

        Self::from_toml(&content)
    }

    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| Error::Config {
            message: e.to_string(),
            key: None,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check settings that serde cannot validate on its own
    pub fn validate(&self) -> Result<()> {
        self.api.base_url()?;

        if self.api.timeout.is_zero() {
            return Err(Error::Config {
                message: "timeout must be greater than zero".to_string(),
                key: Some("api.timeout".to_string()),
            });
        }

        if let Some(regions) = &self.regions
            && let Some(empty) = regions.iter().find(|code| code.trim().is_empty())
        {
            return Err(Error::Config {
                message: format!("invalid region code {empty:?}"),
                key: Some("regions".to_string()),
            });
        }

        Ok(())
    }

    /// Check the settings a run in `mode` depends on
    ///
    /// The kind list is only read by the dates export, so an empty list is
    /// accepted when rendering the enumeration.
    pub fn validate_for(&self, mode: &RunMode) -> Result<()> {
        self.validate()?;

        if matches!(mode, RunMode::Dates(_)) && self.kinds.is_empty() {
            return Err(Error::Config {
                message: "at least one holiday kind must be exported".to_string(),
                key: Some("kinds".to_string()),
            });
        }

        Ok(())
    }
}

fn default_base_url() -> String {
    "https://date.nager.at/api/v3".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    format!("holiday-export/{}", env!("CARGO_PKG_VERSION"))
}

fn default_public_path() -> PathBuf {
    PathBuf::from("data/holidays_public.txt")
}

fn default_school_path() -> PathBuf {
    PathBuf::from("data/holidays_school.txt")
}

fn default_enum_path() -> PathBuf {
    PathBuf::from("src/country/generated.rs")
}

fn default_kinds() -> Vec<HolidayKind> {
    HolidayKind::ALL.to_vec()
}

// Duration serialization helper
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
