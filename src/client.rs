//! HTTP session against the remote holiday API
//!
//! One [`HolidayApi`] is created per run and lent to every component that
//! talks to the network. Requests are issued one at a time by the callers;
//! nothing here spawns tasks.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{Error, Result};

/// Entry of the `AvailableCountries` endpoint
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableCountry {
    /// Display name
    pub name: String,
    /// ISO 3166-1 alpha-2 code
    pub country_code: String,
}

/// Entry of the `PublicHolidays/{year}/{countryCode}` endpoint
///
/// Only the fields the exporter needs are decoded; the API sends more.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicHoliday {
    /// Day of the holiday
    pub date: NaiveDate,
    /// Name in the local language
    #[serde(default)]
    pub local_name: Option<String>,
    /// English name
    #[serde(default)]
    pub name: Option<String>,
    /// Classification labels ("Public", "School", "Bank", ...)
    #[serde(default)]
    pub types: Vec<String>,
}

/// Network session for one run
#[derive(Clone, Debug)]
pub struct HolidayApi {
    http_client: Client,
    base_url: Url,
}

impl HolidayApi {
    /// Open a session using the given API settings
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be created
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = config.base_url()?;

        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Base URL every endpoint is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET {base}/AvailableCountries`
    pub async fn available_countries(&self) -> Result<Vec<AvailableCountry>> {
        let url = self.base_url.join("AvailableCountries")?;
        self.get_json(url).await
    }

    /// `GET {base}/PublicHolidays/{year}/{countryCode}`
    ///
    /// A non-success status is reported as [`Error::Unavailable`]; the API
    /// uses it to say it has no data for that year and country.
    pub async fn public_holidays(&self, year: i32, country_code: &str) -> Result<Vec<PublicHoliday>> {
        let url = self
            .base_url
            .join(&format!("PublicHolidays/{year}/{country_code}"))?;
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        debug!(url = %url, "requesting");

        let response = self.http_client.get(url.clone()).send().await?;

        // Check HTTP status before trying to parse the response body
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Unavailable {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
