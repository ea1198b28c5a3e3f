//! Mock holiday API fixtures

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Catalog of the France/Spain scenario
pub fn france_spain_catalog() -> Value {
    json!([
        {"countryCode": "FR", "name": "France"},
        {"countryCode": "ES", "name": "Spain"}
    ])
}

/// One public and one school holiday for France in 2021
pub fn france_2021() -> Value {
    json!([
        {
            "date": "2021-01-01",
            "localName": "Jour de l'an",
            "name": "New Year's Day",
            "countryCode": "FR",
            "fixed": true,
            "global": true,
            "counties": null,
            "launchYear": 1967,
            "types": ["Public"]
        },
        {
            "date": "2021-07-01",
            "localName": "Vacances d'été",
            "name": "Summer holidays",
            "countryCode": "FR",
            "global": true,
            "types": ["School"]
        }
    ])
}

/// Builder for a mock of the holiday API mounted under `/api/v3`
pub struct StubApi {
    /// Underlying mock server
    pub server: MockServer,
}

impl StubApi {
    /// Start a mock server with no routes; unknown routes answer 404
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Serve `body` from `AvailableCountries`
    pub async fn catalog(self, body: Value) -> Self {
        Mock::given(method("GET"))
            .and(path("/api/v3/AvailableCountries"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
        self
    }

    /// Answer `AvailableCountries` with an error status
    pub async fn catalog_status(self, status: u16) -> Self {
        Mock::given(method("GET"))
            .and(path("/api/v3/AvailableCountries"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
        self
    }

    /// Serve `body` for one year of one country
    pub async fn year(self, year: i32, code: &str, body: Value) -> Self {
        Mock::given(method("GET"))
            .and(path(format!("/api/v3/PublicHolidays/{year}/{code}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
        self
    }

    /// Answer one year of one country with an error status
    pub async fn year_status(self, year: i32, code: &str, status: u16) -> Self {
        Mock::given(method("GET"))
            .and(path(format!("/api/v3/PublicHolidays/{year}/{code}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
        self
    }
}
