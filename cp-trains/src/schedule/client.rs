//! CP schedule HTTP client.

use reqwest::Url;
use reqwest::header::HeaderMap;
use tracing::debug;

use crate::domain::{NormalizedStationId, ScheduleEntry};
use crate::http::{FetchError, HttpFetch, browser_headers};

use super::convert::parse_schedule;
use super::error::ScheduleError;

/// Default schedule endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.cp.pt/sites/spring/station/trains";

/// Site the schedule requests pretend to originate from.
const SITE: &str = "https://www.cp.pt";

/// Configuration for the schedule client.
#[derive(Debug, Clone)]
pub struct ScheduleClientConfig {
    /// Endpoint URL; the station id is added as the `stationId` parameter
    pub base_url: String,
}

impl ScheduleClientConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for ScheduleClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Client for the CP station schedule endpoint.
#[derive(Debug, Clone)]
pub struct ScheduleClient<F> {
    fetcher: F,
    base_url: Url,
    headers: HeaderMap,
}

impl<F: HttpFetch> ScheduleClient<F> {
    /// Create a new schedule client.
    pub fn new(fetcher: F, config: ScheduleClientConfig) -> Result<Self, ScheduleError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        Ok(Self {
            fetcher,
            base_url,
            headers: browser_headers(SITE),
        })
    }

    fn schedule_url(&self, station_id: &NormalizedStationId) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("stationId", station_id.as_str());
        url
    }

    /// Fetch the trains calling at a station.
    ///
    /// Returns an empty list when the station has no trains.
    pub async fn fetch(
        &self,
        station_id: &NormalizedStationId,
    ) -> Result<Vec<ScheduleEntry>, ScheduleError> {
        let url = self.schedule_url(station_id);
        let body = self.fetcher.get(&url, &self.headers).await?;
        let entries = parse_schedule(&body)?;

        debug!(%station_id, trains = entries.len(), "fetched schedule");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{MockFetcher, MockResponse};

    const BASE: &str = "http://mock.test/trains";

    fn client(mock: &MockFetcher) -> ScheduleClient<MockFetcher> {
        let config = ScheduleClientConfig::default().with_base_url(BASE);
        ScheduleClient::new(mock.clone(), config).unwrap()
    }

    fn station() -> NormalizedStationId {
        NormalizedStationId::normalize("9431039").unwrap()
    }

    #[test]
    fn config_defaults() {
        assert_eq!(ScheduleClientConfig::default().base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn schedule_url_has_station_id() {
        let client = client(&MockFetcher::new());
        assert_eq!(
            client.schedule_url(&station()).as_str(),
            "http://mock.test/trains?stationId=94-31039"
        );
    }

    #[tokio::test]
    async fn fetches_and_converts() {
        let mock = MockFetcher::new();
        mock.respond_body(
            format!("{BASE}?stationId=94-31039"),
            r#"[{"trainNumber": 131, "platform": "2"}, {"trainNumber": 520}]"#,
        );

        let entries = client(&mock).fetch(&station()).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].train_number, "131");
        assert_eq!(entries[0].platform, "2");
        assert_eq!(entries[1].platform, "—");

        let requests = mock.requests();
        assert_eq!(requests[0].headers[reqwest::header::REFERER], "https://www.cp.pt/");
    }

    #[tokio::test]
    async fn empty_response_is_empty_schedule() {
        let mock = MockFetcher::new();
        mock.respond_body(format!("{BASE}?stationId=94-31039"), "[]");

        let entries = client(&mock).fetch(&station()).await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn http_error_is_fetch_error() {
        let mock = MockFetcher::new();
        mock.respond(
            format!("{BASE}?stationId=94-31039"),
            MockResponse::Status(503, "Service Unavailable".into()),
        );

        let err = client(&mock).fetch(&station()).await.unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Fetch(FetchError::Status { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn timeout_is_distinct() {
        let mock = MockFetcher::new();
        mock.respond(format!("{BASE}?stationId=94-31039"), MockResponse::Timeout);

        let err = client(&mock).fetch(&station()).await.unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::Fetch(FetchError::Timeout { .. })
        ));
    }
}
