use serde_json::Value;

use crate::country::Country;

/// Default REST Countries endpoint.
pub const RESTCOUNTRIES_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Why a country lookup produced no [`Country`]. The UI shows one generic
/// not-found message for all of these; the variants exist for logs.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Lookup base URL is not usable: {0}")]
    BadBaseUrl(String),

    #[error("Lookup request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Lookup endpoint answered with HTTP {0}")]
    Status(u16),

    #[error("No country matched the query")]
    NoMatch,
}

/// Client for the REST Countries name search.
///
/// One GET per query with partial name matching; the first result wins.
/// There is no retry, caching, or client-side timeout.
#[derive(Clone)]
pub struct RestCountriesClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl RestCountriesClient {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self::with_config(http_client, RESTCOUNTRIES_BASE_URL)
    }

    pub fn with_config(http_client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Looks up `name` and returns the first match.
    pub async fn find(&self, name: &str) -> Result<Country, LookupError> {
        let url = self.lookup_url(name)?;
        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(LookupError::Status(response.status().as_u16()));
        }

        let results: Vec<Value> = response.json().await?;
        country_from_results(&results)
    }

    /// `<base>/name/<query>?fullText=false`, with the query percent-encoded
    /// as a single path segment.
    fn lookup_url(&self, name: &str) -> Result<reqwest::Url, LookupError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|error| LookupError::BadBaseUrl(format!("{}: {error}", self.base_url)))?;

        url.path_segments_mut()
            .map_err(|_| LookupError::BadBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push("name")
            .push(name);
        url.query_pairs_mut().append_pair("fullText", "false");

        Ok(url)
    }
}

/// The endpoint answers a name search with an array of candidate records; the
/// first one wins and an empty array means no match.
fn country_from_results(results: &[Value]) -> Result<Country, LookupError> {
    let first = results.first().ok_or(LookupError::NoMatch)?;
    Ok(Country::from_value(first))
}
