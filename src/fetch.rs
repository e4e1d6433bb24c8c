use crate::error::{ContractDataError, Result};
use crate::schema::RawRecord;
use crate::utils::validate_fiscal_year;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

const SPENDING_API_URL: &str = "https://api.usaspending.gov/api/v2/search/spending_by_award/";

/// How many awards a single search page requests.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Client for the USAspending award search endpoint. Retrieval failures
/// surface as errors, never as an empty record list: an empty `results`
/// array from a successful response is a legitimate empty dataset, while a
/// non-success status or malformed body is not.
#[derive(Clone)]
pub struct SpendingApiClient {
    client: Client,
    base_url: String,
}

impl SpendingApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: SPENDING_API_URL.to_string(),
        }
    }

    /// Points the client at a different endpoint, for test servers.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches Department of Defense contract awards for one fiscal year,
    /// largest award first.
    pub async fn fetch_contracts_for_year(
        &self,
        year: i32,
        limit: usize,
    ) -> Result<Vec<RawRecord>> {
        validate_fiscal_year(year)?;

        let body = award_search_body(year, limit);
        debug!("Requesting DoD awards for fiscal year {}", year);

        let response = self.client.post(&self.base_url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            return Err(ContractDataError::FetchFailed {
                status: status.as_u16(),
                details,
            });
        }

        let payload: Value = response.json().await?;
        let results = payload
            .get("results")
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ContractDataError::MalformedResponse("missing 'results' array".to_string())
            })?;

        let records = results
            .iter()
            .cloned()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<RawRecord>, _>>()?;

        debug!("Received {} award records", records.len());
        Ok(records)
    }
}

impl Default for SpendingApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn award_search_body(year: i32, limit: usize) -> Value {
    json!({
        "filters": {
            "agencies": [
                {
                    "type": "awarding",
                    "tier": "toptier",
                    "name": "Department of Defense"
                }
            ],
            "time_period": [
                {
                    "start_date": format!("{}-01-01", year),
                    "end_date": format!("{}-12-31", year)
                }
            ],
            "award_type_codes": ["A", "B", "C", "D"]
        },
        "fields": [
            "Award ID", "Recipient Name", "Award Amount", "Description", "Action Date"
        ],
        "sort": "Award Amount",
        "order": "desc",
        "limit": limit,
        "page": 1
    })
}
