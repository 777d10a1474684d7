use chrono::NaiveDate;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{HolidayError, Result};

pub static HOLIDAY_CN_BASE_URL: &str = "https://raw.githubusercontent.com/NateScarlet/holiday-cn/master";

// ===========================================

/// The parts of a holiday-cn document worth logging. Payloads are never
/// rejected for not matching this shape.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidaySummary {
    pub year: i32,
    #[serde(default)]
    pub papers: Vec<String>,
    pub days: Vec<HolidayDay>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayDay {
    pub name: String,
    pub date: NaiveDate,
    pub is_off_day: bool,
}

impl HolidaySummary {
    pub fn from_payload(payload: &Value) -> Option<Self> {
        HolidaySummary::deserialize(payload).ok()
    }

    pub fn off_days(&self) -> usize {
        self.days.iter().filter(|d| d.is_off_day).count()
    }
}

// ===========================================

/// Where holiday documents are downloaded from.
#[derive(Debug, Clone)]
pub struct HolidaySource {
    base_url: String,
    client: Client,
}

impl HolidaySource {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = create_http_client().map_err(|e| HolidayError::Transport {
            url: base_url.to_string(),
            status: None,
            source: Some(e),
        })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn url_for(&self, year: i32) -> String {
        format!("{}/{}.json", self.base_url, year)
    }

    /// Downloads the document for `year` and checks that it is JSON.
    pub fn fetch(&self, year: i32) -> Result<Value> {
        let url = self.url_for(year);
        log::info!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| HolidayError::Transport {
                url: url.clone(),
                status: None,
                source: Some(e),
            })?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(HolidayError::NotFound { year }),
            status if !status.is_success() => {
                log::warn!("Url {url} got code {status}");
                return Err(HolidayError::Transport {
                    url,
                    status: Some(status),
                    source: None,
                });
            }
            status => log::debug!("Url {url} got code {status}"),
        }

        let body = response.bytes().map_err(|e| HolidayError::Transport {
            url: url.clone(),
            status: None,
            source: Some(e),
        })?;
        let payload: Value = serde_json::from_slice(&body)?;

        match HolidaySummary::from_payload(&payload) {
            Some(summary) => log::info!(
                "{url}: {} days listed for {}, {} of them off",
                summary.days.len(),
                summary.year,
                summary.off_days()
            ),
            None => log::debug!("{url}: payload is not in the holiday-cn layout"),
        }
        Ok(payload)
    }
}

fn create_http_client() -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.append(
        USER_AGENT,
        HeaderValue::from_static(concat!("holiday-fetch/", env!("CARGO_PKG_VERSION"))),
    );

    Client::builder().default_headers(headers).build()
}
