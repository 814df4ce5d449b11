use crate::error::{AppError, Result};

pub const GE_API_URL: &str = "https://secure.runescape.com/m=itemdb_rs";

/// Path of the per-item detail endpoint, relative to `GE_API_URL`.
pub const DETAIL_PATH: &str = "/api/catalogue/detail.json";

/// Abyssal whip, tracked when ITEM_IDS is unset.
pub const DEFAULT_ITEM_IDS: &str = "4151";

pub const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub ge_api_url: String,
    pub log_level: String,
    /// Items to fetch on each run (ITEM_IDS, comma-separated).
    pub item_ids: Vec<u32>,
    /// Per-request timeout (REQUEST_TIMEOUT_SECS)
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let item_ids = std::env::var("ITEM_IDS").unwrap_or_else(|_| DEFAULT_ITEM_IDS.to_string());

        Ok(Self {
            ge_api_url: std::env::var("GE_API_URL")
                .unwrap_or_else(|_| GE_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            item_ids: parse_item_ids(&item_ids)?,
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| REQUEST_TIMEOUT_SECS.to_string())
                .parse::<u64>()
                .map_err(|_| {
                    AppError::Config("REQUEST_TIMEOUT_SECS must be a whole number of seconds".to_string())
                })?,
        })
    }
}

/// Parses a comma-separated id list, ignoring blank entries.
pub fn parse_item_ids(raw: &str) -> Result<Vec<u32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| AppError::Config(format!("ITEM_IDS entry {s:?} is not a valid item id")))
        })
        .collect()
}
