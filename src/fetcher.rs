use std::time::Duration;

use reqwest::StatusCode;
use tracing::debug;

use crate::config::{Config, DETAIL_PATH};
use crate::error::{AppError, Result};
use crate::snapshot::ItemSnapshot;
use crate::wire::DetailResponse;

/// Client for the Grand Exchange item catalogue.
///
/// One request per call: no retries, no caching. Callers decide what to do
/// with a failed item.
pub struct Catalogue {
    client: reqwest::Client,
    base_url: String,
}

impl Catalogue {
    pub fn new(cfg: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: cfg.ge_api_url.clone(),
        })
    }

    pub fn detail_url(&self, id: u32) -> String {
        format!("{}{}?item={}", self.base_url, DETAIL_PATH, id)
    }

    /// Fetch the current market snapshot for one item.
    pub async fn fetch_item(&self, id: u32) -> Result<ItemSnapshot> {
        let url = self.detail_url(id);
        debug!(id, %url, "fetching item detail");

        let resp = self.client.get(&url).send().await?;
        // The catalogue answers unknown ids with 404 and an empty body.
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(id));
        }
        let body = resp.error_for_status()?.text().await?;

        parse_detail(&body, id)
    }
}

/// Parse a `detail.json` body into a snapshot for the requested `id`.
pub fn parse_detail(body: &str, id: u32) -> Result<ItemSnapshot> {
    if body.trim().is_empty() {
        return Err(AppError::NotFound(id));
    }

    let detail: DetailResponse = serde_json::from_str(body)?;
    let snapshot = ItemSnapshot::try_from(detail.item)?;

    if snapshot.id() != id {
        return Err(AppError::IdMismatch {
            requested: id,
            returned: snapshot.id(),
        });
    }

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnapshotError;

    fn test_config() -> Config {
        Config {
            ge_api_url: "http://localhost:9".to_string(),
            log_level: "info".to_string(),
            item_ids: vec![4151],
            request_timeout_secs: 1,
        }
    }

    #[test]
    fn builds_detail_url() {
        let catalogue = Catalogue::new(&test_config()).unwrap();
        assert_eq!(
            catalogue.detail_url(4151),
            "http://localhost:9/api/catalogue/detail.json?item=4151"
        );
    }

    #[test]
    fn parses_detail_body() {
        let body = r#"{"item":{"id":560,"name":"Death rune","members":"false","current":{"trend":"positive","price":"1,234"},"today":{"trend":"positive","price":"+5"}}}"#;
        let snapshot = parse_detail(body, 560).unwrap();
        assert_eq!(snapshot.id(), 560);
        assert_eq!(snapshot.name(), "Death rune");
        assert_eq!(snapshot.current_price().price(), 1_234);
        assert_eq!(snapshot.todays_price().price(), 5);
        assert!(!snapshot.is_members_only());
    }

    #[test]
    fn other_item_in_body_is_rejected() {
        let body = r#"{"item":{"id":561,"current":{"trend":"neutral","price":1},"today":{"trend":"neutral","price":0}}}"#;
        match parse_detail(body, 560) {
            Err(AppError::IdMismatch { requested, returned }) => {
                assert_eq!(requested, 560);
                assert_eq!(returned, 561);
            }
            other => panic!("expected IdMismatch, got {other:?}"),
        }
    }

    #[test]
    fn empty_body_is_not_found() {
        match parse_detail("  ", 99) {
            Err(AppError::NotFound(99)) => {}
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn malformed_body_is_json_error() {
        match parse_detail("{\"item\":", 1) {
            Err(AppError::Json(_)) => {}
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn incomplete_item_is_snapshot_error() {
        let body = r#"{"item":{"id":1,"current":{"trend":"neutral","price":1}}}"#;
        match parse_detail(body, 1) {
            Err(AppError::Snapshot(SnapshotError::MissingField(field))) => {
                assert_eq!(field, "todaysPrice");
            }
            other => panic!("expected Snapshot error, got {other:?}"),
        }
    }
}
