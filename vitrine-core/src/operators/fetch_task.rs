//! src/operators/fetch_task.rs
//! ============================================================================
//! # Catalog Fetch Task
//!
//! One-shot background fetch of the catalog endpoint, spawned at startup.
//! Reports into the event loop over the task channel; on any failure
//! (network, non-success status, malformed payload) the store is left
//! empty for the session — the failure is logged and never retried.

use std::time::Duration;

use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};
use tracing::{error, info, instrument};

use crate::{error::AppError, model::catalog::Item};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// A result from a background task, delivered to the event loop.
#[derive(Debug)]
pub enum TaskResult {
    /// The catalog payload decoded successfully.
    CatalogLoaded(Vec<Item>),

    /// The catalog could not be retrieved or decoded.
    CatalogFailed(AppError),
}

/// Spawn the one-shot catalog fetch. The UI keeps rendering (its loading
/// state) while this runs; completion lands on `task_tx`.
#[instrument(skip(task_tx))]
pub fn spawn_catalog_fetch(
    endpoint: String,
    task_tx: UnboundedSender<TaskResult>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match fetch_catalog(&endpoint).await {
            Ok(items) => {
                info!("fetched {} catalog items from {endpoint}", items.len());
                let _ = task_tx.send(TaskResult::CatalogLoaded(items));
            }
            Err(err) => {
                error!("catalog fetch failed: {err}");
                let _ = task_tx.send(TaskResult::CatalogFailed(err));
            }
        }
    })
}

async fn fetch_catalog(endpoint: &str) -> Result<Vec<Item>, AppError> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(|e| AppError::fetch(endpoint, e))?;

    let response = client
        .get(endpoint)
        .send()
        .await
        .map_err(|e| AppError::fetch(endpoint, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AppError::http_status(endpoint, status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| AppError::fetch(endpoint, e))?;

    let items: Vec<Item> = serde_json::from_slice(&body)?;
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::Pricing;

    #[test]
    fn payload_decodes_as_item_array() {
        let body = r#"[
            {"imagePath":"a.png","id":"1","title":"Coat","creator":"kim","pricingOption":0,"price":120},
            {"imagePath":"b.png","id":"2","title":"Scarf","creator":"lee","pricingOption":1,"price":0}
        ]"#;

        let items: Vec<Item> = serde_json::from_slice(body.as_bytes()).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].pricing, Pricing::Paid);
        assert_eq!(items[1].pricing, Pricing::Free);
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let body = r#"{"unexpected":"object"}"#;
        let result: Result<Vec<Item>, _> = serde_json::from_slice(body.as_bytes());
        assert!(result.is_err());
    }
}
