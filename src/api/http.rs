//! HTTP Actions Client
//!
//! `reqwest` bindings for the actions resource. On wasm32 the requests go through `fetch`.
//! The liveness ping calls `fetch` directly in `no-cors` mode; reqwest cannot read opaque responses.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{ActionsApi, ApiError};
use crate::config::ClientConfig;
use crate::models::{Action, ActionDraft, ActionId};

#[derive(Debug, Clone)]
pub struct HttpActionsApi {
    client: Client,
    config: ClientConfig,
}

impl HttpActionsApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/actions/", self.config.api_base)
    }

    fn item_url(&self, id: ActionId) -> String {
        format!("{}/actions/{}/", self.config.api_base, id)
    }
}

// ========================
// Response Helpers
// ========================

fn transport(err: reqwest::Error) -> ApiError {
    if err.is_decode() {
        ApiError::Decode(err.to_string())
    } else {
        ApiError::Network(err.to_string())
    }
}

fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status { status: status.as_u16() })
    }
}

async fn read_json<T: DeserializeOwned>(response: Result<Response, reqwest::Error>) -> Result<T, ApiError> {
    let response = ensure_success(response.map_err(transport)?)?;
    response.json::<T>().await.map_err(transport)
}

// ========================
// Calls
// ========================

impl ActionsApi for HttpActionsApi {
    async fn list(&self) -> Result<Vec<Action>, ApiError> {
        let response = self.client.get(self.collection_url()).send().await;
        read_json(response)
            .await
            .inspect_err(|e| log::error!("Error fetching actions: {e}"))
    }

    async fn create(&self, draft: &ActionDraft) -> Result<Action, ApiError> {
        let response = self.client.post(self.collection_url()).json(draft).send().await;
        read_json(response)
            .await
            .inspect_err(|e| log::error!("Error creating action: {e}"))
    }

    async fn update(&self, id: ActionId, draft: &ActionDraft) -> Result<Action, ApiError> {
        let response = self.client.put(self.item_url(id)).json(draft).send().await;
        read_json(response)
            .await
            .inspect_err(|e| log::error!("Error updating action {id}: {e}"))
    }

    async fn delete(&self, id: ActionId) -> Result<(), ApiError> {
        let response = self.client.delete(self.item_url(id)).send().await;
        response
            .map_err(transport)
            .and_then(ensure_success)
            .map(|_| ())
            .inspect_err(|e| log::error!("Error deleting action {id}: {e}"))
    }

    async fn ping(&self) -> Result<(), ApiError> {
        reach(&self.client, &self.config.health_url()).await
    }
}

/// Any answer from `url` is success; only a failed fetch is an error.
#[cfg(target_arch = "wasm32")]
async fn reach(_client: &Client, url: &str) -> Result<(), ApiError> {
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{RequestInit, RequestMode};

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let init = RequestInit::new();
    init.set_mode(RequestMode::NoCors);

    // The opaque response is never inspected, only whether the promise resolved
    JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map(|_| ())
        .map_err(|e| ApiError::Network(format!("{e:?}")))
}

#[cfg(not(target_arch = "wasm32"))]
async fn reach(client: &Client, url: &str) -> Result<(), ApiError> {
    client.get(url).send().await.map(|_| ()).map_err(transport)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_urls() {
        let api = HttpActionsApi::new(ClientConfig::default());
        assert_eq!(api.collection_url(), "http://localhost:8000/api/actions/");
        assert_eq!(api.item_url(42), "http://localhost:8000/api/actions/42/");
    }
}
