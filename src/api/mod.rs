//! Actions API
//!
//! The REST collaborator behind the tracker, organized as a trait so the shell
//! can be driven by the HTTP client or by an in-memory stand-in.

mod http;

use thiserror::Error;

use crate::models::{Action, ActionDraft, ActionId};

pub use http::HttpActionsApi;

/// Transport or protocol failure of a single call. Only success/failure is acted on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server responded with status {status}")]
    Status { status: u16 },
    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// CRUD calls against `/api/actions/` plus the root liveness ping.
///
/// No retry, backoff or timeout: a failed call surfaces immediately.
#[allow(async_fn_in_trait)]
pub trait ActionsApi {
    /// All actions, in server order
    async fn list(&self) -> Result<Vec<Action>, ApiError>;

    /// The created action, with its server-assigned id
    async fn create(&self, draft: &ActionDraft) -> Result<Action, ApiError>;

    async fn update(&self, id: ActionId, draft: &ActionDraft) -> Result<Action, ApiError>;

    async fn delete(&self, id: ActionId) -> Result<(), ApiError>;

    /// Ok if the server root answered at all
    async fn ping(&self) -> Result<(), ApiError>;
}
