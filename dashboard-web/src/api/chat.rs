//! Agent hub chat endpoints.

use shared::dto::chat::{AgentProfile, ChatReply, ChatRequest};

use crate::api::client::ApiClient;
use crate::api::error::ApiError;

impl ApiClient {
    pub async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        self.post("/chat", request).await
    }

    pub async fn agents(&self) -> Result<Vec<AgentProfile>, ApiError> {
        self.get("/agents").await
    }
}
