//! Traits related to chat services
use async_trait::async_trait;

use crate::{
    chat::types::{ChatUser, ScheduleMessageRequest},
    result::Result,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatDirectory: Send + Sync {
    /// Snapshot of the active human accounts of the workspace.
    async fn list_users(&self) -> Result<Vec<ChatUser>>;
    /// Ask the chat service to post a message at `req.post_at`.
    async fn schedule_message(
        &self,
        req: ScheduleMessageRequest,
    ) -> Result<()>;
}
