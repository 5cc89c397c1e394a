use serde::{Deserialize, Serialize};

use crate::chat::types::ChatUser;

#[derive(Debug, Default, Deserialize)]
pub struct SlackUserProfile {
    pub real_name: Option<String>,
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SlackUser {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_bot: bool,
    #[serde(default)]
    pub deleted: bool,
    pub real_name: Option<String>,
    #[serde(default)]
    pub profile: SlackUserProfile,
}

impl SlackUser {
    /// Whether this account belongs to a person who can be reminded
    pub fn is_active_human(&self) -> bool {
        !self.is_bot && !self.deleted
    }
}

fn non_empty(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|v| !v.trim().is_empty())
}

impl From<SlackUser> for ChatUser {
    fn from(user: SlackUser) -> Self {
        let display_name = non_empty(&user.profile.real_name)
            .or(non_empty(&user.real_name))
            .or(non_empty(&user.profile.display_name))
            .cloned()
            .unwrap_or_else(|| user.name.clone());

        ChatUser {
            id: user.id,
            username: user.name,
            display_name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ResponseMetadata {
    pub next_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SlackUsersResponse {
    pub ok: bool,
    pub error: Option<String>,
    #[serde(default)]
    pub members: Vec<SlackUser>,
    pub response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleMessageBody {
    pub channel: String,
    pub text: String,
    pub post_at: i64,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleMessageResponse {
    pub ok: bool,
    pub error: Option<String>,
    pub scheduled_message_id: Option<String>,
}
