/// A chat service account, as seen by the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatUser {
    /// Account id used to build mention tokens
    pub id: String,
    /// Login handle
    pub username: String,
    /// Full name shown in the chat client
    pub display_name: String,
}

impl ChatUser {
    /// Name the matcher compares against: the display name, or the username
    /// for accounts without one.
    pub fn match_name(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }

    /// Mention token that notifies this account, e.g. `<@U12345>`.
    pub fn mention(&self) -> String {
        mention_token(&self.id)
    }
}

/// Builds the literal mention token for an account id.
pub fn mention_token(id: &str) -> String {
    format!("<@{id}>")
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to post a message at a later time.
pub struct ScheduleMessageRequest {
    pub channel: String,
    pub text: String,
    /// Unix timestamp (seconds) the message should be posted at
    pub post_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_username_without_display_name() {
        let user = ChatUser {
            id: "U1".into(),
            username: "ghost".into(),
            display_name: " ".into(),
        };
        assert_eq!(user.match_name(), "ghost");
        assert_eq!(user.mention(), "<@U1>");
    }
}
