//! Implements the ChatDirectory trait for Slack
use async_trait::async_trait;
use log::*;
use reqwest::{
    Client, Response,
    header::{HeaderMap, HeaderValue},
};
use secrecy::{ExposeSecret, SecretString};
use std::env;

use crate::{
    chat::{
        slack::types::{
            ScheduleMessageBody, ScheduleMessageResponse, SlackUser,
            SlackUsersResponse,
        },
        traits::ChatDirectory,
        types::{ChatUser, ScheduleMessageRequest},
    },
    error::ReminderError,
    result::Result,
};

pub const SLACK_TOKEN_ENV_VAR: &str = "SLACK_TOKEN";
pub const SLACK_API_BASE_URL: &str = "https://slack.com/api";
const USERS_PAGE_LIMIT: u32 = 200;

/// Turns client and server error statuses into [`ReminderError::Http`].
async fn error_for_status(response: Response) -> Result<Response> {
    let status = response.status();

    if status.is_client_error() || status.is_server_error() {
        let message = response.text().await.unwrap_or_default();
        return Err(ReminderError::http(status.as_u16(), message).into());
    }

    Ok(response)
}

/// Slack Web API client authenticated with a bot token.
pub struct SlackClient {
    client: Client,
    base_url: String,
}

impl SlackClient {
    /// Create a client from an explicit token, falling back to the
    /// `SLACK_TOKEN` environment variable.
    pub fn new(token: Option<SecretString>) -> Result<Self> {
        let token = token
            .filter(|t| !t.expose_secret().is_empty())
            .or_else(|| {
                env::var(SLACK_TOKEN_ENV_VAR)
                    .ok()
                    .filter(|t| !t.is_empty())
                    .map(SecretString::from)
            })
            .ok_or_else(|| {
                ReminderError::MissingToken(format!(
                    "must provide slack token or set {SLACK_TOKEN_ENV_VAR}"
                ))
            })?;

        let mut headers = HeaderMap::new();

        let mut token_value = HeaderValue::from_str(&format!(
            "Bearer {}",
            token.expose_secret()
        ))?;
        token_value.set_sensitive(true);

        headers.append("Authorization", token_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: SLACK_API_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API root, e.g. a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn get_users(&self) -> Result<Vec<SlackUser>> {
        let mut all_users = vec![];
        let mut cursor: Option<String> = None;

        loop {
            let mut req =
                reqwest::Url::parse(&format!("{}/users.list", self.base_url))?;

            {
                let mut queries = req.query_pairs_mut();
                queries.append_pair("limit", &USERS_PAGE_LIMIT.to_string());
                if let Some(c) = &cursor {
                    queries.append_pair("cursor", c);
                }
            }

            let response = self.client.get(req).send().await?;

            let response = error_for_status(response)
                .await?
                .json::<SlackUsersResponse>()
                .await?;

            if !response.ok {
                let reason = response.error.unwrap_or_default();
                return Err(ReminderError::SlackApi(reason).into());
            }

            all_users.extend(response.members);

            // an empty cursor marks the last page
            cursor = response
                .response_metadata
                .and_then(|meta| meta.next_cursor)
                .filter(|c| !c.is_empty());

            if cursor.is_none() {
                break;
            }
        }

        Ok(all_users)
    }
}

#[async_trait]
impl ChatDirectory for SlackClient {
    async fn list_users(&self) -> Result<Vec<ChatUser>> {
        let users = self.get_users().await?;

        info!("found {} users from slack", users.len());

        Ok(users
            .into_iter()
            .filter(SlackUser::is_active_human)
            .map(ChatUser::from)
            .collect())
    }

    async fn schedule_message(
        &self,
        req: ScheduleMessageRequest,
    ) -> Result<()> {
        let endpoint = format!("{}/chat.scheduleMessage", self.base_url);

        let body = ScheduleMessageBody {
            channel: req.channel.clone(),
            text: req.text,
            post_at: req.post_at,
        };

        let response = self.client.post(endpoint).json(&body).send().await?;

        let response = error_for_status(response)
            .await?
            .json::<ScheduleMessageResponse>()
            .await?;

        if !response.ok {
            let reason = response
                .error
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(ReminderError::SlackApi(reason).into());
        }

        info!(
            "scheduled message {} in channel {} for {}",
            response.scheduled_message_id.unwrap_or_default(),
            req.channel,
            req.post_at
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;

    fn client(server: &mockito::ServerGuard) -> SlackClient {
        SlackClient::new(Some(SecretString::from("xoxb-test".to_string())))
            .unwrap()
            .with_base_url(server.url())
    }

    #[tokio::test]
    #[test_log::test]
    async fn lists_active_users_across_pages() {
        let mut server = mockito::Server::new_async().await;

        let first_page = server
            .mock("GET", "/users.list")
            .match_header("authorization", "Bearer xoxb-test")
            .match_query(Matcher::Exact("limit=200".into()))
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "ok": true,
                    "members": [
                        {"id": "U12345", "name": "gschneel",
                         "profile": {"real_name": "George Schneeloch"}},
                        {"id": "B1", "name": "robot", "is_bot": true,
                         "profile": {"real_name": "Robot"}}
                    ],
                    "response_metadata": {"next_cursor": "page2"}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let second_page = server
            .mock("GET", "/users.list")
            .match_query(Matcher::Exact("limit=200&cursor=page2".into()))
            .with_header("content-type", "application/json")
            .with_body(
                serde_json::json!({
                    "ok": true,
                    "members": [
                        {"id": "U65432", "name": "shaidar",
                         "profile": {"real_name": "Sar Haidar"}}
                    ],
                    "response_metadata": {"next_cursor": ""}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let users = client(&server).list_users().await.unwrap();

        first_page.assert_async().await;
        second_page.assert_async().await;

        let names: Vec<&str> =
            users.iter().map(|u| u.display_name.as_str()).collect();
        assert_eq!(names, vec!["George Schneeloch", "Sar Haidar"]);
    }

    #[tokio::test]
    async fn reports_http_errors_with_status() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/users.list")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let err = client(&server).list_users().await.unwrap_err();
        let err = err.downcast_ref::<ReminderError>().unwrap();
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn reports_slack_api_errors() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/users.list")
            .match_query(Matcher::Any)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": false, "error": "invalid_auth"}"#)
            .create_async()
            .await;

        let err = client(&server).list_users().await.unwrap_err();
        assert!(err.to_string().contains("invalid_auth"));
    }

    #[tokio::test]
    async fn schedules_messages() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/chat.scheduleMessage")
            .match_body(Matcher::Json(serde_json::json!({
                "channel": "C123",
                "text": "<@U1>, please check off your commits",
                "post_at": 1491213600
            })))
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": true, "scheduled_message_id": "Q1"}"#)
            .create_async()
            .await;

        client(&server)
            .schedule_message(ScheduleMessageRequest {
                channel: "C123".into(),
                text: "<@U1>, please check off your commits".into(),
                post_at: 1491213600,
            })
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn schedule_message_fails_when_slack_refuses() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("POST", "/chat.scheduleMessage")
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok": false, "error": "time_in_past"}"#)
            .create_async()
            .await;

        let result = client(&server)
            .schedule_message(ScheduleMessageRequest {
                channel: "C123".into(),
                text: "hi".into(),
                post_at: 0,
            })
            .await;

        assert!(result.unwrap_err().to_string().contains("time_in_past"));
    }

    #[test]
    fn explicit_token_is_accepted() {
        let token = SecretString::from("xoxb-1".to_string());
        assert!(SlackClient::new(Some(token)).is_ok());
    }
}
