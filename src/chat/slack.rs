/// Slack Web API client.
pub mod client;

/// Serde types for Slack Web API payloads.
pub mod types;

pub use client::SlackClient;
