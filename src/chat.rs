//! Chat service integration: account lookup, name matching and scheduled
//! messages.

/// Fuzzy matching of author names onto chat accounts.
pub mod matcher;

/// Slack implementation of the chat directory.
pub mod slack;

/// Trait abstracting the chat service.
pub mod traits;

/// Chat account and message types shared by all chat services.
pub mod types;
