//! Access to the source hosting service holding the release pull request.
//!
//! Provides token-based authentication, the open pull request listing used
//! to locate the release candidate, and authenticated repository URLs.

/// Configuration and authentication for the forge.
pub mod config;

/// GitHub API client implementation.
pub mod github;

/// Common traits for forge abstraction.
pub mod traits;

/// Shared data types for pull requests.
pub mod types;

/// Repository URL helpers.
pub mod url;
