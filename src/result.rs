//! Result type used throughout release-reminder.
//!
//! Every fallible function returns [`Result`], an alias for
//! `color_eyre::eyre::Result<T>`. Domain errors that callers need to
//! recognize are raised as [`crate::error::ReminderError`] and travel inside
//! the report, so they can be recovered with `downcast_ref`.
//!
//! ```rust,ignore
//! use color_eyre::eyre::WrapErr;
//! use crate::result::Result;
//!
//! fn load() -> Result<String> {
//!     let content = std::fs::read_to_string("release-reminder.toml")
//!         .wrap_err("failed to read configuration file")?;
//!     Ok(content)
//! }
//! ```

use color_eyre::eyre::Result as EyreResult;

/// Standard result type used throughout release-reminder.
pub type Result<T> = EyreResult<T>;
