pub mod chat;
pub mod checklist;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod forge;
pub mod release;
pub mod reminder;
pub mod result;
pub mod schedule;

pub use chat::matcher::{match_user, reformatted_full_name};
pub use checklist::{CommitRecord, parse_checkmarks};
pub use error::ReminderError;
pub use forge::{types::ReleasePr, url::url_with_access_token};
pub use release::{get_release_pr, get_unchecked_authors};
pub use result::Result;
pub use schedule::next_workday_at_10;
