//! Composes the chat message nudging authors to check off their commits.
use std::collections::HashSet;

use crate::{
    chat::{matcher::UserMatcher, types::ChatUser},
    forge::types::ReleasePr,
};

/// Message ready to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub text: String,
    /// Authors without a matching chat account, named in plain text
    pub unmatched: Vec<String>,
}

/// Builds the reminder for `authors`, mentioning each one whose name
/// matches a chat account. Returns `None` when nobody needs reminding.
pub fn build_reminder(
    matcher: &UserMatcher,
    users: &[ChatUser],
    authors: &HashSet<String>,
    release: &ReleasePr,
) -> Option<Reminder> {
    if authors.is_empty() {
        return None;
    }

    let mut sorted: Vec<&String> = authors.iter().collect();
    sorted.sort();

    let mut unmatched = vec![];

    let names: Vec<String> = sorted
        .into_iter()
        .map(|author| match matcher.mention(users, author) {
            Some(mention) => mention,
            None => {
                unmatched.push(author.clone());
                author.clone()
            }
        })
        .collect();

    let text = format!(
        "{}, please check off your commits for release {}: {}",
        names.join(", "),
        release.version,
        release.url
    );

    Some(Reminder { text, unmatched })
}
