//! Parses the author checklist embedded in a release pull request body.
//!
//! The body groups commits under one markdown header per author:
//!
//! ```text
//! ## Alice Pote
//!   - [x] Implemented AutomaticEmail API ([5de04973](../commit/5de0497...))
//!   - [ ] Unmarked some files as executable ([c665a2c7](../commit/c665a2c...))
//! ```
//!
//! Anything that doesn't fit this dialect is skipped rather than reported.
use regex::Regex;
use std::sync::LazyLock;

/// Matches an author section header, e.g. `## Alice Pote`
static HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*##\s+(?<name>.*\S)\s*$").unwrap());

/// Matches a checklist item with a single mark character, e.g. `- [x] title`
static ITEM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*-\s+\[(?<mark>.)\]\s+(?<title>.*)$").unwrap()
});

/// Matches the short-hash commit link appended to each item title
static COMMIT_LINK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\(\[[0-9a-fA-F]+\]\(\.\./commit/[0-9a-fA-F]+\)\)\s*$")
        .unwrap()
});

/// One checklist line of a release pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Whether the author checked the box
    pub checked: bool,
    /// Name from the section header this item appears under
    pub author_name: String,
    /// Item text without the trailing commit link
    pub title: String,
}

/// Scanner state while walking the body line by line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseState {
    /// No header seen yet, items are ignored
    NoAuthor,
    /// Items belong to the named author
    InAuthor(String),
}

/// Line classification for the scanner.
enum Line<'a> {
    Header(&'a str),
    Item { mark: char, title: &'a str },
    Other,
}

fn classify(line: &str) -> Line<'_> {
    if let Some(caps) = HEADER_REGEX.captures(line)
        && let Some(name) = caps.name("name")
    {
        return Line::Header(name.as_str().trim());
    }

    if let Some(caps) = ITEM_REGEX.captures(line)
        && let (Some(mark), Some(title)) =
            (caps.name("mark"), caps.name("title"))
        && let Some(mark) = mark.as_str().chars().next()
    {
        return Line::Item {
            mark,
            title: title.as_str(),
        };
    }

    Line::Other
}

/// Interprets a mark character: `x` is checked, a blank is unchecked and
/// anything else is not a checklist item.
fn parse_mark(mark: char) -> Option<bool> {
    match mark {
        'x' => Some(true),
        ' ' => Some(false),
        _ => None,
    }
}

/// Removes a trailing `([abc123](../commit/abc123...))` link from a title.
/// Inline references such as `(#1234)` are kept.
pub fn strip_commit_link(title: &str) -> String {
    COMMIT_LINK_REGEX.replace(title, "").trim().to_string()
}

/// Parses a release pull request body into checklist records, in the order
/// they appear. Lines before the first header and lines that are neither
/// headers nor well formed items are ignored.
pub fn parse_checkmarks(body: &str) -> Vec<CommitRecord> {
    let mut state = ParseState::NoAuthor;
    let mut records = vec![];

    for line in body.lines() {
        match classify(line) {
            Line::Header(name) => {
                state = ParseState::InAuthor(name.to_string());
            }
            Line::Item { mark, title } => {
                let ParseState::InAuthor(author) = &state else {
                    log::debug!("ignoring item before first header: {line}");
                    continue;
                };

                let Some(checked) = parse_mark(mark) else {
                    log::debug!("skipping item with unknown mark: {line}");
                    continue;
                };

                records.push(CommitRecord {
                    checked,
                    author_name: author.clone(),
                    title: strip_commit_link(title),
                });
            }
            Line::Other => {}
        }
    }

    records
}
