//! Maps author display names from the release checklist onto chat accounts.
//!
//! Names in commits rarely match chat profiles exactly: people misspell
//! their own surnames, drop them, or commit under a nickname. Three
//! heuristics are tried in order of decreasing confidence, and each is
//! exposed on its own so ambiguous cases can be inspected:
//!
//! 1. [`edit_similarity`] of the full names, accepted above a threshold.
//!    The highest score wins, earlier candidates win ties.
//! 2. [`reduced_name_matches`]: "first name + last initial" equality.
//! 3. [`fragment_matches`]: a single-word query contained in the candidate
//!    name. The first candidate in list order wins.
use log::*;
use nucleo_matcher::{
    Config, Matcher, Utf32Str,
    pattern::{Atom, AtomKind, CaseMatching, Normalization},
};

use crate::chat::types::ChatUser;

/// Minimum edit similarity for a full-name match.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.8;
/// Shortest query, in characters, accepted as a name fragment.
pub const MIN_FRAGMENT_CHARS: usize = 3;

/// Heuristic that selected a candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchKind {
    /// Full names are within edit distance; carries the similarity
    EditDistance(f64),
    /// First names and last initials agree
    ReducedName,
    /// The single-word query is contained in the candidate's name
    Fragment,
}

/// Winning candidate of a match.
#[derive(Debug, Clone, PartialEq)]
pub struct UserMatch {
    /// Index into the candidate list
    pub user_index: usize,
    pub kind: MatchKind,
}

/// Levenshtein distance between two strings, counted in characters.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;

        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

/// Case-insensitive similarity in `[0, 1]` derived from the Levenshtein
/// distance: `1 - distance / max(len_a, len_b)`.
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let longest = a.chars().count().max(b.chars().count());

    if longest == 0 {
        return 1.0;
    }

    1.0 - levenshtein(&a, &b) as f64 / longest as f64
}

/// Reduces a full name to lowercase "first name + last initial".
///
/// Middle names are discarded: `"X Y Z A B"` becomes `"x b"`. A single
/// word is returned lowercased and an empty name stays empty.
pub fn reformatted_full_name(full_name: &str) -> String {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();

    match tokens.as_slice() {
        [] => String::new(),
        [only] => only.to_lowercase(),
        [first, .., last] => {
            let initial: String =
                last.chars().take(1).collect::<String>().to_lowercase();
            format!("{} {initial}", first.to_lowercase())
        }
    }
}

/// True when both names reduce to the same non-empty short form.
pub fn reduced_name_matches(query: &str, candidate: &str) -> bool {
    let reduced = reformatted_full_name(query);
    !reduced.is_empty() && reduced == reformatted_full_name(candidate)
}

/// True when `fragment` is a single word of at least
/// [`MIN_FRAGMENT_CHARS`] characters contained case-insensitively in
/// `candidate`.
pub fn fragment_matches(
    fragment: &str,
    candidate: &str,
    matcher: &mut Matcher,
) -> bool {
    let fragment = fragment.trim().to_lowercase();

    if fragment.chars().count() < MIN_FRAGMENT_CHARS
        || fragment.split_whitespace().count() != 1
    {
        return false;
    }

    let lowered = candidate.to_lowercase();

    // nucleo misses some non-ascii substrings past the first word
    if lowered.contains(&fragment) {
        return true;
    }

    let atom = Atom::new(
        &fragment,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Substring,
        false,
    );

    let mut buf = vec![];
    atom.score(Utf32Str::new(&lowered, &mut buf), matcher)
        .is_some()
}

/// Fuzzy matcher over a snapshot of chat accounts.
#[derive(Debug, Clone)]
pub struct UserMatcher {
    threshold: f64,
}

impl Default for UserMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MATCH_THRESHOLD)
    }
}

impl UserMatcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    fn best_by_edit_distance(
        &self,
        users: &[ChatUser],
        name: &str,
    ) -> Option<UserMatch> {
        let mut best: Option<UserMatch> = None;
        let mut best_score = f64::MIN;

        for (user_index, user) in users.iter().enumerate() {
            let score = edit_similarity(name, user.match_name());
            debug!("similarity {name} <-> {}: {score:.3}", user.match_name());

            // strict comparison keeps the earliest candidate on ties
            if score >= self.threshold && score > best_score {
                best_score = score;
                best = Some(UserMatch {
                    user_index,
                    kind: MatchKind::EditDistance(score),
                });
            }
        }

        best
    }

    /// Picks the account that best matches `name`, or `None` when no
    /// heuristic is confident enough.
    pub fn find_best_match(
        &self,
        users: &[ChatUser],
        name: &str,
    ) -> Option<UserMatch> {
        if name.trim().is_empty() {
            return None;
        }

        if let Some(found) = self.best_by_edit_distance(users, name) {
            return Some(found);
        }

        if let Some(user_index) = users
            .iter()
            .position(|u| reduced_name_matches(name, u.match_name()))
        {
            return Some(UserMatch {
                user_index,
                kind: MatchKind::ReducedName,
            });
        }

        let mut matcher = Matcher::new(Config::DEFAULT);

        users
            .iter()
            .position(|u| fragment_matches(name, u.match_name(), &mut matcher))
            .map(|user_index| UserMatch {
                user_index,
                kind: MatchKind::Fragment,
            })
    }

    /// Mention token (`<@ID>`) of the best matching account.
    pub fn mention(&self, users: &[ChatUser], name: &str) -> Option<String> {
        let found = self.find_best_match(users, name)?;
        let user = users.get(found.user_index)?;

        debug!(
            "matched {name} to {} ({}) via {:?}",
            user.match_name(),
            user.username,
            found.kind
        );

        Some(user.mention())
    }
}

/// Mention token of the account best matching `name`, using the default
/// threshold.
pub fn match_user(users: &[ChatUser], name: &str) -> Option<String> {
    UserMatcher::default().mention(users, name)
}
