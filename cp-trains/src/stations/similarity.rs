//! Approximate string matching for station names.
//!
//! Scores are in `0.0..=100.0`. The weighted [`score`] combines a plain
//! edit-distance ratio with token-based and partial-window variants so that
//! typos ("Lisboa Oriant"), reordered words ("Campanhã Porto") and
//! abbreviated names ("Porto" for "Porto-Campanhã") all score well.

use std::collections::BTreeSet;

use rapidfuzz::fuzz;

/// Lower-case, replace anything that is not alphanumeric with a space, and
/// collapse runs of whitespace.
pub fn preprocess(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalized Indel similarity of two strings (insertions and deletions
/// only, so a substitution costs two edits).
pub fn ratio(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    fuzz::ratio(a.chars(), b.chars()) * 100.0
}

/// Best [`ratio`] of `shorter` against every equally long window of `longer`.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let window = shorter.chars().count();
    let longer: Vec<char> = longer.chars().collect();
    if window == 0 {
        return 0.0;
    }

    longer
        .windows(window)
        .map(|w| ratio(shorter, &w.iter().collect::<String>()))
        .fold(0.0, f64::max)
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// [`ratio`] after sorting the words of both strings.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Compares the shared words of both strings against each full word set.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let join = |set: Vec<&&str>| set.into_iter().copied().collect::<Vec<_>>().join(" ");
    let common = join(tokens_a.intersection(&tokens_b).collect());
    let only_a = join(tokens_a.difference(&tokens_b).collect());
    let only_b = join(tokens_b.difference(&tokens_a).collect());

    let combine = |rest: &str| match (common.is_empty(), rest.is_empty()) {
        (true, _) => rest.to_string(),
        (false, true) => common.clone(),
        (false, false) => format!("{common} {rest}"),
    };
    let with_a = combine(&only_a);
    let with_b = combine(&only_b);

    ratio(&common, &with_a)
        .max(ratio(&common, &with_b))
        .max(ratio(&with_a, &with_b))
}

/// Weighted similarity of `query` against `choice`.
///
/// Both inputs are run through [`preprocess`] first. When one string is
/// much longer than the other the partial-window scorers are used, scaled
/// down so that a full match always beats a partial one.
pub fn score(query: &str, choice: &str) -> f64 {
    let a = preprocess(query);
    let b = preprocess(choice);

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 100.0;
    }

    let base = ratio(&a, &b);

    let len_a = a.chars().count() as f64;
    let len_b = b.chars().count() as f64;
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    if len_ratio < 1.5 {
        let tokens = token_sort_ratio(&a, &b).max(token_set_ratio(&a, &b)) * 0.95;
        return base.max(tokens);
    }

    let partial_scale = if len_ratio < 8.0 { 0.9 } else { 0.6 };
    let partial = partial_ratio(&a, &b) * partial_scale;
    let partial_tokens =
        partial_ratio(&sorted_tokens(&a), &sorted_tokens(&b)) * 0.95 * partial_scale;

    base.max(partial).max(partial_tokens)
}
