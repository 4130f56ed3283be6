//! Weighted-ratio fuzzy string scoring.
//!
//! Scores are in `[0, 100]`. The building block is rapidfuzz's normalized
//! indel similarity (`ratio`); token and partial variants are combined by
//! [`weighted_ratio`] so that case, word order, extra words and small typos
//! are tolerated.

use std::collections::BTreeSet;

use rapidfuzz::distance::indel;

const UNBASE_SCALE: f64 = 0.95;

/// Lower-cases, replaces every non-alphanumeric character with a space and trims
pub fn preprocess(s: &str) -> String {
    let mapped: String = s
        .chars()
        .flat_map(|c| {
            let c = if c.is_alphanumeric() { c } else { ' ' };
            c.to_lowercase()
        })
        .collect();
    mapped.trim().to_string()
}

/// Normalized indel similarity of two strings
pub fn ratio(a: &str, b: &str) -> f64 {
    100.0 * indel::normalized_similarity(a.chars(), b.chars())
}

fn char_ratio(a: &[char], b: &[char]) -> f64 {
    100.0 * indel::normalized_similarity(a.iter().copied(), b.iter().copied())
}

/// Best `ratio` of the shorter string against any same-length window of the longer
///
/// Windows clipped at either end of the longer string are included, so a short
/// string matching a prefix or suffix still aligns.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return if long.is_empty() { 100.0 } else { 0.0 };
    }

    let m = short.len();
    let n = long.len();
    let mut best = 0.0f64;

    for k in 1..m {
        best = best
            .max(char_ratio(&short, &long[..k]))
            .max(char_ratio(&short, &long[n - k..]));
    }
    for start in 0..=(n - m) {
        best = best.max(char_ratio(&short, &long[start..start + m]));
        if best >= 100.0 {
            break;
        }
    }

    best
}

fn sorted_tokens(s: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens
}

fn token_set(s: &str) -> BTreeSet<&str> {
    s.split_whitespace().collect()
}

fn join(tokens: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    tokens
        .into_iter()
        .map(|t| t.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `ratio` after sorting the whitespace-separated tokens of both strings
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&join(sorted_tokens(a)), &join(sorted_tokens(b)))
}

/// Compares shared tokens against each side's full token set
///
/// Scores 100 when every token of one string appears in the other.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a = token_set(a);
    let tokens_b = token_set(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let sect: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let diff_ab: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let diff_ba: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    if !sect.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    let sect_joined = join(&sect);
    let with_sect = |diff: &[&str]| {
        if sect.is_empty() {
            join(diff)
        } else {
            format!("{} {}", sect_joined, join(diff))
        }
    };
    let combined_ab = with_sect(&diff_ab);
    let combined_ba = with_sect(&diff_ba);

    ratio(&combined_ab, &combined_ba)
        .max(ratio(&sect_joined, &combined_ab))
        .max(ratio(&sect_joined, &combined_ba))
}

/// `partial_ratio` over sorted tokens; 100 as soon as the strings share a word
pub fn partial_token_ratio(a: &str, b: &str) -> f64 {
    let tokens_a = token_set(a);
    let tokens_b = token_set(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }
    if !tokens_a.is_disjoint(&tokens_b) {
        return 100.0;
    }

    let sorted_a = sorted_tokens(a);
    let sorted_b = sorted_tokens(b);
    let best = partial_ratio(&join(&sorted_a), &join(&sorted_b));

    // Repeated words only change the comparison when the token lists had duplicates
    if sorted_a.len() == tokens_a.len() && sorted_b.len() == tokens_b.len() {
        return best;
    }
    best.max(partial_ratio(&join(&tokens_a), &join(&tokens_b)))
}

/// Combined similarity tolerant of case, word order, extra words and typos
///
/// Similar-length strings are compared whole and by tokens; when one string is
/// at least half again as long as the other, substring alignment is used and
/// scaled down, more so for very lopsided pairs.
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    let a = preprocess(a);
    let b = preprocess(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let len_a = a.chars().count() as f64;
    let len_b = b.chars().count() as f64;
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    let score = ratio(&a, &b);

    if len_ratio < 1.5 {
        let token_score = token_sort_ratio(&a, &b).max(token_set_ratio(&a, &b));
        return score.max(token_score * UNBASE_SCALE);
    }

    let partial_scale = if len_ratio < 8.0 { 0.9 } else { 0.6 };

    score
        .max(partial_ratio(&a, &b) * partial_scale)
        .max(partial_token_ratio(&a, &b) * UNBASE_SCALE * partial_scale)
}

/// Scores `query` against every choice and returns the best `limit` matches
///
/// Results are `(choice index, score)` ordered by descending score; equal
/// scores keep the order of `choices`.
pub fn extract<'a, I>(query: &str, choices: I, limit: usize) -> Vec<(usize, f64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut scored: Vec<(usize, f64)> = choices
        .into_iter()
        .enumerate()
        .map(|(index, choice)| (index, weighted_ratio(query, choice)))
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(limit);
    scored
}
