//! Levenshtein edit distance and similarity ratio.
//!
//! Backing metric for the spell corrector: a misspelled query word is
//! replaced by the vocabulary entry with the highest similarity ratio.

/// Case-insensitive edit distance between two strings.
pub fn distance(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.to_lowercase().chars().collect();
    let b: Vec<char> = s2.to_lowercase().chars().collect();

    let mut costs: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.iter().enumerate() {
        let mut last = i;
        costs[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let new = if ca == cb {
                last
            } else {
                last.min(costs[j]).min(costs[j + 1]) + 1
            };
            last = costs[j + 1];
            costs[j + 1] = new;
        }
    }
    costs[b.len()]
}

/// Similarity ratio in [0, 1], rounded to two decimal places:
/// `(longer_len - distance) / longer_len`. Two empty strings are identical.
pub fn ratio(s1: &str, s2: &str) -> f64 {
    let big_len = s1.chars().count().max(s2.chars().count());
    if big_len == 0 {
        return 1.0;
    }
    let d = distance(s1, s2);
    let raw = (big_len - d) as f64 / big_len as f64;
    (raw * 100.0).round() / 100.0
}

/// Pick the candidate most similar to `word`, or `None` for an empty list.
/// Ties keep the earliest candidate.
pub fn most_similar<'a>(word: &str, candidates: &'a [String]) -> Option<&'a str> {
    let mut best: Option<(&str, f64)> = None;
    for candidate in candidates {
        let r = ratio(candidate, word);
        if best.is_none_or(|(_, br)| r > br) {
            best = Some((candidate.as_str(), r));
        }
    }
    let chosen = best.map(|(w, _)| w);
    if let Some(w) = chosen {
        tracing::debug!(word, chosen = w, "most similar vocabulary word");
    }
    chosen
}
