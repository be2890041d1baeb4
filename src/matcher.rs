use std::collections::HashSet;

/// Result of intersecting the dictionary with the candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Found(HashSet<String>),
    NoMatches,
}

pub fn intersect(dictionary: &HashSet<String>, candidates: &HashSet<String>) -> MatchOutcome {
    // Walk the smaller set, probe the larger one.
    let (small, large) = if dictionary.len() <= candidates.len() {
        (dictionary, candidates)
    } else {
        (candidates, dictionary)
    };
    let found: HashSet<String> = small
        .iter()
        .filter(|w| large.contains(*w))
        .cloned()
        .collect();

    if found.is_empty() {
        MatchOutcome::NoMatches
    } else {
        MatchOutcome::Found(found)
    }
}
