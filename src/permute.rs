//! Candidate generation: every arrangement of the input letters.
//!
//! Letters are distinguished by position, so repeated letters produce
//! repeated strings which collapse in the returned set.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};

use itertools::Itertools;

/// All distinct lowercase arrangements of `min_length..=letters.len()` letters.
pub fn generate(letters: &[char], min_length: usize) -> HashSet<String> {
    let never = AtomicBool::new(false);
    generate_until(letters, min_length, &never).unwrap_or_default()
}

/// Like [`generate`], but gives up and returns `None` once `stop` is raised.
pub fn generate_until(
    letters: &[char],
    min_length: usize,
    stop: &AtomicBool,
) -> Option<HashSet<String>> {
    let mut candidates = HashSet::new();
    if min_length == 0 || min_length > letters.len() {
        return Some(candidates);
    }

    for len in min_length..=letters.len() {
        for arrangement in letters.iter().permutations(len) {
            if stop.load(Ordering::Relaxed) {
                return None;
            }
            let word: String = arrangement.into_iter().collect();
            candidates.insert(word.to_lowercase());
        }
    }
    Some(candidates)
}

/// Number of arrangements visited before deduplication:
/// sum of n!/(n-L)! for L in `min_length..=n`. Saturates at `u128::MAX`.
pub fn arrangement_count(n: usize, min_length: usize) -> u128 {
    let mut total: u128 = 0;
    for len in min_length.max(1)..=n {
        let count = ((n - len + 1)..=n)
            .map(|k| k as u128)
            .try_fold(1u128, |acc, k| acc.checked_mul(k))
            .unwrap_or(u128::MAX);
        total = total.saturating_add(count);
    }
    total
}
