use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use itertools::Itertools;

/// Longest words first; words of equal length in lexicographic order.
pub fn sort_matches(matches: HashSet<String>) -> Vec<String> {
    matches
        .into_iter()
        .sorted_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        })
        .collect_vec()
}

/// Write every word, one per line.
pub fn emit<W: Write>(words: &[String], out: W) -> io::Result<()> {
    let never = AtomicBool::new(false);
    emit_until(words, out, &never).map(|_| ())
}

/// Write one word per line. Returns `Ok(false)` if `stop` was raised
/// before every word was written.
pub fn emit_until<W: Write>(words: &[String], mut out: W, stop: &AtomicBool) -> io::Result<bool> {
    for word in words {
        if stop.load(Ordering::Relaxed) {
            out.flush()?;
            return Ok(false);
        }
        writeln!(out, "{}", word)?;
    }
    out.flush()?;
    Ok(true)
}
