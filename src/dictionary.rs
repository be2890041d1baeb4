use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::WordsError;

/// Read one word per line, lowercased and with trailing whitespace removed.
pub fn load_dictionary<R: BufRead>(reader: R) -> io::Result<HashSet<String>> {
    let never = AtomicBool::new(false);
    load_dictionary_until(reader, &never).map(Option::unwrap_or_default)
}

/// Like [`load_dictionary`], but returns `Ok(None)` once `stop` is raised.
/// The flag is checked before every line is read.
pub fn load_dictionary_until<R: BufRead>(
    reader: R,
    stop: &AtomicBool,
) -> io::Result<Option<HashSet<String>>> {
    let mut words = HashSet::new();
    let mut lines = reader.lines();
    loop {
        if stop.load(Ordering::Relaxed) {
            return Ok(None);
        }
        match lines.next() {
            Some(line) => {
                words.insert(line?.to_lowercase().trim_end().to_owned());
            }
            None => return Ok(Some(words)),
        }
    }
}

pub fn load_dictionary_file(
    path: &Path,
    stop: &AtomicBool,
) -> Result<Option<HashSet<String>>, WordsError> {
    let wordfile = File::open(path).map_err(|e| WordsError::io("opening words file", path, e))?;
    load_dictionary_until(BufReader::new(wordfile), stop)
        .map_err(|e| WordsError::io("reading words file", path, e))
}
