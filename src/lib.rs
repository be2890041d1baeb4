//! Find dictionary words that can be spelled from a rack of letters.
//!
//! The pipeline is load → generate → intersect → sort → emit. Business
//! outcomes (no matches, interrupted) are values of [`Outcome`]; only
//! unexpected failures travel as [`WordsError`].

use std::io::Write;

pub mod config;
pub mod dictionary;
pub mod error;
pub mod interrupt;
pub mod logger;
pub mod matcher;
pub mod permute;
pub mod report;

pub use config::{Cli, Config};
pub use error::WordsError;
pub use interrupt::{Interrupt, INTERRUPTED_MESSAGE};
pub use logger::Logger;
pub use matcher::MatchOutcome;

/// How a run ended, short of an unexpected error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// This many words were written.
    Reported(usize),
    NoMatches,
    Interrupted,
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Reported(_) | Outcome::Interrupted => 0,
            Outcome::NoMatches => 1,
        }
    }
}

/// Exit code for anything that ends up as a [`WordsError`].
pub const UNEXPECTED_ERROR_EXIT: u8 = 255;

pub fn run<W: Write>(
    config: &Config,
    logger: &mut Logger,
    interrupt: &Interrupt,
    out: W,
) -> Result<Outcome, WordsError> {
    logger.debug(format_args!("{:?}", config));

    let stop = interrupt.flag();
    let dictionary = match interrupt
        .blocking(|| dictionary::load_dictionary_file(&config.words_file, stop))?
    {
        Some(dictionary) => dictionary,
        None => return Ok(Outcome::Interrupted),
    };
    logger.debug(format_args!(
        "loaded {} words from {}",
        dictionary.len(),
        config.words_file.display()
    ));

    logger.debug(format_args!(
        "generating up to {} arrangements",
        permute::arrangement_count(config.letters.len(), config.min_word_length)
    ));
    let candidates =
        match permute::generate_until(&config.letters, config.min_word_length, stop) {
            Some(candidates) => candidates,
            None => return Ok(Outcome::Interrupted),
        };
    logger.debug(format_args!("{} distinct candidates", candidates.len()));

    let matches = match matcher::intersect(&dictionary, &candidates) {
        MatchOutcome::Found(matches) => matches,
        MatchOutcome::NoMatches => return Ok(Outcome::NoMatches),
    };
    logger.debug(format_args!("{} matches", matches.len()));

    let words = report::sort_matches(matches);
    let complete = report::emit_until(&words, out, stop)
        .map_err(|e| WordsError::io("writing report to", "<stdout>", e))?;
    if !complete {
        return Ok(Outcome::Interrupted);
    }
    Ok(Outcome::Reported(words.len()))
}
