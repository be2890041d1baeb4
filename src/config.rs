use std::path::PathBuf;

use clap::Parser;

use crate::error::WordsError;

pub const DEFAULT_WORDS_FILE: &str = "/usr/share/dict/words";
pub const MIN_NUMBER_OF_LETTERS: usize = 1;

/// Find dictionary words that can be spelled with the given letters.
#[derive(Parser, Debug)]
#[command(name = "wordfinder", version)]
pub struct Cli {
    /// Write debug info to stderr
    #[arg(long)]
    pub debug: bool,

    /// Alternative dictionary file
    #[arg(short = 'f', long, value_name = "FILE", default_value = DEFAULT_WORDS_FILE)]
    pub words_file: PathBuf,

    /// Minimum length of the words to look for
    #[arg(short = 'm', long, value_name = "NUM", default_value_t = MIN_NUMBER_OF_LETTERS)]
    pub min_word_length: usize,

    /// Letters (e.g. "asdf")
    #[arg(value_name = "LETTERS")]
    pub letters: String,
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub letters: Vec<char>,
    pub words_file: PathBuf,
    pub min_word_length: usize,
    pub debug: bool,
}

impl TryFrom<Cli> for Config {
    type Error = WordsError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.min_word_length < MIN_NUMBER_OF_LETTERS {
            return Err(WordsError::Config(format!(
                "minimum word length must be at least {MIN_NUMBER_OF_LETTERS}"
            )));
        }
        let letters: Vec<char> = cli.letters.chars().collect();
        if letters.len() < cli.min_word_length {
            return Err(WordsError::Config(format!(
                "got {} letters but the minimum word length is {}",
                letters.len(),
                cli.min_word_length
            )));
        }
        Ok(Config {
            letters,
            words_file: cli.words_file,
            min_word_length: cli.min_word_length,
            debug: cli.debug,
        })
    }
}
