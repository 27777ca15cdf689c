//! Tag cloud generation: count the words of a text file and render the most
//! frequent ones as HTML, with font size growing with frequency.
//!
//! The counting and ranking core (`tokenizer`, `word_count`, `ranking`,
//! `font`) does no I/O. [`run`] wires it to files.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use chrono::Local;
use log::debug;

mod config;
mod error;
mod font;
mod html;
mod persist;
mod ranking;
mod separators;
mod tokenizer;
mod word_count;

pub use config::{Config, Prompter, parse_word_count};
pub use error::TagCloudError;
pub use font::{DEFAULT_MAX_FONT, DEFAULT_MIN_FONT, FontScale, RankedEntry};
pub use html::{DEFAULT_STYLESHEETS, HtmlOptions, escape, render_html};
pub use persist::write_atomically;
pub use ranking::{cmp_ignore_case, select_top_n};
pub use separators::{DEFAULT_SEPARATORS, SeparatorSet};
pub use tokenizer::{Token, TokenKind, Tokens, next_word_or_separator};
pub use word_count::WordCount;

/// Selects the `n` most frequent words of `word_count` and gives each a font
/// size. The result is in alphabetical order.
pub fn build_cloud(word_count: WordCount, n: usize, scale: &FontScale) -> Vec<RankedEntry> {
    let selected = select_top_n(word_count, n);
    if let (Some(lo), Some(hi)) = (
        selected.iter().map(|(_, c)| *c).min(),
        selected.iter().map(|(_, c)| *c).max(),
    ) {
        debug!("selected counts range from {lo} to {hi}");
    }
    scale.assign(selected)
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub distinct_words: usize,
    pub total_words: usize,
    pub entries: Vec<RankedEntry>,
    pub output: PathBuf,
}

/// Reads `config.input`, builds the cloud and writes it to `config.output`.
/// The output file only appears if every step succeeded.
pub fn run(config: &Config) -> Result<RunSummary, TagCloudError> {
    let file = File::open(&config.input).map_err(|source| TagCloudError::InputNotFound {
        path: config.input.clone(),
        source,
    })?;
    let word_count =
        WordCount::from_reader(BufReader::new(file), &config.separators).map_err(|source| {
            TagCloudError::InputRead {
                path: config.input.clone(),
                source,
            }
        })?;

    let distinct_words = word_count.len();
    let total_words = word_count.total();
    let entries = build_cloud(word_count, config.word_count, &config.font_scale);

    let options = HtmlOptions {
        title_source: config.input.display().to_string(),
        requested: config.word_count,
        stylesheets: config.stylesheets.clone(),
        generated: config.timestamp.then(Local::now),
    };
    let html = render_html(&entries, &options);
    write_atomically(&config.output, &html)?;

    Ok(RunSummary {
        distinct_words,
        total_words,
        entries,
        output: config.output.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cloud_of_the_cat_sentence() {
        let seps = SeparatorSet::new(" .,");
        let wc = WordCount::from_lines(["the cat sat on the mat. the cat ran."], &seps);
        let cloud = build_cloud(wc, 3, &FontScale::default());

        let got: Vec<(&str, usize, u32)> = cloud
            .iter()
            .map(|e| (e.word.as_str(), e.count, e.font_size))
            .collect();
        assert_eq!(got, vec![("cat", 2, 29), ("mat", 1, 0), ("the", 3, 48)]);
    }

    #[test]
    fn mixed_case_comes_out_lowercase() {
        let wc = WordCount::from_lines(["Rust RUST rust Go GO"], &SeparatorSet::default());
        let cloud = build_cloud(wc, 5, &FontScale::default());
        assert_eq!(cloud.len(), 2);
        assert!(cloud.iter().all(|e| e.word == e.word.to_lowercase()));
        assert_eq!(cloud[0].word, "go");
        assert_eq!(cloud[1].word, "rust");
    }

    #[test]
    fn nothing_to_select() {
        assert!(build_cloud(WordCount::new(), 10, &FontScale::default()).is_empty());
    }
}
