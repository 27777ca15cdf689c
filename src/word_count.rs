use std::collections::HashMap;
use std::collections::hash_map;
use std::io::{self, BufRead};

use log::debug;

use crate::separators::SeparatorSet;
use crate::tokenizer::{TokenKind, Tokens};

/// Occurrences of each lowercase word seen in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCount {
    counts: HashMap<String, usize>,
}

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercases and tokenizes one line, counting its word tokens. Lines are
    /// independent: a word broken across two lines counts as two words.
    pub fn add_line(&mut self, line: &str, separators: &SeparatorSet) {
        let line = line.to_lowercase();
        for token in Tokens::new(&line, separators) {
            if token.kind == TokenKind::Separator {
                continue;
            }
            match self.counts.get_mut(token.text) {
                Some(count) => *count += 1,
                None => {
                    self.counts.insert(token.text.to_string(), 1);
                }
            }
        }
    }

    pub fn from_lines<I, S>(lines: I, separators: &SeparatorSet) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut word_count = WordCount::new();
        for line in lines {
            word_count.add_line(line.as_ref(), separators);
        }
        word_count
    }

    /// Reads `reader` to the end, one line at a time.
    pub fn from_reader<R: BufRead>(reader: R, separators: &SeparatorSet) -> io::Result<Self> {
        let mut word_count = WordCount::new();
        let mut num_lines = 0usize;
        for line in reader.lines() {
            word_count.add_line(&line?, separators);
            num_lines += 1;
        }
        debug!(
            "read {num_lines} lines, {} distinct words, {} words in total",
            word_count.len(),
            word_count.total()
        );
        Ok(word_count)
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of word tokens seen.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }
}

impl IntoIterator for WordCount {
    type Item = (String, usize);
    type IntoIter = hash_map::IntoIter<String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
