use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::error::TagCloudError;
use crate::font::FontScale;
use crate::html::DEFAULT_STYLESHEETS;
use crate::separators::SeparatorSet;

// Configuration struct passed to `run`; the core never prompts or reads args.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub word_count: usize,
    pub separators: SeparatorSet,
    pub font_scale: FontScale,
    pub stylesheets: Vec<String>,
    pub timestamp: bool,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, word_count: usize) -> Self {
        Config {
            input: input.into(),
            output: output.into(),
            word_count,
            separators: SeparatorSet::default(),
            font_scale: FontScale::default(),
            stylesheets: DEFAULT_STYLESHEETS.iter().map(|s| s.to_string()).collect(),
            timestamp: false,
        }
    }
}

/// Parses the number of words for the cloud. Anything but a positive integer
/// is rejected.
pub fn parse_word_count(s: &str) -> Result<usize, TagCloudError> {
    let trimmed = s.trim();
    match trimmed.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(TagCloudError::InvalidWordCount(trimmed.to_string())),
    }
}

/// Asks questions on `output` and reads one-line answers from `input`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter { input, output }
    }

    pub fn ask(&mut self, question: &str) -> Result<String, TagCloudError> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut s = String::new();
        if self.input.read_line(&mut s)? == 0 {
            return Err(TagCloudError::Prompt(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no answer before end of input",
            )));
        }
        Ok(s.trim().to_string())
    }

    pub fn input_file(&mut self) -> Result<PathBuf, TagCloudError> {
        self.ask("What is the name of input file?").map(PathBuf::from)
    }

    pub fn output_file(&mut self) -> Result<PathBuf, TagCloudError> {
        self.ask("What name do you want for output file?")
            .map(PathBuf::from)
    }

    pub fn word_count(&mut self) -> Result<usize, TagCloudError> {
        let answer =
            self.ask("What is the number of words to be included in the generated tag cloud?")?;
        parse_word_count(&answer)
    }
}
