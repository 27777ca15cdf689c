use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a tag cloud run. None of these are retried.
#[derive(Debug, Error)]
pub enum TagCloudError {
    #[error("cannot open input file {}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot read input file {}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("number of words must be a positive integer, got '{0}'")]
    InvalidWordCount(String),
    #[error("font range is empty: min {min} is larger than max {max}")]
    InvalidFontRange { min: u32, max: u32 },
    #[error("cannot write output file {}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read answer from standard input")]
    Prompt(#[from] io::Error),
}
