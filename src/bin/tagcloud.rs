//! Generate an HTML tag cloud of the most frequent words in a text file.
//!
//! Anything not given on the command line (input, output, number of words) is
//! asked for interactively.

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::{LevelFilter, info};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::io;
use std::path::PathBuf;
use tag_cloud::{
    Config, DEFAULT_MAX_FONT, DEFAULT_MIN_FONT, DEFAULT_SEPARATORS, DEFAULT_STYLESHEETS, FontScale,
    Prompter, SeparatorSet, parse_word_count,
};

/// The clap struct for parsing command-line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about = "Generate an HTML tag cloud from a text file", long_about = None)]
struct Args {
    /// Input text file (asked for if not given)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output HTML file (asked for if not given)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of words in the tag cloud (asked for if not given)
    #[arg(short = 'n', long = "words", value_parser = parse_word_count)]
    words: Option<usize>,

    /// Characters that separate words
    #[arg(short, long, default_value = DEFAULT_SEPARATORS)]
    separators: String,

    /// Font size of the least frequent word above the minimum count
    #[arg(long = "min-font", default_value_t = DEFAULT_MIN_FONT)]
    min_font: u32,

    /// Font size of the most frequent word
    #[arg(long = "max-font", default_value_t = DEFAULT_MAX_FONT)]
    max_font: u32,

    /// Stylesheet to link from the page; may be repeated
    #[arg(long = "stylesheet")]
    stylesheets: Vec<String>,

    /// Set verbosity level: 0 warnings only, 1 info, 2 debug, 3 trace
    #[arg(short, long, default_value_t = 1)]
    verbose: u8,

    /// Leave the generation time out of the page
    #[arg(long = "no-timestamp")]
    no_timestamp: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    // Stdout carries the prompts, so logs go to stderr.
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

impl Args {
    fn into_config<R: io::BufRead, W: io::Write>(
        self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Config> {
        let input = match self.input {
            Some(path) => path,
            None => prompter.input_file()?,
        };
        let output = match self.output {
            Some(path) => path,
            None => prompter.output_file()?,
        };
        let word_count = match self.words {
            Some(n) => n,
            None => prompter.word_count()?,
        };

        let mut config = Config::new(input, output, word_count);
        config.separators = SeparatorSet::new(&self.separators);
        config.font_scale = FontScale::new(self.min_font, self.max_font)?;
        config.stylesheets = if self.stylesheets.is_empty() {
            DEFAULT_STYLESHEETS.iter().map(|s| s.to_string()).collect()
        } else {
            self.stylesheets
        };
        config.timestamp = !self.no_timestamp;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    let config = args.into_config(&mut prompter)?;

    info!(
        "building a {}-word cloud from {} with {} separators",
        config.word_count,
        config.input.display(),
        config.separators.len()
    );

    let summary = tag_cloud::run(&config).with_context(|| {
        format!(
            "failed to generate tag cloud from {}",
            config.input.display()
        )
    })?;

    let time_str = Local::now().format("%x - %I:%M.%S%p");
    info!(
        "{time_str}, wrote {} of {} distinct words ({} in total) to {}",
        summary.entries.len(),
        summary.distinct_words,
        summary.total_words,
        summary.output.display()
    );

    Ok(())
}
