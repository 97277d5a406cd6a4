//! Extract command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use conceptrie_core::{ConceptExtractor, ConceptMatch};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{load_dictionary, resolve_patterns, TokenStream};
use crate::output::{OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Concept dictionary (text: one concept per line; .json: array of token arrays)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub dictionary: PathBuf,

    /// Input token files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from configuration, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Process input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel processing
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting concept extraction");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let format = self.resolve_format(&config)?;

        let concepts = load_dictionary(&self.dictionary, &config.dictionary)?;
        let extractor = ConceptExtractor::new(concepts);
        let trie = extractor.trie();
        log::info!(
            "Dictionary ready: {} concepts, longest {} tokens",
            trie.len(),
            trie.max_depth()
        );
        if trie.has_empty_concept() {
            log::warn!("Dictionary contains the empty concept; it is never reported as a match");
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Processing {} file(s)", files.len());

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout())),
        };
        let mut formatter = format.formatter(writer, config.output.pretty_json);

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let total = if self.parallel {
            self.run_parallel(&extractor, &files, &config, formatter.as_mut(), &progress)?
        } else {
            if self.threads.is_some() {
                log::warn!("--threads has no effect without --parallel");
            }
            run_sequential(&extractor, &files, formatter.as_mut(), &progress)?
        };

        formatter.finish()?;
        progress.finish();

        log::info!("Found {} matches", total);
        Ok(())
    }

    /// Command-line format, else the configured default
    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }

    fn run_parallel(
        &self,
        extractor: &ConceptExtractor,
        files: &[PathBuf],
        config: &CliConfig,
        formatter: &mut dyn OutputFormatter,
        progress: &ProgressReporter,
    ) -> Result<usize> {
        let threads = self
            .threads
            .unwrap_or_else(|| config.performance.resolved_threads());
        log::debug!("Using {} worker threads", threads);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to build worker pool")?;

        let results: Vec<(String, Vec<ConceptMatch>)> = pool.install(|| {
            files
                .par_iter()
                .map(|path| -> Result<(String, Vec<ConceptMatch>)> {
                    let source = path.display().to_string();
                    let mut tokens = TokenStream::open(path)?;
                    let found = extractor.find_all(&mut tokens);
                    check_stream(&mut tokens, path)?;
                    log::debug!("{}: read {} bytes", source, tokens.bytes_read());
                    progress.file_completed(&source, found.len());
                    Ok((source, found))
                })
                .collect::<Result<Vec<_>>>()
        })?;

        let mut total = 0;
        for (source, found) in &results {
            for m in found {
                formatter.format_match(source, m)?;
            }
            total += found.len();
        }
        Ok(total)
    }
}

fn run_sequential(
    extractor: &ConceptExtractor,
    files: &[PathBuf],
    formatter: &mut dyn OutputFormatter,
    progress: &ProgressReporter,
) -> Result<usize> {
    let mut total = 0;

    for path in files {
        let source = path.display().to_string();
        let mut tokens = TokenStream::open(path)?;

        let mut count = 0;
        for found in extractor.extract(&mut tokens) {
            formatter.format_match(&source, &found)?;
            count += 1;
        }
        check_stream(&mut tokens, path)?;

        log::debug!(
            "{}: {} matches in {} bytes",
            source,
            count,
            tokens.bytes_read()
        );
        progress.file_completed(&source, count);
        total += count;
    }

    Ok(total)
}

fn check_stream<R: BufRead>(tokens: &mut TokenStream<R>, path: &Path) -> Result<()> {
    match tokens.take_error() {
        Some(err) => Err(CliError::ProcessingError(format!("{}: {}", path.display(), err)).into()),
        None => Ok(()),
    }
}
