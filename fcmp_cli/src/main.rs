mod report;
mod switches;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use fcmp_common::{load_config, load_config_from, save_config, CompareOptions, MatchOutcome};
use fcmp_core::path::from_native;
use fcmp_core::{FileComparator, LocalLister, WildcardMatcher};
use report::{ConsoleReporter, StderrDiagnostics};
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fcmp")]
#[command(author = "fcmp Contributors")]
#[command(version)]
#[command(about = "Compare two files or sets of files and display the differences", long_about = None)]
struct Cli {
    /// First file or wildcard pattern
    left: String,

    /// Second file or wildcard pattern
    right: String,

    /// Display only the first and last lines for each set of differences (/A)
    #[arg(short, long)]
    abbreviated: bool,

    /// Perform a binary comparison (/B)
    #[arg(short, long)]
    binary: bool,

    /// Disregard the case of letters (/C)
    #[arg(short = 'c', long)]
    ignore_case: bool,

    /// Compare files as text, even those with binary extensions (/L)
    #[arg(short = 'l', long)]
    text: bool,

    /// Maximum consecutive mismatching lines before giving up (/LBn)
    #[arg(long, value_name = "N")]
    max_resync_lines: Option<usize>,

    /// Display line numbers in a text comparison (/N)
    #[arg(short = 'n', long)]
    line_numbers: bool,

    /// Do not skip files with the offline attribute set (/OFF[LINE])
    #[arg(long)]
    offline: bool,

    /// Do not expand tabs to spaces (/T)
    #[arg(short = 't', long)]
    keep_tabs: bool,

    /// Compare files as Unicode text (/U)
    #[arg(short = 'u', long)]
    unicode: bool,

    /// Compress whitespace (tabs and spaces) for comparison (/W)
    #[arg(short = 'w', long)]
    compress_whitespace: bool,

    /// Matching lines required to resynchronize after a difference (/nnnn)
    #[arg(long, value_name = "N")]
    resync_lines: Option<usize>,

    /// Configuration file to read instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Store the effective switches as defaults in the configuration file
    #[arg(long)]
    save_defaults: bool,
}

impl Cli {
    /// Command line switches layered over configured defaults
    fn merge_into(&self, defaults: CompareOptions) -> CompareOptions {
        CompareOptions {
            abbreviated: defaults.abbreviated || self.abbreviated,
            binary: defaults.binary || self.binary,
            ignore_case: defaults.ignore_case || self.ignore_case,
            force_text: defaults.force_text || self.text,
            max_resync_lines: self.max_resync_lines.unwrap_or(defaults.max_resync_lines),
            line_numbers: defaults.line_numbers || self.line_numbers,
            offline: defaults.offline || self.offline,
            keep_tabs: defaults.keep_tabs || self.keep_tabs,
            unicode: defaults.unicode || self.unicode,
            compress_whitespace: defaults.compress_whitespace || self.compress_whitespace,
            resync_lines: self.resync_lines.unwrap_or(defaults.resync_lines),
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = std::env::args_os().map(|arg| arg.to_string_lossy().into_owned());
    let args = match switches::translate_legacy_args(args) {
        Ok(args) => args,
        Err(e) => {
            debug!("{}", e);
            eprintln!("FC: Invalid Switch");
            std::process::exit(MatchOutcome::Invalid.exit_code());
        }
    };

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp => {
                // FC treats a usage request as an unfinished comparison
                let _ = e.print();
                std::process::exit(MatchOutcome::Invalid.exit_code());
            }
            ErrorKind::DisplayVersion => e.exit(),
            ErrorKind::MissingRequiredArgument => {
                eprintln!("FC: Insufficient number of file specifications");
                std::process::exit(MatchOutcome::Invalid.exit_code());
            }
            _ => {
                debug!("{}", e);
                eprintln!("FC: Invalid Switch");
                std::process::exit(MatchOutcome::Invalid.exit_code());
            }
        },
    };

    match run(cli) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            error!("Comparison failed: {:#}", e);
            std::process::exit(MatchOutcome::Invalid.exit_code());
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<MatchOutcome> {
    let loaded = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(false),
    }
    .context("loading configuration")?;
    debug!("Configuration {} (exists: {})", loaded.path.display(), loaded.exists);

    let mut config = loaded.config;
    let options = cli.merge_into(config.defaults.clone());
    if cli.save_defaults {
        config.defaults = options.clone();
        save_config(&loaded.path, &config)
            .with_context(|| format!("saving {}", loaded.path.display()))?;
        info!("Saved defaults to {}", loaded.path.display());
    }

    let left = from_native(&cli.left);
    let right = from_native(&cli.right);
    info!("Comparing {} with {}", left, right);

    let comparator =
        FileComparator::new(options.clone()).with_extra_binary_extensions(config.extra_binary_extensions);
    let mut reporter = ConsoleReporter::stdout(&options);
    let mut write_error = None;
    let mut compare_pair = |l: &str, r: &str| {
        let report = comparator.compare(l, r);
        let written = reporter
            .comparing(l, r)
            .and_then(|_| reporter.file_report(l, r, &report));
        if let Err(e) = written {
            if write_error.is_none() {
                write_error = Some(e);
            }
        }
        report.outcome()
    };

    let lister = LocalLister::new();
    let outcome = WildcardMatcher::new(&lister).compare_args(
        &left,
        &right,
        &mut compare_pair,
        &mut StderrDiagnostics,
    )?;

    if let Some(e) = write_error {
        return Err(e).context("writing output");
    }
    Ok(outcome)
}
