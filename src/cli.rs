//! Command-line interface for tokenscope.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::analyze::{analyze_file, tokenize_file};
use crate::batch::{get_use_dependencies_by_folder, ClassIndex};
use crate::config::Config;
use crate::report;
use crate::sequence::trim;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Structural inspection of PHP source files.
///
/// Tokenscope tokenizes PHP-style source and extracts namespaces, class
/// names, inheritance, imports, properties and methods without building a
/// syntax tree.
#[derive(Parser)]
#[command(name = "tokenscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args)]
pub struct GlobalArgs {
    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Pretty)]
    pub format: Format,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Pretty,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract everything from one file
    Analyze {
        /// File to analyze
        file: PathBuf,
    },
    /// List the imports of a file or of every file in a directory
    #[command(visible_alias = "deps")]
    Uses {
        /// File or directory to scan
        path: PathBuf,
    },
    /// Dump the tokens of a file
    Tokens {
        /// File to tokenize
        file: PathBuf,
    },
    /// Find the file declaring a class
    Locate {
        /// Directory to index
        dir: PathBuf,
        /// Fully-qualified class name
        class: String,
    },
}

/// Load the config named on the command line or discovered in the working
/// directory.
fn load_config(global: &GlobalArgs) -> anyhow::Result<Config> {
    let cwd = std::env::current_dir()?;
    let (config, path) = Config::load(global.config.as_deref(), &cwd)?;
    if let Some(path) = path {
        tracing::debug!(config = %path.display(), "loaded config");
    }
    Ok(config)
}

/// Run the parsed command line.
pub fn run(cli: &Cli) -> anyhow::Result<i32> {
    let config = load_config(&cli.global)?;
    let format = cli.global.format;
    match &cli.command {
        Commands::Analyze { file } => run_analyze(file, &config, format),
        Commands::Uses { path } => run_uses(path, &config, format),
        Commands::Tokens { file } => run_tokens(file, &config, format),
        Commands::Locate { dir, class } => run_locate(dir, class, &config, format),
    }
}

/// Run the analyze command.
pub fn run_analyze(file: &Path, config: &Config, format: Format) -> anyhow::Result<i32> {
    let report = analyze_file(file, config)?;
    let path_str = file.to_string_lossy().to_string();
    match format {
        Format::Json => report::write_json(&report::analysis_json(&report))?,
        Format::Pretty => report::write_pretty_report(&path_str, &report),
    }
    Ok(EXIT_SUCCESS)
}

/// Run the uses command.
pub fn run_uses(path: &Path, config: &Config, format: Format) -> anyhow::Result<i32> {
    if !path.exists() {
        anyhow::bail!("cannot access path {:?}", path);
    }
    let outcome = get_use_dependencies_by_folder(path, config)?;
    if outcome.files_scanned == 0 {
        tracing::warn!(path = %path.display(), "no files to scan");
    }

    let path_str = path.to_string_lossy().to_string();
    match format {
        Format::Json => report::write_json(&report::dependencies_json(&path_str, &outcome))?,
        Format::Pretty => report::write_pretty_dependencies(&path_str, &outcome),
    }

    if outcome.is_complete() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}

/// Run the tokens command.
pub fn run_tokens(file: &Path, config: &Config, format: Format) -> anyhow::Result<i32> {
    let tokens = tokenize_file(file)?;
    let trim_prop = config.trim_prop()?;
    let tokens = trim(&tokens, trim_prop.as_ref());

    let path_str = file.to_string_lossy().to_string();
    match format {
        Format::Json => report::write_json(&report::tokens_json(&path_str, &tokens))?,
        Format::Pretty => report::write_pretty_tokens(&path_str, &tokens),
    }
    Ok(EXIT_SUCCESS)
}

/// Run the locate command. A class missing from the index is a failure.
pub fn run_locate(dir: &Path, class: &str, config: &Config, format: Format) -> anyhow::Result<i32> {
    let outcome = ClassIndex::build(dir, config)?;
    let file = outcome.value.file_for(class);

    match format {
        Format::Json => report::write_json(&report::location_json(class, file))?,
        Format::Pretty => report::write_pretty_location(class, file),
    }

    if file.is_some() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}
