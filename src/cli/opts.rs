use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use query_helpers::constants::DEFAULT_SETTINGS_FILE;

/// SQL query helpers: load, flatten and parametrize SQL files
#[derive(Debug, Parser)]
#[command(
    name = "query-helpers",
    version,
    about = "Load SQL files as single-line queries, with log level taken from settings",
    long_about = "Reads a SQL file, strips newlines and surrounding whitespace from every line, joins the lines with single spaces and optionally substitutes {name} placeholders. The log level comes from the settings file or the LOG_LEVEL environment variable."
)]
pub struct Cli {
    /// Enable verbose output (debug level)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Suppress non-error output (error level only)
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load a SQL file and print it as a single-line query
    Query {
        /// SQL file to load (defaults to query.file from the settings)
        file: Option<String>,
        /// Settings file path
        #[arg(short = 'c', long = "config", default_value = DEFAULT_SETTINGS_FILE)]
        config: String,
        /// Query parameter as name=value, may be repeated
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Generate a default settings file
    Init {
        /// Output settings file path
        #[arg(short = 'o', long = "output", default_value = DEFAULT_SETTINGS_FILE)]
        output: String,
        /// Force overwrite if file exists
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
    /// Validate a settings file
    Validate {
        /// Settings file path
        #[arg(short = 'c', long = "config", default_value = DEFAULT_SETTINGS_FILE)]
        config: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Generate shell completions
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        let bin_name = cmd.get_name().to_string();
        generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
    }
}

/// 解析 `name=value` 形式的查询参数
fn parse_param(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("parameter name cannot be empty in '{raw}'"));
    }
    Ok((name.to_string(), value.to_string()))
}
