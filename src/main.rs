mod cli;

use log::info;
use query_helpers::config::Config;
use query_helpers::error::{self, Result};
use query_helpers::logging::{self, Severity};
use std::path::Path;

/// 命令行开关对应的日志级别
fn flag_severity(verbose: bool, quiet: bool) -> Option<Severity> {
    if verbose {
        Some(Severity::Debug)
    } else if quiet {
        Some(Severity::Error)
    } else {
        None
    }
}

fn main() {
    use clap::Parser;
    let cli = cli::opts::Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &cli::opts::Cli) -> Result<()> {
    let flag_level = flag_severity(cli.verbose, cli.quiet);

    match &cli.command {
        Some(cli::opts::Commands::Init { output, force }) => {
            // 不读取配置文件，但仍遵循 LOG_LEVEL 与命令行开关
            let mut cfg = Config::default();
            apply_level_overrides(&mut cfg, flag_level);
            cfg.validate()?;
            logging::init_logging(cfg.logging.level().parse()?)?;
            cli::init::handle_init(output, *force)
        }
        Some(cli::opts::Commands::Completions { shell }) => {
            cli::opts::Cli::generate_completions(*shell);
            Ok(())
        }
        Some(cli::opts::Commands::Query {
            file,
            config,
            params,
        }) => {
            let cfg = prepare(config, flag_level)?;
            cli::query::handle_query(&cfg, file.as_deref(), params)
        }
        Some(cli::opts::Commands::Validate { config }) => {
            let cfg = prepare(config, flag_level)?;
            eprintln!("Configuration validation passed");
            cli::validate::handle_validate(&cfg)
        }
        None => {
            print_help();
            std::process::exit(1);
        }
    }
}

/// 加载配置并初始化日志：配置文件 < LOG_LEVEL 环境变量 < 命令行开关
fn prepare(config_path: &str, flag_level: Option<Severity>) -> Result<Config> {
    let mut cfg = load_config(config_path)?;
    apply_level_overrides(&mut cfg, flag_level);
    cfg.validate()?;

    logging::init_from_config(&cfg.logging)?;
    info!("Application started");

    Ok(cfg)
}

fn apply_level_overrides(cfg: &mut Config, flag_level: Option<Severity>) {
    cfg.apply_env_overrides();
    if let Some(level) = flag_level {
        cfg.logging.level = level.as_str().to_string();
    }
}

fn load_config(config_path: &str) -> Result<Config> {
    let path = Path::new(config_path);
    match Config::from_file(path) {
        Ok(c) => {
            eprintln!("Loaded settings file: {config_path}");
            Ok(c)
        }
        Err(e) => {
            if let error::Error::Config(error::ConfigError::NotFound(_)) = &e {
                eprintln!("Settings file not found: {config_path}, using default settings");
                eprintln!("Tip: run 'query-helpers init' to generate a settings file");
                Ok(Config::default())
            } else {
                Err(e)
            }
        }
    }
}

fn print_help() {
    eprintln!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("query-helpers - SQL query loading helpers");
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("\nUsage: query-helpers <COMMAND> [OPTIONS]");
    eprintln!("\nCommands:");
    eprintln!("  query        Load a SQL file and print it as one line");
    eprintln!("  init         Generate a default settings file");
    eprintln!("  validate     Validate a settings file");
    eprintln!("  completions  Generate shell completion scripts");
    eprintln!("\nOptions:");
    eprintln!("  -v, --verbose   Enable verbose output (debug level)");
    eprintln!("  -q, --quiet     Suppress non-error output");
    eprintln!("  -h, --help      Print help information");
    eprintln!("  -V, --version   Print version information");
    eprintln!("\nExamples:");
    eprintln!("  # Initialize settings");
    eprintln!("  query-helpers init");
    eprintln!("\n  # Load a query with debug logging");
    eprintln!("  query-helpers -v query queries/report.sql");
    eprintln!("\n  # Substitute parameters");
    eprintln!("  query-helpers query queries/report.sql -p day=2022-06-21");
    eprintln!("\n  # Log level from the environment");
    eprintln!("  LOG_LEVEL=DEBUG query-helpers query queries/report.sql");
    eprintln!("\nFor more help: query-helpers --help");
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
}
