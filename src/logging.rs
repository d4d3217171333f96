use crate::config::LoggingConfig;
use crate::constants::LOG_LEVELS;
use crate::error::{ConfigError, Error, FileError, LoggingError, Result};
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

/// 日志严重级别，按 Trace < Debug < Info < Warning < Error < Critical 排序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// 对应的 `log` 过滤级别。`log` 没有比 error 更高的级别，Critical 归入 Error
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Severity::Trace => LevelFilter::Trace,
            Severity::Debug => LevelFilter::Debug,
            Severity::Info => LevelFilter::Info,
            Severity::Warning => LevelFilter::Warn,
            Severity::Error | Severity::Critical => LevelFilter::Error,
        }
    }

    /// 规范名称
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = Error;

    /// 解析日志级别字符串（大小写不敏感）
    fn from_str(level_str: &str) -> Result<Self> {
        match level_str.trim().to_ascii_lowercase().as_str() {
            "trace" | "notset" => Ok(Severity::Trace),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "critical" | "fatal" => Ok(Severity::Critical),
            _ => Err(Error::Config(ConfigError::InvalidLogLevel {
                level: level_str.to_string(),
                valid_levels: LOG_LEVELS.iter().map(|s| (*s).to_string()).collect(),
            })),
        }
    }
}

/// 初始化日志系统，输出到 stderr
///
/// 每个进程只能成功调用一次，之后的调用返回 [`LoggingError::AlreadyInitialized`]。
pub fn init_logging(severity: Severity) -> Result<()> {
    install(severity, Target::Stderr)
}

/// 按配置初始化日志系统；配置了 `file` 时追加写入该文件
pub fn init_from_config(config: &LoggingConfig) -> Result<()> {
    let severity: Severity = config.level().parse()?;

    let target = match config.file() {
        Some(file) => Target::Pipe(Box::new(open_log_file(Path::new(file))?)),
        None => Target::Stderr,
    };

    install(severity, target)?;

    log::debug!(
        "Logging initialized - level: {severity}, output: {}",
        config.file().unwrap_or("stderr")
    );

    Ok(())
}

fn install(severity: Severity, target: Target) -> Result<()> {
    Builder::new()
        .filter_level(severity.level_filter())
        .target(target)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|_| Error::Logging(LoggingError::AlreadyInitialized))
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    // 创建日志目录（如果不存在）
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::File(FileError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    reason: e.to_string(),
                })
            })?;
        }
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            Error::Logging(LoggingError::OpenFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_names() {
        assert_eq!("DEBUG".parse::<Severity>().unwrap(), Severity::Debug);
        assert_eq!("INFO".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("WARNING".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("ERROR".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("CRITICAL".parse::<Severity>().unwrap(), Severity::Critical);
    }

    #[test]
    fn test_parse_aliases_and_case() {
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("Fatal".parse::<Severity>().unwrap(), Severity::Critical);
        assert_eq!("notset".parse::<Severity>().unwrap(), Severity::Trace);
        assert_eq!(" debug ".parse::<Severity>().unwrap(), Severity::Debug);
    }

    #[test]
    fn test_parse_unknown_level() {
        let err = "verbose".parse::<Severity>().unwrap_err();
        match err {
            Error::Config(ConfigError::InvalidLogLevel {
                level,
                valid_levels,
            }) => {
                assert_eq!(level, "verbose");
                assert!(valid_levels.contains(&"critical".to_string()));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_every_listed_level_parses() {
        for name in LOG_LEVELS {
            assert!(name.parse::<Severity>().is_ok(), "{name} should parse");
        }
    }

    #[test]
    fn test_ordering_and_filters() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Error < Severity::Critical);
        assert_eq!(Severity::Warning.level_filter(), LevelFilter::Warn);
        assert_eq!(Severity::Critical.level_filter(), LevelFilter::Error);
        assert_eq!(Severity::Trace.level_filter(), LevelFilter::Trace);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        assert_eq!(Severity::Warning.to_string(), "WARNING");
        assert_eq!(
            Severity::Critical.to_string().parse::<Severity>().unwrap(),
            Severity::Critical
        );
    }
}
