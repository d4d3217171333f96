use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration related error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// File operation error
    #[error("File error: {0}")]
    File(#[from] FileError),

    /// Query loading / rendering error
    #[error("Query error: {0}")]
    Query(#[from] QueryError),

    /// Logging setup error
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    /// Configuration file parse failed
    #[error("Failed to parse configuration file {path}: {reason}")]
    ParseFailed { path: PathBuf, reason: String },

    /// Invalid log level
    #[error("Invalid log level '{level}', valid values: {}", valid_levels.join(", "))]
    InvalidLogLevel {
        level: String,
        valid_levels: Vec<String>,
    },

    /// Invalid configuration value
    #[error("Invalid configuration value {field} = '{value}': {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// File already exists
    #[error("File already exists: {path} (use --force to replace)")]
    AlreadyExists { path: PathBuf },

    /// File write failed
    #[error("Failed to write file {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    /// Create directory failed
    #[error("Failed to create directory {path}: {reason}")]
    CreateDirectoryFailed { path: PathBuf, reason: String },
}

/// 查询读取与参数替换错误
#[derive(Debug, Error)]
pub enum QueryError {
    /// Query file does not exist
    #[error("Query file not found: {path}")]
    NotFound { path: PathBuf },

    /// Query file is not readable by the current user
    #[error("Permission denied reading query file: {path}")]
    PermissionDenied { path: PathBuf },

    /// Query file is not valid UTF-8
    #[error("Query file is not valid UTF-8: {path}")]
    InvalidEncoding { path: PathBuf },

    /// Any other read failure
    #[error("Failed to read query file {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    /// Placeholder without a value
    #[error("Missing value for query parameter '{name}'")]
    MissingParameter { name: String },

    /// Single `{` or `}` that is not part of a placeholder or escape
    #[error("Unbalanced brace in query at byte {position}")]
    UnbalancedBrace { position: usize },
}

/// 日志系统错误
#[derive(Debug, Error)]
pub enum LoggingError {
    /// A global logger has already been installed for this process
    #[error("Logging has already been initialized")]
    AlreadyInitialized,

    /// Log file could not be opened for appending
    #[error("Failed to open log file {path}: {reason}")]
    OpenFailed { path: PathBuf, reason: String },
}

/// 应用程序 Result 类型别名
pub type Result<T> = std::result::Result<T, Error>;

// 辅助宏，用于快速创建错误
#[macro_export]
macro_rules! config_error {
    ($variant:ident { $($field:ident: $value:expr),+ $(,)? }) => {
        $crate::error::Error::Config($crate::error::ConfigError::$variant {
            $($field: $value),+
        })
    };
}

#[macro_export]
macro_rules! query_error {
    ($variant:ident { $($field:ident: $value:expr),+ $(,)? }) => {
        $crate::error::Error::Query($crate::error::QueryError::$variant {
            $($field: $value),+
        })
    };
}
