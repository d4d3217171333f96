use crate::config_error;
use crate::constants::{DEFAULT_LOG_LEVEL, ENV_LOG_LEVEL, LOG_LEVELS};
use crate::error::{ConfigError, Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::Config(ConfigError::NotFound(path.to_path_buf())))?;
        Self::from_str(&content, path.to_path_buf())
    }

    /// 从字符串解析配置
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str, path: PathBuf) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|e| {
            Error::Config(ConfigError::ParseFailed {
                path,
                reason: e.to_string(),
            })
        })?;

        config.validate()?;

        Ok(config)
    }

    /// 用环境变量 `LOG_LEVEL` 覆盖日志级别
    pub fn apply_env_overrides(&mut self) {
        self.apply_log_level_override(std::env::var(ENV_LOG_LEVEL).ok());
    }

    /// 覆盖日志级别；空白值视为未设置
    pub fn apply_log_level_override(&mut self, level: Option<String>) {
        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            self.logging.level = level.trim().to_string();
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()?;
        self.query.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// 日志级别名称（DEBUG / INFO / WARNING / ERROR / CRITICAL ...）
    #[serde(default = "default_log_level")]
    pub level: String,
    /// 可选的日志输出文件；未设置时写到 stderr
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl LoggingConfig {
    /// 获取日志级别
    pub fn level(&self) -> &str {
        &self.level
    }

    /// 获取日志输出文件路径
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// 验证日志级别是否有效
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS
            .iter()
            .any(|&l| l.eq_ignore_ascii_case(self.level.trim()))
        {
            return Err(Error::Config(ConfigError::InvalidLogLevel {
                level: self.level.clone(),
                valid_levels: LOG_LEVELS.iter().map(|s| (*s).to_string()).collect(),
            }));
        }

        if let Some(file) = &self.file {
            if file.trim().is_empty() {
                return Err(config_error!(InvalidValue {
                    field: "logging.file".to_string(),
                    value: file.clone(),
                    reason: "Log file path cannot be empty".to_string(),
                }));
            }
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// `query` 命令的默认输入
#[derive(Debug, Deserialize, Clone, Default)]
pub struct QueryConfig {
    /// 默认 SQL 文件
    #[serde(default)]
    pub file: Option<String>,
}

impl QueryConfig {
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// 验证配置
    pub fn validate(&self) -> Result<()> {
        if let Some(file) = &self.file {
            if file.trim().is_empty() {
                return Err(config_error!(InvalidValue {
                    field: "query.file".to_string(),
                    value: file.clone(),
                    reason: "Query file path cannot be empty".to_string(),
                }));
            }
        }
        Ok(())
    }
}
