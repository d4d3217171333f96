//! 公共常量
//! 提供：
//! - 合法日志级别常量 LOG_LEVELS
//! - 配置相关的默认值与环境变量名

/// 合法的日志级别（统一来源，大小写不敏感）
pub const LOG_LEVELS: &[&str] = &[
    "trace", "notset", "debug", "info", "warning", "warn", "error", "critical", "fatal",
];

/// 覆盖 `logging.level` 的环境变量
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// 默认日志级别
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// 默认配置文件路径
pub const DEFAULT_SETTINGS_FILE: &str = "settings.toml";
