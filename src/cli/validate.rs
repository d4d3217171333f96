use log::info;

use query_helpers::config::Config;
use query_helpers::error::Result;
use query_helpers::logging::Severity;

/// 验证配置文件
pub fn handle_validate(cfg: &Config) -> Result<()> {
    info!("Configuration validated in main");

    let severity: Severity = cfg.logging.level().parse()?;
    info!("Log level: {} (filter: {})", severity, severity.level_filter());
    info!("Log output: {}", cfg.logging.file().unwrap_or("stderr"));

    match cfg.query.file() {
        Some(file) => info!("Default query file: {file}"),
        None => info!("Default query file: (none, pass FILE to the query command)"),
    }

    Ok(())
}
