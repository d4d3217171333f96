use log::{debug, error, info, warn};

use query_helpers::error::{Error, FileError, Result};
use std::fs;
use std::path::Path;

const DEFAULT_SETTINGS: &str = r#"# query-helpers 配置文件

[logging]
# 日志级别: TRACE, DEBUG, INFO, WARNING, ERROR, CRITICAL
# 环境变量 LOG_LEVEL 会覆盖此值
level = "INFO"
# 日志输出文件（不设置则输出到 stderr）
# file = "logs/query-helpers.log"

[query]
# query 命令未指定文件时使用的 SQL 文件
# file = "queries/report.sql"
"#;

/// 生成默认配置文件
pub fn handle_init(output_path: &str, force: bool) -> Result<()> {
    let path = Path::new(output_path);

    info!("Generating settings file: {output_path}");

    let existed = path.exists();
    if existed && !force {
        error!("Settings file already exists: {output_path}");
        info!("Hint: use --force to overwrite");
        return Err(Error::File(FileError::AlreadyExists {
            path: path.to_path_buf(),
        }));
    }

    if existed {
        warn!("Overwriting existing settings file");
    }

    // 创建目录（如果需要）
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating directory: {}", parent.display());
            fs::create_dir_all(parent).map_err(|e| {
                Error::File(FileError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    reason: e.to_string(),
                })
            })?;
        }
    }

    debug!("Writing settings file...");
    fs::write(path, DEFAULT_SETTINGS).map_err(|e| {
        Error::File(FileError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    })?;

    if existed {
        info!("Settings file overwritten: {output_path}");
    } else {
        info!("Settings file created: {output_path}");
    }

    info!("Next steps:");
    info!("  1. Edit the settings: {output_path}");
    info!("  2. Validate: query-helpers validate -c {output_path}");
    info!("  3. Load a query: query-helpers query -c {output_path} path/to/query.sql");

    Ok(())
}
