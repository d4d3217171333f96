use log::info;
use query_helpers::config::Config;
use query_helpers::config_error;
use query_helpers::error::Result;
use query_helpers::query::{read_query, render_query};
use std::collections::BTreeMap;

/// 读取查询并输出到 stdout
pub fn handle_query(cfg: &Config, file: Option<&str>, params: &[(String, String)]) -> Result<()> {
    let path = resolve_query_file(cfg, file)?;
    let query = read_query(path)?;

    let query = if params.is_empty() {
        query
    } else {
        let params: BTreeMap<String, String> = params.iter().cloned().collect();
        render_query(&query, &params)?
    };

    info!("Loaded query from {path} ({} bytes)", query.len());
    println!("{query}");
    Ok(())
}

/// 命令行参数优先，其次是配置中的 `query.file`
fn resolve_query_file<'a>(cfg: &'a Config, file: Option<&'a str>) -> Result<&'a str> {
    file.or_else(|| cfg.query.file()).ok_or_else(|| {
        config_error!(InvalidValue {
            field: "query.file".to_string(),
            value: String::new(),
            reason: "No query file given on the command line or in the settings".to_string(),
        })
    })
}
