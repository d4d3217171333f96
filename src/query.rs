/// SQL 查询读取模块
/// 读取 SQL 文件，把多行内容压平成一行，并支持 `{name}` 占位符替换
use crate::error::{Error, Result};
use crate::query_error;
use log::debug;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// 读取 SQL 文件并压平为单行查询
///
/// 文件按 UTF-8 读取。读取失败（文件不存在、无权限、编码错误等）直接返回错误，
/// 不会退化为空字符串。
pub fn read_query<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|e| read_error(path, &e))?;
    debug!("Retrieving the sql query from {}", path.display());

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| read_error(path, &e))?;
    let query = flatten_query(&content);

    debug!("Retrieved query:\n{query}");
    Ok(query)
}

/// 逐行去掉首尾空白后用单个空格拼接
///
/// 换行符 `\n`、`\r\n` 和单独的 `\r` 都视为行结束；末尾换行不会多出一个空行。
pub fn flatten_query(content: &str) -> String {
    let normalized;
    let text = if content.contains('\r') {
        normalized = content.replace("\r\n", "\n").replace('\r', "\n");
        normalized.as_str()
    } else {
        content
    };

    text.lines()
        .map(|line| line.trim_matches(is_strippable))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unicode 空白，外加 `\x1c`..=`\x1f` 四个信息分隔符
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// 用参数替换查询中的 `{name}` 占位符
///
/// `{{` 和 `}}` 输出字面量花括号；未使用的参数会被忽略。
pub fn render_query(query: &str, params: &BTreeMap<String, String>) -> Result<String> {
    let mut rendered = String::with_capacity(query.len());
    let mut chars = query.char_indices().peekable();
    let mut substituted = 0usize;

    while let Some((position, c)) = chars.next() {
        match c {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    rendered.push('{');
                    continue;
                }

                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, '{')) | None => {
                            return Err(query_error!(UnbalancedBrace { position: position }));
                        }
                        Some((_, ch)) => name.push(ch),
                    }
                }

                let name = name.trim();
                let value = params.get(name).ok_or_else(|| {
                    query_error!(MissingParameter {
                        name: name.to_string()
                    })
                })?;
                rendered.push_str(value);
                substituted += 1;
            }
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_none() {
                    return Err(query_error!(UnbalancedBrace { position: position }));
                }
                rendered.push('}');
            }
            _ => rendered.push(c),
        }
    }

    debug!("Substituted {substituted} query parameter(s)");
    Ok(rendered)
}

fn read_error(path: &Path, e: &io::Error) -> Error {
    let path = path.to_path_buf();
    match e.kind() {
        io::ErrorKind::NotFound => query_error!(NotFound { path: path }),
        io::ErrorKind::PermissionDenied => query_error!(PermissionDenied { path: path }),
        io::ErrorKind::InvalidData => query_error!(InvalidEncoding { path: path }),
        _ => query_error!(ReadFailed {
            path: path,
            reason: e.to_string(),
        }),
    }
}
