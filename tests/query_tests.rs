/// Query loader tests
use query_helpers::error::{Error, QueryError};
use query_helpers::query::read_query;
use std::fs;
use std::path::PathBuf;

fn write_query_file(name: &str, content: &[u8]) -> PathBuf {
    let dir = PathBuf::from("target/test_outputs/query");
    fs::create_dir_all(&dir).expect("Failed to create test dir");
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write query file");
    path
}

#[test]
fn test_read_multiline_query() {
    let path = write_query_file("multiline.sql", b"SELECT *\n  FROM table\nWHERE x = 1\n");
    assert_eq!(
        read_query(&path).unwrap(),
        "SELECT * FROM table WHERE x = 1"
    );
}

#[test]
fn test_read_empty_file() {
    let path = write_query_file("empty.sql", b"");
    assert_eq!(read_query(&path).unwrap(), "");
}

#[test]
fn test_read_blank_lines_only() {
    let path = write_query_file("blank.sql", b"\n   \n\t\n\n");
    // 4 行空白行 -> 3 个分隔空格
    assert_eq!(read_query(&path).unwrap(), "   ");
}

#[test]
fn test_read_preserves_internal_whitespace() {
    let path = write_query_file(
        "inner_ws.sql",
        b"   SELECT a,   b\n\tFROM  t   \n WHERE c = 'x  y' ",
    );
    assert_eq!(
        read_query(&path).unwrap(),
        "SELECT a,   b FROM  t WHERE c = 'x  y'"
    );
}

#[test]
fn test_read_windows_line_endings() {
    let path = write_query_file("crlf.sql", b"SELECT 1\r\nFROM dual\r\n");
    assert_eq!(read_query(&path).unwrap(), "SELECT 1 FROM dual");
}

#[test]
fn test_read_unicode_content() {
    let path = write_query_file(
        "unicode.sql",
        "SELECT '数据' AS name\nFROM t WHERE city = 'Köln'\n".as_bytes(),
    );
    assert_eq!(
        read_query(&path).unwrap(),
        "SELECT '数据' AS name FROM t WHERE city = 'Köln'"
    );
}

#[test]
fn test_read_nonexistent_file_propagates_error() {
    let path = PathBuf::from("target/test_outputs/query/does_not_exist.sql");
    let _ = fs::remove_file(&path);

    match read_query(&path) {
        Err(Error::Query(QueryError::NotFound { path: p })) => assert_eq!(p, path),
        other => panic!("expected NotFound error, got {other:?}"),
    }
}

#[test]
fn test_read_invalid_utf8_propagates_error() {
    let path = write_query_file("latin1.sql", b"SELECT '\xe9t\xe9'\n");
    assert!(matches!(
        read_query(&path),
        Err(Error::Query(QueryError::InvalidEncoding { .. }))
    ));
}

#[test]
fn test_read_directory_is_an_error() {
    let dir = PathBuf::from("target/test_outputs/query/a_directory.sql");
    fs::create_dir_all(&dir).unwrap();
    assert!(read_query(&dir).is_err());
}

#[test]
fn test_error_message_names_the_file() {
    let err = read_query("target/test_outputs/query/missing_report.sql").unwrap_err();
    assert!(err.to_string().contains("missing_report.sql"));
}
