pub mod init;
pub mod opts;
pub mod query;
pub mod validate;
