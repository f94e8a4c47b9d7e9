//! データ取得

pub mod fetch;

pub use fetch::HttpSource;
