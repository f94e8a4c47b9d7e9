//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("HTTP error: {url} returned {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Element not found: #{0}")]
    MissingElement(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
