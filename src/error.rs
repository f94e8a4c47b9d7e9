use thiserror::Error;

#[derive(Error, Debug)]
pub enum KaitoriError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("HTTP通信エラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTPエラー: {url} が {status} を返しました")]
    HttpStatus { url: String, status: u16 },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("データファイルが見つかりません: {0}")]
    DataNotFound(String),

    #[error("表示エラー: {0}")]
    View(#[from] kaitori_diff_common::Error),
}

pub type Result<T> = std::result::Result<T, KaitoriError>;
