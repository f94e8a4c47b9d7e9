//! 価格ページの取得と解析

pub mod parse;
pub mod apple;
pub mod morimori;

use crate::config::Config;
use crate::error::{KaitoriError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Duration;

/// (機種名, 容量)
pub type PriceKey = (String, String);

/// (機種名, 容量) → 価格（円）
pub type PriceMap = BTreeMap<PriceKey, i64>;

pub fn build_client(config: &Config) -> Result<Client> {
    let client = Client::builder()
        .user_agent(config.user_agent())
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()?;
    Ok(client)
}

/// HTMLを取得（2xx以外はエラー）
pub async fn fetch_html(client: &Client, url: &str) -> Result<String> {
    log::debug!("GET {}", url);
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(KaitoriError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.text().await?)
}

pub(crate) fn page_progress(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#|-"),
    );
    pb
}
