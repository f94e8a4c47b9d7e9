//! 差額データ（`diff.json`）とメタ情報（`meta.json`）の生成

use crate::config::Config;
use crate::error::{KaitoriError, Result};
use crate::scraper::PriceMap;
use chrono::{DateTime, FixedOffset, Utc};
use kaitori_diff_common::{DebugCounts, DiffEntry, MetaInfo, Sources};
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const DIFF_FILE: &str = "diff.json";
pub const META_FILE: &str = "meta.json";

const JST_OFFSET_SECS: i32 = 9 * 3600;

/// Apple価格と買取価格の両方があるキーについて差額行を作る
///
/// 差額 = 新品買取価格 − Apple価格。差額の降順（同額はキー順）。
pub fn build_diff_rows(apple: &PriceMap, morimori: &PriceMap) -> Vec<DiffEntry> {
    let mut rows: Vec<DiffEntry> = apple
        .iter()
        .filter_map(|(key, &apple_price)| {
            let &buy_price = morimori.get(key)?;
            Some(DiffEntry {
                model: key.0.clone(),
                capacity: Some(key.1.clone()),
                diff: buy_price - apple_price,
                apple_price: Some(apple_price),
                morimori_new_price: Some(buy_price),
            })
        })
        .collect();

    rows.sort_by(|a, b| b.diff.cmp(&a.diff));
    rows
}

/// 日本標準時（UTC+9）
pub fn jst_offset() -> Result<FixedOffset> {
    FixedOffset::east_opt(JST_OFFSET_SECS)
        .ok_or_else(|| KaitoriError::Config(format!("不正なUTCオフセット: {}秒", JST_OFFSET_SECS)))
}

pub fn jst_now() -> Result<DateTime<FixedOffset>> {
    Ok(Utc::now().with_timezone(&jst_offset()?))
}

pub fn format_jst(time: &DateTime<FixedOffset>) -> String {
    time.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn build_meta(
    config: &Config,
    generated_at: &DateTime<FixedOffset>,
    debug_counts: DebugCounts,
) -> MetaInfo {
    MetaInfo {
        generated_at_jst: Some(format_jst(generated_at)),
        sources: Some(Sources {
            morimori: config.morimori_url.clone(),
            apple: config.apple_pages.clone(),
        }),
        debug_counts: Some(debug_counts),
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// `dir/diff.json` と `dir/meta.json` を書き出す
pub fn write_outputs(dir: &Path, rows: &[DiffEntry], meta: &MetaInfo) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir)?;

    let diff_path = dir.join(DIFF_FILE);
    let meta_path = dir.join(META_FILE);
    write_json(&diff_path, &rows)?;
    write_json(&meta_path, meta)?;

    log::info!("wrote {} rows to {}", rows.len(), diff_path.display());
    Ok((diff_path, meta_path))
}
