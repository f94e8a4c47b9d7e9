//! Apple公式（日本）の購入ページから価格を抽出
//!
//! ページ内の `<script>` に埋め込まれたJSONから、容量ごとの価格を拾う。

use super::parse::{min_device_price, parse_yen_values, script_bodies, window_after};
use super::{fetch_html, page_progress, PriceMap};
use crate::error::Result;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::Client;
use std::collections::BTreeMap;

/// 容量表記の直後から価格を探す範囲（文字数）
const PRICE_WINDOW_CHARS: usize = 2000;

/// 容量の昇順
pub const CAPACITY_ORDER: [&str; 5] = ["128GB", "256GB", "512GB", "1TB", "2TB"];

lazy_static! {
    static ref CAPACITY_TOKEN_RE: Regex =
        Regex::new(r"(?i)\b(128GB|256GB|512GB|1TB|2TB)\b").unwrap();
}

/// 1ページ分の容量 → 価格
///
/// 各容量の最初の出現位置の後ろから最小の端末価格を取り、
/// 容量が大きいほど価格が下がらないものだけを残す。
pub fn prices_by_capacity(html: &str) -> BTreeMap<String, i64> {
    let script_text = script_bodies(html).join("\n");

    let mut found: BTreeMap<String, i64> = BTreeMap::new();
    for m in CAPACITY_TOKEN_RE.find_iter(&script_text) {
        let capacity = m.as_str().to_uppercase();
        if found.contains_key(&capacity) {
            continue;
        }
        let window = window_after(&script_text, m.end(), PRICE_WINDOW_CHARS);
        if let Some(price) = min_device_price(&parse_yen_values(window)) {
            found.insert(capacity, price);
        }
    }

    clean_capacity_prices(&found)
}

/// 容量順に並べ、価格が前の容量を下回るものを除く
pub fn clean_capacity_prices(prices: &BTreeMap<String, i64>) -> BTreeMap<String, i64> {
    let mut cleaned = BTreeMap::new();
    let mut last = 0;

    for capacity in CAPACITY_ORDER {
        let Some(&price) = prices.get(capacity) else {
            continue;
        };
        if price >= last {
            cleaned.insert(capacity.to_string(), price);
            last = price;
        }
    }
    cleaned
}

/// 1ページ分の最低価格（「〜円から」）
///
/// `<script>` 内に無ければHTML全体から探す。
pub fn base_price(html: &str) -> Option<i64> {
    script_bodies(html)
        .into_iter()
        .filter_map(|s| min_device_price(&parse_yen_values(&s)))
        .min()
        .or_else(|| min_device_price(&parse_yen_values(html)))
}

/// 全機種の (機種名, 容量) → Apple価格
pub async fn scrape_prices_by_capacity(
    client: &Client,
    pages: &BTreeMap<String, String>,
) -> Result<PriceMap> {
    let mut out = PriceMap::new();
    let pb = page_progress(pages.len());

    for (model, url) in pages {
        pb.set_message(model.clone());
        let html = fetch_html(client, url).await?;
        let prices = prices_by_capacity(&html);
        log::debug!("{}: {:?}", model, prices);

        for (capacity, price) in prices {
            out.insert((model.clone(), capacity), price);
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(out)
}

/// 全機種の最低価格
pub async fn scrape_base_prices(
    client: &Client,
    pages: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, i64>> {
    let mut out = BTreeMap::new();
    let pb = page_progress(pages.len());

    for (model, url) in pages {
        pb.set_message(model.clone());
        let html = fetch_html(client, url).await?;
        match base_price(&html) {
            Some(price) => {
                out.insert(model.clone(), price);
            }
            None => log::warn!("{}: 価格が見つかりません ({})", model, url),
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(out)
}
