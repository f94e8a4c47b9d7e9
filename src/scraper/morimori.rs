//! 森森買取の価格一覧から新品買取価格を抽出

use super::parse::{classify_model, extract_capacity, parse_yen_values, table_rows};
use super::{fetch_html, PriceMap};
use crate::error::Result;
use reqwest::Client;

const NEW_ITEM_MARK: &str = "新品";

/// 価格一覧ページの (機種名, 容量) → 新品買取価格
///
/// 「新品」を含む行だけを対象にし、行内の最大の金額を価格とする。
/// 金額が0円の行は価格未掲載として扱わない。
/// 同じキーが複数行にある場合は高い方を残す。
pub fn new_prices(html: &str) -> PriceMap {
    let mut out = PriceMap::new();

    for row in table_rows(html) {
        if !row.contains(NEW_ITEM_MARK) {
            continue;
        }
        let Some(capacity) = extract_capacity(&row) else {
            continue;
        };
        let Some(model) = classify_model(&row) else {
            continue;
        };
        let Some(price) = parse_yen_values(&row).into_iter().max().filter(|&p| p > 0) else {
            continue;
        };

        let current = out.entry((model.to_string(), capacity)).or_insert(0);
        *current = (*current).max(price);
    }
    out
}

pub async fn scrape_new_prices(client: &Client, url: &str) -> Result<PriceMap> {
    let html = fetch_html(client, url).await?;
    let prices = new_prices(&html);
    log::debug!("morimori: {} 件", prices.len());
    Ok(prices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(model: &str, capacity: &str) -> (String, String) {
        (model.to_string(), capacity.to_string())
    }

    #[test]
    fn test_new_prices() {
        let html = r#"
            <table>
              <tr><th>商品</th><th>状態</th><th>買取価格</th></tr>
              <tr><td>iPhone 17 Pro Max 256GB</td><td>新品</td><td>210,000円</td></tr>
              <tr><td>iPhone 17 Pro Max 256GB</td><td>新品</td><td>212,000円</td></tr>
              <tr><td>iPhone 17 Pro 1TB</td><td>新品</td><td>250,000円 (旧 245,000円)</td></tr>
              <tr><td>iPhone Air 256GB</td><td>中古</td><td>120,000円</td></tr>
              <tr><td>iPhone 17 256GB</td><td>新品</td><td>価格お問い合わせ</td></tr>
              <tr><td>iPhone 16 128GB</td><td>新品</td><td>90,000円</td></tr>
            </table>"#;

        let prices = new_prices(html);
        assert_eq!(prices.len(), 2);
        assert_eq!(prices.get(&key("iPhone 17 Pro Max", "256GB")), Some(&212000));
        assert_eq!(prices.get(&key("iPhone 17 Pro", "1TB")), Some(&250000));
    }

    #[test]
    fn test_new_prices_ignores_text_outside_tables() {
        let html = "<p>iPhone 17 256GB 新品 150,000円</p>";
        assert!(new_prices(html).is_empty());
    }

    #[test]
    fn test_new_prices_without_end_tags() {
        let html = "<table><tr><td>iPhone 17 256GB<td>新品<td>150,000円</tr></table>";
        let prices = new_prices(html);
        assert_eq!(prices.get(&key("iPhone 17", "256GB")), Some(&150000));
    }

    #[test]
    fn test_new_prices_numeric_entity_in_price() {
        let html = "<table><tr><td>iPhone 17 256GB</td><td>新品</td><td>150&#44;000円</td></tr></table>";
        let prices = new_prices(html);
        assert_eq!(prices.get(&key("iPhone 17", "256GB")), Some(&150000));
    }

    #[test]
    fn test_new_prices_skips_zero_price_rows() {
        let html = r#"
            <table>
              <tr><td>iPhone 17 256GB</td><td>新品</td><td>0円</td></tr>
              <tr><td>iPhone Air 256GB</td><td>新品</td><td>140,000円</td></tr>
            </table>"#;
        let prices = new_prices(html);
        assert_eq!(prices.get(&key("iPhone 17", "256GB")), None);
        assert_eq!(prices.get(&key("iPhone Air", "256GB")), Some(&140000));
    }
}
