//! HTMLテキストからの価格・容量・機種の抽出
//!
//! いずれも純粋関数（ネットワーク非依存）

use lazy_static::lazy_static;
use regex::Regex;
use ::scraper::{ElementRef, Html, Selector};

/// 端末本体の価格とみなす下限（円）
pub const MIN_DEVICE_PRICE: i64 = 50_000;

lazy_static! {
    static ref YEN_RE: Regex = Regex::new(r"(\d[\d,]*)\s*円").unwrap();
    static ref SPACES_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref CAPACITY_RE: Regex =
        Regex::new(r"(?i)\b(128|256|512)\s*G\s*B\b|\b(1|2)\s*T\s*B\b").unwrap();
    static ref SCRIPT_SEL: Selector = Selector::parse("script").unwrap();
    static ref TABLE_SEL: Selector = Selector::parse("table").unwrap();
    static ref ROW_SEL: Selector = Selector::parse("tr").unwrap();
    static ref CELL_SEL: Selector = Selector::parse("td, th").unwrap();
}

/// 「129,800円」形式の金額をすべて抽出
pub fn parse_yen_values(text: &str) -> Vec<i64> {
    YEN_RE
        .captures_iter(text)
        .filter_map(|cap| cap[1].replace(',', "").parse::<i64>().ok())
        .collect()
}

/// 連続する空白を1つにまとめて前後を除去
pub fn norm_spaces(text: &str) -> String {
    SPACES_RE.replace_all(text, " ").trim().to_string()
}

/// 容量表記を正規化（`256 GB` → `256GB`, `1 T B` → `1TB`）
pub fn extract_capacity(text: &str) -> Option<String> {
    let cap = CAPACITY_RE.captures(text)?;
    if let Some(gb) = cap.get(1) {
        return Some(format!("{}GB", gb.as_str()));
    }
    cap.get(2).map(|tb| format!("{}TB", tb.as_str()))
}

/// 行テキストから機種名を判定
pub fn classify_model(row: &str) -> Option<&'static str> {
    if row.contains("Pro Max") || row.contains("ProMax") {
        Some("iPhone 17 Pro Max")
    } else if row.contains("Pro") {
        Some("iPhone 17 Pro")
    } else if row.contains("Air") {
        Some("iPhone Air")
    } else if row.contains("iPhone 17") || row.contains("iPhone17") {
        Some("iPhone 17")
    } else {
        None
    }
}

/// 端末価格とみなせる最小の金額
pub fn min_device_price(values: &[i64]) -> Option<i64> {
    values.iter().copied().filter(|&v| v >= MIN_DEVICE_PRICE).min()
}

/// `<script>` の中身（空は除く）
pub fn script_bodies(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&SCRIPT_SEL)
        .map(|script| script.text().collect::<String>())
        .filter(|s| !s.is_empty())
        .collect()
}

/// `<table>` 内の各行を、セルのテキストを空白で連結した文字列として返す
///
/// 閉じタグの省略や文字参照（`&#44;` など）はHTMLパーサに任せる。
pub fn table_rows(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut rows = Vec::new();

    for table in document.select(&TABLE_SEL) {
        for row in table.select(&ROW_SEL) {
            let cols: Vec<String> = row.select(&CELL_SEL).map(cell_text).collect();
            if cols.is_empty() {
                continue;
            }
            rows.push(cols.join(" "));
        }
    }
    rows
}

fn cell_text(cell: ElementRef<'_>) -> String {
    norm_spaces(&cell.text().collect::<Vec<_>>().join(" "))
}

/// `pos` から最大 `max_chars` 文字分の部分文字列
pub fn window_after(text: &str, pos: usize, max_chars: usize) -> &str {
    let rest = &text[pos..];
    let end = rest
        .char_indices()
        .nth(max_chars)
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    &rest[..end]
}
