//! 価格差データの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - DiffEntry: `data/diff.json` の1行（買取価格 − Apple価格）
//! - MetaInfo: `data/meta.json`（生成日時・取得元）
//! - Mode: 表示モード（利益 / 損失）

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 価格差エントリ
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiffEntry {
    pub model: String,

    #[serde(default)]
    pub capacity: Option<String>,

    /// 差額（円）。正なら利益、負なら損失
    ///
    /// 円単位の整数のみ。`1500.0` のような小数表記はデシリアライズエラーになる。
    pub diff: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_price: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub morimori_new_price: Option<i64>,
}

impl DiffEntry {
    /// 表示用ラベル（機種名 + 容量）
    pub fn label(&self) -> String {
        let capacity = self.capacity.as_deref().unwrap_or("");
        format!("{} {}", self.model, capacity).trim_end().to_string()
    }
}

/// 取得元URL
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Sources {
    pub morimori: String,
    pub apple: BTreeMap<String, String>,
}

/// 件数（デバッグ用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DebugCounts {
    pub apple_models: usize,
    pub morimori_models: usize,
    pub matched_rows: usize,
}

/// データセットのメタ情報
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetaInfo {
    #[serde(default)]
    pub generated_at_jst: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Sources>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_counts: Option<DebugCounts>,
}

/// 表示モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Profit,
    Loss,
}

impl Mode {
    /// このモードで表示する差額か（0はどちらにも含めない）
    pub fn matches(&self, diff: i64) -> bool {
        match self {
            Mode::Profit => diff > 0,
            Mode::Loss => diff < 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Profit => "profit",
            Mode::Loss => "loss",
        }
    }

    /// 切替ボタンの要素ID
    pub fn button_id(&self) -> &'static str {
        match self {
            Mode::Profit => "btnProfit",
            Mode::Loss => "btnLoss",
        }
    }

    pub const ALL: [Mode; 2] = [Mode::Profit, Mode::Loss];
}
