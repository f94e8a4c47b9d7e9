//! iPhone 新品買取価格とApple定価の差額ランキング
//!
//! - `scraper`: Apple / 森森買取のページ取得と価格抽出
//! - `builder`: 差額行とメタ情報の生成、`data/` への書き出し
//! - `show`: 生成済みデータを端末にランキング表示

pub mod cli;
pub mod config;
pub mod error;
pub mod scraper;
pub mod builder;
pub mod show;
