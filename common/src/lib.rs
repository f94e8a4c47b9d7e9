//! kaitori-diff Common Library
//!
//! CLIとWeb(WASM)で共有される型・整形・表示ロジック

pub mod types;
pub mod format;
pub mod error;
pub mod view;

pub use types::{DiffEntry, MetaInfo, Mode, Sources, DebugCounts};
pub use format::{yen, group_thousands};
pub use error::{Error, Result};
pub use view::{DataSource, Page, RowView, ViewController, rank_entries, meta_text};
