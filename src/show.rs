//! 生成済みデータの端末表示
//!
//! ブラウザ版と同じ `ViewController` を、ローカルファイルの取得元と
//! 端末向けの描画先で動かす。

use crate::builder::{DIFF_FILE, META_FILE};
use crate::error::{KaitoriError, Result};
use kaitori_diff_common::{DataSource, DiffEntry, Error, MetaInfo, Mode, Page, RowView, ViewController};
use serde::de::DeserializeOwned;
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};

/// データディレクトリから `diff.json` / `meta.json` を読む
#[derive(Debug, Clone)]
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn read_json<T: DeserializeOwned>(&self, file: &str) -> kaitori_diff_common::Result<T> {
        let path = self.dir.join(file);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::Fetch(format!("{}: {}", path.display(), e)))?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl DataSource for FileSource {
    async fn fetch_entries(&self) -> kaitori_diff_common::Result<Vec<DiffEntry>> {
        self.read_json(DIFF_FILE).await
    }

    async fn fetch_meta(&self) -> kaitori_diff_common::Result<MetaInfo> {
        self.read_json(META_FILE).await
    }
}

/// 描画内容を保持し、テキストとして出力する
#[derive(Debug, Default)]
pub struct TerminalPage {
    meta: RefCell<String>,
    rows: RefCell<Vec<RowView>>,
    active: Cell<Mode>,
}

impl TerminalPage {
    pub fn rows(&self) -> Vec<RowView> {
        self.rows.borrow().clone()
    }

    pub fn render_text(&self) -> String {
        let mut lines = vec![self.meta.borrow().clone()];

        let tabs: Vec<String> = Mode::ALL
            .iter()
            .map(|&mode| {
                let name = match mode {
                    Mode::Profit => "利益",
                    Mode::Loss => "損失",
                };
                if mode == self.active.get() {
                    format!("[{}]", name)
                } else {
                    format!(" {} ", name)
                }
            })
            .collect();
        lines.push(tabs.join(" "));

        let rows = self.rows.borrow();
        if rows.is_empty() {
            lines.push("  (該当なし)".to_string());
        }
        for (i, row) in rows.iter().enumerate() {
            lines.push(format!("{:>3}. {:<24} {:>12}", i + 1, row.label, row.amount));
        }
        lines.join("\n")
    }
}

impl Page for TerminalPage {
    fn set_meta_text(&self, text: &str) -> kaitori_diff_common::Result<()> {
        *self.meta.borrow_mut() = text.to_string();
        Ok(())
    }

    fn clear_list(&self) -> kaitori_diff_common::Result<()> {
        self.rows.borrow_mut().clear();
        Ok(())
    }

    fn append_row(&self, row: &RowView) -> kaitori_diff_common::Result<()> {
        self.rows.borrow_mut().push(row.clone());
        Ok(())
    }

    fn set_button_active(&self, mode: Mode, active: bool) -> kaitori_diff_common::Result<()> {
        if active {
            self.active.set(mode);
        }
        Ok(())
    }
}

/// 指定モードでランキングを描画する
pub async fn show_ranking(dir: &Path, mode: Mode) -> Result<ViewController<FileSource, TerminalPage>> {
    if !dir.join(DIFF_FILE).exists() {
        return Err(KaitoriError::DataNotFound(dir.join(DIFF_FILE).display().to_string()));
    }

    let controller = ViewController::new(FileSource::new(dir), TerminalPage::default());
    controller.set_mode(mode).await?;
    Ok(controller)
}
