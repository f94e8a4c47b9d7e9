//! ランキング表示コントローラ
//!
//! データ取得（`DataSource`）と描画先（`Page`）を差し替え可能にし、
//! ブラウザ(DOM)とCLI(端末)で同じ絞り込み・並び替え・整形を共有する。

use crate::error::Result;
use crate::format::yen;
use crate::types::{DiffEntry, MetaInfo, Mode};
use std::cell::Cell;

const META_PREFIX: &str = "更新：";
const META_PLACEHOLDER: &str = "-";

/// `diff.json` と `meta.json` の取得元
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn fetch_entries(&self) -> Result<Vec<DiffEntry>>;
    async fn fetch_meta(&self) -> Result<MetaInfo>;
}

/// 描画先（`meta` / `list` / 切替ボタン）
pub trait Page {
    fn set_meta_text(&self, text: &str) -> Result<()>;
    fn clear_list(&self) -> Result<()>;
    fn append_row(&self, row: &RowView) -> Result<()>;
    fn set_button_active(&self, mode: Mode, active: bool) -> Result<()>;
}

/// 1行分の表示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub label: String,
    pub amount: String,
    pub class: &'static str,
}

impl RowView {
    pub fn from_entry(entry: &DiffEntry) -> Self {
        let class = if entry.diff > 0 {
            Mode::Profit.as_str()
        } else {
            Mode::Loss.as_str()
        };
        Self {
            label: entry.label(),
            amount: yen(entry.diff),
            class,
        }
    }
}

/// モードに該当するエントリを差額の降順で返す（同額は元の順序を維持）
pub fn rank_entries(entries: &[DiffEntry], mode: Mode) -> Vec<&DiffEntry> {
    let mut ranked: Vec<&DiffEntry> = entries.iter().filter(|e| mode.matches(e.diff)).collect();
    ranked.sort_by(|a, b| b.diff.cmp(&a.diff));
    ranked
}

/// `meta` 要素に表示する文字列
pub fn meta_text(meta: &MetaInfo) -> String {
    format!(
        "{}{}",
        META_PREFIX,
        meta.generated_at_jst.as_deref().unwrap_or(META_PLACEHOLDER)
    )
}

/// 表示モードを保持し、取得 → 絞り込み → 描画を行う
pub struct ViewController<S, P> {
    source: S,
    page: P,
    mode: Cell<Mode>,
}

impl<S: DataSource, P: Page> ViewController<S, P> {
    pub fn new(source: S, page: P) -> Self {
        Self {
            source,
            page,
            mode: Cell::new(Mode::default()),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode.get()
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// 2つのJSONを同時に取得して描画する
    ///
    /// # Returns
    /// 描画した行数
    pub async fn load(&self) -> Result<usize> {
        let (entries, meta) =
            futures::try_join!(self.source.fetch_entries(), self.source.fetch_meta())?;

        // モードは取得完了時点の値を使う
        self.render(&entries, &meta)
    }

    /// 取得済みデータを現在のモードで描画する
    pub fn render(&self, entries: &[DiffEntry], meta: &MetaInfo) -> Result<usize> {
        let mode = self.mode.get();

        self.page.set_meta_text(&meta_text(meta))?;
        self.page.clear_list()?;

        let ranked = rank_entries(entries, mode);
        for entry in &ranked {
            self.page.append_row(&RowView::from_entry(entry))?;
        }

        log::debug!("rendered {} of {} entries ({})", ranked.len(), entries.len(), mode.as_str());
        Ok(ranked.len())
    }

    /// モードを切り替え、ボタン表示を更新して再取得する
    pub async fn set_mode(&self, next: Mode) -> Result<usize> {
        self.mode.set(next);
        self.mark_active_button()?;
        self.load().await
    }

    /// 現在のモードに対応するボタンだけを active にする
    pub fn mark_active_button(&self) -> Result<()> {
        let current = self.mode.get();
        for mode in Mode::ALL {
            self.page.set_button_active(mode, mode == current)?;
        }
        Ok(())
    }
}
