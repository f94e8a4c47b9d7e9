//! DOM描画先
//!
//! ホストページの `#meta` / `#list` / `#btnProfit` / `#btnLoss` を操作する。
//! 行は文字列のHTMLではなく要素の組み立てで追加する。

use kaitori_diff_common::{Error, Mode, Page, Result, RowView};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

pub const META_ID: &str = "meta";
pub const LIST_ID: &str = "list";

const ACTIVE_CLASS: &str = "active";

fn dom_error(value: JsValue) -> Error {
    Error::Dom(format!("{:?}", value))
}

/// `web_sys::Document` に描画する `Page`
#[derive(Debug, Clone)]
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// IDで要素を取得（無ければ `MissingElement`）
    pub fn element(&self, id: &str) -> Result<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| Error::MissingElement(id.to_string()))
    }

    fn create(&self, tag: &str, class: &str) -> Result<Element> {
        let element = self.document.create_element(tag).map_err(dom_error)?;
        element.set_class_name(class);
        Ok(element)
    }

    /// 1行分の要素を組み立てる
    ///
    /// ```html
    /// <div class="row">
    ///   <div class="name">iPhone 17 256GB</div>
    ///   <div class="diff profit">+1,500円</div>
    /// </div>
    /// ```
    pub fn build_row(&self, row: &RowView) -> Result<Element> {
        let container = self.create("div", "row")?;

        let name = self.create("div", "name")?;
        name.set_text_content(Some(&row.label));

        let amount = self.create("div", &format!("diff {}", row.class))?;
        amount.set_text_content(Some(&row.amount));

        container.append_child(&name).map_err(dom_error)?;
        container.append_child(&amount).map_err(dom_error)?;
        Ok(container)
    }
}

impl Page for DomPage {
    fn set_meta_text(&self, text: &str) -> Result<()> {
        self.element(META_ID)?.set_text_content(Some(text));
        Ok(())
    }

    fn clear_list(&self) -> Result<()> {
        // 子要素をすべて削除
        self.element(LIST_ID)?.set_text_content(None);
        Ok(())
    }

    fn append_row(&self, row: &RowView) -> Result<()> {
        let element = self.build_row(row)?;
        self.element(LIST_ID)?
            .append_child(&element)
            .map_err(dom_error)?;
        Ok(())
    }

    fn set_button_active(&self, mode: Mode, active: bool) -> Result<()> {
        self.element(mode.button_id())?
            .class_list()
            .toggle_with_force(ACTIVE_CLASS, active)
            .map_err(dom_error)?;
        Ok(())
    }
}
