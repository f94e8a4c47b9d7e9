//! DomPage の描画テスト（ブラウザ上で実行）
//!
//! `wasm-pack test --headless --firefox web-wasm`

#![cfg(target_arch = "wasm32")]

use kaitori_diff_common::{DataSource, DiffEntry, Error, MetaInfo, Mode, Page, Result, RowView, ViewController};
use kaitori_diff_wasm::app::App;
use kaitori_diff_wasm::dom::{DomPage, LIST_ID, META_ID};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

struct FixedSource {
    entries: Vec<DiffEntry>,
    meta: MetaInfo,
}

impl DataSource for FixedSource {
    async fn fetch_entries(&self) -> Result<Vec<DiffEntry>> {
        Ok(self.entries.clone())
    }

    async fn fetch_meta(&self) -> Result<MetaInfo> {
        Ok(self.meta.clone())
    }
}

/// 常に HTTP 500 を返す取得元
struct FailingSource;

impl DataSource for FailingSource {
    async fn fetch_entries(&self) -> Result<Vec<DiffEntry>> {
        Err(Error::HttpStatus {
            url: "./data/diff.json".to_string(),
            status: 500,
        })
    }

    async fn fetch_meta(&self) -> Result<MetaInfo> {
        Ok(MetaInfo::default())
    }
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// テスト用のホストページを用意
fn setup_page() -> DomPage {
    let document = document();
    let body = document.body().unwrap();
    body.set_text_content(None);

    for (tag, id) in [("p", META_ID), ("div", LIST_ID), ("button", "btnProfit"), ("button", "btnLoss")] {
        let element = document.create_element(tag).unwrap();
        element.set_id(id);
        body.append_child(&element).unwrap();
    }
    DomPage::new(document)
}

fn entry(model: &str, capacity: Option<&str>, diff: i64) -> DiffEntry {
    DiffEntry {
        model: model.to_string(),
        capacity: capacity.map(str::to_string),
        diff,
        ..Default::default()
    }
}

fn sample_source() -> FixedSource {
    FixedSource {
        entries: vec![
            entry("A", None, 500),
            entry("B", Some("128GB"), -200),
            entry("C", None, 1500),
        ],
        meta: MetaInfo {
            generated_at_jst: Some("2025-10-01 09:00:00".to_string()),
            ..Default::default()
        },
    }
}

/// spawn_local で積まれた処理が終わるまでマイクロタスクを進める
async fn settle() {
    for _ in 0..10 {
        JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL))
            .await
            .unwrap();
    }
}

fn click(page: &DomPage, id: &str) {
    page.element(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn is_active(page: &DomPage, id: &str) -> bool {
    page.element(id).unwrap().class_list().contains("active")
}

fn list_texts(page: &DomPage) -> Vec<String> {
    let list = page.element(LIST_ID).unwrap();
    let rows = list.children();
    (0..rows.length())
        .map(|i| rows.item(i).unwrap().text_content().unwrap_or_default())
        .collect()
}

#[wasm_bindgen_test]
fn test_build_row_structure() {
    let page = setup_page();
    let row = page
        .build_row(&RowView {
            label: "iPhone 17 256GB".to_string(),
            amount: "+1,500円".to_string(),
            class: "profit",
        })
        .unwrap();

    assert_eq!(row.class_name(), "row");
    let amount = row.last_element_child().unwrap();
    assert_eq!(amount.class_name(), "diff profit");
    assert_eq!(amount.text_content().unwrap(), "+1,500円");
}

#[wasm_bindgen_test]
fn test_row_label_is_not_parsed_as_markup() {
    let page = setup_page();
    let row = page
        .build_row(&RowView {
            label: "<b>x</b>".to_string(),
            amount: "+1円".to_string(),
            class: "profit",
        })
        .unwrap();

    assert!(row.query_selector("b").unwrap().is_none());
    assert_eq!(row.first_element_child().unwrap().text_content().unwrap(), "<b>x</b>");
}

#[wasm_bindgen_test]
async fn test_load_and_toggle() {
    let source = FixedSource {
        entries: vec![
            entry("A", None, 500),
            entry("B", Some("128GB"), -200),
            entry("C", None, 1500),
        ],
        meta: MetaInfo::default(),
    };
    let controller = ViewController::new(source, setup_page());

    controller.load().await.unwrap();
    assert_eq!(list_texts(controller.page()), vec!["C+1,500円", "A+500円"]);
    let meta = controller.page().element(META_ID).unwrap();
    assert_eq!(meta.text_content().unwrap(), "更新：-");

    controller.set_mode(Mode::Loss).await.unwrap();
    assert_eq!(list_texts(controller.page()), vec!["B 128GB-200円"]);

    let profit = controller.page().element("btnProfit").unwrap();
    let loss = controller.page().element("btnLoss").unwrap();
    assert!(!profit.class_list().contains("active"));
    assert!(loss.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn test_missing_element() {
    let page = setup_page();
    page.element(LIST_ID).unwrap().remove();

    let result = page.clear_list();
    assert!(matches!(result, Err(Error::MissingElement(id)) if id == "list"));
}

#[wasm_bindgen_test]
async fn test_mount_loads_and_buttons_switch_mode() {
    let page = setup_page();
    App::new(sample_source(), DomPage::new(document())).mount().unwrap();
    settle().await;

    assert_eq!(list_texts(&page), vec!["C+1,500円", "A+500円"]);
    let meta = page.element(META_ID).unwrap();
    assert_eq!(meta.text_content().unwrap(), "更新：2025-10-01 09:00:00");

    click(&page, "btnLoss");
    settle().await;
    assert_eq!(list_texts(&page), vec!["B 128GB-200円"]);
    assert!(is_active(&page, "btnLoss"));
    assert!(!is_active(&page, "btnProfit"));

    click(&page, "btnProfit");
    settle().await;
    assert_eq!(list_texts(&page), vec!["C+1,500円", "A+500円"]);
    assert!(is_active(&page, "btnProfit"));
    assert!(!is_active(&page, "btnLoss"));
}

#[wasm_bindgen_test]
async fn test_mount_reports_load_errors_to_handler() {
    let page = setup_page();
    let errors: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = errors.clone();

    App::new(FailingSource, DomPage::new(document()))
        .with_error_handler(move |e| sink.borrow_mut().push(e.to_string()))
        .mount()
        .unwrap();
    settle().await;

    assert_eq!(errors.borrow().len(), 1);
    assert!(errors.borrow()[0].contains("500"));
    assert!(list_texts(&page).is_empty());

    click(&page, "btnLoss");
    settle().await;
    assert_eq!(errors.borrow().len(), 2);
}

#[wasm_bindgen_test]
fn test_mount_requires_toggle_buttons() {
    let page = setup_page();
    page.element("btnLoss").unwrap().remove();

    let result = App::new(sample_source(), DomPage::new(document())).mount();
    assert!(matches!(result, Err(Error::MissingElement(id)) if id == "btnLoss"));
}
