//! アプリケーション起動
//!
//! 切替ボタンにクリックハンドラを登録し、初回の読み込みを行う。

use crate::api::HttpSource;
use crate::dom::DomPage;
use gloo::events::EventListener;
use kaitori_diff_common::{DataSource, Error, Mode, Result, ViewController};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

/// 読み込み失敗時に呼ばれるハンドラ
pub type ErrorHandler = Rc<dyn Fn(&Error)>;

/// ブラウザ上のランキング表示
pub struct App<S> {
    controller: Rc<ViewController<S, DomPage>>,
    on_error: ErrorHandler,
}

impl<S: DataSource + 'static> App<S> {
    pub fn new(source: S, page: DomPage) -> Self {
        Self {
            controller: Rc::new(ViewController::new(source, page)),
            on_error: Rc::new(|e: &Error| {
                gloo::console::error!(format!("読み込み失敗: {}", e));
            }),
        }
    }

    /// 読み込みエラーの通知先を差し替える
    pub fn with_error_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Error) + 'static,
    {
        self.on_error = Rc::new(handler);
        self
    }

    /// ボタンにハンドラを登録し、初回読み込みを開始する
    pub fn mount(self) -> Result<()> {
        for mode in Mode::ALL {
            let button = self.controller.page().element(mode.button_id())?;
            let controller = self.controller.clone();
            let on_error = self.on_error.clone();

            EventListener::new(&button, "click", move |_| {
                let controller = controller.clone();
                let on_error = on_error.clone();
                spawn_local(async move {
                    // 前回の読み込みは取り消さない（後に完了した方の描画が残る）
                    if let Err(e) = controller.set_mode(mode).await {
                        on_error(&e);
                    }
                });
            })
            .forget();
        }

        let controller = self.controller.clone();
        let on_error = self.on_error.clone();
        spawn_local(async move {
            match controller.load().await {
                Ok(count) => gloo::console::debug!(format!("{}件を表示", count)),
                Err(e) => on_error(&e),
            }
        });
        Ok(())
    }
}

/// `document` からアプリを組み立てて起動する
pub fn start() -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::Dom("document is not available".into()))?;

    App::new(HttpSource::default(), DomPage::new(document)).mount()
}
