//! `fetch` によるJSON取得
//!
//! キャッシュを使わず（`cache: no-store`）毎回最新の `diff.json` / `meta.json` を取得する。

use kaitori_diff_common::{DataSource, DiffEntry, Error, MetaInfo, Result};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

const DIFF_URL: &str = "./data/diff.json";
const META_URL: &str = "./data/meta.json";

/// ブラウザの `fetch` を使うデータ取得元
#[derive(Debug, Clone)]
pub struct HttpSource {
    pub entries_url: String,
    pub meta_url: String,
}

impl Default for HttpSource {
    fn default() -> Self {
        Self {
            entries_url: DIFF_URL.to_string(),
            meta_url: META_URL.to_string(),
        }
    }
}

impl DataSource for HttpSource {
    async fn fetch_entries(&self) -> Result<Vec<DiffEntry>> {
        fetch_json(&self.entries_url).await
    }

    async fn fetch_meta(&self) -> Result<MetaInfo> {
        fetch_json(&self.meta_url).await
    }
}

/// JS側の例外をエラー型に変換
fn js_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Fetch(message)
}

async fn fetch_text(url: &str) -> Result<String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoStore);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Fetch("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::HttpStatus {
            url: url.to_string(),
            status: resp.status(),
        });
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;

    text.as_string()
        .ok_or_else(|| Error::Fetch(format!("{}: response body is not text", url)))
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let body = fetch_text(url).await?;
    Ok(serde_json::from_str(&body)?)
}
