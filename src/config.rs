use crate::error::{KaitoriError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const USER_AGENT_ENV: &str = "KAITORI_USER_AGENT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub user_agent: String,
    pub timeout_seconds: u64,
    /// 森森買取の価格一覧ページ
    pub morimori_url: String,
    /// 機種名 → Apple公式の購入ページ
    pub apple_pages: BTreeMap<String, String>,
    /// `diff.json` / `meta.json` の出力先
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        let apple_pages = [
            ("iPhone 17", "https://www.apple.com/jp/shop/buy-iphone/iphone-17"),
            ("iPhone 17 Pro", "https://www.apple.com/jp/shop/buy-iphone/iphone-17-pro"),
            // Pro Max は Pro と同じページで販売されている
            ("iPhone 17 Pro Max", "https://www.apple.com/jp/shop/buy-iphone/iphone-17-pro"),
            ("iPhone Air", "https://www.apple.com/jp/shop/buy-iphone/iphone-air"),
        ]
        .into_iter()
        .map(|(model, url)| (model.to_string(), url.to_string()))
        .collect();

        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122 Safari/537.36".into(),
            timeout_seconds: 30,
            morimori_url: "https://www.morimori-kaitori.jp/search?sk=iPhone17&page=1&price-list=true".into(),
            apple_pages,
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込み（無ければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| KaitoriError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("kaitori-diff").join("config.json"))
    }

    /// User-Agent（環境変数を優先）
    pub fn user_agent(&self) -> String {
        std::env::var(USER_AGENT_ENV).unwrap_or_else(|_| self.user_agent.clone())
    }

    pub fn set_user_agent(&mut self, user_agent: String) -> Result<()> {
        self.user_agent = user_agent;
        self.save()
    }
}
