use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

const ENV_GLOBAL: &str = "__PASSRESET_ENV";
const CONFIG_GLOBAL: &str = "__PASSRESET_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
}

impl RuntimeConfig {
    /// Returns the configured base URL without a trailing slash, ignoring blanks.
    pub fn normalized_base_url(&self) -> Option<String> {
        self.api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
    }
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
    // Optional global object, e.g. window.__PASSRESET_ENV = { API_BASE_URL: "..." }
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.into_iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &key.into()).ok())
        .find(|value| !value.is_undefined() && !value.is_null())
        .and_then(|value| value.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    read_global(ENV_GLOBAL, ["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global(CONFIG_GLOBAL, ["api_base_url", "API_BASE_URL"]))
        .and_then(|url| {
            RuntimeConfig {
                api_base_url: Some(url),
            }
            .normalized_base_url()
        })
}

fn cache_base_url(value: String) -> String {
    API_BASE_URL.get_or_init(|| value).clone()
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        log::debug!("config.json not available (status {})", resp.status());
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(existing);
    }
    if let Some(url) = fetch_runtime_config()
        .await
        .and_then(|cfg| cfg.normalized_base_url())
    {
        return cache_base_url(url);
    }
    log::warn!(
        "No API base URL configured; falling back to {}",
        DEFAULT_API_BASE_URL
    );
    cache_base_url(DEFAULT_API_BASE_URL.to_string())
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::info!("Using API base URL {}", base_url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_config_accepts_either_key_case() {
        let lower: RuntimeConfig =
            serde_json::from_str(r#"{"api_base_url":"https://api.example.com/api"}"#).unwrap();
        let upper: RuntimeConfig =
            serde_json::from_str(r#"{"API_BASE_URL":"https://api.example.com/api"}"#).unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn normalized_base_url_trims_trailing_slash_and_blanks() {
        let cfg = RuntimeConfig {
            api_base_url: Some(" https://api.example.com/api/ ".into()),
        };
        assert_eq!(
            cfg.normalized_base_url().as_deref(),
            Some("https://api.example.com/api")
        );

        let blank = RuntimeConfig {
            api_base_url: Some("   ".into()),
        };
        assert_eq!(blank.normalized_base_url(), None);
        assert_eq!(RuntimeConfig::default().normalized_base_url(), None);
    }
}
