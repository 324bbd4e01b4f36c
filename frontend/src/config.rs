use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub time_zone: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static TIME_ZONE: OnceLock<Tz> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global_object(name: &str) -> Option<js_sys::Object> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    Some(js_sys::Object::from(any))
}

#[cfg(target_arch = "wasm32")]
fn read_string(obj: &js_sys::Object, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    // window.__HRDESK_ENV (env.js) wins over window.__HRDESK_CONFIG.
    let env = read_global_object("__HRDESK_ENV").map(|obj| RuntimeConfig {
        api_base_url: read_string(&obj, &["API_BASE_URL", "api_base_url"]),
        time_zone: read_string(&obj, &["TIME_ZONE", "time_zone"]),
    });
    if let Some(cfg) = env.filter(|cfg| cfg.api_base_url.is_some()) {
        return Some(cfg);
    }
    read_global_object("__HRDESK_CONFIG")
        .map(|obj| RuntimeConfig {
            api_base_url: read_string(&obj, &["api_base_url", "API_BASE_URL"]),
            time_zone: read_string(&obj, &["time_zone", "TIME_ZONE"]),
        })
        .filter(|cfg| cfg.api_base_url.is_some())
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_window_config(cfg: &RuntimeConfig) {
    let Some(w) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    if let Some(url) = &cfg.api_base_url {
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
    }
    if let Some(tz) = &cfg.time_zone {
        let _ = js_sys::Reflect::set(
            &obj,
            &"time_zone".into(),
            &wasm_bindgen::JsValue::from_str(tz),
        );
    }
    let _ = js_sys::Reflect::set(&w, &"__HRDESK_CONFIG".into(), &obj);
}

#[cfg(not(target_arch = "wasm32"))]
fn write_window_config(_cfg: &RuntimeConfig) {}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

pub fn parse_time_zone(value: Option<&str>) -> Tz {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
            log::error!("Unknown time zone '{}', falling back to UTC", name);
            Tz::UTC
        }),
        None => Tz::UTC,
    }
}

fn apply(cfg: RuntimeConfig) -> String {
    let _ = TIME_ZONE.set(parse_time_zone(cfg.time_zone.as_deref()));
    let url = cfg
        .api_base_url
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let _ = API_BASE_URL.set(url.clone());
    url
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return apply(existing);
    }
    match fetch_runtime_config().await {
        Some(cfg) => {
            write_window_config(&cfg);
            apply(cfg)
        }
        None => {
            log::debug!("No runtime config found, using {}", DEFAULT_API_BASE_URL);
            apply(RuntimeConfig::default())
        }
    }
}

pub fn current_time_zone() -> Tz {
    TIME_ZONE.get().copied().unwrap_or(Tz::UTC)
}

pub async fn init() {
    let base_url = await_api_base_url().await;
    log::info!(
        "Runtime config initialized (api: {}, tz: {})",
        base_url,
        current_time_zone()
    );
}
