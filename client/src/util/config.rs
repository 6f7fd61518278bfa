//! API address configuration.
//!
//! The base address is baked in at build time from `BLOG_SERVER_URI` and can
//! be overridden at runtime through `window.BLOG_CONFIG.server_uri`, so a
//! static deployment can be pointed at another backend without rebuilding.
//! Values here are public; never put secrets in them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Frontend configuration resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Load build-time values and apply any runtime override.
    pub fn load() -> Self {
        let mut config = Self {
            api_base_url: option_env!("BLOG_SERVER_URI").unwrap_or("").to_owned(),
        };
        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }
        config
    }

    /// Join the configured base address with an API path.
    pub fn url(&self, path: &str) -> String {
        join_url(&self.api_base_url, path)
    }
}

#[derive(Default)]
struct RuntimeConfig {
    server_uri: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.server_uri {
        config.api_base_url = value;
    }
}

/// Join `base` and `path` with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let path = path.trim();
    if base.is_empty() {
        path.to_owned()
    } else {
        format!("{base}/{}", path.trim_start_matches('/'))
    }
}

#[cfg(feature = "hydrate")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("BLOG_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);
    let server_uri = Reflect::get(&object, &JsValue::from_str("server_uri"))
        .ok()
        .and_then(|value| value.as_string())
        .and_then(|value| normalize_runtime_value(&value));
    Some(RuntimeConfig { server_uri })
}

#[cfg(not(feature = "hydrate"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
