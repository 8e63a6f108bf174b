use std::{collections::HashMap, fs};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub backend_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:8000".into(),
        }
    }
}

/// Layered settings: defaults, then `portfolio.toml` in the working
/// directory, then environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("portfolio.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("backend_url") {
                settings.backend_url = normalize_backend_url(v);
            }
        }
    }

    if let Ok(v) = std::env::var("BACKEND_URL") {
        settings.backend_url = normalize_backend_url(&v);
    }
    if let Ok(v) = std::env::var("APP__BACKEND_URL") {
        settings.backend_url = normalize_backend_url(&v);
    }

    settings
}

fn normalize_backend_url(raw: &str) -> String {
    let raw = raw.trim();

    if raw.is_empty() {
        return Settings::default().backend_url;
    }

    // Request paths are joined as "{backend_url}/api/...", so the base must
    // not carry a trailing slash.
    raw.trim_end_matches('/').to_string()
}
