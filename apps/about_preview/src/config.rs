use std::{fs, path::Path, time::Duration};

use about_core::{image_url::DEFAULT_CDN_BASE_URL, RenderSize, DEFAULT_ROTATION_INTERVAL};
use serde::Deserialize;
use tracing::warn;

const DEFAULT_CONFIG_FILE: &str = "about.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub rotation_interval_ms: u64,
    pub image_width: u32,
    pub image_height: u32,
    pub cdn_base_url: String,
    pub cdn_project_id: String,
    pub cdn_dataset: String,
}

impl Default for Settings {
    fn default() -> Self {
        let size = RenderSize::default();
        Self {
            rotation_interval_ms: DEFAULT_ROTATION_INTERVAL.as_millis() as u64,
            image_width: size.width,
            image_height: size.height,
            cdn_base_url: DEFAULT_CDN_BASE_URL.into(),
            cdn_project_id: "local".into(),
            cdn_dataset: "production".into(),
        }
    }
}

impl Settings {
    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }

    pub fn render_size(&self) -> RenderSize {
        RenderSize {
            width: self.image_width,
            height: self.image_height,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    rotation_interval_ms: Option<u64>,
    image_width: Option<u32>,
    image_height: Option<u32>,
    cdn_base_url: Option<String>,
    cdn_project_id: Option<String>,
    cdn_dataset: Option<String>,
}

/// Defaults, then `about.toml` (or `config_path`), then `ABOUT__*` env vars.
pub fn load_settings(config_path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();

    let path = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    match fs::read_to_string(path) {
        Ok(raw) => apply_file(&mut settings, &raw),
        Err(err) if config_path.is_some() => {
            warn!("config: cannot read {}: {err}", path.display());
        }
        Err(_) => {}
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<FileSettings>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            warn!("config: ignoring unparsable settings file: {err}");
            return;
        }
    };

    if let Some(v) = file_cfg.rotation_interval_ms {
        settings.rotation_interval_ms = v;
    }
    if let Some(v) = file_cfg.image_width {
        settings.image_width = v;
    }
    if let Some(v) = file_cfg.image_height {
        settings.image_height = v;
    }
    if let Some(v) = file_cfg.cdn_base_url {
        settings.cdn_base_url = v;
    }
    if let Some(v) = file_cfg.cdn_project_id {
        settings.cdn_project_id = v;
    }
    if let Some(v) = file_cfg.cdn_dataset {
        settings.cdn_dataset = v;
    }
    sanitize(settings);
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("ABOUT__ROTATION_INTERVAL_MS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.rotation_interval_ms = parsed;
        }
    }
    if let Some(v) = lookup("ABOUT__IMAGE_WIDTH") {
        if let Ok(parsed) = v.parse::<u32>() {
            settings.image_width = parsed;
        }
    }
    if let Some(v) = lookup("ABOUT__IMAGE_HEIGHT") {
        if let Ok(parsed) = v.parse::<u32>() {
            settings.image_height = parsed;
        }
    }
    if let Some(v) = lookup("ABOUT__CDN_BASE_URL") {
        settings.cdn_base_url = v;
    }
    if let Some(v) = lookup("ABOUT__CDN_PROJECT_ID") {
        settings.cdn_project_id = v;
    }
    if let Some(v) = lookup("ABOUT__CDN_DATASET") {
        settings.cdn_dataset = v;
    }
    sanitize(settings);
}

fn sanitize(settings: &mut Settings) {
    if settings.rotation_interval_ms == 0 {
        settings.rotation_interval_ms = Settings::default().rotation_interval_ms;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
