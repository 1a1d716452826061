//! Compile-time site configuration.
//!
//! Values come from `option_env!`; `build.rs` forwards them from `.env` /
//! `.env.local` when they are not already set in the environment.

pub const DEFAULT_SITE_ORIGIN: &str = "https://samcreative-solutions.com";
pub const DEFAULT_ASSET_ORIGIN: &str = "https://cpiuqrtrodylcxedzbpt.supabase.co";
pub const FONT_ORIGIN: &str = "https://fonts.googleapis.com";
pub const IMAGE_CDN_ORIGIN: &str = "https://images.pexels.com";
pub const SERVICE_WORKER_PATH: &str = "/sw.js";
pub const VIEWPORT_CONTENT: &str = "width=device-width, initial-scale=1.0, viewport-fit=cover";
pub const CRITICAL_RESOURCES: &[&str] = &["/logo.png", "/favicon.svg"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub origin: String,
    pub asset_origin: String,
    pub service_worker: &'static str,
    pub viewport: &'static str,
    pub preload: &'static [&'static str],
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self {
            origin: env_or(option_env!("SAMCREATIVE_SITE_ORIGIN"), DEFAULT_SITE_ORIGIN),
            asset_origin: env_or(option_env!("SAMCREATIVE_ASSET_ORIGIN"), DEFAULT_ASSET_ORIGIN),
            service_worker: SERVICE_WORKER_PATH,
            viewport: VIEWPORT_CONTENT,
            preload: CRITICAL_RESOURCES,
        }
    }

    /// Origins that get a `<link rel="preconnect">` on mount.
    pub fn preconnect(&self) -> Vec<String> {
        let mut origins = vec![FONT_ORIGIN.to_string(), IMAGE_CDN_ORIGIN.to_string()];
        if !origins.contains(&self.asset_origin) {
            origins.push(self.asset_origin.clone());
        }
        origins
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or(value: Option<&'static str>, fallback: &str) -> String {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(fallback)
        .trim_end_matches('/')
        .to_string()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreloadKind {
    Style,
    Script,
    Image,
}

impl PreloadKind {
    pub fn as_attr(self) -> &'static str {
        match self {
            PreloadKind::Style => "style",
            PreloadKind::Script => "script",
            PreloadKind::Image => "image",
        }
    }
}

/// `as` value for a `<link rel="preload">`, from the file extension.
pub fn preload_kind(resource: &str) -> Option<PreloadKind> {
    let path = resource.split(['?', '#']).next().unwrap_or(resource);
    let ext = path.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "css" => Some(PreloadKind::Style),
        "js" => Some(PreloadKind::Script),
        "jpg" | "jpeg" | "png" | "webp" => Some(PreloadKind::Image),
        _ => None,
    }
}
