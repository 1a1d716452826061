use url::Url;

use crate::lazy::effective_quality;

const PEXELS_HOST: &str = "pexels.com";

pub const DEFAULT_QUALITY: u8 = 80;

/// Rewrites Pexels CDN URLs to a sized, compressed variant. Any other URL,
/// or one that does not parse, comes back unchanged.
pub fn optimize_image_url(
    src: &str,
    width: Option<u32>,
    height: Option<u32>,
    quality: u8,
) -> String {
    let Ok(mut url) = Url::parse(src) else {
        return src.to_string();
    };
    let is_pexels = url
        .host_str()
        .map(|host| host == PEXELS_HOST || host.ends_with(".pexels.com"))
        .unwrap_or(false);
    if !is_pexels {
        return src.to_string();
    }
    url.set_fragment(None);
    url.set_query(None);
    {
        let mut query = url.query_pairs_mut();
        if let Some(width) = width {
            query.append_pair("w", &width.to_string());
        }
        if let Some(height) = height {
            query.append_pair("h", &height.to_string());
        }
        query
            .append_pair("auto", "compress")
            .append_pair("cs", "tinysrgb")
            .append_pair("fit", "crop")
            .append_pair("q", &quality.min(100).to_string());
    }
    url.into()
}

/// An image plus the variant the page requests for it. Preloads and the
/// rendered `<img>` both derive their URL from here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizedImage {
    pub src: &'static str,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub quality: u8,
}

impl SizedImage {
    pub const fn new(src: &'static str, width: u32, height: u32, quality: u8) -> Self {
        Self {
            src,
            width: Some(width),
            height: Some(height),
            quality,
        }
    }

    /// URL to fetch; constrained connections get the reduced quality.
    pub fn url(&self, high_quality: bool) -> String {
        optimize_image_url(
            self.src,
            self.width,
            self.height,
            effective_quality(self.quality, high_quality),
        )
    }
}

/// `sizes` attribute for a set of `(name, max_width)` breakpoints.
pub fn responsive_sizes(breakpoints: &[(&str, u32)]) -> String {
    breakpoints
        .iter()
        .map(|(_, width)| format!("(max-width: {width}px) {width}px"))
        .collect::<Vec<_>>()
        .join(", ")
}
