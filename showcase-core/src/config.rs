/// Widget configuration with page defaults.
///
/// Every field has a default, so JSON overrides may name only what they change.
use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    pub container_id: String,
    pub radius: f32,
    pub detail: u32,
    /// Horizontal offset of the sphere, keeps it off-centre
    pub offset_x: f32,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub camera_z: f32,
    pub spin: SpinRate,
    pub color: String,
    pub opacity: f64,
    pub line_width: f64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            container_id: "hero-animation".to_string(),
            radius: 1.2,
            detail: 4,
            offset_x: -2.0,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_z: 1.8,
            spin: SpinRate::default(),
            color: "#ffea00".to_string(),
            opacity: 0.8,
            line_width: 2.0,
        }
    }
}

/// Per-frame angle increments, radians
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpinRate {
    pub dx: f32,
    pub dy: f32,
}

impl Default for SpinRate {
    /// The speed the hero has always shipped with: 0.002 rad/frame about X,
    /// 0.004 rad/frame about Y.
    fn default() -> Self {
        Self {
            dx: 0.002,
            dy: 0.004,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    pub track_id: String,
    pub prev_id: String,
    pub next_id: String,
    pub indicators_id: String,
    pub data_url: String,
    pub max_posts: usize,
    /// Horizontal travel in pixels a touch must exceed to change slide
    pub swipe_threshold: f64,
    pub detail_page: String,
    pub placeholder: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            track_id: "research-carousel".to_string(),
            prev_id: "research-prev".to_string(),
            next_id: "research-next".to_string(),
            indicators_id: "carousel-indicators".to_string(),
            data_url: "data/processed_posts.json".to_string(),
            max_posts: 6,
            swipe_threshold: 50.0,
            detail_page: "article.html".to_string(),
            placeholder: "Unable to load insights.".to_string(),
        }
    }
}

/// Parse a JSON override; `None` or blank input gives the defaults
pub fn from_json<T>(json: Option<&str>) -> Result<T, ConfigError>
where
    T: Default + for<'de> Deserialize<'de>,
{
    match json.map(str::trim) {
        None | Some("") => Ok(T::default()),
        Some(text) => serde_json::from_str(text).map_err(ConfigError::Parse),
    }
}
