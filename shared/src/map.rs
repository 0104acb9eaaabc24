use serde::{Deserialize, Serialize};

use crate::geo::{Bounds, LatLng, BANGALORE_BOUNDS};
use crate::story::{DateStory, STAR_COUNT};

pub const DEFAULT_TILE_URL: &str = "https://tiles.wmflabs.org/bw-mapnik/{z}/{x}/{y}.png";
pub const DEFAULT_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";
pub const DEFAULT_MARKER_ICON: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/images/marker-icon.png";

/// Everything the map widget needs to draw its initial view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub bounds: Bounds,
    pub tile_url: String,
    pub attribution: String,
    pub default_icon_url: String,
    pub icon_size: (u32, u32),
    pub icon_anchor: (i32, i32),
    pub popup_anchor: (i32, i32),
    pub icon_class: String,
    pub scroll_wheel_zoom: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            bounds: BANGALORE_BOUNDS,
            tile_url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            default_icon_url: DEFAULT_MARKER_ICON.to_string(),
            icon_size: (32, 32),
            icon_anchor: (16, 32),
            popup_anchor: (0, -32),
            icon_class: "custom-icon".to_string(),
            scroll_wheel_zoom: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupContent {
    pub location: String,
    pub story: String,
    pub stars: [bool; STAR_COUNT],
}

/// One marker ready to hand to the map layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSpec {
    pub key: String,
    pub position: LatLng,
    pub icon_url: String,
    pub popup: PopupContent,
}

/// One marker per visible story; stories without finite coordinates are skipped.
pub fn markers_for(visible: &[DateStory], config: &MapConfig) -> Vec<MarkerSpec> {
    visible
        .iter()
        .enumerate()
        .filter_map(|(index, story)| {
            let position = story.coordinates()?;
            Some(MarkerSpec {
                key: marker_key(index, story),
                position,
                icon_url: story.marker_icon(&config.default_icon_url).to_string(),
                popup: PopupContent {
                    location: story.location.clone(),
                    story: story.story.clone(),
                    stars: story.stars(),
                },
            })
        })
        .collect()
}

// Ids are time-based and may collide, so the position in the list is folded in
fn marker_key(index: usize, story: &DateStory) -> String {
    format!("{}-{}", index, story.id)
}
