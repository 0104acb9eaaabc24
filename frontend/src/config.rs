use shared::MapConfig;

/// Collection the page reads from and writes to, unless overridden at build time
pub const DEFAULT_RECORD_STORE_URL: &str = "https://sheetdb.io/api/v1/3s63hxbbg4u9w";

/// Deployment settings, fixed when the wasm bundle is built
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub record_store_url: String,
    pub map: MapConfig,
    /// How long a success notice stays up
    pub notice_timeout_ms: u32,
}

impl AppConfig {
    /// Reads `DATES_RECORD_STORE_URL` and `DATES_TILE_URL` from the build environment
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("DATES_RECORD_STORE_URL").filter(|u| !u.is_empty()) {
            config.record_store_url = url.trim_end_matches('/').to_string();
        }
        if let Some(tiles) = option_env!("DATES_TILE_URL").filter(|u| !u.is_empty()) {
            config.map.tile_url = tiles.to_string();
        }
        config
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            record_store_url: DEFAULT_RECORD_STORE_URL.to_string(),
            map: MapConfig::default(),
            notice_timeout_ms: 3000,
        }
    }
}
