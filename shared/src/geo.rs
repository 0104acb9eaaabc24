use serde::{Deserialize, Serialize};

/// Fraction digits kept for generated coordinates
pub const COORDINATE_PRECISION: i32 = 6;

/// Center used for jittered positions (MG Road area)
pub const BANGALORE_CENTER: LatLng = LatLng {
    lat: 12.9716,
    lng: 77.5946,
};

/// Initial viewport covering the city
pub const BANGALORE_BOUNDS: Bounds = Bounds {
    south_west: LatLng {
        lat: 12.7342,
        lng: 77.4098,
    },
    north_east: LatLng {
        lat: 13.1739,
        lng: 77.8566,
    },
};

/// Full width of the jitter window; positions land within center ± spread / 2
pub const JITTER_SPREAD: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }
}

/// Fabricate a position near `center`.
///
/// `sample` must yield uniform values in `[0, 1)`; one value is drawn for
/// latitude, then one for longitude. Out-of-range samples are clamped so the
/// result never leaves the jitter window.
pub fn jitter(center: LatLng, spread: f64, mut sample: impl FnMut() -> f64) -> LatLng {
    let mut offset = |origin: f64| {
        let unit = sample().clamp(0.0, 1.0);
        round_coordinate(origin + (unit - 0.5) * spread)
    };
    let lat = offset(center.lat);
    let lng = offset(center.lng);
    LatLng::new(lat, lng)
}

pub fn round_coordinate(value: f64) -> f64 {
    let scale = 10f64.powi(COORDINATE_PRECISION);
    (value * scale).round() / scale
}

pub fn format_coordinate(value: f64) -> String {
    format!("{:.*}", COORDINATE_PRECISION as usize, value)
}
