pub mod api;
pub mod leaflet;
pub mod logging;

pub use api::ApiClient;
pub use logging::Logger;
