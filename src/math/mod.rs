pub mod error;
pub mod ray;
pub mod sphere;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{GlobeError, GlobeResult};
pub use ray::PickRay;
pub use sphere::{lat_lon_to_vec3, vec3_to_lat_lon};
