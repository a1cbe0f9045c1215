// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GlobeError {
    #[error("Latitude out of range: {value} (expected -90..=90)")]
    LatitudeOutOfRange { value: f32 },

    #[error("Longitude out of range: {value} (expected -180..=180)")]
    LongitudeOutOfRange { value: f32 },

    #[error("Non-finite coordinate for '{title}'")]
    NonFiniteCoordinate { title: String },

    #[error("Demo sequence is already running")]
    DemoAlreadyRunning,

    #[error("No pin with index {index} in the registry")]
    PinNotFound { index: usize },
}

pub type GlobeResult<T> = Result<T, GlobeError>;
