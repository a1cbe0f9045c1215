// src/globe/pins/mod.rs
pub mod catalog;
pub mod components;
pub mod picking;
pub mod registry;

pub use self::components::{Pin, advance_pulse};
pub use self::picking::pick_pin_on_click_system;
pub use self::registry::{PinRegistry, pin_transform, spawn_pins_system};
