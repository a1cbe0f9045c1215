// src/globe/mod.rs
pub mod components;
pub mod demo;
pub mod pins;
pub mod resources;
pub mod state;
pub mod systems;
pub mod temperature;
