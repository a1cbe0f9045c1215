// src/globe/pins/components.rs
use crate::globe::resources::GlobeSettings;
use bevy::prelude::*;

/// Zustand der pulsierenden Ring-Animation eines Pins
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct PulseState {
    pub scale: f32,
    pub growing: bool,
}

impl Default for PulseState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            growing: true,
        }
    }
}

/// Marker für einen Pin. `index` zeigt in die `PinRegistry`.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Pin {
    pub index: usize,
    pub pulse: PulseState,
}

/// Schreitet die Puls-Animation um `dt` Sekunden fort und liefert die neue Skalierung.
///
/// Wächst mit `pulse_rate` bis `pulse_max`, schrumpft dann bis `pulse_min` usw.
pub fn advance_pulse(state: &mut PulseState, dt: f32, settings: &GlobeSettings) -> f32 {
    let delta = settings.pulse_rate * dt;
    if state.growing {
        state.scale += delta;
        if state.scale >= settings.pulse_max {
            state.scale = settings.pulse_max;
            state.growing = false;
        }
    } else {
        state.scale -= delta;
        if state.scale <= settings.pulse_min {
            state.scale = settings.pulse_min;
            state.growing = true;
        }
    }
    state.scale
}
