// src/globe/demo/mod.rs
pub mod resources;
pub mod systems;

pub use resources::DemoSequence;
pub use systems::*;

use crate::globe::state::ViewMode;
use bevy::prelude::*;

/// Schalter, Esc-Abbruch und Demo-Tick laufen in dieser Reihenfolge
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DemoSystems;

/// Demo-Ablauf über den `ViewMode`-Zustand.
/// Erwartet `GlobeSettings`, `GlobeSession`, `PinRegistry` und `ButtonInput<KeyCode>`.
pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DemoSequence>()
            .init_state::<ViewMode>()
            .add_systems(OnEnter(ViewMode::Demo), enter_demo_system)
            .add_systems(OnExit(ViewMode::Demo), exit_demo_system)
            .add_systems(
                Update,
                (
                    cancel_demo_on_escape_system,
                    handle_demo_switch_system,
                    run_demo_system.run_if(in_state(ViewMode::Demo)),
                )
                    .chain()
                    .in_set(DemoSystems),
            );
    }
}
