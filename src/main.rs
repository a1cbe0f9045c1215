// ./src/main.rs
use bevy::input::common_conditions::input_toggle_active;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

// Eigene Module deklarieren
pub mod debug;
pub mod globe;
pub mod math;
pub mod setup; // Kamera, Licht, Globus und Overlay

use debug::{
    ui::{globe_control_ui_system, info_modal_ui_system},
    visualization::{
        normal_vector::draw_pin_normals_system, sphere_grid::draw_sphere_grid_gizmos,
    },
};
use globe::components::{Globe, OverlaySphere};
use globe::demo::{DemoPlugin, DemoSystems};
use globe::pins::{Pin, PinRegistry, pick_pin_on_click_system, spawn_pins_system};
use globe::resources::{GlobeSession, GlobeSettings};
use globe::systems::*;
use setup::setup_scene;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    level: Level::INFO,
                    filter: "wgpu=error,naga=warn,pin_globe=debug".to_string(),
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Pin Globe".to_string(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin)
        .add_plugins(PanOrbitCameraPlugin)
        .add_plugins(
            WorldInspectorPlugin::new().run_if(input_toggle_active(false, KeyCode::F1)),
        )
        .add_plugins(DemoPlugin)
        .register_type::<Globe>()
        .register_type::<OverlaySphere>()
        .register_type::<Pin>()
        .init_resource::<GlobeSettings>()
        .init_resource::<GlobeSession>()
        .init_resource::<PinRegistry>()
        .add_systems(Startup, (setup_scene, spawn_pins_system).chain())
        // Block 1: UI und Eingaben, Block 2 (Demo) kommt aus dem DemoPlugin
        .add_systems(
            Update,
            (globe_control_ui_system, info_modal_ui_system).chain().before(DemoSystems),
        )
        .add_systems(
            Update,
            (
                // Block 3: Picking und Szene aktualisieren
                pick_pin_on_click_system,
                tick_modal_system,
                auto_rotate_system,
                animate_pins_system,
                apply_overlay_system,
            )
                .chain()
                .after(DemoSystems),
        )
        .add_systems(Update, (draw_sphere_grid_gizmos, draw_pin_normals_system))
        .run();
}
