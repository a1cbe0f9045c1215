// src/globe/demo/systems.rs
use super::resources::{DemoSequence, DemoStep};
use crate::globe::components::DemoLight;
use crate::globe::pins::{Pin, PinRegistry};
use crate::globe::resources::{GlobeSession, GlobeSettings};
use crate::globe::state::ViewMode;
use bevy::prelude::*;

/// Sichtbarkeit aller Pins in Registry-Reihenfolge
fn collect_visibility(
    registry: &PinRegistry,
    pins: &Query<&mut Visibility, With<Pin>>,
) -> Vec<bool> {
    registry
        .entries()
        .map(|entry| {
            pins.get(entry.entity)
                .map_or(false, |visibility| *visibility != Visibility::Hidden)
        })
        .collect()
}

fn write_visibility(
    registry: &PinRegistry,
    flags: &[bool],
    pins: &mut Query<&mut Visibility, With<Pin>>,
) {
    for (entry, visible) in registry.entries().zip(flags) {
        if let Ok(mut visibility) = pins.get_mut(entry.entity) {
            let wanted = if *visible {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
            if *visibility != wanted {
                *visibility = wanted;
            }
        }
    }
}

/// Setzt den UI-Schalter in Zustandswechsel um. Ein Start während laufender Demo wird ignoriert.
pub fn handle_demo_switch_system(
    session: Res<GlobeSession>,
    current_state: Res<State<ViewMode>>,
    mut next_state: ResMut<NextState<ViewMode>>,
) {
    match (*current_state.get(), session.demo_switch) {
        (ViewMode::Normal, true) => {
            info!("Demo requested. Transitioning to Demo mode.");
            next_state.set(ViewMode::Demo);
        }
        (ViewMode::Demo, false) => {
            info!("Demo switch cleared. Returning to Normal mode.");
            next_state.set(ViewMode::Normal);
        }
        _ => {}
    }
}

/// Esc bricht eine laufende Demo ab (die Steuerung ist währenddessen ausgeblendet)
pub fn cancel_demo_on_escape_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<GlobeSession>,
) {
    if keys.just_pressed(KeyCode::Escape) && session.demo_switch {
        session.demo_switch = false;
    }
}

pub fn enter_demo_system(
    mut commands: Commands,
    mut sequence: ResMut<DemoSequence>,
    mut session: ResMut<GlobeSession>,
    settings: Res<GlobeSettings>,
    registry: Res<PinRegistry>,
    mut pins: Query<&mut Visibility, With<Pin>>,
) {
    let mut flags = collect_visibility(&registry, &pins);
    if let Err(err) = sequence.begin(&mut session, &settings, &mut flags) {
        warn!("Ignoring demo start: {err}");
        return;
    }
    write_visibility(&registry, &flags, &mut pins);

    // Zwei Punktlichter, die die ganze Kugel ausleuchten
    let d = settings.demo_light_distance;
    for position in [Vec3::splat(d), Vec3::splat(-d)] {
        commands.spawn((
            PointLightBundle {
                point_light: PointLight {
                    intensity: 10_000_000.,
                    range: d * 4.0,
                    ..default()
                },
                transform: Transform::from_translation(position),
                ..default()
            },
            DemoLight,
        ));
    }

    info!("Demo started: {} pins hidden, rotation paused.", flags.len());
}

pub fn run_demo_system(
    time: Res<Time>,
    mut sequence: ResMut<DemoSequence>,
    mut session: ResMut<GlobeSession>,
    settings: Res<GlobeSettings>,
    registry: Res<PinRegistry>,
    mut pins: Query<&mut Visibility, With<Pin>>,
    mut next_state: ResMut<NextState<ViewMode>>,
) {
    let mut flags = collect_visibility(&registry, &pins);
    let step = sequence.advance(
        time.delta(),
        &mut session,
        &settings,
        &registry,
        &mut flags,
    );

    match step {
        DemoStep::Revealed(index) => {
            write_visibility(&registry, &flags, &mut pins);
            info!(
                "Demo revealed pin {index} at overlay radius {:.3}",
                session.overlay_radius
            );
        }
        DemoStep::Finished => {
            info!("Demo reached maximum overlay radius.");
            next_state.set(ViewMode::Normal);
        }
        DemoStep::Running | DemoStep::Idle => {}
    }
}

pub fn exit_demo_system(
    mut commands: Commands,
    mut sequence: ResMut<DemoSequence>,
    mut session: ResMut<GlobeSession>,
    settings: Res<GlobeSettings>,
    registry: Res<PinRegistry>,
    mut pins: Query<&mut Visibility, With<Pin>>,
    lights: Query<Entity, With<DemoLight>>,
) {
    let mut flags = collect_visibility(&registry, &pins);
    if sequence.finish(&mut session, &settings, &mut flags).is_some() {
        write_visibility(&registry, &flags, &mut pins);
        info!("Demo finished, previous view state restored.");
    }

    for light in lights.iter() {
        commands.entity(light).despawn_recursive();
    }
}
