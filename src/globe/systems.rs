// src/globe/systems.rs
use super::components::{Globe, OverlaySphere};
use super::pins::{Pin, PinRegistry, advance_pulse, pin_transform};
use super::resources::{GlobeSession, GlobeSettings};
use bevy::prelude::*;

/// Materialien der Overlay-Kugel (werden in `setup_scene` angelegt)
#[derive(Resource, Debug, Clone)]
pub struct OverlayMaterials {
    pub base: Handle<StandardMaterial>,
    pub temperature: Handle<StandardMaterial>,
}

impl OverlayMaterials {
    pub fn select(&self, temperature: bool) -> Handle<StandardMaterial> {
        if temperature {
            self.temperature.clone()
        } else {
            self.base.clone()
        }
    }
}

/// Pro Frame: Puls-Animation fortschreiben und Pin-Transform aus dem GeoPoint neu berechnen.
pub fn animate_pins_system(
    time: Res<Time>,
    settings: Res<GlobeSettings>,
    registry: Res<PinRegistry>,
    mut pins: Query<(&mut Pin, &mut Transform)>,
) {
    let dt = time.delta_seconds();
    for (mut pin, mut transform) in pins.iter_mut() {
        let Some(entry) = registry.get(pin.index) else {
            continue;
        };
        let scale = advance_pulse(&mut pin.pulse, dt, &settings);
        *transform = pin_transform(&entry.point, &settings, scale);
    }
}

pub fn auto_rotate_system(
    time: Res<Time>,
    session: Res<GlobeSession>,
    settings: Res<GlobeSettings>,
    mut globe: Query<&mut Transform, With<Globe>>,
    mut overlay: Query<&mut Transform, (With<OverlaySphere>, Without<Globe>)>,
) {
    if !session.auto_rotate {
        return;
    }
    let dt = time.delta_seconds();
    for mut transform in globe.iter_mut() {
        transform.rotate_y(settings.globe_rotation_speed * dt);
    }
    for mut transform in overlay.iter_mut() {
        transform.rotate_y(settings.overlay_rotation_speed * dt);
    }
}

/// Überträgt Radius und Materialwahl der Sitzung auf die Overlay-Kugel.
pub fn apply_overlay_system(
    session: Res<GlobeSession>,
    materials: Option<Res<OverlayMaterials>>,
    mut overlay: Query<(&mut Transform, &mut Handle<StandardMaterial>), With<OverlaySphere>>,
) {
    if !session.is_changed() {
        return;
    }
    for (mut transform, mut material) in overlay.iter_mut() {
        // Mesh hat Radius 1.0, skaliert wird gleichmäßig
        let scale = Vec3::splat(session.overlay_radius);
        if transform.scale != scale {
            transform.scale = scale;
        }
        if let Some(materials) = materials.as_ref() {
            let selected = materials.select(session.temperature_overlay);
            if *material != selected {
                debug!(
                    "Overlay material switched (temperature = {})",
                    session.temperature_overlay
                );
                *material = selected;
            }
        }
    }
}

pub fn tick_modal_system(time: Res<Time>, mut session: ResMut<GlobeSession>) {
    // Nur mutably dereferenzieren, wenn ein Timer läuft (sonst wäre die Sitzung jeden Frame "changed")
    let has_timer = session
        .modal
        .as_ref()
        .is_some_and(|modal| modal.auto_close.is_some());
    if has_timer && session.tick_modal(time.delta()) {
        info!("Info modal closed automatically.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::globe::pins::catalog::{GeoInfo, GeoPoint};
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    fn world_with_time(delta: Duration) -> World {
        let mut world = World::new();
        let mut time = Time::<()>::default();
        time.advance_by(delta);
        world.insert_resource(time);
        world.init_resource::<GlobeSettings>();
        world.init_resource::<GlobeSession>();
        world
    }

    #[test]
    fn test_auto_rotate_respects_flag() {
        let mut world = world_with_time(Duration::from_secs(1));
        let globe = world.spawn((Globe, Transform::default())).id();
        let overlay = world.spawn((OverlaySphere, Transform::default())).id();

        world.run_system_once(auto_rotate_system);
        let rotated = world.get::<Transform>(globe).unwrap().rotation;
        assert_ne!(rotated, Quat::IDENTITY);
        assert_ne!(world.get::<Transform>(overlay).unwrap().rotation, Quat::IDENTITY);

        world.resource_mut::<GlobeSession>().auto_rotate = false;
        world.run_system_once(auto_rotate_system);
        assert_eq!(world.get::<Transform>(globe).unwrap().rotation, rotated);
    }

    #[test]
    fn test_pins_stay_on_sphere_while_pulsing() {
        let mut world = world_with_time(Duration::from_millis(250));
        let mut registry = PinRegistry::default();
        let point = GeoPoint::new(
            51.9225,
            4.4792,
            GeoInfo {
                title: "Rotterdam".to_string(),
                body: String::new(),
                image_url: String::new(),
            },
        )
        .unwrap();
        // Absichtlich verschobene Startposition
        let pin = world
            .spawn((Pin::default(), Transform::from_xyz(5.0, 0.0, 0.0)))
            .id();
        registry.push(point, pin);
        world.insert_resource(registry);

        for _ in 0..5 {
            world.run_system_once(animate_pins_system);
            let transform = *world.get::<Transform>(pin).unwrap();
            assert!((transform.translation.length() - 1.08).abs() < 1e-5);
            assert!(transform.scale.x >= 1.0 && transform.scale.x <= 1.2);
        }
        assert!(world.get::<Pin>(pin).unwrap().pulse.scale > 1.0);
    }

    #[test]
    fn test_overlay_follows_session() {
        let mut world = world_with_time(Duration::ZERO);
        let base = Handle::<StandardMaterial>::weak_from_u128(1);
        let temperature = Handle::<StandardMaterial>::weak_from_u128(2);
        world.insert_resource(OverlayMaterials {
            base: base.clone(),
            temperature: temperature.clone(),
        });
        let overlay = world
            .spawn((OverlaySphere, Transform::default(), base.clone()))
            .id();

        {
            let mut session = world.resource_mut::<GlobeSession>();
            session.overlay_radius = 1.05;
            session.temperature_overlay = true;
        }
        world.run_system_once(apply_overlay_system);

        assert_eq!(world.get::<Transform>(overlay).unwrap().scale, Vec3::splat(1.05));
        assert_eq!(*world.get::<Handle<StandardMaterial>>(overlay).unwrap(), temperature);
    }
}
