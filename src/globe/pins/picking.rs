// src/globe/pins/picking.rs
use super::components::Pin;
use super::registry::PinRegistry;
use crate::globe::components::Globe;
use crate::globe::resources::{GlobeSession, GlobeSettings};
use crate::math::{PickRay, ray::cursor_to_ndc};
use bevy::prelude::*;
use bevy_egui::EguiContexts;
use bevy_window::PrimaryWindow;

/// Pin-Scheibe in Weltkoordinaten, wie sie der Hit-Test sieht
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinCandidate {
    pub index: usize,
    pub center: Vec3,
    pub normal: Vec3,
    pub radius: f32,
    pub visible: bool,
}

/// Kugel, die Pins dahinter verdeckt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Occluder {
    pub center: Vec3,
    pub radius: f32,
}

/// Liefert den nächsten sichtbaren Pin entlang des Strahls als `(index, t)`.
pub fn pick_pin(
    ray: &PickRay,
    candidates: impl IntoIterator<Item = PinCandidate>,
    occluder: Option<Occluder>,
) -> Option<(usize, f32)> {
    let blocked_at = occluder.and_then(|o| ray.intersect_sphere(o.center, o.radius));

    candidates
        .into_iter()
        .filter(|c| c.visible)
        .filter_map(|c| {
            ray.intersect_disc(c.center, c.normal, c.radius)
                .map(|t| (c.index, t))
        })
        .filter(|&(_, t)| blocked_at.map_or(true, |blocked| t <= blocked))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Strahl aus NDC über die inverse View-Projection.
/// Entspricht `Camera::viewport_to_world`, nur mit explizitem NDC-Schritt.
pub fn ndc_ray(
    camera_transform: &GlobalTransform,
    projection: Mat4,
    ndc: Vec2,
) -> Option<PickRay> {
    let ndc_to_world = camera_transform.compute_matrix() * projection.inverse();
    // Reverse-Z: 1.0 ist die Near-Plane
    let near = ndc_to_world.project_point3(ndc.extend(1.0));
    let far = ndc_to_world.project_point3(ndc.extend(f32::EPSILON));
    if !near.is_finite() || !far.is_finite() {
        return None;
    }
    PickRay::through(near, far)
}

/// Strahl durch die Cursorposition (NDC -> Welt)
pub fn cursor_ray(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    cursor: Vec2,
) -> Option<PickRay> {
    let ndc = cursor_to_ndc(cursor, camera.logical_viewport_size()?)?;
    ndc_ray(camera_transform, camera.projection_matrix(), ndc)
}

/// Pin-Scheiben in Weltkoordinaten. Nur `Visibility::Hidden` schließt einen Pin aus.
pub fn pin_candidates(
    pins: &Query<(&Pin, &GlobalTransform, &Visibility)>,
    globe_center: Vec3,
    settings: &GlobeSettings,
) -> Vec<PinCandidate> {
    pins.iter()
        .map(|(pin, transform, visibility)| {
            let center = transform.translation();
            PinCandidate {
                index: pin.index,
                center,
                normal: (center - globe_center).normalize_or_zero(),
                radius: settings.pin_disc_radius * pin.pulse.scale,
                visible: *visibility != Visibility::Hidden,
            }
        })
        .collect()
}

/// Hit-Test eines Klick-Strahls: Treffer öffnet das Info-Fenster, ein Fehlschuss schließt es.
pub fn pick_with_ray(
    ray: &PickRay,
    pins: &Query<(&Pin, &GlobalTransform, &Visibility)>,
    globe: &Query<&GlobalTransform, With<Globe>>,
    registry: &PinRegistry,
    settings: &GlobeSettings,
    session: &mut GlobeSession,
) -> Option<usize> {
    let globe_center = globe.get_single().ok().map(|transform| transform.translation());
    let occluder = globe_center
        .filter(|_| settings.occlude_pins_by_globe)
        .map(|center| Occluder {
            center,
            radius: settings.globe_radius,
        });
    let candidates = pin_candidates(pins, globe_center.unwrap_or(Vec3::ZERO), settings);

    let Some((index, distance)) = pick_pin(ray, candidates, occluder) else {
        session.close_modal();
        return None;
    };
    match registry.modal_for(index, None) {
        Ok(modal) => {
            info!("Pin {index} hit at distance {distance:.3}: {}", modal.title);
            session.open_modal(modal);
            Some(index)
        }
        Err(err) => {
            warn!("Pin hit could not be resolved: {err}");
            None
        }
    }
}

pub fn pick_pin_on_click_system(
    mouse: Res<ButtonInput<MouseButton>>,
    mut contexts: EguiContexts,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform)>,
    globe_query: Query<&GlobalTransform, With<Globe>>,
    pin_query: Query<(&Pin, &GlobalTransform, &Visibility)>,
    registry: Res<PinRegistry>,
    settings: Res<GlobeSettings>,
    mut session: ResMut<GlobeSession>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    // Klicks auf egui-Fenster nicht durchreichen
    if contexts.ctx_mut().wants_pointer_input() {
        return;
    }

    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };
    let Some(ray) = cursor_ray(camera, camera_transform, cursor) else {
        return;
    };

    pick_with_ray(
        &ray,
        &pin_query,
        &globe_query,
        &registry,
        &settings,
        &mut session,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::globe::demo::{DemoSequence, enter_demo_system, exit_demo_system};
    use crate::globe::pins::catalog::landmarks;
    use crate::globe::pins::registry::pin_transform;
    use crate::math::lat_lon_to_vec3;
    use bevy::ecs::system::RunSystemOnce;
    use bevy::render::camera::CameraProjection;

    fn candidate(index: usize, center: Vec3, visible: bool) -> PinCandidate {
        PinCandidate {
            index,
            center,
            normal: center.normalize(),
            radius: 0.05,
            visible,
        }
    }

    fn camera_ray() -> PickRay {
        PickRay::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z).unwrap()
    }

    #[test]
    fn test_hit_front_pin() {
        let front = lat_lon_to_vec3(0.0, 0.0, 1.08);
        let hit = pick_pin(&camera_ray(), [candidate(3, front, true)], None);
        assert_eq!(hit.map(|(i, _)| i), Some(3));
    }

    #[test]
    fn test_miss_returns_none() {
        let off = lat_lon_to_vec3(40.0, 40.0, 1.08);
        assert!(pick_pin(&camera_ray(), [candidate(0, off, true)], None).is_none());
        assert!(pick_pin(&camera_ray(), [], None).is_none());
    }

    #[test]
    fn test_nearest_pin_wins() {
        let front = lat_lon_to_vec3(0.0, 0.0, 1.08);
        let back = lat_lon_to_vec3(0.0, 180.0, 1.08);
        let hit = pick_pin(
            &camera_ray(),
            [candidate(0, back, true), candidate(1, front, true)],
            None,
        );
        assert_eq!(hit.map(|(i, _)| i), Some(1));
    }

    #[test]
    fn test_hidden_pin_never_hit() {
        let front = lat_lon_to_vec3(0.0, 0.0, 1.08);
        let back = lat_lon_to_vec3(0.0, 180.0, 1.08);

        // Ohne Verdeckung trifft der Strahl den hinteren Pin, der vordere ist versteckt
        let hit = pick_pin(
            &camera_ray(),
            [candidate(0, front, false), candidate(1, back, true)],
            None,
        );
        assert_eq!(hit.map(|(i, _)| i), Some(1));

        // Strahlen aus vielen Richtungen direkt auf den versteckten Pin
        for (lat, lon) in [(0.0, 0.0), (60.0, 30.0), (-45.0, -150.0), (89.0, 10.0)] {
            let center = lat_lon_to_vec3(lat, lon, 1.08);
            for offset in [Vec3::X, Vec3::Y, Vec3::Z, Vec3::ONE, center] {
                let origin = center + offset.normalize() * 4.0;
                let ray = PickRay::new(origin, center - origin).unwrap();
                assert!(pick_pin(&ray, [candidate(7, center, false)], None).is_none());
            }
        }
    }

    #[test]
    fn test_globe_occludes_back_pins() {
        let back = lat_lon_to_vec3(0.0, 180.0, 1.08);
        let occluder = Occluder {
            center: Vec3::ZERO,
            radius: 1.0,
        };
        assert!(pick_pin(&camera_ray(), [candidate(0, back, true)], Some(occluder)).is_none());

        let front = lat_lon_to_vec3(0.0, 0.0, 1.08);
        let hit = pick_pin(&camera_ray(), [candidate(1, front, true)], Some(occluder));
        assert_eq!(hit.map(|(i, _)| i), Some(1));
    }

    fn projection() -> Mat4 {
        PerspectiveProjection::default().get_projection_matrix()
    }

    /// Kamera in `distance`-facher Pin-Entfernung, Blick auf den Globusmittelpunkt
    fn camera_looking_through(center: Vec3, distance: f32) -> GlobalTransform {
        GlobalTransform::from(
            Transform::from_translation(center * distance).looking_at(Vec3::ZERO, Vec3::Y),
        )
    }

    /// Strahl durch die Bildschirmmitte eines 800x600-Fensters
    fn center_click_ray(camera: &GlobalTransform) -> PickRay {
        let ndc = cursor_to_ndc(Vec2::new(400.0, 300.0), Vec2::new(800.0, 600.0)).unwrap();
        ndc_ray(camera, projection(), ndc).unwrap()
    }

    fn picking_world() -> World {
        let mut world = World::new();
        world.init_resource::<GlobeSettings>();
        world.init_resource::<GlobeSession>();
        world.init_resource::<DemoSequence>();
        world.spawn((Globe, GlobalTransform::IDENTITY));

        let settings = GlobeSettings::default();
        let mut registry = PinRegistry::default();
        for (index, point) in landmarks().into_iter().enumerate() {
            let point = point.unwrap();
            let transform = pin_transform(&point, &settings, 1.0);
            let entity = world
                .spawn((
                    Pin {
                        index,
                        ..default()
                    },
                    GlobalTransform::from(transform),
                    Visibility::Inherited,
                ))
                .id();
            registry.push(point, entity);
        }
        world.insert_resource(registry);
        world
    }

    fn pin_center(world: &World, index: usize) -> Vec3 {
        let entity = world.resource::<PinRegistry>().get(index).unwrap().entity;
        world.get::<GlobalTransform>(entity).unwrap().translation()
    }

    fn click(world: &mut World, ray: PickRay) -> Option<usize> {
        world.run_system_once(
            move |pins: Query<(&Pin, &GlobalTransform, &Visibility)>,
                  globe: Query<&GlobalTransform, With<Globe>>,
                  registry: Res<PinRegistry>,
                  settings: Res<GlobeSettings>,
                  mut session: ResMut<GlobeSession>| {
                pick_with_ray(&ray, &pins, &globe, &registry, &settings, &mut session)
            },
        )
    }

    #[test]
    fn test_ndc_ray_points_into_the_scene() {
        let camera = GlobalTransform::from(
            Transform::from_xyz(0.0, 0.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        );

        let ray = ndc_ray(&camera, projection(), Vec2::ZERO).unwrap();
        // Ursprung auf der Near-Plane vor der Kamera, Richtung zum Globus
        assert!(ray.origin.z < 5.0 && ray.origin.z > 4.8);
        assert!(ray.direction.dot(Vec3::NEG_Z) > 0.999);

        // Rechte Bildschirmhälfte -> +X, obere -> +Y
        let right = ndc_ray(&camera, projection(), Vec2::new(0.5, 0.0)).unwrap();
        assert!(right.direction.x > 0.0);
        let up = ndc_ray(&camera, projection(), Vec2::new(0.0, 0.5)).unwrap();
        assert!(up.direction.y > 0.0);
    }

    #[test]
    fn test_click_on_pin_opens_modal() {
        let mut world = picking_world();
        let camera = camera_looking_through(pin_center(&world, 2), 4.0);

        assert_eq!(click(&mut world, center_click_ray(&camera)), Some(2));
        let modal = world.resource::<GlobeSession>().modal.clone().unwrap();
        assert_eq!(modal.pin_index, 2);
        assert_eq!(modal.title, landmarks()[2].as_ref().unwrap().info().title);
        assert!(modal.auto_close.is_none());
    }

    #[test]
    fn test_click_on_hidden_pin_does_nothing() {
        let mut world = picking_world();
        let entity = world.resource::<PinRegistry>().get(0).unwrap().entity;
        *world.get_mut::<Visibility>(entity).unwrap() = Visibility::Hidden;

        let camera = camera_looking_through(pin_center(&world, 0), 4.0);
        assert_eq!(click(&mut world, center_click_ray(&camera)), None);
        assert!(world.resource::<GlobeSession>().modal.is_none());
    }

    #[test]
    fn test_miss_closes_open_modal() {
        let mut world = picking_world();
        let modal = world.resource::<PinRegistry>().modal_for(1, None).unwrap();
        world.resource_mut::<GlobeSession>().open_modal(modal);

        // Blick vom Globus weg
        let camera = GlobalTransform::from(
            Transform::from_xyz(0.0, 0.0, 5.0).looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::Y),
        );
        assert_eq!(click(&mut world, center_click_ray(&camera)), None);
        assert!(world.resource::<GlobeSession>().modal.is_none());
    }

    #[test]
    fn test_demo_hidden_pins_are_not_clickable() {
        let mut world = picking_world();
        let camera = camera_looking_through(pin_center(&world, 0), 4.0);
        let ray = center_click_ray(&camera);

        world.run_system_once(enter_demo_system);
        assert_eq!(click(&mut world, ray), None);

        world.run_system_once(exit_demo_system);
        assert_eq!(click(&mut world, ray), Some(0));
    }
}
