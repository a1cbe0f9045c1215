// ./src/setup.rs
use crate::globe::components::{Globe, OverlaySphere};
use crate::globe::resources::{GlobeSession, GlobeSettings};
use crate::globe::systems::OverlayMaterials;
use crate::globe::temperature::temperature_image;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    settings: Res<GlobeSettings>,
    session: Res<GlobeSession>,
) {
    // Globus; Pins werden später als Kinder angehängt
    commands.spawn((
        PbrBundle {
            mesh: meshes.add(Sphere::new(settings.globe_radius).mesh().uv(128, 64)),
            material: materials.add(StandardMaterial {
                base_color: Color::rgb(0.15, 0.3, 0.55),
                metallic: 0.1,
                perceptual_roughness: 0.8,
                ..default()
            }),
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..default()
        },
        Globe,
        Name::new("Globe"),
    ));

    // Overlay-Kugel: Einheitsradius, der Radius kommt über die Skalierung
    let (width, height) = settings.temperature_texture_size;
    let temperature_texture = images.add(temperature_image(width, height, settings.overlay_opacity));
    let overlay_materials = OverlayMaterials {
        base: materials.add(StandardMaterial {
            base_color: settings.overlay_base_color,
            alpha_mode: AlphaMode::Blend,
            ..default()
        }),
        temperature: materials.add(StandardMaterial {
            base_color: Color::WHITE,
            base_color_texture: Some(temperature_texture),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        }),
    };
    commands.spawn((
        PbrBundle {
            mesh: meshes.add(Sphere::new(1.0).mesh().uv(128, 64)),
            material: overlay_materials.select(session.temperature_overlay),
            transform: Transform::from_scale(Vec3::splat(session.overlay_radius)),
            ..default()
        },
        OverlaySphere,
        Name::new("Overlay"),
    ));
    commands.insert_resource(overlay_materials);

    // Licht: Umgebungslicht plus "Sonne" (immer Tag)
    commands.insert_resource(AmbientLight {
        color: Color::rgb_u8(0x40, 0x40, 0x40),
        brightness: 400.0,
    });
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        transform: Transform::from_xyz(10.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    // Kamera
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0.0, 0.0, settings.camera_distance)
                .looking_at(Vec3::ZERO, Vec3::Y),
            projection: Projection::Perspective(PerspectiveProjection {
                fov: settings.camera_fov,
                ..default()
            }),
            ..default()
        },
        PanOrbitCamera {
            // Linke Maustaste bleibt für das Picking frei
            button_orbit: MouseButton::Right,
            button_pan: MouseButton::Middle,
            radius: Some(settings.camera_distance), // Start Entfernung
            zoom_lower_limit: Some(settings.camera_min_distance),
            zoom_upper_limit: Some(settings.camera_max_distance),
            ..default()
        },
    ));

    info!(
        "Scene ready: globe r={:.2}, overlay r={:.4}",
        settings.globe_radius, session.overlay_radius
    );
}
