// src/globe/pins/registry.rs
use super::catalog::{GeoPoint, landmarks};
use super::components::Pin;
use crate::globe::components::Globe;
use crate::globe::resources::{GlobeSettings, InfoModal};
use crate::math::{GlobeError, GlobeResult, lat_lon_to_vec3, sphere::surface_rotation};
use bevy::prelude::*;

#[derive(Debug, Clone)]
pub struct PinEntry {
    pub point: GeoPoint,
    pub entity: Entity,
}

/// Geordnete Liste aller Pins. Wird einmal beim Start aufgebaut, danach nie verändert.
#[derive(Resource, Debug, Default)]
pub struct PinRegistry {
    entries: Vec<PinEntry>,
}

impl PinRegistry {
    pub fn push(&mut self, point: GeoPoint, entity: Entity) -> usize {
        self.entries.push(PinEntry { point, entity });
        self.entries.len() - 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PinEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> impl Iterator<Item = &PinEntry> {
        self.entries.iter()
    }

    /// Info-Fenster für einen Pin, optional mit Auto-Close-Timer
    pub fn modal_for(&self, index: usize, auto_close: Option<Timer>) -> GlobeResult<InfoModal> {
        let entry = self.get(index).ok_or(GlobeError::PinNotFound { index })?;
        let info = entry.point.info();
        Ok(InfoModal {
            pin_index: index,
            title: info.title.clone(),
            body: info.body.clone(),
            image_url: info.image_url.clone(),
            auto_close,
        })
    }
}

/// Lokale Transformation eines Pins relativ zum Globus.
/// Position und Ausrichtung werden immer aus dem GeoPoint abgeleitet.
pub fn pin_transform(point: &GeoPoint, settings: &GlobeSettings, scale: f32) -> Transform {
    let position = lat_lon_to_vec3(
        point.latitude(),
        point.longitude(),
        settings.pin_surface_radius,
    );
    Transform {
        translation: position,
        rotation: surface_rotation(position),
        scale: Vec3::splat(scale),
    }
}

pub fn spawn_pins_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<PinRegistry>,
    settings: Res<GlobeSettings>,
    globe_query: Query<Entity, With<Globe>>,
) {
    let Ok(globe) = globe_query.get_single() else {
        warn!("No globe entity found, pins are not spawned.");
        return;
    };

    let mesh = meshes.add(
        Circle::new(settings.pin_disc_radius)
            .mesh()
            .resolution(settings.pin_segments)
            .build(),
    );
    let material = materials.add(StandardMaterial {
        base_color: settings.pin_color,
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    for (record_index, record) in landmarks().into_iter().enumerate() {
        let point = match record {
            Ok(point) => point,
            Err(err) => {
                warn!("Skipping landmark #{record_index}: {err}");
                continue;
            }
        };

        let transform = pin_transform(&point, &settings, 1.0);
        let entity = commands
            .spawn((
                PbrBundle {
                    mesh: mesh.clone(),
                    material: material.clone(),
                    transform,
                    ..default()
                },
                Name::new(point.info().title.clone()),
            ))
            .id();

        let index = registry.push(point, entity);
        commands.entity(entity).insert(Pin {
            index,
            ..default()
        });
        commands.entity(globe).add_child(entity);
    }

    info!("Spawned {} pins on the globe.", registry.len());
}
