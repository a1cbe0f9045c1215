// src/debug/visualization/sphere_grid.rs
use crate::globe::components::Globe;
use crate::globe::resources::GlobeSettings;
use crate::math::lat_lon_to_vec3;
use bevy::prelude::*;

/// Gradnetz knapp über der Globusoberfläche; dreht sich mit dem Globus.
pub fn draw_sphere_grid_gizmos(
    mut gizmos: Gizmos,
    settings: Res<GlobeSettings>,
    globe_query: Query<&GlobalTransform, With<Globe>>,
) {
    if !settings.show_graticule {
        return;
    }
    let Ok(globe) = globe_query.get_single() else {
        return;
    };

    let radius = settings.globe_radius * 1.002;
    if radius <= 0.0 {
        return;
    }

    let lat_color = Color::rgba(0.0, 1.0, 0.0, 0.3); // Grün mit etwas Transparenz
    let lon_color = Color::rgba(0.0, 0.5, 1.0, 0.3); // Blau mit etwas Transparenz
    let equator_color = Color::rgba(1.0, 1.0, 0.0, 0.5);
    let segments = 64;

    // --- Breitenkreise alle 15° ---
    for lat in (-75..=75).step_by(15) {
        let color = if lat == 0 { equator_color } else { lat_color };
        let points: Vec<Vec3> = (0..=segments)
            .map(|j| {
                let lon = -180.0 + 360.0 * j as f32 / segments as f32;
                globe.transform_point(lat_lon_to_vec3(lat as f32, lon, radius))
            })
            .collect();
        gizmos.linestrip(points, color);
    }

    // --- Längengrade alle 30° (Halbkreise von Pol zu Pol) ---
    for lon in (-180..180).step_by(30) {
        let color = if lon == 0 { equator_color } else { lon_color };
        let points: Vec<Vec3> = (0..=segments / 2)
            .map(|j| {
                let lat = -90.0 + 180.0 * j as f32 / (segments / 2) as f32;
                globe.transform_point(lat_lon_to_vec3(lat, lon as f32, radius))
            })
            .collect();
        gizmos.linestrip(points, color);
    }
}
