// src/math/sphere.rs
use crate::math::utils::{angles, constants};
use bevy::math::{Quat, Vec3};

/// Wandelt geografische Koordinaten (Grad) in einen Punkt auf einer Kugel um.
///
/// Der Breitengrad wird vom Äquator aus gemessen (Polwinkel `phi = 90° - lat` von +Y),
/// der Längengrad ist um 180° versetzt, damit die Texturnaht hinten liegt.
/// Ergebnis: Nullmeridian am Äquator zeigt nach +Z, Osten nach +X, Norden nach +Y.
pub fn lat_lon_to_vec3(latitude: f32, longitude: f32, radius: f32) -> Vec3 {
    let phi = angles::deg_to_rad(90.0 - latitude);
    let theta = angles::deg_to_rad(longitude + 180.0);

    let x = -(radius * phi.sin() * theta.sin());
    let y = radius * phi.cos();
    let z = -(radius * phi.sin() * theta.cos());

    Vec3::new(x, y, z)
}

/// Umkehrung von [`lat_lon_to_vec3`]: liefert `(lat, lon)` in Grad.
/// Für den Ursprung wird `(0, 0)` zurückgegeben.
pub fn vec3_to_lat_lon(point: Vec3) -> (f32, f32) {
    let radius = point.length();
    if radius < constants::EPSILON {
        return (0.0, 0.0);
    }

    let latitude = (point.y / radius).clamp(-1.0, 1.0).asin();
    let longitude = point.x.atan2(point.z);

    (angles::rad_to_deg(latitude), angles::rad_to_deg(longitude))
}

/// Rotation, die die lokale +Z-Achse eines flachen Markers auf die Oberflächennormale legt.
pub fn surface_rotation(point: Vec3) -> Quat {
    let normal = point.normalize_or_zero();
    if normal == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_arc(Vec3::Z, normal)
}
