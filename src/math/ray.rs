// src/math/ray.rs
use crate::math::utils::{comparison, constants};
use bevy::math::{Vec2, Vec3};

/// Strahl für das Picking (Richtung ist immer normalisiert)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickRay {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl PickRay {
    /// Liefert `None`, wenn die Richtung keine Länge hat.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Strahl von `near` durch `far` (z.B. zwei unprojizierte NDC-Punkte)
    pub fn through(near: Vec3, far: Vec3) -> Option<Self> {
        Self::new(near, far - near)
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Nächster nicht-negativer Schnittparameter mit einer Kugel.
    /// Liegt der Ursprung in der Kugel, wird der Austrittspunkt geliefert.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.direction);
        let c = oc.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let t_near = -b - sqrt_d;
        let t_far = -b + sqrt_d;
        if t_near >= 0.0 {
            Some(t_near)
        } else if t_far >= 0.0 {
            Some(t_far)
        } else {
            None
        }
    }

    /// Schnitt mit einer (beidseitigen) Kreisscheibe.
    pub fn intersect_disc(&self, center: Vec3, normal: Vec3, radius: f32) -> Option<f32> {
        let normal = normal.try_normalize()?;
        let denom = normal.dot(self.direction);
        if comparison::nearly_zero(denom) {
            // Strahl parallel zur Scheibe
            return None;
        }

        let t = (center - self.origin).dot(normal) / denom;
        if t < -constants::EPSILON {
            return None;
        }

        let hit = self.at(t);
        if hit.distance_squared(center) <= radius * radius {
            Some(t.max(0.0))
        } else {
            None
        }
    }
}

/// Cursorposition (logische Pixel, Ursprung oben links) in Normalized Device Coordinates.
pub fn cursor_to_ndc(cursor: Vec2, viewport_size: Vec2) -> Option<Vec2> {
    if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (cursor.x / viewport_size.x) * 2.0 - 1.0,
        -(cursor.y / viewport_size.y) * 2.0 + 1.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ray_down_z() -> PickRay {
        PickRay::new(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z).unwrap()
    }

    #[test]
    fn test_zero_direction_rejected() {
        assert!(PickRay::new(Vec3::ZERO, Vec3::ZERO).is_none());
        assert!(PickRay::through(Vec3::ONE, Vec3::ONE).is_none());
    }

    #[test]
    fn test_sphere_intersection() {
        let t = ray_down_z().intersect_sphere(Vec3::ZERO, 1.0).unwrap();
        assert_abs_diff_eq!(t, 4.0, epsilon = 1e-5);

        let miss = PickRay::new(Vec3::new(2.0, 0.0, 5.0), Vec3::NEG_Z).unwrap();
        assert!(miss.intersect_sphere(Vec3::ZERO, 1.0).is_none());

        let behind = PickRay::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z).unwrap();
        assert!(behind.intersect_sphere(Vec3::ZERO, 1.0).is_none());

        let inside = PickRay::new(Vec3::ZERO, Vec3::X).unwrap();
        assert_abs_diff_eq!(inside.intersect_sphere(Vec3::ZERO, 1.0).unwrap(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_disc_intersection() {
        let ray = ray_down_z();
        let t = ray.intersect_disc(Vec3::new(0.0, 0.0, 1.08), Vec3::Z, 0.05).unwrap();
        assert_abs_diff_eq!(t, 3.92, epsilon = 1e-5);

        // Rückseite wird ebenfalls getroffen
        assert!(ray.intersect_disc(Vec3::new(0.0, 0.0, 1.0), Vec3::NEG_Z, 0.05).is_some());

        // Außerhalb des Radius
        assert!(ray
            .intersect_disc(Vec3::new(0.1, 0.0, 1.0), Vec3::Z, 0.05)
            .is_none());

        // Parallel
        assert!(ray.intersect_disc(Vec3::ZERO, Vec3::X, 10.0).is_none());
    }

    #[test]
    fn test_cursor_to_ndc() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(cursor_to_ndc(Vec2::new(400.0, 300.0), size), Some(Vec2::ZERO));
        assert_eq!(cursor_to_ndc(Vec2::ZERO, size), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(cursor_to_ndc(size, size), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(cursor_to_ndc(Vec2::ZERO, Vec2::ZERO), None);
    }
}
