// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
    pub const PI: f32 = std::f32::consts::PI;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f32) -> bool {
        a.abs() < EPSILON
    }

    /// Lineare Interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Rundet auf eine feste Anzahl Nachkommastellen (wie ein Slider mit Schrittweite 10^-n)
    pub fn round_to_decimals(value: f32, decimals: u32) -> f32 {
        let factor = 10f64.powi(decimals as i32);
        ((value as f64 * factor).round() / factor) as f32
    }
}

/// Winkel-Hilfsfunktionen
pub mod angles {
    use super::constants::PI;

    /// Konvertiert Grad zu Radiant
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * PI / 180.0
    }

    /// Konvertiert Radiant zu Grad
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * 180.0 / PI
    }

    /// Effektiver vertikaler Öffnungswinkel (rad) einer Perspektive mit Zoomfaktor
    pub fn zoomed_fov(fov_degrees: f32, zoom: f32) -> f32 {
        2.0 * ((deg_to_rad(fov_degrees) * 0.5).tan() / zoom).atan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_round_to_decimals() {
        // 1.005535 + 0.001 = 1.006535 -> 1.007
        assert_abs_diff_eq!(comparison::round_to_decimals(1.006535, 3), 1.007, epsilon = 1e-6);
        assert_abs_diff_eq!(comparison::round_to_decimals(1.0994, 3), 1.099, epsilon = 1e-6);
    }

    #[test]
    fn test_angle_conversion() {
        assert_abs_diff_eq!(angles::deg_to_rad(180.0), constants::PI, epsilon = 1e-6);
        assert_abs_diff_eq!(angles::rad_to_deg(constants::PI * 0.5), 90.0, epsilon = 1e-4);
    }

    #[test]
    fn test_zoomed_fov() {
        assert_abs_diff_eq!(angles::zoomed_fov(75.0, 1.0), angles::deg_to_rad(75.0), epsilon = 1e-6);
        assert_abs_diff_eq!(angles::rad_to_deg(angles::zoomed_fov(75.0, 3.0)), 28.7, epsilon = 0.05);
        assert!(angles::zoomed_fov(75.0, 3.0) < angles::zoomed_fov(75.0, 2.0));
    }
}
