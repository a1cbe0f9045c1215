use crate::globe::components::Globe;
use crate::globe::pins::Pin;
use crate::globe::resources::GlobeSettings;
use bevy::prelude::*;

const ARROW_LENGTH: f32 = 0.3;

/// Zeichnet für jeden sichtbaren Pin die Oberflächennormale als Pfeil.
pub fn draw_pin_normals_system(
    settings: Res<GlobeSettings>,
    globe_query: Query<&GlobalTransform, With<Globe>>,
    pins: Query<(&GlobalTransform, &Visibility), With<Pin>>,
    mut gizmos: Gizmos,
) {
    if !settings.show_pin_normals {
        return;
    }
    let center = globe_query
        .get_single()
        .map_or(Vec3::ZERO, |globe| globe.translation());

    for (transform, visibility) in pins.iter() {
        if *visibility == Visibility::Hidden {
            continue;
        }
        let origin = transform.translation();
        let direction = (origin - center).normalize_or_zero();
        gizmos.arrow(origin, origin + direction * ARROW_LENGTH, Color::YELLOW);
    }
}
