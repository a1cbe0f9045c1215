// src/globe/temperature.rs
use crate::math::utils::{angles, comparison};
use bevy::prelude::*;
use bevy_render::{
    render_asset::RenderAssetUsages,
    render_resource::{Extent3d, TextureDimension, TextureFormat},
};

const COLD: [f32; 3] = [0.0, 0.0, 1.0];
const HOT: [f32; 3] = [1.0, 0.0, 0.0];

/// Grauwert-Temperatur in [0, 1]: warm am Äquator, kalt an den Polen,
/// mit einer leichten Welle entlang der Längengrade.
pub fn temperature_at(latitude: f32, longitude: f32) -> f32 {
    let lat = angles::deg_to_rad(latitude);
    let lon = angles::deg_to_rad(longitude);
    let base = lat.cos().max(0.0).powf(1.5);
    let wave = 0.08 * (3.0 * lon).sin() * lat.cos();
    (base + wave).clamp(0.0, 1.0)
}

/// `mix(blau, rot, t)` als RGBA8
pub fn temperature_color(t: f32, opacity: f32) -> [u8; 4] {
    let t = t.clamp(0.0, 1.0);
    let channel = |i: usize| (comparison::lerp(COLD[i], HOT[i], t) * 255.0).round() as u8;
    [
        channel(0),
        channel(1),
        channel(2),
        (opacity.clamp(0.0, 1.0) * 255.0).round() as u8,
    ]
}

/// Equirektanguläre Temperaturtextur (Zeile 0 = Nordpol, Spalte 0 = -180°)
pub fn temperature_image(width: u32, height: u32, opacity: f32) -> Image {
    let width = width.max(2);
    let height = height.max(2);
    let mut data = Vec::with_capacity((width * height * 4) as usize);

    for row in 0..height {
        let latitude = 90.0 - 180.0 * (row as f32 + 0.5) / height as f32;
        for col in 0..width {
            let longitude = -180.0 + 360.0 * (col as f32 + 0.5) / width as f32;
            data.extend_from_slice(&temperature_color(
                temperature_at(latitude, longitude),
                opacity,
            ));
        }
    }

    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}
