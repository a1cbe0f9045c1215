// src/globe/resources.rs
use crate::math::utils::angles;
use bevy::prelude::*;
use std::time::Duration;

/// Alle einstellbaren Konstanten des Globus.
#[derive(Resource, Debug, Clone)]
pub struct GlobeSettings {
    // --- Globus ---
    pub globe_radius: f32,
    pub globe_rotation_speed: f32,   // rad/s
    pub overlay_rotation_speed: f32, // rad/s

    // --- Pins ---
    pub pin_surface_radius: f32,
    pub pin_disc_radius: f32,
    pub pin_segments: usize,
    pub pin_color: Color,
    pub pulse_min: f32,
    pub pulse_max: f32,
    pub pulse_rate: f32, // Skalierung pro Sekunde
    pub occlude_pins_by_globe: bool,

    // --- Overlay-Kugel ---
    pub overlay_radius_min: f32,
    pub overlay_radius_max: f32,
    pub overlay_radius_initial: f32,
    pub overlay_opacity: f32,
    pub overlay_base_color: Color,
    pub temperature_texture_size: (u32, u32),

    // --- Demo ---
    pub demo_tick: Duration,
    pub demo_radius_step: f32,
    pub demo_radius_decimals: u32,
    pub demo_reveal_pin: usize,
    pub demo_modal_duration: Duration,
    pub demo_light_distance: f32,

    // --- Kamera ---
    pub camera_distance: f32,
    pub camera_min_distance: f32,
    pub camera_max_distance: f32,
    pub camera_fov: f32, // rad, vertikal

    // --- Visualisierung & Debug ---
    pub show_graticule: bool,
    pub show_pin_normals: bool,
}

impl Default for GlobeSettings {
    fn default() -> Self {
        Self {
            globe_radius: 1.0,
            // 0.0015 bzw. 0.002 rad pro Frame bei 60 FPS
            globe_rotation_speed: 0.09,
            overlay_rotation_speed: 0.12,

            pin_surface_radius: 1.08,
            pin_disc_radius: 0.05,
            pin_segments: 32,
            pin_color: Color::rgba(1.0, 0.0, 0.0, 0.8),
            pulse_min: 1.0,
            pulse_max: 1.2,
            pulse_rate: 0.3,
            occlude_pins_by_globe: true,

            overlay_radius_min: 1.0,
            overlay_radius_max: 1.1,
            overlay_radius_initial: 1.005535,
            overlay_opacity: 0.6,
            overlay_base_color: Color::rgba_u8(0x12, 0x15, 0x26, 153),
            temperature_texture_size: (512, 256),

            demo_tick: Duration::from_millis(100),
            demo_radius_step: 0.001,
            demo_radius_decimals: 3,
            demo_reveal_pin: 0,
            demo_modal_duration: Duration::from_secs(2),
            demo_light_distance: 50.0,

            camera_distance: 5.0,
            camera_min_distance: 1.2,
            camera_max_distance: 10.0,
            // 75° Öffnungswinkel bei Zoom 3, ergibt ca. 28,7°
            camera_fov: angles::zoomed_fov(75.0, 3.0),

            show_graticule: true,
            show_pin_normals: false,
        }
    }
}

impl GlobeSettings {
    /// Mitte des Slider-Bereichs, ab der die Demo den Pin aufdeckt
    pub fn overlay_radius_midpoint(&self) -> f32 {
        (self.overlay_radius_min + self.overlay_radius_max) * 0.5
    }
}

/// Inhalt des Info-Fensters eines Pins.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoModal {
    pub pin_index: usize,
    pub title: String,
    pub body: String,
    pub image_url: String,
    /// Optionaler Timer zum automatischen Schließen (Demo)
    pub auto_close: Option<Timer>,
}

/// Veränderlicher UI-Zustand einer Sitzung.
#[derive(Resource, Debug, Clone)]
pub struct GlobeSession {
    pub auto_rotate: bool,
    pub overlay_radius: f32,
    pub temperature_overlay: bool,
    /// Schalter in der UI; die eigentliche Demo läuft über `ViewMode`
    pub demo_switch: bool,
    pub controls_visible: bool,
    pub modal: Option<InfoModal>,
}

impl GlobeSession {
    pub fn new(settings: &GlobeSettings) -> Self {
        Self {
            auto_rotate: true,
            overlay_radius: settings.overlay_radius_initial,
            temperature_overlay: false,
            demo_switch: false,
            controls_visible: true,
            modal: None,
        }
    }

    pub fn open_modal(&mut self, modal: InfoModal) {
        debug!("Opening info modal for pin {}: {}", modal.pin_index, modal.title);
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        if let Some(modal) = self.modal.take() {
            debug!("Closing info modal for pin {}", modal.pin_index);
        }
    }

    /// Tickt den Auto-Close-Timer des offenen Fensters.
    /// Gibt `true` zurück, wenn das Fenster dabei geschlossen wurde.
    pub fn tick_modal(&mut self, delta: Duration) -> bool {
        let expired = match self.modal.as_mut().and_then(|m| m.auto_close.as_mut()) {
            Some(timer) => timer.tick(delta).finished(),
            None => false,
        };
        if expired {
            self.close_modal();
        }
        expired
    }
}

impl FromWorld for GlobeSession {
    fn from_world(world: &mut World) -> Self {
        let settings = world.get_resource_or_insert_with(GlobeSettings::default);
        Self::new(&settings)
    }
}
