// ./src/debug/ui.rs
use crate::globe::components::Globe;
use crate::globe::pins::PinRegistry;
use crate::globe::resources::{GlobeSession, GlobeSettings};
use crate::math::vec3_to_lat_lon;
use bevy::prelude::*;
use bevy_egui::EguiContexts;
use egui::{Align2, Slider, Window};

pub fn globe_control_ui_system(
    mut contexts: EguiContexts,
    mut session: ResMut<GlobeSession>,
    mut settings: ResMut<GlobeSettings>,
    registry: Res<PinRegistry>,
    camera_query: Query<&GlobalTransform, With<Camera>>,
    globe_query: Query<&GlobalTransform, With<Globe>>,
) {
    // In der Demo ist die Steuerung ausgeblendet
    if !session.controls_visible {
        return;
    }

    Window::new("Steuerung")
        .default_width(300.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Globus");

            // Lokale Kopien, damit die Sitzung nur bei echten Änderungen als geändert gilt
            let mut radius = session.overlay_radius;
            if ui
                .add(
                    Slider::new(
                        &mut radius,
                        settings.overlay_radius_min..=settings.overlay_radius_max,
                    )
                    .text("Radius Overlay")
                    .fixed_decimals(4),
                )
                .changed()
            {
                session.overlay_radius = radius;
            }

            let mut temperature = session.temperature_overlay;
            if ui.checkbox(&mut temperature, "Temperatur").changed() {
                session.temperature_overlay = temperature;
                info!("Temperature overlay: {temperature}");
            }

            let mut demo = session.demo_switch;
            if ui.checkbox(&mut demo, "Demo").changed() {
                session.demo_switch = demo;
            }

            let label = if session.auto_rotate {
                "Rotation stoppen"
            } else {
                "Rotation starten"
            };
            if ui.button(label).clicked() {
                session.auto_rotate = !session.auto_rotate;
                info!("Auto rotation: {}", session.auto_rotate);
            }

            ui.collapsing("Visualisierung & Debug", |ui| {
                ui.checkbox(&mut settings.show_graticule, "Gradnetz anzeigen");
                ui.checkbox(&mut settings.show_pin_normals, "Pin-Normalen anzeigen");
                ui.checkbox(
                    &mut settings.occlude_pins_by_globe,
                    "Verdeckte Pins nicht anklickbar",
                );
                ui.label(format!("Pins: {}", registry.len()));

                if let (Ok(camera), Ok(globe)) =
                    (camera_query.get_single(), globe_query.get_single())
                {
                    // Kameraposition im rotierenden Globus-System
                    let local = globe
                        .affine()
                        .inverse()
                        .transform_point3(camera.translation());
                    let (lat, lon) = vec3_to_lat_lon(local);
                    ui.label(format!("Blickpunkt: {lat:.2}°, {lon:.2}°"));
                }
            });

            ui.collapsing("Kamerasteuerung Info", |ui| {
                ui.label("Linke Maustaste: Pin auswählen");
                ui.label("Rechte Maustaste + Ziehen: Orbit");
                ui.label("Mittlere Maustaste + Ziehen: Pan");
                ui.label("Mausrad: Zoom");
                ui.label("Esc: Demo abbrechen");
                ui.separator();
                ui.label("F1: World Inspector ein-/ausblenden");
            });
        });
}

/// Info-Fenster des ausgewählten Pins
pub fn info_modal_ui_system(mut contexts: EguiContexts, mut session: ResMut<GlobeSession>) {
    let Some(modal) = session.modal.as_ref() else {
        return;
    };

    let mut close = false;
    Window::new(modal.title.as_str())
        .id(egui::Id::new("info_modal"))
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .collapsible(false)
        .resizable(false)
        .default_width(420.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.add(egui::Label::new(modal.body.as_str()).wrap(true));
            ui.separator();
            ui.hyperlink_to("Bild öffnen", modal.image_url.as_str());
            ui.add_space(8.0);
            if ui.button("Schließen").clicked() {
                close = true;
            }
        });

    if close {
        session.close_modal();
    }
}
