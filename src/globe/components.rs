use bevy::prelude::*;

/// Die Erdkugel; Pins hängen als Kinder daran und drehen sich mit
#[derive(Component, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct Globe;

/// Halbtransparente zweite Kugel (Temperatur-/Farb-Overlay)
#[derive(Component, Debug, Default, Reflect)]
#[reflect(Component)]
pub struct OverlaySphere;

/// Zusatzlicht, das nur während der Demo existiert
#[derive(Component, Debug, Default)]
pub struct DemoLight;
