use bevy::prelude::*;

#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum ViewMode {
    #[default] // Startzustand
    Normal,
    /// Skriptgesteuerte Vorführung, normale Steuerung ist ausgeblendet
    Demo,
}
