// src/globe/demo/resources.rs
use crate::globe::pins::PinRegistry;
use crate::globe::resources::{GlobeSession, GlobeSettings};
use crate::math::{GlobeError, GlobeResult, utils::comparison};
use bevy::prelude::*;
use std::time::Duration;

/// Zustand vor Beginn der Demo
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSnapshot {
    pub auto_rotate: bool,
    pub pin_visibility: Vec<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoStep {
    /// Keine Demo aktiv
    Idle,
    Running,
    /// Der designierte Pin wurde in diesem Schritt aufgedeckt
    Revealed(usize),
    /// Maximum erreicht, Demo muss beendet werden
    Finished,
}

/// Ablaufsteuerung der Demo. Es existiert höchstens eine laufende Instanz.
#[derive(Resource, Debug, Default)]
pub struct DemoSequence {
    tick: Option<Timer>,
    revealed: bool,
    snapshot: Option<DemoSnapshot>,
}

impl DemoSequence {
    pub fn is_running(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Startet die Demo: Zustand sichern, Pins verstecken, Rotation und Steuerung aus.
    pub fn begin(
        &mut self,
        session: &mut GlobeSession,
        settings: &GlobeSettings,
        pin_visibility: &mut [bool],
    ) -> GlobeResult<()> {
        if self.is_running() {
            return Err(GlobeError::DemoAlreadyRunning);
        }

        self.snapshot = Some(DemoSnapshot {
            auto_rotate: session.auto_rotate,
            pin_visibility: pin_visibility.to_vec(),
        });
        self.tick = Some(Timer::new(settings.demo_tick, TimerMode::Repeating));
        self.revealed = false;

        pin_visibility.iter_mut().for_each(|visible| *visible = false);
        session.auto_rotate = false;
        session.controls_visible = false;
        session.demo_switch = true;
        Ok(())
    }

    /// Schreitet die Demo um `delta` fort. Mehrere fällige Ticks werden nacheinander abgearbeitet.
    pub fn advance(
        &mut self,
        delta: Duration,
        session: &mut GlobeSession,
        settings: &GlobeSettings,
        registry: &PinRegistry,
        pin_visibility: &mut [bool],
    ) -> DemoStep {
        let Some(timer) = self.tick.as_mut() else {
            return DemoStep::Idle;
        };
        let due = timer.tick(delta).times_finished_this_tick();

        let mut step = DemoStep::Running;
        for _ in 0..due {
            match self.step_once(session, settings, registry, pin_visibility) {
                DemoStep::Finished => return DemoStep::Finished,
                DemoStep::Revealed(index) => step = DemoStep::Revealed(index),
                _ => {}
            }
        }
        step
    }

    fn step_once(
        &mut self,
        session: &mut GlobeSession,
        settings: &GlobeSettings,
        registry: &PinRegistry,
        pin_visibility: &mut [bool],
    ) -> DemoStep {
        let current = session.overlay_radius;
        if current >= settings.overlay_radius_max {
            return DemoStep::Finished;
        }

        session.overlay_radius = comparison::round_to_decimals(
            current + settings.demo_radius_step,
            settings.demo_radius_decimals,
        )
        .min(settings.overlay_radius_max);

        if self.revealed || current < settings.overlay_radius_midpoint() {
            return DemoStep::Running;
        }
        self.revealed = true;

        let index = settings.demo_reveal_pin;
        match pin_visibility.get_mut(index) {
            Some(visible) if !*visible => *visible = true,
            Some(_) => return DemoStep::Running,
            None => {
                warn!("Demo pin {index} does not exist, nothing to reveal.");
                return DemoStep::Running;
            }
        }

        let auto_close = Timer::new(settings.demo_modal_duration, TimerMode::Once);
        match registry.modal_for(index, Some(auto_close)) {
            Ok(modal) => session.open_modal(modal),
            Err(err) => warn!("Demo could not open modal: {err}"),
        }
        DemoStep::Revealed(index)
    }

    /// Beendet die Demo und stellt Rotation und Pin-Sichtbarkeit wieder her.
    /// Der Overlay-Radius springt auf seinen Startwert zurück.
    pub fn finish(
        &mut self,
        session: &mut GlobeSession,
        settings: &GlobeSettings,
        pin_visibility: &mut [bool],
    ) -> Option<DemoSnapshot> {
        self.tick = None;
        self.revealed = false;
        let snapshot = self.snapshot.take()?;

        session.auto_rotate = snapshot.auto_rotate;
        session.overlay_radius = settings.overlay_radius_initial;
        session.controls_visible = true;
        session.demo_switch = false;
        for (visible, before) in pin_visibility.iter_mut().zip(&snapshot.pin_visibility) {
            *visible = *before;
        }
        Some(snapshot)
    }
}
