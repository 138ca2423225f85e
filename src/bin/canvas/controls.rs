use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};
use projectile_motion::core::state::Phase;

use crate::constants::{PANEL_HEIGHT, PANEL_WIDTH, PANEL_X, PANEL_Y};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) run_pause: bool,
    pub(crate) reset: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            run_pause: self.run_pause || other.run_pause,
            reset: self.reset || other.reset,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        run_pause: is_key_pressed(KeyCode::Space),
        reset: is_key_pressed(KeyCode::R),
    }
}

/// Sliders are only offered while the controller has inputs enabled.
pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    let phase = state.controller.phase();
    let paused = state.controller.is_paused();
    let ranges = state.ranges;

    widgets::Window::new(
        hash!(),
        vec2(PANEL_X, PANEL_Y),
        vec2(PANEL_WIDTH, PANEL_HEIGHT),
    )
    .label("Launch Controls")
    .movable(false)
    .ui(&mut *root_ui(), |ui| {
        let sliders = &mut state.sliders;
        if state.inputs_enabled {
            ui.slider(
                hash!(),
                "Velocity (m/s)",
                range_f32(ranges.speed_mps),
                &mut sliders.speed_mps,
            );
            ui.slider(
                hash!(),
                "Angle (deg)",
                range_f32(ranges.angle_deg),
                &mut sliders.angle_deg,
            );
            ui.slider(
                hash!(),
                "Height (m)",
                range_f32(ranges.height_m),
                &mut sliders.height_m,
            );
            ui.slider(
                hash!(),
                "Gravity (m/s^2)",
                range_f32(ranges.gravity_mps2),
                &mut sliders.gravity_mps2,
            );
        } else {
            ui.label(None, &format!("Velocity: {:.1} m/s", sliders.speed_mps));
            ui.label(None, &format!("Angle: {:.0} deg", sliders.angle_deg));
            ui.label(None, &format!("Height: {:.1} m", sliders.height_m));
            ui.label(None, &format!("Gravity: {:.2} m/s^2", sliders.gravity_mps2));
        }

        ui.separator();
        let run_label = match (phase, paused) {
            (Phase::Idle, _) => "Run (Space)",
            (Phase::Running, false) => "Pause (Space)",
            (Phase::Running, true) => "Resume (Space)",
            (Phase::Landed, _) => "Landed",
        };
        if ui.button(None, run_label) {
            actions.run_pause = true;
        }
        if phase != Phase::Idle && ui.button(None, "Reset (R)") {
            actions.reset = true;
        }

        ui.separator();
        ui.checkbox(
            hash!(),
            "Velocity vector",
            &mut state.overlays.show_velocity_vector,
        );
        ui.checkbox(
            hash!(),
            "Velocity components",
            &mut state.overlays.show_components,
        );
        ui.label(None, &format!("State: {}", phase_text(phase, paused)));
    });

    actions
}

fn range_f32((min, max): (f64, f64)) -> std::ops::Range<f32> {
    min as f32..max as f32
}

pub(crate) fn phase_text(phase: Phase, paused: bool) -> &'static str {
    match phase {
        Phase::Idle => "Idle",
        Phase::Running => {
            if paused {
                "Paused"
            } else {
                "Running"
            }
        }
        Phase::Landed => "Landed",
    }
}
