use macroquad::prelude::*;

use crate::constants::{CANVAS_X, HUD_Y};
use crate::controls::phase_text;
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    let sim = state.controller.state();
    let scale = state.scene.pixels_per_metre.max(f64::EPSILON);
    let (distance_m, height_m) = state.scene.to_metres(sim.position_x, sim.position_y);
    let phase = phase_text(state.controller.phase(), state.controller.is_paused());

    draw_ui_text(
        &format!(
            "t = {:.2} s | x = {:.2} m | height = {:.2} m | State: {}",
            sim.elapsed_time, distance_m, height_m, phase
        ),
        CANVAS_X,
        HUD_Y,
        24,
        header_color,
        font,
    );
    // Display velocities up-positive, in m/s.
    draw_ui_text(
        &format!(
            "vx = {:.2} m/s | vy = {:.2} m/s | |v| = {:.2} m/s",
            sim.velocity_x / scale,
            -sim.velocity_y / scale,
            sim.speed() / scale
        ),
        CANVAS_X,
        HUD_Y + 28.0,
        20,
        BLUE,
        font,
    );
    draw_ui_text(
        &state.status_line,
        CANVAS_X,
        HUD_Y + 54.0,
        18,
        DARKGRAY,
        font,
    );
}
