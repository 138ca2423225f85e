use macroquad::prelude::*;
use projectile_motion::core::params::Scene;

use crate::constants::{
    CANVAS_HEIGHT, CANVAS_WIDTH, GRASS_ABOVE_GROUND, GRASS_COLOR, LANE_ABOVE_GROUND, LANE_LENGTH,
    LANE_SPACING, LANE_START, LANE_THICKNESS, LEGEND_BELOW_GROUND, LEGEND_CLEARANCE, LEGEND_X,
    ROAD_ABOVE_GROUND, ROAD_COLOR, ROAD_HEIGHT, SKY_COLOR,
};
use crate::render::{draw_ui_text, to_screen};

/// Canvas-space rows of the ground scenery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GroundLayout {
    pub(crate) grass_top: f32,
    pub(crate) road_top: f32,
    pub(crate) lane_y: f32,
    pub(crate) legend_y: f32,
}

impl GroundLayout {
    pub(crate) fn for_scene(scene: &Scene) -> Self {
        let ground = scene.ground_level as f32;
        Self {
            grass_top: ground - GRASS_ABOVE_GROUND,
            road_top: ground - ROAD_ABOVE_GROUND,
            lane_y: ground - LANE_ABOVE_GROUND,
            legend_y: (ground + LEGEND_BELOW_GROUND).min(CANVAS_HEIGHT - LEGEND_CLEARANCE),
        }
    }
}

pub(crate) fn draw_scenery(scene: &Scene, font: Option<&Font>) {
    let layout = GroundLayout::for_scene(scene);

    fill_canvas_rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT, SKY_COLOR);
    fill_canvas_rect(
        0.0,
        layout.grass_top,
        CANVAS_WIDTH,
        (CANVAS_HEIGHT - layout.grass_top).max(0.0),
        GRASS_COLOR,
    );
    fill_canvas_rect(0.0, layout.road_top, CANVAS_WIDTH, ROAD_HEIGHT, ROAD_COLOR);

    let mut lane_x = LANE_START;
    while lane_x < CANVAS_WIDTH {
        fill_canvas_rect(lane_x, layout.lane_y, LANE_LENGTH, LANE_THICKNESS, YELLOW);
        lane_x += LANE_SPACING;
    }

    draw_scale_legend(scene.pixels_per_metre as f32, layout.legend_y, font);
}

/// One-metre reference bar sized from the scene scale.
fn draw_scale_legend(pixels_per_metre: f32, legend_y: f32, font: Option<&Font>) {
    let label = to_screen(LEGEND_X, legend_y + 15.0);
    draw_ui_text("Scale:", label.x, label.y, 15, BLACK, font);

    let bar_x = LEGEND_X + 59.0;
    fill_canvas_rect(bar_x, legend_y, pixels_per_metre + 4.0, 10.0, BLACK);
    fill_canvas_rect(bar_x + 2.0, legend_y, pixels_per_metre, 8.0, GRASS_COLOR);

    let caption = to_screen(bar_x - 9.0, legend_y + 25.0);
    draw_ui_text("1 metre", caption.x, caption.y, 12, BLACK, font);
}

fn fill_canvas_rect(x: f32, y: f32, w: f32, h: f32, color: Color) {
    let top_left = to_screen(x, y);
    draw_rectangle(top_left.x, top_left.y, w, h, color);
}
