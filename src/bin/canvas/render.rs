use macroquad::prelude::*;
use projectile_motion::core::params::SimulationParameters;
use projectile_motion::core::renderer::{Frame, Renderer};
use projectile_motion::core::state::SimulationState;

use crate::constants::{
    ARROW_HEAD_PX, BALL_COLOR, CANVAS_HEIGHT, CANVAS_WIDTH, CANVAS_X, CANVAS_Y, MIN_ARROW_PX,
    PLATFORM_COLOR, VECTOR_SECONDS, VELOCITY_COLOR, X_COMPONENT_COLOR, Y_COMPONENT_COLOR,
};

pub(crate) fn to_screen(x: f32, y: f32) -> Vec2 {
    vec2(CANVAS_X + x, CANVAS_Y + y)
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

#[derive(Clone, Copy)]
struct RetainedFrame {
    state: SimulationState,
    params: SimulationParameters,
    show_velocity_vector: bool,
    show_components: bool,
}

/// Keeps the most recent frame so it can be repainted every display refresh,
/// the way a browser canvas keeps its pixels between draws.
pub(crate) struct RetainedCanvas {
    radius: f32,
    frame: Option<RetainedFrame>,
}

impl RetainedCanvas {
    pub(crate) fn new(radius: f64) -> Self {
        Self {
            radius: radius as f32,
            frame: None,
        }
    }

    pub(crate) fn paint(&self) {
        let Some(frame) = self.frame else {
            return;
        };

        draw_platform(&frame.params, self.radius);

        let ball = vec2(frame.state.position_x as f32, frame.state.position_y as f32);
        if !inside_canvas(ball, self.radius) {
            return;
        }
        let center = to_screen(ball.x, ball.y);
        draw_circle(center.x, center.y, self.radius, BALL_COLOR);

        let velocity = vec2(frame.state.velocity_x as f32, frame.state.velocity_y as f32);
        if frame.show_components {
            draw_arrow(center, vec2(velocity.x, 0.0) * VECTOR_SECONDS, X_COMPONENT_COLOR);
            draw_arrow(center, vec2(0.0, velocity.y) * VECTOR_SECONDS, Y_COMPONENT_COLOR);
        }
        if frame.show_velocity_vector {
            draw_arrow(center, velocity * VECTOR_SECONDS, VELOCITY_COLOR);
        }
    }
}

impl Renderer for RetainedCanvas {
    fn render(&mut self, frame: &Frame<'_>) {
        self.frame = Some(RetainedFrame {
            state: *frame.state,
            params: *frame.params,
            show_velocity_vector: frame.show_velocity_vector,
            show_components: frame.show_components,
        });
    }
}

fn inside_canvas(point: Vec2, radius: f32) -> bool {
    point.x >= -radius
        && point.x <= CANVAS_WIDTH + radius
        && point.y >= -radius
        && point.y <= CANVAS_HEIGHT + radius
}

/// Column under the launch point, from the ball's resting spot down to the ground.
fn draw_platform(params: &SimulationParameters, radius: f32) {
    let height = params.initial_height as f32;
    if height <= 0.0 {
        return;
    }
    let top_left = to_screen(
        params.horizontal_origin as f32 - radius,
        params.launch_y() as f32 + radius,
    );
    draw_rectangle(top_left.x, top_left.y, radius * 2.0, height, PLATFORM_COLOR);
}

fn draw_arrow(from: Vec2, delta: Vec2, color: Color) {
    let length = delta.length();
    if length < MIN_ARROW_PX {
        return;
    }

    let tip = from + delta;
    let dir = delta / length;
    let normal = vec2(-dir.y, dir.x);
    let head = ARROW_HEAD_PX.min(length);
    let base = tip - (dir * head);

    draw_line(from.x, from.y, base.x, base.y, 2.5, color);
    draw_triangle(
        tip,
        base + (normal * (head * 0.5)),
        base - (normal * (head * 0.5)),
        color,
    );
}
