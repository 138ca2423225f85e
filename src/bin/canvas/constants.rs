use macroquad::prelude::Color;

pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

// Canvas placement inside the window.
pub const CANVAS_X: f32 = 20.0;
pub const CANVAS_Y: f32 = 20.0;
pub const CANVAS_WIDTH: f32 = 960.0;
pub const CANVAS_HEIGHT: f32 = 500.0;

pub const PANEL_X: f32 = 996.0;
pub const PANEL_Y: f32 = 20.0;
pub const PANEL_WIDTH: f32 = 264.0;
pub const PANEL_HEIGHT: f32 = 420.0;

pub const HUD_Y: f32 = CANVAS_Y + CANVAS_HEIGHT + 28.0;

// Scenery offsets relative to the scene's ground level (canvas y grows downward).
pub const GRASS_ABOVE_GROUND: f32 = 25.0;
pub const ROAD_ABOVE_GROUND: f32 = 15.0;
pub const ROAD_HEIGHT: f32 = 30.0;
pub const LANE_ABOVE_GROUND: f32 = 2.0;
pub const LEGEND_BELOW_GROUND: f32 = 25.0;
pub const LEGEND_CLEARANCE: f32 = 30.0;
pub const LANE_START: f32 = 20.0;
pub const LANE_LENGTH: f32 = 20.0;
pub const LANE_THICKNESS: f32 = 5.0;
pub const LANE_SPACING: f32 = 40.0;
pub const LEGEND_X: f32 = 30.0;

/// Arrow length in pixels per pixel/second of velocity.
pub const VECTOR_SECONDS: f32 = 0.25;
pub const ARROW_HEAD_PX: f32 = 9.0;
pub const MIN_ARROW_PX: f32 = 1.0;

pub const WINDOW_BG: Color = Color::new(0.92, 0.93, 0.95, 1.0);
pub const SKY_COLOR: Color = Color::new(0.529, 0.808, 0.980, 1.0);
pub const GRASS_COLOR: Color = Color::new(0.337, 0.490, 0.275, 1.0);
pub const ROAD_COLOR: Color = Color::new(0.435, 0.431, 0.388, 1.0);
pub const PLATFORM_COLOR: Color = Color::new(0.702, 0.0, 0.106, 1.0);
pub const BALL_COLOR: Color = Color::new(1.0, 0.647, 0.0, 1.0);
pub const VELOCITY_COLOR: Color = Color::new(0.09, 0.13, 0.55, 1.0);
pub const X_COMPONENT_COLOR: Color = Color::new(0.80, 0.10, 0.55, 1.0);
pub const Y_COMPONENT_COLOR: Color = Color::new(0.05, 0.55, 0.30, 1.0);
