use std::path::Path;
use std::sync::OnceLock;

use log::{error, warn};
use macroquad::prelude::*;
use projectile_motion::core::config::{AppConfig, DEFAULT_CONFIG_PATH};
use projectile_motion::core::state::Phase;

use crate::constants::{UI_FONT_PATH, WINDOW_BG};
use crate::controls::{FrameActions, draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::scenery::draw_scenery;
use crate::state::AppRuntime;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

fn config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        AppConfig::load(Path::new(DEFAULT_CONFIG_PATH)).unwrap_or_else(|err| {
            error!("{err}; using defaults");
            AppConfig::default()
        })
    })
}

pub(crate) fn window_conf() -> Conf {
    let config = config();
    Conf {
        window_title: "Projectile Motion".to_string(),
        window_width: config.window_width,
        window_height: config.window_height,
        high_dpi: true,
        sample_count: config.msaa_samples,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new(config());

    loop {
        let staged_before = state.sliders;
        let overlays_before = state.overlays;

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);

        if state.sliders != staged_before {
            let params = state.staged_params();
            state.controller.preview(params);
        }
        if state.overlays != overlays_before {
            state.controller.set_overlays(state.overlays);
        }

        let was_running = state.controller.phase() == Phase::Running;
        state.controller.update(f64::from(get_frame_time()));
        if was_running && state.controller.phase() == Phase::Landed {
            let sim = state.controller.state();
            let (distance_m, _) = state.scene.to_metres(sim.position_x, sim.position_y);
            state.status_line = format!(
                "Landed at {:.2} m after {:.2} s | R to reset",
                distance_m, sim.elapsed_time
            );
        }
        state.apply_control_events();

        clear_background(WINDOW_BG);
        draw_scenery(&state.scene, ui_font.as_ref());
        state.controller.renderer().paint();
        draw_hud(&state, ui_font.as_ref());

        next_frame().await;
    }
}

fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.run_pause {
        match state.controller.phase() {
            Phase::Idle => {
                let params = state.staged_params();
                if state.controller.start(params) {
                    state.status_line = "Launched".to_string();
                }
            }
            Phase::Running => {
                state.status_line = if state.controller.toggle_pause() {
                    "Paused".to_string()
                } else {
                    "Resumed".to_string()
                };
            }
            Phase::Landed => {
                state.status_line = "Reset (R) before launching again".to_string();
            }
        }
    }

    if actions.reset && state.controller.phase() != Phase::Idle {
        state.controller.reset();
        state.status_line = "Reset".to_string();
    }
}
