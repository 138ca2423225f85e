use projectile_motion::core::config::AppConfig;
use projectile_motion::core::controller::{AnimationController, ControlEvent};
use projectile_motion::core::params::{InputRanges, LaunchInputs, Scene, SimulationParameters};
use projectile_motion::core::renderer::Overlays;

use crate::render::RetainedCanvas;

/// Slider positions; macroquad sliders edit `f32`.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct SliderValues {
    pub(crate) speed_mps: f32,
    pub(crate) angle_deg: f32,
    pub(crate) height_m: f32,
    pub(crate) gravity_mps2: f32,
}

impl SliderValues {
    fn from_inputs(inputs: LaunchInputs) -> Self {
        Self {
            speed_mps: inputs.speed_mps as f32,
            angle_deg: inputs.angle_deg as f32,
            height_m: inputs.height_m as f32,
            gravity_mps2: inputs.gravity_mps2 as f32,
        }
    }

    pub(crate) fn to_inputs(self) -> LaunchInputs {
        LaunchInputs {
            speed_mps: f64::from(self.speed_mps),
            angle_deg: f64::from(self.angle_deg),
            height_m: f64::from(self.height_m),
            gravity_mps2: f64::from(self.gravity_mps2),
        }
    }
}

pub(crate) struct AppRuntime {
    pub(crate) controller: AnimationController<RetainedCanvas>,
    pub(crate) sliders: SliderValues,
    pub(crate) ranges: InputRanges,
    pub(crate) scene: Scene,
    pub(crate) overlays: Overlays,
    pub(crate) inputs_enabled: bool,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new(config: &AppConfig) -> Self {
        let scene = config.scene;
        let params = SimulationParameters::from_inputs(&config.launch, &scene);
        let mut controller =
            AnimationController::new(params, RetainedCanvas::new(scene.projectile_radius))
                .with_timing(config.time_step, config.max_catch_up)
                .with_overlays(config.overlays);
        controller.redraw();

        Self {
            controller,
            sliders: SliderValues::from_inputs(config.launch),
            ranges: config.ranges,
            scene,
            overlays: config.overlays,
            inputs_enabled: true,
            status_line: "Ready".to_string(),
        }
    }

    pub(crate) fn staged_params(&self) -> SimulationParameters {
        let inputs = self.sliders.to_inputs().clamped(&self.ranges);
        SimulationParameters::from_inputs(&inputs, &self.scene)
    }

    pub(crate) fn apply_control_events(&mut self) {
        for event in self.controller.take_events() {
            match event {
                ControlEvent::InputsEnabled(enabled) => self.inputs_enabled = enabled,
            }
        }
    }
}
