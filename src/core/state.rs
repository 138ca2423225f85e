use crate::core::params::SimulationParameters;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Landed,
}

/// Kinematic state of the projectile in render space.
///
/// `velocity_y` follows the render-space sign: positive means moving toward the ground.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationState {
    pub elapsed_time: f64,
    pub position_x: f64,
    pub position_y: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    pub phase: Phase,
}

impl SimulationState {
    pub fn launch(params: &SimulationParameters) -> Self {
        Self {
            elapsed_time: 0.0,
            position_x: params.horizontal_origin,
            position_y: params.launch_y(),
            velocity_x: params.initial_velocity_x(),
            velocity_y: -params.initial_velocity_y(),
            phase: Phase::Running,
        }
    }

    /// The pre-launch snapshot shown on the platform.
    pub fn at_rest(params: &SimulationParameters) -> Self {
        Self {
            phase: Phase::Idle,
            ..Self::launch(params)
        }
    }

    pub fn speed(&self) -> f64 {
        self.velocity_x.hypot(self.velocity_y)
    }

    pub fn is_landed(&self) -> bool {
        self.phase == Phase::Landed
    }
}
