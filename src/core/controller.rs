//! Run/pause/reset lifecycle of a single projectile.
//!
//! The controller owns the simulation state, the parameter snapshot and the one
//! repeating [`TickTimer`]. Cancelling the timer drops it, so nothing can tick after a
//! landing or a reset.

use log::{debug, info, warn};

use crate::core::integrator::advance;
use crate::core::params::{DEFAULT_TIME_STEP_S, SimulationParameters};
use crate::core::renderer::{Frame, Overlays, Renderer};
use crate::core::state::{Phase, SimulationState};
use crate::core::timer::{DEFAULT_MAX_CATCH_UP_S, TickTimer};

/// Signals for the input-control collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    InputsEnabled(bool),
}

pub struct AnimationController<R: Renderer> {
    renderer: R,
    params: SimulationParameters,
    state: SimulationState,
    timer: Option<TickTimer>,
    overlays: Overlays,
    time_step: f64,
    max_catch_up: f64,
    events: Vec<ControlEvent>,
}

impl<R: Renderer> AnimationController<R> {
    pub fn new(params: SimulationParameters, renderer: R) -> Self {
        Self {
            renderer,
            params,
            state: SimulationState::at_rest(&params),
            timer: None,
            overlays: Overlays::default(),
            time_step: DEFAULT_TIME_STEP_S,
            max_catch_up: DEFAULT_MAX_CATCH_UP_S,
            events: Vec::new(),
        }
    }

    pub fn with_timing(mut self, time_step: f64, max_catch_up: f64) -> Self {
        self.time_step = time_step.max(f64::EPSILON);
        self.max_catch_up = max_catch_up;
        self
    }

    pub fn with_overlays(mut self, overlays: Overlays) -> Self {
        self.overlays = overlays;
        self
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn is_ticking(&self) -> bool {
        self.timer.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.timer.as_ref().is_some_and(TickTimer::is_suspended)
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn take_events(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.events)
    }

    /// Launches a new run. Only valid from `Idle`; otherwise nothing changes.
    pub fn start(&mut self, params: SimulationParameters) -> bool {
        if self.state.phase != Phase::Idle {
            warn!(
                "Ignoring start while {:?}; reset before launching again",
                self.state.phase
            );
            return false;
        }

        self.timer = None;
        self.params = params;
        self.state = SimulationState::launch(&params);
        self.timer = Some(TickTimer::new(self.time_step, self.max_catch_up));
        self.events.push(ControlEvent::InputsEnabled(false));
        info!(
            "Launched: speed={:.2}, angle={:.1} deg, height={:.2}, g={:.2}",
            params.initial_speed,
            params.launch_angle_radians.to_degrees(),
            params.initial_height,
            params.gravitational_acceleration
        );
        true
    }

    /// Stops ticking and puts the projectile back on its launch platform.
    pub fn reset(&mut self) {
        if self.state.phase == Phase::Idle {
            return;
        }

        self.timer = None;
        self.state = SimulationState::at_rest(&self.params);
        self.render();
        self.events.push(ControlEvent::InputsEnabled(true));
        info!("Reset to launch position");
    }

    /// Restages the pre-launch platform while the inputs are being edited.
    pub fn preview(&mut self, params: SimulationParameters) -> bool {
        if self.state.phase != Phase::Idle {
            return false;
        }

        self.params = params;
        self.state = SimulationState::at_rest(&params);
        self.render();
        true
    }

    /// Returns whether the run is paused afterwards.
    pub fn toggle_pause(&mut self) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };

        let paused = !timer.is_suspended();
        timer.set_suspended(paused);
        debug!(
            "{} at t={:.2}s",
            if paused { "Paused" } else { "Resumed" },
            self.state.elapsed_time
        );
        paused
    }

    pub fn set_overlays(&mut self, overlays: Overlays) {
        if self.overlays == overlays {
            return;
        }
        self.overlays = overlays;
        self.render();
    }

    /// Feeds elapsed wall-clock time to the timer and runs every due tick.
    pub fn update(&mut self, wall_dt: f64) -> u32 {
        let due = match self.timer.as_mut() {
            Some(timer) => timer.poll(wall_dt),
            None => return 0,
        };

        let mut ran = 0;
        for _ in 0..due {
            if self.timer.is_none() {
                break;
            }
            self.tick();
            ran += 1;
        }
        ran
    }

    pub fn redraw(&mut self) {
        self.render();
    }

    fn tick(&mut self) {
        if self.state.phase != Phase::Running {
            self.timer = None;
            return;
        }

        self.state = advance(&self.state, &self.params, self.time_step);
        if self.state.is_landed() {
            self.timer = None;
            info!(
                "Landed at x={:.2} after {:.2}s",
                self.state.position_x, self.state.elapsed_time
            );
        }
        self.render();
    }

    fn render(&mut self) {
        self.renderer.render(&Frame {
            state: &self.state,
            params: &self.params,
            show_velocity_vector: self.overlays.show_velocity_vector,
            show_components: self.overlays.show_components,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_3, PI};

    use super::{AnimationController, ControlEvent};
    use crate::core::params::SimulationParameters;
    use crate::core::renderer::{Overlays, TraceRenderer};
    use crate::core::state::{Phase, SimulationState};

    const DT: f64 = 0.01;

    fn params() -> SimulationParameters {
        SimulationParameters::new(200.0, FRAC_PI_3, 40.0, 196.0, 50.0, 435.0)
    }

    fn controller() -> AnimationController<TraceRenderer> {
        AnimationController::new(params(), TraceRenderer::default())
    }

    fn run_until_landed(controller: &mut AnimationController<TraceRenderer>) -> usize {
        let mut ticks = 0;
        while controller.phase() == Phase::Running {
            ticks += controller.update(DT) as usize;
            assert!(ticks < 100_000, "flight should land");
        }
        ticks
    }

    #[test]
    fn starts_idle_without_ticking() {
        let mut controller = controller();
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(!controller.is_ticking());
        assert_eq!(controller.update(1.0), 0);
        assert_eq!(controller.renderer().renders(), 0);
    }

    #[test]
    fn start_snapshots_params_and_disables_inputs() {
        let mut controller = controller();
        assert!(controller.start(params()));

        assert_eq!(controller.phase(), Phase::Running);
        assert_eq!(controller.state().elapsed_time, 0.0);
        assert!(controller.is_ticking());
        assert_eq!(controller.take_events(), vec![ControlEvent::InputsEnabled(false)]);
        assert!(controller.take_events().is_empty());
        assert_eq!(controller.renderer().renders(), 0);
    }

    #[test]
    fn each_tick_renders_once() {
        let mut controller = controller();
        controller.start(params());
        for expected in 1..=5 {
            assert_eq!(controller.update(DT), 1);
            assert_eq!(controller.renderer().renders(), expected);
        }
        assert!((controller.state().elapsed_time - 0.05).abs() < 1e-12);
        assert_eq!(controller.renderer().last(), Some(controller.state()));
    }

    #[test]
    fn landing_renders_final_frame_and_stops_timer() {
        let mut controller = controller();
        controller.start(params());
        let ticks = run_until_landed(&mut controller);

        assert_eq!(controller.phase(), Phase::Landed);
        assert!(!controller.is_ticking());
        assert_eq!(controller.renderer().renders(), ticks);
        assert_eq!(controller.renderer().last().map(|s| s.phase), Some(Phase::Landed));

        let frozen = *controller.state();
        assert_eq!(controller.update(5.0), 0);
        assert_eq!(*controller.state(), frozen);
        assert_eq!(controller.renderer().renders(), ticks);
    }

    #[test]
    fn no_tick_runs_after_landing_within_one_burst() {
        let mut controller = controller();
        let downward =
            SimulationParameters::new(200.0, 5.0 * PI / 3.0, 0.0, 196.0, 50.0, 435.0);
        controller.start(downward);

        assert_eq!(controller.update(0.1), 1);
        assert_eq!(controller.phase(), Phase::Landed);
        assert_eq!(controller.renderer().renders(), 1);
    }

    #[test]
    fn start_is_ignored_unless_idle() {
        let mut controller = controller();
        controller.start(params());
        controller.update(DT);
        let running = *controller.state();
        controller.take_events();

        let other = SimulationParameters::new(50.0, 0.2, 0.0, 10.0, 50.0, 435.0);
        assert!(!controller.start(other));
        assert_eq!(*controller.state(), running);
        assert_eq!(*controller.params(), params());
        assert!(controller.take_events().is_empty());

        run_until_landed(&mut controller);
        assert!(!controller.start(other));
        assert_eq!(controller.phase(), Phase::Landed);
    }

    #[test]
    fn reset_round_trip_restores_launch_snapshot() {
        let mut controller = controller();
        controller.start(params());
        let launched = *controller.state();
        for _ in 0..37 {
            controller.update(DT);
        }
        controller.take_events();

        let renders_before = controller.renderer().renders();
        controller.reset();

        assert_eq!(
            *controller.state(),
            SimulationState {
                phase: Phase::Idle,
                ..launched
            }
        );
        assert_eq!(controller.state().elapsed_time, 0.0);
        assert!(!controller.is_ticking());
        assert_eq!(controller.renderer().renders(), renders_before + 1);
        assert_eq!(controller.take_events(), vec![ControlEvent::InputsEnabled(true)]);
        assert_eq!(controller.update(1.0), 0);
    }

    #[test]
    fn reset_from_landed_allows_a_new_run() {
        let mut controller = controller();
        controller.start(params());
        run_until_landed(&mut controller);
        controller.reset();

        assert_eq!(controller.phase(), Phase::Idle);
        assert!(controller.start(params()));
        assert_eq!(controller.update(DT), 1);
    }

    #[test]
    fn reset_in_idle_is_a_no_op() {
        let mut controller = controller();
        controller.reset();
        assert_eq!(controller.renderer().renders(), 0);
        assert!(controller.take_events().is_empty());
    }

    #[test]
    fn pause_freezes_elapsed_time() {
        let mut controller = controller();
        controller.start(params());
        controller.update(DT);

        assert!(controller.toggle_pause());
        assert!(controller.is_paused());
        let paused_at = *controller.state();
        assert_eq!(controller.update(1.0), 0);
        assert_eq!(*controller.state(), paused_at);

        assert!(!controller.toggle_pause());
        assert_eq!(controller.update(DT), 1);
        assert!(controller.state().elapsed_time > paused_at.elapsed_time);
    }

    #[test]
    fn reset_clears_pause() {
        let mut controller = controller();
        controller.start(params());
        controller.toggle_pause();
        controller.reset();

        assert!(!controller.is_paused());
        assert!(!controller.toggle_pause());
    }

    #[test]
    fn preview_only_applies_while_idle() {
        let mut controller = controller();
        let taller =
            SimulationParameters::new(200.0, FRAC_PI_3, 100.0, 196.0, 50.0, 435.0);

        assert!(controller.preview(taller));
        assert_eq!(controller.state().position_y, 335.0);
        assert_eq!(controller.renderer().renders(), 1);

        controller.start(params());
        assert!(!controller.preview(taller));
        assert_eq!(*controller.params(), params());
    }

    #[test]
    fn overlay_changes_render_once() {
        let mut controller = controller();
        let overlays = Overlays {
            show_velocity_vector: true,
            show_components: false,
        };

        controller.set_overlays(overlays);
        controller.set_overlays(overlays);

        assert_eq!(controller.renderer().renders(), 1);
        assert_eq!(controller.renderer().last_overlays, overlays);
    }

    #[test]
    fn stalled_frame_catch_up_is_capped() {
        let mut controller = controller().with_timing(DT, 0.1);
        controller.start(params());
        assert_eq!(controller.update(30.0), 10);
    }

    #[test]
    fn tiny_time_step_runs_one_tick_per_interval() {
        let mut controller = controller().with_timing(1e-12, 0.1);
        controller.start(params());
        assert_eq!(controller.update(1e-12), 1);
        assert_eq!(controller.renderer().renders(), 1);
    }
}
