use crate::core::params::SimulationParameters;
use crate::core::state::{Phase, SimulationState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlightOutcome {
    Landed,
    TimedOut,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightSummary {
    pub outcome: FlightOutcome,
    pub ticks: usize,
    pub final_state: SimulationState,
}

/// Advances a running projectile by one tick.
///
/// Position is evaluated in closed form from the elapsed time, so rounding does not
/// accumulate across ticks. Idle and landed states come back unchanged.
pub fn advance(
    state: &SimulationState,
    params: &SimulationParameters,
    dt: f64,
) -> SimulationState {
    if state.phase != Phase::Running {
        return *state;
    }

    let t = state.elapsed_time + dt;
    let vx0 = params.initial_velocity_x();
    let vy0 = params.initial_velocity_y();
    let g = params.gravitational_acceleration;

    let position_x = params.horizontal_origin + (vx0 * t);
    // Physics displacement is up-positive; render y grows downward.
    let position_y = params.launch_y() - ((vy0 * t) - (0.5 * g * t * t));

    if position_y >= params.ground_threshold {
        return SimulationState {
            elapsed_time: t,
            position_x,
            position_y: params.ground_threshold,
            velocity_x: 0.0,
            velocity_y: 0.0,
            phase: Phase::Landed,
        };
    }

    SimulationState {
        elapsed_time: t,
        position_x,
        position_y,
        velocity_x: vx0,
        velocity_y: (g * t) - vy0,
        phase: Phase::Running,
    }
}

pub fn simulate_flight(
    params: &SimulationParameters,
    dt: f64,
    max_ticks: usize,
) -> FlightSummary {
    let mut state = SimulationState::launch(params);
    let mut ticks = 0usize;

    while ticks < max_ticks {
        state = advance(&state, params, dt);
        ticks += 1;
        if state.is_landed() {
            return FlightSummary {
                outcome: FlightOutcome::Landed,
                ticks,
                final_state: state,
            };
        }
    }

    FlightSummary {
        outcome: FlightOutcome::TimedOut,
        ticks,
        final_state: state,
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    use super::{FlightOutcome, advance, simulate_flight};
    use crate::core::params::{DEFAULT_TIME_STEP_S, SimulationParameters};
    use crate::core::state::{Phase, SimulationState};

    const DT: f64 = DEFAULT_TIME_STEP_S;
    const GROUND: f64 = 435.0;

    fn params(speed: f64, angle: f64, height: f64, g: f64) -> SimulationParameters {
        SimulationParameters::new(speed, angle, height, g, 50.0, GROUND)
    }

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn first_tick_is_dominated_by_velocity_term() {
        let p = params(10.0, FRAC_PI_3, 0.0, 9.8);
        let start = SimulationState::launch(&p);
        let next = advance(&start, &p, DT);

        assert_eq!(next.phase, Phase::Running);
        assert_close(next.elapsed_time, 0.01, 1e-12);
        let bound = 0.01 * 10.0 * FRAC_PI_3.sin();
        assert!((next.position_y - p.launch_y()).abs() < bound);
        assert!(next.position_y < p.launch_y(), "projectile should rise");
        assert_close(next.position_x, 50.0 + 0.05, 1e-12);
    }

    #[test]
    fn velocity_follows_render_space_sign() {
        let p = params(10.0, FRAC_PI_3, 0.0, 9.8);
        let next = advance(&SimulationState::launch(&p), &p, DT);

        assert_close(next.velocity_x, 5.0, 1e-12);
        assert_close(next.velocity_y, (9.8 * 0.01) - (10.0 * FRAC_PI_3.sin()), 1e-12);
    }

    #[test]
    fn horizontal_position_never_decreases_for_forward_launch() {
        let p = params(15.0, 0.4, 5.0, 9.8);
        let mut state = SimulationState::launch(&p);
        while !state.is_landed() {
            let next = advance(&state, &p, DT);
            assert!(next.position_x >= state.position_x);
            state = next;
        }
    }

    #[test]
    fn lands_in_finite_time_for_positive_gravity() {
        for step in 0..24_i32 {
            let angle = f64::from(step) * (2.0 * PI / 24.0);
            for height in [0.0, 5.0, 40.0] {
                let p = params(20.0, angle, height, 9.8);
                let summary = simulate_flight(&p, DT, 100_000);
                assert_eq!(
                    summary.outcome,
                    FlightOutcome::Landed,
                    "angle={angle}, height={height}"
                );
                assert_eq!(summary.final_state.position_y, GROUND);
            }
        }
    }

    #[test]
    fn zero_gravity_upward_launch_times_out() {
        let summary = simulate_flight(&params(10.0, FRAC_PI_2, 0.0, 0.0), DT, 5_000);
        assert_eq!(summary.outcome, FlightOutcome::TimedOut);
        assert_eq!(summary.ticks, 5_000);
        assert_eq!(summary.final_state.phase, Phase::Running);
    }

    #[test]
    fn zero_gravity_vertical_motion_is_linear() {
        let p = params(10.0, FRAC_PI_3, 2.0, 0.0);
        let mut state = SimulationState::launch(&p);
        let mut heights = vec![state.position_y];
        for _ in 0..50 {
            state = advance(&state, &p, DT);
            heights.push(state.position_y);
        }

        let first_step = heights[1] - heights[0];
        for pair in heights.windows(2) {
            assert_close(pair[1] - pair[0], first_step, 1e-9);
        }
    }

    #[test]
    fn landed_state_is_frozen() {
        let p = params(10.0, FRAC_PI_3, 0.0, 9.8);
        let landed = simulate_flight(&p, DT, 10_000).final_state;

        assert_eq!(landed.phase, Phase::Landed);
        assert_eq!(landed.velocity_x, 0.0);
        assert_eq!(landed.velocity_y, 0.0);
        for _ in 0..10 {
            assert_eq!(advance(&landed, &p, DT), landed);
        }
    }

    #[test]
    fn downward_launch_from_ground_lands_after_one_tick() {
        let p = params(10.0, 5.0 * PI / 3.0, 0.0, 9.8);
        let summary = simulate_flight(&p, DT, 10);
        assert_eq!(summary.outcome, FlightOutcome::Landed);
        assert_eq!(summary.ticks, 1);
    }

    #[test]
    fn idle_state_does_not_advance() {
        let p = params(10.0, FRAC_PI_3, 0.0, 9.8);
        let idle = SimulationState::at_rest(&p);
        assert_eq!(advance(&idle, &p, DT), idle);
    }
}
