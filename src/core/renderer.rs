use crate::core::params::SimulationParameters;
use crate::core::state::SimulationState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overlays {
    pub show_velocity_vector: bool,
    pub show_components: bool,
}

/// Everything a renderer needs to draw one state change.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub state: &'a SimulationState,
    pub params: &'a SimulationParameters,
    pub show_velocity_vector: bool,
    pub show_components: bool,
}

/// Called synchronously once per state change.
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}

/// Records rendered states in order.
///
/// A summary-only trace keeps the count, the last state and the highest point but no path,
/// so long headless runs stay bounded in memory.
#[derive(Clone, Debug)]
pub struct TraceRenderer {
    states: Vec<SimulationState>,
    keep_states: bool,
    renders: usize,
    last: Option<SimulationState>,
    highest_y: Option<f64>,
    pub last_overlays: Overlays,
}

impl Default for TraceRenderer {
    fn default() -> Self {
        Self {
            states: Vec::new(),
            keep_states: true,
            renders: 0,
            last: None,
            highest_y: None,
            last_overlays: Overlays::default(),
        }
    }
}

impl TraceRenderer {
    pub fn summary_only() -> Self {
        Self {
            keep_states: false,
            ..Self::default()
        }
    }

    pub fn keeps_path(&self) -> bool {
        self.keep_states
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn last(&self) -> Option<&SimulationState> {
        self.last.as_ref()
    }

    /// Smallest render-space `y` seen, i.e. the highest point reached.
    pub fn highest_y(&self) -> Option<f64> {
        self.highest_y
    }

    pub fn clear(&mut self) {
        self.states.clear();
        self.renders = 0;
        self.last = None;
        self.highest_y = None;
    }

    pub fn path(&self) -> Vec<(f64, f64)> {
        self.states
            .iter()
            .map(|state| (state.position_x, state.position_y))
            .collect()
    }
}

impl Renderer for TraceRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        let state = *frame.state;
        self.renders += 1;
        self.last = Some(state);
        self.highest_y = Some(
            self.highest_y
                .map_or(state.position_y, |y| y.min(state.position_y)),
        );
        if self.keep_states {
            self.states.push(state);
        }
        self.last_overlays = Overlays {
            show_velocity_vector: frame.show_velocity_vector,
            show_components: frame.show_components,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::{Frame, Overlays, Renderer, TraceRenderer};
    use crate::core::params::SimulationParameters;
    use crate::core::state::SimulationState;

    #[test]
    fn records_states_and_overlay_flags_in_order() {
        let params = SimulationParameters::new(10.0, 0.5, 0.0, 9.8, 50.0, 435.0);
        let first = SimulationState::at_rest(&params);
        let second = SimulationState {
            position_x: 60.0,
            ..first
        };
        let mut trace = TraceRenderer::default();

        for (state, vector) in [(&first, false), (&second, true)] {
            trace.render(&Frame {
                state,
                params: &params,
                show_velocity_vector: vector,
                show_components: false,
            });
        }

        assert_eq!(trace.renders(), 2);
        assert_eq!(trace.last(), Some(&second));
        assert_eq!(trace.path(), vec![(50.0, 435.0), (60.0, 435.0)]);
        assert_eq!(
            trace.last_overlays,
            Overlays {
                show_velocity_vector: true,
                show_components: false,
            }
        );

        trace.clear();
        assert_eq!(trace.renders(), 0);
        assert_eq!(trace.last(), None);
    }

    #[test]
    fn summary_only_trace_keeps_no_path() {
        let params = SimulationParameters::new(10.0, 0.5, 0.0, 9.8, 50.0, 435.0);
        let resting = SimulationState::at_rest(&params);
        let mut trace = TraceRenderer::summary_only();

        for y in [435.0, 410.0, 420.0] {
            let state = SimulationState {
                position_y: y,
                ..resting
            };
            trace.render(&Frame {
                state: &state,
                params: &params,
                show_velocity_vector: false,
                show_components: false,
            });
        }

        assert!(!trace.keeps_path());
        assert_eq!(trace.renders(), 3);
        assert!(trace.path().is_empty());
        assert_eq!(trace.highest_y(), Some(410.0));
        assert_eq!(trace.last().map(|s| s.position_y), Some(420.0));
    }
}
