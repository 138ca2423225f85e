pub const DEFAULT_MAX_CATCH_UP_S: f64 = 0.10;

// Fraction of an interval treated as float drift when wall-clock steps equal the interval.
const FIRE_TOLERANCE: f64 = 1e-6;

/// Repeating fixed-interval timer driven by elapsed wall-clock time.
#[derive(Clone, Debug, PartialEq)]
pub struct TickTimer {
    interval: f64,
    max_catch_up: f64,
    max_fires: f64,
    accumulated: f64,
    suspended: bool,
}

impl TickTimer {
    pub fn new(interval: f64, max_catch_up: f64) -> Self {
        let interval = interval.max(f64::EPSILON);
        let max_catch_up = max_catch_up.max(interval);
        Self {
            interval,
            max_catch_up,
            max_fires: ((max_catch_up / interval) + FIRE_TOLERANCE).floor(),
            accumulated: 0.0,
            suspended: false,
        }
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn set_suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
        self.accumulated = 0.0;
    }

    /// Returns how many firings are due after `elapsed` seconds, never more than
    /// `max_catch_up` worth of intervals.
    pub fn poll(&mut self, elapsed: f64) -> u32 {
        if self.suspended {
            return 0;
        }

        self.accumulated = (self.accumulated + elapsed.max(0.0)).min(self.max_catch_up);
        let due = ((self.accumulated / self.interval) + FIRE_TOLERANCE)
            .floor()
            .min(self.max_fires);
        self.accumulated = (self.accumulated - (due * self.interval)).max(0.0);
        due as u32
    }
}
