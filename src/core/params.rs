use crate::core::error::{Error, Result};

pub const DEFAULT_TIME_STEP_S: f64 = 0.01;
pub const MIN_TIME_STEP_S: f64 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchInputs {
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub height_m: f64,
    pub gravity_mps2: f64,
}

impl Default for LaunchInputs {
    fn default() -> Self {
        Self {
            speed_mps: 10.0,
            angle_deg: 60.0,
            height_m: 0.0,
            gravity_mps2: 9.8,
        }
    }
}

impl LaunchInputs {
    /// Checks values that did not come from a range-bounded slider.
    pub fn validate(&self, ranges: &InputRanges) -> Result<()> {
        if !self.speed_mps.is_finite()
            || !self.angle_deg.is_finite()
            || !self.height_m.is_finite()
            || !self.gravity_mps2.is_finite()
        {
            return Err(Error::NonFinite);
        }

        check_range("velocity", self.speed_mps, ranges.speed_mps)?;
        check_range("angle", self.angle_deg, ranges.angle_deg)?;
        check_range("height", self.height_m, ranges.height_m)?;
        check_range("acceleration", self.gravity_mps2, ranges.gravity_mps2)?;
        Ok(())
    }

    pub fn clamped(self, ranges: &InputRanges) -> Self {
        Self {
            speed_mps: self.speed_mps.clamp(ranges.speed_mps.0, ranges.speed_mps.1),
            angle_deg: self.angle_deg.clamp(ranges.angle_deg.0, ranges.angle_deg.1),
            height_m: self.height_m.clamp(ranges.height_m.0, ranges.height_m.1),
            gravity_mps2: self
                .gravity_mps2
                .clamp(ranges.gravity_mps2.0, ranges.gravity_mps2.1),
        }
    }
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Inclusive `(min, max)` bounds of each input control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputRanges {
    pub speed_mps: (f64, f64),
    pub angle_deg: (f64, f64),
    pub height_m: (f64, f64),
    pub gravity_mps2: (f64, f64),
}

impl Default for InputRanges {
    fn default() -> Self {
        Self {
            speed_mps: (0.0, 30.0),
            angle_deg: (0.0, 359.0),
            height_m: (0.0, 15.0),
            gravity_mps2: (0.0, 25.0),
        }
    }
}

/// Render-space geometry. The vertical axis grows downward from the top of the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    pub pixels_per_metre: f64,
    pub ground_level: f64,
    pub projectile_radius: f64,
    pub horizontal_origin: f64,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            pixels_per_metre: 20.0,
            ground_level: 445.0,
            projectile_radius: 10.0,
            horizontal_origin: 50.0,
        }
    }
}

impl Scene {
    pub fn ground_threshold(&self) -> f64 {
        self.ground_level - self.projectile_radius
    }

    /// Converts a render-space point back to metres (distance, height above ground).
    pub fn to_metres(&self, x: f64, y: f64) -> (f64, f64) {
        let scale = self.pixels_per_metre.max(f64::EPSILON);
        (
            (x - self.horizontal_origin) / scale,
            (self.ground_threshold() - y) / scale,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    pub initial_speed: f64,
    pub launch_angle_radians: f64,
    pub initial_height: f64,
    pub gravitational_acceleration: f64,
    pub horizontal_origin: f64,
    pub ground_threshold: f64,
    initial_velocity_x: f64,
    initial_velocity_y: f64,
}

impl SimulationParameters {
    pub fn new(
        initial_speed: f64,
        launch_angle_radians: f64,
        initial_height: f64,
        gravitational_acceleration: f64,
        horizontal_origin: f64,
        ground_threshold: f64,
    ) -> Self {
        let (sin, cos) = launch_angle_radians.sin_cos();
        Self {
            initial_speed,
            launch_angle_radians,
            initial_height,
            gravitational_acceleration,
            horizontal_origin,
            ground_threshold,
            initial_velocity_x: initial_speed * cos,
            initial_velocity_y: initial_speed * sin,
        }
    }

    pub fn from_inputs(inputs: &LaunchInputs, scene: &Scene) -> Self {
        let scale = scene.pixels_per_metre;
        Self::new(
            inputs.speed_mps * scale,
            inputs.angle_deg.to_radians(),
            inputs.height_m.max(0.0) * scale,
            inputs.gravity_mps2 * scale,
            scene.horizontal_origin,
            scene.ground_threshold(),
        )
    }

    pub fn initial_velocity_x(&self) -> f64 {
        self.initial_velocity_x
    }

    /// Up-positive, as in the physics convention.
    pub fn initial_velocity_y(&self) -> f64 {
        self.initial_velocity_y
    }

    /// Render-space vertical coordinate of the launch point.
    pub fn launch_y(&self) -> f64 {
        self.ground_threshold - self.initial_height
    }
}
