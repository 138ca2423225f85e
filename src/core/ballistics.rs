use crate::core::error::{Error, Result};
use crate::core::params::LaunchInputs;

/// Closed-form flight figures in metres and seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlightFigures {
    pub time_of_flight_s: f64,
    pub range_m: f64,
    pub apex_height_m: f64,
}

pub fn velocity_components(inputs: &LaunchInputs) -> (f64, f64) {
    let theta = inputs.angle_deg.to_radians();
    (inputs.speed_mps * theta.cos(), inputs.speed_mps * theta.sin())
}

pub fn trajectory_at_time(inputs: &LaunchInputs, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(inputs);
    let x = vx * time_s;
    let y = inputs.height_m + (vy * time_s) - (0.5 * inputs.gravity_mps2 * time_s * time_s);
    (x, y)
}

pub fn flight_figures(inputs: &LaunchInputs) -> Result<FlightFigures> {
    if !inputs.angle_deg.is_finite()
        || !inputs.speed_mps.is_finite()
        || !inputs.height_m.is_finite()
        || !inputs.gravity_mps2.is_finite()
    {
        return Err(Error::NonFinite);
    }

    let g = inputs.gravity_mps2;
    let (_, vy) = velocity_components(inputs);
    let disc = vy * vy + 2.0 * g * inputs.height_m;
    if g <= 0.0 || disc < 0.0 {
        return Err(Error::NoLanding(disc));
    }

    let t_land = (vy + disc.sqrt()) / g;
    let (range_m, _) = trajectory_at_time(inputs, t_land);
    let apex_height_m = if vy > 0.0 {
        inputs.height_m + (vy * vy) / (2.0 * g)
    } else {
        inputs.height_m
    };

    Ok(FlightFigures {
        time_of_flight_s: t_land,
        range_m,
        apex_height_m,
    })
}
