use std::fmt::Display;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use log::info;
use plotters::prelude::*;

use crate::core::error::{Error, Result};

pub const PLOT_SIZE: (u32, u32) = (1280, 640);
pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

pub fn default_plot_path() -> PathBuf {
    timestamped_file_name(&Local::now())
}

pub fn timestamped_file_name<Tz: TimeZone>(at: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: Display,
{
    PathBuf::from(format!("trajectory_{}.png", at.format("%Y%m%d_%H%M%S")))
}

/// Padded `(x_min, x_max)` and `(0, y_max)` spans kept at a fixed aspect ratio.
pub fn axis_window(points: &[(f64, f64)]) -> ((f64, f64), (f64, f64)) {
    let raw_min_x = points.iter().fold(0.0f64, |acc, p| acc.min(p.0));
    let raw_max_x = points.iter().fold(0.0f64, |acc, p| acc.max(p.0));
    let raw_max_y = points.iter().fold(0.0f64, |acc, p| acc.max(p.1));

    let raw_x_span = (raw_max_x - raw_min_x).max(1.0);
    let raw_y_span = raw_max_y.max(1.0);
    let x_pad = raw_x_span * X_PADDING_RATIO;
    let y_pad = raw_y_span * Y_PADDING_RATIO;

    let mut x_span = (raw_x_span + x_pad).max(1.0);
    let mut y_span = (raw_y_span + y_pad).max(1.0);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    let x_min = if raw_min_x < 0.0 {
        raw_min_x - x_pad * 0.5
    } else {
        0.0
    };
    ((x_min, x_min + x_span), (0.0, y_span))
}

/// Draws a trajectory given in metres (distance, height above ground).
pub fn export_trajectory_png(path: &Path, points: &[(f64, f64)], title: &str) -> Result<()> {
    let ((x_min, x_max), (y_min, y_max)) = axis_window(points);

    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Height (m)")
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))
        .map_err(plot_error)?;

    if let Some(&landing) = points.last() {
        chart
            .draw_series(std::iter::once(Circle::new(landing, 5, RED.filled())))
            .map_err(plot_error)?;
    }

    root.present().map_err(plot_error)?;
    info!("Saved trajectory plot to {path:?}");
    Ok(())
}

fn plot_error<E: Display>(err: E) -> Error {
    Error::Plot(err.to_string())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::{TimeZone, Utc};

    use super::{DISTANCE_TO_HEIGHT_RATIO, axis_window, timestamped_file_name};

    #[test]
    fn file_name_carries_timestamp() {
        let at = Utc
            .with_ymd_and_hms(2026, 3, 14, 9, 26, 53)
            .single()
            .expect("valid timestamp");
        assert_eq!(
            timestamped_file_name(&at),
            PathBuf::from("trajectory_20260314_092653.png")
        );
    }

    #[test]
    fn window_contains_every_point_at_fixed_ratio() {
        let points = [(0.0, 0.0), (4.0, 3.8), (8.8, 0.0)];
        let ((x_min, x_max), (y_min, y_max)) = axis_window(&points);

        assert_eq!(x_min, 0.0);
        assert_eq!(y_min, 0.0);
        for (x, y) in points {
            assert!(x <= x_max && y <= y_max);
        }
        let ratio = (x_max - x_min) / (y_max - y_min);
        assert!((ratio - DISTANCE_TO_HEIGHT_RATIO).abs() < 1e-9);
    }

    #[test]
    fn window_extends_left_for_backward_launches() {
        let ((x_min, x_max), _) = axis_window(&[(0.0, 0.0), (-6.0, 1.0)]);
        assert!(x_min < -6.0);
        assert!(x_max >= 0.0);
    }
}
