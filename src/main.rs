use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::warn;
use projectile_motion::core::ballistics::flight_figures;
use projectile_motion::core::config::{AppConfig, DEFAULT_CONFIG_PATH};
use projectile_motion::core::controller::AnimationController;
use projectile_motion::core::error::{Error, Result};
use projectile_motion::core::params::{LaunchInputs, SimulationParameters};
use projectile_motion::core::plot::{default_plot_path, export_trajectory_png};
use projectile_motion::core::renderer::TraceRenderer;
use projectile_motion::core::state::Phase;

/// Runs one projectile launch headless and reports where it lands.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Initial speed (m/s).
    #[arg(long)]
    speed: Option<f64>,

    /// Launch angle (degrees).
    #[arg(long)]
    angle: Option<f64>,

    /// Initial height above the ground (m).
    #[arg(long)]
    height: Option<f64>,

    /// Gravitational acceleration magnitude (m/s^2).
    #[arg(long)]
    gravity: Option<f64>,

    /// INI file with scene, timing and default launch values.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Give up after this many ticks if the projectile never lands.
    #[arg(long)]
    max_ticks: Option<usize>,

    /// Save a PNG of the trajectory.
    /// Optionally provide a path (default: trajectory_<timestamp>.png).
    #[arg(long, value_name = "PATH")]
    plot: Option<Option<PathBuf>>,

    /// Prompt for each launch value instead of reading flags.
    #[arg(short, long)]
    interactive: bool,
}

fn read_f64(prompt: &str, default: f64) -> Result<f64> {
    loop {
        print!("{prompt} [{default}]: ");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended unexpectedly (EOF)",
            )));
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => eprintln!("Please enter a valid number (e.g., 45 or 12.5)."),
        }
    }
}

fn get_inputs_from_user(defaults: LaunchInputs) -> Result<LaunchInputs> {
    Ok(LaunchInputs {
        speed_mps: read_f64("Velocity (m/s)", defaults.speed_mps)?,
        angle_deg: read_f64("Angle (degrees)", defaults.angle_deg)?,
        height_m: read_f64("Height (m)", defaults.height_m)?,
        gravity_mps2: read_f64("Acceleration (m/s^2)", defaults.gravity_mps2)?,
    })
}

fn get_inputs_from_flags(cli: &Cli, defaults: LaunchInputs) -> LaunchInputs {
    LaunchInputs {
        speed_mps: cli.speed.unwrap_or(defaults.speed_mps),
        angle_deg: cli.angle.unwrap_or(defaults.angle_deg),
        height_m: cli.height.unwrap_or(defaults.height_m),
        gravity_mps2: cli.gravity.unwrap_or(defaults.gravity_mps2),
    }
}

/// Only a plotted run needs every rendered state.
fn flight_trace(cli: &Cli) -> TraceRenderer {
    if cli.plot.is_some() {
        TraceRenderer::default()
    } else {
        TraceRenderer::summary_only()
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = AppConfig::load(&cli.config)?;
    let inputs = if cli.interactive {
        get_inputs_from_user(config.launch)?
    } else {
        get_inputs_from_flags(&cli, config.launch)
    };
    inputs.validate(&config.ranges)?;

    let max_ticks = cli.max_ticks.unwrap_or(config.max_ticks);
    let params = SimulationParameters::from_inputs(&inputs, &config.scene);
    let mut controller = AnimationController::new(params, flight_trace(&cli))
        .with_timing(config.time_step, config.max_catch_up);
    controller.start(params);

    let mut ticks = 0usize;
    for _ in 0..max_ticks {
        if controller.phase() != Phase::Running {
            break;
        }
        ticks += controller.update(config.time_step) as usize;
    }

    let scene = config.scene;
    let trace = controller.renderer();
    let top_y = trace
        .highest_y()
        .map_or(params.launch_y(), |y| y.min(params.launch_y()));
    let apex_m = scene.to_metres(params.horizontal_origin, top_y).1.max(0.0);
    let final_state = *controller.state();
    let (distance_m, _) = scene.to_metres(final_state.position_x, final_state.position_y);

    if controller.phase() == Phase::Landed {
        println!("\nSimulated ({} ticks of {} s):", ticks, config.time_step);
        println!("  Time of flight: {:.4} s", final_state.elapsed_time);
        println!("  Horizontal distance: {:.4} m", distance_m);
        println!("  Apex height: {:.4} m", apex_m);
    } else {
        warn!("No ground contact after {ticks} ticks");
        println!(
            "\nDid not land within {} ticks ({:.2} s); last distance {:.4} m",
            ticks, final_state.elapsed_time, distance_m
        );
    }

    match flight_figures(&inputs) {
        Ok(figures) => {
            println!("Closed form:");
            println!("  Time of flight: {:.4} s", figures.time_of_flight_s);
            println!("  Horizontal distance: {:.4} m", figures.range_m);
            println!("  Apex height: {:.4} m", figures.apex_height_m);
        }
        Err(err) => println!("Closed form: {err}"),
    }

    if let Some(plot) = cli.plot {
        let mut path_m = vec![scene.to_metres(params.horizontal_origin, params.launch_y())];
        path_m.extend(trace.path().into_iter().map(|(x, y)| scene.to_metres(x, y)));
        let plot_path = plot.unwrap_or_else(default_plot_path);
        let title = format!(
            "v = {} m/s, angle = {} deg, h = {} m, g = {} m/s^2",
            inputs.speed_mps, inputs.angle_deg, inputs.height_m, inputs.gravity_mps2
        );
        export_trajectory_png(&plot_path, &path_m, &title)?;
        println!("Plot saved to {}", plot_path.display());
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
