//! Settings loaded from an INI file.
//!
//! ```ini
//! [simulation]
//! time_step = 0.01
//! max_catch_up = 0.1
//! max_ticks = 60000
//!
//! [scene]
//! pixels_per_metre = 20
//! ground_level = 445
//! projectile_radius = 10
//! horizontal_origin = 50
//!
//! [launch]
//! speed = 10
//! angle_deg = 60
//! height = 0
//! gravity = 9.8
//!
//! [overlays]
//! velocity_vector = false
//! components = false
//!
//! [window]
//! width = 1280
//! height = 640
//! msaa = 4
//! ```
//!
//! Missing keys keep their defaults. A missing file is not an error.

use std::path::{Path, PathBuf};

use configparser::ini::Ini;
use log::{info, warn};

use crate::core::error::{Error, Result};
use crate::core::params::{
    DEFAULT_TIME_STEP_S, InputRanges, LaunchInputs, MIN_TIME_STEP_S, Scene,
};
use crate::core::renderer::Overlays;
use crate::core::timer::DEFAULT_MAX_CATCH_UP_S;

pub const DEFAULT_CONFIG_PATH: &str = "./projectile.ini";
pub const DEFAULT_MAX_TICKS: usize = 60_000;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub time_step: f64,
    pub max_catch_up: f64,
    pub max_ticks: usize,
    pub scene: Scene,
    pub launch: LaunchInputs,
    pub ranges: InputRanges,
    pub overlays: Overlays,
    pub window_width: i32,
    pub window_height: i32,
    pub msaa_samples: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP_S,
            max_catch_up: DEFAULT_MAX_CATCH_UP_S,
            max_ticks: DEFAULT_MAX_TICKS,
            scene: Scene::default(),
            launch: LaunchInputs::default(),
            ranges: InputRanges::default(),
            overlays: Overlays::default(),
            window_width: 1280,
            window_height: 640,
            msaa_samples: 4,
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config at {path:?}; using defaults");
            return Ok(Self::default());
        }

        let mut ini = Ini::new();
        ini.load(path).map_err(|reason| Error::Config {
            path: path.to_path_buf(),
            reason,
        })?;
        let config = Self::from_ini(&ini, path)?;
        info!(
            "Loaded config {path:?}: dt={}s, scale={} px/m, ground={}",
            config.time_step, config.scene.pixels_per_metre, config.scene.ground_level
        );
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut ini = Ini::new();
        ini.read(text.to_string()).map_err(|reason| Error::Config {
            path: PathBuf::from("<inline>"),
            reason,
        })?;
        Self::from_ini(&ini, Path::new("<inline>"))
    }

    fn from_ini(ini: &Ini, path: &Path) -> Result<Self> {
        let reader = Reader { ini, path };
        let mut config = Self::default();

        if let Some(dt) = reader.float("simulation", "time_step")? {
            if dt >= MIN_TIME_STEP_S {
                config.time_step = dt;
            } else {
                warn!("Ignoring time_step {dt}; it must be at least {MIN_TIME_STEP_S}");
            }
        }
        if let Some(cap) = reader.float("simulation", "max_catch_up")? {
            config.max_catch_up = cap;
        }
        if let Some(ticks) = reader.uint("simulation", "max_ticks")? {
            config.max_ticks = ticks as usize;
        }

        if let Some(scale) = reader.float("scene", "pixels_per_metre")? {
            if scale > 0.0 {
                config.scene.pixels_per_metre = scale;
            } else {
                warn!("Ignoring non-positive pixels_per_metre {scale}");
            }
        }
        if let Some(ground) = reader.float("scene", "ground_level")? {
            config.scene.ground_level = ground;
        }
        if let Some(radius) = reader.float("scene", "projectile_radius")? {
            if radius > 0.0 {
                config.scene.projectile_radius = radius;
            } else {
                warn!("Ignoring non-positive projectile_radius {radius}");
            }
        }
        if let Some(origin) = reader.float("scene", "horizontal_origin")? {
            config.scene.horizontal_origin = origin;
        }

        if let Some(speed) = reader.float("launch", "speed")? {
            config.launch.speed_mps = speed;
        }
        if let Some(angle) = reader.float("launch", "angle_deg")? {
            config.launch.angle_deg = angle;
        }
        if let Some(height) = reader.float("launch", "height")? {
            config.launch.height_m = height;
        }
        if let Some(gravity) = reader.float("launch", "gravity")? {
            config.launch.gravity_mps2 = gravity;
        }
        let clamped = config.launch.clamped(&config.ranges);
        if clamped != config.launch {
            warn!("Launch defaults clamped into slider ranges: {clamped:?}");
            config.launch = clamped;
        }

        if let Some(show) = reader.bool("overlays", "velocity_vector")? {
            config.overlays.show_velocity_vector = show;
        }
        if let Some(show) = reader.bool("overlays", "components")? {
            config.overlays.show_components = show;
        }

        if let Some(width) = reader.int("window", "width")? {
            config.window_width = width;
        }
        if let Some(height) = reader.int("window", "height")? {
            config.window_height = height;
        }
        if let Some(msaa) = reader.int("window", "msaa")? {
            config.msaa_samples = msaa;
        }

        Ok(config)
    }
}

struct Reader<'a> {
    ini: &'a Ini,
    path: &'a Path,
}

impl Reader<'_> {
    fn error(&self, reason: String) -> Error {
        Error::Config {
            path: self.path.to_path_buf(),
            reason,
        }
    }

    fn float(&self, section: &str, key: &str) -> Result<Option<f64>> {
        self.ini
            .getfloat(section, key)
            .map_err(|reason| self.error(reason))
    }

    fn uint(&self, section: &str, key: &str) -> Result<Option<u64>> {
        self.ini
            .getuint(section, key)
            .map_err(|reason| self.error(reason))
    }

    fn int(&self, section: &str, key: &str) -> Result<Option<i32>> {
        self.uint(section, key)?
            .map(|value| {
                i32::try_from(value)
                    .map_err(|_| self.error(format!("[{section}] {key} = {value} is too large")))
            })
            .transpose()
    }

    fn bool(&self, section: &str, key: &str) -> Result<Option<bool>> {
        self.ini
            .getbool(section, key)
            .map_err(|reason| self.error(reason))
    }
}
