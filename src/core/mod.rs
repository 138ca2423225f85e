pub mod ballistics;
pub mod config;
pub mod controller;
pub mod error;
pub mod integrator;
pub mod params;
pub mod plot;
pub mod renderer;
pub mod state;
pub mod timer;
