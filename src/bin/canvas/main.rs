use macroquad::prelude::Conf;

mod app;
mod constants;
mod controls;
mod hud;
mod render;
mod scenery;
mod state;

fn window_conf() -> Conf {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    app::run().await;
}
