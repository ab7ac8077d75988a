use macroquad::prelude::Conf;

mod app;
mod clock;
mod constants;
mod gameplay;
mod hud;
mod input;
mod model;
mod render;
mod state;

fn window_conf() -> Conf {
    app::window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    coriolis_station::telemetry::init_tracing();
    app::run().await;
}
