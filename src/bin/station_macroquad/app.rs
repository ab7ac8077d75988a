use macroquad::prelude::*;
use tracing::{info, warn};

use coriolis_station::core::station::{SURFACE_HEIGHT, SURFACE_WIDTH, StationConfig};

use crate::clock::FrameClock;
use crate::constants::{BACKGROUND_COLOR, MSAA_SAMPLES, TICK_RATE_HZ, UI_FONT_PATH, WINDOW_TITLE};
use crate::gameplay::{dispatch_pointer_event, step_world};
use crate::hud::{draw_help_line, draw_slider, draw_speed_box};
use crate::input::PointerTracker;
use crate::render::{draw_cylinder, draw_drag_line, draw_projectiles, draw_rotation_arrows};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: SURFACE_WIDTH as i32,
        window_height: SURFACE_HEIGHT as i32,
        window_resizable: false,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("could not load '{UI_FONT_PATH}': {err}, falling back to default font");
            None
        }
    };

    let config = StationConfig::default();
    info!(
        radius = config.cylinder.radius,
        thickness = config.cylinder.thickness,
        omega = config.default_omega,
        cap = config.projectile_cap,
        "station ready"
    );

    let mut state = AppRuntime::new(config);
    let mut pointer = PointerTracker::default();
    let mut clock = FrameClock::new(TICK_RATE_HZ);
    info!(
        tick_ms = clock.period().as_secs_f64() * 1000.0,
        "frame clock started"
    );

    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!("quit requested");
            break;
        }

        clear_background(BACKGROUND_COLOR);

        for event in pointer.poll() {
            dispatch_pointer_event(&mut state, event);
        }

        step_world(&mut state);

        let cylinder = state.config.cylinder;
        draw_cylinder(&cylinder);
        draw_rotation_arrows(&cylinder);
        draw_projectiles(&state.projectiles);

        if let Some(preview) = state.drag_preview() {
            draw_drag_line(&preview);
            draw_speed_box(&preview, ui_font.as_ref());
        }

        draw_slider(&state.omega_slider, ui_font.as_ref());
        draw_help_line(&state, ui_font.as_ref());

        next_frame().await;
        clock.wait_for_next_tick();
    }
}
