use macroquad::prelude::*;
use tracing::debug;

use coriolis_station::core::rotating_frame::{StepReport, launch_from_drag};

use crate::model::{DragGesture, PointerEvent};
use crate::state::AppRuntime;

pub(crate) fn dispatch_pointer_event(state: &mut AppRuntime, event: PointerEvent) {
    state.omega_slider.handle_event(event);
    handle_drag_event(state, event);
}

fn handle_drag_event(state: &mut AppRuntime, event: PointerEvent) {
    match event {
        PointerEvent::Pressed {
            position,
            button: MouseButton::Left,
        } => {
            state.drag = if state.config.cylinder.contains(position) {
                DragGesture::Aiming {
                    start: position,
                    current: position,
                }
            } else {
                DragGesture::Idle
            };
        }
        PointerEvent::Moved { position } => {
            if let DragGesture::Aiming { current, .. } = &mut state.drag {
                *current = position;
            }
        }
        PointerEvent::Released {
            position,
            button: MouseButton::Left,
        } => {
            if let DragGesture::Aiming { start, .. } =
                std::mem::replace(&mut state.drag, DragGesture::Idle)
            {
                launch(state, start, position);
            }
        }
        _ => {}
    }
}

fn launch(state: &mut AppRuntime, start: Vec2, end: Vec2) {
    let Some(projectile) = launch_from_drag(&state.config, start, end) else {
        return;
    };
    debug!(
        x = start.x,
        y = start.y,
        vx = projectile.velocity.x,
        vy = projectile.velocity.y,
        "projectile launched"
    );
    state.projectiles.launch(projectile);
}

pub(crate) fn step_world(state: &mut AppRuntime) -> StepReport {
    let omega = state.omega();
    let report = state.projectiles.step(omega, &state.config.cylinder);
    if report.removed > 0 {
        debug!(
            removed = report.removed,
            live = state.projectiles.len(),
            "projectiles left the station"
        );
    }
    report
}
