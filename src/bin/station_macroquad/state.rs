use macroquad::prelude::vec2;

use coriolis_station::core::rotating_frame::ProjectileSet;
use coriolis_station::core::station::StationConfig;

use crate::constants::{SLIDER_TRACK_PX, SLIDER_X, SLIDER_Y};
use crate::model::{DragGesture, DragPreview, Slider};

pub(crate) struct AppRuntime {
    pub(crate) config: StationConfig,
    pub(crate) projectiles: ProjectileSet,
    pub(crate) omega_slider: Slider,
    pub(crate) drag: DragGesture,
}

impl AppRuntime {
    pub(crate) fn new(config: StationConfig) -> Self {
        Self {
            config,
            projectiles: ProjectileSet::with_capacity(config.projectile_cap),
            omega_slider: Slider::new(
                vec2(SLIDER_X, SLIDER_Y),
                SLIDER_TRACK_PX,
                config.omega_min,
                config.omega_max,
                config.default_omega,
            ),
            drag: DragGesture::Idle,
        }
    }

    pub(crate) fn omega(&self) -> f32 {
        self.omega_slider.value()
    }

    pub(crate) fn drag_preview(&self) -> Option<DragPreview> {
        self.drag.preview(&self.config, self.omega())
    }
}
