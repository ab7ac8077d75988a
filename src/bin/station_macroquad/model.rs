use macroquad::prelude::*;

use coriolis_station::core::rotating_frame::{SpeedRatio, calculate_velocity, speed_ratio};
use coriolis_station::core::station::StationConfig;

use crate::constants::SLIDER_HIT_TOLERANCE_PX;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PointerEvent {
    Pressed { position: Vec2, button: MouseButton },
    Released { position: Vec2, button: MouseButton },
    Moved { position: Vec2 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SliderMode {
    Idle,
    Dragging,
}

pub(crate) struct Slider {
    pub(crate) origin: Vec2,
    pub(crate) track_len: f32,
    pub(crate) min: f32,
    pub(crate) max: f32,
    value: f32,
    mode: SliderMode,
}

impl Slider {
    pub(crate) fn new(origin: Vec2, track_len: f32, min: f32, max: f32, start: f32) -> Self {
        Self {
            origin,
            track_len,
            min,
            max,
            value: start.clamp(min, max),
            mode: SliderMode::Idle,
        }
    }

    pub(crate) fn value(&self) -> f32 {
        self.value
    }

    pub(crate) fn mode(&self) -> SliderMode {
        self.mode
    }

    pub(crate) fn handle_x(&self) -> f32 {
        self.origin.x + ((self.value - self.min) / (self.max - self.min)) * self.track_len
    }

    pub(crate) fn handle_position(&self) -> Vec2 {
        vec2(self.handle_x(), self.origin.y)
    }

    pub(crate) fn is_over_handle(&self, point: Vec2) -> bool {
        let offset = (point - self.handle_position()).abs();
        offset.x <= SLIDER_HIT_TOLERANCE_PX && offset.y <= SLIDER_HIT_TOLERANCE_PX
    }

    pub(crate) fn set_from_pointer_x(&mut self, pointer_x: f32) {
        let handle_x = pointer_x.clamp(self.origin.x, self.origin.x + self.track_len);
        let t = (handle_x - self.origin.x) / self.track_len;
        self.value = self.min + t * (self.max - self.min);
    }

    pub(crate) fn handle_event(&mut self, event: PointerEvent) -> bool {
        match (self.mode, event) {
            (
                SliderMode::Idle,
                PointerEvent::Pressed {
                    position,
                    button: MouseButton::Left,
                },
            ) if self.is_over_handle(position) => {
                self.mode = SliderMode::Dragging;
                true
            }
            (SliderMode::Dragging, PointerEvent::Released { .. }) => {
                self.mode = SliderMode::Idle;
                true
            }
            (SliderMode::Dragging, PointerEvent::Moved { position }) => {
                self.set_from_pointer_x(position.x);
                true
            }
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DragGesture {
    Idle,
    Aiming { start: Vec2, current: Vec2 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct DragPreview {
    pub(crate) start: Vec2,
    pub(crate) tip: Vec2,
    pub(crate) ratio: SpeedRatio,
}

impl DragGesture {
    pub(crate) fn preview(&self, config: &StationConfig, omega: f32) -> Option<DragPreview> {
        let DragGesture::Aiming { start, current } = *self else {
            return None;
        };
        let velocity = calculate_velocity(start, current, config.launch);
        Some(DragPreview {
            start,
            tip: start - (velocity * config.launch.velocity_scale),
            ratio: speed_ratio(start, velocity, omega, &config.cylinder),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn omega_slider() -> Slider {
        Slider::new(vec2(50.0, 750.0), 300.0, 0.01, 2.0, 0.1)
    }

    fn press(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Pressed {
            position: vec2(x, y),
            button: MouseButton::Left,
        }
    }

    fn release(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Released {
            position: vec2(x, y),
            button: MouseButton::Left,
        }
    }

    fn moved(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Moved {
            position: vec2(x, y),
        }
    }

    #[test]
    fn handle_sits_at_affine_position() {
        let slider = omega_slider();
        let expected = 50.0 + (0.09 / 1.99) * 300.0;
        assert!((slider.handle_x() - expected).abs() < 1e-3);
    }

    #[test]
    fn start_value_is_clamped() {
        let slider = Slider::new(vec2(0.0, 0.0), 100.0, 0.01, 2.0, 9.0);
        assert_eq!(slider.value(), 2.0);
    }

    #[test]
    fn press_off_handle_does_not_start_drag() {
        let mut slider = omega_slider();
        assert!(!slider.handle_event(press(300.0, 750.0)));
        assert_eq!(slider.mode(), SliderMode::Idle);
    }

    #[test]
    fn press_move_release_cycle() {
        let mut slider = omega_slider();
        let handle = slider.handle_position();

        assert!(slider.handle_event(press(handle.x + 8.0, handle.y - 8.0)));
        assert_eq!(slider.mode(), SliderMode::Dragging);

        assert!(slider.handle_event(moved(200.0, 700.0)));
        let expected = 0.01 + (150.0 / 300.0) * 1.99;
        assert!((slider.value() - expected).abs() < 1e-5);

        assert!(slider.handle_event(release(200.0, 700.0)));
        assert_eq!(slider.mode(), SliderMode::Idle);

        // Motion after release leaves the value alone.
        assert!(!slider.handle_event(moved(60.0, 750.0)));
        assert!((slider.value() - expected).abs() < 1e-5);
    }

    #[test]
    fn dragging_past_the_ends_clamps() {
        let mut slider = omega_slider();
        let handle = slider.handle_position();
        slider.handle_event(press(handle.x, handle.y));

        slider.handle_event(moved(-500.0, 750.0));
        assert_eq!(slider.value(), 0.01);
        assert_eq!(slider.handle_x(), 50.0);

        slider.handle_event(moved(5000.0, 750.0));
        assert!((slider.value() - 2.0).abs() < 1e-6);
        assert!((slider.handle_x() - 350.0).abs() < 1e-3);
    }

    #[test]
    fn idle_gesture_has_no_preview() {
        let config = StationConfig::default();
        assert_eq!(DragGesture::Idle.preview(&config, 0.1), None);
    }

    #[test]
    fn preview_tip_follows_clamped_drag() {
        let config = StationConfig::default();
        let gesture = DragGesture::Aiming {
            start: vec2(600.0, 400.0),
            current: vec2(600.0, 700.0),
        };
        let preview = gesture.preview(&config, 0.1).expect("aiming has a preview");
        // 300 px drag clamped to 150 px.
        assert!((preview.tip.x - 600.0).abs() < 1e-3);
        assert!((preview.tip.y - 550.0).abs() < 1e-3);
        // Launched from the axis, so there is no rim speed to compare against.
        assert_eq!(preview.ratio, SpeedRatio::Infinite);
    }
}
