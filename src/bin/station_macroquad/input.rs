use macroquad::prelude::*;

use crate::model::PointerEvent;

const TRACKED_BUTTONS: [MouseButton; 3] =
    [MouseButton::Left, MouseButton::Right, MouseButton::Middle];

#[derive(Clone, Debug, Default)]
pub(crate) struct PointerSnapshot {
    pub(crate) position: Vec2,
    pub(crate) pressed: Vec<MouseButton>,
    pub(crate) released: Vec<MouseButton>,
}

impl PointerSnapshot {
    pub(crate) fn sample() -> Self {
        let (x, y) = mouse_position();
        Self {
            position: vec2(x, y),
            pressed: TRACKED_BUTTONS
                .into_iter()
                .filter(|button| is_mouse_button_pressed(*button))
                .collect(),
            released: TRACKED_BUTTONS
                .into_iter()
                .filter(|button| is_mouse_button_released(*button))
                .collect(),
        }
    }
}

#[derive(Default)]
pub(crate) struct PointerTracker {
    last_position: Option<Vec2>,
}

impl PointerTracker {
    pub(crate) fn poll(&mut self) -> Vec<PointerEvent> {
        self.events_from(PointerSnapshot::sample())
    }

    pub(crate) fn events_from(&mut self, snapshot: PointerSnapshot) -> Vec<PointerEvent> {
        let position = snapshot.position;
        let mut events = Vec::new();

        // Motion first so presses and releases carry the latest position.
        if self.last_position != Some(position) {
            events.push(PointerEvent::Moved { position });
            self.last_position = Some(position);
        }
        events.extend(
            snapshot
                .pressed
                .into_iter()
                .map(|button| PointerEvent::Pressed { position, button }),
        );
        events.extend(
            snapshot
                .released
                .into_iter()
                .map(|button| PointerEvent::Released { position, button }),
        );
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_reports_motion() {
        let mut tracker = PointerTracker::default();
        let events = tracker.events_from(PointerSnapshot {
            position: vec2(10.0, 20.0),
            ..Default::default()
        });
        assert_eq!(
            events,
            vec![PointerEvent::Moved {
                position: vec2(10.0, 20.0)
            }]
        );
    }

    #[test]
    fn still_pointer_reports_only_buttons() {
        let mut tracker = PointerTracker::default();
        let position = vec2(5.0, 5.0);
        tracker.events_from(PointerSnapshot {
            position,
            ..Default::default()
        });

        let events = tracker.events_from(PointerSnapshot {
            position,
            pressed: vec![MouseButton::Left],
            released: vec![MouseButton::Right],
        });
        assert_eq!(
            events,
            vec![
                PointerEvent::Pressed {
                    position,
                    button: MouseButton::Left
                },
                PointerEvent::Released {
                    position,
                    button: MouseButton::Right
                },
            ]
        );
    }

    #[test]
    fn motion_precedes_release() {
        let mut tracker = PointerTracker::default();
        tracker.events_from(PointerSnapshot::default());
        let events = tracker.events_from(PointerSnapshot {
            position: vec2(3.0, 4.0),
            released: vec![MouseButton::Left],
            ..Default::default()
        });
        assert!(matches!(events[0], PointerEvent::Moved { .. }));
        assert!(matches!(
            events[1],
            PointerEvent::Released {
                button: MouseButton::Left,
                ..
            }
        ));
    }
}
