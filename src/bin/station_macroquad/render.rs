use std::f32::consts::{FRAC_PI_2, TAU};

use macroquad::prelude::*;

use coriolis_station::core::rotating_frame::ProjectileSet;
use coriolis_station::core::station::{Cylinder, unit_at};

use crate::constants::{
    ARROW_COUNT, ARROW_SHAFT_PX, ARROW_WALL_GAP_PX, ARROW_WING_DEG, CROSSHAIR_HALF_PX, INK_COLOR,
    LINE_THICKNESS_PX, PREVIEW_COLOR, PROJECTILE_COLOR, PROJECTILE_RADIUS_PX,
};
use crate::model::DragPreview;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Arrow {
    pub(crate) tail: Vec2,
    pub(crate) head: Vec2,
    pub(crate) wings: [Vec2; 2],
}

pub(crate) fn rotation_arrows(cylinder: &Cylinder) -> [Arrow; ARROW_COUNT] {
    let ring_radius = cylinder.outer_wall() + ARROW_WALL_GAP_PX;
    let wing_angle = ARROW_WING_DEG.to_radians();
    let wing_len = ARROW_SHAFT_PX * 0.5;

    std::array::from_fn(|i| {
        let angle = (TAU / ARROW_COUNT as f32) * i as f32;
        let heading = angle + FRAC_PI_2;
        let tail = cylinder.point_at(ring_radius, angle);
        let head = tail + (unit_at(heading) * ARROW_SHAFT_PX);
        Arrow {
            tail,
            head,
            wings: [
                head - (unit_at(heading - wing_angle) * wing_len),
                head - (unit_at(heading + wing_angle) * wing_len),
            ],
        }
    })
}

fn draw_segment(a: Vec2, b: Vec2, color: Color) {
    draw_line(a.x, a.y, b.x, b.y, LINE_THICKNESS_PX, color);
}

pub(crate) fn draw_cylinder(cylinder: &Cylinder) {
    let c = cylinder.center;
    draw_circle_lines(c.x, c.y, cylinder.radius, cylinder.thickness, INK_COLOR);
    draw_segment(
        vec2(c.x - CROSSHAIR_HALF_PX, c.y),
        vec2(c.x + CROSSHAIR_HALF_PX, c.y),
        INK_COLOR,
    );
    draw_segment(
        vec2(c.x, c.y - CROSSHAIR_HALF_PX),
        vec2(c.x, c.y + CROSSHAIR_HALF_PX),
        INK_COLOR,
    );
}

pub(crate) fn draw_rotation_arrows(cylinder: &Cylinder) {
    for arrow in rotation_arrows(cylinder) {
        draw_segment(arrow.tail, arrow.head, INK_COLOR);
        for wing in arrow.wings {
            draw_segment(arrow.head, wing, INK_COLOR);
        }
    }
}

pub(crate) fn draw_projectiles(projectiles: &ProjectileSet) {
    for projectile in projectiles.iter() {
        let p = projectile.position;
        draw_circle(p.x, p.y, PROJECTILE_RADIUS_PX, PROJECTILE_COLOR);
    }
}

pub(crate) fn draw_drag_line(preview: &DragPreview) {
    draw_segment(preview.start, preview.tip, PREVIEW_COLOR);
}

#[cfg(test)]
mod tests {
    use coriolis_station::core::station::StationConfig;

    use super::*;

    fn assert_near(a: Vec2, b: Vec2) {
        assert!(a.distance(b) < 1e-3, "{a:?} vs {b:?}");
    }

    #[test]
    fn arrows_ring_the_outer_wall() {
        let cylinder = StationConfig::default().cylinder;
        let arrows = rotation_arrows(&cylinder);
        assert_eq!(arrows.len(), 8);
        for arrow in &arrows {
            let distance = cylinder.distance_from_center(arrow.tail);
            assert!((distance - 320.0).abs() < 1e-3);
            assert!((arrow.tail.distance(arrow.head) - 30.0).abs() < 1e-3);
        }
    }

    #[test]
    fn first_arrow_points_down_the_screen() {
        let cylinder = StationConfig::default().cylinder;
        let arrow = rotation_arrows(&cylinder)[0];
        assert_near(arrow.tail, vec2(920.0, 400.0));
        assert_near(arrow.head, vec2(920.0, 430.0));
    }

    #[test]
    fn arrows_are_tangent_to_the_wall() {
        let cylinder = StationConfig::default().cylinder;
        for arrow in rotation_arrows(&cylinder) {
            let radial = cylinder.relative(arrow.tail).normalize();
            let shaft = (arrow.head - arrow.tail).normalize();
            assert!(radial.dot(shaft).abs() < 1e-4);
        }
    }

    #[test]
    fn wings_sweep_back_symmetrically() {
        let cylinder = StationConfig::default().cylinder;
        let arrow = rotation_arrows(&cylinder)[0];
        let [left, right] = arrow.wings;
        assert!((arrow.head.distance(left) - 15.0).abs() < 1e-3);
        assert!((arrow.head.distance(right) - 15.0).abs() < 1e-3);
        // Both wings sit behind the head along the shaft.
        assert!(left.y < arrow.head.y && right.y < arrow.head.y);
        assert!((left.x - 920.0 + (right.x - 920.0)).abs() < 1e-3);
    }
}
