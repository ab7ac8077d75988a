use macroquad::math::Vec2;

use crate::core::station::Cylinder;

const EXTENT_PADDING_RATIO: f32 = 0.08;
const CIRCLE_SEGMENTS: usize = 240;

/// Half-width of a square chart window centered on the rotation axis, large
/// enough for the outer wall and every point of `path`.
pub fn square_half_extent(cylinder: &Cylinder, path: &[Vec2]) -> f32 {
    let raw_extent = path.iter().fold(cylinder.outer_wall(), |acc, point| {
        acc.max(cylinder.relative(*point).abs().max_element())
    });
    let padded = raw_extent + (raw_extent * EXTENT_PADDING_RATIO);
    padded.max(1.0)
}

/// Screen point to chart coordinates: origin on the axis, y pointing up.
pub fn to_chart(cylinder: &Cylinder, point: Vec2) -> (f32, f32) {
    let relative = cylinder.relative(point);
    (relative.x, -relative.y)
}

/// Closed polyline around the axis in chart coordinates.
pub fn circle_outline(radius: f32) -> Vec<(f32, f32)> {
    (0..=CIRCLE_SEGMENTS)
        .map(|i| {
            let angle = (i as f32 / CIRCLE_SEGMENTS as f32) * std::f32::consts::TAU;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use macroquad::math::vec2;

    use super::*;
    use crate::core::station::StationConfig;

    #[test]
    fn empty_path_frames_the_outer_wall() {
        let cylinder = StationConfig::default().cylinder;
        let half = square_half_extent(&cylinder, &[]);
        assert!((half - 310.0 * 1.08).abs() < 1e-3);
    }

    #[test]
    fn escaping_point_widens_the_window() {
        let cylinder = StationConfig::default().cylinder;
        let half = square_half_extent(&cylinder, &[vec2(600.0, 400.0), vec2(600.0, 0.0)]);
        assert!((half - 400.0 * 1.08).abs() < 1e-3);
    }

    #[test]
    fn chart_coordinates_flip_y() {
        let cylinder = StationConfig::default().cylinder;
        assert_eq!(to_chart(&cylinder, vec2(650.0, 380.0)), (50.0, 20.0));
    }

    #[test]
    fn outline_is_closed() {
        let outline = circle_outline(10.0);
        assert_eq!(outline.len(), CIRCLE_SEGMENTS + 1);
        let (first, last) = (outline[0], outline[CIRCLE_SEGMENTS]);
        assert!((first.0 - last.0).abs() < 1e-3 && (first.1 - last.1).abs() < 1e-3);
    }
}
