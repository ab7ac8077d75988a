use macroquad::prelude::*;

use crate::constants::{
    HELP_FONT_SIZE, HELP_TEXT_COLOR, INK_COLOR, SLIDER_HANDLE_COLOR, SLIDER_HANDLE_RADIUS,
    SLIDER_LABEL_GAP_PX, SLIDER_TRACK_THICKNESS_PX, SPEED_BOX_COLOR, SPEED_BOX_OFFSET_PX,
    SPEED_BOX_PADDING_PX, UI_FONT_SIZE,
};
use crate::model::{DragPreview, Slider, SliderMode};
use crate::state::AppRuntime;

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn speed_box_label(preview: &DragPreview) -> String {
    format!("Speed Ratio: {}", preview.ratio)
}

pub(crate) fn draw_speed_box(preview: &DragPreview, font: Option<&Font>) {
    let label = speed_box_label(preview);
    let size = measure_text(&label, font, UI_FONT_SIZE, 1.0);
    let box_x = preview.start.x + SPEED_BOX_OFFSET_PX;
    let box_y = preview.start.y - size.height - SPEED_BOX_OFFSET_PX;
    draw_rectangle(
        box_x,
        box_y,
        size.width + (SPEED_BOX_PADDING_PX * 2.0),
        size.height + (SPEED_BOX_PADDING_PX * 2.0),
        SPEED_BOX_COLOR,
    );
    draw_ui_text(
        &label,
        box_x + SPEED_BOX_PADDING_PX,
        box_y + SPEED_BOX_PADDING_PX + size.offset_y,
        UI_FONT_SIZE,
        INK_COLOR,
        font,
    );
}

pub(crate) fn draw_slider(slider: &Slider, font: Option<&Font>) {
    let origin = slider.origin;
    draw_line(
        origin.x,
        origin.y,
        origin.x + slider.track_len,
        origin.y,
        SLIDER_TRACK_THICKNESS_PX,
        INK_COLOR,
    );
    let handle = slider.handle_position();
    draw_circle(handle.x, handle.y, SLIDER_HANDLE_RADIUS, SLIDER_HANDLE_COLOR);
    if slider.mode() == SliderMode::Dragging {
        draw_circle_lines(
            handle.x,
            handle.y,
            SLIDER_HANDLE_RADIUS + 3.0,
            2.0,
            INK_COLOR,
        );
    }

    let label = format!("Omega: {:.2}", slider.value());
    let size = measure_text(&label, font, UI_FONT_SIZE, 1.0);
    draw_ui_text(
        &label,
        origin.x + slider.track_len + SLIDER_LABEL_GAP_PX,
        origin.y + (size.height * 0.35),
        UI_FONT_SIZE,
        INK_COLOR,
        font,
    );
}

pub(crate) fn draw_help_line(state: &AppRuntime, font: Option<&Font>) {
    draw_ui_text(
        &format!(
            "Drag inside the station to launch | drag the red dot to spin | Esc quits | live {}/{}",
            state.projectiles.len(),
            state.projectiles.capacity()
        ),
        16.0,
        28.0,
        HELP_FONT_SIZE,
        HELP_TEXT_COLOR,
        font,
    );
}

#[cfg(test)]
mod tests {
    use coriolis_station::core::rotating_frame::SpeedRatio;

    use super::*;

    fn preview(ratio: SpeedRatio) -> DragPreview {
        DragPreview {
            start: vec2(700.0, 400.0),
            tip: vec2(720.0, 400.0),
            ratio,
        }
    }

    #[test]
    fn label_shows_two_decimals() {
        assert_eq!(
            speed_box_label(&preview(SpeedRatio::Finite(0.2))),
            "Speed Ratio: 0.20"
        );
    }

    #[test]
    fn label_shows_infinite_sentinel() {
        assert_eq!(
            speed_box_label(&preview(SpeedRatio::Infinite)),
            "Speed Ratio: inf"
        );
    }
}
