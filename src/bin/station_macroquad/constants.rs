use macroquad::prelude::Color;

pub const WINDOW_TITLE: &str = "Projectile Launcher in Rotating Cylinder";
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";
pub const TICK_RATE_HZ: f64 = 60.0;

pub const BACKGROUND_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const INK_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const PROJECTILE_COLOR: Color = Color::new(0.0, 0.0, 1.0, 1.0);
pub const PREVIEW_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const SPEED_BOX_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);
pub const SLIDER_HANDLE_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const HELP_TEXT_COLOR: Color = Color::new(0.35, 0.38, 0.42, 1.0);

pub const UI_FONT_SIZE: u16 = 24;
pub const HELP_FONT_SIZE: u16 = 20;

pub const CROSSHAIR_HALF_PX: f32 = 10.0;
pub const PROJECTILE_RADIUS_PX: f32 = 5.0;
pub const LINE_THICKNESS_PX: f32 = 2.0;

pub const ARROW_COUNT: usize = 8;
pub const ARROW_SHAFT_PX: f32 = 30.0;
pub const ARROW_WING_DEG: f32 = 20.0;
pub const ARROW_WALL_GAP_PX: f32 = 10.0;

pub const SLIDER_X: f32 = 50.0;
pub const SLIDER_Y: f32 = 750.0;
pub const SLIDER_TRACK_PX: f32 = 300.0;
pub const SLIDER_TRACK_THICKNESS_PX: f32 = 5.0;
pub const SLIDER_HANDLE_RADIUS: f32 = 10.0;
pub const SLIDER_HIT_TOLERANCE_PX: f32 = 10.0;
pub const SLIDER_LABEL_GAP_PX: f32 = 20.0;

pub const SPEED_BOX_OFFSET_PX: f32 = 10.0;
pub const SPEED_BOX_PADDING_PX: f32 = 5.0;
