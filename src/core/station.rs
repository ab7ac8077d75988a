use macroquad::math::{Vec2, vec2};

pub const SURFACE_WIDTH: f32 = 1200.0;
pub const SURFACE_HEIGHT: f32 = 800.0;

pub const CYLINDER_CENTER: Vec2 = Vec2::new(SURFACE_WIDTH * 0.5, SURFACE_HEIGHT * 0.5);
pub const CYLINDER_RADIUS: f32 = 300.0;
pub const CYLINDER_THICKNESS: f32 = 20.0;

pub const DEFAULT_OMEGA: f32 = 0.1;
pub const OMEGA_MIN: f32 = 0.01;
pub const OMEGA_MAX: f32 = 2.0;

pub const MAX_DRAG_DISTANCE: f32 = 150.0;
pub const VELOCITY_SCALE: f32 = 10.0; // drag pixels per unit of launch velocity
pub const PROJECTILE_CAP: usize = 5;

/// Where a point sits relative to the station wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Interior,
    Boundary,
    Exterior,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cylinder {
    pub center: Vec2,
    pub radius: f32,
    pub thickness: f32,
}

impl Cylinder {
    pub fn inner_wall(&self) -> f32 {
        self.radius - (self.thickness * 0.5)
    }

    pub fn outer_wall(&self) -> f32 {
        self.radius + (self.thickness * 0.5)
    }

    pub fn relative(&self, point: Vec2) -> Vec2 {
        point - self.center
    }

    pub fn distance_from_center(&self, point: Vec2) -> f32 {
        self.center.distance(point)
    }

    /// True while `point` has not crossed the wall's mid radius.
    pub fn contains(&self, point: Vec2) -> bool {
        self.distance_from_center(point) <= self.radius
    }

    /// The wall band wins over the radius test, so points between the radius
    /// and the outer wall are `Boundary`, not `Exterior`.
    pub fn classify(&self, point: Vec2) -> Region {
        let distance = self.distance_from_center(point);
        if (self.inner_wall()..=self.outer_wall()).contains(&distance) {
            Region::Boundary
        } else if distance <= self.radius {
            Region::Interior
        } else {
            Region::Exterior
        }
    }

    pub fn point_at(&self, distance: f32, angle_rad: f32) -> Vec2 {
        self.center + (unit_at(angle_rad) * distance)
    }
}

pub fn unit_at(angle_rad: f32) -> Vec2 {
    vec2(angle_rad.cos(), angle_rad.sin())
}

/// Turns a slingshot drag into a launch velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchTuning {
    pub max_drag_distance: f32,
    pub velocity_scale: f32,
}

/// Everything the simulation and the UI read about the station. Built once
/// and handed around by reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StationConfig {
    pub cylinder: Cylinder,
    pub launch: LaunchTuning,
    pub default_omega: f32,
    pub omega_min: f32,
    pub omega_max: f32,
    pub projectile_cap: usize,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            cylinder: Cylinder {
                center: CYLINDER_CENTER,
                radius: CYLINDER_RADIUS,
                thickness: CYLINDER_THICKNESS,
            },
            launch: LaunchTuning {
                max_drag_distance: MAX_DRAG_DISTANCE,
                velocity_scale: VELOCITY_SCALE,
            },
            default_omega: DEFAULT_OMEGA,
            omega_min: OMEGA_MIN,
            omega_max: OMEGA_MAX,
            projectile_cap: PROJECTILE_CAP,
        }
    }
}

impl StationConfig {
    pub fn omega_in_range(&self, omega: f32) -> bool {
        (self.omega_min..=self.omega_max).contains(&omega)
    }
}
