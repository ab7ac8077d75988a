use std::collections::VecDeque;
use std::fmt;

use macroquad::math::{Vec2, vec2};
use tracing::debug;

use crate::core::station::{Cylinder, LaunchTuning, Region, StationConfig};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Frozen,
    Removed,
}

/// Slingshot semantics: the shot flies opposite to the drag. Drags longer
/// than the tuning limit are shortened along their own direction.
pub fn calculate_velocity(start: Vec2, end: Vec2, tuning: LaunchTuning) -> Vec2 {
    let mut drag = start - end;
    let drag_distance = drag.length();
    if drag_distance > tuning.max_drag_distance {
        drag *= tuning.max_drag_distance / drag_distance;
    }
    drag / tuning.velocity_scale
}

/// Builds a projectile from a finished drag, or `None` when the drag began
/// outside the station.
pub fn launch_from_drag(config: &StationConfig, start: Vec2, end: Vec2) -> Option<Projectile> {
    if !config.cylinder.contains(start) {
        return None;
    }
    Some(Projectile {
        position: start,
        velocity: calculate_velocity(start, end, config.launch),
    })
}

/// Coriolis plus centrifugal velocity change for one tick at unit mass.
pub fn pseudo_force(position: Vec2, velocity: Vec2, omega: f32, center: Vec2) -> Vec2 {
    let coriolis = vec2(2.0 * omega * velocity.y, -2.0 * omega * velocity.x);
    let centrifugal = (position - center) * (omega * omega);
    coriolis + centrifugal
}

pub fn apply_pseudo_forces(projectile: &mut Projectile, omega: f32, cylinder: &Cylinder) {
    projectile.velocity += pseudo_force(
        projectile.position,
        projectile.velocity,
        omega,
        cylinder.center,
    );
}

/// One semi-implicit Euler tick: velocity first, then position with the new
/// velocity.
pub fn step_projectile(
    projectile: &mut Projectile,
    omega: f32,
    cylinder: &Cylinder,
) -> StepOutcome {
    match cylinder.classify(projectile.position) {
        Region::Boundary => {
            projectile.velocity = Vec2::ZERO;
            StepOutcome::Frozen
        }
        Region::Interior => {
            apply_pseudo_forces(projectile, omega, cylinder);
            projectile.position += projectile.velocity;
            match cylinder.classify(projectile.position) {
                Region::Exterior => StepOutcome::Removed,
                Region::Interior | Region::Boundary => StepOutcome::Moved,
            }
        }
        Region::Exterior => StepOutcome::Removed,
    }
}

/// Launch speed over the station's local rim speed at the launch point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpeedRatio {
    Finite(f32),
    Infinite,
}

impl fmt::Display for SpeedRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(ratio) => write!(f, "{ratio:.2}"),
            Self::Infinite => write!(f, "inf"),
        }
    }
}

pub fn speed_ratio(
    start: Vec2,
    launch_velocity: Vec2,
    omega: f32,
    cylinder: &Cylinder,
) -> SpeedRatio {
    let rotating_speed = omega * cylinder.distance_from_center(start);
    if rotating_speed == 0.0 {
        return SpeedRatio::Infinite;
    }
    let ratio = launch_velocity.length() / rotating_speed;
    if ratio.is_finite() {
        SpeedRatio::Finite(ratio)
    } else {
        SpeedRatio::Infinite
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub moved: usize,
    pub frozen: usize,
    pub removed: usize,
}

/// Live projectiles in launch order. Holding more than `capacity` evicts the
/// oldest, whatever state it is in.
#[derive(Clone, Debug)]
pub struct ProjectileSet {
    projectiles: VecDeque<Projectile>,
    capacity: usize,
}

impl ProjectileSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            projectiles: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn launch(&mut self, projectile: Projectile) -> Option<Projectile> {
        self.projectiles.push_back(projectile);
        if self.projectiles.len() > self.capacity {
            let evicted = self.projectiles.pop_front();
            if let Some(evicted) = evicted {
                debug!(
                    x = evicted.position.x,
                    y = evicted.position.y,
                    "evicted oldest projectile"
                );
            }
            return evicted;
        }
        None
    }

    pub fn step(&mut self, omega: f32, cylinder: &Cylinder) -> StepReport {
        let mut report = StepReport::default();
        self.projectiles
            .retain_mut(|projectile| match step_projectile(projectile, omega, cylinder) {
                StepOutcome::Moved => {
                    report.moved += 1;
                    true
                }
                StepOutcome::Frozen => {
                    report.frozen += 1;
                    true
                }
                StepOutcome::Removed => {
                    report.removed += 1;
                    false
                }
            });
        report
    }

    pub fn len(&self) -> usize {
        self.projectiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.iter()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceOutcome {
    Frozen,
    Removed,
    TimedOut,
}

/// Path of a single projectile stepped on its own.
#[derive(Clone, Debug)]
pub struct LaunchTrace {
    pub launch: Projectile,
    pub path: Vec<Vec2>,
    pub ticks: usize,
    pub outcome: TraceOutcome,
}

pub fn simulate_trajectory(
    launch: Projectile,
    omega: f32,
    cylinder: &Cylinder,
    max_ticks: usize,
) -> LaunchTrace {
    let mut projectile = launch;
    let mut path = vec![projectile.position];

    for tick in 1..=max_ticks {
        let outcome = match step_projectile(&mut projectile, omega, cylinder) {
            StepOutcome::Moved => {
                path.push(projectile.position);
                continue;
            }
            StepOutcome::Frozen => TraceOutcome::Frozen,
            StepOutcome::Removed => {
                path.push(projectile.position);
                TraceOutcome::Removed
            }
        };
        return LaunchTrace {
            launch,
            path,
            ticks: tick,
            outcome,
        };
    }

    LaunchTrace {
        launch,
        path,
        ticks: max_ticks,
        outcome: TraceOutcome::TimedOut,
    }
}
