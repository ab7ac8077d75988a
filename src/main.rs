use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use coriolis_station::core::rotating_frame::{
    LaunchTrace, launch_from_drag, simulate_trajectory, speed_ratio,
};
use coriolis_station::core::station::StationConfig;
use coriolis_station::core::window::{circle_outline, square_half_extent, to_chart};
use coriolis_station::error::{StationError, StationResult};
use coriolis_station::telemetry::init_tracing;
use macroquad::math::{Vec2, vec2};
use plotters::prelude::*;
use tracing::{debug, info};

const MAX_TICKS: usize = 3_600; // one minute at the interactive tick rate
const PLOT_DIR: &str = "plots";
const PLOT_SIZE_PX: (u32, u32) = (900, 900);

#[derive(Clone, Copy, Debug)]
struct Inputs {
    start: Vec2,
    end: Vec2,
    omega: f32,
}

fn parse_f32(value: &str, label: &'static str) -> StationResult<f32> {
    value
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| StationError::InvalidNumber {
            label,
            value: value.to_string(),
        })
}

fn get_inputs_from_args(args: &[String], config: &StationConfig) -> StationResult<Inputs> {
    let values = args.get(1..).unwrap_or(&[]);
    if !(4..=5).contains(&values.len()) {
        return Err(StationError::ArgumentCount(values.len()));
    }

    let start = vec2(
        parse_f32(&values[0], "start x")?,
        parse_f32(&values[1], "start y")?,
    );
    let end = vec2(
        parse_f32(&values[2], "end x")?,
        parse_f32(&values[3], "end y")?,
    );
    let omega = match values.get(4) {
        Some(raw) => parse_f32(raw, "omega")?,
        None => config.default_omega,
    };

    if !config.omega_in_range(omega) {
        return Err(StationError::OmegaOutOfRange {
            omega,
            min: config.omega_min,
            max: config.omega_max,
        });
    }

    Ok(Inputs { start, end, omega })
}

fn chart_error<E: std::fmt::Display>(err: E) -> StationError {
    StationError::Chart(err.to_string())
}

fn write_chart(
    path: &Path,
    config: &StationConfig,
    trace: &LaunchTrace,
    omega: f32,
) -> StationResult<()> {
    let cylinder = &config.cylinder;
    let half = square_half_extent(cylinder, &trace.path);

    let root = BitMapBackend::new(path, PLOT_SIZE_PX).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Launch inside rotating station (omega = {omega:.2})"),
            ("sans-serif", 26),
        )
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-half..half, -half..half)
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .x_desc("x from axis (px)")
        .y_desc("y from axis (px)")
        .draw()
        .map_err(chart_error)?;

    for radius in [cylinder.inner_wall(), cylinder.outer_wall()] {
        chart
            .draw_series(LineSeries::new(circle_outline(radius), &BLACK))
            .map_err(chart_error)?;
    }
    chart
        .draw_series(LineSeries::new(
            circle_outline(cylinder.radius),
            BLACK.mix(0.3).stroke_width(1),
        ))
        .map_err(chart_error)?;

    chart
        .draw_series(LineSeries::new(
            trace.path.iter().map(|point| to_chart(cylinder, *point)),
            BLUE.stroke_width(2),
        ))
        .map_err(chart_error)?
        .label("path")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(std::iter::once(Circle::new(
            to_chart(cylinder, trace.launch.position),
            5,
            RED.filled(),
        )))
        .map_err(chart_error)?
        .label("launch point")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, RED.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    Ok(())
}

fn chart_path() -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    Path::new(PLOT_DIR).join(format!("trajectory_{stamp}.png"))
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program} <start_x> <start_y> <end_x> <end_y> [omega]");
    println!();
    println!("Coordinates are pixels on the 1200x800 station surface (center 600,400).");
    println!("The shot flies opposite to the drag from start to end.");
    println!();
    println!("Examples:");
    println!("  {program} 800 400 800 400 0.05");
    println!("  {program} 600 600 600 700");
}

fn run() -> StationResult<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(args.first().map_or("coriolis_station", String::as_str));
        return Ok(());
    }

    let config = StationConfig::default();
    let inputs = get_inputs_from_args(&args, &config)?;
    let projectile = launch_from_drag(&config, inputs.start, inputs.end).ok_or(
        StationError::StartOutsideStation {
            x: inputs.start.x,
            y: inputs.start.y,
        },
    )?;

    let trace = simulate_trajectory(projectile, inputs.omega, &config.cylinder, MAX_TICKS);
    debug!(points = trace.path.len(), "trajectory simulated");
    let ratio = speed_ratio(
        inputs.start,
        projectile.velocity,
        inputs.omega,
        &config.cylinder,
    );

    println!(
        "\nLaunch velocity: ({:.3}, {:.3}) px/tick",
        projectile.velocity.x, projectile.velocity.y
    );
    println!("Speed ratio: {ratio}");
    println!("Outcome: {:?} after {} tick(s)", trace.outcome, trace.ticks);

    fs::create_dir_all(PLOT_DIR)?;
    let path = chart_path();
    write_chart(&path, &config, &trace, inputs.omega)?;
    info!(path = %path.display(), "chart written");
    println!("Chart: {}", path.display());

    Ok(())
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --bin coriolis_station --");
        std::process::exit(1);
    }
}
