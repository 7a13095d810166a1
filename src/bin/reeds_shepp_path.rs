//
// Reeds-Shepp path demo.
//
// Plans the shortest path for a car that can reverse, logs every feasible
// candidate and saves a plot with forward and backward runs colored apart.

use std::error::Error;

use curve_interpolation::interpolate::sample_waypoints;
use curve_interpolation::utils::Visualizer;
use curve_interpolation::{CurveConfig, CurveInterpolator, Pose2D, ReedsShepp};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Reeds Shepp path planner start!!");

    let start = Pose2D::new(-1.0, -4.0, (-20.0_f64).to_radians());
    let goal = Pose2D::new(5.0, 5.0, 25.0_f64.to_radians());
    let radius = 10.0;
    let config = match std::env::args().nth(1) {
        Some(path) => CurveConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => CurveConfig::default().with_step_size(0.05),
    };

    let planner = ReedsShepp::with_config(radius, &config)?;
    let candidates = planner.all_paths(start.position(), start.yaw, goal.position(), goal.yaw);
    let feasible = candidates.iter().flatten().count();
    log::info!("{} of {} words feasible", feasible, candidates.len());

    let Some(path) = planner.shortest_path(start.position(), start.yaw, goal.position(), goal.yaw)
    else {
        log::warn!("Failed to generate path");
        return Ok(());
    };
    log::info!("path: {}", path);
    log::info!("signed segments: {:?}", path.signed_segments());

    let waypoints = sample_waypoints(&path, start.position(), start.yaw, config.step_size)?;
    log::info!("Reeds-Shepp path generated with {} points", waypoints.len());

    std::fs::create_dir_all("img/interpolate")?;
    let output_path = "img/interpolate/reeds_shepp_path.png";
    let mut vis = Visualizer::new();
    vis.set_title("Reeds-Shepp Path Planning")
        .plot_waypoints(&waypoints)
        .plot_start(&start, 0.5)
        .plot_goal(&goal, 0.5);
    vis.save_png(output_path, 800, 600)?;
    log::info!("Plot saved to: {}", output_path);

    log::info!("Reeds Shepp path planner finish!!");
    Ok(())
}
