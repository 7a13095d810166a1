//
// Dubins path demo.
//
// Plans the shortest forward-only path between two poses and saves a plot.
// Pass `random` to draw the goal pose at random.

use std::error::Error;
use std::f64::consts::PI;

use rand::Rng;

use curve_interpolation::utils::{PathStyle, Visualizer};
use curve_interpolation::{CurveConfig, CurveInterpolator, Dubins, Pose2D};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Dubins path planner start!!");

    let start = Pose2D::new(1.0, 1.0, 45.0_f64.to_radians());
    let goal = if std::env::args().any(|arg| arg == "random") {
        let mut rng = rand::thread_rng();
        Pose2D::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-PI..PI),
        )
    } else {
        Pose2D::new(-3.0, -3.0, (-45.0_f64).to_radians())
    };
    let radius = 1.0;
    let config = CurveConfig::default().with_step_size(0.05);

    let dubins = Dubins::with_config(radius, &config)?;
    let Some((path, curve)) = dubins.curve(
        start.position(),
        start.yaw,
        goal.position(),
        goal.yaw,
        config.step_size,
    )?
    else {
        log::warn!("No Dubins path found");
        return Ok(());
    };

    log::info!("path: {}", path);
    log::info!("segment lengths: {:?}", path.scaled_segments());
    log::info!("{} points, polyline length {:.3}", curve.len(), curve.total_length());
    if let Some(last) = curve.last() {
        log::info!("end point error: {:.2e}", last.distance(&goal.position()));
    }

    std::fs::create_dir_all("img/interpolate")?;
    let output_path = "img/interpolate/dubins_path.png";
    let mut vis = Visualizer::new();
    vis.set_title(&format!("Dubins Path ({})", path.word()))
        .plot_curve(&curve, &PathStyle::new("blue", "Dubins Path"))
        .plot_start(&start, 1.0)
        .plot_goal(&goal, 1.0);
    vis.save_png(output_path, 800, 600)?;
    log::info!("Plot saved to: {}", output_path);

    log::info!("Dubins path planner finish!!");
    Ok(())
}
