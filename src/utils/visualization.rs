//! Visualization utilities for curve_interpolation
//!
//! Collects curves and poses as layers and renders them into a single gnuplot
//! axes on `show` / `save_png`.

use gnuplot::{AutoOption, AxesCommon, Caption, Color, Figure, LineWidth, PointSize, PointSymbol};

use crate::common::{CurveError, CurveResult, Path2D, Point2D, Pose2D};
use crate::interpolate::{Direction, Waypoint};

/// Color palette for consistent styling
pub mod colors {
    pub const BLACK: &str = "#000000";
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const BLUE: &str = "#0000FF";
    pub const ORANGE: &str = "#FFA500";
    pub const GRAY: &str = "#808080";

    pub const START: &str = GREEN;
    pub const GOAL: &str = BLUE;
    pub const PATH: &str = RED;
    pub const FORWARD: &str = RED;
    pub const BACKWARD: &str = ORANGE;
}

/// Style for curve rendering
#[derive(Debug, Clone)]
pub struct PathStyle {
    pub color: String,
    pub line_width: f64,
    pub caption: String,
}

impl PathStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            line_width: 2.0,
            caption: caption.to_string(),
        }
    }

    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::new(colors::PATH, "Path")
    }
}

/// Style for pose markers
#[derive(Debug, Clone)]
pub struct PointStyle {
    pub color: String,
    pub size: f64,
    pub symbol: char,
    pub caption: String,
}

impl PointStyle {
    pub fn new(color: &str, caption: &str) -> Self {
        Self {
            color: color.to_string(),
            size: 1.5,
            symbol: 'O',
            caption: caption.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
enum Layer {
    Line {
        x: Vec<f64>,
        y: Vec<f64>,
        style: PathStyle,
    },
    Points {
        x: Vec<f64>,
        y: Vec<f64>,
        style: PointStyle,
    },
}

/// Main visualizer struct
#[derive(Debug, Clone)]
pub struct Visualizer {
    layers: Vec<Layer>,
    title: String,
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            title: String::new(),
        }
    }

    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = title.to_string();
        self
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Plot a sampled curve
    pub fn plot_curve(&mut self, curve: &Path2D, style: &PathStyle) -> &mut Self {
        self.layers.push(Layer::Line {
            x: curve.x_coords(),
            y: curve.y_coords(),
            style: style.clone(),
        });
        self
    }

    /// Plot waypoints with forward and backward runs in separate colors.
    ///
    /// The pose where the direction changes is shared by both runs so the
    /// drawn curve has no gaps.
    pub fn plot_waypoints(&mut self, waypoints: &[Waypoint]) -> &mut Self {
        let mut run: Vec<Point2D> = Vec::new();
        let mut run_direction = match waypoints.first() {
            Some(w) => w.direction,
            None => return self,
        };
        for waypoint in waypoints {
            if waypoint.direction != run_direction {
                if let Some(&junction) = run.last() {
                    self.push_run(&run, run_direction);
                    run = vec![junction];
                }
                run_direction = waypoint.direction;
            }
            run.push(waypoint.pose.position());
        }
        self.push_run(&run, run_direction);
        self
    }

    fn push_run(&mut self, run: &[Point2D], direction: Direction) {
        let style = match direction {
            Direction::Forward => PathStyle::new(colors::FORWARD, "Forward"),
            Direction::Backward => PathStyle::new(colors::BACKWARD, "Backward"),
        };
        self.plot_curve(&Path2D::from_points(run.to_vec()), &style);
    }

    /// Plot a pose as a marker plus a heading line of length `arrow_length`
    pub fn plot_pose(&mut self, pose: &Pose2D, arrow_length: f64, style: &PointStyle) -> &mut Self {
        let tip = pose.position().offset(pose.yaw, arrow_length);
        self.layers.push(Layer::Points {
            x: vec![pose.x],
            y: vec![pose.y],
            style: style.clone(),
        });
        self.layers.push(Layer::Line {
            x: vec![pose.x, tip.x],
            y: vec![pose.y, tip.y],
            style: PathStyle::new(&style.color, ""),
        });
        self
    }

    pub fn plot_start(&mut self, pose: &Pose2D, arrow_length: f64) -> &mut Self {
        self.plot_pose(pose, arrow_length, &PointStyle::new(colors::START, "Start"))
    }

    pub fn plot_goal(&mut self, pose: &Pose2D, arrow_length: f64) -> &mut Self {
        self.plot_pose(pose, arrow_length, &PointStyle::new(colors::GOAL, "Goal"))
    }

    /// Finalize and show the plot
    pub fn show(&self) -> CurveResult<()> {
        let mut figure = self.render();
        figure
            .show()
            .map(|_| ())
            .map_err(|e| CurveError::Plot(e.to_string()))
    }

    /// Save plot to PNG file
    pub fn save_png(&self, path: &str, width: u32, height: u32) -> CurveResult<()> {
        let mut figure = self.render();
        figure
            .save_to_png(path, width, height)
            .map_err(|e| CurveError::Plot(e.to_string()))
    }

    fn render(&self) -> Figure {
        let mut figure = Figure::new();
        let axes = figure.axes2d();
        for layer in &self.layers {
            match layer {
                Layer::Line { x, y, style } if style.caption.is_empty() => {
                    axes.lines(x, y, &[Color(&style.color), LineWidth(style.line_width)]);
                }
                Layer::Line { x, y, style } => {
                    axes.lines(
                        x,
                        y,
                        &[
                            Caption(&style.caption),
                            Color(&style.color),
                            LineWidth(style.line_width),
                        ],
                    );
                }
                Layer::Points { x, y, style } => {
                    axes.points(
                        x,
                        y,
                        &[
                            Caption(&style.caption),
                            Color(&style.color),
                            PointSymbol(style.symbol),
                            PointSize(style.size),
                        ],
                    );
                }
            }
        }

        if !self.title.is_empty() {
            axes.set_title(&self.title, &[]);
        }
        axes.set_x_label("X [m]", &[]);
        axes.set_y_label("Y [m]", &[]);
        // equal axis scales so arcs render as circles
        axes.set_aspect_ratio(AutoOption::Fix(1.0));
        figure
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(x: f64, direction: Direction) -> Waypoint {
        Waypoint {
            pose: Pose2D::new(x, 0.0, 0.0),
            direction,
        }
    }

    #[test]
    fn test_path_style() {
        let style = PathStyle::new(colors::RED, "Test Path").with_line_width(3.0);
        assert_eq!(style.line_width, 3.0);
        assert_eq!(style.color, colors::RED);
    }

    #[test]
    fn test_pose_adds_marker_and_heading() {
        let mut vis = Visualizer::new();
        vis.plot_start(&Pose2D::origin(), 1.0);
        assert_eq!(vis.num_layers(), 2);
        match &vis.layers[1] {
            Layer::Line { x, y, .. } => {
                assert!((x[1] - 1.0).abs() < 1e-12);
                assert!(y[1].abs() < 1e-12);
            }
            Layer::Points { .. } => panic!("expected heading line"),
        }
    }

    #[test]
    fn test_waypoints_split_by_direction() {
        let waypoints = vec![
            waypoint(0.0, Direction::Forward),
            waypoint(1.0, Direction::Forward),
            waypoint(0.5, Direction::Backward),
            waypoint(0.0, Direction::Backward),
        ];
        let mut vis = Visualizer::new();
        vis.plot_waypoints(&waypoints);
        assert_eq!(vis.num_layers(), 2);
        match &vis.layers[1] {
            Layer::Line { x, style, .. } => {
                // the backward run starts where the forward run ended
                assert_eq!(x, &vec![1.0, 0.5, 0.0]);
                assert_eq!(style.color, colors::BACKWARD);
            }
            Layer::Points { .. } => panic!("expected line"),
        }
    }

    #[test]
    fn test_empty_waypoints() {
        let mut vis = Visualizer::new();
        vis.plot_waypoints(&[]);
        assert_eq!(vis.num_layers(), 0);
    }
}
