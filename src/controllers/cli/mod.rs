pub mod render_curve;

pub use render_curve::CliCurveController;
