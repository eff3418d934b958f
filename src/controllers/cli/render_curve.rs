use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::rasterize_curve::rasterize_curve;
use crate::core::actions::subdivide_polyline::subdivide_polyline_n;
use crate::core::data::canvas::Canvas;
use crate::core::data::polyline::Polyline;

/// Headless controller: refines a control polygon a fixed number of steps
/// and rasterizes the result for a file presenter. Useful for inspecting
/// the algorithm's output without a window.
pub struct CliCurveController<P: FilePresenterPort> {
    presenter: P,
    canvas: Option<Canvas>,
}

impl<P: FilePresenterPort> CliCurveController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            canvas: None,
        }
    }

    pub fn generate(
        &mut self,
        control_points: &Polyline,
        steps: u32,
        width: u32,
        height: u32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        println!("Subdividing {} control points...", control_points.len());
        println!("Refinement steps: {}", steps);
        println!("Image size: {}x{}", width, height);

        let start = Instant::now();
        let refined = subdivide_polyline_n(control_points, steps);
        let duration = start.elapsed();

        println!("Curve points: {}", refined.len());
        println!("Duration:   {:?}", duration);

        self.canvas = Some(rasterize_curve(control_points, &refined, width, height)?);

        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(canvas) = &self.canvas {
            self.presenter.present(canvas, filepath)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPresenter {
        presented: Mutex<Vec<(u32, u32, usize)>>,
    }

    impl FilePresenterPort for RecordingPresenter {
        fn present(&self, canvas: &Canvas, _filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.presented.lock().unwrap().push((
                canvas.width(),
                canvas.height(),
                canvas.data().len(),
            ));
            Ok(())
        }
    }

    fn sample_polygon() -> Polyline {
        Polyline::from_points(vec![
            Point { x: 50, y: 300 },
            Point { x: 250, y: 100 },
            Point { x: 450, y: 500 },
            Point { x: 650, y: 200 },
        ])
    }

    #[test]
    fn generate_then_write_hands_the_canvas_to_the_presenter() {
        let mut controller = CliCurveController::new(RecordingPresenter::default());

        controller
            .generate(&sample_polygon(), 4, 800, 600)
            .unwrap();
        controller.write("ignored.ppm").unwrap();

        let presented = controller.presenter.presented.lock().unwrap();
        assert_eq!(presented.as_slice(), &[(800, 600, 800 * 600 * 3)]);
    }

    #[test]
    fn write_without_generate_is_a_no_op() {
        let controller = CliCurveController::new(RecordingPresenter::default());

        controller.write("ignored.ppm").unwrap();

        assert!(controller.presenter.presented.lock().unwrap().is_empty());
    }

    #[test]
    fn generate_rejects_a_zero_sized_image() {
        let mut controller = CliCurveController::new(RecordingPresenter::default());

        assert!(controller.generate(&sample_polygon(), 4, 0, 600).is_err());
    }
}
