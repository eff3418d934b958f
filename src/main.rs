use curve_explorer::{CliCurveController, Point, Polyline, PpmFilePresenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let control_points = Polyline::from_points(vec![
        Point { x: 50, y: 300 },
        Point { x: 200, y: 80 },
        Point { x: 400, y: 520 },
        Point { x: 600, y: 120 },
        Point { x: 750, y: 350 },
    ]);

    let presenter = PpmFilePresenter::new();
    let mut controller = CliCurveController::new(presenter);

    controller.generate(&control_points, 7, 800, 600)?;

    std::fs::create_dir_all("output")?;
    controller.write("output/chaikin.ppm")?;

    Ok(())
}
