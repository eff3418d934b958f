use crate::core::data::canvas::{Canvas, CanvasError};
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::polyline::Polyline;

/// Radius of a control-point disc, in pixels.
pub const CONTROL_POINT_RADIUS: i32 = 5;
/// Radius of a vertex marker on the current curve.
pub const VERTEX_MARKER_RADIUS: i32 = 2;

pub const BACKGROUND_COLOUR: Colour = Colour::WHITE;
pub const CONTROL_POINT_COLOUR: Colour = Colour::BLUE;
pub const SEGMENT_COLOUR: Colour = Colour::RED;
pub const VERTEX_MARKER_COLOUR: Colour = Colour::GREEN;

/// Rasterizes a curve snapshot into a fresh RGB canvas: filled discs for
/// the control points, then the current curve as connected line segments
/// with a small marker on every vertex. Geometry outside the canvas clips.
pub fn rasterize_curve(
    control_points: &Polyline,
    current_points: &Polyline,
    width: u32,
    height: u32,
) -> Result<Canvas, CanvasError> {
    let mut canvas = Canvas::filled(width, height, BACKGROUND_COLOUR)?;

    for &point in control_points.points() {
        fill_disc(&mut canvas, point, CONTROL_POINT_RADIUS, CONTROL_POINT_COLOUR);
    }

    for pair in current_points.points().windows(2) {
        draw_segment(&mut canvas, pair[0], pair[1], SEGMENT_COLOUR);
    }

    for &point in current_points.points() {
        fill_disc(&mut canvas, point, VERTEX_MARKER_RADIUS, VERTEX_MARKER_COLOUR);
    }

    Ok(canvas)
}

fn fill_disc(canvas: &mut Canvas, centre: Point, radius: i32, colour: Colour) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                canvas.paint(
                    Point {
                        x: centre.x + dx,
                        y: centre.y + dy,
                    },
                    colour,
                );
            }
        }
    }
}

/// Bresenham line between two pixels, endpoints included.
fn draw_segment(canvas: &mut Canvas, from: Point, to: Point, colour: Colour) {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };

    let mut error = dx + dy;
    let mut cursor = from;

    loop {
        canvas.paint(cursor, colour);

        if cursor == to {
            break;
        }

        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            cursor.x += step_x;
        }
        if doubled <= dx {
            error += dx;
            cursor.y += step_y;
        }
    }
}
