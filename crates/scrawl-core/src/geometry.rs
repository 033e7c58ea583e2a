//! Pure geometry helpers used by element hit-testing.

use kurbo::Point;

/// Square tolerance around corner and endpoint handles.
pub const HANDLE_TOLERANCE: f64 = 10.0;
/// Slack tolerance for the body of a line.
pub const LINE_TOLERANCE: f64 = 5.0;
/// Slack tolerance for freehand path segments.
pub const PATH_TOLERANCE: f64 = 1.0;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Check whether (x, y) falls within the handle tolerance of (px, py).
/// The tolerance region is a square, not a disc.
pub fn near_point(x: f64, y: f64, px: f64, py: f64) -> bool {
    (x - px).abs() < HANDLE_TOLERANCE && (y - py).abs() < HANDLE_TOLERANCE
}

/// Approximate point-on-segment test via triangle-inequality slack.
///
/// For a point c exactly on the segment a-b, dist(a,c) + dist(c,b) equals
/// dist(a,b); the further c strays from the segment, the more the sum
/// exceeds the segment length. The slack degrades for points far beyond
/// the segment span but near its infinite extension, which is acceptable
/// for short, hand-drawn strokes.
pub fn on_segment(x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64, tolerance: f64) -> bool {
    let a = Point::new(x1, y1);
    let b = Point::new(x2, y2);
    let c = Point::new(x, y);
    let slack = distance(a, b) - (distance(a, c) + distance(c, b));
    slack.abs() < tolerance
}
