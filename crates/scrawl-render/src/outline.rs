//! Stroke outline generation for freehand elements.

use kurbo::{Point, Vec2};

/// Default brush radius for freehand strokes, in canvas units.
pub const BRUSH_RADIUS: f64 = 5.0;

/// Turns a sampled freehand point sequence into a closed polygon that a
/// backend can fill.
pub trait StrokeOutliner {
    /// The outline polygon for `points`. The returned vertices form a
    /// closed loop (the last vertex connects back to the first).
    fn outline(&self, points: &[Point]) -> Vec<Point>;
}

/// Reference outliner: a constant-width ribbon.
///
/// Walks the stroke offsetting each sample by the segment normal, down one
/// side and back up the other. No pressure or velocity shaping.
#[derive(Debug, Clone, Copy)]
pub struct RibbonOutliner {
    pub radius: f64,
}

impl Default for RibbonOutliner {
    fn default() -> Self {
        Self {
            radius: BRUSH_RADIUS,
        }
    }
}

impl RibbonOutliner {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Unit normal of the segment from `a` to `b`, or `None` when the
    /// segment has zero length.
    fn segment_normal(a: Point, b: Point) -> Option<Vec2> {
        let d = b - a;
        let len = d.hypot();
        (len > 0.0).then(|| Vec2::new(-d.y / len, d.x / len))
    }
}

impl StrokeOutliner for RibbonOutliner {
    fn outline(&self, points: &[Point]) -> Vec<Point> {
        // A dot: emit an axis-aligned square of brush size
        if points.len() < 2 {
            let Some(p) = points.first() else {
                return Vec::new();
            };
            let r = self.radius;
            return vec![
                Point::new(p.x - r, p.y - r),
                Point::new(p.x + r, p.y - r),
                Point::new(p.x + r, p.y + r),
                Point::new(p.x - r, p.y + r),
            ];
        }

        let mut left = Vec::with_capacity(points.len());
        let mut right = Vec::with_capacity(points.len());
        let mut last_normal = Vec2::new(0.0, 0.0);
        for (i, &p) in points.iter().enumerate() {
            // Offset each sample by the normal of its leading segment,
            // reusing the previous normal across zero-length segments
            let normal = if i + 1 < points.len() {
                Self::segment_normal(p, points[i + 1]).unwrap_or(last_normal)
            } else {
                last_normal
            };
            last_normal = normal;
            left.push(p + normal * self.radius);
            right.push(p - normal * self.radius);
        }

        right.reverse();
        left.extend(right);
        left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stroke_yields_empty_polygon() {
        let outliner = RibbonOutliner::default();
        assert!(outliner.outline(&[]).is_empty());
    }

    #[test]
    fn test_single_point_yields_square() {
        let outliner = RibbonOutliner::new(5.0);
        let polygon = outliner.outline(&[Point::new(10.0, 10.0)]);
        assert_eq!(polygon.len(), 4);
        assert_eq!(polygon[0], Point::new(5.0, 5.0));
        assert_eq!(polygon[2], Point::new(15.0, 15.0));
    }

    #[test]
    fn test_horizontal_segment_ribbon() {
        let outliner = RibbonOutliner::new(5.0);
        let polygon = outliner.outline(&[Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
        assert_eq!(polygon.len(), 4);
        // One side offset down the normal, the other back up
        assert_eq!(polygon[0], Point::new(0.0, 5.0));
        assert_eq!(polygon[1], Point::new(100.0, 5.0));
        assert_eq!(polygon[2], Point::new(100.0, -5.0));
        assert_eq!(polygon[3], Point::new(0.0, -5.0));
    }

    #[test]
    fn test_duplicate_points_reuse_previous_normal() {
        let outliner = RibbonOutliner::new(5.0);
        let polygon = outliner.outline(&[
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(100.0, 0.0),
        ]);
        assert_eq!(polygon.len(), 8);
        for vertex in &polygon {
            assert!(vertex.y.abs() == 5.0, "unexpected vertex {vertex:?}");
        }
    }

    #[test]
    fn test_polygon_has_twice_the_samples() {
        let outliner = RibbonOutliner::default();
        let points: Vec<Point> = (0..10)
            .map(|i| Point::new(i as f64 * 10.0, (i % 3) as f64 * 4.0))
            .collect();
        assert_eq!(outliner.outline(&points).len(), 20);
    }
}
