//! Read-only scene model handed to the rendering collaborator.
//!
//! Nothing here mutates solver state; building a scene twice from the same
//! inputs gives the same scene.
//!
//! - `triangle_from_angles`: lay out a triangle with the given angles, fitted
//!   into a `width × height` viewport.
//! - `placeholder_triangle`: fixed dashed outline shown when nothing is known.
//! - `angle_labels`: vertex labels pushed outward from the centroid.

use serde::Serialize;

use crate::text::format_value;
use crate::types::{Angles, Point, Vertex};

/// Viewport margin around a preview triangle.
pub const PREVIEW_MARGIN: f64 = 20.0;
/// Distance from a vertex to its label, away from the centroid.
pub const LABEL_OFFSET: f64 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub dashed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Label {
    pub at: Point,
    pub text: String,
}

/// Everything one canvas shows.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Scene {
    pub segments: Vec<Segment>,
    /// Clicked points, drawn as dots.
    pub markers: Vec<Point>,
    pub labels: Vec<Label>,
}

impl Scene {
    fn push_triangle(&mut self, pts: &[Point; 3], dashed: bool) {
        for i in 0..3 {
            self.segments.push(Segment {
                from: pts[i],
                to: pts[(i + 1) % 3],
                dashed,
            });
        }
    }

    pub fn placeholder(width: f64, height: f64) -> Self {
        let mut s = Scene::default();
        s.push_triangle(&placeholder_triangle(width, height), true);
        s
    }

    /// Preview triangle for `angles`, or the placeholder without angles.
    pub fn from_angles(angles: Option<&Angles>, width: f64, height: f64, labels: bool) -> Self {
        let Some(angles) = angles else {
            return Scene::placeholder(width, height);
        };
        let pts = triangle_from_angles(angles, width, height, PREVIEW_MARGIN);
        let mut s = Scene::default();
        s.push_triangle(&pts, false);
        if labels {
            s.labels = angle_labels(&pts, angles);
        }
        s
    }

    /// Drawing-mode scene: placed points, their edges, dashed guides to the
    /// hover point, and labels once a full triangle has been solved.
    pub fn drawing(points: &[Point], hover: Option<Point>, angles: Option<&Angles>) -> Self {
        let solid = |from: Point, to: Point| Segment {
            from,
            to,
            dashed: false,
        };
        let dashed = |from: Point, to: Point| Segment {
            from,
            to,
            dashed: true,
        };
        let mut s = Scene {
            markers: points.to_vec(),
            ..Scene::default()
        };
        match (points, hover) {
            ([p], Some(h)) => s.segments.push(dashed(*p, h)),
            ([p, q], Some(h)) => {
                s.segments.push(solid(*p, *q));
                s.segments.extend([dashed(*p, *q), dashed(*q, h), dashed(h, *p)]);
            }
            ([p, q], None) => s.segments.push(solid(*p, *q)),
            ([p, q, r, ..], _) => {
                s.segments.extend([solid(*p, *q), solid(*q, *r), solid(*r, *p)]);
                if let Some(a) = angles {
                    s.labels = angle_labels(&[*p, *q, *r], a);
                }
            }
            _ => {}
        }
        s
    }
}

/// Triangle with interior angles `angles` at vertices `[A, B, C]`, scaled to
/// fit the viewport with `margin` on each side.
///
/// Layout: `c = |AB| = 1` on the x axis, `a, b` by the law of sines, `C` by
/// the cosine rule; then the bounding box is fitted.
pub fn triangle_from_angles(angles: &Angles, width: f64, height: f64, margin: f64) -> [Point; 3] {
    let [ra, rb, rc] = angles.radians();
    let c = 1.0;
    let a = ra.sin() * c / rc.sin();
    let b = rb.sin() * c / rc.sin();
    let x = (b * b + c * c - a * a) / (2.0 * c);
    let y = (b * b - x * x).max(0.0).sqrt();
    let pts = [Point::new(0.0, 0.0), Point::new(c, 0.0), Point::new(x, y)];

    let min_x = pts.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = pts.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = pts.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = pts.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
    let extent = |d: f64| if d == 0.0 || !d.is_finite() { 1.0 } else { d };
    let w = extent(max_x - min_x);
    let h = extent(max_y - min_y);
    let scale = ((width - margin * 2.0) / w).min((height - margin * 2.0) / h);

    pts.map(|p| Point::new((p.x - min_x) * scale + margin, (p.y - min_y) * scale + margin))
}

pub fn placeholder_triangle(width: f64, height: f64) -> [Point; 3] {
    [
        Point::new(width * 0.2, height * 0.75),
        Point::new(width * 0.8, height * 0.75),
        Point::new(width * 0.5, height * 0.25),
    ]
}

/// Labels like `"A 60 deg"`, offset `LABEL_OFFSET` away from the centroid.
pub fn angle_labels(points: &[Point; 3], angles: &Angles) -> Vec<Label> {
    let centroid = (points[0] + points[1] + points[2]) / 3.0;
    Vertex::ALL
        .iter()
        .map(|&v| {
            let p = points[v.index()];
            let dir = p - centroid;
            let len = match dir.norm() {
                n if n > 0.0 => n,
                _ => 1.0,
            };
            Label {
                at: p + dir / len * LABEL_OFFSET,
                text: format!("{} {} deg", v, format_value(angles.get(v))),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::angle_at;
    use nalgebra::vector;

    #[test]
    fn layout_preserves_angles_and_fits_viewport() {
        let angles = Angles([30.0, 70.0, 80.0]);
        let (w, h) = (400.0, 300.0);
        let pts = triangle_from_angles(&angles, w, h, PREVIEW_MARGIN);
        assert!((angle_at(pts[0], pts[1], pts[2]).unwrap() - 30.0).abs() < 1e-9);
        assert!((angle_at(pts[1], pts[0], pts[2]).unwrap() - 70.0).abs() < 1e-9);
        for p in &pts {
            assert!(p.x >= PREVIEW_MARGIN - 1e-9 && p.x <= w - PREVIEW_MARGIN + 1e-9);
            assert!(p.y >= PREVIEW_MARGIN - 1e-9 && p.y <= h - PREVIEW_MARGIN + 1e-9);
        }
    }

    #[test]
    fn labels_point_away_from_centroid() {
        let pts = [vector![0.0, 0.0], vector![30.0, 0.0], vector![0.0, 30.0]];
        let labels = angle_labels(&pts, &Angles([90.0, 45.0, 45.0]));
        assert_eq!(labels[0].text, "A 90 deg");
        assert_eq!(labels[1].text, "B 45 deg");
        let centroid = vector![10.0, 10.0];
        for (l, p) in labels.iter().zip(&pts) {
            assert!(((l.at - p).norm() - LABEL_OFFSET).abs() < 1e-9);
            assert!((l.at - centroid).norm() > (p - centroid).norm());
        }
    }

    #[test]
    fn drawing_scene_guides_follow_hover() {
        let p = vector![0.0, 0.0];
        let q = vector![10.0, 0.0];
        let h = vector![5.0, 5.0];

        let one = Scene::drawing(&[p], Some(h), None);
        assert_eq!(one.segments.len(), 1);
        assert!(one.segments[0].dashed);

        let two = Scene::drawing(&[p, q], Some(h), None);
        assert_eq!(two.segments.iter().filter(|s| s.dashed).count(), 3);
        assert_eq!(two.segments.iter().filter(|s| !s.dashed).count(), 1);

        let three = Scene::drawing(&[p, q, h], Some(h), Some(&Angles([45.0, 45.0, 90.0])));
        assert_eq!(three.segments.len(), 3);
        assert!(three.segments.iter().all(|s| !s.dashed));
        assert_eq!(three.labels.len(), 3);
        assert_eq!(three.markers.len(), 3);

        assert_eq!(Scene::drawing(&[], Some(h), None), Scene::default());
    }

    #[test]
    fn missing_angles_fall_back_to_placeholder() {
        let s = Scene::from_angles(None, 100.0, 100.0, true);
        assert_eq!(s, Scene::placeholder(100.0, 100.0));
        assert!(s.segments.iter().all(|seg| seg.dashed));
        assert!(s.labels.is_empty());
    }
}
