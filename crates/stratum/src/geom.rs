//! Planar helpers used by edge routing.

use crate::Point;

/// Distance from `p` to the infinite line through `from` and `to`.
pub fn line_point_dist(from: Point, to: Point, p: Point) -> f64 {
    let v = to - from;
    let w = p - from;
    let t = w.dot(v) / v.dot(v);
    p.distance(from + t * v)
}

/// First intersection of the segment `from -> to` with the circle at `center` of radius `r`.
pub fn line_circle_intersection(from: Point, to: Point, center: Point, r: f64) -> Option<Point> {
    let d = to - from;
    let f = from - center;

    let a = d.dot(d);
    if a == 0.0 {
        return None;
    }
    let b = 2.0 * f.dot(d);
    let c = f.dot(f) - r * r;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let discriminant = discriminant.sqrt();
    let t1 = (-b - discriminant) / (2.0 * a);
    let t2 = (-b + discriminant) / (2.0 * a);

    if (0.0..=1.0).contains(&t1) {
        return Some(from + t1 * d);
    }
    if (0.0..=1.0).contains(&t2) {
        return Some(from + t2 * d);
    }
    None
}
