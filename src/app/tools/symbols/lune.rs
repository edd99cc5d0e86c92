//! Mondsichel: Halbkreis aus zwei Punkten, Kreisbogen durch drei Punkte.

use crate::shared::arc_geometry::{arc_step, point_on_circle, wrap_angle};
use crate::shared::vector_geometry::{midpoint, perpendicular};
use crate::shared::{calculate_angle, calculate_arc, calculate_intersection, ArcDirection};
use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// Halbkreis über der Strecke `a → b`, im Uhrzeigersinn ab `a`.
pub fn semicircle(a: DVec2, b: DVec2, sides: f64) -> Vec<DVec2> {
    let center = midpoint(a, b);
    let radius = a.distance(b) / 2.0;
    let start = calculate_angle(a, center);
    calculate_arc(center, radius, start, start + PI, ArcDirection::Clockwise, sides)
}

/// Kreisbogen mit den Endpunkten `a`, `b`, der durch `c` läuft.
///
/// Kollineare Punkte (`|AB × BC| < collinear_epsilon`) ergeben `[a, c, b]`.
pub fn three_point_arc(
    a: DVec2,
    b: DVec2,
    c: DVec2,
    sides: f64,
    collinear_epsilon: f64,
) -> Vec<DVec2> {
    let ab = b - a;
    let bc = c - b;
    if ab.perp_dot(bc).abs() < collinear_epsilon {
        return vec![a, c, b];
    }

    // Umkreismittelpunkt: Schnitt der Mittelsenkrechten
    let center = calculate_intersection(
        perpendicular(ab).right,
        perpendicular(bc).right,
        midpoint(a, b),
        midpoint(b, c),
    );
    let radius = center.distance(a);
    let angle_a = calculate_angle(a, center);
    let angle_b = calculate_angle(b, center);
    let angle_c = calculate_angle(c, center);

    let (start_angle, end_angle, start, end) = if angle_a > angle_b {
        (angle_b, angle_a, b, a)
    } else {
        (angle_a, angle_b, a, b)
    };

    // Liegt C außerhalb [start, end], läuft der Bogen rückwärts über 0
    let c_outside = (angle_c < angle_a && angle_c < angle_b)
        || (angle_c > angle_a && angle_c > angle_b);
    let (direction, length) = if c_outside {
        (ArcDirection::Clockwise, start_angle + (TAU - end_angle))
    } else {
        (ArcDirection::CounterClockwise, end_angle - start_angle)
    };

    let step = arc_step(sides);
    let interior = ((length - step) / step).ceil().max(0.0) as usize;
    let mut points = Vec::with_capacity(interior + 2);
    points.push(start);
    let mut radians = start_angle;
    for _ in 0..interior {
        radians = wrap_angle(radians + step * direction.sign());
        points.push(point_on_circle(center, radius, radians));
    }
    points.push(end);
    points
}

/// Erzeugt den Umriss: zwei Punkte → Halbkreis, ab drei → Bogen durch die ersten drei.
pub fn generate(points: &[DVec2], sides: f64, collinear_epsilon: f64) -> Vec<DVec2> {
    match points {
        [a, b] => semicircle(*a, *b, sides),
        [a, b, c, ..] => three_point_arc(*a, *b, *c, sides, collinear_epsilon),
        _ => Vec::new(),
    }
}
