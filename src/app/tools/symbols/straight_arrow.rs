//! Gerader Pfeil: zwei Punkte ergeben ein 7-Eck, weitere Punkte einen
//! geglätteten Knick-Pfeil mit dreieckiger Spitze.

use crate::shared::vector_geometry::{calculate_intersection, midpoint, VectorPair};
use crate::shared::{calculate_vector, create_bezier2};
use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

/// Gesamtlänge eines Linienzugs.
pub(super) fn path_length(points: &[DVec2]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Pfeil aus Start- und Endpunkt: `[l1, l2, l3, Spitze, r3, r2, r1]`.
///
/// Breite = Länge / `ratio`; die Spitze beginnt bei `(ratio - 1) / ratio` der Länge.
pub fn two_points(start: DVec2, end: DVec2, ratio: f64) -> Vec<DVec2> {
    let axis = end - start;
    let width = axis.length() / ratio;
    let base = start + axis * (ratio - 1.0) / ratio;
    let offset = calculate_vector(axis, FRAC_PI_2, width / 2.0);

    let p1 = start + offset.left;
    let p2 = base + offset.left;
    let p3 = 2.0 * p2 - base;
    let p7 = start + offset.right;
    let p6 = base + offset.right;
    let p5 = 2.0 * p6 - base;
    vec![p1, p2, p3, end, p5, p6, p7]
}

/// Pfeil durch drei oder mehr Punkte.
///
/// Jede Kante wird um die halbe Breite parallel versetzt, die Versatzlinien
/// schneiden sich in den Knick-Kontrollpunkten, die quadratisch gerundet werden.
pub fn more_points(points: &[DVec2], ratio: f64, segments: usize) -> Vec<DVec2> {
    let width = path_length(points) / ratio;
    let half = width / 2.0;

    let tail_offset = calculate_vector(points[1] - points[0], FRAC_PI_2, half);
    let tail = VectorPair {
        left: points[0] + tail_offset.left,
        right: points[0] + tail_offset.right,
    };
    let mut left = Vec::with_capacity(2 * points.len());
    let mut right = Vec::with_capacity(2 * points.len());

    for w in points.windows(3) {
        let (u1, u2, u3) = (w[0], w[1], w[2]);
        let v12 = u2 - u1;
        let v23 = u3 - u2;
        let off12 = calculate_vector(v12, FRAC_PI_2, half);
        let off23 = calculate_vector(v23, FRAC_PI_2, half);

        let corner_l = calculate_intersection(v12, v23, u1 + off12.left, u2 + off23.left);
        let corner_r = calculate_intersection(v12, v23, u1 + off12.right, u2 + off23.right);

        let prev_l = left.last().copied().unwrap_or(tail.left);
        let prev_r = right.last().copied().unwrap_or(tail.right);
        left.extend([midpoint(prev_l, corner_l), corner_l]);
        right.extend([midpoint(prev_r, corner_r), corner_r]);
    }

    let tip = points[points.len() - 1];
    let before_tip = points[points.len() - 2];
    let head_axis = tip - before_tip;
    let head_len = head_axis.length();
    let off_head = calculate_vector(head_axis, FRAC_PI_2, half);

    // Kurzes Endstück: Spitze sitzt direkt am vorletzten Punkt
    let head_base = if head_len <= width {
        before_tip
    } else {
        tip - head_axis * width / head_len
    };
    let head_l = head_base + off_head.left;
    let head_r = head_base + off_head.right;
    let triangle_l = 2.0 * head_l - head_base;
    let triangle_r = 2.0 * head_r - head_base;

    let corner_l = left.last().copied().unwrap_or(tail.left);
    let corner_r = right.last().copied().unwrap_or(tail.right);
    left.push(midpoint(corner_l, head_l));
    right.push(midpoint(corner_r, head_r));

    assemble(
        tail,
        create_bezier2(&left, segments),
        [head_l, triangle_l, tip, triangle_r, head_r],
        create_bezier2(&right, segments),
    )
}

/// Setzt linke Flanke, Spitze und umgekehrte rechte Flanke zu einem Ring zusammen.
pub(super) fn assemble(
    tail: VectorPair,
    left: Vec<DVec2>,
    head: [DVec2; 5],
    right: Vec<DVec2>,
) -> Vec<DVec2> {
    let mut result = Vec::with_capacity(left.len() + right.len() + 7);
    result.push(tail.left);
    result.extend(left);
    result.extend(head);
    result.extend(right.into_iter().rev());
    result.push(tail.right);
    result
}

/// Erzeugt den Umriss für beliebig viele Punkte (ab zwei).
pub fn generate(points: &[DVec2], ratio: f64, segments: usize) -> Vec<DVec2> {
    if points.len() == 2 {
        two_points(points[0], points[1], ratio)
    } else {
        more_points(points, ratio, segments)
    }
}
