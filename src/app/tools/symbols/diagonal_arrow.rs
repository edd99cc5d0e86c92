//! Diagonal-Pfeil: verjüngter Körper mit abgesetzter, breiterer Spitze.

use super::straight_arrow::{assemble, path_length};
use crate::shared::vector_geometry::{midpoint, VectorPair};
use crate::shared::{angular_bisector, calculate_intersection, calculate_vector, create_bezier2};
use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

/// Pfeil aus Start- und Endpunkt: `[l, h_l, a_l, Spitze, a_r, h_r, r]`.
pub fn two_points(start: DVec2, end: DVec2, ratio: f64) -> Vec<DVec2> {
    let axis = end - start;
    let width = axis.length() / ratio;
    let base = start + axis * (ratio - 1.0) / ratio;
    let offset = calculate_vector(axis, FRAC_PI_2, width / 2.0);

    let tail_l = start + offset.left;
    let tail_r = start + offset.right;
    let neck_l = base + offset.left / ratio;
    let neck_r = base + offset.right / ratio;
    let barb_l = 2.0 * neck_l - neck_r;
    let barb_r = 2.0 * neck_r - neck_l;
    vec![tail_l, neck_l, barb_l, end, barb_r, neck_r, tail_r]
}

/// Pfeil durch drei oder mehr Punkte.
///
/// Die Flanken laufen mit dem Winkel `atan(w / 2l)` auf die Achse zu und knicken
/// an den Winkelhalbierenden der Benutzerpunkte.
pub fn more_points(points: &[DVec2], ratio: f64, segments: usize) -> Vec<DVec2> {
    let length = path_length(points);
    let width = length / ratio;
    let taper = (width / (2.0 * length)).atan();

    let tail_offset = calculate_vector(points[1] - points[0], FRAC_PI_2, width / 2.0);
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

        let l1 = left.last().copied().unwrap_or(tail.left);
        let r1 = right.last().copied().unwrap_or(tail.right);

        // Flanken neigen sich zur Achse: links nimmt die rechte Lösung und umgekehrt
        let slope = calculate_vector(v12, taper, 1.0);
        let bisector = angular_bisector(-v12, v23);
        let l2 = calculate_intersection(slope.right, bisector, l1, u2);
        let r2 = calculate_intersection(slope.left, bisector, r1, u2);

        left.extend([midpoint(l1, l2), l2]);
        right.extend([midpoint(r1, r2), r2]);
    }

    let tip = points[points.len() - 1];
    let before_tip = points[points.len() - 2];
    let head_len = before_tip.distance(tip);

    let head_base = if head_len <= width {
        before_tip
    } else {
        tip - (tip - before_tip) * width / head_len
    };
    let off_head = calculate_vector(tip - head_base, FRAC_PI_2, width / 2.0);
    let neck_l = head_base + off_head.left / ratio;
    let neck_r = head_base + off_head.right / ratio;
    let barb_l = 2.0 * neck_l - neck_r;
    let barb_r = 2.0 * neck_r - neck_l;

    let corner_l = left.last().copied().unwrap_or(tail.left);
    let corner_r = right.last().copied().unwrap_or(tail.right);
    left.push(midpoint(corner_l, neck_l));
    right.push(midpoint(corner_r, neck_r));

    assemble(
        tail,
        create_bezier2(&left, segments),
        [neck_l, barb_l, tip, barb_r, neck_r],
        create_bezier2(&right, segments),
    )
}

/// Erzeugt den Umriss für beliebig viele Punkte (ab zwei).
pub fn generate(points: &[DVec2], ratio: f64, segments: usize) -> Vec<DVec2> {
    if points.len() == 2 {
        two_points(points[0], points[1], ratio)
    } else {
        more_points(points, ratio, segments)
    }
}
