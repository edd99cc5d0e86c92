//! Sektor-Suchmuster: drei Blätter um das Zentrum, je 120° versetzt.

use crate::shared::vector_geometry::mirror;
use crate::shared::{arrow_lines, calculate_vector};
use glam::DVec2;
use std::f64::consts::PI;

/// Pfad `[C, FB, FC, SB, SC, TB, TC, C]` aus Zentrum `C` und Radiuspunkt `FB`.
pub fn sector_path(center: DVec2, first: DVec2) -> [DVec2; 8] {
    let radius = center.distance(first);
    let pair = calculate_vector(center - first, 4.0 * PI / 3.0, radius);

    let first_corner = center + pair.left;
    let second_base = mirror(first_corner, center);
    let second_corner = center + pair.right;
    let third_base = mirror(second_corner, center);
    let third_corner = mirror(first, center);
    [
        center,
        first,
        first_corner,
        second_base,
        second_corner,
        third_base,
        third_corner,
        center,
    ]
}

/// Erzeugt Pfad und Pfeil-Linien (zwei je Kante) als MultiLineString-Teile.
pub fn generate(
    center: DVec2,
    first: DVec2,
    arrow_ratio: f64,
    arrow_angle: f64,
) -> Vec<Vec<DVec2>> {
    let path = sector_path(center, first);
    let mut parts = Vec::with_capacity(1 + 2 * (path.len() - 1));
    parts.push(path.to_vec());
    for edge in path.windows(2) {
        parts.extend(arrow_lines(edge[0], edge[1], arrow_ratio, arrow_angle));
    }
    parts
}
