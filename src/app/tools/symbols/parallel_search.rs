//! Parallel-Suchmuster: Mäander entlang der Achse der ersten beiden Punkte.

use crate::shared::vector_geometry::perpendicular;
use crate::shared::{arrow_lines, calculate_intersection};
use glam::DVec2;

/// Erzeugt Pfad und Pfeil-Linien als Teile eines MultiLineStrings.
///
/// Der erste Teil ist der Pfad; jede Kante `i` liegt abwechselnd parallel
/// (ungerade `i`) bzw. senkrecht (gerade `i`) zur Basis `P0 - P1` und wird
/// durch die Projektion des Kontrollpunkts festgelegt. Danach folgen je
/// Kante zwei Pfeil-Linien am Kantenende.
///
/// Vorbedingung: `points.len() >= 3` und `P0 != P1`.
pub fn generate(points: &[DVec2], arrow_ratio: f64, arrow_angle: f64) -> Vec<Vec<DVec2>> {
    let base = points[0] - points[1];
    let normal = perpendicular(base).left;

    let mut path = Vec::with_capacity(points.len());
    path.push(points[0]);
    let mut arrows = Vec::with_capacity(2 * points.len());

    for (i, &control) in points.iter().enumerate().skip(1) {
        let previous = path[i - 1];
        let turn = if i % 2 != 0 {
            calculate_intersection(normal, base, control, previous)
        } else {
            calculate_intersection(base, normal, control, previous)
        };
        path.push(turn);
        arrows.extend(arrow_lines(previous, turn, arrow_ratio, arrow_angle));
    }

    let mut parts = Vec::with_capacity(arrows.len() + 1);
    parts.push(path);
    parts.extend(arrows);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_6;

    #[test]
    fn path_alternates_parallel_and_perpendicular() {
        let pts = [
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(12.0, 5.0),
            DVec2::new(1.0, 7.0),
        ];
        let parts = generate(&pts, 15.0, FRAC_PI_6);
        let path = &parts[0];
        assert_eq!(path.len(), 4);
        assert_eq!(path[0], pts[0]);
        // Kante 1 parallel zur Basis, Kante 2 senkrecht, Kante 3 wieder parallel
        assert_relative_eq!(path[1].y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(path[1].x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(path[2].x, 10.0, epsilon = 1e-9);
        assert_relative_eq!(path[2].y, 5.0, epsilon = 1e-9);
        assert_relative_eq!(path[3].y, 5.0, epsilon = 1e-9);
        assert_relative_eq!(path[3].x, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn two_arrow_lines_per_edge() {
        let pts = [
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(12.0, 5.0),
        ];
        let parts = generate(&pts, 15.0, FRAC_PI_6);
        assert_eq!(parts.len(), 1 + 2 * 2);
        for arrow in &parts[1..] {
            assert_eq!(arrow.len(), 2);
        }
        assert_eq!(parts[1][0], parts[0][1]);
    }
}
