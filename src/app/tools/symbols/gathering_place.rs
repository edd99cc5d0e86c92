//! Sammelraum: geschlossene Tropfenform zwischen Ursprung und Endpunkt.

use crate::shared::vector_geometry::midpoint;
use crate::shared::{calculate_vector, create_bezier3, create_close_cardinal, CardinalParams};
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, PI};

/// Die sechs Stützpunkte des Tropfens: `[O, p1, Mitte, p3, L, p5]`.
pub fn support_points(origin: DVec2, last: DVec2) -> [DVec2; 6] {
    let axis = last - origin;
    let dist = axis.length();
    let short = 3f64.sqrt() / 12.0 * dist;

    let p1 = origin + calculate_vector(axis, PI / 3.0, short).left;
    let p2 = midpoint(origin, last);
    let p3 = last + calculate_vector(axis, 2.0 * PI / 3.0, short).left;
    let p5 = p2 + calculate_vector(axis, FRAC_PI_2, dist / 2.0).right;
    [origin, p1, p2, p3, last, p5]
}

/// Erzeugt den Umriss aus erstem und letztem Kontrollpunkt.
pub fn generate(
    origin: DVec2,
    last: DVec2,
    cardinal: CardinalParams,
    segments: usize,
) -> Vec<DVec2> {
    let ring = create_close_cardinal(&support_points(origin, last), cardinal);
    create_bezier3(&ring, segments)
}
