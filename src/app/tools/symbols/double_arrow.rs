//! Doppelpfeil aus vier Ankerpunkten.
//!
//! `U1`/`U2` bilden die gemeinsame Basis, `U4` ist die linke, `U3` die rechte Spitze.

use crate::shared::vector_geometry::intersection_from_two_corners;
use crate::shared::{create_bezier2, create_bezier3};
use glam::DVec2;
use std::f64::consts::PI;

/// Form-Parameter des Doppelpfeils.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleArrowParams {
    /// Einzug der Spitzen relativ zur kürzeren Schenkellänge
    pub head_ratio: f64,
    /// Tangenten-Skalierung an der Taille
    pub center_tension: f64,
    /// Segmente pro Bézier-Abschnitt
    pub segments: usize,
}

/// Spitze an `tip`: eingezogene Schenkelpunkte und die beiden Widerhaken.
struct Head {
    outer: DVec2,
    inner: DVec2,
    barb_outer: DVec2,
    barb_inner: DVec2,
}

fn head(tip: DVec2, outer_ctrl: DVec2, inner_ctrl: DVec2, ratio: f64) -> Head {
    let to_outer = outer_ctrl - tip;
    let to_inner = inner_ctrl - tip;
    let inset = to_outer.length().min(to_inner.length()) * ratio;
    let outer = tip + to_outer.normalize() * inset;
    let inner = tip + to_inner.normalize() * inset;
    Head {
        outer,
        inner,
        barb_outer: 1.5 * outer - 0.5 * inner,
        barb_inner: 1.5 * inner - 0.5 * outer,
    }
}

/// Kontrollpunkte der Flanken (`outer_*`) und der Taille (`inner_*`).
struct Controls {
    center: DVec2,
    outer_l: DVec2,
    outer_r: DVec2,
    inner_l: DVec2,
    inner_r: DVec2,
}

fn controls(points: &[DVec2; 4]) -> Controls {
    let [u1, u2, u3, u4] = *points;
    let center = ((u1 + u2) * 5.0 + (u3 + u4)) / 12.0;
    Controls {
        center,
        outer_l: intersection_from_two_corners(u1, u4, PI / 8.0, PI / 6.0).left,
        outer_r: intersection_from_two_corners(u2, u3, PI / 8.0, PI / 6.0).right,
        inner_l: intersection_from_two_corners(center, u4, PI / 8.0, PI / 16.0).left,
        inner_r: intersection_from_two_corners(center, u3, PI / 8.0, PI / 16.0).right,
    }
}

/// Erzeugt den geschlossenen Umriss aus genau vier Punkten.
pub fn generate(points: &[DVec2; 4], params: DoubleArrowParams) -> Vec<DVec2> {
    let [u1, u2, u3, u4] = *points;
    let Controls {
        center,
        outer_l,
        outer_r,
        inner_l,
        inner_r,
    } = controls(points);

    let head_l = head(u4, outer_l, inner_l, params.head_ratio);
    let head_r = head(u3, outer_r, inner_r, params.head_ratio);

    // Taille: Tangente entlang U4→U3, anteilig nach Abstand der Spitzen zur Mitte
    let waist = (u3 - u4) * params.center_tension;
    let d4 = center.distance(u4);
    let d3 = center.distance(u3);
    let waist_l = center - waist * d4 / (d4 + d3);
    let waist_r = center + waist * d3 / (d4 + d3);

    let flank_l = create_bezier2(&[u1, outer_l, head_l.outer], params.segments);
    let middle = create_bezier3(
        &[
            head_l.inner,
            inner_l,
            waist_l,
            center,
            waist_r,
            inner_r,
            head_r.inner,
        ],
        params.segments,
    );
    let flank_r = create_bezier2(&[head_r.outer, outer_r, u2], params.segments);

    let mut result = Vec::with_capacity(flank_l.len() + middle.len() + flank_r.len() + 6);
    result.extend(flank_l);
    result.extend([head_l.barb_outer, u4, head_l.barb_inner]);
    result.extend(middle);
    result.extend([head_r.barb_inner, u3, head_r.barb_outer]);
    result.extend(flank_r);
    result
}
