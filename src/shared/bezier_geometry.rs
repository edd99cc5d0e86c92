//! Bézier-Abflachung (Grad 2 und 3) mit fester und adaptiver Abtastung.
//!
//! Die Funktionen erwarten die Kontrollpunkte als flache Kette:
//! Grad 2 → `[P0, C, P1, C, P2, …]`, Grad 3 → `[P0, C1, C2, P1, C1, C2, P2, …]`.
//! Der letzte Eingabepunkt wird immer exakt ans Ergebnis angehängt.

use crate::core::GeometryError;
use glam::DVec2;

/// Standard-Anzahl Segmente pro Bézier-Abschnitt.
pub const DEFAULT_BEZIER_SEGMENTS: usize = 20;

/// Abtast-Strategie für [`create_bezier`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BezierSampling {
    /// Feste Anzahl Segmente pro kubischem Abschnitt
    Fixed(usize),
    /// Rekursive Zerlegung, bis die Kontrollpunkt-Lücke ≤ `precision` ist
    Adaptive {
        /// Maximal erlaubte Koordinaten-Differenz innerhalb eines Abschnitts
        precision: f64,
    },
}

/// Quadratischer Bézier-Punkt bei `t ∈ [0, 1]`.
pub fn quadratic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * t * inv * p1 + t * t * p2
}

/// Kubischer Bézier-Punkt bei `t ∈ [0, 1]`.
pub fn cubic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    inv * inv * inv * p0 + 3.0 * t * inv * inv * p1 + 3.0 * t * t * inv * p2 + t * t * t * p3
}

fn effective_segments(segments: usize) -> usize {
    if segments == 0 {
        DEFAULT_BEZIER_SEGMENTS
    } else {
        segments
    }
}

fn push_exact_end(result: &mut Vec<DVec2>, points: &[DVec2]) {
    if let Some(&end) = points.last() {
        if result.last() != Some(&end) {
            result.push(end);
        }
    }
}

/// Flacht eine Kette quadratischer Bézier-Abschnitte ab (Schrittweite 2).
///
/// Genau zwei Punkte ergeben nur den Endpunkt (gerades Stück), weniger
/// als zwei werden unverändert zurückgegeben.
pub fn create_bezier2(points: &[DVec2], segments: usize) -> Vec<DVec2> {
    match points.len() {
        0 | 1 => return points.to_vec(),
        2 => return vec![points[1]],
        _ => {}
    }

    let segments = effective_segments(segments);
    let mut result = Vec::with_capacity(points.len() / 2 * segments + 1);
    let mut i = 0;
    while i + 2 < points.len() {
        let (p0, c, p1) = (points[i], points[i + 1], points[i + 2]);
        for k in 0..segments {
            let t = k as f64 / segments as f64;
            result.push(quadratic_bezier(p0, c, p1, t));
        }
        i += 2;
    }
    push_exact_end(&mut result, points);
    result
}

/// Flacht eine Kette kubischer Bézier-Abschnitte ab (Schrittweite 3).
///
/// Weniger als vier Punkte werden unverändert zurückgegeben.
pub fn create_bezier3(points: &[DVec2], segments: usize) -> Vec<DVec2> {
    if points.len() < 4 {
        return points.to_vec();
    }

    let segments = effective_segments(segments);
    let mut result = Vec::with_capacity(points.len() / 3 * segments + 1);
    let mut i = 0;
    while i + 3 < points.len() {
        let (p0, c1, c2, p1) = (points[i], points[i + 1], points[i + 2], points[i + 3]);
        for k in 0..segments {
            let t = k as f64 / segments as f64;
            result.push(cubic_bezier(p0, c1, c2, p1, t));
        }
        i += 3;
    }
    push_exact_end(&mut result, points);
    result
}

/// Kubische Bézier-Abflachung mit wählbarer Abtastung.
///
/// `Fixed` delegiert an [`create_bezier3`]. `Adaptive` zerlegt jeden
/// 4-Punkt-Abschnitt nach de Casteljau, bis dessen Lücke (siehe [`bezier_gap`])
/// höchstens `precision` beträgt, und liefert das verfeinerte Kontrollpolygon
/// ohne direkt aufeinanderfolgende Duplikate.
///
/// Eine Präzision `<= 0` oder nicht-endlich ergibt [`GeometryError::InvalidPrecision`].
pub fn create_bezier(
    points: &[DVec2],
    sampling: BezierSampling,
) -> Result<Vec<DVec2>, GeometryError> {
    let precision = match sampling {
        BezierSampling::Fixed(segments) => return Ok(create_bezier3(points, segments)),
        BezierSampling::Adaptive { precision } => precision,
    };
    if !precision.is_finite() || precision <= 0.0 {
        return Err(GeometryError::InvalidPrecision { precision });
    }
    if points.len() < 4 {
        return Ok(points.to_vec());
    }

    let mut result = vec![points[0]];
    let mut i = 0;
    while i + 3 < points.len() {
        let window = [points[i], points[i + 1], points[i + 2], points[i + 3]];
        let depth = subdivision_depth(&window, precision);
        subdivide(window, precision, depth, &mut result);
        i += 3;
    }
    // Reststücke ohne vollständigen Abschnitt bleiben unverändert
    result.extend_from_slice(&points[i + 1..]);
    result.dedup();
    Ok(result)
}

/// Maximale Koordinaten-Differenz zwischen benachbarten Kontrollpunkten eines Abschnitts.
pub fn bezier_gap(window: &[DVec2; 4]) -> f64 {
    window
        .windows(2)
        .map(|pair| (pair[1] - pair[0]).abs().max_element())
        .fold(0.0, f64::max)
}

/// Teilt einen kubischen Abschnitt bei `t = 0.5` in zwei Abschnitte (7 Punkte).
pub fn split_cubic(window: &[DVec2; 4]) -> [DVec2; 7] {
    let m01 = window[0].lerp(window[1], 0.5);
    let m12 = window[1].lerp(window[2], 0.5);
    let m23 = window[2].lerp(window[3], 0.5);
    let m012 = m01.lerp(m12, 0.5);
    let m123 = m12.lerp(m23, 0.5);
    let mid = m012.lerp(m123, 0.5);
    [window[0], m01, m012, mid, m123, m23, window[3]]
}

/// Halbierungen, nach denen die Lücke eines Abschnitts höchstens `precision` ist.
///
/// Jede Teilung halbiert die Lücke mindestens; zwei Stufen Reserve für Rundung.
fn subdivision_depth(window: &[DVec2; 4], precision: f64) -> u32 {
    let ratio = bezier_gap(window) / precision;
    if !ratio.is_finite() || ratio <= 1.0 {
        return 0;
    }
    ratio.log2().ceil() as u32 + 2
}

fn subdivide(window: [DVec2; 4], precision: f64, remaining: u32, out: &mut Vec<DVec2>) {
    if remaining == 0 || bezier_gap(&window) <= precision {
        out.extend_from_slice(&window[1..]);
        return;
    }
    let s = split_cubic(&window);
    subdivide([s[0], s[1], s[2], s[3]], precision, remaining - 1, out);
    subdivide([s[3], s[4], s[5], s[6]], precision, remaining - 1, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arch() -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 3.0),
            DVec2::new(4.0, 3.0),
            DVec2::new(5.0, 0.0),
        ]
    }

    #[test]
    fn bezier2_hits_both_endpoints_exactly() {
        let pts = [
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 2.0),
            DVec2::new(2.0, 0.0),
            DVec2::new(3.0, -2.0),
            DVec2::new(4.3, 0.1),
        ];
        let out = create_bezier2(&pts, 20);
        assert_eq!(out.first(), Some(&pts[0]));
        assert_eq!(out.last(), Some(&pts[4]));
        assert_eq!(out.len(), 2 * 20 + 1);
    }

    #[test]
    fn bezier2_two_points_is_only_the_end() {
        let pts = [DVec2::new(0.0, 0.0), DVec2::new(1.0, 1.0)];
        assert_eq!(create_bezier2(&pts, 20), vec![DVec2::new(1.0, 1.0)]);
    }

    #[test]
    fn bezier2_single_point_passes_through() {
        let pts = [DVec2::new(7.0, 1.0)];
        assert_eq!(create_bezier2(&pts, 20), pts.to_vec());
        assert!(create_bezier2(&[], 20).is_empty());
    }

    #[test]
    fn bezier2_midpoint_of_symmetric_span() {
        let pts = [DVec2::new(0.0, 0.0), DVec2::new(1.0, 2.0), DVec2::new(2.0, 0.0)];
        let out = create_bezier2(&pts, 2);
        assert_eq!(out.len(), 3);
        assert_relative_eq!(out[1].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(out[1].y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn bezier3_hits_both_endpoints_exactly() {
        let pts = arch();
        let out = create_bezier3(&pts, 20);
        assert_eq!(out.len(), 21);
        assert_eq!(out[0], pts[0]);
        assert_eq!(*out.last().unwrap(), pts[3]);
    }

    #[test]
    fn bezier3_zero_segments_uses_default() {
        let out = create_bezier3(&arch(), 0);
        assert_eq!(out.len(), DEFAULT_BEZIER_SEGMENTS + 1);
    }

    #[test]
    fn bezier3_short_input_passes_through() {
        let pts = &arch()[..3];
        assert_eq!(create_bezier3(pts, 20), pts.to_vec());
    }

    #[test]
    fn fixed_sampling_delegates_to_cubic() {
        let pts = arch();
        assert_eq!(
            create_bezier(&pts, BezierSampling::Fixed(10)),
            Ok(create_bezier3(&pts, 10))
        );
    }

    #[test]
    fn adaptive_sampling_respects_precision() {
        let pts = arch();
        let out = create_bezier(&pts, BezierSampling::Adaptive { precision: 0.1 })
            .expect("gültige Präzision");
        assert_eq!(out[0], pts[0]);
        assert_eq!(*out.last().unwrap(), pts[3]);
        for pair in out.windows(2) {
            assert!((pair[1] - pair[0]).abs().max_element() <= 0.1 + 1e-12);
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn adaptive_sampling_rejects_invalid_precision() {
        for precision in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = create_bezier(&arch(), BezierSampling::Adaptive { precision });
            assert!(
                matches!(result, Err(GeometryError::InvalidPrecision { .. })),
                "{precision}: {result:?}"
            );
        }
    }

    #[test]
    fn adaptive_sampling_holds_precision_for_wide_control_polygon() {
        let pts = [
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 10_000.0),
            DVec2::new(10_000.0, 10_000.0),
            DVec2::new(10_000.0, 0.0),
        ];
        let out = create_bezier(&pts, BezierSampling::Adaptive { precision: 1.0 })
            .expect("gültige Präzision");
        assert_eq!(out[0], pts[0]);
        assert_eq!(*out.last().unwrap(), pts[3]);
        let worst = out
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).abs().max_element())
            .fold(0.0, f64::max);
        assert!(worst <= 1.0, "größte Lücke {worst}");
    }

    #[test]
    fn split_midpoint_lies_on_curve() {
        let pts = arch();
        let split = split_cubic(&[pts[0], pts[1], pts[2], pts[3]]);
        let on_curve = cubic_bezier(pts[0], pts[1], pts[2], pts[3], 0.5);
        assert_relative_eq!(split[3].x, on_curve.x, epsilon = 1e-12);
        assert_relative_eq!(split[3].y, on_curve.y, epsilon = 1e-12);
    }

    #[test]
    fn gap_is_max_coordinate_delta() {
        let pts = arch();
        assert_relative_eq!(bezier_gap(&[pts[0], pts[1], pts[2], pts[3]]), 3.0);
    }
}
