//! Reine 2D-Vektorgeometrie für die Symbol-Generatoren.
//!
//! Layer-neutral: arbeitet ausschließlich auf `DVec2` in der lokalen
//! Planar-Projektion (x = Länge, y = Breite) und hält keinen Zustand.

use glam::DVec2;

/// Relative Toleranz, ab der zwei Richtungen als parallel gelten.
const PARALLEL_EPSILON: f64 = 1e-12;

/// Zwei Vektoren links und rechts eines Basisvektors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorPair {
    /// Lösung links (gegen den Uhrzeigersinn) vom Basisvektor
    pub left: DVec2,
    /// Lösung rechts (im Uhrzeigersinn) vom Basisvektor
    pub right: DVec2,
}

/// Berechnet die beiden Vektoren der Länge `length`, die mit `v` den Winkel `angle` bilden.
///
/// Gelöst wird `u·v = cos(angle)·|v|·length` mit `|u| = length`. Die beiden
/// Lösungen liegen symmetrisch zu `v`; der Winkel wird dabei auf `[0, π]`
/// gefaltet (nur `cos(angle)` geht ein). `left` liegt gegen den Uhrzeigersinn.
///
/// Vorbedingung: `v` ist nicht der Nullvektor. Für `v == 0` entstehen NaN-Koordinaten,
/// die von den Generatoren als `GeometryError::NonFinite` gemeldet werden.
pub fn calculate_vector(v: DVec2, angle: f64, length: f64) -> VectorPair {
    let unit = v / v.length();
    let folded = angle.cos().clamp(-1.0, 1.0).acos();
    VectorPair {
        left: DVec2::from_angle(folded).rotate(unit) * length,
        right: DVec2::from_angle(-folded).rotate(unit) * length,
    }
}

/// Senkrechte Einheitsvektoren zu `v` (Standardfall von [`calculate_vector`]).
///
/// Exakt über `perp()`, damit achsparallele Basen achsparallele Normalen liefern.
pub fn perpendicular(v: DVec2) -> VectorPair {
    let normal = (v / v.length()).perp();
    VectorPair {
        left: normal,
        right: -normal,
    }
}

/// Schnittpunkt der Geraden `(p1, v1)` und `(p2, v2)`.
///
/// Parallele Richtungen haben keinen eindeutigen Schnittpunkt:
/// gleichsinnig → Mittelpunkt von `p1`/`p2`, gegensinnig → `p2`.
pub fn calculate_intersection(v1: DVec2, v2: DVec2, p1: DVec2, p2: DVec2) -> DVec2 {
    let denom = v1.perp_dot(v2);
    if denom.abs() <= PARALLEL_EPSILON * v1.length() * v2.length() {
        if v1.x * v2.x > 0.0 || v1.y * v2.y > 0.0 {
            return midpoint(p1, p2);
        }
        return p2;
    }

    // Parameter auf der ersten Geraden: p1 + t·v1 liegt auf (p2, v2)
    let t = (p2 - p1).perp_dot(v2) / denom;
    p1 + v1 * t
}

/// Winkelhalbierende als Summe der Einheitsvektoren (nicht normiert).
pub fn angular_bisector(v1: DVec2, v2: DVec2) -> DVec2 {
    v1 / v1.length() + v2 / v2.length()
}

/// Beide Spitzen eines Dreiecks über der Basis `start → end` mit den Basiswinkeln
/// `angle_start` und `angle_end`.
///
/// `left` schneidet die linken Schenkel, `right` die rechten.
pub fn intersection_from_two_corners(
    start: DVec2,
    end: DVec2,
    angle_start: f64,
    angle_end: f64,
) -> VectorPair {
    let base = end - start;
    let from_start = calculate_vector(base, angle_start, 1.0);
    let from_end = calculate_vector(base, std::f64::consts::PI - angle_end, 1.0);
    VectorPair {
        left: calculate_intersection(from_start.left, from_end.left, start, end),
        right: calculate_intersection(from_start.right, from_end.right, start, end),
    }
}

/// Zwei kurze Pfeil-Linien an `end`, die gegen `start` zurückzeigen.
///
/// Länge = `|end - start| / ratio`, halber Öffnungswinkel = `angle`.
pub fn arrow_lines(start: DVec2, end: DVec2, ratio: f64, angle: f64) -> [Vec<DVec2>; 2] {
    let length = start.distance(end) / ratio;
    let pair = calculate_vector(start - end, angle, length);
    [vec![end, end + pair.left], vec![end, end + pair.right]]
}

/// Mittelpunkt zweier Punkte.
pub fn midpoint(a: DVec2, b: DVec2) -> DVec2 {
    (a + b) * 0.5
}

/// Spiegelt `point` am Zentrum `center`.
pub fn mirror(point: DVec2, center: DVec2) -> DVec2 {
    2.0 * center - point
}
