//! Geschlossene Cardinal-Splines als kubische Bézier-Kontrollpunktkette.

use glam::DVec2;

/// Standard-Spannung der Cardinal-Spline (0 < t < 0.5).
pub const DEFAULT_CARDINAL_TENSION: f64 = 0.4;
/// Standard-Toleranz, ab der drei Punkte als kollinear gelten.
pub const DEFAULT_COLLINEAR_EPSILON: f64 = 0.005;

/// Parameter für [`create_close_cardinal`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardinalParams {
    /// Spannung: skaliert die Tangentenlänge relativ zur jeweiligen Kantenlänge
    pub tension: f64,
    /// Kollinear, wenn `|1 - cos(Kantenwinkel)| < collinear_epsilon`
    pub collinear_epsilon: f64,
}

impl Default for CardinalParams {
    fn default() -> Self {
        Self {
            tension: DEFAULT_CARDINAL_TENSION,
            collinear_epsilon: DEFAULT_COLLINEAR_EPSILON,
        }
    }
}

/// Linker und rechter Tangenten-Kontrollpunkt eines Ringpunkts.
fn tangent_controls(prev: DVec2, p: DVec2, next: DVec2, params: CardinalParams) -> (DVec2, DVec2) {
    let incoming = p - prev;
    let outgoing = next - p;
    let d_in = incoming.length();
    let d_out = outgoing.length();
    let u_in = incoming / d_in;
    let u_out = outgoing / d_out;
    let t = params.tension;

    if (1.0 - u_in.dot(u_out)).abs() < params.collinear_epsilon {
        (p - u_out * d_in * t, p + u_in * d_out * t)
    } else {
        let bisector = (u_in + u_out).normalize();
        (p - bisector * d_in * t, p + bisector * d_out * t)
    }
}

/// Erzeugt die Kontrollpunkte einer geschlossenen Cardinal-Spline durch `points`.
///
/// Ergebnis für `n` Punkte (Länge `3n + 1`):
/// `[c0, r0, l1, c1, r1, …, l(n-1), c(n-1), r(n-1), l0, c0]`
/// und ist direkt als Eingabe für `create_bezier3` geeignet.
/// Weniger als drei Punkte werden unverändert zurückgegeben.
pub fn create_close_cardinal(points: &[DVec2], params: CardinalParams) -> Vec<DVec2> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let controls: Vec<(DVec2, DVec2)> = (0..n)
        .map(|k| {
            let prev = points[(k + n - 1) % n];
            let next = points[(k + 1) % n];
            tangent_controls(prev, points[k], next, params)
        })
        .collect();

    let mut ring = Vec::with_capacity(3 * n + 1);
    ring.push(points[0]);
    ring.push(controls[0].1);
    for k in 1..n {
        let (left, right) = controls[k];
        ring.extend([left, points[k], right]);
    }
    ring.push(controls[0].0);
    ring.push(points[0]);
    ring
}
