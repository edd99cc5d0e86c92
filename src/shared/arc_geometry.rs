//! Kreisbogen-Abtastung und Winkel-Hilfen.

use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// Standard-Auflösung: Seiten pro Vollkreis.
pub const DEFAULT_ARC_SIDES: f64 = 360.0;

/// Umlaufsinn eines Bogens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcDirection {
    /// Gegen den Uhrzeigersinn (+1)
    CounterClockwise,
    /// Im Uhrzeigersinn (−1)
    Clockwise,
}

impl ArcDirection {
    /// Interpretiert ein Vorzeichen; alles außer exakt `+1` wird zu `Clockwise`.
    pub fn from_sign(sign: f64) -> Self {
        if sign == 1.0 {
            Self::CounterClockwise
        } else {
            Self::Clockwise
        }
    }

    /// Vorzeichen der Winkelschritte.
    pub fn sign(self) -> f64 {
        match self {
            Self::CounterClockwise => 1.0,
            Self::Clockwise => -1.0,
        }
    }
}

/// Winkelschritt für `sides` Seiten pro Vollkreis (halbe Seitenbreite).
///
/// `sides <= 0` fällt auf [`DEFAULT_ARC_SIDES`] zurück.
pub fn arc_step(sides: f64) -> f64 {
    let sides = if sides > 0.0 { sides } else { DEFAULT_ARC_SIDES };
    PI / sides / 2.0
}

/// Normalisiert einen Winkel nach `[0, 2π)`.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid kann für winzige negative Werte exakt TAU liefern
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Punkt auf dem Kreis um `center` mit Radius `radius` beim Winkel `angle`.
pub fn point_on_circle(center: DVec2, radius: f64, angle: f64) -> DVec2 {
    center + radius * DVec2::new(angle.cos(), angle.sin())
}

/// Tastet einen Kreisbogen ab.
///
/// Startet bei `start_angle` und schreitet in `direction` um [`arc_step`] fort,
/// bis die Bogenlänge `|end_angle - start_angle|` erreicht ist. Der Endwinkel
/// selbst ist nicht enthalten.
pub fn calculate_arc(
    center: DVec2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    direction: ArcDirection,
    sides: f64,
) -> Vec<DVec2> {
    let step = arc_step(sides);
    let length = (end_angle - start_angle).abs();
    // Toleranz gegen Rundung bei ganzzahligen Vielfachen des Schritts
    let count = (length / step - 1e-9).ceil().max(0.0) as usize;
    let step_dir = step * direction.sign();

    let mut points = Vec::with_capacity(count);
    let mut radians = start_angle;
    for _ in 0..count {
        points.push(point_on_circle(center, radius, radians));
        radians = wrap_angle(radians + step_dir);
    }
    points
}

/// Richtungswinkel von `point` aus Sicht von `center` in `[0, 2π)`.
pub fn calculate_angle(point: DVec2, center: DVec2) -> f64 {
    let delta = point - center;
    wrap_angle(delta.y.atan2(delta.x))
}
