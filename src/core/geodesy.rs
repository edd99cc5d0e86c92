//! Schnittstelle zum Geodäsie-Dienst (Distanz und Zielpunkt auf der Erdkugel).
//!
//! Koordinaten sind `DVec2` mit x = Länge, y = Breite (Grad).

use geo::{Destination, Distance, Haversine, Point};
use glam::DVec2;

/// Geodätische Grundfunktionen, die Kreis- und Rechteck-Werkzeuge benötigen.
pub trait Geodesy {
    /// Großkreis-Distanz in Metern.
    fn distance(&self, a: DVec2, b: DVec2) -> f64;

    /// Zielpunkt ausgehend von `origin` in Richtung `bearing_deg`
    /// (Grad, im Uhrzeigersinn ab Nord) nach `meters` Metern.
    fn destination(&self, origin: DVec2, bearing_deg: f64, meters: f64) -> DVec2;
}

/// Haversine-Geodäsie auf der mittleren Erdkugel (via `geo`).
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineGeodesy;

fn to_point(p: DVec2) -> Point<f64> {
    Point::new(p.x, p.y)
}

impl Geodesy for HaversineGeodesy {
    fn distance(&self, a: DVec2, b: DVec2) -> f64 {
        Haversine::distance(to_point(a), to_point(b))
    }

    fn destination(&self, origin: DVec2, bearing_deg: f64, meters: f64) -> DVec2 {
        let p = Haversine::destination(to_point(origin), bearing_deg, meters);
        DVec2::new(p.x(), p.y())
    }
}
