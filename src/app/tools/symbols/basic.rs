//! Basis-Werkzeuge: Linie, Polygon, Rechteck und geodätischer Kreis.

use crate::core::Geodesy;
use glam::DVec2;

/// Ecke eines achsparallelen Rechtecks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    /// Oben links
    UpperLeft,
    /// Oben rechts
    UpperRight,
    /// Unten links
    LowerLeft,
    /// Unten rechts
    LowerRight,
}

/// Achsparalleles Rechteck in Planar-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimale Ecke (unten links)
    pub min: DVec2,
    /// Maximale Ecke (oben rechts)
    pub max: DVec2,
}

impl Rect {
    /// Rechteck aus zwei gegenüberliegenden Ecken.
    pub fn from_corners(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Mittelpunkt.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    /// Ecke, die `point` relativ zum Mittelpunkt am nächsten liegt (nach Quadrant).
    pub fn corner_for(&self, point: DVec2) -> Corner {
        let c = self.center();
        match (point.x < c.x, point.y < c.y) {
            (true, false) => Corner::UpperLeft,
            (false, false) => Corner::UpperRight,
            (true, true) => Corner::LowerLeft,
            (false, true) => Corner::LowerRight,
        }
    }

    /// Verschiebt eine Ecke nach `point`; die gegenüberliegende Ecke bleibt fest.
    pub fn set_corner(&mut self, corner: Corner, point: DVec2) {
        let fixed = match corner {
            Corner::UpperLeft => DVec2::new(self.max.x, self.min.y),
            Corner::UpperRight => self.min,
            Corner::LowerLeft => self.max,
            Corner::LowerRight => DVec2::new(self.min.x, self.max.y),
        };
        *self = Self::from_corners(fixed, point);
    }

    /// Eckpunkte im Uhrzeigersinn ab oben links.
    pub fn ring(&self) -> Vec<DVec2> {
        vec![
            DVec2::new(self.min.x, self.max.y),
            self.max,
            DVec2::new(self.max.x, self.min.y),
            self.min,
        ]
    }

    /// Breite und Höhe in Metern über den Geodäsie-Dienst.
    pub fn size_meters(&self, geodesy: &dyn Geodesy) -> (f64, f64) {
        let width = geodesy.distance(self.min, DVec2::new(self.max.x, self.min.y));
        let height = geodesy.distance(self.min, DVec2::new(self.min.x, self.max.y));
        (width, height)
    }
}

/// Rechteck aus den ersten beiden Punkten; jeder weitere Punkt verschiebt
/// die Ecke seines Quadranten.
pub fn rectangle(points: &[DVec2]) -> Rect {
    let mut rect = Rect::from_corners(points[0], points[1]);
    for &p in &points[2..] {
        let corner = rect.corner_for(p);
        rect.set_corner(corner, p);
    }
    rect
}

/// Kreis um `center` durch `rim`.
///
/// Radius geodätisch in Metern, Stützpunkte per Zielpunkt-Rechnung.
pub fn circle(center: DVec2, rim: DVec2, segments: usize, geodesy: &dyn Geodesy) -> Vec<DVec2> {
    let radius = geodesy.distance(center, rim);
    let segments = segments.max(3);
    (0..segments)
        .map(|k| {
            let bearing = k as f64 * 360.0 / segments as f64;
            geodesy.destination(center, bearing, radius)
        })
        .collect()
}
