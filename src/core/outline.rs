//! Renderbare Umrisse der Symbole und deren Export nach `geo`.

use geo::{Coord, Geometry, LineString, MultiLineString, Polygon};
use glam::DVec2;

/// Umriss eines Symbols in der lokalen Planar-Projektion.
///
/// Polygone werden implizit geschlossen (letzter Punkt verbindet zum ersten),
/// Linien nicht.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// Geschlossene Fläche
    Polygon(Vec<DVec2>),
    /// Offene Linie
    LineString(Vec<DVec2>),
    /// Mehrteilige Linien (z.B. Suchmuster mit Pfeil-Linien)
    MultiLineString(Vec<Vec<DVec2>>),
}

impl Outline {
    /// Alle Punkte in Reihenfolge (Teile hintereinander).
    pub fn points(&self) -> Box<dyn Iterator<Item = &DVec2> + '_> {
        match self {
            Outline::Polygon(pts) | Outline::LineString(pts) => Box::new(pts.iter()),
            Outline::MultiLineString(parts) => Box::new(parts.iter().flatten()),
        }
    }

    /// Gesamtanzahl der Punkte.
    pub fn point_count(&self) -> usize {
        match self {
            Outline::Polygon(pts) | Outline::LineString(pts) => pts.len(),
            Outline::MultiLineString(parts) => parts.iter().map(Vec::len).sum(),
        }
    }

    /// Prüft ob der Umriss keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// Prüft ob alle Koordinaten endlich sind (kein NaN/Inf).
    pub fn is_finite(&self) -> bool {
        self.points().all(|p| p.is_finite())
    }

    /// Konvertiert in eine `geo::Geometry` für externe Renderer.
    pub fn to_geometry(&self) -> Geometry<f64> {
        match self {
            Outline::Polygon(pts) => Geometry::Polygon(Polygon::new(to_line_string(pts), vec![])),
            Outline::LineString(pts) => Geometry::LineString(to_line_string(pts)),
            Outline::MultiLineString(parts) => Geometry::MultiLineString(MultiLineString::new(
                parts.iter().map(|part| to_line_string(part)).collect(),
            )),
        }
    }
}

fn to_line_string(points: &[DVec2]) -> LineString<f64> {
    LineString::new(points.iter().map(|p| Coord { x: p.x, y: p.y }).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_line_counts_all_parts() {
        let outline = Outline::MultiLineString(vec![
            vec![DVec2::ZERO, DVec2::X],
            vec![DVec2::Y, DVec2::ONE, DVec2::NEG_X],
        ]);
        assert_eq!(outline.point_count(), 5);
        assert!(!outline.is_empty());
    }

    #[test]
    fn nan_is_not_finite() {
        let outline = Outline::LineString(vec![DVec2::ZERO, DVec2::new(f64::NAN, 1.0)]);
        assert!(!outline.is_finite());
    }

    #[test]
    fn polygon_export_closes_ring() {
        let outline = Outline::Polygon(vec![DVec2::ZERO, DVec2::X, DVec2::ONE]);
        match outline.to_geometry() {
            Geometry::Polygon(poly) => {
                let ring = poly.exterior();
                assert_eq!(ring.0.len(), 4);
                assert_eq!(ring.0.first(), ring.0.last());
            }
            other => panic!("Polygon erwartet, erhalten: {other:?}"),
        }
    }

    #[test]
    fn multi_line_export_keeps_parts() {
        let outline = Outline::MultiLineString(vec![
            vec![DVec2::ZERO, DVec2::X],
            vec![DVec2::Y, DVec2::ONE],
        ]);
        match outline.to_geometry() {
            Geometry::MultiLineString(mls) => assert_eq!(mls.0.len(), 2),
            other => panic!("MultiLineString erwartet, erhalten: {other:?}"),
        }
    }
}
