//! Symbol-Generatoren: reine Funktionen von Kontrollpunkten auf Umrisse.
//!
//! Jede Symbol-Familie hat ein eigenes Modul; [`generate`] wählt per
//! [`SymbolKind`] aus, prüft die Mindestpunktzahl und weist nicht-endliche
//! Ergebnisse als [`GeometryError`] zurück.

pub mod basic;
pub mod diagonal_arrow;
pub mod double_arrow;
pub mod gathering_place;
pub mod lune;
pub mod parallel_search;
pub mod sector_search;
pub mod straight_arrow;

use crate::core::{GenerateResult, Geodesy, GeometryError, Outline, SymbolKind};
use crate::shared::PlottingOptions;
use double_arrow::DoubleArrowParams;
use glam::DVec2;

/// Kontext, den alle Generatoren lesen: Optionen und Geodäsie-Dienst.
#[derive(Clone, Copy)]
pub struct SymbolContext<'a> {
    /// Form-Parameter
    pub options: &'a PlottingOptions,
    /// Distanz-/Zielpunkt-Berechnung für Kreis und Rechteck
    pub geodesy: &'a dyn Geodesy,
}

/// Erzeugt den Umriss einer Symbol-Art aus den aktuellen Kontrollpunkten.
///
/// - `Ok(None)`: zu wenige Punkte, oder die ersten beiden Punkte sind bei einem
///   Zwei-Punkt-Symbol identisch (Doppelklick)
/// - `Err(Degenerate)`: Basisvektor der Länge 0 ohne definierte Ersatzform
/// - `Err(NonFinite)`: Umriss enthält NaN/Inf
pub fn generate(
    kind: SymbolKind,
    points: &[DVec2],
    ctx: &SymbolContext<'_>,
) -> GenerateResult<Outline> {
    if points.len() < kind.preview_min_points() {
        return Ok(None);
    }
    if kind.min_points() == 2 && points[0] == points[1] {
        log::debug!("{}: identische Startpunkte, keine Ausgabe", kind);
        return Ok(None);
    }

    let opts = ctx.options;
    let last = points[points.len() - 1];
    let outline = match kind {
        SymbolKind::Line => Outline::LineString(points.to_vec()),
        SymbolKind::Polygon if points.len() == 2 => Outline::LineString(points.to_vec()),
        SymbolKind::Polygon => Outline::Polygon(points.to_vec()),
        SymbolKind::Rectangle => Outline::Polygon(basic::rectangle(points).ring()),
        SymbolKind::Circle => Outline::Polygon(basic::circle(
            points[0],
            last,
            opts.circle_segments,
            ctx.geodesy,
        )),
        SymbolKind::StraightArrow => Outline::Polygon(straight_arrow::generate(
            points,
            opts.straight_arrow_ratio,
            opts.bezier_segments,
        )),
        SymbolKind::DiagonalArrow => Outline::Polygon(diagonal_arrow::generate(
            points,
            opts.diagonal_arrow_ratio,
            opts.bezier_segments,
        )),
        SymbolKind::DoubleArrow => {
            let anchors = [points[0], points[1], points[2], points[3]];
            let params = DoubleArrowParams {
                head_ratio: opts.double_arrow_head_ratio,
                center_tension: opts.double_arrow_center_tension,
                segments: opts.bezier_segments,
            };
            Outline::Polygon(double_arrow::generate(&anchors, params))
        }
        SymbolKind::GatheringPlace => Outline::Polygon(gathering_place::generate(
            points[0],
            last,
            opts.cardinal_params(),
            opts.gathering_place_segments,
        )),
        SymbolKind::Lune => Outline::Polygon(lune::generate(
            points,
            opts.arc_sides,
            opts.lune_collinear_epsilon,
        )),
        SymbolKind::ParallelSearch => {
            if points[0] == points[1] {
                return Err(GeometryError::Degenerate {
                    kind,
                    reason: "Basisvektor der Länge 0",
                });
            }
            Outline::MultiLineString(parallel_search::generate(
                points,
                opts.parallel_search_arrow_ratio,
                opts.arrow_head_angle(),
            ))
        }
        SymbolKind::SectorSearch => Outline::MultiLineString(sector_search::generate(
            points[0],
            last,
            opts.sector_search_arrow_ratio,
            opts.arrow_head_angle(),
        )),
    };

    if !outline.is_finite() {
        log::warn!("{}: Umriss enthält nicht-endliche Koordinaten", kind);
        return Err(GeometryError::NonFinite { kind });
    }
    log::debug!(
        "{}: {} Umrisspunkte aus {} Kontrollpunkten",
        kind,
        outline.point_count(),
        points.len()
    );
    Ok(Some(outline))
}
