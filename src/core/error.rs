//! Fehlertypen der Symbol-Generierung.

use super::SymbolKind;
use thiserror::Error;

/// Result-Typ der Generatoren: `Ok(None)` bedeutet zu wenige Kontrollpunkte.
pub type GenerateResult<T> = Result<Option<T>, GeometryError>;

/// Beschreibt Geometrie, die sich nicht sinnvoll darstellen lässt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Die Kontrollpunkte erlauben keine eindeutige Konstruktion.
    #[error("degenerierte Geometrie für {kind}: {reason}")]
    Degenerate {
        /// Betroffene Symbol-Art
        kind: SymbolKind,
        /// Kurzbeschreibung der Ursache
        reason: &'static str,
    },
    /// Der berechnete Umriss enthält NaN- oder unendliche Koordinaten.
    #[error("nicht-endliche Koordinaten im Umriss von {kind}")]
    NonFinite {
        /// Betroffene Symbol-Art
        kind: SymbolKind,
    },
    /// Adaptive Bézier-Abtastung mit nicht-positiver oder nicht-endlicher Präzision.
    #[error("ungültige Bézier-Präzision {precision}: erwartet endlich und > 0")]
    InvalidPrecision {
        /// Übergebene Präzision
        precision: f64,
    },
}
