//! Zentrale Konfiguration der Symbol-Generatoren.
//!
//! `PlottingOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Pfeile ──────────────────────────────────────────────────────────

/// Verhältnis Pfeillänge zu Pfeilbreite beim geraden Pfeil.
pub const STRAIGHT_ARROW_RATIO: f64 = 6.0;
/// Verhältnis Pfeillänge zu Pfeilbreite beim Diagonal-Pfeil.
pub const DIAGONAL_ARROW_RATIO: f64 = 6.0;
/// Einzug der Pfeilspitzen beim Doppelpfeil (Anteil der kürzeren Schenkellänge).
pub const DOUBLE_ARROW_HEAD_RATIO: f64 = 0.25;
/// Tangenten-Skalierung an der Taille des Doppelpfeils.
pub const DOUBLE_ARROW_CENTER_TENSION: f64 = 0.4;
/// Halber Öffnungswinkel der Pfeil-Linien in Grad.
pub const ARROW_HEAD_ANGLE_DEG: f64 = 30.0;

// ── Kurven ──────────────────────────────────────────────────────────

/// Spannung der geschlossenen Cardinal-Spline.
pub const CARDINAL_TENSION: f64 = 0.4;
/// Kollinearitäts-Toleranz der Cardinal-Spline.
pub const CARDINAL_COLLINEAR_EPSILON: f64 = 0.005;
/// Segmente pro Bézier-Abschnitt.
pub const BEZIER_SEGMENTS: usize = 20;
/// Segmente pro Bézier-Abschnitt beim Sammelraum.
pub const GATHERING_PLACE_SEGMENTS: usize = 100;
/// Seiten pro Vollkreis bei der Bogen-Abtastung.
pub const ARC_SIDES: f64 = 360.0;
/// Kollinearitäts-Toleranz (Kreuzprodukt) der Mondsichel.
pub const LUNE_COLLINEAR_EPSILON: f64 = 1e-5;

// ── Suchmuster ──────────────────────────────────────────────────────

/// Verhältnis Kantenlänge zu Pfeil-Linienlänge beim Parallel-Suchmuster.
pub const PARALLEL_SEARCH_ARROW_RATIO: f64 = 15.0;
/// Verhältnis Kantenlänge zu Pfeil-Linienlänge beim Sektor-Suchmuster.
pub const SECTOR_SEARCH_ARROW_RATIO: f64 = 10.0;

// ── Basis-Werkzeuge / Session ───────────────────────────────────────

/// Anzahl Stützpunkte eines geodätischen Kreises.
pub const CIRCLE_SEGMENTS: usize = 72;
/// Maximale Undo-Tiefe.
pub const HISTORY_DEPTH: usize = 100;

/// Laufzeit-Optionen der Symbol-Generatoren (persistiert als TOML).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlottingOptions {
    /// Länge/Breite-Verhältnis des geraden Pfeils
    pub straight_arrow_ratio: f64,
    /// Länge/Breite-Verhältnis des Diagonal-Pfeils
    pub diagonal_arrow_ratio: f64,
    /// Einzug der Doppelpfeil-Spitzen
    pub double_arrow_head_ratio: f64,
    /// Tangenten-Skalierung an der Doppelpfeil-Taille
    pub double_arrow_center_tension: f64,
    /// Halber Öffnungswinkel der Pfeil-Linien (Grad)
    pub arrow_head_angle_deg: f64,
    /// Cardinal-Spannung
    pub cardinal_tension: f64,
    /// Cardinal-Kollinearitäts-Toleranz
    pub cardinal_collinear_epsilon: f64,
    /// Segmente pro Bézier-Abschnitt
    pub bezier_segments: usize,
    /// Segmente pro Bézier-Abschnitt beim Sammelraum
    pub gathering_place_segments: usize,
    /// Seiten pro Vollkreis bei Bögen
    pub arc_sides: f64,
    /// Kollinearitäts-Toleranz der Mondsichel
    pub lune_collinear_epsilon: f64,
    /// Pfeil-Linien-Verhältnis beim Parallel-Suchmuster
    pub parallel_search_arrow_ratio: f64,
    /// Pfeil-Linien-Verhältnis beim Sektor-Suchmuster
    pub sector_search_arrow_ratio: f64,
    /// Stützpunkte eines Kreises
    pub circle_segments: usize,
    /// Maximale Undo-Tiefe
    pub history_depth: usize,
}

impl Default for PlottingOptions {
    fn default() -> Self {
        Self {
            straight_arrow_ratio: STRAIGHT_ARROW_RATIO,
            diagonal_arrow_ratio: DIAGONAL_ARROW_RATIO,
            double_arrow_head_ratio: DOUBLE_ARROW_HEAD_RATIO,
            double_arrow_center_tension: DOUBLE_ARROW_CENTER_TENSION,
            arrow_head_angle_deg: ARROW_HEAD_ANGLE_DEG,
            cardinal_tension: CARDINAL_TENSION,
            cardinal_collinear_epsilon: CARDINAL_COLLINEAR_EPSILON,
            bezier_segments: BEZIER_SEGMENTS,
            gathering_place_segments: GATHERING_PLACE_SEGMENTS,
            arc_sides: ARC_SIDES,
            lune_collinear_epsilon: LUNE_COLLINEAR_EPSILON,
            parallel_search_arrow_ratio: PARALLEL_SEARCH_ARROW_RATIO,
            sector_search_arrow_ratio: SECTOR_SEARCH_ARROW_RATIO,
            circle_segments: CIRCLE_SEGMENTS,
            history_depth: HISTORY_DEPTH,
        }
    }
}

impl PlottingOptions {
    /// Lädt Optionen aus einer TOML-Datei. Gibt Default zurück bei Fehler.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("geo-plotting"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("geo_plotting.toml")
    }

    /// Halber Öffnungswinkel der Pfeil-Linien im Bogenmaß.
    pub fn arrow_head_angle(&self) -> f64 {
        self.arrow_head_angle_deg.to_radians()
    }

    /// Parameter für die geschlossene Cardinal-Spline.
    pub fn cardinal_params(&self) -> crate::shared::CardinalParams {
        crate::shared::CardinalParams {
            tension: self.cardinal_tension,
            collinear_epsilon: self.cardinal_collinear_epsilon,
        }
    }
}
