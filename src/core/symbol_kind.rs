//! Geschlossene Menge der Symbol-Arten und ihrer Eingabe-Schwellen.

use std::fmt;

/// Art eines zeichenbaren Symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Offene Linie durch alle Kontrollpunkte
    Line,
    /// Geschlossenes Polygon durch alle Kontrollpunkte
    Polygon,
    /// Achsparalleles Rechteck aus zwei Ecken
    Rectangle,
    /// Geodätischer Kreis (Zentrum + Randpunkt)
    Circle,
    /// Gerader (ggf. geknickter) Pfeil
    StraightArrow,
    /// Diagonal-Pfeil mit abgesetzter Spitze
    DiagonalArrow,
    /// Doppelpfeil aus vier Ankerpunkten
    DoubleArrow,
    /// Sammelraum (Tropfenform)
    GatheringPlace,
    /// Mondsichel / Kreisbogen durch drei Punkte
    Lune,
    /// Parallel-Suchmuster
    ParallelSearch,
    /// Sektor-Suchmuster
    SectorSearch,
}

impl SymbolKind {
    /// Alle Symbol-Arten in Registrierungs-Reihenfolge.
    pub const ALL: [SymbolKind; 11] = [
        SymbolKind::Line,
        SymbolKind::Polygon,
        SymbolKind::Rectangle,
        SymbolKind::Circle,
        SymbolKind::StraightArrow,
        SymbolKind::DiagonalArrow,
        SymbolKind::DoubleArrow,
        SymbolKind::GatheringPlace,
        SymbolKind::Lune,
        SymbolKind::ParallelSearch,
        SymbolKind::SectorSearch,
    ];

    /// Anzeigename für Logs und CLI.
    pub fn name(self) -> &'static str {
        match self {
            SymbolKind::Line => "line",
            SymbolKind::Polygon => "polygon",
            SymbolKind::Rectangle => "rectangle",
            SymbolKind::Circle => "circle",
            SymbolKind::StraightArrow => "straight-arrow",
            SymbolKind::DiagonalArrow => "diagonal-arrow",
            SymbolKind::DoubleArrow => "double-arrow",
            SymbolKind::GatheringPlace => "gathering-place",
            SymbolKind::Lune => "lune",
            SymbolKind::ParallelSearch => "parallel-search",
            SymbolKind::SectorSearch => "sector-search",
        }
    }

    /// Sucht eine Symbol-Art über ihren Anzeigenamen.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Mindestanzahl gesetzter Kontrollpunkte, ab der ein Umriss festgeschrieben wird.
    pub fn min_points(self) -> usize {
        match self {
            SymbolKind::Polygon
            | SymbolKind::Lune
            | SymbolKind::ParallelSearch => 3,
            SymbolKind::DoubleArrow => 4,
            _ => 2,
        }
    }

    /// Mindestanzahl Punkte (inkl. Zeigerposition) für eine Vorschau.
    pub fn preview_min_points(self) -> usize {
        match self {
            SymbolKind::Polygon | SymbolKind::Lune => 2,
            other => other.min_points(),
        }
    }

    /// Punktanzahl, bei der das Werkzeug automatisch abschließt.
    pub fn auto_finish_at(self) -> Option<usize> {
        match self {
            SymbolKind::Circle | SymbolKind::GatheringPlace | SymbolKind::SectorSearch => Some(2),
            SymbolKind::Lune => Some(3),
            SymbolKind::DoubleArrow => Some(4),
            _ => None,
        }
    }

    /// Ob der Umriss eine geschlossene Fläche ist.
    pub fn is_area(self) -> bool {
        !matches!(
            self,
            SymbolKind::Line | SymbolKind::ParallelSearch | SymbolKind::SectorSearch
        )
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
