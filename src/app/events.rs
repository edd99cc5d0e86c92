//! Eingabe-Ereignisse der Zeichen-Session.

use crate::core::SymbolKind;
use glam::DVec2;

/// Ereignis, das die einbettende Oberfläche an die Session weiterreicht.
/// Positionen sind Kartenkoordinaten (x = Länge, y = Breite).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// Klick setzt einen Kontrollpunkt
    PointerClick { pos: DVec2 },
    /// Zeigerbewegung aktualisiert die Vorschau
    PointerMove { pos: DVec2 },
    /// Aktuellen Strich abbrechen (Escape)
    Cancel,
    /// Letzte Änderung der Symbol-Ebene rückgängig machen
    Undo,
    /// Rückgängig gemachte Änderung wiederherstellen
    Redo,
    /// Anderes Zeichenwerkzeug aktivieren
    SelectTool(SymbolKind),
}
