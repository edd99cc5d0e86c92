//! Ebene der platzierten Symbole.

use super::{Outline, SymbolKind};
use indexmap::IndexMap;

/// Eindeutige ID eines platzierten Symbols.
pub type ShapeId = u64;

/// Ein auf der Karte platziertes Symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedShape {
    /// Eindeutige ID innerhalb der Ebene
    pub id: ShapeId,
    /// Symbol-Art
    pub kind: SymbolKind,
    /// Aktueller Umriss
    pub outline: Outline,
}

/// Container aller platzierten Symbole in Einfüge-Reihenfolge.
#[derive(Debug, Clone, Default)]
pub struct ShapeLayer {
    shapes: IndexMap<ShapeId, PlacedShape>,
    next_id: ShapeId,
}

impl ShapeLayer {
    /// Erstellt eine leere Ebene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt ein Symbol hinzu und gibt dessen neue ID zurück.
    pub fn add_shape(&mut self, kind: SymbolKind, outline: Outline) -> ShapeId {
        self.next_id += 1;
        let id = self.next_id;
        self.shapes.insert(id, PlacedShape { id, kind, outline });
        id
    }

    /// Ersetzt den Umriss eines vorhandenen Symbols. Gibt `false` zurück, wenn die ID fehlt.
    pub fn update_outline(&mut self, id: ShapeId, outline: Outline) -> bool {
        match self.shapes.get_mut(&id) {
            Some(shape) => {
                shape.outline = outline;
                true
            }
            None => false,
        }
    }

    /// Liefert ein Symbol per ID.
    pub fn get(&self, id: ShapeId) -> Option<&PlacedShape> {
        self.shapes.get(&id)
    }

    /// Prüft ob ein Symbol mit dieser ID existiert.
    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    /// Anzahl der Symbole.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Prüft ob die Ebene leer ist.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Iteriert über alle Symbole in Einfüge-Reihenfolge.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedShape> {
        self.shapes.values()
    }
}
