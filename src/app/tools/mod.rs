//! Zeichenwerkzeuge: ein Kontrollpunkt-Sammler pro Symbol-Art.
//!
//! Die `ToolRegistry` hält für jede [`SymbolKind`] ein [`DrawTool`] und den
//! aktiven Eintrag. Die Geometrie selbst erzeugen die reinen Funktionen in
//! [`symbols`]; Mutation der Symbol-Ebene erfolgt zentral in der Session.

mod draw_tool;
/// Reine Symbol-Generatoren.
pub mod symbols;

pub use draw_tool::DrawTool;
pub use symbols::{generate, SymbolContext};

use crate::core::SymbolKind;
use indexmap::IndexMap;

/// Rückgabe von `push_point`: steuert den Zeichen-Flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolAction {
    /// Punkt verworfen (Doppelklick oder Werkzeug bereits abgeschlossen)
    Ignored,
    /// Punkt registriert, weitere Eingabe möglich
    Continue,
    /// Auto-Abschluss-Schwelle erreicht
    ReadyToFinish,
}

/// Verwaltet die registrierten Werkzeuge und das aktive Werkzeug.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: IndexMap<SymbolKind, DrawTool>,
    active: SymbolKind,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistry {
    /// Erstellt eine Registry mit einem Werkzeug pro Symbol-Art; aktiv ist `Line`.
    pub fn new() -> Self {
        let mut registry = Self {
            tools: IndexMap::new(),
            active: SymbolKind::Line,
        };
        for kind in SymbolKind::ALL {
            registry.register(DrawTool::new(kind));
        }
        registry
    }

    /// Registriert (oder ersetzt) das Werkzeug seiner Symbol-Art.
    pub fn register(&mut self, tool: DrawTool) {
        self.tools.insert(tool.kind(), tool);
    }

    /// Anzahl registrierter Werkzeuge.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Symbol-Arten in Registrierungs-Reihenfolge.
    pub fn kinds(&self) -> impl Iterator<Item = SymbolKind> + '_ {
        self.tools.keys().copied()
    }

    /// Aktiviert ein Werkzeug; das bisherige wird zurückgesetzt.
    /// Gibt `false` zurück, wenn `kind` nicht registriert ist.
    pub fn select(&mut self, kind: SymbolKind) -> bool {
        if !self.tools.contains_key(&kind) {
            return false;
        }
        if let Some(old) = self.tools.get_mut(&self.active) {
            old.reset();
        }
        if self.active != kind {
            log::debug!("Werkzeug gewechselt: {} -> {}", self.active, kind);
        }
        self.active = kind;
        true
    }

    /// Symbol-Art des aktiven Werkzeugs.
    pub fn active_kind(&self) -> SymbolKind {
        self.active
    }

    /// Referenz auf das aktive Werkzeug.
    pub fn active(&self) -> Option<&DrawTool> {
        self.tools.get(&self.active)
    }

    /// Mutable Referenz auf das aktive Werkzeug.
    pub fn active_mut(&mut self) -> Option<&mut DrawTool> {
        self.tools.get_mut(&self.active)
    }

    /// Setzt alle Werkzeuge zurück.
    pub fn reset(&mut self) {
        for tool in self.tools.values_mut() {
            tool.reset();
        }
    }
}
