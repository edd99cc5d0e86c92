//! Zeichen-Session: verbindet Werkzeuge, Symbol-Ebene und Undo/Redo.

use super::history::{EditHistory, Snapshot};
use super::tools::symbols::basic;
use super::tools::{generate, SymbolContext, ToolAction, ToolRegistry};
use super::SessionEvent;
use crate::core::{Geodesy, HaversineGeodesy, Outline, ShapeLayer, SymbolKind};
use crate::shared::PlottingOptions;
use anyhow::Context;
use glam::DVec2;
use std::sync::Arc;

/// Explizit konstruierter Zeichen-Zustand ohne globale Singletons.
pub struct DrawingSession {
    options: PlottingOptions,
    geodesy: Box<dyn Geodesy>,
    tools: ToolRegistry,
    layer: Arc<ShapeLayer>,
    history: EditHistory,
    preview: Option<Outline>,
}

impl Default for DrawingSession {
    fn default() -> Self {
        Self::new(PlottingOptions::default(), Box::new(HaversineGeodesy))
    }
}

impl DrawingSession {
    /// Erstellt eine leere Session mit den gegebenen Optionen.
    pub fn new(options: PlottingOptions, geodesy: Box<dyn Geodesy>) -> Self {
        let history = EditHistory::new_with_capacity(options.history_depth);
        Self {
            options,
            geodesy,
            tools: ToolRegistry::new(),
            layer: Arc::new(ShapeLayer::new()),
            history,
            preview: None,
        }
    }

    /// Verarbeitet ein Eingabe-Ereignis.
    ///
    /// Fehler entstehen nur bei Klicks, deren Geometrie nicht erzeugt werden
    /// kann; der auslösende Punkt wird dann verworfen.
    pub fn handle_event(&mut self, event: SessionEvent) -> anyhow::Result<()> {
        match event {
            SessionEvent::PointerClick { pos } => self.click(pos)?,
            SessionEvent::PointerMove { pos } => self.update_preview(pos),
            SessionEvent::Cancel => self.reset_stroke(),
            SessionEvent::Undo => self.undo(),
            SessionEvent::Redo => self.redo(),
            SessionEvent::SelectTool(kind) => {
                self.tools.select(kind);
                self.preview = None;
            }
        }
        Ok(())
    }

    /// Aktuelle Symbol-Ebene.
    pub fn layer(&self) -> &ShapeLayer {
        &self.layer
    }

    /// Geteilte Symbol-Ebene (O(1)-Klon).
    pub fn shared_layer(&self) -> Arc<ShapeLayer> {
        Arc::clone(&self.layer)
    }

    /// Vorschau-Umriss für die letzte Zeigerposition.
    pub fn preview(&self) -> Option<&Outline> {
        self.preview.as_ref()
    }

    /// Symbol-Art des aktiven Werkzeugs.
    pub fn active_kind(&self) -> SymbolKind {
        self.tools.active_kind()
    }

    /// Kontrollpunkte des laufenden Strichs.
    pub fn active_points(&self) -> &[DVec2] {
        self.tools
            .active()
            .map(|tool| tool.control_points())
            .unwrap_or_default()
    }

    /// Aktive Optionen.
    pub fn options(&self) -> &PlottingOptions {
        &self.options
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn click(&mut self, pos: DVec2) -> anyhow::Result<()> {
        let Some(tool) = self.tools.active_mut() else {
            return Ok(());
        };
        let kind = tool.kind();
        let action = tool.push_point(pos);
        if action == ToolAction::Ignored {
            log::debug!("{}: Klick ignoriert", kind);
            return Ok(());
        }
        self.preview = None;
        if !tool.can_commit() {
            return Ok(());
        }

        let ctx = SymbolContext {
            options: &self.options,
            geodesy: self.geodesy.as_ref(),
        };
        let outline = match generate(kind, tool.control_points(), &ctx) {
            Ok(Some(outline)) => outline,
            Ok(None) => return Ok(()),
            Err(err) => {
                tool.pop_point();
                log::warn!("{}: Punkt verworfen: {}", kind, err);
                return Err(err).with_context(|| format!("Symbol '{}' nicht erzeugbar", kind));
            }
        };

        match tool.placed() {
            Some(id) if self.layer.contains(id) => {
                Arc::make_mut(&mut self.layer).update_outline(id, outline);
                log::debug!("{} #{} aktualisiert", kind, id);
            }
            _ => {
                self.history.record_snapshot(Snapshot::from_layer(&self.layer));
                let id = Arc::make_mut(&mut self.layer).add_shape(kind, outline);
                tool.set_placed(id);
                log::info!("{} #{} platziert", kind, id);
            }
        }

        if kind == SymbolKind::Rectangle {
            let (width, height) =
                basic::rectangle(tool.control_points()).size_meters(self.geodesy.as_ref());
            log::info!("Rechteck: {:.1} m x {:.1} m", width, height);
        }

        if action == ToolAction::ReadyToFinish {
            tool.reset();
            log::debug!("{}: Strich abgeschlossen", kind);
        }
        Ok(())
    }

    fn update_preview(&mut self, pointer: DVec2) {
        self.preview = None;
        let Some(tool) = self.tools.active() else {
            return;
        };
        if !tool.has_pending_input() {
            return;
        }
        let ctx = SymbolContext {
            options: &self.options,
            geodesy: self.geodesy.as_ref(),
        };
        match generate(tool.kind(), &tool.preview_points(pointer), &ctx) {
            Ok(outline) => self.preview = outline,
            Err(err) => log::debug!("Vorschau verworfen: {}", err),
        }
    }

    fn reset_stroke(&mut self) {
        if let Some(tool) = self.tools.active_mut() {
            tool.reset();
        }
        self.preview = None;
    }

    fn undo(&mut self) {
        let current = Snapshot::from_layer(&self.layer);
        if let Some(prev) = self.history.pop_undo_with_current(current) {
            self.layer = prev.layer;
            self.reset_stroke();
            log::info!("Undo: {} Symbole", self.layer.shape_count());
        }
    }

    fn redo(&mut self) {
        let current = Snapshot::from_layer(&self.layer);
        if let Some(next) = self.history.pop_redo_with_current(current) {
            self.layer = next.layer;
            self.reset_stroke();
            log::info!("Redo: {} Symbole", self.layer.shape_count());
        }
    }
}
