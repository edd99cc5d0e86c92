//! Kontrollpunkt-Sammler für eine Symbol-Art.

use super::ToolAction;
use crate::core::{ShapeId, SymbolKind};
use glam::DVec2;

/// Zustand eines Zeichenwerkzeugs: gesetzte Punkte und das zugehörige Symbol.
#[derive(Debug, Clone)]
pub struct DrawTool {
    kind: SymbolKind,
    control_points: Vec<DVec2>,
    placed: Option<ShapeId>,
}

impl DrawTool {
    /// Erstellt ein leeres Werkzeug für `kind`.
    pub fn new(kind: SymbolKind) -> Self {
        Self {
            kind,
            control_points: Vec::new(),
            placed: None,
        }
    }

    /// Symbol-Art dieses Werkzeugs.
    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    /// Bisher gesetzte Kontrollpunkte.
    pub fn control_points(&self) -> &[DVec2] {
        &self.control_points
    }

    /// ID des bereits platzierten Symbols dieses Strichs.
    pub fn placed(&self) -> Option<ShapeId> {
        self.placed
    }

    /// Verknüpft den Strich mit einem platzierten Symbol.
    pub fn set_placed(&mut self, id: ShapeId) {
        self.placed = Some(id);
    }

    /// Hängt einen Punkt an. Ein Klick auf den letzten Punkt wird ignoriert.
    pub fn push_point(&mut self, pos: DVec2) -> ToolAction {
        if self.control_points.last() == Some(&pos) {
            return ToolAction::Ignored;
        }
        if self.is_complete() {
            return ToolAction::Ignored;
        }
        self.control_points.push(pos);
        if self.is_complete() {
            ToolAction::ReadyToFinish
        } else {
            ToolAction::Continue
        }
    }

    /// Nimmt den zuletzt gesetzten Punkt zurück.
    pub fn pop_point(&mut self) -> Option<DVec2> {
        self.control_points.pop()
    }

    /// Ob genug Punkte für ein platzierbares Symbol vorliegen.
    pub fn can_commit(&self) -> bool {
        self.control_points.len() >= self.kind.min_points()
    }

    /// Ob die Auto-Abschluss-Schwelle erreicht ist.
    pub fn is_complete(&self) -> bool {
        self.kind
            .auto_finish_at()
            .is_some_and(|at| self.control_points.len() >= at)
    }

    /// Hat das Werkzeug angefangene Eingaben?
    pub fn has_pending_input(&self) -> bool {
        !self.control_points.is_empty()
    }

    /// Kontrollpunkte plus Zeigerposition als hypothetischer nächster Punkt.
    pub fn preview_points(&self, pointer: DVec2) -> Vec<DVec2> {
        let mut points = Vec::with_capacity(self.control_points.len() + 1);
        points.extend_from_slice(&self.control_points);
        if points.last() != Some(&pointer) {
            points.push(pointer);
        }
        points
    }

    /// Setzt den Strich zurück (Escape / Tool-Wechsel / Abschluss).
    pub fn reset(&mut self) {
        self.control_points.clear();
        self.placed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_click_is_ignored() {
        let mut tool = DrawTool::new(SymbolKind::Line);
        let p = DVec2::new(1.0, 2.0);
        assert_eq!(tool.push_point(p), ToolAction::Continue);
        assert_eq!(tool.push_point(p), ToolAction::Ignored);
        assert_eq!(tool.control_points().len(), 1);
    }

    #[test]
    fn circle_finishes_after_two_points() {
        let mut tool = DrawTool::new(SymbolKind::Circle);
        assert_eq!(tool.push_point(DVec2::ZERO), ToolAction::Continue);
        assert_eq!(tool.push_point(DVec2::ONE), ToolAction::ReadyToFinish);
        assert!(tool.is_complete());
        assert_eq!(tool.push_point(DVec2::X), ToolAction::Ignored);
    }

    #[test]
    fn line_never_auto_finishes() {
        let mut tool = DrawTool::new(SymbolKind::Line);
        for i in 0..10 {
            assert_eq!(tool.push_point(DVec2::splat(i as f64)), ToolAction::Continue);
        }
        assert!(!tool.is_complete());
        assert!(tool.can_commit());
    }

    #[test]
    fn preview_appends_pointer_once() {
        let mut tool = DrawTool::new(SymbolKind::Lune);
        let a = DVec2::new(0.0, 0.0);
        tool.push_point(a);
        assert_eq!(tool.preview_points(DVec2::X), vec![a, DVec2::X]);
        assert_eq!(tool.preview_points(a), vec![a]);
    }

    #[test]
    fn reset_clears_points_and_link() {
        let mut tool = DrawTool::new(SymbolKind::Polygon);
        tool.push_point(DVec2::ZERO);
        tool.set_placed(7);
        tool.reset();
        assert!(!tool.has_pending_input());
        assert_eq!(tool.placed(), None);
    }
}
