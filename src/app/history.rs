use crate::core::ShapeLayer;
use std::sync::Arc;

/// Snapshot der Symbol-Ebene für Undo/Redo.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der eigentliche Klon der Ebene passiert erst beim nächsten `Arc::make_mut()`.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Symbol-Ebene zum Zeitpunkt des Snapshots
    pub layer: Arc<ShapeLayer>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone.
    pub fn from_layer(layer: &Arc<ShapeLayer>) -> Self {
        Self {
            layer: Arc::clone(layer),
        }
    }

    /// Anzahl der Symbole im Snapshot.
    pub fn shape_count(&self) -> usize {
        self.layer.shape_count()
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Legt einen Snapshot auf den Undo-Stack und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Holt den letzten Undo-Eintrag und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Holt den letzten Redo-Eintrag und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outline, SymbolKind};
    use glam::DVec2;

    fn make_snapshot_with_shape_count(count: usize) -> Snapshot {
        let mut layer = ShapeLayer::new();
        for i in 0..count {
            let f = i as f64;
            layer.add_shape(
                SymbolKind::Line,
                Outline::LineString(vec![DVec2::new(f, 0.0), DVec2::new(f, 1.0)]),
            );
        }
        Snapshot::from_layer(&Arc::new(layer))
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_shape_count(2));

        let restored = history
            .pop_undo_with_current(make_snapshot_with_shape_count(5))
            .expect("undo vorhanden");

        assert_eq!(restored.shape_count(), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_shape_count(2));
        let _restored = history.pop_undo_with_current(make_snapshot_with_shape_count(5));

        let redone = history
            .pop_redo_with_current(make_snapshot_with_shape_count(2))
            .expect("redo vorhanden");

        assert_eq!(redone.shape_count(), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_shape_count(1));
        let _restored = history.pop_undo_with_current(make_snapshot_with_shape_count(3));
        assert!(history.can_redo());

        history.record_snapshot(make_snapshot_with_shape_count(7));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(make_snapshot_with_shape_count(i));
        }

        let mut undo_count = 0;
        let mut last = 0;
        while history.can_undo() {
            let snap = history.pop_undo_with_current(make_snapshot_with_shape_count(99));
            last = snap.map(|s| s.shape_count()).unwrap_or_default();
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
        // Die ältesten Einträge (1, 2) wurden verworfen
        assert_eq!(last, 3);
    }

    #[test]
    fn zero_depth_records_nothing() {
        let mut history = EditHistory::new_with_capacity(0);
        history.record_snapshot(make_snapshot_with_shape_count(1));
        assert!(!history.can_undo());
    }

    #[test]
    fn snapshot_shares_layer_until_mutation() {
        let layer = Arc::new(ShapeLayer::new());
        let snap = Snapshot::from_layer(&layer);
        assert!(Arc::ptr_eq(&snap.layer, &layer));

        let mut live = Arc::clone(&layer);
        Arc::make_mut(&mut live).add_shape(
            SymbolKind::Line,
            Outline::LineString(vec![DVec2::ZERO, DVec2::ONE]),
        );
        assert_eq!(snap.shape_count(), 0);
        assert_eq!(live.shape_count(), 1);
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut history = EditHistory::new_with_capacity(10);
        assert!(history.pop_undo_with_current(make_snapshot_with_shape_count(1)).is_none());
        assert!(history.pop_redo_with_current(make_snapshot_with_shape_count(1)).is_none());
    }
}
