//! Geo-Plotting Library.
//! Prozedurale Geometrie für taktische Kartensymbole plus Zeichen-Session
//! mit Werkzeug-Registry und Undo/Redo.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{generate, DrawingSession, SessionEvent, SymbolContext, ToolRegistry};
pub use core::{
    GenerateResult, Geodesy, GeometryError, HaversineGeodesy, Outline, PlacedShape, ShapeId,
    ShapeLayer, SymbolKind,
};
pub use shared::PlottingOptions;
