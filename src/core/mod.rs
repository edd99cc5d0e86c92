//! Core-Domänentypen: Umrisse, Symbol-Arten, Symbol-Ebene, Geodäsie, Fehler.

pub mod error;
pub mod geodesy;
pub mod outline;
pub mod shape_layer;
pub mod symbol_kind;

pub use error::{GenerateResult, GeometryError};
pub use geodesy::{Geodesy, HaversineGeodesy};
pub use outline::Outline;
pub use shape_layer::{PlacedShape, ShapeId, ShapeLayer};
pub use symbol_kind::SymbolKind;
