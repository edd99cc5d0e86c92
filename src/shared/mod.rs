//! Layer-neutrale Geometrie-Bausteine und Konfiguration.
//!
//! Alle Funktionen hier sind rein: gleiche Eingabe ergibt gleiche Ausgabe,
//! kein geteilter Zustand. Genutzt von den Symbol-Generatoren in `app::tools`.

pub mod arc_geometry;
pub mod bezier_geometry;
pub mod cardinal_geometry;
pub mod options;
pub mod vector_geometry;

pub use arc_geometry::{calculate_angle, calculate_arc, ArcDirection};
pub use bezier_geometry::{create_bezier, create_bezier2, create_bezier3, BezierSampling};
pub use cardinal_geometry::{create_close_cardinal, CardinalParams};
pub use options::PlottingOptions;
pub use vector_geometry::{
    angular_bisector, arrow_lines, calculate_intersection, calculate_vector,
    intersection_from_two_corners, VectorPair,
};
