//! Application-Layer: Zeichen-Session, Werkzeuge, Events und Undo/Redo.

pub mod events;
pub mod history;
pub mod session;
pub mod tools;

pub use events::SessionEvent;
pub use history::{EditHistory, Snapshot};
pub use session::DrawingSession;
pub use tools::{generate, DrawTool, SymbolContext, ToolAction, ToolRegistry};
