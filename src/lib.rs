//! # Dragboard Core
//!
//! Board state model and drag-and-drop reordering engine for kanban boards.
//!
//! The crate owns the ordered columns and tasks of a board and turns drag
//! lifecycle events into board operations. It renders nothing: a
//! presentation layer forwards user intents and draws the snapshots it gets
//! back.

pub mod config;
pub mod domain;
pub mod drag;
pub mod error;
pub mod runtime;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use config::{Config, DragConfig, Naming};
pub use domain::{Board, BoardStore, Column, ColumnId, MoveTarget, Task, TaskId};
pub use drag::{DragEvent, DragItem, DragResolver, DragState, DropTarget, ItemRef};
pub use error::{DragboardError, Result};
pub use runtime::{spawn_session, SessionHandle};
pub use session::{BoardEvent, BoardSession};
pub use view::{BoardView, DragOverlay};
