pub mod board;
pub mod column;
pub mod id;
pub mod reorder;
pub mod store;
pub mod task;

pub use board::{Board, MoveTarget};
pub use column::Column;
pub use id::{ColumnId, TaskId};
pub use store::BoardStore;
pub use task::Task;
