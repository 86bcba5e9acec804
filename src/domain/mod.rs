pub mod board;
pub mod column;
pub mod drag;
pub mod error;
pub mod seed;
pub mod task;

pub use board::{Board, BoardSnapshot, MoveOutcome};
pub use column::Column;
pub use drag::{DragEvent, DragMove, DragRejection, DropLocation};
pub use error::{BoardError, SeedError};
pub use seed::SeedStatus;
pub use task::{Task, TaskId};
