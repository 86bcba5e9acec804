pub mod board;

pub use board::{
    BoardResponse, ColumnInfo, EditTaskRequest, MoveResponse, MoveTaskRequest, MutationResponse,
};
