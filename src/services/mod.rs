pub mod board_service;
pub mod seed_client;

pub use board_service::{shared_board, BoardService, BoardStore, SharedBoard};
pub use seed_client::SeedClient;
