//! Progress board backend.
//!
//! Tasks fetched from a remote todo list are spread across four columns
//! (to do, done, in review, backlog) and can be moved, retitled or deleted.
//! State lives in memory only; a restart reloads the seed list.

pub mod api;
pub mod config;
pub mod domain;
pub mod services;
