pub mod history_repository;

#[cfg(test)]
pub use history_repository::in_memory;
pub use history_repository::{HistoryRepository, PgHistoryRepository};
