pub mod post_stats;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Database error: {0}")]
    DbErr(String),
}
