pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{open_memory_pool, open_pool};
pub use error::{DbError, Result};
pub use repositories::attendance_repository::AttendanceRepository;
