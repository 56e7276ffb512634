pub mod attendance;
pub mod error;
pub mod faces;
pub mod multipart;
pub mod stream;
