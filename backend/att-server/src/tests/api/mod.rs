mod error;
mod responses;
