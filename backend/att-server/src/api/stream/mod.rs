pub mod stream;
pub mod stream_stats_response;
