pub mod attendance;
pub mod limit_query;
pub mod records_response;
pub mod stats_response;
