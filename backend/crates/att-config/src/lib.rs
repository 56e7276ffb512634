mod attendance_config;
mod config;
mod database_config;
mod error;
mod face_api_config;
mod log_level;
mod logging_config;
mod server_config;
mod stream_config;
mod upload_config;

#[cfg(test)]
mod tests;

pub use attendance_config::AttendanceConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use face_api_config::FaceApiConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use stream_config::StreamConfig;
pub use upload_config::UploadConfig;

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "ATT_CONFIG_DIR";
/// Config directory used when `ATT_CONFIG_DIR` is unset (relative to cwd)
pub const DEFAULT_CONFIG_DIR: &str = ".attendance";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 10;
const MIN_SHUTDOWN_TIMEOUT_SECS: u64 = 1;
const MAX_SHUTDOWN_TIMEOUT_SECS: u64 = 300;

const DEFAULT_DATABASE_PATH: &str = "data/attendance.db";

const DEFAULT_FACE_API_URL: &str = "http://localhost:5001";
const DEFAULT_FACE_API_TIMEOUT: &str = "30s";
const MIN_FACE_API_TIMEOUT_SECS: u64 = 1;
const MAX_FACE_API_TIMEOUT_SECS: u64 = 300;

const DEFAULT_MAX_UPLOAD_SIZE: usize = 5 * 1024 * 1024;
const DEFAULT_MAX_MEMORY: usize = 10 * 1024 * 1024;

const DEFAULT_RECENT_LIMIT: i64 = 50;
const DEFAULT_MAX_RECENT_LIMIT: i64 = 1000;
const MAX_MAX_RECENT_LIMIT: i64 = 100_000;

const DEFAULT_SUBSCRIBER_BUFFER: usize = 10;
const MIN_SUBSCRIBER_BUFFER: usize = 1;
const MAX_SUBSCRIBER_BUFFER: usize = 10_000;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 30;
const MIN_SWEEP_INTERVAL_SECS: u64 = 1;
const MAX_SWEEP_INTERVAL_SECS: u64 = 3600;
const DEFAULT_KEEP_ALIVE_SECS: u64 = 15;
const MIN_KEEP_ALIVE_SECS: u64 = 1;
const MAX_KEEP_ALIVE_SECS: u64 = 300;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
