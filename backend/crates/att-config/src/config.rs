use crate::{
    AttendanceConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, FaceApiConfig, LoggingConfig, ServerConfig, StreamConfig,
    UploadConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub face_api: FaceApiConfig,
    pub upload: UploadConfig,
    pub attendance: AttendanceConfig,
    pub stream: StreamConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Load `.env` from the working directory if present
    /// 2. Check for ATT_CONFIG_DIR env var, else use ./.attendance/
    /// 3. Auto-create config directory if it doesn't exist
    /// 4. Load config.toml if it exists, else use defaults
    /// 5. Apply ATT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        // A missing .env is the normal case.
        dotenvy::dotenv().ok();

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ATT_CONFIG_DIR env var > ./.attendance/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.face_api.validate()?;
        self.upload.validate()?;
        self.attendance.validate()?;
        self.stream.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get absolute path to the log directory.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.logging.dir))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (shutdown timeout {}s)",
            self.server.host, self.server.port, self.server.shutdown_timeout_secs
        );
        info!("  database: {}", self.database.path);
        info!(
            "  face_api: {} (timeout {})",
            self.face_api.url, self.face_api.timeout
        );
        info!(
            "  upload: max_upload_size={}, max_memory={}",
            self.upload.max_upload_size, self.upload.max_memory
        );
        info!(
            "  attendance: recent limit default={}, max={}",
            self.attendance.default_recent_limit, self.attendance.max_recent_limit
        );
        info!(
            "  stream: buffer={}, sweep={}s, keep_alive={}s",
            self.stream.subscriber_buffer,
            self.stream.sweep_interval_secs,
            self.stream.keep_alive_secs
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("ATT_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("ATT_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "ATT_SERVER_SHUTDOWN_TIMEOUT_SECS",
            &mut self.server.shutdown_timeout_secs,
        );

        // Database
        Self::apply_env_string("ATT_DATABASE_PATH", &mut self.database.path);

        // Face API
        Self::apply_env_string("ATT_FACE_API_URL", &mut self.face_api.url);
        Self::apply_env_string("ATT_FACE_API_TIMEOUT", &mut self.face_api.timeout);

        // Upload
        Self::apply_env_parse(
            "ATT_UPLOAD_MAX_UPLOAD_SIZE",
            &mut self.upload.max_upload_size,
        );
        Self::apply_env_parse("ATT_UPLOAD_MAX_MEMORY", &mut self.upload.max_memory);

        // Attendance
        Self::apply_env_parse(
            "ATT_ATTENDANCE_DEFAULT_RECENT_LIMIT",
            &mut self.attendance.default_recent_limit,
        );
        Self::apply_env_parse(
            "ATT_ATTENDANCE_MAX_RECENT_LIMIT",
            &mut self.attendance.max_recent_limit,
        );

        // Stream
        Self::apply_env_parse(
            "ATT_STREAM_SUBSCRIBER_BUFFER",
            &mut self.stream.subscriber_buffer,
        );
        Self::apply_env_parse(
            "ATT_STREAM_SWEEP_INTERVAL_SECS",
            &mut self.stream.sweep_interval_secs,
        );
        Self::apply_env_parse(
            "ATT_STREAM_KEEP_ALIVE_SECS",
            &mut self.stream.keep_alive_secs,
        );

        // Logging
        Self::apply_env_parse("ATT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ATT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ATT_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the current setting untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
