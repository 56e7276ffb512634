use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_RECENT_LIMIT, DEFAULT_RECENT_LIMIT,
    MAX_MAX_RECENT_LIMIT,
};

use serde::Deserialize;

/// Attendance history query limits
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AttendanceConfig {
    pub default_recent_limit: i64,
    pub max_recent_limit: i64,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            default_recent_limit: DEFAULT_RECENT_LIMIT,
            max_recent_limit: DEFAULT_MAX_RECENT_LIMIT,
        }
    }
}

impl AttendanceConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_recent_limit < 1 || self.max_recent_limit > MAX_MAX_RECENT_LIMIT {
            return Err(ConfigError::config(format!(
                "attendance.max_recent_limit must be 1-{}, got {}",
                MAX_MAX_RECENT_LIMIT, self.max_recent_limit
            )));
        }

        if self.default_recent_limit < 1 || self.default_recent_limit > self.max_recent_limit {
            return Err(ConfigError::config(format!(
                "attendance.default_recent_limit must be 1-{}, got {}",
                self.max_recent_limit, self.default_recent_limit
            )));
        }

        Ok(())
    }

    /// Resolve a requested `limit` query value.
    ///
    /// Missing, unparseable or non-positive values fall back to the default;
    /// anything above the maximum is capped.
    pub fn resolve_limit(&self, requested: Option<&str>) -> i64 {
        match requested.and_then(|s| s.trim().parse::<i64>().ok()) {
            Some(limit) if limit >= 1 => limit.min(self.max_recent_limit),
            _ => self.default_recent_limit,
        }
    }
}
