use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_KEEP_ALIVE_SECS, DEFAULT_SUBSCRIBER_BUFFER,
    DEFAULT_SWEEP_INTERVAL_SECS, MAX_KEEP_ALIVE_SECS, MAX_SUBSCRIBER_BUFFER,
    MAX_SWEEP_INTERVAL_SECS, MIN_KEEP_ALIVE_SECS, MIN_SUBSCRIBER_BUFFER, MIN_SWEEP_INTERVAL_SECS,
};

use serde::Deserialize;

/// Server-sent event stream settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Events buffered per subscriber before new events are dropped
    pub subscriber_buffer: usize,
    /// Interval between sweeps of inactive subscribers
    pub sweep_interval_secs: u64,
    /// Interval between keep-alive comments on idle streams
    pub keep_alive_secs: u64,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            subscriber_buffer: DEFAULT_SUBSCRIBER_BUFFER,
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
            keep_alive_secs: DEFAULT_KEEP_ALIVE_SECS,
        }
    }
}

impl StreamConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.subscriber_buffer < MIN_SUBSCRIBER_BUFFER
            || self.subscriber_buffer > MAX_SUBSCRIBER_BUFFER
        {
            return Err(ConfigError::stream(format!(
                "stream.subscriber_buffer must be {}-{}, got {}",
                MIN_SUBSCRIBER_BUFFER, MAX_SUBSCRIBER_BUFFER, self.subscriber_buffer
            )));
        }

        if self.sweep_interval_secs < MIN_SWEEP_INTERVAL_SECS
            || self.sweep_interval_secs > MAX_SWEEP_INTERVAL_SECS
        {
            return Err(ConfigError::stream(format!(
                "stream.sweep_interval_secs must be {}-{}, got {}",
                MIN_SWEEP_INTERVAL_SECS, MAX_SWEEP_INTERVAL_SECS, self.sweep_interval_secs
            )));
        }

        if self.keep_alive_secs < MIN_KEEP_ALIVE_SECS || self.keep_alive_secs > MAX_KEEP_ALIVE_SECS
        {
            return Err(ConfigError::stream(format!(
                "stream.keep_alive_secs must be {}-{}, got {}",
                MIN_KEEP_ALIVE_SECS, MAX_KEEP_ALIVE_SECS, self.keep_alive_secs
            )));
        }

        Ok(())
    }
}
