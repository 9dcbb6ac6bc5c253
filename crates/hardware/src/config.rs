//! Configuration system for the virtual machine.
//!
//! This module defines the configuration structure used to parameterize an engine. It provides:
//! 1. **Defaults:** Baseline machine dimensions (register count, lane count, memory size).
//! 2. **Loading:** JSON deserialization from a string or a file, with per-field defaults.
//! 3. **Validation:** Rejection of machines with a zero-sized dimension or an oversized
//!    register bank or memory.
//!
//! Use `Config::default()` for the standard 32-register, 32-lane, 1 GiB machine.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants;
use crate::common::error::ConfigError;

/// Default configuration constants for the virtual machine.
///
/// These values apply to any field not explicitly set in a JSON configuration.
mod defaults {
    use super::constants;

    /// Number of vector registers.
    pub const REGISTER_COUNT: usize = constants::REGISTER_COUNT;

    /// Number of lanes per register.
    pub const LANE_COUNT: usize = constants::LANE_COUNT;

    /// Size of data memory in bytes (1 GiB).
    ///
    /// The buffer is zero-initialized, so the host only commits pages that are touched.
    pub const MEMORY_SIZE: usize = constants::MEMORY_SIZE;
}

/// Largest allocation, in bytes, a configuration may request for the register bank
/// or for data memory.
pub const MAX_ALLOCATION: usize = isize::MAX as usize;

/// Root configuration structure.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use simdvm_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.register_count, 32);
/// assert_eq!(config.lane_count, 32);
/// assert!(!config.trace_instructions);
/// ```
///
/// Deserializing from JSON; omitted fields take their defaults:
///
/// ```
/// use simdvm_core::config::Config;
///
/// let config = Config::from_json(r#"{ "lane_count": 8, "memory_size": 4096 }"#).unwrap();
/// assert_eq!(config.register_count, 32);
/// assert_eq!(config.lane_count, 8);
/// assert_eq!(config.memory_size, 4096);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of vector registers.
    #[serde(default = "Config::default_register_count")]
    pub register_count: usize,

    /// Number of lanes per register and bits per mask.
    #[serde(default = "Config::default_lane_count")]
    pub lane_count: usize,

    /// Size of the flat data memory in bytes.
    #[serde(default = "Config::default_memory_size")]
    pub memory_size: usize,

    /// Log every executed instruction at `info` level.
    #[serde(default)]
    pub trace_instructions: bool,
}

impl Config {
    const fn default_register_count() -> usize {
        defaults::REGISTER_COUNT
    }

    const fn default_lane_count() -> usize {
        defaults::LANE_COUNT
    }

    const fn default_memory_size() -> usize {
        defaults::MEMORY_SIZE
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks that every machine dimension is non-zero and that the register bank and
    /// memory both fit in a single allocation of at most [`MAX_ALLOCATION`] bytes.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.register_count == 0 {
            return Err(ConfigError::Invalid("register_count must be at least 1"));
        }
        if self.lane_count == 0 {
            return Err(ConfigError::Invalid("lane_count must be at least 1"));
        }
        if self.memory_size == 0 {
            return Err(ConfigError::Invalid("memory_size must be at least 1"));
        }
        let Some(lanes) = self.register_count.checked_mul(self.lane_count) else {
            return Err(ConfigError::Invalid(
                "register_count * lane_count overflows usize",
            ));
        };
        if lanes > MAX_ALLOCATION / size_of::<i32>() {
            return Err(ConfigError::Invalid(
                "register bank exceeds the maximum allocation size",
            ));
        }
        if self.memory_size > MAX_ALLOCATION {
            return Err(ConfigError::Invalid(
                "memory_size exceeds the maximum allocation size",
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            register_count: defaults::REGISTER_COUNT,
            lane_count: defaults::LANE_COUNT,
            memory_size: defaults::MEMORY_SIZE,
            trace_instructions: false,
        }
    }
}
