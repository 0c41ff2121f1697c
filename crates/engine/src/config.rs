//! Runtime configuration.
//!
//! Every setting is optional and read from the environment; the defaults
//! reproduce the classic game exactly.
//!
//! - `BREAKOUT_TICK_MS`: fixed sleep per tick (default 50)
//! - `BREAKOUT_SEED`: RNG seed (default: derived from the clock)
//! - `BREAKOUT_MUTE`: set to "1" or "true" to silence tones
//! - `BREAKOUT_LOG_PATH`: append log records to this file
//! - `BREAKOUT_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug`, `trace`

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::LevelFilter;

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub tick_ms: u64,
    pub seed: Option<u32>,
    pub sound: bool,
    pub log_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            seed: None,
            sound: true,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Create from an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_ms = var("BREAKOUT_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.tick_ms);

        let seed = var("BREAKOUT_SEED").and_then(|s| s.trim().parse().ok());

        let muted = var("BREAKOUT_MUTE")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let log_path = var("BREAKOUT_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let log_level = var("BREAKOUT_LOG_LEVEL")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.log_level);

        Self {
            tick_ms,
            seed,
            sound: !muted,
            log_path,
            log_level,
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// The configured seed, or one taken from the system clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(GameConfig::from_vars(|_| None), GameConfig::default());
        assert_eq!(GameConfig::default().tick(), Duration::from_millis(50));
    }

    #[test]
    fn variables_override_defaults() {
        let cfg = GameConfig::from_vars(lookup(&[
            ("BREAKOUT_TICK_MS", "20"),
            ("BREAKOUT_SEED", "99"),
            ("BREAKOUT_MUTE", "TRUE"),
            ("BREAKOUT_LOG_PATH", " /tmp/breakout.log "),
            ("BREAKOUT_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(cfg.tick_ms, 20);
        assert_eq!(cfg.seed, Some(99));
        assert!(!cfg.sound);
        assert_eq!(cfg.log_path, Some(PathBuf::from("/tmp/breakout.log")));
        assert_eq!(cfg.log_level, LevelFilter::Debug);
        assert_eq!(cfg.resolve_seed(), 99);
    }

    #[test]
    fn garbage_values_fall_back() {
        let cfg = GameConfig::from_vars(lookup(&[
            ("BREAKOUT_TICK_MS", "fast"),
            ("BREAKOUT_SEED", "-3"),
            ("BREAKOUT_LOG_PATH", "  "),
            ("BREAKOUT_LOG_LEVEL", "loud"),
        ]));
        assert_eq!(cfg, GameConfig::default());
    }
}
