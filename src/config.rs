use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_reply_delay_ms() -> u64 {
    500
}

fn default_lock_drag_threshold() -> f64 {
    100.0
}

/// UI tuning knobs. Transcriptions and chat history are in-memory sample
/// data and are never persisted; this file only shapes how the prototype
/// behaves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Simulated typing delay before the assistant reply, in milliseconds.
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    /// Upward drag distance (in pixels) past which a hold locks.
    #[serde(default = "default_lock_drag_threshold")]
    pub lock_drag_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            lock_drag_threshold: default_lock_drag_threshold(),
        }
    }
}

impl Config {
    /// Directory: ~/.config/voicepad/
    fn dir() -> PathBuf {
        let mut p = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        p.push("voicepad");
        p
    }

    fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load from disk, returning defaults if the file is missing or invalid.
    pub fn load() -> Self {
        let path = Self::path();
        match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let dir = Self::dir();
        fs::create_dir_all(&dir)?;
        let data = serde_json::to_string_pretty(self)?;
        fs::write(Self::path(), data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_prototype_tuning() {
        let config = Config::default();
        assert_eq!(config.reply_delay_ms, 500);
        assert_eq!(config.lock_drag_threshold, 100.0);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.reply_delay_ms, 500);
        assert_eq!(config.lock_drag_threshold, 100.0);
    }

    #[test]
    fn roundtrips_through_json() {
        let config = Config {
            reply_delay_ms: 250,
            lock_drag_threshold: 80.0,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.reply_delay_ms, 250);
        assert_eq!(back.lock_drag_threshold, 80.0);
    }
}
