//! Runtime configuration from `TETRIS_*` environment variables.
//!
//! Missing or unparsable values fall back to the defaults.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::Command;
use crate::engine::LoopConfig;
use crate::term::GlyphTable;
use crate::types::{GAME_OVER_PAUSE_MS, GRAVITY_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub gravity_ms: u64,
    pub game_over_ms: u64,
    pub drop_command: Command,
    pub ascii: bool,
    pub log_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 1,
            gravity_ms: GRAVITY_MS,
            game_over_ms: GAME_OVER_PAUSE_MS,
            drop_command: Command::SoftDrop,
            ascii: false,
            log_path: None,
        }
    }
}

impl Config {
    /// Read the process environment. Without `TETRIS_SEED` the seed comes
    /// from the wall clock.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok(), clock_seed())
    }

    /// Build from an arbitrary key lookup; `default_seed` is used when
    /// `TETRIS_SEED` is absent or invalid.
    pub fn from_lookup<F>(lookup: F, default_seed: u32) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = lookup("TETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(default_seed);

        let gravity_ms = lookup("TETRIS_GRAVITY_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(GRAVITY_MS);

        let game_over_ms = lookup("TETRIS_GAME_OVER_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(GAME_OVER_PAUSE_MS);

        let drop_command = match lookup("TETRIS_DROP")
            .map(|s| s.trim().to_lowercase())
            .as_deref()
        {
            Some("hard") => Command::HardDrop,
            _ => Command::SoftDrop,
        };

        let ascii = lookup("TETRIS_ASCII")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self {
            seed,
            gravity_ms,
            game_over_ms,
            drop_command,
            ascii,
            log_path,
        }
    }

    pub fn loop_config(&self) -> LoopConfig {
        LoopConfig {
            gravity_ms: self.gravity_ms,
            game_over_pause_ms: self.game_over_ms,
            drop_command: self.drop_command,
        }
    }

    pub fn glyphs(&self) -> GlyphTable {
        if self.ascii {
            GlyphTable::serial()
        } else {
            GlyphTable::blocks()
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
