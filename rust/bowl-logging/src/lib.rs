//! bowl-logging: append-only NDJSON score events for game post-mortems.
//!
//! Each appended event is exactly one JSON object followed by a newline,
//! so a crashed writer leaves at most one partial trailing line.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use bowl_core::{frame_scores, InvalidGameError, FRAMES_PER_GAME};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Event schema version, bumped on any field change.
pub const EVENT_SCHEMA_VERSION: u32 = 1;

/// Ruleset identifier stamped on every event.
pub const RULESET_ID: &str = "tenpin_v1";

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

#[derive(Debug, Error)]
pub enum EventLogError {
    #[error("event log I/O: {0}")]
    Io(#[from] io::Error),
    #[error("event serialization: {0}")]
    Json(#[from] serde_json::Error),
}

/// A game that scored cleanly.
#[derive(Debug, Clone, Serialize)]
pub struct GameScoredEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub schema_version: u32,
    pub ruleset_id: &'static str,

    pub rolls: Vec<u8>,
    pub frame_scores: [u8; FRAMES_PER_GAME],
    pub running_totals: [u16; FRAMES_PER_GAME],
    pub total: u16,
}

impl GameScoredEventV1 {
    /// Score `rolls` and capture the full scoreboard in one event.
    pub fn from_rolls(rolls: &[u8]) -> Result<Self, InvalidGameError> {
        let per_frame = frame_scores(rolls)?;

        let mut running_totals = [0u16; FRAMES_PER_GAME];
        let mut sum = 0u16;
        for (slot, &s) in running_totals.iter_mut().zip(&per_frame) {
            sum += u16::from(s);
            *slot = sum;
        }

        Ok(Self {
            event: "game_scored",
            ts_ms: now_ms(),
            schema_version: EVENT_SCHEMA_VERSION,
            ruleset_id: RULESET_ID,
            rolls: rolls.to_vec(),
            frame_scores: per_frame,
            running_totals,
            total: sum,
        })
    }
}

/// A roll sequence the scorer refused.
#[derive(Debug, Clone, Serialize)]
pub struct GameRejectedEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub schema_version: u32,
    pub ruleset_id: &'static str,

    pub rolls: Vec<u8>,
    pub reason: String,
}

impl GameRejectedEventV1 {
    pub fn from_error(rolls: &[u8], err: &InvalidGameError) -> Self {
        Self {
            event: "game_rejected",
            ts_ms: now_ms(),
            schema_version: EVENT_SCHEMA_VERSION,
            ruleset_id: RULESET_ID,
            rolls: rolls.to_vec(),
            reason: err.to_string(),
        }
    }
}

/// Append-only NDJSON event log.
pub struct EventLog {
    out: BufWriter<File>,
    since_flush: u64,
    flush_every: u64,
}

impl EventLog {
    /// Open for append, creating the file if needed.
    /// `flush_every = 0` disables periodic flushing.
    pub fn open_append(path: impl AsRef<Path>, flush_every: u64) -> Result<Self, EventLogError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            out: BufWriter::new(f),
            since_flush: 0,
            flush_every,
        })
    }

    pub fn append<E: Serialize>(&mut self, event: &E) -> Result<(), EventLogError> {
        let mut line = serde_json::to_vec(event)?;
        line.push(b'\n');
        self.out.write_all(&line)?;
        self.since_flush += 1;
        if self.flush_every > 0 && self.since_flush >= self.flush_every {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), EventLogError> {
        self.out.flush()?;
        self.since_flush = 0;
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Where and how the event log is written.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Path of the NDJSON events file.
    pub events_path: String,
    /// Flush after every N appended lines (0 disables).
    #[serde(default = "default_flush_every")]
    pub flush_every: u64,
}

fn default_flush_every() -> u64 {
    100
}

impl LogConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Open the configured event log.
    pub fn open(&self) -> Result<EventLog, EventLogError> {
        EventLog::open_append(&self.events_path, self.flush_every)
    }
}
