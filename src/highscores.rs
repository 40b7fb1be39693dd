//! Best score across sessions
//!
//! A single integer under one storage key. Anything missing or unparseable
//! reads as 0; failed writes are logged and otherwise ignored.

use crate::persistence::Storage;

/// Best score tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "highScore";

    pub fn new(best: u64) -> Self {
        Self { best }
    }

    /// Read the persisted best score
    pub fn load(storage: &dyn Storage) -> Self {
        let best = storage
            .get(Self::STORAGE_KEY)
            .and_then(|raw| parse_score(&raw))
            .unwrap_or(0);
        log::info!("Loaded best score {}", best);
        Self { best }
    }

    /// Record a finished run; returns true (and persists) if it is a new best
    pub fn submit(&mut self, score: u64, storage: &mut dyn Storage) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        self.save(storage);
        true
    }

    /// Best-effort write
    pub fn save(&self, storage: &mut dyn Storage) {
        match storage.set(Self::STORAGE_KEY, &self.best.to_string()) {
            Ok(()) => log::info!("Best score saved ({})", self.best),
            Err(e) => log::warn!("Could not save best score: {e:#}"),
        }
    }
}

/// Leading integer digits, like `parseInt`: "123.7" -> 123, "abc" -> None
fn parse_score(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let digits: &str = trimmed
        .split(|c: char| !c.is_ascii_digit())
        .next()
        .unwrap_or("");
    digits.parse().ok()
}
