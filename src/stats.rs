//! Aggregate play statistics and their persistence.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::{debug, warn};

use crate::{db::records, session::MAX_ATTEMPTS};

/// Key of the stored statistics record.
pub const STATS_KEY: &str = "wordleStats";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    pub guess_distribution: [u32; MAX_ATTEMPTS],
    #[serde(default)]
    pub last_played_date: Option<NaiveDate>,
}

impl GameStats {
    /// Folds one finished game into the totals.
    ///
    /// # Panics
    /// Panics if `attempts_used` is outside `1..=6`.
    pub fn record_outcome(&self, won: bool, attempts_used: usize) -> GameStats {
        assert!(
            (1..=MAX_ATTEMPTS).contains(&attempts_used),
            "attempts_used must be within 1..={MAX_ATTEMPTS}, got {attempts_used}"
        );

        // Counters saturate; a record at the limit stays consistent.
        let mut next = self.clone();
        if won && next.games_won == u32::MAX {
            return next;
        }
        next.games_played = next.games_played.saturating_add(1);

        if won {
            next.games_won += 1;
            next.current_streak = next.current_streak.saturating_add(1);
            next.max_streak = next.max_streak.max(next.current_streak);
            let bucket = &mut next.guess_distribution[attempts_used - 1];
            *bucket = bucket.saturating_add(1);
        } else {
            next.current_streak = 0;
        }

        next
    }

    pub fn with_last_played(mut self, date: NaiveDate) -> GameStats {
        self.last_played_date = Some(date);
        self
    }

    /// True when the counters agree with each other.
    pub fn is_consistent(&self) -> bool {
        let distributed: u64 = self.guess_distribution.iter().map(|&n| u64::from(n)).sum();

        self.games_won <= self.games_played
            && distributed == u64::from(self.games_won)
            && self.current_streak <= self.max_streak
    }

    /// Rounded share of games won, 0 before the first game.
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (f64::from(self.games_won) * 100.0 / f64::from(self.games_played)).round() as u32
    }

    /// Bar length per distribution bucket, scaled to `width` for the
    /// largest bucket. Non-empty buckets are at least one cell wide.
    pub fn distribution_bars(&self, width: usize) -> [usize; MAX_ATTEMPTS] {
        let max = self.guess_distribution.iter().copied().max().unwrap_or(0);
        let mut bars = [0usize; MAX_ATTEMPTS];
        if max == 0 {
            return bars;
        }

        for (bar, &count) in bars.iter_mut().zip(self.guess_distribution.iter()) {
            if count > 0 {
                *bar = ((count as usize * width) / max as usize).max(1);
            }
        }
        bars
    }
}

/// Reads and writes the statistics record through the record table.
#[derive(Debug, Clone)]
pub struct StatsStore {
    pool: SqlitePool,
    key: String,
}

impl StatsStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_key(pool, STATS_KEY)
    }

    pub fn with_key(pool: SqlitePool, key: impl Into<String>) -> Self {
        Self {
            pool,
            key: key.into(),
        }
    }

    /// Loads stored stats. Missing, unreadable or inconsistent records all
    /// come back as the default.
    pub async fn load(&self) -> GameStats {
        let raw = match records::get_record(&self.pool, &self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored stats under {}, starting fresh", self.key);
                return GameStats::default();
            }
            Err(e) => {
                warn!("Failed to read stats: {:#}", e);
                return GameStats::default();
            }
        };

        match serde_json::from_str::<GameStats>(&raw) {
            Ok(stats) if stats.is_consistent() => stats,
            Ok(stats) => {
                warn!("Discarding inconsistent stats record: {:?}", stats);
                GameStats::default()
            }
            Err(e) => {
                warn!("Discarding malformed stats record: {}", e);
                GameStats::default()
            }
        }
    }

    pub async fn save(&self, stats: &GameStats) -> Result<()> {
        let value = serde_json::to_string(stats).context("Failed to serialize stats")?;
        records::put_record(&self.pool, &self.key, &value)
            .await
            .context("Failed to save stats")
    }

    /// Removes the stored record; returns whether there was one.
    pub async fn clear(&self) -> Result<bool> {
        records::delete_record(&self.pool, &self.key)
            .await
            .context("Failed to clear stats")
    }
}
