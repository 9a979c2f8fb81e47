use crate::{FavoritesSet, Level, Source};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceCounts {
    pub github: usize,
    pub paper: usize,
    pub dataset: usize,
}

impl SourceCounts {
    pub fn total(&self) -> usize {
        self.github + self.paper + self.dataset
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelCounts {
    pub easy: usize,
    pub intermediate: usize,
    pub advanced: usize,
}

impl LevelCounts {
    pub fn total(&self) -> usize {
        self.easy + self.intermediate + self.advanced
    }
}

/// Summary over the favorites set. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnalyticsSnapshot {
    pub total_favorites: usize,
    pub by_source: SourceCounts,
    pub by_level: LevelCounts,
    /// Mean novelty rounded to one decimal; 0 for an empty set.
    pub avg_novelty: f64,
}

/// Recomputes the snapshot from scratch.
///
/// Items with an unrecognised source or level are skipped by the bucket
/// counts but still contribute to the total and the novelty mean.
pub fn summarize(favorites: &FavoritesSet) -> AnalyticsSnapshot {
    let mut by_source = SourceCounts::default();
    let mut by_level = LevelCounts::default();
    let mut novelty_sum = 0.0;

    for item in favorites.items() {
        match item.source {
            Source::Github => by_source.github += 1,
            Source::Paper => by_source.paper += 1,
            Source::Dataset => by_source.dataset += 1,
            Source::Other(_) => {}
        }
        match item.level {
            Level::Easy => by_level.easy += 1,
            Level::Intermediate => by_level.intermediate += 1,
            Level::Advanced => by_level.advanced += 1,
            Level::Other(_) => {}
        }
        novelty_sum += item.novelty_score;
    }

    let total_favorites = favorites.len();
    let avg_novelty = if total_favorites == 0 {
        0.0
    } else {
        round_one_decimal(novelty_sum / total_favorites as f64)
    };

    AnalyticsSnapshot {
        total_favorites,
        by_source,
        by_level,
        avg_novelty,
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
