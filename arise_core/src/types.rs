//! Core domain types for the Arise training system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercise templates, categories, and measures
//! - Generated missions and their exercise instances
//! - The user aggregate (stats, favorites, login history)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

// ============================================================================
// Exercise Types
// ============================================================================

/// Semantic category of an exercise
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Core,
    UpperBody,
    LowerBody,
    Cardio,
}

/// Exercise names matched into the Core category regardless of wording
const CORE_KEYWORDS: [&str; 5] = ["plank", "crunch", "v-up", "l-sit", "flag"];

impl Category {
    /// All categories, in the order a mission draws from them
    pub const ALL: [Category; 4] = [
        Category::Core,
        Category::UpperBody,
        Category::LowerBody,
        Category::Cardio,
    ];

    /// Human-readable label (also the keyword used for name matching)
    pub fn label(&self) -> &'static str {
        match self {
            Category::Core => "Core",
            Category::UpperBody => "Upper Body",
            Category::LowerBody => "Lower Body",
            Category::Cardio => "Cardio",
        }
    }

    /// Keyword match of an exercise name against this category.
    ///
    /// Catalog entries carry an explicit `category` tag; this matcher exists
    /// so the tags can be validated against the naming convention (every name
    /// hit by a core keyword must be tagged `Core`).
    pub fn matches(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        if lower.contains(&self.label().to_lowercase()) {
            return true;
        }
        *self == Category::Core && CORE_KEYWORDS.iter().any(|kw| lower.contains(kw))
    }
}

/// How an exercise is counted: repetitions, held seconds, or covered miles
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum Measure {
    Reps { count: u32 },
    Seconds { count: u32 },
    Miles { distance: f64 },
}

impl Measure {
    /// The rep/second count, if this measure has one (distance work does not)
    pub fn count(&self) -> Option<u32> {
        match self {
            Measure::Reps { count } | Measure::Seconds { count } => Some(*count),
            Measure::Miles { .. } => None,
        }
    }

    /// The distance in miles, if this measure has one
    pub fn miles(&self) -> Option<f64> {
        match self {
            Measure::Miles { distance } => Some(*distance),
            _ => None,
        }
    }

    /// Scale the base measure for a target level.
    ///
    /// Counts grow by `floor(base + progression * (level - 1))`; distances
    /// grow linearly and are kept to two decimals.
    pub fn progressed(&self, progression: f64, level: u32) -> Measure {
        let steps = level.saturating_sub(1) as f64;
        match self {
            Measure::Reps { count } => Measure::Reps {
                count: (*count as f64 + progression * steps).floor() as u32,
            },
            Measure::Seconds { count } => Measure::Seconds {
                count: (*count as f64 + progression * steps).floor() as u32,
            },
            Measure::Miles { distance } => Measure::Miles {
                distance: ((distance + progression * steps) * 100.0).round() / 100.0,
            },
        }
    }
}

/// An exercise template from the catalog
#[derive(Clone, Debug, PartialEq)]
pub struct ExerciseTemplate {
    pub name: String,
    pub category: Category,
    pub measure: Measure,
    pub sets: Option<u32>,
    pub progression: f64,
}

// ============================================================================
// Tier and Mission Types
// ============================================================================

/// Difficulty tier of the exercise pools
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

impl Tier {
    /// Tier for a user level: beginner for 1-4, intermediate for 5-9,
    /// advanced from 10 up (`min(level / 5, 2)`)
    pub fn for_level(level: u32) -> Tier {
        match level.max(1) / 5 {
            0 => Tier::Beginner,
            1 => Tier::Intermediate,
            _ => Tier::Advanced,
        }
    }

    /// Numeric difficulty used by the reward formula (0, 1, or 2)
    pub fn difficulty(&self) -> u8 {
        match self {
            Tier::Beginner => 0,
            Tier::Intermediate => 1,
            Tier::Advanced => 2,
        }
    }
}

/// A catalog exercise realized for a mission at a specific level
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MissionExercise {
    pub name: String,
    pub category: Category,
    pub measure: Measure,
    pub sets: Option<u32>,
    pub completed: bool,
}

/// A generated daily mission: six exercises and a fixed experience reward
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Mission {
    /// Unique per generation; a display key, not a durable identity
    pub id: Uuid,
    /// Translation key, resolved by the presentation layer
    pub title_key: String,
    /// Translation key for the motivational description
    pub description_key: String,
    pub exercises: Vec<MissionExercise>,
    pub difficulty: u8,
    pub experience_reward: u64,
    pub completed: bool,
}

// ============================================================================
// User Aggregate
// ============================================================================

/// One completed exercise, as remembered forever in the history log
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub date: DateTime<Utc>,
    pub exercise: String,
    pub reps: Option<u32>,
    pub duration_seconds: Option<u32>,
    pub distance_miles: Option<f64>,
}

/// Aggregate counters and records, owned by the user
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct UserStats {
    pub total_exercises: u64,
    pub total_reps: u64,
    pub total_distance: f64,
    /// Best rep/second count per exercise name
    pub personal_bests: HashMap<String, u32>,
    /// Append-only; never truncated or rewritten
    pub exercise_history: Vec<HistoryEntry>,
}

/// A starred exercise with lightweight performance tracking
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FavoriteExercise {
    pub id: Uuid,
    pub exercise: String,
    pub personal_best: u32,
    pub times_performed: u32,
    pub last_performed: Option<DateTime<Utc>>,
}

/// Snapshot of the user taken at session start
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginHistoryEntry {
    pub id: Uuid,
    pub logged_in_at: DateTime<Utc>,
    pub level_at_login: u32,
    pub experience_at_login: u64,
    pub completed_missions_at_login: u64,
}

/// The root user aggregate.
///
/// All mutations are snapshot-producing: operations take the current value
/// and return a new one, nothing is modified in place.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Display name, 2-30 chars, lookup key within a store
    pub name: String,
    /// Always >= 1, never decreases
    pub level: u32,
    /// Progress toward the next level; below the level threshold after
    /// any reward application
    pub experience: u64,
    pub completed_missions: u64,
    /// Maintained by external logic; the engine never touches it
    pub streak: u32,
    pub stats: UserStats,
    /// At most one entry per exercise name
    pub favorites: Vec<FavoriteExercise>,
    #[serde(default)]
    pub login_history: Vec<LoginHistoryEntry>,
}

// ============================================================================
// Catalog Type
// ============================================================================

/// The three tiered pools of exercise templates
#[derive(Clone, Debug)]
pub struct Catalog {
    pub beginner: Vec<ExerciseTemplate>,
    pub intermediate: Vec<ExerciseTemplate>,
    pub advanced: Vec<ExerciseTemplate>,
}

impl Catalog {
    /// The pool for a tier
    pub fn tier(&self, tier: Tier) -> &[ExerciseTemplate] {
        match tier {
            Tier::Beginner => &self.beginner,
            Tier::Intermediate => &self.intermediate,
            Tier::Advanced => &self.advanced,
        }
    }
}
