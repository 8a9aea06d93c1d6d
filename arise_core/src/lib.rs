#![forbid(unsafe_code)]

//! Core domain model and game logic for the Arise fitness system.
//!
//! This crate provides:
//! - Domain types (users, missions, exercises, stats, favorites)
//! - The tiered exercise catalog
//! - Mission generation and the completion engine
//! - Level progression and achievements
//! - Persistence (user store, CSV export) and configuration

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod mission;
pub mod progression;
pub mod stats;
pub mod favorites;
pub mod achievements;
pub mod profile;
pub mod engine;
pub mod store;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, default_catalog};
pub use config::Config;
pub use mission::{generate_mission, MISSION_SIZE};
pub use progression::{apply_reward, required_exp};
pub use stats::record_completion;
pub use favorites::{record_favorite_performance, remove_favorite, toggle_favorite};
pub use achievements::{check_achievements, Achievement, AchievementProgress, ACHIEVEMENTS};
pub use engine::{complete_exercise, CompletionOutcome};
pub use store::UserStore;
pub use export::write_history_csv;
