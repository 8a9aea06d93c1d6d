//! Daily mission generation.
//!
//! A mission bundles six distinct exercises drawn from the tier pool for
//! the user's level: one per category first, then random fillers. Reps are
//! progressed for the level and the experience reward is fixed at
//! generation time.

use crate::types::{Category, ExerciseTemplate};
use crate::{Catalog, Error, Mission, MissionExercise, Result, Tier};
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

/// Every mission holds exactly this many exercises
pub const MISSION_SIZE: usize = 6;

const BASE_REWARD: f64 = 100.0;

/// Title pool; translation keys resolved by the presentation layer
pub const MISSION_TITLE_KEYS: [&str; 5] = [
    "mission.title.daily_training_challenge",
    "mission.title.push_your_limits",
    "mission.title.core_strength_builder",
    "mission.title.endurance_test",
    "mission.title.full_body_circuit",
];

/// Motivational quote pool for mission descriptions
pub const MISSION_QUOTE_KEYS: [&str; 3] = [
    "mission.quote.determination",
    "mission.quote.every_rep",
    "mission.quote.consistency",
];

/// Generate a daily mission for a user level.
///
/// Levels below 1 are treated as level 1. The only failure mode is a
/// catalog whose tier cannot supply six distinct exercises.
pub fn generate_mission<R: Rng + ?Sized>(
    catalog: &Catalog,
    level: u32,
    rng: &mut R,
) -> Result<Mission> {
    let level = level.max(1);
    let tier = Tier::for_level(level);
    let pool = catalog.tier(tier);

    if pool.is_empty() {
        return Err(Error::Catalog(format!("{:?} tier is empty", tier)));
    }

    let mut selected: Vec<MissionExercise> = Vec::with_capacity(MISSION_SIZE);

    // One exercise per category, where the tier offers the category at all
    for category in Category::ALL {
        let candidates: Vec<&ExerciseTemplate> =
            pool.iter().filter(|t| t.category == category).collect();
        if let Some(template) = candidates.choose(rng) {
            selected.push(realize(template, level));
        }
    }

    // Fill to six with distinct picks from the whole pool. The loop is
    // bounded so a starved tier surfaces an error instead of spinning.
    let max_attempts = pool.len() * 10;
    let mut attempts = 0;
    while selected.len() < MISSION_SIZE {
        attempts += 1;
        if attempts > max_attempts {
            return Err(Error::Catalog(format!(
                "{:?} tier cannot supply {} distinct exercises",
                tier, MISSION_SIZE
            )));
        }
        let Some(template) = pool.choose(rng) else {
            return Err(Error::Catalog(format!("{:?} tier is empty", tier)));
        };
        if selected.iter().any(|ex| ex.name == template.name) {
            continue;
        }
        selected.push(realize(template, level));
    }

    selected.truncate(MISSION_SIZE);

    let difficulty = tier.difficulty();
    let level_multiplier = 1.0 + (level - 1) as f64 * 0.1;
    let difficulty_multiplier = 1.0 + difficulty as f64 * 0.5;
    let experience_reward = (BASE_REWARD * level_multiplier * difficulty_multiplier).floor() as u64;

    let title_key = MISSION_TITLE_KEYS[rng.gen_range(0..MISSION_TITLE_KEYS.len())];
    let description_key = MISSION_QUOTE_KEYS[rng.gen_range(0..MISSION_QUOTE_KEYS.len())];

    let mission = Mission {
        id: Uuid::new_v4(),
        title_key: title_key.into(),
        description_key: description_key.into(),
        exercises: selected,
        difficulty,
        experience_reward,
        completed: false,
    };

    tracing::info!(
        "Generated {:?} mission for level {}: {} exercises, {} XP",
        tier,
        level,
        mission.exercises.len(),
        mission.experience_reward
    );

    Ok(mission)
}

fn realize(template: &ExerciseTemplate, level: u32) -> MissionExercise {
    MissionExercise {
        name: template.name.clone(),
        category: template.category,
        measure: template.measure.progressed(template.progression, level),
        sets: template.sets,
        completed: false,
    }
}

impl Mission {
    /// Return a snapshot with the indexed exercise marked complete.
    ///
    /// An exercise completes exactly once; a second completion, like an
    /// out-of-range index, is a validation error. The mission's own
    /// `completed` flag is recomputed from the exercises.
    pub fn complete_exercise(&self, index: usize) -> Result<Mission> {
        let Some(exercise) = self.exercises.get(index) else {
            return Err(Error::Validation(format!(
                "mission has no exercise at index {}",
                index
            )));
        };
        if exercise.completed {
            return Err(Error::Validation(format!(
                "'{}' is already completed",
                exercise.name
            )));
        }

        let exercises: Vec<MissionExercise> = self
            .exercises
            .iter()
            .enumerate()
            .map(|(i, ex)| {
                if i == index {
                    MissionExercise {
                        completed: true,
                        ..ex.clone()
                    }
                } else {
                    ex.clone()
                }
            })
            .collect();
        let completed = exercises.iter().all(|ex| ex.completed);

        Ok(Mission {
            exercises,
            completed,
            ..self.clone()
        })
    }
}
