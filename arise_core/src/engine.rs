//! The exercise-completion fold.
//!
//! The presentation layer holds a `(User, Mission)` pair of snapshots and
//! drives everything through `complete_exercise`: stats accumulate on every
//! completion, and finishing the sixth exercise pays out the mission reward
//! and hands back a freshly generated replacement. The caller serializes
//! completions (one at a time); concurrent folds over stale snapshots
//! would lose updates.

use crate::favorites::record_favorite_performance;
use crate::mission::generate_mission;
use crate::progression::apply_reward;
use crate::stats::record_completion;
use crate::{Catalog, Mission, Result, User};
use chrono::{DateTime, Utc};
use rand::Rng;

/// What one completion produced
#[derive(Clone, Debug)]
pub struct CompletionOutcome {
    pub user: User,
    /// The updated mission, or the generated replacement once completed
    pub mission: Mission,
    pub mission_completed: bool,
    pub leveled_up: bool,
}

/// Complete one exercise of the current mission.
///
/// Stats (and any matching favorite) fold on every call. When the mission
/// is now fully complete, the experience reward is applied (possibly
/// leveling up) and a replacement mission is generated for the resulting
/// level.
pub fn complete_exercise<R: Rng + ?Sized>(
    catalog: &Catalog,
    user: &User,
    mission: &Mission,
    index: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<CompletionOutcome> {
    let mission = mission.complete_exercise(index)?;
    let exercise = &mission.exercises[index];

    let mut next_user = user.clone();
    next_user.stats = record_completion(&user.stats, exercise, now);
    let next_user = record_favorite_performance(&next_user, exercise, now);

    if !mission.completed {
        return Ok(CompletionOutcome {
            user: next_user,
            mission,
            mission_completed: false,
            leveled_up: false,
        });
    }

    let level_before = next_user.level;
    let next_user = apply_reward(&next_user, mission.experience_reward);
    let leveled_up = next_user.level > level_before;

    let replacement = generate_mission(catalog, next_user.level, rng)?;

    Ok(CompletionOutcome {
        user: next_user,
        mission: replacement,
        mission_completed: true,
        leveled_up,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::toggle_favorite;
    use crate::mission::MISSION_SIZE;
    use crate::{build_default_catalog, Error};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup() -> (Catalog, User, Mission, StdRng) {
        let catalog = build_default_catalog();
        let user = User::new("Hunter").unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let mission = generate_mission(&catalog, user.level, &mut rng).unwrap();
        (catalog, user, mission, rng)
    }

    #[test]
    fn test_single_completion_folds_stats_only() {
        let (catalog, user, mission, mut rng) = setup();
        let now = Utc::now();

        let outcome = complete_exercise(&catalog, &user, &mission, 0, now, &mut rng).unwrap();

        assert!(!outcome.mission_completed);
        assert!(!outcome.leveled_up);
        assert_eq!(outcome.user.stats.total_exercises, 1);
        assert_eq!(outcome.user.level, 1);
        assert_eq!(outcome.user.experience, 0);
        assert_eq!(outcome.user.completed_missions, 0);
        assert_eq!(outcome.mission.id, mission.id);
        assert!(outcome.mission.exercises[0].completed);
    }

    #[test]
    fn test_full_mission_pays_reward_and_regenerates() {
        let (catalog, user, mission, mut rng) = setup();
        let now = Utc::now();

        let mut user = user;
        let mut mission = mission;
        let mission_id = mission.id;

        for index in 0..MISSION_SIZE {
            let outcome =
                complete_exercise(&catalog, &user, &mission, index, now, &mut rng).unwrap();
            user = outcome.user;

            if index + 1 == MISSION_SIZE {
                assert!(outcome.mission_completed);
                // 100 XP at level 1 stays below the 200 threshold
                assert!(!outcome.leveled_up);
                assert_ne!(outcome.mission.id, mission_id);
                assert!(outcome.mission.exercises.iter().all(|ex| !ex.completed));
            } else {
                assert!(!outcome.mission_completed);
            }
            mission = outcome.mission;
        }

        assert_eq!(user.completed_missions, 1);
        assert_eq!(user.level, 1);
        assert_eq!(user.experience, 100);
        assert_eq!(user.stats.total_exercises, MISSION_SIZE as u64);
    }

    #[test]
    fn test_level_up_on_mission_completion() {
        let (catalog, mut user, mission, mut rng) = setup();
        user.experience = 150;
        let now = Utc::now();

        let mut mission = mission;
        let mut current = user;
        for index in 0..MISSION_SIZE {
            let outcome =
                complete_exercise(&catalog, &current, &mission, index, now, &mut rng).unwrap();
            if index + 1 == MISSION_SIZE {
                assert!(outcome.leveled_up);
            }
            current = outcome.user;
            mission = outcome.mission;
        }

        // 150 + 100 = 250 >= 200
        assert_eq!(current.level, 2);
        assert_eq!(current.experience, 50);
    }

    #[test]
    fn test_completion_updates_matching_favorite() {
        let (catalog, user, mission, mut rng) = setup();
        let now = Utc::now();

        let starred = toggle_favorite(&user, &mission.exercises[0], now);
        let outcome = complete_exercise(&catalog, &starred, &mission, 0, now, &mut rng).unwrap();

        let fav = &outcome.user.favorites[0];
        assert_eq!(fav.exercise, mission.exercises[0].name);
        assert_eq!(fav.times_performed, 2);
    }

    #[test]
    fn test_double_completion_is_rejected() {
        let (catalog, user, mission, mut rng) = setup();
        let now = Utc::now();

        let outcome = complete_exercise(&catalog, &user, &mission, 3, now, &mut rng).unwrap();
        let err =
            complete_exercise(&catalog, &outcome.user, &outcome.mission, 3, now, &mut rng)
                .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_bad_index_leaves_snapshots_untouched() {
        let (catalog, user, mission, mut rng) = setup();
        let result = complete_exercise(&catalog, &user, &mission, 42, Utc::now(), &mut rng);
        assert!(result.is_err());
        assert_eq!(user.stats.total_exercises, 0);
        assert!(!mission.exercises.iter().any(|ex| ex.completed));
    }
}
