//! Stats and history tracking.
//!
//! `record_completion` is a pure fold: it takes the current stats snapshot
//! and one completed exercise and returns the next snapshot. History is
//! append-only and never rewritten.

use crate::{HistoryEntry, Measure, MissionExercise, UserStats};
use chrono::{DateTime, Utc};

/// Fold one completed exercise into the stats.
pub fn record_completion(
    stats: &UserStats,
    exercise: &MissionExercise,
    now: DateTime<Utc>,
) -> UserStats {
    let mut next = stats.clone();

    next.total_exercises += 1;

    // Rep and second counts both feed the rep total (a 30s plank counts
    // as 30); distance work feeds the distance accumulator instead.
    match exercise.measure {
        Measure::Reps { count } | Measure::Seconds { count } => {
            next.total_reps += count as u64;

            let best = next.personal_bests.entry(exercise.name.clone()).or_insert(0);
            *best = (*best).max(count);
        }
        Measure::Miles { distance } => {
            next.total_distance += distance;
        }
    }

    next.exercise_history.push(HistoryEntry {
        date: now,
        exercise: exercise.name.clone(),
        reps: match exercise.measure {
            Measure::Reps { count } => Some(count),
            _ => None,
        },
        duration_seconds: match exercise.measure {
            Measure::Seconds { count } => Some(count),
            _ => None,
        },
        distance_miles: exercise.measure.miles(),
    });

    tracing::debug!(
        "Recorded {} ({} total exercises)",
        exercise.name,
        next.total_exercises
    );

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn reps(name: &str, count: u32) -> MissionExercise {
        MissionExercise {
            name: name.into(),
            category: Category::UpperBody,
            measure: Measure::Reps { count },
            sets: Some(3),
            completed: true,
        }
    }

    fn hold(name: &str, count: u32) -> MissionExercise {
        MissionExercise {
            name: name.into(),
            category: Category::Core,
            measure: Measure::Seconds { count },
            sets: Some(3),
            completed: true,
        }
    }

    fn run(distance: f64) -> MissionExercise {
        MissionExercise {
            name: "Running".into(),
            category: Category::Cardio,
            measure: Measure::Miles { distance },
            sets: None,
            completed: true,
        }
    }

    #[test]
    fn test_counters_accumulate() {
        let stats = UserStats::default();
        let now = Utc::now();

        let stats = record_completion(&stats, &reps("Push-ups", 10), now);
        let stats = record_completion(&stats, &reps("Squats", 15), now);
        let stats = record_completion(&stats, &run(0.5), now);

        assert_eq!(stats.total_exercises, 3);
        assert_eq!(stats.total_reps, 25);
        assert!((stats.total_distance - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fold_matches_independent_sum() {
        let exercises = vec![
            reps("Push-ups", 5),
            reps("Squats", 10),
            hold("Plank", 30),
            reps("Lunges", 6),
        ];
        let now = Utc::now();

        let folded = exercises
            .iter()
            .fold(UserStats::default(), |stats, ex| {
                record_completion(&stats, ex, now)
            });

        let expected: u64 = exercises
            .iter()
            .filter_map(|ex| ex.measure.count())
            .map(u64::from)
            .sum();

        assert_eq!(folded.total_reps, expected);
        assert_eq!(folded.total_exercises, exercises.len() as u64);
    }

    #[test]
    fn test_personal_best_keeps_max() {
        let now = Utc::now();
        let stats = UserStats::default();

        let stats = record_completion(&stats, &reps("Push-ups", 10), now);
        let stats = record_completion(&stats, &reps("Push-ups", 15), now);
        let stats = record_completion(&stats, &reps("Push-ups", 12), now);

        assert_eq!(stats.personal_bests["Push-ups"], 15);
    }

    #[test]
    fn test_distance_work_skips_bests_map() {
        let stats = record_completion(&UserStats::default(), &run(1.5), Utc::now());
        assert!(stats.personal_bests.is_empty());
        assert!((stats.total_distance - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_history_is_append_only() {
        let now = Utc::now();
        let stats = UserStats::default();

        let stats = record_completion(&stats, &reps("Push-ups", 10), now);
        let stats = record_completion(&stats, &hold("Plank", 30), now);

        assert_eq!(stats.exercise_history.len(), 2);
        assert_eq!(stats.exercise_history[0].exercise, "Push-ups");
        assert_eq!(stats.exercise_history[0].reps, Some(10));
        assert_eq!(stats.exercise_history[0].duration_seconds, None);
        assert_eq!(stats.exercise_history[1].exercise, "Plank");
        assert_eq!(stats.exercise_history[1].reps, None);
        assert_eq!(stats.exercise_history[1].duration_seconds, Some(30));
    }

    #[test]
    fn test_hold_seconds_count_toward_bests() {
        let stats = record_completion(&UserStats::default(), &hold("Plank", 30), Utc::now());
        assert_eq!(stats.personal_bests["Plank"], 30);
        assert_eq!(stats.total_reps, 30);
    }

    #[test]
    fn test_run_history_entry_has_distance_only() {
        let stats = record_completion(&UserStats::default(), &run(0.5), Utc::now());
        let entry = &stats.exercise_history[0];
        assert_eq!(entry.reps, None);
        assert_eq!(entry.duration_seconds, None);
        assert_eq!(entry.distance_miles, Some(0.5));
    }
}
