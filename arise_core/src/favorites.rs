//! Starred exercises and their lightweight performance records.
//!
//! Favorites are keyed by exercise name; the record id exists only for
//! list management in the presentation layer.

use crate::{FavoriteExercise, MissionExercise, User};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Toggle an exercise in the favorites list.
///
/// A matching name is removed; otherwise a fresh record is appended,
/// seeded from the triggering exercise's current count.
pub fn toggle_favorite(user: &User, exercise: &MissionExercise, now: DateTime<Utc>) -> User {
    let mut next = user.clone();

    if next.favorites.iter().any(|fav| fav.exercise == exercise.name) {
        next.favorites.retain(|fav| fav.exercise != exercise.name);
        tracing::debug!("Removed '{}' from favorites", exercise.name);
    } else {
        next.favorites.push(FavoriteExercise {
            id: Uuid::new_v4(),
            exercise: exercise.name.clone(),
            personal_best: exercise.measure.count().unwrap_or(0),
            times_performed: 1,
            last_performed: Some(now),
        });
        tracing::debug!("Added '{}' to favorites", exercise.name);
    }

    next
}

/// Remove a favorite by record id (the UI list-management path).
pub fn remove_favorite(user: &User, id: Uuid) -> User {
    let mut next = user.clone();
    next.favorites.retain(|fav| fav.id != id);
    next
}

/// Fold a completed exercise into its favorite record, if one exists.
///
/// Keeps favorites in step with the stats tracker: bumps the performance
/// counter, keeps the best count, refreshes the timestamp.
pub fn record_favorite_performance(
    user: &User,
    exercise: &MissionExercise,
    now: DateTime<Utc>,
) -> User {
    let mut next = user.clone();

    for fav in &mut next.favorites {
        if fav.exercise == exercise.name {
            fav.times_performed += 1;
            if let Some(count) = exercise.measure.count() {
                fav.personal_best = fav.personal_best.max(count);
            }
            fav.last_performed = Some(now);
        }
    }

    next
}
