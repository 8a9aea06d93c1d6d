//! Level thresholds and experience reward application.

use crate::User;

/// Experience needed to clear a level: `floor(200 * 1.5^(level - 1))`.
///
/// Strictly increasing in level; levels below 1 are treated as level 1.
pub fn required_exp(level: u32) -> u64 {
    let level = level.max(1);
    (200.0 * 1.5_f64.powi(level as i32 - 1)).floor() as u64
}

/// Apply a completed mission's experience reward to a user snapshot.
///
/// If the new total reaches the current level's threshold, the level rises
/// by one and the threshold is subtracted; a reward large enough to span
/// two thresholds banks the surplus for the next mission rather than
/// rolling over again. `completed_missions` always increments by one, so
/// this is only called when the triggering mission fully completed.
pub fn apply_reward(user: &User, reward: u64) -> User {
    let new_experience = user.experience + reward;
    let threshold = required_exp(user.level);

    let (level, experience) = if new_experience >= threshold {
        (user.level + 1, new_experience - threshold)
    } else {
        (user.level, new_experience)
    };

    if level > user.level {
        tracing::info!("{} leveled up to {}", user.name, level);
    }

    User {
        level,
        experience,
        completed_missions: user.completed_missions + 1,
        ..user.clone()
    }
}
