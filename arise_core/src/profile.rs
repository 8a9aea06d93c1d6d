//! User profile creation and session bookkeeping.

use crate::{Error, LoginHistoryEntry, Result, User, UserStats};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Display names must fit the onboarding form limits
const NAME_MIN: usize = 2;
const NAME_MAX: usize = 30;

impl User {
    /// Create a fresh level-1 profile.
    ///
    /// The name is trimmed and must be 2-30 characters.
    pub fn new(name: &str) -> Result<User> {
        let name = name.trim();
        let chars = name.chars().count();
        if !(NAME_MIN..=NAME_MAX).contains(&chars) {
            return Err(Error::Validation(format!(
                "name must be {}-{} characters, got {}",
                NAME_MIN, NAME_MAX, chars
            )));
        }

        Ok(User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            level: 1,
            experience: 0,
            completed_missions: 0,
            streak: 0,
            stats: UserStats::default(),
            favorites: Vec::new(),
            login_history: Vec::new(),
        })
    }

    /// Append a login-history snapshot for a new session.
    pub fn record_login(&self, now: DateTime<Utc>) -> User {
        let mut next = self.clone();
        next.login_history.push(LoginHistoryEntry {
            id: Uuid::new_v4(),
            logged_in_at: now,
            level_at_login: self.level,
            experience_at_login: self.experience,
            completed_missions_at_login: self.completed_missions,
        });
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_starts_at_level_one() {
        let user = User::new("Hunter").unwrap();
        assert_eq!(user.level, 1);
        assert_eq!(user.experience, 0);
        assert_eq!(user.completed_missions, 0);
        assert_eq!(user.streak, 0);
        assert!(user.favorites.is_empty());
        assert!(user.stats.exercise_history.is_empty());
    }

    #[test]
    fn test_name_is_trimmed() {
        let user = User::new("  Hunter  ").unwrap();
        assert_eq!(user.name, "Hunter");
    }

    #[test]
    fn test_name_length_limits() {
        assert!(User::new("H").is_err());
        assert!(User::new("   ").is_err());
        assert!(User::new(&"x".repeat(31)).is_err());
        assert!(User::new("Hi").is_ok());
        assert!(User::new(&"x".repeat(30)).is_ok());
    }

    #[test]
    fn test_record_login_snapshots_progress() {
        let mut user = User::new("Hunter").unwrap();
        user.level = 3;
        user.experience = 42;
        user.completed_missions = 7;

        let now = Utc::now();
        let after = user.record_login(now);

        assert_eq!(after.login_history.len(), 1);
        let entry = &after.login_history[0];
        assert_eq!(entry.logged_in_at, now);
        assert_eq!(entry.level_at_login, 3);
        assert_eq!(entry.experience_at_login, 42);
        assert_eq!(entry.completed_missions_at_login, 7);
        // Source snapshot untouched
        assert!(user.login_history.is_empty());
    }
}
