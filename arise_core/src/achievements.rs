//! Achievement definitions and progress checks.

use crate::User;

/// A static achievement definition
#[derive(Clone, Copy, Debug)]
pub struct Achievement {
    pub id: &'static str,
    pub name_key: &'static str,
    pub description_key: &'static str,
    pub icon: &'static str,
    pub requirement: u64,
}

/// The built-in achievement table
pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "first-mission",
        name_key: "achievement.first_mission.name",
        description_key: "achievement.first_mission.description",
        icon: "medal",
        requirement: 1,
    },
    Achievement {
        id: "dedication",
        name_key: "achievement.dedication.name",
        description_key: "achievement.dedication.description",
        icon: "trophy",
        requirement: 10,
    },
    Achievement {
        id: "master",
        name_key: "achievement.master.name",
        description_key: "achievement.master.description",
        icon: "crown",
        requirement: 10,
    },
    Achievement {
        id: "streak-warrior",
        name_key: "achievement.streak_warrior.name",
        description_key: "achievement.streak_warrior.description",
        icon: "flame",
        requirement: 7,
    },
    Achievement {
        id: "endurance",
        name_key: "achievement.endurance.name",
        description_key: "achievement.endurance.description",
        icon: "shield",
        requirement: 100,
    },
];

/// An achievement with the user's clamped progress toward it
#[derive(Clone, Copy, Debug)]
pub struct AchievementProgress {
    pub achievement: &'static Achievement,
    pub progress: u64,
    pub unlocked: bool,
}

/// Compute progress for every achievement.
pub fn check_achievements(user: &User) -> Vec<AchievementProgress> {
    ACHIEVEMENTS
        .iter()
        .map(|achievement| {
            let raw = match achievement.id {
                "first-mission" | "dedication" => user.completed_missions,
                "master" => user.level as u64,
                "streak-warrior" => user.streak as u64,
                "endurance" => user.stats.total_exercises,
                _ => 0,
            };
            let progress = raw.min(achievement.requirement);

            AchievementProgress {
                achievement,
                progress,
                unlocked: progress >= achievement.requirement,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_user_has_nothing_unlocked() {
        let user = User::new("Hunter").unwrap();
        let progress = check_achievements(&user);

        assert_eq!(progress.len(), ACHIEVEMENTS.len());
        assert!(progress.iter().all(|p| !p.unlocked));
    }

    #[test]
    fn test_first_mission_unlocks() {
        let mut user = User::new("Hunter").unwrap();
        user.completed_missions = 1;

        let progress = check_achievements(&user);
        let first = progress
            .iter()
            .find(|p| p.achievement.id == "first-mission")
            .unwrap();
        assert!(first.unlocked);

        let dedication = progress
            .iter()
            .find(|p| p.achievement.id == "dedication")
            .unwrap();
        assert!(!dedication.unlocked);
        assert_eq!(dedication.progress, 1);
    }

    #[test]
    fn test_progress_is_clamped_to_requirement() {
        let mut user = User::new("Hunter").unwrap();
        user.completed_missions = 250;
        user.level = 31;
        user.streak = 40;
        user.stats.total_exercises = 9000;

        for p in check_achievements(&user) {
            assert!(p.unlocked);
            assert_eq!(p.progress, p.achievement.requirement);
        }
    }

    #[test]
    fn test_level_ten_unlocks_master() {
        let mut user = User::new("Hunter").unwrap();
        user.level = 10;

        let progress = check_achievements(&user);
        let master = progress
            .iter()
            .find(|p| p.achievement.id == "master")
            .unwrap();
        assert!(master.unlocked);
    }
}
