//! Translation tables for mission and achievement text.
//!
//! The core hands out translation keys; this module resolves them for
//! display. Unknown keys fall back to the key itself.

use clap::ValueEnum;

/// Supported display languages
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Language {
    En,
    Ar,
}

impl Language {
    /// Parse a config-file language code, defaulting to English
    pub fn from_code(code: &str) -> Language {
        match code.to_lowercase().as_str() {
            "ar" => Language::Ar,
            _ => Language::En,
        }
    }
}

/// Resolve a translation key for the given language.
pub fn translate(lang: Language, key: &str) -> &str {
    let text = match lang {
        Language::En => translate_en(key),
        Language::Ar => translate_ar(key),
    };
    text.unwrap_or(key)
}

fn translate_en(key: &str) -> Option<&'static str> {
    Some(match key {
        "mission.title.daily_training_challenge" => "Daily Training Challenge",
        "mission.title.push_your_limits" => "Push Your Limits",
        "mission.title.core_strength_builder" => "Core Strength Builder",
        "mission.title.endurance_test" => "Endurance Test",
        "mission.title.full_body_circuit" => "Full Body Circuit",

        "mission.quote.determination" => {
            "Your strength is not just in your muscles, but in your determination to push beyond limits."
        }
        "mission.quote.every_rep" => {
            "Every rep brings you closer to your potential. Push harder, achieve more."
        }
        "mission.quote.consistency" => {
            "The master of physical training understands that consistency creates power."
        }

        "achievement.first_mission.name" => "First Steps",
        "achievement.first_mission.description" => "Complete your first training mission",
        "achievement.dedication.name" => "Dedicated Hunter",
        "achievement.dedication.description" => "Complete 10 training missions",
        "achievement.master.name" => "Training Master",
        "achievement.master.description" => "Reach level 10",
        "achievement.streak_warrior.name" => "Streak Warrior",
        "achievement.streak_warrior.description" => "Maintain a 7-day training streak",
        "achievement.endurance.name" => "Endurance Champion",
        "achievement.endurance.description" => "Complete 100 exercises",

        _ => return None,
    })
}

fn translate_ar(key: &str) -> Option<&'static str> {
    Some(match key {
        "mission.title.daily_training_challenge" => "تحدي التدريب اليومي",
        "mission.title.push_your_limits" => "تجاوز حدودك",
        "mission.title.core_strength_builder" => "بناء قوة الجذع",
        "mission.title.endurance_test" => "اختبار التحمل",
        "mission.title.full_body_circuit" => "تمرين الجسم الكامل",

        "mission.quote.determination" => {
            "قوتك ليست في عضلاتك فقط، بل في عزيمتك على تجاوز الحدود."
        }
        "mission.quote.every_rep" => "كل تكرار يقربك من إمكاناتك. ادفع أقوى، حقق أكثر.",
        "mission.quote.consistency" => "سيد التدريب البدني يدرك أن الاستمرارية تصنع القوة.",

        "achievement.first_mission.name" => "الخطوات الأولى",
        "achievement.first_mission.description" => "أكمل مهمتك التدريبية الأولى",
        "achievement.dedication.name" => "صياد مخلص",
        "achievement.dedication.description" => "أكمل 10 مهام تدريبية",
        "achievement.master.name" => "سيد التدريب",
        "achievement.master.description" => "اوصل إلى المستوى 10",
        "achievement.streak_warrior.name" => "محارب المواظبة",
        "achievement.streak_warrior.description" => "حافظ على تدريب 7 أيام متتالية",
        "achievement.endurance.name" => "بطل التحمل",
        "achievement.endurance.description" => "أكمل 100 تمرين",

        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arise_core::mission::{MISSION_QUOTE_KEYS, MISSION_TITLE_KEYS};
    use arise_core::ACHIEVEMENTS;

    #[test]
    fn test_every_mission_key_is_translated() {
        for key in MISSION_TITLE_KEYS.iter().chain(MISSION_QUOTE_KEYS.iter()) {
            assert_ne!(translate(Language::En, key), *key, "missing en: {}", key);
            assert_ne!(translate(Language::Ar, key), *key, "missing ar: {}", key);
        }
    }

    #[test]
    fn test_every_achievement_key_is_translated() {
        for achievement in ACHIEVEMENTS {
            for key in [achievement.name_key, achievement.description_key] {
                assert_ne!(translate(Language::En, key), key, "missing en: {}", key);
                assert_ne!(translate(Language::Ar, key), key, "missing ar: {}", key);
            }
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(translate(Language::En, "mission.title.unknown"), "mission.title.unknown");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("ar"), Language::Ar);
        assert_eq!(Language::from_code("AR"), Language::Ar);
        assert_eq!(Language::from_code("en"), Language::En);
        assert_eq!(Language::from_code("anything"), Language::En);
    }
}
