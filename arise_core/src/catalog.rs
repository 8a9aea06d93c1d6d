//! Default catalog of tiered exercise templates.
//!
//! Three fixed pools (beginner, intermediate, advanced), each covering the
//! four exercise categories. Base counts grow per level by each template's
//! progression increment.

use crate::mission::MISSION_SIZE;
use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

fn rep(name: &str, category: Category, count: u32, sets: u32, progression: f64) -> ExerciseTemplate {
    ExerciseTemplate {
        name: name.into(),
        category,
        measure: Measure::Reps { count },
        sets: Some(sets),
        progression,
    }
}

fn hold(name: &str, category: Category, count: u32, sets: u32, progression: f64) -> ExerciseTemplate {
    ExerciseTemplate {
        name: name.into(),
        category,
        measure: Measure::Seconds { count },
        sets: Some(sets),
        progression,
    }
}

fn run(name: &str, distance: f64, progression: f64) -> ExerciseTemplate {
    ExerciseTemplate {
        name: name.into(),
        category: Category::Cardio,
        measure: Measure::Miles { distance },
        sets: None,
        progression,
    }
}

/// Builds the default catalog with the built-in exercise pools
///
/// **Note**: For production use, prefer `default_catalog()` which returns a
/// cached reference. This function is retained for testing and custom
/// catalog creation.
pub fn build_default_catalog() -> Catalog {
    use Category::*;

    let beginner = vec![
        // Core
        hold("Plank", Core, 30, 3, 5.0),
        rep("Crunches", Core, 10, 3, 2.0),
        rep("Mountain Climbers", Core, 20, 3, 4.0),
        rep("Russian Twists", Core, 10, 3, 2.0),
        rep("Bird Dogs", Core, 10, 3, 2.0),
        rep("Dead Bugs", Core, 8, 3, 1.0),
        hold("Superman Hold", Core, 20, 3, 5.0),
        rep("Seated Leg Raises", Core, 12, 3, 2.0),
        rep("Cat-Cow Stretch", Core, 10, 3, 2.0),
        rep("Hip Bridges", Core, 12, 3, 2.0),
        // Upper body
        rep("Push-ups", UpperBody, 5, 3, 1.0),
        rep("Wall Push-ups", UpperBody, 8, 3, 2.0),
        rep("Tricep Dips", UpperBody, 5, 3, 1.0),
        rep("Arm Circles", UpperBody, 20, 3, 5.0),
        rep("Incline Push-ups", UpperBody, 6, 3, 1.0),
        rep("Band Pull-Aparts", UpperBody, 12, 3, 2.0),
        rep("Shoulder Taps", UpperBody, 10, 3, 2.0),
        rep("Wall Angels", UpperBody, 10, 3, 2.0),
        // Lower body
        rep("Squats", LowerBody, 10, 3, 2.0),
        rep("Lunges", LowerBody, 6, 3, 1.0),
        rep("Calf Raises", LowerBody, 15, 3, 3.0),
        rep("Glute Bridges", LowerBody, 10, 3, 2.0),
        rep("Step-Ups", LowerBody, 10, 3, 2.0),
        rep("Fire Hydrants", LowerBody, 12, 3, 2.0),
        rep("Donkey Kicks", LowerBody, 12, 3, 2.0),
        rep("Ankle Hops", LowerBody, 20, 3, 4.0),
        // Cardio
        rep("Jumping Jacks", Cardio, 20, 3, 5.0),
        rep("High Knees", Cardio, 20, 3, 4.0),
        run("Running", 0.5, 0.1),
        rep("Burpees", Cardio, 5, 3, 1.0),
        rep("Marching in Place", Cardio, 30, 3, 5.0),
        rep("Knee Drives", Cardio, 20, 3, 4.0),
        rep("Jumping Rope", Cardio, 30, 3, 5.0),
        rep("Star Jumps", Cardio, 15, 3, 3.0),
    ];

    let intermediate = vec![
        // Core
        rep("V-Ups", Core, 12, 4, 2.0),
        rep("Bicycle Crunches", Core, 20, 4, 4.0),
        hold("Side Planks", Core, 30, 3, 5.0),
        rep("Leg Raises", Core, 15, 4, 3.0),
        rep("Plank to Downward Dog", Core, 10, 4, 2.0),
        rep("Flutter Kicks", Core, 30, 4, 5.0),
        hold("Hollow Body Hold", Core, 20, 4, 5.0),
        rep("Reverse Crunches", Core, 15, 4, 3.0),
        rep("Windshield Wipers", Core, 12, 4, 2.0),
        rep("Turkish Get-Ups", Core, 5, 4, 1.0),
        // Upper body
        rep("Push-ups", UpperBody, 12, 4, 2.0),
        rep("Diamond Push-ups", UpperBody, 8, 4, 2.0),
        rep("Pike Push-ups", UpperBody, 8, 4, 2.0),
        rep("Pull-ups", UpperBody, 5, 4, 1.0),
        rep("Tricep Dips", UpperBody, 12, 4, 2.0),
        rep("Pseudo Planche Push-ups", UpperBody, 8, 4, 2.0),
        rep("Archer Push-ups", UpperBody, 6, 4, 1.0),
        rep("Negative Pull-ups", UpperBody, 5, 4, 1.0),
        rep("Hindu Push-ups", UpperBody, 10, 4, 2.0),
        rep("Wall Walks", UpperBody, 4, 4, 1.0),
        // Lower body
        rep("Jump Squats", LowerBody, 15, 4, 3.0),
        rep("Walking Lunges", LowerBody, 20, 4, 4.0),
        rep("Single-Leg Deadlifts", LowerBody, 10, 4, 2.0),
        rep("Box Jumps", LowerBody, 10, 4, 2.0),
        rep("Bulgarian Split Squats", LowerBody, 10, 4, 2.0),
        rep("Pistol Squat Progressions", LowerBody, 5, 4, 1.0),
        rep("Jump Lunges", LowerBody, 12, 4, 2.0),
        hold("Wall Sit", LowerBody, 45, 4, 10.0),
        rep("Cossack Squats", LowerBody, 8, 4, 2.0),
        rep("Broad Jumps", LowerBody, 8, 4, 2.0),
        // Cardio / HIIT
        rep("Mountain Climbers", Cardio, 30, 4, 5.0),
        rep("Burpees", Cardio, 10, 4, 2.0),
        run("Running", 1.5, 0.25),
        rep("Jump Rope", Cardio, 50, 4, 10.0),
        rep("Shuttle Runs", Cardio, 6, 4, 1.0),
        rep("Hill Sprints", Cardio, 6, 4, 1.0),
        rep("Tabata Intervals", Cardio, 8, 4, 1.0),
        hold("Bear Crawls", Cardio, 30, 4, 5.0),
    ];

    let advanced = vec![
        // Core
        rep("Dragon Flag Negatives", Core, 5, 5, 1.0),
        hold("Hollow Body Holds", Core, 45, 5, 5.0),
        hold("L-Sits", Core, 20, 5, 3.0),
        hold("Front Lever Progressions", Core, 15, 5, 2.0),
        rep("Ab Wheel Rollouts", Core, 12, 5, 2.0),
        rep("Toes to Bar", Core, 8, 5, 2.0),
        hold("Human Flag Progressions", Core, 10, 5, 2.0),
        rep("Hanging Windshield Wipers", Core, 8, 5, 2.0),
        hold("Straddle Planche Leans", Core, 20, 5, 5.0),
        // Upper body
        rep("One Arm Push-ups", UpperBody, 5, 5, 1.0),
        rep("Handstand Push-ups", UpperBody, 5, 5, 1.0),
        rep("Muscle-ups", UpperBody, 3, 5, 1.0),
        rep("Pull-ups", UpperBody, 15, 5, 2.0),
        hold("Planche Progressions", UpperBody, 30, 5, 5.0),
        hold("Back Lever Progressions", UpperBody, 15, 5, 2.0),
        rep("Ring Muscle-ups", UpperBody, 3, 5, 1.0),
        rep("90 Degree Push-ups", UpperBody, 5, 5, 1.0),
        hold("Iron Cross Progressions", UpperBody, 10, 5, 2.0),
        rep("Hefesto Progressions", UpperBody, 3, 5, 1.0),
        // Lower body
        rep("Pistol Squats", LowerBody, 8, 5, 1.0),
        rep("Plyometric Lunges", LowerBody, 20, 5, 4.0),
        rep("Box Jumps", LowerBody, 15, 5, 3.0),
        rep("Shrimp Squats", LowerBody, 8, 5, 1.0),
        rep("Nordic Hamstring Curls", LowerBody, 6, 5, 1.0),
        rep("Explosive Step-ups", LowerBody, 12, 5, 2.0),
        rep("Single Leg Box Jumps", LowerBody, 6, 5, 1.0),
        rep("Dragon Pistol Squats", LowerBody, 4, 5, 1.0),
        rep("Depth Jumps", LowerBody, 8, 5, 2.0),
        rep("Natural Leg Extensions", LowerBody, 8, 5, 2.0),
        // Cardio / endurance / power
        rep("Burpee Pull-ups", Cardio, 8, 5, 2.0),
        run("Running", 3.0, 0.5),
        rep("Double Unders", Cardio, 50, 5, 10.0),
        rep("Tabata Sprints", Cardio, 8, 5, 1.0),
        rep("Muscle-up Burpees", Cardio, 5, 5, 1.0),
        rep("Parkour Conditioning", Cardio, 10, 5, 2.0),
        rep("Handstand Walk", Cardio, 20, 5, 5.0),
        rep("Ring HIIT Complex", Cardio, 5, 5, 1.0),
    ];

    Catalog {
        beginner,
        intermediate,
        advanced,
    }
}

impl Catalog {
    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for tier in [Tier::Beginner, Tier::Intermediate, Tier::Advanced] {
            let pool = self.tier(tier);
            let mut names = HashSet::new();

            for template in pool {
                if template.name.is_empty() {
                    errors.push(format!("{:?} tier has a template with an empty name", tier));
                    continue;
                }
                if !names.insert(template.name.as_str()) {
                    errors.push(format!(
                        "{:?} tier lists '{}' more than once",
                        tier, template.name
                    ));
                }

                match template.measure {
                    Measure::Reps { count } | Measure::Seconds { count } => {
                        if count == 0 {
                            errors.push(format!(
                                "{:?} tier: '{}' has a zero base count",
                                tier, template.name
                            ));
                        }
                    }
                    Measure::Miles { distance } => {
                        if distance <= 0.0 {
                            errors.push(format!(
                                "{:?} tier: '{}' has a non-positive distance",
                                tier, template.name
                            ));
                        }
                    }
                }

                if template.progression < 0.0 {
                    errors.push(format!(
                        "{:?} tier: '{}' has a negative progression",
                        tier, template.name
                    ));
                }

                // Names hit by a core keyword must carry the Core tag
                if Category::Core.matches(&template.name)
                    && template.category != Category::Core
                {
                    errors.push(format!(
                        "{:?} tier: '{}' matches a core keyword but is tagged {:?}",
                        tier, template.name, template.category
                    ));
                }
            }

            // A mission needs six distinct exercises out of every tier
            if names.len() < MISSION_SIZE {
                errors.push(format!(
                    "{:?} tier has {} distinct exercises, need at least {}",
                    tier,
                    names.len(),
                    MISSION_SIZE
                ));
            }

            for category in Category::ALL {
                if !pool.iter().any(|t| t.category == category) {
                    errors.push(format!(
                        "{:?} tier has no {} exercises",
                        tier,
                        category.label()
                    ));
                }
            }
        }

        errors
    }
}
