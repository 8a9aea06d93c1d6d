use arise_core::*;
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod i18n;
use i18n::Language;

#[derive(Parser)]
#[command(name = "arise")]
#[command(about = "Gamified fitness missions: train, level up, arise", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Profile name (created on first use)
    #[arg(long, global = true)]
    name: Option<String>,

    /// Language for mission and achievement text
    #[arg(long, global = true, value_enum)]
    lang: Option<Language>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current daily mission (default)
    Mission,

    /// Complete one mission exercise by its listed number
    Done { index: usize },

    /// Show level, totals, personal bests, and recent history
    Stats,

    /// Toggle a mission exercise as favorite by its listed number
    Favorite { index: usize },

    /// List favorite exercises
    Favorites,

    /// Show achievement progress
    Achievements,

    /// Export the exercise history to CSV
    Export {
        /// Output file path
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    arise_core::logging::init();

    let cli = Cli::parse();

    let errors = default_catalog().validate();
    if !errors.is_empty() {
        eprintln!("Exercise catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::Catalog("invalid exercise catalog".into()));
    }

    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());
    let lang = cli
        .lang
        .unwrap_or_else(|| Language::from_code(&config.display.language));
    let store = UserStore::new(&data_dir);
    let name = cli.name.as_deref();

    match cli.command {
        Some(Commands::Mission) | None => cmd_mission(&store, name, lang),
        Some(Commands::Done { index }) => cmd_done(&store, name, index, lang),
        Some(Commands::Stats) => cmd_stats(&store, name),
        Some(Commands::Favorite { index }) => cmd_favorite(&store, name, index),
        Some(Commands::Favorites) => cmd_favorites(&store, name),
        Some(Commands::Achievements) => cmd_achievements(&store, name, lang),
        Some(Commands::Export { out }) => cmd_export(&store, name, &out),
    }
}

/// Resume an existing profile or create one from `--name`.
fn resolve_user(store: &UserStore, name: Option<&str>) -> Result<User> {
    let existing = match name {
        Some(name) => store.find_by_name(name)?,
        None => store.first_user()?,
    };

    if let Some(user) = existing {
        return Ok(user);
    }

    let Some(name) = name else {
        return Err(Error::Validation(
            "no profile found; pass --name to create one".into(),
        ));
    };

    let user = User::new(name)?;
    store.save(&user)?;
    println!("Welcome, {}! Profile created.", user.name);
    Ok(user)
}

/// Load the persisted mission, or generate and persist a fresh one.
fn current_mission(store: &UserStore, user: &User) -> Result<Mission> {
    match store.load_mission(user.id) {
        Ok(Some(mission)) if !mission.completed => return Ok(mission),
        Ok(_) => {}
        Err(e) => {
            // Corrupt mission data is recoverable: discard and regenerate
            tracing::warn!("Could not load saved mission ({}), generating a new one", e);
        }
    }

    let mut rng = rand::thread_rng();
    let mission = generate_mission(default_catalog(), user.level, &mut rng)?;
    store.save_mission(user.id, &mission)?;
    Ok(mission)
}

fn cmd_mission(store: &UserStore, name: Option<&str>, lang: Language) -> Result<()> {
    let user = resolve_user(store, name)?;

    // Session start: snapshot the login
    let user = user.record_login(Utc::now());
    store.save(&user)?;

    let mission = current_mission(store, &user)?;
    display_header(&user);
    display_mission(&mission, lang);
    Ok(())
}

fn cmd_done(store: &UserStore, name: Option<&str>, index: usize, lang: Language) -> Result<()> {
    let user = resolve_user(store, name)?;
    let mission = current_mission(store, &user)?;

    let index = index
        .checked_sub(1)
        .ok_or_else(|| Error::Validation("exercise numbers start at 1".into()))?;
    let exercise_name = mission
        .exercises
        .get(index)
        .map(|ex| ex.name.clone())
        .unwrap_or_default();

    let mut rng = rand::thread_rng();
    let outcome = complete_exercise(
        default_catalog(),
        &user,
        &mission,
        index,
        Utc::now(),
        &mut rng,
    )?;

    store.save(&outcome.user)?;
    store.save_mission(outcome.user.id, &outcome.mission)?;

    println!("✓ {} recorded", exercise_name);

    if outcome.mission_completed {
        println!("★ Mission complete! +{} XP", mission.experience_reward);
        if outcome.leveled_up {
            println!("⬆ Level up! You are now level {}", outcome.user.level);
        }
        println!();
        println!("A new mission awaits:");
        display_mission(&outcome.mission, lang);
    } else {
        let remaining = outcome
            .mission
            .exercises
            .iter()
            .filter(|ex| !ex.completed)
            .count();
        println!("{} exercises to go", remaining);
    }

    Ok(())
}

fn cmd_stats(store: &UserStore, name: Option<&str>) -> Result<()> {
    let user = resolve_user(store, name)?;
    let stats = &user.stats;

    display_header(&user);
    println!("Missions completed: {}", user.completed_missions);
    println!("Streak: {} days", user.streak);
    println!("Total exercises: {}", stats.total_exercises);
    println!("Total reps: {}", stats.total_reps);
    println!("Total distance: {:.2} miles", stats.total_distance);

    if !stats.personal_bests.is_empty() {
        println!();
        println!("Personal bests:");
        let mut bests: Vec<_> = stats.personal_bests.iter().collect();
        bests.sort_by_key(|(name, _)| name.as_str());
        for (name, best) in bests {
            println!("  {}: {}", name, best);
        }
    }

    if !stats.exercise_history.is_empty() {
        println!();
        println!("Recent history:");
        for entry in stats.exercise_history.iter().rev().take(5) {
            println!(
                "  {}  {}",
                entry.date.format("%Y-%m-%d %H:%M"),
                entry.exercise
            );
        }
    }

    Ok(())
}

fn cmd_favorite(store: &UserStore, name: Option<&str>, index: usize) -> Result<()> {
    let user = resolve_user(store, name)?;
    let mission = current_mission(store, &user)?;

    let index = index
        .checked_sub(1)
        .ok_or_else(|| Error::Validation("exercise numbers start at 1".into()))?;
    let Some(exercise) = mission.exercises.get(index) else {
        return Err(Error::Validation(format!(
            "mission has no exercise at number {}",
            index + 1
        )));
    };

    let was_favorite = user.favorites.iter().any(|fav| fav.exercise == exercise.name);
    let updated = toggle_favorite(&user, exercise, Utc::now());
    store.save(&updated)?;

    if was_favorite {
        println!("Removed {} from favorites", exercise.name);
    } else {
        println!("Added {} to favorites", exercise.name);
    }
    Ok(())
}

fn cmd_favorites(store: &UserStore, name: Option<&str>) -> Result<()> {
    let user = resolve_user(store, name)?;

    if user.favorites.is_empty() {
        println!("No favorites yet.");
        return Ok(());
    }

    for fav in &user.favorites {
        println!(
            "★ {} - best {}, performed {}x",
            fav.exercise, fav.personal_best, fav.times_performed
        );
    }
    Ok(())
}

fn cmd_achievements(store: &UserStore, name: Option<&str>, lang: Language) -> Result<()> {
    let user = resolve_user(store, name)?;

    for progress in check_achievements(&user) {
        println!(
            "[{}] {} - {} ({}/{})",
            if progress.unlocked { "x" } else { " " },
            i18n::translate(lang, progress.achievement.name_key),
            i18n::translate(lang, progress.achievement.description_key),
            progress.progress,
            progress.achievement.requirement
        );
    }
    Ok(())
}

fn cmd_export(store: &UserStore, name: Option<&str>, out: &std::path::Path) -> Result<()> {
    let user = resolve_user(store, name)?;
    let count = write_history_csv(&user, out)?;
    println!("Exported {} history rows to {}", count, out.display());
    Ok(())
}

fn display_header(user: &User) {
    println!(
        "{} - Level {} ({}/{} XP)",
        user.name,
        user.level,
        user.experience,
        required_exp(user.level)
    );
}

fn display_mission(mission: &Mission, lang: Language) {
    println!();
    println!(
        "{}  (difficulty {} · {} XP)",
        i18n::translate(lang, &mission.title_key),
        mission.difficulty,
        mission.experience_reward
    );
    println!("\"{}\"", i18n::translate(lang, &mission.description_key));
    println!();

    for (i, exercise) in mission.exercises.iter().enumerate() {
        println!(
            "  {}. [{}] {} - {}",
            i + 1,
            if exercise.completed { "x" } else { " " },
            exercise.name,
            measure_text(exercise)
        );
    }
}

fn measure_text(exercise: &MissionExercise) -> String {
    match exercise.measure {
        Measure::Reps { count } => match exercise.sets {
            Some(sets) => format!("{}x{} reps", sets, count),
            None => format!("{} reps", count),
        },
        Measure::Seconds { count } => match exercise.sets {
            Some(sets) => format!("{}x{}s", sets, count),
            None => format!("{}s", count),
        },
        Measure::Miles { distance } => format!("{:.2} miles", distance),
    }
}
