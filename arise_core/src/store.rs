//! Persistence gateway: users and in-progress missions as JSON files.
//!
//! Profiles live together in `users.json`, keyed by id; the resumable
//! mission is one file per user under `missions/`. Reads take shared file
//! locks, writes go through a temp file and an atomic rename. Corrupt data
//! surfaces as an error; recovery policy belongs to the caller.

use crate::{Error, Mission, Result, User};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use uuid::Uuid;

/// File-backed store for user aggregates and their current missions
pub struct UserStore {
    data_dir: PathBuf,
}

impl UserStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn users_path(&self) -> PathBuf {
        self.data_dir.join("users.json")
    }

    fn mission_path(&self, user_id: Uuid) -> PathBuf {
        self.data_dir.join("missions").join(format!("{}.json", user_id))
    }

    fn load_all(&self) -> Result<HashMap<Uuid, User>> {
        Ok(read_json_locked(&self.users_path())?.unwrap_or_default())
    }

    /// Load a user by id.
    pub fn load(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.load_all()?.remove(&id))
    }

    /// Insert or replace a user snapshot.
    pub fn save(&self, user: &User) -> Result<()> {
        let mut users = self.load_all()?;
        users.insert(user.id, user.clone());
        write_json_atomic(&self.users_path(), &users)?;
        tracing::debug!("Saved user {} ({})", user.name, user.id);
        Ok(())
    }

    /// Case-insensitive lookup by display name.
    ///
    /// `Ok(None)` is the normal "create a new profile" outcome.
    pub fn find_by_name(&self, name: &str) -> Result<Option<User>> {
        let wanted = name.trim().to_lowercase();
        Ok(self
            .load_all()?
            .into_values()
            .find(|user| user.name.to_lowercase() == wanted))
    }

    /// The resume-without-a-name profile, by lowercased name order.
    pub fn first_user(&self) -> Result<Option<User>> {
        Ok(self
            .load_all()?
            .into_values()
            .min_by_key(|user| user.name.to_lowercase()))
    }

    /// Load the in-progress mission persisted for a user, if any.
    pub fn load_mission(&self, user_id: Uuid) -> Result<Option<Mission>> {
        read_json_locked(&self.mission_path(user_id))
    }

    /// Persist the in-progress mission for a user.
    pub fn save_mission(&self, user_id: Uuid, mission: &Mission) -> Result<()> {
        write_json_atomic(&self.mission_path(user_id), mission)?;
        tracing::debug!("Saved mission {} for user {}", mission.id, user_id);
        Ok(())
    }
}

fn read_json_locked<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)?;
    file.lock_shared()?;

    let mut contents = String::new();
    let mut reader = std::io::BufReader::new(&file);
    let read_result = reader.read_to_string(&mut contents);
    file.unlock()?;
    read_result?;

    Ok(Some(serde_json::from_str(&contents)?))
}

/// Atomic write: temp file in the target directory, sync, rename over.
fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| Error::Store(format!("{} has no parent directory", path.display())))?;
    std::fs::create_dir_all(parent)?;

    let temp = NamedTempFile::new_in(parent)?;
    temp.as_file().lock_exclusive()?;

    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        let contents = serde_json::to_string(value)?;
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    temp.as_file().sync_all()?;
    temp.as_file().unlock()?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_default_catalog, generate_mission};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store() -> (tempfile::TempDir, UserStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = UserStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let (_dir, store) = store();
        let user = User::new("Hunter").unwrap();

        store.save(&user).unwrap();
        let loaded = store.load(user.id).unwrap().unwrap();

        assert_eq!(loaded.id, user.id);
        assert_eq!(loaded.name, "Hunter");
        assert_eq!(loaded.level, 1);
    }

    #[test]
    fn test_load_unknown_id_returns_none() {
        let (_dir, store) = store();
        assert!(store.load(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_save_replaces_existing_snapshot() {
        let (_dir, store) = store();
        let user = User::new("Hunter").unwrap();
        store.save(&user).unwrap();

        let mut progressed = user.clone();
        progressed.level = 5;
        progressed.experience = 77;
        store.save(&progressed).unwrap();

        let loaded = store.load(user.id).unwrap().unwrap();
        assert_eq!(loaded.level, 5);
        assert_eq!(loaded.experience, 77);
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        let (_dir, store) = store();
        store.save(&User::new("Hunter").unwrap()).unwrap();

        assert!(store.find_by_name("hunter").unwrap().is_some());
        assert!(store.find_by_name("  HUNTER ").unwrap().is_some());
        assert!(store.find_by_name("Shadow").unwrap().is_none());
    }

    #[test]
    fn test_first_user_orders_by_name() {
        let (_dir, store) = store();
        store.save(&User::new("Zed").unwrap()).unwrap();
        store.save(&User::new("ash").unwrap()).unwrap();

        let first = store.first_user().unwrap().unwrap();
        assert_eq!(first.name, "ash");
    }

    #[test]
    fn test_empty_store_has_no_first_user() {
        let (_dir, store) = store();
        assert!(store.first_user().unwrap().is_none());
    }

    #[test]
    fn test_corrupted_users_file_surfaces_error() {
        let (dir, store) = store();
        std::fs::write(dir.path().join("users.json"), "{ invalid json }").unwrap();

        assert!(store.first_user().is_err());
    }

    #[test]
    fn test_mission_roundtrip() {
        let (_dir, store) = store();
        let user = User::new("Hunter").unwrap();
        let catalog = build_default_catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let mission = generate_mission(&catalog, 1, &mut rng).unwrap();

        store.save_mission(user.id, &mission).unwrap();
        let loaded = store.load_mission(user.id).unwrap().unwrap();

        assert_eq!(loaded.id, mission.id);
        assert_eq!(loaded.exercises.len(), mission.exercises.len());
        assert_eq!(loaded.experience_reward, mission.experience_reward);
    }

    #[test]
    fn test_missing_mission_returns_none() {
        let (_dir, store) = store();
        assert!(store.load_mission(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn test_atomic_save_leaves_no_temp_files() {
        let (dir, store) = store();
        store.save(&User::new("Hunter").unwrap()).unwrap();

        let extras: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "users.json")
            .collect();
        assert!(
            extras.is_empty(),
            "Expected only users.json, found extras: {:?}",
            extras
        );
    }
}
