use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::errors::AppResult;
use crate::models::{SessionUser, Task};

/// Key holding the serialized session user.
pub const USER_KEY: &str = "user";
/// Key holding the serialized task list.
pub const TASKS_KEY: &str = "tasks";

/// String-keyed, string-valued persistence, one file per key under a data
/// directory. Reads and writes are synchronous and independent per key;
/// nothing spans two keys transactionally.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Raw read. An absent key is the empty state, not an error.
    pub fn get(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set(&self, key: &str, value: &str) -> AppResult<()> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    /// Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn get_user(&self) -> AppResult<Option<SessionUser>> {
        match self.get(USER_KEY)? {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    pub fn save_user(&self, user: &SessionUser) -> AppResult<()> {
        self.set(USER_KEY, &serde_json::to_string(user)?)
    }

    pub fn clear_user(&self) -> AppResult<()> {
        self.remove(USER_KEY)
    }

    pub fn get_tasks(&self) -> AppResult<Option<Vec<Task>>> {
        match self.get(TASKS_KEY)? {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> AppResult<()> {
        self.set(TASKS_KEY, &serde_json::to_string(tasks)?)
    }

    pub fn clear_tasks(&self) -> AppResult<()> {
        self.remove(TASKS_KEY)
    }
}
