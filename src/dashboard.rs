use tokio::time::sleep;

use crate::config::LatencyConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{Task, TaskStats};
use crate::services::LocalStore;

/// In-memory task list backing the dashboard, mirrored to the local store
/// after every successful change. Tasks are ordered newest first.
pub struct Dashboard {
    store: LocalStore,
    latency: LatencyConfig,
    tasks: Vec<Task>,
}

impl Dashboard {
    pub fn new(store: LocalStore, latency: LatencyConfig) -> Self {
        Self {
            store,
            latency,
            tasks: Vec::new(),
        }
    }

    /// Tasks in display order, newest first.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Counts derived from the current list on every call.
    pub fn stats(&self) -> TaskStats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskStats {
            total,
            completed,
            pending: total - completed,
        }
    }

    /// Load the persisted list, if any. Loading never writes back, so a
    /// fresh profile stays without a task key until the first change. On an
    /// unreadable value the list stays empty and the error is returned.
    pub fn restore(&mut self) -> AppResult<()> {
        match self.store.get_tasks() {
            Ok(Some(tasks)) => {
                tracing::info!("Loaded {} persisted tasks", tasks.len());
                self.tasks = tasks;
                Ok(())
            }
            Ok(None) => {
                tracing::debug!("No persisted tasks");
                Ok(())
            }
            Err(e) => {
                tracing::error!("Error loading tasks: {}", e);
                Err(e)
            }
        }
    }

    /// Add a task to the front of the list. Whitespace-only descriptions are
    /// rejected up front, before the simulated delay.
    pub async fn add_task(&mut self, text: &str) -> AppResult<Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::Validation("Task description cannot be empty".into()));
        }

        sleep(self.latency.add()).await;

        let task = Task::new(text);
        self.tasks.insert(0, task.clone());
        self.store.save_tasks(&self.tasks)?;

        tracing::info!("Added task {}: {}", task.id, task.text);
        Ok(task)
    }

    /// Flip the completion state of one task. An id that matches nothing is
    /// logged and ignored; the list and the store are left untouched.
    pub async fn toggle_task(&mut self, id: &str) -> AppResult<()> {
        sleep(self.latency.toggle()).await;

        let completed = match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                task.completed
            }
            None => {
                tracing::warn!("Toggle for unknown task: {}", id);
                return Ok(());
            }
        };
        self.store.save_tasks(&self.tasks)?;

        tracing::info!("Toggled task {} to completed={}", id, completed);
        Ok(())
    }

    /// Remove one task by id. An id that matches nothing is logged and
    /// ignored without touching the store.
    pub async fn delete_task(&mut self, id: &str) -> AppResult<()> {
        sleep(self.latency.delete()).await;

        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            tracing::warn!("Delete for unknown task: {}", id);
            return Ok(());
        }
        self.store.save_tasks(&self.tasks)?;

        tracing::info!("Deleted task {}", id);
        Ok(())
    }
}
