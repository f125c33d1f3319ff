use std::collections::HashMap;

use tokio::task::JoinHandle;
use tracing::debug;

pub const RECOMMENDATION_TASK: &str = "recommendation";

#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, key: &str, task: JoinHandle<()>) {
        self.tasks.retain(|_, handle| !handle.is_finished());
        if let Some(previous) = self.tasks.insert(key.to_string(), task) {
            // Only finished work is ever replaced; in-flight requests are never cancelled.
            debug!(key, finished = previous.is_finished(), "replacing task handle");
        }
    }

    pub fn is_running(&self, key: &str) -> bool {
        self.tasks
            .get(key)
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn abort_all(&mut self) {
        for (key, handle) in self.tasks.drain() {
            if !handle.is_finished() {
                debug!(key, "aborting task on shutdown");
                handle.abort();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn tracks_and_aborts_running_tasks() {
        let mut tasks = TaskManager::new();
        tasks.track(
            RECOMMENDATION_TASK,
            tokio::spawn(async {
                tokio::time::sleep(Duration::from_secs(60)).await;
            }),
        );
        assert!(tasks.is_running(RECOMMENDATION_TASK));

        tasks.abort_all();
        assert!(!tasks.is_running(RECOMMENDATION_TASK));
    }

    #[tokio::test]
    async fn finished_tasks_are_not_running() {
        let mut tasks = TaskManager::new();
        let handle = tokio::spawn(async {});
        while !handle.is_finished() {
            tokio::task::yield_now().await;
        }
        tasks.track(RECOMMENDATION_TASK, handle);
        assert!(!tasks.is_running(RECOMMENDATION_TASK));
        assert!(!tasks.is_running("other"));
    }
}
