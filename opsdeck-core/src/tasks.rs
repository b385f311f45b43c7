//! Keyed async tasks with superseding
//!
//! Each task runs under a [`TaskKey`]. Spawning under a key that already has
//! a task aborts the older one, so at most one fetch per key is in flight and
//! a superseded request never reports back. Every spawn also gets a
//! generation number, which callers can stamp into their result actions.
//!
//! ```ignore
//! let (action_tx, mut action_rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut tasks = TaskManager::new(action_tx);
//!
//! tasks.spawn("credentials", async move {
//!     match provider.read(&query).await {
//!         Ok(page) => Action::LookupDidLoad { request, page },
//!         Err(e) => Action::LookupDidError { request, error: e.to_string() },
//!     }
//! });
//! ```

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::Action;

/// Identifies a task slot; tasks with the same key replace each other.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskKey(String);

impl TaskKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TaskKey {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TaskKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

struct Running {
    generation: u64,
    handle: AbortHandle,
}

/// Owns spawned tasks and sends their result actions back to the loop.
pub struct TaskManager<A> {
    tasks: HashMap<TaskKey, Running>,
    next_generation: u64,
    action_tx: mpsc::UnboundedSender<A>,
}

impl<A> TaskManager<A>
where
    A: Action,
{
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            tasks: HashMap::new(),
            next_generation: 0,
            action_tx,
        }
    }

    /// Spawn `future` under `key`, aborting whatever ran there before.
    ///
    /// The action produced by the future is sent to the loop unless the task
    /// is aborted first. Returns the generation assigned to this spawn.
    pub fn spawn<F>(&mut self, key: impl Into<TaskKey>, future: F) -> u64
    where
        F: Future<Output = A> + Send + 'static,
    {
        let key = key.into();
        if self.cancel(&key) {
            tracing::debug!(task = key.name(), "superseding in-flight task");
        }

        self.next_generation += 1;
        let generation = self.next_generation;

        let tx = self.action_tx.clone();
        let handle = tokio::spawn(async move {
            let action = future.await;
            let _ = tx.send(action);
        });

        self.tasks.insert(
            key,
            Running {
                generation,
                handle: handle.abort_handle(),
            },
        );
        generation
    }

    /// Abort the task under `key`. Returns whether one was still running.
    pub fn cancel(&mut self, key: &TaskKey) -> bool {
        match self.tasks.remove(key) {
            Some(running) => {
                let was_running = !running.handle.is_finished();
                running.handle.abort();
                was_running
            }
            None => false,
        }
    }

    /// Abort everything (shutdown).
    pub fn cancel_all(&mut self) {
        for (_, running) in self.tasks.drain() {
            running.handle.abort();
        }
    }

    /// Whether a task under `key` has not finished yet.
    pub fn is_running(&self, key: &TaskKey) -> bool {
        self.tasks
            .get(key)
            .is_some_and(|running| !running.handle.is_finished())
    }

    /// Generation of the latest spawn under `key`.
    pub fn generation(&self, key: &TaskKey) -> Option<u64> {
        self.tasks.get(key).map(|running| running.generation)
    }

    /// Number of unfinished tasks.
    pub fn len(&self) -> usize {
        self.tasks
            .values()
            .filter(|running| !running.handle.is_finished())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        for (_, running) in self.tasks.drain() {
            running.handle.abort();
        }
    }
}
