//! Background task management for the wizard's async collaborator calls.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::submit;
use crate::backend::{ActivityBackend, ActivityDraft, DirectoryProvider, Recipient};
use crate::model::FilterGroup;

pub type TaskId = u64;

/// Events background tasks report back to the owning UI loop.
#[derive(Debug, Clone)]
pub enum WizardEvent {
    GroupsLoaded(Vec<FilterGroup>),
    GroupsLoadFailed(String),
    SubmitStarted,
    SubmitCompleted { activity_id: String },
    SubmitFailed(String),
}

/// Spawns and tracks the wizard's async collaborator calls.
///
/// Results come back over the event channel rather than through the join
/// handles. A host that tears down simply drops the manager: running tasks
/// are aborted, since nobody is interested in the results anymore.
pub struct WizardTaskManager {
    tasks: HashMap<TaskId, JoinHandle<()>>,
    next_task_id: TaskId,
    event_sender: mpsc::UnboundedSender<WizardEvent>,
    submit_in_progress: Arc<Mutex<bool>>,
}

impl WizardTaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<WizardEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                event_sender: tx,
                submit_in_progress: Arc::new(Mutex::new(false)),
            },
            rx,
        )
    }

    /// Spawn a directory fetch; the hierarchy arrives as a
    /// [`WizardEvent::GroupsLoaded`].
    pub fn spawn_load_groups(&mut self, provider: Arc<dyn DirectoryProvider>) -> TaskId {
        let task_id = self.claim_task_id();
        let sender = self.event_sender.clone();

        let handle = tokio::spawn(async move {
            match provider.fetch_groups().await {
                Ok(groups) => {
                    let _ = sender.send(WizardEvent::GroupsLoaded(groups));
                }
                Err(error) => {
                    let _ = sender.send(WizardEvent::GroupsLoadFailed(error.to_string()));
                }
            }
        });

        self.tasks.insert(task_id, handle);
        task_id
    }

    /// Spawn the submission chain.
    ///
    /// Returns `None` while a previous submission is still in flight —
    /// duplicate submits are ignored, not queued.
    pub fn spawn_submit(
        &mut self,
        backend: Arc<dyn ActivityBackend>,
        draft: ActivityDraft,
        recipients: Vec<Recipient>,
    ) -> Option<TaskId> {
        {
            let mut in_progress = self.submit_in_progress.lock().ok()?;
            if *in_progress {
                return None;
            }
            *in_progress = true;
        }

        let task_id = self.claim_task_id();
        let sender = self.event_sender.clone();
        let guard = Arc::clone(&self.submit_in_progress);

        let handle = tokio::spawn(async move {
            let _ = sender.send(WizardEvent::SubmitStarted);
            let outcome = submit::submit_activity(backend.as_ref(), &draft, &recipients).await;
            // Release the guard before reporting, so an observer reacting to
            // the event may immediately start the next submission.
            if let Ok(mut in_progress) = guard.lock() {
                *in_progress = false;
            }
            match outcome {
                Ok(activity_id) => {
                    let _ = sender.send(WizardEvent::SubmitCompleted { activity_id });
                }
                Err(error) => {
                    let _ = sender.send(WizardEvent::SubmitFailed(submit::failure_message(&error)));
                }
            }
        });

        self.tasks.insert(task_id, handle);
        Some(task_id)
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.submit_in_progress.lock().map(|flag| *flag).unwrap_or(false)
    }

    /// Drop finished task handles and return how many were reaped.
    pub fn cleanup_finished_tasks(&mut self) -> usize {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, handle)| handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();
        for task_id in &finished {
            self.tasks.remove(task_id);
        }
        finished.len()
    }

    /// Number of tracked tasks, finished or not.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Abort everything still running.
    pub fn cancel_all_tasks(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    fn claim_task_id(&mut self) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;
        task_id
    }
}

impl Drop for WizardTaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
