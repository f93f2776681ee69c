/*
[INPUT]:  Refresh trigger values, list responses, command responses
[OUTPUT]: Task collection mirrored from the server, selection, in-flight flags
[POS]:    Task list flow - list state shared by TUI and CLI
[UPDATE]: When list refresh rules or task actions change
*/

use std::collections::HashSet;

use sync_cloud_adapter::{SyncCloudApi, SyncTask};
use tracing::debug;

use crate::display::TaskCard;
use crate::notify::{DELETE_SUCCESS, Notifications, START_SUCCESS, STOP_SUCCESS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskAction {
    Start,
    Stop,
    Delete,
}

impl TaskAction {
    pub fn label(self) -> &'static str {
        match self {
            TaskAction::Start => "enable",
            TaskAction::Stop => "disable",
            TaskAction::Delete => "delete",
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            TaskAction::Start => START_SUCCESS,
            TaskAction::Stop => STOP_SUCCESS,
            TaskAction::Delete => DELETE_SUCCESS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The same action is already in flight for this task
    Ignored,
    /// Server rejected the command; no re-fetch was made
    Failed,
    /// Command applied and the list re-fetched
    Refreshed,
    /// Command applied but the re-fetch failed; the list is stale
    RefreshFailed,
}

/// A command addressed to one task by its process id
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskCommand {
    pub id: String,
    pub action: TaskAction,
}

impl TaskCommand {
    pub async fn send<A>(&self, api: &A) -> sync_cloud_adapter::Result<()>
    where
        A: SyncCloudApi + ?Sized,
    {
        match self.action {
            TaskAction::Start => api.start_task(&self.id).await,
            TaskAction::Stop => api.stop_task(&self.id).await,
            TaskAction::Delete => api.delete_task(&self.id).await,
        }
    }
}

/// Issue order of a list request; later tickets supersede earlier ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// Client-side view of the server's sync tasks.
///
/// The collection is only ever replaced wholesale by a list response.
/// Commands never touch it; they request a re-fetch instead.
#[derive(Debug, Default)]
pub struct TaskListView {
    tasks: Vec<SyncTask>,
    last_trigger: Option<u64>,
    issued: u64,
    applied: u64,
    fetches_in_flight: usize,
    actions_in_flight: HashSet<TaskCommand>,
    selected: usize,
    pending_delete: Option<String>,
}

impl TaskListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the list must be fetched: on the first observation
    /// and whenever the parent's trigger value changed since the last one.
    pub fn observe_trigger(&mut self, trigger: u64) -> bool {
        if self.last_trigger == Some(trigger) {
            return false;
        }
        self.last_trigger = Some(trigger);
        true
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.fetches_in_flight += 1;
        FetchTicket(self.issued)
    }

    /// Applies a list response. Returns true when the collection was replaced.
    pub fn apply_fetch(
        &mut self,
        ticket: FetchTicket,
        result: sync_cloud_adapter::Result<Vec<SyncTask>>,
        notices: &mut Notifications,
    ) -> bool {
        self.fetches_in_flight = self.fetches_in_flight.saturating_sub(1);
        if ticket.0 <= self.applied {
            debug!(ticket = ticket.0, applied = self.applied, "discarding stale list response");
            if let Err(err) = result {
                notices.error(err.user_message());
            }
            return false;
        }

        match result {
            Ok(tasks) => {
                debug!(ticket = ticket.0, count = tasks.len(), "task list replaced");
                self.applied = ticket.0;
                self.tasks = tasks;
                self.clamp_selection();
                if self
                    .pending_delete
                    .as_deref()
                    .is_some_and(|id| self.find(id).is_none())
                {
                    self.pending_delete = None;
                }
                true
            }
            Err(err) => {
                notices.error(err.user_message());
                false
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.fetches_in_flight > 0
    }

    /// Fetches the list and replaces the collection with the response
    pub async fn refresh<A>(&mut self, api: &A, notices: &mut Notifications) -> bool
    where
        A: SyncCloudApi + ?Sized,
    {
        let ticket = self.begin_fetch();
        let result = api.list_tasks().await;
        self.apply_fetch(ticket, result, notices)
    }

    /// Marks an action in flight. `None` if the same action on the same task
    /// has not finished yet.
    pub fn begin_action(&mut self, id: &str, action: TaskAction) -> Option<TaskCommand> {
        let command = TaskCommand {
            id: id.to_string(),
            action,
        };
        if !self.actions_in_flight.insert(command.clone()) {
            debug!(task_id = %id, action = action.label(), "action already in flight");
            return None;
        }
        Some(command)
    }

    pub fn is_action_pending(&self, id: &str, action: TaskAction) -> bool {
        self.actions_in_flight.contains(&TaskCommand {
            id: id.to_string(),
            action,
        })
    }

    /// Records a command response. Returns true when a re-fetch must follow.
    pub fn finish_action(
        &mut self,
        command: &TaskCommand,
        result: sync_cloud_adapter::Result<()>,
        notices: &mut Notifications,
    ) -> bool {
        self.actions_in_flight.remove(command);
        match result {
            Ok(()) => {
                notices.success(command.action.success_message());
                true
            }
            Err(err) => {
                notices.error(err.user_message());
                false
            }
        }
    }

    /// Sends a command, then on success fetches the list exactly once
    pub async fn run_action<A>(
        &mut self,
        api: &A,
        id: &str,
        action: TaskAction,
        notices: &mut Notifications,
    ) -> ActionOutcome
    where
        A: SyncCloudApi + ?Sized,
    {
        let Some(command) = self.begin_action(id, action) else {
            return ActionOutcome::Ignored;
        };
        self.send_and_refresh(api, &command, notices).await
    }

    /// Sends an already-begun command and re-fetches after a success
    pub async fn send_and_refresh<A>(
        &mut self,
        api: &A,
        command: &TaskCommand,
        notices: &mut Notifications,
    ) -> ActionOutcome
    where
        A: SyncCloudApi + ?Sized,
    {
        let result = command.send(api).await;
        if !self.finish_action(command, result, notices) {
            return ActionOutcome::Failed;
        }
        if self.refresh(api, notices).await {
            ActionOutcome::Refreshed
        } else {
            ActionOutcome::RefreshFailed
        }
    }

    /// Asks for confirmation before deleting. Returns false for unknown ids.
    pub fn request_delete(&mut self, id: &str) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.pending_delete = Some(id.to_string());
        true
    }

    pub fn pending_delete(&self) -> Option<&SyncTask> {
        self.pending_delete.as_deref().and_then(|id| self.find(id))
    }

    pub fn confirm_delete(&mut self) -> Option<TaskCommand> {
        let id = self.pending_delete.take()?;
        self.begin_action(&id, TaskAction::Delete)
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Nothing is rendered for an empty collection, not even the heading
    pub fn is_visible(&self) -> bool {
        !self.tasks.is_empty()
    }

    pub fn tasks(&self) -> &[SyncTask] {
        &self.tasks
    }

    pub fn cards(&self) -> Vec<TaskCard> {
        self.tasks.iter().map(TaskCard::from_task).collect()
    }

    pub fn selected_index(&self) -> Option<usize> {
        if self.tasks.is_empty() {
            None
        } else {
            Some(self.selected)
        }
    }

    pub fn selected_task(&self) -> Option<&SyncTask> {
        self.tasks.get(self.selected)
    }

    pub fn move_selection(&mut self, delta: isize) {
        if self.tasks.is_empty() {
            self.selected = 0;
            return;
        }
        let last = self.tasks.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.tasks.len().saturating_sub(1));
    }

    fn find(&self, id: &str) -> Option<&SyncTask> {
        self.tasks.iter().find(|task| task.id() == id)
    }
}
