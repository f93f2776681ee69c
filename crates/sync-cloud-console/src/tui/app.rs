/*
[INPUT]:  SyncCloudApi handle, UI events, API responses
[OUTPUT]: AppState for the TUI and the background request plumbing
[POS]:    TUI application state
[UPDATE]: When adding state, requests, or event kinds
*/

use std::sync::Arc;

use crossterm::event::Event as CrosstermEvent;
use tokio::sync::mpsc;
use tracing::{debug, info};

use sync_cloud_adapter::{SyncCloudApi, SyncTask, SyncTaskConfig};
use sync_cloud_console::logging::LogBufferHandle;
use sync_cloud_console::{
    FetchTicket, Notifications, SubmitOutcome, TaskAction, TaskCommand, TaskCreation,
    TaskListView,
};

use super::ui::modal::CreateSyncCloudModal;

pub(super) enum UiEvent {
    Input(CrosstermEvent),
    Api(ApiEvent),
}

pub(super) enum ApiEvent {
    Listed {
        ticket: FetchTicket,
        result: sync_cloud_adapter::Result<Vec<SyncTask>>,
    },
    Created {
        result: sync_cloud_adapter::Result<()>,
    },
    Commanded {
        command: TaskCommand,
        result: sync_cloud_adapter::Result<()>,
    },
}

pub(super) struct AppState {
    api: Arc<dyn SyncCloudApi>,
    events_tx: mpsc::UnboundedSender<UiEvent>,
    pub(super) base_url: String,
    pub(super) log_buffer: LogBufferHandle,
    pub(super) creation: TaskCreation,
    pub(super) create_modal: CreateSyncCloudModal,
    pub(super) list: TaskListView,
    pub(super) notices: Notifications,
    /// Columns of the card grid at the last draw
    pub(super) grid_columns: usize,
    /// Bumped to ask the task list for a re-fetch
    refresh_trigger: u64,
}

impl AppState {
    pub(super) fn new(
        api: Arc<dyn SyncCloudApi>,
        base_url: String,
        events_tx: mpsc::UnboundedSender<UiEvent>,
        log_buffer: LogBufferHandle,
    ) -> Self {
        Self {
            api,
            events_tx,
            base_url,
            log_buffer,
            creation: TaskCreation::new(),
            create_modal: CreateSyncCloudModal::default(),
            list: TaskListView::new(),
            notices: Notifications::default(),
            grid_columns: 1,
            refresh_trigger: 0,
        }
    }

    pub(super) fn request_refresh(&mut self) {
        self.refresh_trigger = self.refresh_trigger.wrapping_add(1);
    }

    /// Starts a list fetch when the refresh trigger moved since the last look.
    /// Also fires once on the first call.
    pub(super) fn sync_refresh_trigger(&mut self) {
        if self.list.observe_trigger(self.refresh_trigger) {
            self.spawn_fetch();
        }
    }

    pub(super) fn open_create(&mut self) {
        self.create_modal.reset();
        self.creation.open();
    }

    pub(super) fn close_create(&mut self) {
        self.creation.close();
        self.create_modal.reset();
    }

    pub(super) fn submit_create(&mut self) {
        if let Some(payload) = self.creation.begin_submit() {
            self.spawn_create(payload);
        }
    }

    pub(super) fn run_selected_action(&mut self, action: TaskAction) {
        let Some(id) = self.list.selected_task().map(|task| task.id().to_string()) else {
            return;
        };
        match self.list.begin_action(&id, action) {
            Some(command) => self.spawn_command(command),
            None => self
                .notices
                .info(format!("{} already in progress", action.label())),
        }
    }

    pub(super) fn request_delete_selected(&mut self) {
        if let Some(id) = self.list.selected_task().map(|task| task.id().to_string()) {
            self.list.request_delete(&id);
        }
    }

    pub(super) fn confirm_delete(&mut self) {
        if let Some(command) = self.list.confirm_delete() {
            self.spawn_command(command);
        }
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        self.list.move_selection(delta);
    }

    pub(super) fn handle_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Listed { ticket, result } => {
                self.list.apply_fetch(ticket, result, &mut self.notices);
            }
            ApiEvent::Created { result } => {
                if self.creation.finish_submit(result, &mut self.notices) == SubmitOutcome::Created
                {
                    self.create_modal.reset();
                    self.request_refresh();
                }
            }
            ApiEvent::Commanded { command, result } => {
                if self.list.finish_action(&command, result, &mut self.notices) {
                    self.spawn_fetch();
                }
            }
        }
    }

    fn spawn_fetch(&mut self) {
        let ticket = self.list.begin_fetch();
        let api = self.api.clone();
        let events_tx = self.events_tx.clone();
        debug!(?ticket, "fetching task list");
        tokio::spawn(async move {
            let result = api.list_tasks().await;
            let _ = events_tx.send(UiEvent::Api(ApiEvent::Listed { ticket, result }));
        });
    }

    fn spawn_create(&self, payload: SyncTaskConfig) {
        let api = self.api.clone();
        let events_tx = self.events_tx.clone();
        info!(name = %payload.name, cloud_type = %payload.cloud_type, "creating sync task");
        tokio::spawn(async move {
            let result = api.create_task(&payload).await;
            let _ = events_tx.send(UiEvent::Api(ApiEvent::Created { result }));
        });
    }

    fn spawn_command(&self, command: TaskCommand) {
        let api = self.api.clone();
        let events_tx = self.events_tx.clone();
        info!(task_id = %command.id, action = command.action.label(), "sending task command");
        tokio::spawn(async move {
            let result = command.send(api.as_ref()).await;
            let _ = events_tx.send(UiEvent::Api(ApiEvent::Commanded { command, result }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use sync_cloud_adapter::{ProcessInfo, SyncCloudError, TaskStatus};
    use sync_cloud_console::{FormField, NoticeLevel};
    use sync_cloud_console::logging::LogBuffer;

    #[derive(Default)]
    struct FakeApi {
        tasks: Mutex<Vec<SyncTask>>,
        list_calls: AtomicUsize,
        commands: Mutex<Vec<String>>,
        fail_create: bool,
    }

    #[async_trait]
    impl SyncCloudApi for FakeApi {
        async fn create_task(&self, config: &SyncTaskConfig) -> sync_cloud_adapter::Result<()> {
            if self.fail_create {
                return Err(SyncCloudError::Api {
                    code: 500,
                    message: String::from("duplicate name"),
                });
            }
            self.tasks
                .lock()
                .expect("lock")
                .push(task("9", &config.name));
            Ok(())
        }

        async fn list_tasks(&self) -> sync_cloud_adapter::Result<Vec<SyncTask>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.tasks.lock().expect("lock").clone())
        }

        async fn start_task(&self, id: &str) -> sync_cloud_adapter::Result<()> {
            self.commands.lock().expect("lock").push(format!("start {id}"));
            Ok(())
        }

        async fn stop_task(&self, id: &str) -> sync_cloud_adapter::Result<()> {
            self.commands.lock().expect("lock").push(format!("stop {id}"));
            Ok(())
        }

        async fn delete_task(&self, id: &str) -> sync_cloud_adapter::Result<()> {
            self.commands.lock().expect("lock").push(format!("delete {id}"));
            self.tasks.lock().expect("lock").retain(|task| task.id() != id);
            Ok(())
        }
    }

    fn task(id: &str, name: &str) -> SyncTask {
        SyncTask {
            name: name.to_string(),
            cloud_type: String::from("oss"),
            proc_file_count: 0,
            proc_info: ProcessInfo {
                id: id.to_string(),
                status: TaskStatus::Running,
                start_time: String::from("2024-01-01T00:00:00Z"),
                end_time: None,
                total_bytes: 0,
                error: None,
            },
        }
    }

    fn app_with(api: Arc<FakeApi>) -> (AppState, mpsc::UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = AppState::new(
            api,
            String::from("http://127.0.0.1:5244/"),
            tx,
            LogBuffer::handle(10),
        );
        (app, rx)
    }

    async fn pump(app: &mut AppState, rx: &mut mpsc::UnboundedReceiver<UiEvent>) {
        if let Some(UiEvent::Api(event)) = rx.recv().await {
            app.handle_api_event(event);
        }
    }

    #[tokio::test]
    async fn test_first_sync_fetches_once() {
        let api = Arc::new(FakeApi::default());
        api.tasks.lock().expect("lock").push(task("1", "backup"));
        let (mut app, mut rx) = app_with(api.clone());

        app.sync_refresh_trigger();
        app.sync_refresh_trigger();
        pump(&mut app, &mut rx).await;

        assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);
        assert_eq!(app.list.tasks().len(), 1);
    }

    #[tokio::test]
    async fn test_create_success_bumps_trigger_and_refetches() {
        let api = Arc::new(FakeApi::default());
        let (mut app, mut rx) = app_with(api.clone());
        app.sync_refresh_trigger();
        pump(&mut app, &mut rx).await;

        app.open_create();
        app.creation.set(FormField::Name, "backup1");
        app.submit_create();
        app.submit_create();
        pump(&mut app, &mut rx).await;
        assert!(!app.creation.is_open());

        app.sync_refresh_trigger();
        pump(&mut app, &mut rx).await;
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 2);
        assert_eq!(app.list.tasks()[0].name, "backup1");
    }

    #[tokio::test]
    async fn test_create_failure_keeps_modal_open() {
        let api = Arc::new(FakeApi {
            fail_create: true,
            ..FakeApi::default()
        });
        let (mut app, mut rx) = app_with(api.clone());

        app.open_create();
        app.creation.set(FormField::Name, "dup");
        app.submit_create();
        pump(&mut app, &mut rx).await;

        assert!(app.creation.is_open());
        assert!(!app.creation.is_loading());
        assert_eq!(app.creation.value(FormField::Name), "dup");
        let notice = app.notices.latest().expect("notice");
        assert_eq!(notice.message, "duplicate name");
        app.sync_refresh_trigger();
        pump(&mut app, &mut rx).await;
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_confirmed_delete_sends_command_then_one_fetch() {
        let api = Arc::new(FakeApi::default());
        api.tasks.lock().expect("lock").push(task("7", "old"));
        let (mut app, mut rx) = app_with(api.clone());
        app.sync_refresh_trigger();
        pump(&mut app, &mut rx).await;

        app.request_delete_selected();
        app.confirm_delete();
        pump(&mut app, &mut rx).await;
        pump(&mut app, &mut rx).await;

        assert_eq!(*api.commands.lock().expect("lock"), vec!["delete 7"]);
        assert_eq!(api.list_calls.load(Ordering::SeqCst), 2);
        assert!(!app.list.is_visible());
    }

    #[tokio::test]
    async fn test_action_without_selection_is_noop() {
        let api = Arc::new(FakeApi::default());
        let (mut app, _rx) = app_with(api.clone());
        app.run_selected_action(TaskAction::Start);
        tokio::task::yield_now().await;
        assert!(api.commands.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn test_repeated_action_reports_in_progress() {
        let api = Arc::new(FakeApi::default());
        api.tasks.lock().expect("lock").push(task("3", "photos"));
        let (mut app, mut rx) = app_with(api.clone());
        app.sync_refresh_trigger();
        pump(&mut app, &mut rx).await;

        app.run_selected_action(TaskAction::Start);
        app.run_selected_action(TaskAction::Start);

        let notice = app.notices.latest().expect("notice");
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.message, "enable already in progress");
        assert!(app.list.is_action_pending("3", TaskAction::Start));
    }
}
