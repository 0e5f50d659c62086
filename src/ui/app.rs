//! Application state and business logic

use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{error, info};
use ratatui::widgets::ListState;
use tokio::task::JoinHandle;

use super::form::ReportForm;
use super::toast::{Toast, ToastKind};
use crate::config::DisplayConfig;
use crate::constants::CLOUD_FILE_URL;
use crate::item::{FilterType, Item, ItemType};
use crate::logger::{self, Logger};
use crate::query::ItemStats;
use crate::sync::{RefreshOutcome, SyncEvent, SyncService, SyncState};
use crate::utils::datetime;

/// Contents of the cloud info dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudInfo {
    pub file_url: String,
    pub last_upload: Option<String>,
    pub item_count: usize,
}

/// Application state
pub struct App {
    pub should_quit: bool,
    /// Items currently shown, i.e. the filtered view
    pub items: Vec<Item>,
    pub stats: ItemStats,
    pub current_filter: FilterType,
    pub search_text: String,
    pub search_active: bool,
    pub sync_state: SyncState,
    pub last_sync: Option<DateTime<Utc>>,
    pub selected_index: usize,
    pub item_list_state: ListState,
    pub form: Option<ReportForm>,
    pub toast: Option<Toast>,
    pub show_help: bool,
    pub show_logs: bool,
    pub logs_scroll: usize,
    pub cloud_info: Option<CloudInfo>,
    // Background work, polled by the main loop
    pub refresh_task: Option<JoinHandle<anyhow::Result<RefreshOutcome>>>,
    pub save_task: Option<JoinHandle<anyhow::Result<bool>>>,
    pub date_format: String,
    pub toast_duration: Duration,
    pub logger: Logger,
}

impl App {
    /// Create a new App instance
    #[must_use]
    pub fn new(display: &DisplayConfig) -> Self {
        let mut item_list_state = ListState::default();
        item_list_state.select(Some(0));

        Self {
            should_quit: false,
            items: Vec::new(),
            stats: ItemStats::default(),
            current_filter: FilterType::All,
            search_text: String::new(),
            search_active: false,
            sync_state: SyncState::Idle,
            last_sync: None,
            selected_index: 0,
            item_list_state,
            form: None,
            toast: None,
            show_help: false,
            show_logs: false,
            logs_scroll: 0,
            cloud_info: None,
            refresh_task: None,
            save_task: None,
            date_format: display.date_format.clone(),
            toast_duration: Duration::from_secs(display.toast_duration_secs),
            logger: logger::buffer(),
        }
    }

    /// Pull the latest repository view and sync status from the service
    pub async fn sync_from_service(&mut self, sync_service: &SyncService) {
        let repository = sync_service.repository().await;
        self.items = repository.filtered_items().to_vec();
        self.stats = repository.stats();
        self.current_filter = repository.current_filter();
        self.sync_state = sync_service.state().await;
        self.last_sync = sync_service.last_sync().await;
        self.clamp_selection();
    }

    /// Currently selected item in the list
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected_index)
    }

    pub fn is_busy(&self) -> bool {
        self.refresh_task.is_some() || self.save_task.is_some()
    }

    pub fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast::new(kind, message, self.toast_duration));
    }

    /// Drop the toast once its time is up
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Start a refresh in the background unless one is already running
    pub fn start_refresh(&mut self, sync_service: &SyncService) {
        if self.refresh_task.is_some() {
            return;
        }
        let svc = sync_service.clone();
        self.refresh_task = Some(tokio::spawn(async move { svc.refresh().await }));
    }

    /// Handle a message from the periodic refresher
    pub fn apply_sync_event(&mut self, event: SyncEvent) {
        match event {
            // Timer ticks that hit a running refresh stay silent
            SyncEvent::Refreshed(RefreshOutcome::AlreadyRunning) => {}
            SyncEvent::Refreshed(outcome) => self.toast = Some(Toast::for_refresh(&outcome, self.toast_duration)),
            SyncEvent::RefreshFailed(_) => self.toast = Some(Toast::for_refresh_error(self.toast_duration)),
        }
    }

    /// Collect finished background tasks, then refresh the view
    pub async fn poll_background(&mut self, sync_service: &SyncService) {
        if self.refresh_task.as_ref().is_some_and(JoinHandle::is_finished) {
            if let Some(handle) = self.refresh_task.take() {
                self.toast = Some(match handle.await {
                    Ok(Ok(outcome)) => Toast::for_refresh(&outcome, self.toast_duration),
                    Ok(Err(e)) => {
                        error!("❌ Refresh failed: {e:#}");
                        Toast::for_refresh_error(self.toast_duration)
                    }
                    Err(join_err) => {
                        error!("❌ Refresh task error: {join_err}");
                        Toast::for_refresh_error(self.toast_duration)
                    }
                });
            }
        }

        if self.save_task.as_ref().is_some_and(JoinHandle::is_finished) {
            if let Some(handle) = self.save_task.take() {
                let saved = match handle.await {
                    Ok(Ok(saved)) => Some(saved),
                    Ok(Err(e)) => {
                        error!("❌ Save failed: {e:#}");
                        None
                    }
                    Err(join_err) => {
                        error!("❌ Save task error: {join_err}");
                        None
                    }
                };
                self.toast = Some(Toast::for_save(saved, self.toast_duration));
                self.finish_submit(saved == Some(true));
            }
        }

        self.sync_from_service(sync_service).await;
    }

    // Form handling

    pub fn open_form(&mut self, item_type: ItemType) {
        self.form = Some(ReportForm::new(item_type));
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Validate the open form and save it in the background
    pub async fn submit_form(&mut self, sync_service: &SyncService) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        if form.submitting {
            return;
        }

        if let Err(message) = form.input.validate() {
            self.show_toast(ToastKind::Error, message);
            return;
        }

        let id = sync_service.new_item_id().await;
        let item = match form.input.clone().into_item(id, Utc::now()) {
            Ok(item) => item,
            Err(message) => {
                self.show_toast(ToastKind::Error, message);
                return;
            }
        };

        form.submitting = true;
        info!("Submitting {} item '{}'", item.item_type, item.name);
        let svc = sync_service.clone();
        self.save_task = Some(tokio::spawn(async move { svc.persist(item).await }));
    }

    /// The form stays open unless the cloud accepted the item
    fn finish_submit(&mut self, saved_to_cloud: bool) {
        if saved_to_cloud {
            self.form = None;
        } else if let Some(form) = self.form.as_mut() {
            form.submitting = false;
        }
    }

    // Search and filter

    pub fn start_search(&mut self) {
        self.search_active = true;
    }

    pub fn stop_search(&mut self) {
        self.search_active = false;
    }

    pub async fn push_search_char(&mut self, c: char, sync_service: &SyncService) {
        self.search_text.push(c);
        self.apply_search(sync_service).await;
    }

    pub async fn pop_search_char(&mut self, sync_service: &SyncService) {
        self.search_text.pop();
        self.apply_search(sync_service).await;
    }

    pub async fn clear_search(&mut self, sync_service: &SyncService) {
        self.search_text.clear();
        self.apply_search(sync_service).await;
    }

    async fn apply_search(&mut self, sync_service: &SyncService) {
        self.items = sync_service.set_search(&self.search_text).await;
        self.reset_selection();
    }

    pub async fn cycle_filter(&mut self, sync_service: &SyncService) {
        self.current_filter = self.current_filter.next();
        self.items = sync_service.set_filter(self.current_filter).await;
        self.reset_selection();
    }

    // Navigation

    pub fn next_item(&mut self) {
        if !self.items.is_empty() && self.selected_index + 1 < self.items.len() {
            self.selected_index += 1;
            self.item_list_state.select(Some(self.selected_index));
        }
    }

    pub fn previous_item(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.item_list_state.select(Some(self.selected_index));
        }
    }

    fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.item_list_state.select(Some(0));
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.items.len() {
            self.selected_index = self.items.len().saturating_sub(1);
            self.item_list_state.select(Some(self.selected_index));
        }
    }

    // Dialogs

    /// Load the last simulated upload for the cloud info dialog
    pub async fn open_cloud_info(&mut self, sync_service: &SyncService) {
        let last_upload = match sync_service.cloud_snapshot().await {
            Ok(snapshot) => snapshot.map(|s| datetime::format_local_datetime(s.timestamp)),
            Err(e) => {
                error!("❌ Failed to read cloud snapshot: {e:#}");
                None
            }
        };
        self.cloud_info = Some(CloudInfo {
            file_url: CLOUD_FILE_URL.to_string(),
            last_upload,
            item_count: self.stats.total,
        });
    }

    pub fn close_cloud_info(&mut self) {
        self.cloud_info = None;
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        self.logs_scroll = 0;
    }

    pub fn scroll_logs_down(&mut self) {
        let max = self.logger.get_logs().len().saturating_sub(1);
        self.logs_scroll = (self.logs_scroll + 1).min(max);
    }

    pub fn scroll_logs_up(&mut self) {
        self.logs_scroll = self.logs_scroll.saturating_sub(1);
    }
}
