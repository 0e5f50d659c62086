//! Transient status notifications.

use std::time::{Duration, Instant};

use crate::backend::DataSource;
use crate::constants::{
    TOAST_DEMO_DATA, TOAST_LOADED_BACKUP, TOAST_LOADED_CLOUD, TOAST_SAVED_CLOUD, TOAST_SAVED_LOCALLY, TOAST_SAVE_ERROR,
    TOAST_SYNC_BUSY, TOAST_SYNC_FAILED,
};
use crate::sync::RefreshOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

/// A notification that disappears on its own after `duration`.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    shown_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.expired_at(Instant::now())
    }

    pub fn expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }

    /// Notification for a finished refresh
    pub fn for_refresh(outcome: &RefreshOutcome, duration: Duration) -> Self {
        match outcome {
            RefreshOutcome::Loaded {
                source: DataSource::Cloud,
                count,
            } => Self::new(
                ToastKind::Success,
                TOAST_LOADED_CLOUD.replace("{}", &count.to_string()),
                duration,
            ),
            RefreshOutcome::Loaded {
                source: DataSource::Backup,
                count,
            } => Self::new(
                ToastKind::Warning,
                TOAST_LOADED_BACKUP.replace("{}", &count.to_string()),
                duration,
            ),
            RefreshOutcome::Loaded {
                source: DataSource::Demo,
                ..
            } => Self::new(ToastKind::Info, TOAST_DEMO_DATA, duration),
            RefreshOutcome::AlreadyRunning => Self::new(ToastKind::Info, TOAST_SYNC_BUSY, duration),
        }
    }

    /// Notification for a refresh that failed outright
    pub fn for_refresh_error(duration: Duration) -> Self {
        Self::new(ToastKind::Error, TOAST_SYNC_FAILED, duration)
    }

    /// Notification for a finished save; `None` means the save errored
    pub fn for_save(saved_to_cloud: Option<bool>, duration: Duration) -> Self {
        match saved_to_cloud {
            Some(true) => Self::new(ToastKind::Success, TOAST_SAVED_CLOUD, duration),
            Some(false) => Self::new(ToastKind::Warning, TOAST_SAVED_LOCALLY, duration),
            None => Self::new(ToastKind::Error, TOAST_SAVE_ERROR, duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_duration() {
        let toast = Toast::new(ToastKind::Info, "hi", Duration::from_secs(3));
        let start = Instant::now();
        assert!(!toast.expired_at(start));
        assert!(toast.expired_at(start + Duration::from_secs(4)));
    }

    #[test]
    fn refresh_messages_follow_source() {
        let d = Duration::from_secs(3);
        let cloud = Toast::for_refresh(
            &RefreshOutcome::Loaded {
                source: DataSource::Cloud,
                count: 7,
            },
            d,
        );
        assert_eq!(cloud.kind, ToastKind::Success);
        assert_eq!(cloud.message, "Loaded 7 items from cloud");

        let backup = Toast::for_refresh(
            &RefreshOutcome::Loaded {
                source: DataSource::Backup,
                count: 2,
            },
            d,
        );
        assert_eq!(backup.kind, ToastKind::Warning);
        assert_eq!(backup.message, "Loaded 2 items from backup");
    }

    #[test]
    fn save_messages() {
        let d = Duration::from_secs(3);
        assert_eq!(Toast::for_save(Some(false), d).message, "Saved locally (cloud unavailable)");
        assert_eq!(Toast::for_save(None, d).kind, ToastKind::Error);
    }
}
