/*
[INPUT]:  Outcomes of user-triggered requests
[OUTPUT]: Bounded queue of user-visible notices
[POS]:    Notification layer - toast replacement for terminal front ends
[UPDATE]: When adding notice kinds or changing retention
*/

use std::collections::VecDeque;

use chrono::{DateTime, Local};
use tracing::{info, warn};

pub const NOTICE_CAPACITY: usize = 50;

pub const CREATE_SUCCESS: &str = "created successfully";
pub const DELETE_SUCCESS: &str = "deleted successfully";
pub const START_SUCCESS: &str = "started successfully";
pub const STOP_SUCCESS: &str = "stopped successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub at: DateTime<Local>,
}

/// Most recent notices, oldest dropped first
#[derive(Debug)]
pub struct Notifications {
    notices: VecDeque<Notice>,
    capacity: usize,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(NOTICE_CAPACITY)
    }
}

impl Notifications {
    pub fn new(capacity: usize) -> Self {
        Self {
            notices: VecDeque::new(),
            capacity,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        let message = message.into();
        info!(%message, "notice");
        self.push(NoticeLevel::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!(%message, "error notice");
        self.push(NoticeLevel::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NoticeLevel::Info, message.into());
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.back()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    fn push(&mut self, level: NoticeLevel, message: String) {
        if self.capacity == 0 {
            return;
        }
        if self.notices.len() >= self.capacity {
            self.notices.pop_front();
        }
        self.notices.push_back(Notice {
            level,
            message,
            at: Local::now(),
        });
    }
}
