// File: ./src/model/item.rs
// The task entity and its two-state lifecycle
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    Pending,
    Done,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Done => "Done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Stable lookup key, minted once at creation. Stores written before ids
    /// existed carry none; see [`Task::ensure_id`].
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Free-form. Usually an ISO date, but nothing enforces that.
    pub deadline: String,
    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    pub fn new(name: &str, deadline: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            deadline: deadline.to_string(),
            status: TaskStatus::Pending,
        }
    }

    /// Backfill an id for records persisted before ids existed.
    pub fn ensure_id(&mut self) {
        if self.id.is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Deadlines are free-form, so this only succeeds for ISO dates.
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.deadline.trim(), "%Y-%m-%d").ok()
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_done() && self.deadline_date().is_some_and(|d| d < today)
    }
}
