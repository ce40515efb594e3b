use crate::model::{Task, TaskStatus};
use crate::storage::BlobStore;
use anyhow::Result;
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Task name is required.")]
    EmptyName,
    #[error("Task deadline is required.")]
    EmptyDeadline,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Which statuses the view lets through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Done,
}

impl StatusFilter {
    pub fn matches(&self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == TaskStatus::Pending,
            StatusFilter::Done => status == TaskStatus::Done,
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Pending,
            StatusFilter::Pending => StatusFilter::Done,
            StatusFilter::Done => StatusFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Pending => "pending",
            StatusFilter::Done => "done",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// The in-memory task list plus its persisted mirror. Every mutation
/// rewrites the whole list through the blob store before returning, and a
/// failed write rolls the change back, so the two are never out of step.
pub struct TaskStore {
    storage: Box<dyn BlobStore>,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Load whatever the backend holds. A missing or unparseable blob means
    /// "no tasks", never an error.
    pub fn open(storage: Box<dyn BlobStore>) -> Self {
        let mut tasks = match storage.read() {
            Ok(Some(bytes)) => serde_json::from_slice::<Vec<Task>>(&bytes).unwrap_or_default(),
            _ => Vec::new(),
        };
        for task in &mut tasks {
            task.ensure_id();
        }
        Self { storage, tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.tasks)?;
        self.storage.write(json.as_bytes())
    }

    fn validate(name: &str, deadline: &str) -> Result<(), StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        if deadline.is_empty() {
            return Err(StoreError::EmptyDeadline);
        }
        Ok(())
    }

    /// Append a new pending task. Rejects before touching state when either
    /// field is empty; the name is trimmed, the deadline kept as given.
    pub fn add(&mut self, name: &str, deadline: &str) -> Result<(), StoreError> {
        Self::validate(name, deadline)?;
        self.tasks.push(Task::new(name.trim(), deadline));
        if let Err(e) = self.persist() {
            self.tasks.pop();
            return Err(e.into());
        }
        Ok(())
    }

    /// Replace name and deadline of the identified task; status and position
    /// are untouched. An unknown id is a silent no-op.
    pub fn edit(&mut self, id: &str, name: &str, deadline: &str) -> Result<(), StoreError> {
        Self::validate(name, deadline)?;
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            let old_name = self.tasks[pos].name.clone();
            let old_deadline = self.tasks[pos].deadline.clone();
            self.tasks[pos].name = name.trim().to_string();
            self.tasks[pos].deadline = deadline.to_string();
            if let Err(e) = self.persist() {
                self.tasks[pos].name = old_name;
                self.tasks[pos].deadline = old_deadline;
                return Err(e.into());
            }
        }
        Ok(())
    }

    /// Pending -> Done, the only status transition there is. Idempotent; an
    /// unknown id is a silent no-op.
    pub fn complete(&mut self, id: &str) -> Result<(), StoreError> {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            let old_status = self.tasks[pos].status;
            self.tasks[pos].status = TaskStatus::Done;
            if let Err(e) = self.persist() {
                self.tasks[pos].status = old_status;
                return Err(e.into());
            }
        }
        Ok(())
    }

    /// Remove the identified task. An unknown id is a silent no-op.
    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        if let Some(pos) = self.tasks.iter().position(|t| t.id == id) {
            let removed = self.tasks.remove(pos);
            if let Err(e) = self.persist() {
                self.tasks.insert(pos, removed);
                return Err(e.into());
            }
        }
        Ok(())
    }
}

/// Derive the rows to display: filter, then paginate. An active filter
/// renders the whole filtered set in one pass, ignoring page boundaries.
pub fn view<'a>(
    tasks: &'a [Task],
    filter_text: &str,
    status: StatusFilter,
    page: usize,
    page_size: usize,
) -> (Vec<&'a Task>, PageInfo) {
    let (indices, info) = view_indices(tasks, filter_text, status, page, page_size);
    (indices.into_iter().map(|i| &tasks[i]).collect(), info)
}

/// Index-returning twin of [`view`]. The TUI tracks positions into the
/// master list rather than borrows.
pub fn view_indices(
    tasks: &[Task],
    filter_text: &str,
    status: StatusFilter,
    page: usize,
    page_size: usize,
) -> (Vec<usize>, PageInfo) {
    let page_size = page_size.max(1);
    let page = page.max(1);
    let info = page_info(tasks.len(), page, page_size);

    let filtering = !filter_text.is_empty() || status != StatusFilter::All;
    if filtering {
        let query = filter_text.to_lowercase();
        let indices = tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.name.to_lowercase().contains(&query) && status.matches(t.status))
            .map(|(i, _)| i)
            .collect();
        return (indices, info);
    }

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(tasks.len());
    let indices = if start < tasks.len() {
        (start..end).collect()
    } else {
        Vec::new()
    };
    (indices, info)
}

/// Pagination readout. Counts the unfiltered list: the page controls always
/// reflect the full list, filtered or not.
pub fn page_info(count: usize, page: usize, page_size: usize) -> PageInfo {
    let page_size = page_size.max(1);
    let total_pages = count.div_ceil(page_size);
    PageInfo {
        current_page: page,
        total_pages,
        has_prev: page > 1,
        has_next: page < total_pages,
    }
}
