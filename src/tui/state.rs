use crate::config::Config;
use crate::export;
use crate::store::{self, PageInfo, StatusFilter, TaskStore};
use ratatui::widgets::ListState;
use std::path::PathBuf;

#[derive(PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Creating,
    Searching,
    Editing,
}

pub struct AppState {
    pub store: TaskStore,
    pub view_indices: Vec<usize>,
    pub page_info: PageInfo,
    pub list_state: ListState,
    pub message: String,
    pub mode: InputMode,
    pub input_buffer: String,
    pub cursor_position: usize,
    pub filter_text: String,
    pub status_filter: StatusFilter,
    pub page: usize,
    pub page_size: usize,
    pub export_dir: PathBuf,
    /// The task the form will update on the next submit, if any.
    pub editing: Option<String>,
}

impl AppState {
    pub fn new(store: TaskStore, config: &Config) -> Self {
        let mut l_state = ListState::default();
        l_state.select(Some(0));
        let mut state = Self {
            store,
            view_indices: vec![],
            page_info: store::page_info(0, 1, config.page_size),
            list_state: l_state,
            message: "a: Add | e: Edit | Space: Done | /: Filter | x: Export".to_string(),
            mode: InputMode::Normal,
            input_buffer: String::new(),
            cursor_position: 0,
            filter_text: String::new(),
            status_filter: StatusFilter::All,
            page: 1,
            page_size: config.page_size,
            export_dir: config
                .export_dir
                .clone()
                .unwrap_or_else(export::default_export_dir),
            editing: None,
        };
        state.recalculate_view();
        state
    }

    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }
    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }
    pub fn enter_char(&mut self, new_char: char) {
        let index = self
            .input_buffer
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.input_buffer.len());
        self.input_buffer.insert(index, new_char);
        self.move_cursor_right();
    }
    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let from_left_to_current_index = current_index - 1;
            let before_char_to_delete = self.input_buffer.chars().take(from_left_to_current_index);
            let after_char_to_delete = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before_char_to_delete.chain(after_char_to_delete).collect();
            self.move_cursor_left();
        }
    }
    pub fn reset_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }
    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.input_buffer.chars().count())
    }

    pub fn filtering(&self) -> bool {
        !self.filter_text.is_empty() || self.status_filter != StatusFilter::All
    }

    pub fn recalculate_view(&mut self) {
        let (indices, info) = store::view_indices(
            self.store.tasks(),
            &self.filter_text,
            self.status_filter,
            self.page,
            self.page_size,
        );
        self.view_indices = indices;
        self.page_info = info;
        let sel = self.list_state.selected().unwrap_or(0);
        if self.view_indices.is_empty() {
            self.list_state.select(Some(0));
        } else if sel >= self.view_indices.len() {
            self.list_state.select(Some(self.view_indices.len() - 1));
        }
    }

    pub fn get_selected_master_index(&self) -> Option<usize> {
        if let Some(view_idx) = self.list_state.selected() {
            if view_idx < self.view_indices.len() {
                return Some(self.view_indices[view_idx]);
            }
        }
        None
    }

    pub fn selected_task_id(&self) -> Option<String> {
        self.get_selected_master_index()
            .map(|idx| self.store.tasks()[idx].id.clone())
    }

    pub fn next(&mut self) {
        let len = self.view_indices.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.view_indices.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn jump_forward(&mut self, step: usize) {
        if self.view_indices.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let new_index = (current + step).min(self.view_indices.len() - 1);
        self.list_state.select(Some(new_index));
    }

    pub fn jump_backward(&mut self, step: usize) {
        if self.view_indices.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let new_index = current.saturating_sub(step);
        self.list_state.select(Some(new_index));
    }

    /// Pages only move while no filter is active; an active filter shows
    /// everything it matches in one pass.
    pub fn next_page(&mut self) {
        if !self.filtering() && self.page_info.has_next {
            self.page += 1;
            self.recalculate_view();
        }
    }

    pub fn prev_page(&mut self) {
        if !self.filtering() && self.page_info.has_prev {
            self.page -= 1;
            self.recalculate_view();
        }
    }

    pub fn cycle_status_filter(&mut self) {
        self.status_filter = self.status_filter.cycle();
        self.recalculate_view();
    }

    pub fn clear_filters(&mut self) {
        self.filter_text.clear();
        self.status_filter = StatusFilter::All;
        self.recalculate_view();
    }
}
