pub mod action;
pub mod state;
pub mod view;

use crate::config::Config;
use crate::export;
use crate::storage::{FileStore, MemoryStore};
use crate::store::TaskStore;
use crate::tui::action::{Action, SubmitOutcome, handle_submit};
use crate::tui::state::{AppState, InputMode};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::{io, time::Duration};

pub fn run() -> Result<()> {
    // Panic Hook
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        if let Ok(mut file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("feito_panic.log")
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        default_hook(info);
    }));

    let config = Config::load();

    // Fall back to an in-memory session when no data directory exists.
    let data_path = config.data_file.clone().or_else(FileStore::default_path);
    let (store, fallback) = match data_path {
        Some(path) => (TaskStore::open(Box::new(FileStore::new(path))), false),
        None => (TaskStore::open(Box::new(MemoryStore::new())), true),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app_state = AppState::new(store, &config);
    if fallback {
        app_state.message = "No data directory found; changes will not persist.".to_string();
    }

    let result = event_loop(&mut terminal, &mut app_state);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, state: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| view::draw(f, state))?;

        if crossterm::event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Mouse(mouse_event) => match mouse_event.kind {
                    MouseEventKind::ScrollDown => state.next(),
                    MouseEventKind::ScrollUp => state.previous(),
                    _ => {}
                },
                Event::Key(key) => {
                    if let Some(action) = handle_key(state, key.code)
                        && apply(state, action)
                    {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
    }
}

fn handle_key(state: &mut AppState, code: KeyCode) -> Option<Action> {
    match state.mode {
        InputMode::Normal => match code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('a') => {
                state.mode = InputMode::Creating;
                state.editing = None;
                state.reset_input();
                state.message = "Example: Buy milk @tomorrow".to_string();
            }
            KeyCode::Char('e') => {
                if let Some(idx) = state.get_selected_master_index() {
                    let task = &state.store.tasks()[idx];
                    state.editing = Some(task.id.clone());
                    state.input_buffer = task.to_smart_string();
                    state.cursor_position = state.input_buffer.chars().count();
                    state.mode = InputMode::Editing;
                }
            }
            KeyCode::Char(' ') => {
                if let Some(id) = state.selected_task_id() {
                    return Some(Action::Complete(id));
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = state.selected_task_id() {
                    return Some(Action::Delete(id));
                }
            }
            KeyCode::Char('x') => return Some(Action::Export),
            KeyCode::Char('/') => {
                state.mode = InputMode::Searching;
                state.input_buffer = state.filter_text.clone();
                state.cursor_position = state.input_buffer.chars().count();
            }
            KeyCode::Char('s') => state.cycle_status_filter(),
            // Navigation
            KeyCode::Down | KeyCode::Char('j') => state.next(),
            KeyCode::Up | KeyCode::Char('k') => state.previous(),
            KeyCode::PageDown => state.jump_forward(10),
            KeyCode::PageUp => state.jump_backward(10),
            KeyCode::Right | KeyCode::Char('l') => state.next_page(),
            KeyCode::Left | KeyCode::Char('h') => state.prev_page(),
            KeyCode::Esc => state.clear_filters(),
            _ => {}
        },
        InputMode::Searching => match code {
            KeyCode::Enter => {
                state.mode = InputMode::Normal;
                state.reset_input();
            }
            KeyCode::Esc => {
                state.mode = InputMode::Normal;
                state.reset_input();
                state.filter_text.clear();
                state.recalculate_view();
            }
            KeyCode::Char(c) => {
                state.enter_char(c);
                state.filter_text = state.input_buffer.clone();
                state.recalculate_view();
            }
            KeyCode::Backspace => {
                state.delete_char();
                state.filter_text = state.input_buffer.clone();
                state.recalculate_view();
            }
            KeyCode::Left => state.move_cursor_left(),
            KeyCode::Right => state.move_cursor_right(),
            _ => {}
        },
        InputMode::Creating | InputMode::Editing => match code {
            KeyCode::Enter => {
                return Some(Action::Submit {
                    editing: state.editing.clone(),
                    input: state.input_buffer.clone(),
                });
            }
            KeyCode::Esc => {
                state.mode = InputMode::Normal;
                state.editing = None;
                state.reset_input();
            }
            KeyCode::Char(c) => state.enter_char(c),
            KeyCode::Backspace => state.delete_char(),
            KeyCode::Left => state.move_cursor_left(),
            KeyCode::Right => state.move_cursor_right(),
            _ => {}
        },
    }
    None
}

/// Runs one action against the store. Failures land in the status line;
/// only a quit stops the loop (the `true` return).
fn apply(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::Quit => return true,
        Action::Submit { editing, input } => {
            match handle_submit(&mut state.store, editing.as_deref(), &input) {
                Ok(outcome) => {
                    state.message = match outcome {
                        SubmitOutcome::Created => "Created.".to_string(),
                        SubmitOutcome::Updated => "Updated.".to_string(),
                    };
                    state.mode = InputMode::Normal;
                    state.editing = None;
                    state.reset_input();
                }
                Err(e) => {
                    // The form keeps its contents so the entry can be fixed.
                    state.message = format!("Error: {}", e);
                }
            }
        }
        Action::Complete(id) => {
            state.message = match state.store.complete(&id) {
                Ok(()) => "Completed.".to_string(),
                Err(e) => format!("Error: {}", e),
            };
        }
        Action::Delete(id) => {
            state.message = match state.store.delete(&id) {
                Ok(()) => "Deleted.".to_string(),
                Err(e) => format!("Error: {}", e),
            };
        }
        Action::Export => match export::export_to_dir(state.store.tasks(), &state.export_dir) {
            Ok(path) => {
                state.message =
                    format!("Exported {} tasks to {}", state.store.len(), path.display());
            }
            Err(e) => {
                state.message = format!("Error: {}", e);
            }
        },
    }
    state.recalculate_view();
    false
}
