use crate::store::StatusFilter;
use crate::tui::state::{AppState, InputMode};
use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    // --- Task List ---
    let today = Local::now().date_naive();
    let task_items: Vec<ListItem> = state
        .view_indices
        .iter()
        .map(|&idx| {
            let t = &state.store.tasks()[idx];
            let style = if t.is_done() {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else if t.is_overdue(today) {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::White)
            };
            let checkbox = if t.is_done() { "[x]" } else { "[ ]" };
            let summary = format!("{} {} ({})", checkbox, t.name, t.deadline);
            ListItem::new(Line::from(vec![Span::styled(summary, style)]))
        })
        .collect();

    let title = if state.filtering() {
        let mut parts = Vec::new();
        if !state.filter_text.is_empty() {
            parts.push(format!("\"{}\"", state.filter_text));
        }
        if state.status_filter != StatusFilter::All {
            parts.push(state.status_filter.label().to_string());
        }
        format!(
            " Tasks ({} of {}, filter: {}) ",
            state.view_indices.len(),
            state.store.len(),
            parts.join(" + ")
        )
    } else {
        format!(
            " Tasks ({}) - Page {}/{} ",
            state.store.len(),
            state.page_info.current_page,
            state.page_info.total_pages.max(1)
        )
    };
    let task_list = List::new(task_items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .bg(Color::DarkGray),
        );
    f.render_stateful_widget(task_list, v_chunks[0], &mut state.list_state);

    // --- Footer / Input ---
    let footer_area = v_chunks[1];
    match state.mode {
        InputMode::Creating | InputMode::Editing | InputMode::Searching => {
            let (title, prefix, color) = match state.mode {
                InputMode::Searching => (" Filter ", "/ ", Color::Green),
                InputMode::Editing => (" Edit Task ", "> ", Color::Magenta),
                _ => (" Create Task ", "> ", Color::Yellow),
            };
            // Rejected submits keep the form; surface the message in the title.
            let title = if state.message.contains("Error") {
                format!(" {} ", state.message)
            } else {
                title.to_string()
            };
            let input = Paragraph::new(format!("{}{}", prefix, state.input_buffer))
                .style(Style::default().fg(color))
                .block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(input, footer_area);
            let cursor_x =
                footer_area.x + 1 + prefix.chars().count() as u16 + state.cursor_position as u16;
            let cursor_y = footer_area.y + 1;
            f.set_cursor_position((cursor_x, cursor_y));
        }
        InputMode::Normal => {
            let f_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(v_chunks[1]);
            let status_color = if state.message.contains("Error") {
                Color::Red
            } else {
                Color::Cyan
            };
            let status = Paragraph::new(state.message.clone())
                .style(Style::default().fg(status_color))
                .block(
                    Block::default()
                        .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                        .title(" Status "),
                );
            let help_text = "a:Add | e:Edit | Spc:Done | d:Del | /:Find | s:Status | x:CSV";
            let help = Paragraph::new(help_text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Right)
                .block(
                    Block::default()
                        .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                        .title(" Actions "),
                );
            f.render_widget(status, f_chunks[0]);
            f.render_widget(help, f_chunks[1]);
        }
    }
}
