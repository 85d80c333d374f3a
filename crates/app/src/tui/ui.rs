//! UI rendering for the TUI

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Frame,
};

use super::app::{App, Screen};
use super::compose;
use super::directory;
use super::theme;
use super::thread;

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Layout: header (1 line) + main content + status bar (1 line)
    let [header_area, main_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(header_area, frame.buffer_mut(), app);

    match &app.screen {
        Screen::Directory => directory::render(
            main_area,
            frame.buffer_mut(),
            app.state.registry().list(),
            app.grid_selected,
        ),
        Screen::Thread { directory_id } => render_thread_screen(main_area, frame, app, directory_id),
    }

    render_status(status_area, frame.buffer_mut(), app);

    if app.confirm.is_some() {
        thread::render_confirm_popup(frame);
    }
}

fn render_thread_screen(area: Rect, frame: &mut Frame, app: &App, directory_id: &str) {
    let Some(contact) = app.state.registry().get(directory_id) else {
        return;
    };

    let [messages_area, compose_area] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(compose::COMPOSE_HEIGHT),
    ])
    .areas(area);

    let messages = app.state.thread(directory_id);
    thread::render(
        messages_area,
        frame.buffer_mut(),
        app.state.registry(),
        contact,
        &messages,
        app.thread_selected,
    );

    compose::render(
        frame,
        compose_area,
        &app.compose,
        app.recipient(),
        &contact.name,
    );
}

/// Render the header bar, themed with the open contact's color
fn render_header(area: Rect, buf: &mut Buffer, app: &App) {
    let (title, style) = match &app.screen {
        Screen::Directory => (
            " Message Directories".to_string(),
            Style::default()
                .fg(Color::White)
                .bg(theme::contact_color("#6A5ACD"))
                .add_modifier(Modifier::BOLD),
        ),
        Screen::Thread { directory_id } => {
            let (name, color) = app
                .state
                .registry()
                .get(directory_id)
                .map(|c| (c.name.as_str(), c.color.as_str()))
                .unwrap_or(("Messages", "#6A5ACD"));
            (
                format!(" {} Messages", name),
                Style::default()
                    .fg(theme::text_on(color))
                    .bg(theme::contact_color(color))
                    .add_modifier(Modifier::BOLD),
            )
        }
    };

    Paragraph::new(Line::from(Span::raw(title)))
        .style(style)
        .render(area, buf);
}

/// Render the status bar: validation notices take priority over key hints
fn render_status(area: Rect, buf: &mut Buffer, app: &App) {
    let line = if let Some(notice) = &app.notice {
        Line::from(Span::styled(
            format!(" {} ", notice),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        let hints = if app.confirm.is_some() {
            " Y confirm   N cancel"
        } else {
            match app.screen {
                Screen::Directory => " Arrows select   Enter open   q quit",
                Screen::Thread { .. } => {
                    " Enter send   Tab recipient   Up/Down select   Ctrl+D delete   Esc back"
                }
            }
        };
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
    };

    Paragraph::new(line).render(area, buf);
}
