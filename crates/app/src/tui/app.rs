//! TUI application state and main event loop

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pigeonhole_core::{Contact, MessageDraft};
use ratatui::DefaultTerminal;
use uuid::Uuid;

use super::compose::ComposeState;
use super::directory::GRID_COLUMNS;
use super::ui;
use crate::state::AppState;

/// Target frame rate for UI updates (~30 fps)
const FRAME_DURATION_MS: u64 = 33;

/// Active screen
#[derive(Clone, PartialEq, Eq)]
pub enum Screen {
    /// Contact grid
    Directory,
    /// Message thread for one directory entry
    Thread { directory_id: String },
}

/// Pending destructive action awaiting confirmation
pub struct ConfirmDelete {
    pub message_id: Uuid,
}

/// Application state for the TUI
pub struct App {
    pub state: AppState,
    /// Whether the app should exit
    pub should_exit: bool,
    /// Active screen
    pub screen: Screen,
    /// Grid selection index (directory screen)
    pub grid_selected: usize,
    /// Selected message index within the open thread, if any
    pub thread_selected: Option<usize>,
    /// Compose input state
    pub compose: ComposeState,
    /// Recipient picker index into the registry list
    pub recipient_selected: Option<usize>,
    /// Delete confirmation dialog, if open
    pub confirm: Option<ConfirmDelete>,
    /// One-line user notice (validation failures)
    pub notice: Option<String>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            should_exit: false,
            screen: Screen::Directory,
            grid_selected: 0,
            thread_selected: None,
            compose: ComposeState::default(),
            recipient_selected: None,
            confirm: None,
            notice: None,
        }
    }

    /// Handle input events
    pub fn handle_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(FRAME_DURATION_MS))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key(key_event);
                }
                Event::Resize(_, _) => {
                    // Terminal resized - will be handled on next draw
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Render the UI
    pub fn render(&self, frame: &mut ratatui::Frame) {
        ui::render(frame, self);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_exit = true;
            return;
        }

        if self.confirm.is_some() {
            self.handle_confirm_key(key);
            return;
        }

        match self.screen {
            Screen::Directory => self.handle_directory_key(key),
            Screen::Thread { .. } => self.handle_thread_key(key),
        }
    }

    fn handle_directory_key(&mut self, key: KeyEvent) {
        let count = self.state.registry().len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
            KeyCode::Left => self.grid_selected = self.grid_selected.saturating_sub(1),
            KeyCode::Right => {
                self.grid_selected = (self.grid_selected + 1).min(count.saturating_sub(1));
            }
            KeyCode::Up => self.grid_selected = self.grid_selected.saturating_sub(GRID_COLUMNS),
            KeyCode::Down => {
                self.grid_selected =
                    (self.grid_selected + GRID_COLUMNS).min(count.saturating_sub(1));
            }
            KeyCode::Enter => self.open_thread(),
            _ => {}
        }
    }

    fn handle_thread_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.close_thread(),
            KeyCode::Enter => self.send_message(),
            KeyCode::Tab => self.cycle_recipient(1),
            KeyCode::BackTab => self.cycle_recipient(-1),
            KeyCode::Up => self.select_prev_message(),
            KeyCode::Down => self.select_next_message(),
            KeyCode::Char('d') if ctrl => self.request_delete(),
            KeyCode::Char('u') if ctrl => self.compose.clear(),
            KeyCode::Char(c) if !ctrl => {
                self.compose.insert_char(c);
                self.notice = None;
            }
            KeyCode::Backspace => self.compose.backspace(),
            KeyCode::Delete => self.compose.delete(),
            KeyCode::Left => self.compose.move_left(),
            KeyCode::Right => self.compose.move_right(),
            KeyCode::Home => self.compose.move_home(),
            KeyCode::End => self.compose.move_end(),
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.confirm = None,
            _ => {}
        }
    }

    /// Open the thread for the contact selected on the grid
    ///
    /// The recipient picker defaults to the opened directory itself, so a
    /// plain Enter sends a note to self.
    pub fn open_thread(&mut self) {
        let Some(contact) = self.state.registry().list().get(self.grid_selected) else {
            return;
        };
        let directory_id = contact.id.clone();

        self.recipient_selected = Some(self.grid_selected);
        self.compose.clear();
        self.thread_selected = None;
        self.notice = None;
        self.screen = Screen::Thread { directory_id };
    }

    fn close_thread(&mut self) {
        self.screen = Screen::Directory;
        self.thread_selected = None;
        self.notice = None;
    }

    /// Directory id of the open thread
    pub fn current_directory(&self) -> Option<String> {
        match &self.screen {
            Screen::Thread { directory_id } => Some(directory_id.clone()),
            Screen::Directory => None,
        }
    }

    /// Currently picked recipient contact
    pub fn recipient(&self) -> Option<&Contact> {
        self.recipient_selected
            .and_then(|index| self.state.registry().list().get(index))
    }

    fn cycle_recipient(&mut self, step: isize) {
        let count = self.state.registry().len() as isize;
        if count == 0 {
            return;
        }
        let current = self.recipient_selected.map(|i| i as isize).unwrap_or(-step);
        let next = (current + step).rem_euclid(count);
        self.recipient_selected = Some(next as usize);
    }

    /// Validate the compose input and send it through the store
    pub fn send_message(&mut self) {
        let Some(directory_id) = self.current_directory() else {
            return;
        };

        let draft = MessageDraft {
            text: self.compose.input.clone(),
            sender_id: directory_id,
            recipient_id: self.recipient().map(|c| c.id.clone()),
        };

        match self.state.send(draft) {
            Ok(()) => {
                self.compose.clear();
                self.thread_selected = None;
                self.notice = None;
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    fn thread_len(&self) -> usize {
        self.current_directory()
            .map(|id| self.state.store().count_for(&id))
            .unwrap_or(0)
    }

    fn select_prev_message(&mut self) {
        let len = self.thread_len();
        if len == 0 {
            return;
        }
        self.thread_selected = Some(match self.thread_selected {
            None => len - 1,
            Some(index) => index.saturating_sub(1),
        });
    }

    fn select_next_message(&mut self) {
        let len = self.thread_len();
        self.thread_selected = match self.thread_selected {
            Some(index) if index + 1 < len => Some(index + 1),
            // Moving past the newest message returns focus to the compose box
            _ => None,
        };
    }

    /// Ask for confirmation before deleting the selected message
    pub fn request_delete(&mut self) {
        let Some(directory_id) = self.current_directory() else {
            return;
        };
        let Some(index) = self.thread_selected else {
            return;
        };

        let message_id = self
            .state
            .store()
            .query(&directory_id)
            .nth(index)
            .map(|message| message.id);
        if let Some(message_id) = message_id {
            self.confirm = Some(ConfirmDelete { message_id });
        }
    }

    /// Apply a confirmed delete and keep the selection in range
    pub fn confirm_delete(&mut self) {
        let Some(confirm) = self.confirm.take() else {
            return;
        };
        self.state.delete(confirm.message_id);

        let len = self.thread_len();
        self.thread_selected = match self.thread_selected {
            Some(index) if len > 0 => Some(index.min(len - 1)),
            _ => None,
        };
    }
}

/// Run the TUI application with panic-safe terminal restore
pub fn run(state: AppState) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = catch_unwind(AssertUnwindSafe(|| run_app(&mut terminal, state)));
    ratatui::restore();

    match result {
        Ok(r) => r,
        Err(e) => std::panic::resume_unwind(e),
    }
}

fn run_app(terminal: &mut DefaultTerminal, state: AppState) -> Result<()> {
    let mut app = App::new(state);

    while !app.should_exit {
        terminal.draw(|frame| app.render(frame))?;
        app.handle_events()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pigeonhole_core::Seed;

    fn make_app() -> App {
        let toml = r##"
[[contact]]
id = "you"
name = "Vin"
icon = "*"
color = "#FF6347"
messages = ["first note", "second note"]

[[contact]]
id = "home"
name = "Brain"
icon = "#"
color = "#87CEEB"
"##;
        let state = AppState::from_seed(Seed::from_toml(toml).unwrap()).unwrap();
        App::new(state)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.compose.insert_char(c);
        }
    }

    #[test]
    fn test_open_thread_defaults_recipient_to_directory() {
        let mut app = make_app();
        app.open_thread();

        assert_eq!(app.current_directory().as_deref(), Some("you"));
        assert_eq!(app.recipient().map(|c| c.id.as_str()), Some("you"));
    }

    #[test]
    fn test_send_appends_and_clears_compose() {
        let mut app = make_app();
        app.open_thread();
        app.cycle_recipient(1);
        assert_eq!(app.recipient().map(|c| c.id.as_str()), Some("home"));

        type_text(&mut app, "hello brain");
        app.send_message();

        assert!(app.compose.input.is_empty());
        assert!(app.notice.is_none());
        assert_eq!(app.state.thread("home").len(), 1);
        assert_eq!(app.state.thread("you").len(), 3);
    }

    #[test]
    fn test_send_empty_text_shows_notice() {
        let mut app = make_app();
        app.open_thread();
        type_text(&mut app, "   ");
        app.send_message();

        assert!(app.notice.is_some());
        assert_eq!(app.state.thread("you").len(), 2);
    }

    #[test]
    fn test_send_without_recipient_shows_notice() {
        let mut app = make_app();
        app.open_thread();
        app.recipient_selected = None;
        type_text(&mut app, "hello");
        app.send_message();

        assert!(app.notice.is_some());
        assert_eq!(app.state.thread("you").len(), 2);
    }

    #[test]
    fn test_recipient_cycle_wraps() {
        let mut app = make_app();
        app.open_thread();

        app.cycle_recipient(1);
        app.cycle_recipient(1);
        assert_eq!(app.recipient().map(|c| c.id.as_str()), Some("you"));

        app.cycle_recipient(-1);
        assert_eq!(app.recipient().map(|c| c.id.as_str()), Some("home"));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = make_app();
        app.open_thread();

        app.select_prev_message();
        assert_eq!(app.thread_selected, Some(1));

        app.request_delete();
        assert!(app.confirm.is_some());
        assert_eq!(app.state.thread("you").len(), 2);

        app.confirm_delete();
        assert!(app.confirm.is_none());
        assert_eq!(app.state.thread("you").len(), 1);
        assert_eq!(app.thread_selected, Some(0));
    }

    #[test]
    fn test_request_delete_targets_selected_message() {
        let mut app = make_app();
        app.open_thread();

        // Walk back to the oldest message and delete it
        app.select_prev_message();
        app.select_prev_message();
        assert_eq!(app.thread_selected, Some(0));

        app.request_delete();
        app.confirm_delete();

        let texts: Vec<&str> = app
            .state
            .thread("you")
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec!["second note"]);
    }

    #[test]
    fn test_cancelled_confirm_deletes_nothing() {
        let mut app = make_app();
        app.open_thread();
        app.select_prev_message();
        app.request_delete();

        app.confirm = None;
        assert_eq!(app.state.thread("you").len(), 2);
    }

    #[test]
    fn test_selection_walks_thread_and_returns_to_compose() {
        let mut app = make_app();
        app.open_thread();

        app.select_prev_message();
        app.select_prev_message();
        assert_eq!(app.thread_selected, Some(0));

        app.select_next_message();
        assert_eq!(app.thread_selected, Some(1));
        app.select_next_message();
        assert_eq!(app.thread_selected, None);
    }

    #[test]
    fn test_grid_navigation_clamps() {
        let mut app = make_app();

        app.handle_directory_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(app.grid_selected, 1);
        app.handle_directory_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE));
        assert_eq!(app.grid_selected, 1);

        app.handle_directory_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        app.handle_directory_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE));
        assert_eq!(app.grid_selected, 0);

        app.handle_directory_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        assert_eq!(app.grid_selected, 0);
    }
}
