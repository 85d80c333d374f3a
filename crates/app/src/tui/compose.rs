//! Compose box: single-line text input with a recipient picker line.

use pigeonhole_core::Contact;
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Height of the compose box: border + recipient line + input line + border.
pub const COMPOSE_HEIGHT: u16 = 4;

/// Editable draft text with a cursor
///
/// The cursor counts characters, not bytes, so multibyte input edits
/// correctly.
#[derive(Default)]
pub struct ComposeState {
    pub input: String,
    pub cursor_pos: usize,
}

impl ComposeState {
    /// Type a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_pos = self.char_to_byte(self.cursor_pos);
        self.input.insert(byte_pos, c);
        self.cursor_pos += 1;
    }

    /// Remove the character left of the cursor
    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            let byte_pos = self.char_to_byte(self.cursor_pos);
            let prev_byte_pos = self.char_to_byte(self.cursor_pos - 1);
            self.input.drain(prev_byte_pos..byte_pos);
            self.cursor_pos -= 1;
        }
    }

    /// Remove the character under the cursor
    pub fn delete(&mut self) {
        let char_count = self.input.chars().count();
        if self.cursor_pos < char_count {
            let byte_pos = self.char_to_byte(self.cursor_pos);
            let next_byte_pos = self.char_to_byte(self.cursor_pos + 1);
            self.input.drain(byte_pos..next_byte_pos);
        }
    }

    /// Step the cursor one character left
    pub fn move_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
        }
    }

    /// Step the cursor one character right
    pub fn move_right(&mut self) {
        let char_count = self.input.chars().count();
        if self.cursor_pos < char_count {
            self.cursor_pos += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.input.chars().count();
    }

    /// Discard the whole draft
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    /// Byte offset of the given character position
    fn char_to_byte(&self, char_pos: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }
}

/// Slice of the input visible in a box `width` columns wide, plus the cursor
/// column within that slice
///
/// Long drafts scroll horizontally so the cursor stays in view; the window
/// ends one column past the cursor so there is room to type.
fn input_window(input: &str, cursor_pos: usize, width: usize) -> (String, u16) {
    let scroll = cursor_pos.saturating_sub(width.saturating_sub(1));
    let visible = input.chars().skip(scroll).take(width).collect();
    (visible, (cursor_pos - scroll) as u16)
}

/// Render the compose box into the given area.
///
/// The recipient line is a picker: Tab cycles through the directory, and the
/// input placeholder names both the recipient and the directory being sent
/// from.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    compose: &ComposeState,
    recipient: Option<&Contact>,
    directory_name: &str,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }
    let recipient_area = Rect { height: 1, ..inner };
    let input_area = Rect {
        y: inner.y + 1,
        height: 1,
        ..inner
    };

    let recipient_name = recipient.map(|c| c.name.as_str());
    let recipient_line = Line::from(vec![
        Span::styled("To: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("< {} >", recipient_name.unwrap_or("select recipient...")),
            match recipient {
                Some(contact) => Style::default()
                    .fg(super::theme::contact_color(&contact.color))
                    .add_modifier(Modifier::BOLD),
                None => Style::default().fg(Color::DarkGray),
            },
        ),
        Span::styled("  (Tab to change)", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(recipient_line), recipient_area);

    let (visible, cursor_col) = input_window(
        &compose.input,
        compose.cursor_pos,
        input_area.width as usize,
    );
    let input_line = if compose.input.is_empty() {
        Line::from(Span::styled(
            format!(
                "Message {} via {}",
                recipient_name.unwrap_or("..."),
                directory_name
            ),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::raw(visible))
    };
    frame.render_widget(Paragraph::new(input_line), input_area);

    frame.set_cursor_position(Position::new(input_area.x + cursor_col, input_area.y));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_edit() {
        let mut compose = ComposeState::default();
        for c in "hello".chars() {
            compose.insert_char(c);
        }
        assert_eq!(compose.input, "hello");
        assert_eq!(compose.cursor_pos, 5);

        compose.backspace();
        assert_eq!(compose.input, "hell");

        compose.move_home();
        compose.delete();
        assert_eq!(compose.input, "ell");
        assert_eq!(compose.cursor_pos, 0);
    }

    #[test]
    fn test_insert_mid_string() {
        let mut compose = ComposeState::default();
        for c in "hlo".chars() {
            compose.insert_char(c);
        }
        compose.move_home();
        compose.move_right();
        compose.insert_char('e');
        compose.insert_char('l');
        assert_eq!(compose.input, "hello");
    }

    #[test]
    fn test_multibyte_cursor_math() {
        let mut compose = ComposeState::default();
        for c in "héllo".chars() {
            compose.insert_char(c);
        }
        assert_eq!(compose.input, "héllo");

        compose.move_home();
        compose.move_right();
        compose.move_right();
        compose.backspace();
        assert_eq!(compose.input, "hllo");
    }

    #[test]
    fn test_clear() {
        let mut compose = ComposeState::default();
        compose.insert_char('x');
        compose.clear();
        assert!(compose.input.is_empty());
        assert_eq!(compose.cursor_pos, 0);
    }

    #[test]
    fn test_input_window_short_input_unscrolled() {
        let (visible, cursor_col) = input_window("hello", 5, 20);
        assert_eq!(visible, "hello");
        assert_eq!(cursor_col, 5);
    }

    #[test]
    fn test_input_window_scrolls_long_input() {
        // Ten columns for a twelve-character draft: show the tail, keep the
        // cursor on the last column
        let (visible, cursor_col) = input_window("abcdefghijkl", 12, 10);
        assert_eq!(visible, "defghijkl");
        assert_eq!(cursor_col, 9);

        // After Home the start of the draft is visible again
        let (visible, cursor_col) = input_window("abcdefghijkl", 0, 10);
        assert_eq!(visible, "abcdefghij");
        assert_eq!(cursor_col, 0);
    }

    #[test]
    fn test_input_window_zero_width() {
        let (visible, cursor_col) = input_window("abc", 3, 0);
        assert!(visible.is_empty());
        assert_eq!(cursor_col, 0);
    }

    #[test]
    fn test_cursor_bounds() {
        let mut compose = ComposeState::default();
        compose.move_left();
        compose.backspace();
        compose.delete();
        assert_eq!(compose.cursor_pos, 0);

        compose.insert_char('a');
        compose.move_right();
        compose.move_right();
        assert_eq!(compose.cursor_pos, 1);

        compose.move_end();
        assert_eq!(compose.cursor_pos, 1);
    }
}
