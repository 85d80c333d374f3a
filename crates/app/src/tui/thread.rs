//! Thread screen: the ordered message list for one directory entry.

use pigeonhole_core::{Contact, DirectoryRegistry, Message};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
    Frame,
};

use super::theme;

/// Lines each message occupies in the list: header, text, gap.
const LINES_PER_MESSAGE: usize = 3;

/// Render the message list for the open directory entry.
///
/// Messages sent from the open directory are right-aligned and themed with
/// the contact color; incoming messages are left-aligned. The list stays
/// scrolled to the bottom unless a selection pulls it up.
pub fn render(
    area: Rect,
    buf: &mut Buffer,
    registry: &DirectoryRegistry,
    contact: &Contact,
    messages: &[&Message],
    selected: Option<usize>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {} ", contact.name));

    if messages.is_empty() {
        Paragraph::new(format!("No messages in {} yet.", contact.name))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(messages.len() * LINES_PER_MESSAGE);
    for (index, message) in messages.iter().enumerate() {
        let is_own = message.sender_id == contact.id;
        let is_selected = selected == Some(index);
        push_message_lines(&mut lines, registry, contact, message, is_own, is_selected);
    }

    let inner_height = area.height.saturating_sub(2);
    let total = lines.len() as u16;
    let mut offset = total.saturating_sub(inner_height);
    if let Some(index) = selected {
        // Keep the selected message in view
        let top = (index * LINES_PER_MESSAGE) as u16;
        if top < offset {
            offset = top;
        }
    }

    Paragraph::new(lines)
        .block(block)
        .scroll((offset, 0))
        .render(area, buf);
}

fn push_message_lines(
    lines: &mut Vec<Line<'static>>,
    registry: &DirectoryRegistry,
    contact: &Contact,
    message: &Message,
    is_own: bool,
    is_selected: bool,
) {
    let label = if message.is_note_to_self() {
        "Note to Self".to_string()
    } else if is_own {
        format!(
            "To: {}",
            registry.name_of(&message.recipient_id).unwrap_or("Unknown")
        )
    } else {
        format!(
            "From: {}",
            registry.name_of(&message.sender_id).unwrap_or("Unknown")
        )
    };

    let dim = Style::default().fg(Color::DarkGray);
    let mut header_spans = vec![
        Span::styled(label, dim.add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(message.format_timestamp(), dim),
    ];
    if is_selected {
        header_spans.insert(0, Span::styled("▸ ", Style::default().fg(Color::Yellow)));
    }

    let mut text_style = if is_own {
        // Own bubbles are tinted with the contact color
        Style::default()
            .bg(theme::contact_color(&contact.color))
            .fg(theme::text_on(&contact.color))
    } else {
        Style::default().fg(Color::White)
    };
    if is_selected {
        text_style = text_style.add_modifier(Modifier::REVERSED);
    }

    let header = Line::from(header_spans);
    let text = Line::from(Span::styled(format!(" {} ", message.text), text_style));

    if is_own {
        lines.push(header.right_aligned());
        lines.push(text.right_aligned());
    } else {
        lines.push(header);
        lines.push(text);
    }
    lines.push(Line::default());
}

/// Render the delete confirmation dialog over the current frame.
pub fn render_confirm_popup(frame: &mut Frame) {
    let area = centered_rect(frame.area(), 40, 7);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Red))
        .title(" Delete Message ");

    let body = vec![
        Line::default(),
        Line::from("Are you sure you want to delete this message?").centered(),
        Line::default(),
        Line::from(vec![
            Span::styled("[Y] Delete", Style::default().fg(Color::Red)),
            Span::raw("   "),
            Span::styled("[N] Cancel", Style::default().fg(Color::Gray)),
        ])
        .centered(),
    ];

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(body).block(block), area);
}

/// Center a fixed-size rect within the given area.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, horizontal, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width.min(area.width)),
        Constraint::Fill(1),
    ])
    .areas(vertical);
    horizontal
}
