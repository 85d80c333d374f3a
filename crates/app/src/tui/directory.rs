//! Directory screen: the contact grid.

use pigeonhole_core::Contact;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::theme;

/// Fixed column count for the grid.
pub const GRID_COLUMNS: usize = 3;

/// Height of one grid cell: borders + icon + name.
const CELL_HEIGHT: u16 = 5;

/// Render the contact grid.
pub fn render(area: Rect, buf: &mut Buffer, contacts: &[Contact], selected: usize) {
    if contacts.is_empty() {
        return;
    }

    let rows = contacts.len().div_ceil(GRID_COLUMNS);
    let row_constraints = vec![Constraint::Length(CELL_HEIGHT); rows];
    let row_areas = Layout::vertical(row_constraints).split(area);

    let col_constraints = vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS];

    for (row, row_area) in row_areas.iter().enumerate() {
        let cell_areas = Layout::horizontal(col_constraints.clone()).split(*row_area);

        for (col, cell_area) in cell_areas.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            if let Some(contact) = contacts.get(index) {
                render_cell(*cell_area, buf, contact, index == selected);
            }
        }
    }
}

fn render_cell(area: Rect, buf: &mut Buffer, contact: &Contact, is_selected: bool) {
    let color = theme::contact_color(&contact.color);

    let border_style = if is_selected {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let border_type = if is_selected {
        BorderType::Double
    } else {
        BorderType::Rounded
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let icon_line = Line::from(Span::styled(
        contact.icon.clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    let name_style = if is_selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let name_line = Line::from(Span::styled(contact.name.clone(), name_style));

    Paragraph::new(vec![icon_line, Line::default(), name_line])
        .alignment(Alignment::Center)
        .block(block)
        .render(area, buf);
}
