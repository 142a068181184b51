use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Standard 3-section layout: header, main, footer
pub fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area)
        .to_vec()
}

/// Main area: cards on the left, forms on the right
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area)
        .to_vec()
}

/// Forms column: create form above update form, each sized to its fields
pub fn create_forms_layout(area: Rect, create_fields: u16, update_fields: u16) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(create_fields + 3), // Fields, button, borders
            Constraint::Length(update_fields + 3),
            Constraint::Min(0),
        ])
        .split(area)
        .to_vec()
}
