// User Card
// Stateless widget showing one record's id, name and email

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use userboard_service::User;

/// Rows taken by one card: three text lines plus the border
pub const CARD_HEIGHT: u16 = 5;

pub fn card_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn border_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn id_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub fn name_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

pub fn email_style() -> Style {
    Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC)
}

pub struct UserCard<'a> {
    user: &'a User,
    selected: bool,
}

impl<'a> UserCard<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            user,
            selected: false,
        }
    }

    /// Highlight the border when the list cursor is on this card
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for UserCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style(self.selected))
            .style(card_style());

        let lines = vec![
            Line::from(Span::styled(format!("Id: {}", self.user.id), id_style())),
            Line::from(Span::styled(self.user.name.as_str(), name_style())),
            Line::from(Span::styled(self.user.email.as_str(), email_style())),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
