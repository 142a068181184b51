use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::card::{UserCard, CARD_HEIGHT};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let users = app.directory.users();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Users ({})", users.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if users.is_empty() {
        let message = if app.directory.is_loaded() {
            "No users yet. Press 'a' to add one."
        } else {
            "Loading users..."
        };
        let empty_msg = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .wrap(Wrap { trim: true });
        frame.render_widget(empty_msg, inner);
        return;
    }

    let (start, count) = visible_window(users.len(), app.selected_index, inner.height);
    for (row, (index, user)) in users
        .iter()
        .enumerate()
        .skip(start)
        .take(count)
        .enumerate()
    {
        let card_area = Rect {
            x: inner.x,
            y: inner.y.saturating_add(row as u16 * CARD_HEIGHT),
            width: inner.width,
            height: CARD_HEIGHT,
        }
        .intersection(inner);
        let card = UserCard::new(user).selected(index == app.selected_index);
        frame.render_widget(card, card_area);
    }
}

/// First card index and number of cards to draw so the cursor stays visible
pub fn visible_window(len: usize, selected: usize, height: u16) -> (usize, usize) {
    let capacity = usize::from((height / CARD_HEIGHT).max(1));
    let start = if selected >= capacity {
        selected + 1 - capacity
    } else {
        0
    };
    let start = start.min(len);
    (start, capacity.min(len - start))
}
