use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, FormKind, FormState};
use crate::ui::layout;

/// Both forms are always on screen; the open one is highlighted and editable
pub fn render_forms(app: &App, frame: &mut Frame, area: Rect) {
    let create_fields = FormKind::Create.placeholders().len() as u16;
    let update_fields = FormKind::Update.placeholders().len() as u16;
    let chunks = layout::create_forms_layout(area, create_fields, update_fields);

    for (kind, chunk) in [(FormKind::Create, chunks[0]), (FormKind::Update, chunks[1])] {
        let active = app.form.as_ref().filter(|form| form.kind == kind);
        render_form(kind, active, frame, chunk);
    }
}

fn render_form(kind: FormKind, form: Option<&FormState>, frame: &mut Frame, area: Rect) {
    let active = form.is_some();
    let label_style = if active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut lines: Vec<Line> = kind
        .placeholders()
        .iter()
        .enumerate()
        .map(|(i, placeholder)| {
            let focused = form.is_some_and(|f| f.focused == i);
            let indicator = if focused { "> " } else { "  " };
            let value = form.map(|f| f.value(i)).unwrap_or_default();
            let value_display = if focused {
                format!("{}_", value)
            } else {
                value.to_string()
            };
            let value_style = if focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(vec![
                Span::styled(indicator, label_style),
                Span::styled(format!("{:<10}", placeholder), label_style),
                Span::styled(value_display, value_style),
            ])
        })
        .collect();

    let button_style = if active {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(Span::styled(
        format!("  [ {} ]", kind.submit_label()),
        button_style,
    )));

    let border_style = if active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(kind.title())
            .border_style(border_style),
    );
    frame.render_widget(widget, area);
}
