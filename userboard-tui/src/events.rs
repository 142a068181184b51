use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::{App, AppState};

pub trait EventHandler {
    fn handle_events(&mut self) -> Result<()>;
    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()>;
}

impl EventHandler for App {
    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)?
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        match self.state {
            AppState::UserList => match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                KeyCode::Up | KeyCode::Char('k') => self.move_up(),
                KeyCode::Down | KeyCode::Char('j') => self.move_down(),
                KeyCode::Char('r') => self.refresh(),
                KeyCode::Char('a') => self.open_create_form(),
                KeyCode::Char('u') => self.open_update_form(),
                KeyCode::Char('d') => self.delete_selected(),
                _ => {}
            },
            AppState::CreateForm | AppState::UpdateForm => match key_event.code {
                KeyCode::Esc => self.cancel_form(),
                KeyCode::Enter => self.submit_form(),
                KeyCode::Tab | KeyCode::Down => self.form_next_field(),
                KeyCode::BackTab | KeyCode::Up => self.form_previous_field(),
                KeyCode::Backspace => self.form_pop_char(),
                KeyCode::Char(c) => self.form_push_char(c),
                _ => {}
            },
        }
        Ok(())
    }
}
