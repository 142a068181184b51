use crate::events::EventHandler;
use crate::ui;

use color_eyre::Result;
use ratatui::DefaultTerminal;

use std::sync::Arc;
use tracing::debug;

use userboard_service::{User, UserApi, UserDirectory, UserDraft};

// =============================================================================
// Application States
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Browse the user cards
    UserList,
    /// Fill in the create form
    CreateForm,
    /// Fill in the update form
    UpdateForm,
}

// =============================================================================
// Forms
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Create,
    Update,
}

impl FormKind {
    pub fn title(self) -> &'static str {
        match self {
            FormKind::Create => "Create User",
            FormKind::Update => "Update User",
        }
    }

    /// Label of the submit control
    pub fn submit_label(self) -> &'static str {
        match self {
            FormKind::Create => "Add User",
            FormKind::Update => "Update User",
        }
    }

    /// Placeholder text of each field, in tab order
    pub fn placeholders(self) -> &'static [&'static str] {
        match self {
            FormKind::Create => &["Name", "Email"],
            FormKind::Update => &["User Id", "New Name", "New Email"],
        }
    }

    fn state(self) -> AppState {
        match self {
            FormKind::Create => AppState::CreateForm,
            FormKind::Update => AppState::UpdateForm,
        }
    }
}

/// Text typed into one form, one buffer per placeholder
#[derive(Debug, Clone)]
pub struct FormState {
    pub kind: FormKind,
    pub values: Vec<String>,
    pub focused: usize,
}

impl FormState {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: vec![String::new(); kind.placeholders().len()],
            focused: 0,
        }
    }

    pub fn next_field(&mut self) {
        self.focused = (self.focused + 1) % self.values.len();
    }

    pub fn previous_field(&mut self) {
        self.focused = (self.focused + self.values.len() - 1) % self.values.len();
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(value) = self.values.get_mut(self.focused) {
            value.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(value) = self.values.get_mut(self.focused) {
            value.pop();
        }
    }

    pub fn value(&self, index: usize) -> &str {
        self.values.get(index).map_or("", String::as_str)
    }
}

// =============================================================================
// Application
// =============================================================================

pub struct App {
    pub state: AppState,
    pub title: String,
    pub directory: UserDirectory,
    pub selected_index: usize,
    pub form: Option<FormState>,
    pub should_quit: bool,
    mounted: bool,
}

impl App {
    pub fn new(api: Arc<dyn UserApi>, title: impl Into<String>) -> Self {
        Self {
            state: AppState::UserList,
            title: title.into(),
            directory: UserDirectory::new(api),
            selected_index: 0,
            form: None,
            should_quit: false,
            mounted: false,
        }
    }

    pub async fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            // The first list request goes out once the empty view is on screen
            if !self.mounted {
                self.mount();
            }

            self.handle_events()?;
            self.process_api_events();
        }
        Ok(())
    }

    pub fn mount(&mut self) {
        self.mounted = true;
        self.directory.refresh();
    }

    /// Apply finished requests and keep the cursor on a card
    pub fn process_api_events(&mut self) {
        if self.directory.process_events() > 0 {
            self.clamp_selection();
        }
    }

    pub fn clamp_selection(&mut self) {
        let len = self.directory.users().len();
        if self.selected_index >= len {
            self.selected_index = len.saturating_sub(1);
        }
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected_index < self.directory.users().len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    pub fn quit(&mut self) {
        debug!("quit requested");
        self.should_quit = true;
    }

    pub fn refresh(&mut self) {
        self.directory.refresh();
    }

    /// Get the user under the cursor, if any
    pub fn selected_user(&self) -> Option<&User> {
        self.directory.users().get(self.selected_index)
    }

    // =========================================================================
    // Forms
    // =========================================================================

    pub fn open_create_form(&mut self) {
        self.open_form(FormState::new(FormKind::Create));
    }

    /// Open the update form with the selected card's id filled in
    pub fn open_update_form(&mut self) {
        let mut form = FormState::new(FormKind::Update);
        if let Some(user) = self.selected_user() {
            form.values[0] = user.id.to_string();
            form.focused = 1;
        }
        self.open_form(form);
    }

    fn open_form(&mut self, form: FormState) {
        debug!(form = form.kind.title(), "form opened");
        self.state = form.kind.state();
        self.form = Some(form);
    }

    pub fn cancel_form(&mut self) {
        debug!("form cancelled");
        self.form = None;
        self.state = AppState::UserList;
    }

    /// Send the form's request as typed and return to the list
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.take() else {
            return;
        };
        self.state = AppState::UserList;
        debug!(form = form.kind.title(), fields = ?form.values, "form submitted");

        match form.kind {
            FormKind::Create => {
                let draft = UserDraft::new(form.value(0), form.value(1));
                self.directory.create(draft);
            }
            FormKind::Update => {
                let draft = UserDraft::new(form.value(1), form.value(2));
                self.directory.update(form.value(0), draft);
            }
        }
    }

    pub fn form_push_char(&mut self, c: char) {
        if let Some(form) = &mut self.form {
            form.push_char(c);
        }
    }

    pub fn form_pop_char(&mut self) {
        if let Some(form) = &mut self.form {
            form.pop_char();
        }
    }

    pub fn form_next_field(&mut self) {
        if let Some(form) = &mut self.form {
            form.next_field();
        }
    }

    pub fn form_previous_field(&mut self) {
        if let Some(form) = &mut self.form {
            form.previous_field();
        }
    }

    // =========================================================================
    // Delete
    // =========================================================================

    /// Delete the card under the cursor
    pub fn delete_selected(&mut self) {
        match self.selected_user().map(|u| u.id.to_string()) {
            Some(id) => self.directory.delete(id),
            None => debug!("delete ignored, no user selected"),
        }
    }
}
