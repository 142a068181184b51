pub mod card;
pub mod components;
pub mod form;
pub mod layout;
pub mod user_list;

use ratatui::Frame;

use crate::app::{App, AppState};

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = layout::create_layout(frame.area());
    components::render_header(&app.title, app.directory.is_busy(), frame, chunks[0]);

    let main_chunks = layout::create_main_layout(chunks[1]);
    user_list::render(app, frame, main_chunks[0]);
    form::render_forms(app, frame, main_chunks[1]);

    components::render_footer(footer_text(app.state), frame, chunks[2]);
}

fn footer_text(state: AppState) -> &'static str {
    match state {
        AppState::UserList => {
            "j/k: Navigate | a: Add | u: Update | d: Delete User | r: Refresh | q: Quit"
        }
        AppState::CreateForm | AppState::UpdateForm => {
            "Tab: Next field | Enter: Submit | Esc: Cancel"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{app_with, press, settle, type_text};

    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[tokio::test]
    async fn test_fetches_and_displays_users() {
        let mut app = app_with(&[
            ("John Doe", "john@example.com"),
            ("Jane Doe", "jane@example.com"),
            ("Bob Roe", "bob@example.com"),
        ]);
        app.mount();
        settle(&mut app).await;

        let screen = draw(&app);
        assert_eq!(screen.matches("Id: ").count(), 3);
        for (id, name, email) in [
            (1, "John Doe", "john@example.com"),
            (2, "Jane Doe", "jane@example.com"),
            (3, "Bob Roe", "bob@example.com"),
        ] {
            assert!(screen.contains(&format!("Id: {}", id)));
            assert!(screen.contains(name));
            assert!(screen.contains(email));
        }
        assert!(screen.contains("Users (3)"));
    }

    #[tokio::test]
    async fn test_scrolling_reveals_cards_below_the_fold() {
        let seeded: Vec<(String, String)> = (1..=8)
            .map(|i| (format!("Person {}", i), format!("person{}@example.com", i)))
            .collect();
        let users: Vec<(&str, &str)> = seeded
            .iter()
            .map(|(name, email)| (name.as_str(), email.as_str()))
            .collect();
        let mut app = app_with(&users);
        app.mount();
        settle(&mut app).await;

        let screen = draw(&app);
        assert!(screen.contains("Users (8)"));
        assert!(screen.contains("person1@example.com"));
        assert!(!screen.contains("person8@example.com"));

        for _ in 0..7 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.selected_index, 7);

        let screen = draw(&app);
        assert!(screen.contains("Id: 8"));
        assert!(screen.contains("Person 8"));
        assert!(screen.contains("person8@example.com"));
        assert!(!screen.contains("person1@example.com"));
    }

    #[test]
    fn test_shows_loading_before_first_response() {
        let app = app_with(&[("John Doe", "john@example.com")]);
        let screen = draw(&app);

        assert!(screen.contains("Loading users..."));
        assert_eq!(screen.matches("Id: ").count(), 0);
    }

    #[tokio::test]
    async fn test_shows_empty_message() {
        let mut app = app_with(&[]);
        app.mount();
        settle(&mut app).await;

        assert!(draw(&app).contains("No users yet."));
    }

    #[test]
    fn test_forms_are_visible() {
        let app = app_with(&[]);
        let screen = draw(&app);

        for text in [
            "Name",
            "Email",
            "User Id",
            "New Name",
            "New Email",
            "Add User",
            "Update User",
            "Delete User",
        ] {
            assert!(screen.contains(text), "missing {:?}", text);
        }
    }

    #[tokio::test]
    async fn test_creates_a_new_user() {
        let mut app = app_with(&[]);
        app.mount();
        settle(&mut app).await;

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "New User");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "new@example.com");
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        let screen = draw(&app);
        assert!(screen.contains("New User"));
        assert!(screen.contains("new@example.com"));
    }

    #[tokio::test]
    async fn test_updates_a_user() {
        let mut app = app_with(&[("Old User", "old@example.com")]);
        app.mount();
        settle(&mut app).await;
        assert!(draw(&app).contains("Old User"));

        press(&mut app, KeyCode::Char('u'));
        type_text(&mut app, "Updated User");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "updated@example.com");
        press(&mut app, KeyCode::Enter);
        settle(&mut app).await;

        let screen = draw(&app);
        assert!(screen.contains("Updated User"));
        assert!(!screen.contains("Old User"));
    }

    #[tokio::test]
    async fn test_deletes_a_user() {
        let mut app = app_with(&[("User to Delete", "delete@example.com")]);
        app.mount();
        settle(&mut app).await;
        assert!(draw(&app).contains("User to Delete"));

        press(&mut app, KeyCode::Char('d'));
        settle(&mut app).await;

        assert!(!draw(&app).contains("User to Delete"));
    }

    #[test]
    fn test_open_form_shows_typed_text() {
        let mut app = app_with(&[]);
        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Draft Name");

        let screen = draw(&app);
        assert!(screen.contains("Draft Name_"));
        assert!(screen.contains("Enter: Submit"));
    }
}
