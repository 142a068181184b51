// Output formatting helpers for CLI commands

use userboard_service::User;

/// Print a status message: "  Status message"
pub fn status(action: &str, message: &str) {
    eprintln!("\x1b[1;36m{:>12}\x1b[0m {}", action, message);
}

/// Print a success message with checkmark
pub fn success(message: &str) {
    eprintln!("\x1b[1;32m  \u{2713}\x1b[0m {}", message);
}

/// Print an info message
pub fn info(message: &str) {
    eprintln!("\x1b[36m  i\x1b[0m {}", message);
}

/// Print users as aligned columns on stdout
pub fn user_table(users: &[User]) {
    println!("\x1b[1m{:>6}  {:<24}  {}\x1b[0m", "ID", "NAME", "EMAIL");
    for user in users {
        println!("{}", user_row(user));
    }
}

pub fn user_row(user: &User) -> String {
    format!("{:>6}  {:<24}  {}", user.id, user.name, user.email)
}
