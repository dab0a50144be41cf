//! Line-oriented terminal helpers: screen clearing, styled output, and
//! blocking prompts. Styling is cosmetic only and never affects control
//! flow.

use std::io::{self, BufRead, Write};

use crossterm::style::Stylize;
use crossterm::{cursor, execute, terminal};

/// Clear the screen and park the cursor top-left. Failures (e.g. a
/// redirected stdout) are ignored.
pub fn clear_screen() {
    let _ = execute!(
        io::stdout(),
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    );
}

/// Print `message` without a newline, flush, and read one trimmed line.
/// End-of-input reads as an empty string, which every prompt in the app
/// treats as "cancel".
pub fn prompt(message: &str) -> String {
    print!("{message}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(_) => line.trim().to_string(),
        Err(_) => String::new(),
    }
}

/// Block until the user presses Enter.
pub fn pause(message: &str) {
    let _ = prompt(message);
}

pub fn title(text: &str) {
    println!("{}", text.cyan().bold());
}

pub fn heading(text: &str) {
    println!("{}", text.bold());
}

pub fn info(text: &str) {
    println!("{}", text.cyan());
}

pub fn success(text: &str) {
    println!("{}", text.green());
}

pub fn notice(text: &str) {
    println!("{}", text.yellow());
}

pub fn error(text: &str) {
    println!("{}", text.red());
}
