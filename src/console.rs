// Terminal frontend for the command-line host
use netcanvas::Frontend;
use parking_lot::Mutex;
use std::io::{self, BufRead, Write};

/// Prints alerts to stderr, answers prompts from a preset or stdin, and prints
/// the locations of external views instead of opening a browser.
pub struct ConsoleFrontend {
    base_url: String,
    preset: Mutex<Option<String>>,
}

impl ConsoleFrontend {
    pub fn new(base_url: &str, preset: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            preset: Mutex::new(preset),
        }
    }
}

impl Frontend for ConsoleFrontend {
    fn alert(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        if let Some(answer) = self.preset.lock().take() {
            return Some(answer);
        }

        print!("{} [{}] ", message, default);
        io::stdout().flush().ok()?;
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let answer = line.trim();
                if answer.is_empty() {
                    Some(default.to_string())
                } else {
                    Some(answer.to_string())
                }
            }
        }
    }

    fn open(&self, location: &str) {
        if location.starts_with('/') {
            println!("open {}{}", self.base_url, location);
        } else {
            println!("open {}", location);
        }
    }
}
