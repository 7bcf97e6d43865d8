//! Terminal versions of the confirmation prompt and toasts.

use colored::Colorize;
use session_core::{ConfirmPrompt, Notifier};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Asks on stdin; `--yes` answers every prompt up front
pub struct TerminalPrompt {
    assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl ConfirmPrompt for TerminalPrompt {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{} {} [y/N] ", format!("{}:", title).bold(), message);

        let mut line = String::new();
        let mut stdin = BufReader::new(tokio::io::stdin());
        match stdin.read_line(&mut line).await {
            Ok(_) => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                tracing::warn!("Could not read answer: {}", e);
                false
            }
        }
    }
}

/// Prints toasts to stderr so stdout stays clean for `--format json`
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}
