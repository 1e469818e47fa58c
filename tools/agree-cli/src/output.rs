//! Output formatting for the CLI.

use std::cell::Cell;
use std::time::Duration;

use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};

use crate::theme::Theme;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    theme: Cell<Theme>,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            theme: Cell::new(Theme::default()),
            term: Term::stderr(),
        }
    }

    /// Switch the accent palette.
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
    }

    /// Palette in use.
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", self.theme().accent().underlined().apply_to(msg));
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a product or cart line: glyph and name, a right-aligned price,
    /// then an optional dimmed note.
    pub fn line(&self, image: &str, name: &str, price: &str, note: Option<&str>) {
        if self.json {
            return;
        }
        let theme = self.theme();
        let width = self.term_width().clamp(40, 80).saturating_sub(20);
        println!(
            "  {} {:<width$} {}",
            image,
            name,
            theme.price().apply_to(format!("{:>10}", price)),
            width = width
        );
        if let Some(note) = note.filter(|n| !n.is_empty()) {
            println!("     {}", theme.muted().apply_to(note));
        }
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Get terminal width.
    pub fn term_width(&self) -> usize {
        self.term.size().1 as usize
    }
}

/// Cart badge as shown on the home screen's cart button.
pub fn cart_badge(count: Option<String>) -> String {
    match count {
        Some(count) => format!("🛒 {}", style(count).bold().red()),
        None => "🛒".to_string(),
    }
}

/// Format a unix timestamp as local time.
pub fn format_timestamp(secs: i64) -> String {
    chrono::DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| secs.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_switch() {
        let output = Output::new(false, false);
        assert_eq!(output.theme(), Theme::Light);
        output.set_theme(Theme::Dark);
        assert_eq!(output.theme(), Theme::Dark);
    }

    #[test]
    fn test_format_timestamp_fallback() {
        assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
        assert!(!format_timestamp(0).is_empty());
    }
}
