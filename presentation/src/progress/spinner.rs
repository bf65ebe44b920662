//! Spinner shown while waiting on slow adapters

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

/// Terminal spinner; hidden when `quiet`
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn start(message: impl Into<String>, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        bar.set_style(Self::style());
        bar.set_message(message.into());
        bar.enable_steady_tick(TICK);
        Self { bar }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn succeed(self, message: impl AsRef<str>) {
        self.bar
            .finish_with_message(format!("{} {}", "v".green(), message.as_ref()));
    }

    pub fn fail(self, message: impl AsRef<str>) {
        self.bar
            .finish_with_message(format!("{} {}", "x".red(), message.as_ref()));
    }

    /// Remove the spinner line without a final message
    pub fn clear(self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_spinner_finishes() {
        let spinner = Spinner::start("Carregando perguntas...", true);
        assert!(spinner.bar.is_hidden());
        spinner.succeed("ok");
    }
}
