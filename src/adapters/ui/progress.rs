//! ProgressPort adapters: indicatif bar for the terminal, recorder for tests.

use crate::ports::{Progress, ProgressPort};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

const BAR_TEMPLATE: &str = "{spinner:.magenta} {msg:40} [{bar:30.magenta/cyan}] {pos}/{len}";

/// One bar per run: created on the first update, finished when `done == total`.
#[derive(Default)]
pub struct TerminalProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl TerminalProgress {
    pub fn new() -> Self {
        Self::default()
    }

    fn new_bar(total: usize) -> ProgressBar {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::with_template(BAR_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        bar.enable_steady_tick(Duration::from_millis(120));
        bar
    }
}

impl ProgressPort for TerminalProgress {
    fn report(&self, progress: &Progress) {
        let mut slot = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        let bar = slot.get_or_insert_with(|| Self::new_bar(progress.total));
        bar.set_message(progress.label.clone());
        bar.set_position(progress.done as u64);
        if progress.is_complete() {
            bar.finish_with_message(format!("{} ({:.0}%)", progress.label, progress.fraction() * 100.0));
            *slot = None;
        }
    }
}

impl Drop for TerminalProgress {
    fn drop(&mut self) {
        // a failed run leaves an unfinished bar behind
        if let Ok(mut slot) = self.bar.lock() {
            if let Some(bar) = slot.take() {
                bar.abandon();
            }
        }
    }
}

/// Keeps every update in memory.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    updates: Mutex<Vec<Progress>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<Progress> {
        self.updates
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl ProgressPort for RecordingProgress {
    fn report(&self, progress: &Progress) {
        self.updates
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(progress.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_progress_resets_after_completion() {
        let progress = TerminalProgress::new();
        for done in 1..=3 {
            progress.report(&Progress {
                label: "Extraindo".into(),
                done,
                total: 3,
            });
        }
        assert!(progress.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_fraction() {
        let p = Progress {
            label: String::new(),
            done: 2,
            total: 8,
        };
        assert_eq!(p.fraction(), 0.25);
        assert!(!p.is_complete());
    }
}
