//! Notifier adapters. Colored terminal lines, and a recorder for tests.

use crate::domain::{Notice, NoticeLevel};
use crate::ports::NotifierPort;
use crossterm::ExecutableCommand;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{Write, stdout};
use std::sync::Mutex;
use tracing::{info, warn};

/// Neon Purple (#bc13fe).
const NEON_PURPLE: Color = Color::Rgb {
    r: 0xbc,
    g: 0x13,
    b: 0xfe,
};
/// Alert red (#ff3864).
const ALERT_RED: Color = Color::Rgb {
    r: 0xff,
    g: 0x38,
    b: 0x64,
};

/// Prints notices to stdout, bold title then description.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl NotifierPort for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Info => info!(title = %notice.title, "notice"),
            NoticeLevel::Error => warn!(title = %notice.title, "error notice"),
        }
        let color = match notice.level {
            NoticeLevel::Info => NEON_PURPLE,
            NoticeLevel::Error => ALERT_RED,
        };
        let mut out = stdout();
        let _ = out.execute(SetForegroundColor(color));
        let _ = out.execute(SetAttribute(Attribute::Bold));
        let _ = out.execute(Print(format!("● {}", notice.title)));
        let _ = out.execute(SetAttribute(Attribute::Reset));
        let _ = out.execute(ResetColor);
        let _ = out.execute(Print(format!("  {}\r\n", notice.description)));
        let _ = out.flush();
    }
}

/// Keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl NotifierPort for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(notice.clone());
    }
}
