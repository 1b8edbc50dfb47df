//! Report export adapters: Markdown file store, logging mailer, terminal presentation.

pub mod log_mailer;
pub mod markdown_store;
pub mod terminal_display;

pub use log_mailer::LogMailer;
pub use markdown_store::MarkdownReportStore;
pub use terminal_display::TerminalDisplay;
