//! Terminal front-end: banner, progress bars and the inquire menus.

pub mod banner;
pub mod progress;
pub mod tui;

/// Prints the VIVI banner and installs the prompt theme. Call once at startup.
pub fn init_ui() {
    banner::print_welcome();
    tui::apply_theme();
}
