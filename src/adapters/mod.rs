//! Infrastructure adapters. Implement outbound ports.
//!
//! Filesystem, judges, report exports, terminal. Map errors to DomainError.

pub mod clock;
pub mod files;
pub mod judge;
pub mod notifier;
pub mod report;
pub mod speech;
pub mod ui;
