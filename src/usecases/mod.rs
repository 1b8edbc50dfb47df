//! Application use cases. Orchestrate domain logic via ports.

pub mod chat_assistant;
pub mod evaluation_service;
pub mod extraction_service;
pub mod intake_service;
pub mod report_presenter;
pub mod report_service;
pub mod session;

pub use chat_assistant::{ChatAssistant, ChatSettings};
pub use evaluation_service::EvaluationService;
pub use extraction_service::ExtractionService;
pub use intake_service::{IntakeReport, IntakeService};
pub use report_service::ReportService;
pub use session::Session;
