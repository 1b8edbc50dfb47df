//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the static checklist and the business rules live here. Dependencies flow inward.

pub mod checklist;
pub mod entities;
pub mod errors;
pub mod replies;
pub mod scoring;

pub use checklist::{CHECKLIST, ChecklistItem, ChecklistQuestion, ChecklistSection};
pub use entities::{
    ChatContext, ChatMessage, EvaluationResult, ExtractedContent, FileKind, ItemResult, Notice,
    NoticeLevel, QualitativeRating, QuestionResult, SectionResult, Sender, Step, UploadedFile,
};
pub use errors::DomainError;
