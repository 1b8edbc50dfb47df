//! Session state: current step plus the files, content and result of the flow.
//!
//! Passed explicitly to the use cases; only the active flow mutates it.

use crate::domain::{
    ChatContext, DomainError, EvaluationResult, ExtractedContent, Step, UploadedFile,
};

#[derive(Debug, Default)]
pub struct Session {
    step: Step,
    files: Vec<UploadedFile>,
    content: Option<ExtractedContent>,
    result: Option<EvaluationResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn content(&self) -> Option<&ExtractedContent> {
        self.content.as_ref()
    }

    pub fn result(&self) -> Option<&EvaluationResult> {
        self.result.as_ref()
    }

    /// Appends in order. No de-duplication by name.
    pub(crate) fn push_files(&mut self, files: impl IntoIterator<Item = UploadedFile>) {
        self.files.extend(files);
    }

    pub(crate) fn remove_file(&mut self, index: usize) -> Result<UploadedFile, DomainError> {
        if index >= self.files.len() {
            return Err(DomainError::InvalidIndex(index));
        }
        Ok(self.files.remove(index))
    }

    /// Stores extracted content. Non-empty content moves the flow to evaluation.
    pub fn set_content(&mut self, content: ExtractedContent) {
        if !content.is_empty() {
            self.step = Step::Evaluate;
        }
        self.content = Some(content);
    }

    /// Stores the evaluation result and moves the flow to the report.
    pub fn set_result(&mut self, result: EvaluationResult) {
        self.result = Some(result);
        self.step = Step::Report;
    }

    /// Navigate to a step. Later steps need the output of the earlier ones.
    pub fn go_to(&mut self, step: Step) -> Result<(), DomainError> {
        let available = match step {
            Step::Upload => true,
            Step::Evaluate => self.content.as_ref().is_some_and(|c| !c.is_empty()),
            Step::Report => self.result.is_some(),
        };
        if !available {
            return Err(DomainError::StepUnavailable(step));
        }
        self.step = step;
        Ok(())
    }

    /// What the chat assistant sees.
    pub fn context(&self) -> ChatContext {
        ChatContext {
            step: self.step,
            has_files: !self.files.is_empty(),
            has_content: self.content.as_ref().is_some_and(|c| !c.is_empty()),
            has_results: self.result.is_some(),
        }
    }
}
