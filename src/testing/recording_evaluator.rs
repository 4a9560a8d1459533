use std::cell::RefCell;

use crate::domain::parameters::{ResolvedConfig, TemplateOverride};
use crate::domain::{AppError, TemplateEvaluator};

/// Evaluator returning fixed output and recording which templates were asked for.
pub struct RecordingEvaluator {
    output: String,
    calls: RefCell<Vec<String>>,
}

impl RecordingEvaluator {
    pub fn new(output: &str) -> Self {
        Self { output: output.to_string(), calls: RefCell::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl TemplateEvaluator for RecordingEvaluator {
    fn evaluate(
        &self,
        template: &TemplateOverride,
        _context: &ResolvedConfig,
    ) -> Result<String, AppError> {
        self.calls.borrow_mut().push(template.id().to_string());
        Ok(self.output.clone())
    }
}
