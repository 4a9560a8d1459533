use crate::domain::TemplateEvaluator;

/// Application context holding dependencies for command execution.
pub struct AppContext<E: TemplateEvaluator> {
    evaluator: E,
}

impl<E: TemplateEvaluator> AppContext<E> {
    /// Create a new application context.
    pub fn new(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Get a reference to the template evaluator.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}
