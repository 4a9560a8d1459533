use crate::domain::AppError;
use crate::domain::parameters::{ResolvedConfig, TemplateOverride};

/// Capability for evaluating a caller-supplied template.
///
/// Keeps the template engine (e.g. minijinja) and template storage out of the
/// domain layer. Implementations receive the complete resolved record as the
/// variable context and return the rendered text unmodified.
pub trait TemplateEvaluator {
    fn evaluate(
        &self,
        template: &TemplateOverride,
        context: &ResolvedConfig,
    ) -> Result<String, AppError>;
}

impl<T: TemplateEvaluator + ?Sized> TemplateEvaluator for &T {
    fn evaluate(
        &self,
        template: &TemplateOverride,
        context: &ResolvedConfig,
    ) -> Result<String, AppError> {
        (**self).evaluate(template, context)
    }
}
