use crate::domain::AppError;

/// Port for looking up caller-supplied template sources.
pub trait TemplateStore {
    /// Load the source text of the template named `id`.
    ///
    /// Returns `AppError::TemplateNotFound` when no such template exists.
    fn load(&self, id: &str) -> Result<String, AppError>;
}
