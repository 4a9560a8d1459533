use std::collections::HashMap;

use crate::domain::AppError;
use crate::ports::TemplateStore;

/// In-memory template store for testing.
#[derive(Debug, Default)]
pub struct MemoryTemplateStore {
    templates: HashMap<String, String>,
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, id: &str, source: &str) -> Self {
        self.templates.insert(id.to_string(), source.to_string());
        self
    }
}

impl TemplateStore for MemoryTemplateStore {
    fn load(&self, id: &str) -> Result<String, AppError> {
        self.templates.get(id).cloned().ok_or_else(|| AppError::TemplateNotFound(id.to_string()))
    }
}
