use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::warn;

use crate::domain::AppError;
use crate::ports::TemplateStore;

/// Template store rooted at a directory; identifiers are relative paths in it,
/// e.g. `site/ntp.conf.j2`.
#[derive(Debug, Clone)]
pub struct FilesystemTemplateStore {
    root: PathBuf,
}

impl FilesystemTemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, id: &str) -> Result<PathBuf, AppError> {
        let relative = Path::new(id);
        let confined = !id.is_empty()
            && relative.components().all(|component| matches!(component, Component::Normal(_)));
        if !confined {
            warn!(template = id, "template identifier escapes the templates directory");
            return Err(AppError::TemplateRender {
                template: id.to_string(),
                reason: "template identifiers must be relative paths inside the templates directory"
                    .to_string(),
            });
        }
        Ok(self.root.join(relative))
    }
}

impl TemplateStore for FilesystemTemplateStore {
    fn load(&self, id: &str) -> Result<String, AppError> {
        let path = self.resolve(id)?;
        match fs::read_to_string(&path) {
            Ok(source) => Ok(source),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(AppError::TemplateNotFound(id.to_string()))
            }
            Err(err) => Err(AppError::Io(err)),
        }
    }
}
