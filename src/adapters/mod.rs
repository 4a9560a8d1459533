pub mod template;
pub mod template_filesystem;

pub use template::MinijinjaTemplateEvaluator;
pub use template_filesystem::FilesystemTemplateStore;
