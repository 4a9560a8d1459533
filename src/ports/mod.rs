mod template_store;

pub use template_store::TemplateStore;
