mod fixtures;
mod memory_template_store;
mod recording_evaluator;

pub use fixtures::resolved_config;
pub use memory_template_store::MemoryTemplateStore;
pub use recording_evaluator::RecordingEvaluator;
